//! Per-screen cancellable timers.
//!
//! A [`TimerScope`] belongs to exactly one mounted screen. Each scheduled
//! timer is a sleeping tokio task that posts an [`Envelope`] when it wakes.
//! Cancelling a timer aborts its task; dropping the scope cancels every
//! timer it still owns, so a replaced screen can never be woken again.

use std::collections::HashMap;
use std::fmt::Debug;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::bus::{Envelope, EventSender, MountId};
use crate::error::{Result, RuntimeError};

/// Handle to one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

pub struct TimerScope<K> {
    mount: MountId,
    sender: EventSender<K>,
    shutdown_tx: watch::Sender<bool>,
    tasks: HashMap<TimerHandle, JoinHandle<()>>,
    next_handle: u64,
}

impl<K> TimerScope<K>
where
    K: Debug + Send + 'static,
{
    pub fn new(mount: MountId, sender: EventSender<K>) -> Self {
        let (shutdown_tx, _shutdown_rx) = watch::channel(false);
        Self {
            mount,
            sender,
            shutdown_tx,
            tasks: HashMap::new(),
            next_handle: 0,
        }
    }

    pub fn mount(&self) -> MountId {
        self.mount
    }

    /// Deliver `key` after `after`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, key: K, after: Duration) -> Result<TimerHandle> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| RuntimeError::NoRuntime)?;
        self.prune();

        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;

        debug!(mount = %self.mount, ?key, ?after, "timer scheduled");
        let envelope = Envelope { mount: self.mount, key };
        let sender = self.sender.clone();
        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let task = runtime.spawn(async move {
            tokio::select! {
                _ = shutdown_rx.changed() => {}
                _ = tokio::time::sleep(after) => {
                    if sender.send(envelope).await.is_err() {
                        trace!("timer fired after the bus closed");
                    }
                }
            }
        });
        self.tasks.insert(handle, task);
        Ok(handle)
    }

    /// Cancel one timer. Returns whether it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.tasks.remove(&handle) {
            Some(task) => {
                let pending = !task.is_finished();
                task.abort();
                pending
            }
            None => false,
        }
    }

    /// Cancel every timer of this scope.
    pub fn cancel_all(&mut self) {
        let _ = self.shutdown_tx.send(true);
        let count = self.tasks.len();
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
        if count > 0 {
            debug!(mount = %self.mount, count, "timers cancelled");
        }
        // Later schedules on this scope must still work.
        let (shutdown_tx, _shutdown_rx) = watch::channel(false);
        self.shutdown_tx = shutdown_tx;
    }

    /// Number of timers that have not fired yet.
    pub fn pending(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }

    fn prune(&mut self) {
        self.tasks.retain(|_, task| !task.is_finished());
    }
}

impl<K> Drop for TimerScope<K> {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
