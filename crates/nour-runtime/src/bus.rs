//! Event bus carrying fired timers back to the shell.
//!
//! Every envelope is stamped with the [`MountId`] of the screen instance
//! that scheduled it, so the shell can tell a timer of the current screen
//! from one left over by a screen that has since been replaced.

use std::fmt;

use tokio::sync::mpsc;

use crate::error::{Result, RuntimeError};

/// Default channel capacity. A screen has at most a handful of timers.
pub const DEFAULT_CAPACITY: usize = 64;

/// Identity of one mounted screen instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MountId(pub u64);

impl MountId {
    pub fn next(self) -> Self {
        MountId(self.0 + 1)
    }
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mount-{}", self.0)
    }
}

/// A fired timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<K> {
    pub mount: MountId,
    pub key: K,
}

/// Sending half, held by timer tasks.
#[derive(Debug)]
pub struct EventSender<K> {
    tx: mpsc::Sender<Envelope<K>>,
}

impl<K> Clone for EventSender<K> {
    fn clone(&self) -> Self {
        Self { tx: self.tx.clone() }
    }
}

impl<K> EventSender<K> {
    pub async fn send(&self, envelope: Envelope<K>) -> Result<()> {
        self.tx
            .send(envelope)
            .await
            .map_err(|_| RuntimeError::ChannelClosed)
    }
}

/// Receiving half, owned by the shell.
#[derive(Debug)]
pub struct EventBus<K> {
    tx: mpsc::Sender<Envelope<K>>,
    rx: mpsc::Receiver<Envelope<K>>,
}

impl<K> EventBus<K> {
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(capacity);
        Self { tx, rx }
    }

    pub fn sender(&self) -> EventSender<K> {
        EventSender { tx: self.tx.clone() }
    }

    /// Wait for the next envelope.
    pub async fn recv(&mut self) -> Result<Envelope<K>> {
        self.rx.recv().await.ok_or(RuntimeError::ChannelClosed)
    }

    /// Take an envelope that has already arrived, if any.
    pub fn try_recv(&mut self) -> Option<Envelope<K>> {
        self.rx.try_recv().ok()
    }
}

impl<K> Default for EventBus<K> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
