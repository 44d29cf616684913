//! Timed Emirates NBD onboarding sequence.
//!
//! Mounting schedules the first step. Each fired step marks itself done and
//! schedules the next; after the last one the sequence is complete and
//! `Finish` returns to the dashboard.

use std::time::Duration;

use nour_core::catalog::{IntegrationStep, ENBD_STEPS};
use nour_core::Screen;
use tracing::{debug, info};

use crate::command::{Command, TimerKey};

pub const STEP_COUNT: usize = ENBD_STEPS.len();

/// Step durations of the fixture sequence.
pub fn default_durations() -> [Duration; STEP_COUNT] {
    ENBD_STEPS.map(|step| Duration::from_millis(step.duration_ms))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnbdEvent {
    /// The timer for step `index` fired.
    StepElapsed(u8),
    Finish,
}

#[derive(Debug, Clone)]
pub struct EnbdFlow {
    durations: [Duration; STEP_COUNT],
    /// Number of steps completed.
    completed: usize,
}

impl EnbdFlow {
    pub fn new(durations: [Duration; STEP_COUNT]) -> Self {
        Self {
            durations,
            completed: 0,
        }
    }

    /// Commands to run when the screen is mounted.
    pub fn start(&self) -> Vec<Command> {
        self.schedule(0)
    }

    pub fn steps(&self) -> &'static [IntegrationStep] {
        &ENBD_STEPS
    }

    /// Zero-based index of the step in progress, `None` once complete.
    pub fn current_step(&self) -> Option<usize> {
        (self.completed < STEP_COUNT).then_some(self.completed)
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn is_complete(&self) -> bool {
        self.completed == STEP_COUNT
    }

    pub fn progress_percent(&self) -> f64 {
        self.completed as f64 / STEP_COUNT as f64 * 100.0
    }

    pub fn apply(&mut self, event: EnbdEvent) -> Vec<Command> {
        match event {
            EnbdEvent::StepElapsed(index) => {
                if self.is_complete() || usize::from(index) != self.completed {
                    debug!(index, completed = self.completed, "out-of-order step ignored");
                    return Vec::new();
                }
                self.completed += 1;
                info!(step = ENBD_STEPS[usize::from(index)].label, "enbd step done");
                self.schedule(self.completed)
            }
            EnbdEvent::Finish if self.is_complete() => vec![Command::Navigate(Screen::Dashboard)],
            EnbdEvent::Finish => Vec::new(),
        }
    }

    fn schedule(&self, index: usize) -> Vec<Command> {
        match (self.durations.get(index), u8::try_from(index)) {
            (Some(&after), Ok(key)) => vec![Command::Schedule {
                key: TimerKey::EnbdStep(key),
                after,
            }],
            _ => Vec::new(),
        }
    }
}

impl Default for EnbdFlow {
    fn default() -> Self {
        Self::new(default_durations())
    }
}
