//! Cross-currency transfer with a staged progress animation.

use std::time::Duration;

use nour_core::catalog::{currency, Currency, CURRENCIES, TRANSFER_STAGES};
use serde::Serialize;
use tracing::{debug, info};

use crate::command::{Command, TimerKey};

/// Tunables of the transfer screen.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferSettings {
    pub tick: Duration,
    pub exchange_rate: f64,
    pub fee_rate: f64,
    pub default_amount: String,
}

impl Default for TransferSettings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(1500),
            exchange_rate: 3.67,
            fee_rate: 0.002,
            default_amount: "1000".to_string(),
        }
    }
}

/// Converted amount and fee for the current input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    pub amount: f64,
    pub converted: f64,
    pub fee: f64,
}

impl Quote {
    /// Two-decimal rendering of `(converted, fee)`.
    pub fn display(&self) -> (String, String) {
        (format!("{:.2}", self.converted), format!("{:.2}", self.fee))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferEvent {
    SetFrom(String),
    SetTo(String),
    SetAmount(String),
    Transfer,
    Tick,
}

#[derive(Debug, Clone)]
pub struct TransferFlow {
    settings: TransferSettings,
    from: &'static Currency,
    to: &'static Currency,
    amount: String,
    stage: usize,
    processing: bool,
}

impl TransferFlow {
    pub fn new(settings: TransferSettings) -> Self {
        let amount = settings.default_amount.clone();
        Self {
            settings,
            from: &CURRENCIES[0],
            to: &CURRENCIES[1],
            amount,
            stage: 0,
            processing: false,
        }
    }

    pub fn currencies(&self) -> &'static [Currency] {
        &CURRENCIES
    }

    pub fn stages(&self) -> &'static [&'static str] {
        &TRANSFER_STAGES
    }

    pub fn from(&self) -> &'static Currency {
        self.from
    }

    pub fn to(&self) -> &'static Currency {
        self.to
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn stage(&self) -> &'static str {
        TRANSFER_STAGES[self.stage]
    }

    pub fn stage_index(&self) -> usize {
        self.stage
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn is_confirmed(&self) -> bool {
        self.stage + 1 == TRANSFER_STAGES.len()
    }

    /// The transfer button is disabled while processing and once confirmed.
    pub fn can_transfer(&self) -> bool {
        !self.processing && !self.is_confirmed()
    }

    pub fn progress_percent(&self) -> f64 {
        (self.stage + 1) as f64 / TRANSFER_STAGES.len() as f64 * 100.0
    }

    /// `None` when the amount is not a number. An empty amount quotes zero.
    pub fn quote(&self) -> Option<Quote> {
        let text = self.amount.trim();
        let amount = if text.is_empty() { 0.0 } else { text.parse::<f64>().ok()? };
        if !amount.is_finite() {
            return None;
        }
        Some(Quote {
            amount,
            converted: amount * self.settings.exchange_rate,
            fee: amount * self.settings.fee_rate,
        })
    }

    pub fn apply(&mut self, event: TransferEvent) -> Vec<Command> {
        match event {
            TransferEvent::SetFrom(code) => match currency(&code) {
                Ok(c) => self.from = c,
                Err(err) => debug!(%err, "from currency ignored"),
            },
            TransferEvent::SetTo(code) => match currency(&code) {
                Ok(c) => self.to = c,
                Err(err) => debug!(%err, "to currency ignored"),
            },
            TransferEvent::SetAmount(amount) => self.amount = amount,
            TransferEvent::Transfer => {
                if self.can_transfer() {
                    info!(from = self.from.code, to = self.to.code, amount = %self.amount, "transfer started");
                    self.processing = true;
                    return self.next_tick();
                }
            }
            TransferEvent::Tick => {
                if !self.processing {
                    return Vec::new();
                }
                self.stage += 1;
                if self.is_confirmed() {
                    self.processing = false;
                    info!("transfer confirmed");
                } else {
                    return self.next_tick();
                }
            }
        }
        Vec::new()
    }

    fn next_tick(&self) -> Vec<Command> {
        vec![Command::Schedule {
            key: TimerKey::TransferTick,
            after: self.settings.tick,
        }]
    }
}

impl Default for TransferFlow {
    fn default() -> Self {
        Self::new(TransferSettings::default())
    }
}
