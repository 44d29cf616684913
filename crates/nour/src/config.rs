//! Application configuration.

use std::path::Path;
use std::time::Duration;

use nour_core::Screen;
use nour_flows::enbd::STEP_COUNT;
use nour_flows::wallet::PIN_LENGTH;
use nour_flows::TransferSettings;
use serde::Deserialize;

use crate::error::{AppError, Result};

/// Configuration for the [`App`](crate::App).
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Screen shown at start-up. Screens behind the auth gate fall back to
    /// sign-up.
    pub initial_screen: Screen,
    /// Delay between receiving a file and running the validator.
    pub validation_delay_ms: u64,
    /// Probability that the simulated validator accepts a document.
    pub validation_success_rate: f64,
    /// PIN that unlocks the wallet.
    pub wallet_pin: String,
    /// Duration of each ENBD onboarding step.
    pub enbd_step_durations_ms: [u64; STEP_COUNT],
    pub transfer_tick_ms: u64,
    pub transfer_exchange_rate: f64,
    pub transfer_fee_rate: f64,
    pub default_transfer_amount: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_screen: Screen::SignUp,
            validation_delay_ms: 2000,
            validation_success_rate: 0.7,
            wallet_pin: "1234".to_string(),
            enbd_step_durations_ms: [1000, 1500, 2000, 1500, 1000],
            transfer_tick_ms: 1500,
            transfer_exchange_rate: 3.67,
            transfer_fee_rate: 0.002,
            default_transfer_amount: "1000".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse and check a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AppConfig =
            serde_json::from_str(json).map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.validation_success_rate) {
            return Err(AppError::Config(format!(
                "validation_success_rate must be within [0, 1], got {}",
                self.validation_success_rate
            )));
        }
        if self.wallet_pin.chars().count() != PIN_LENGTH {
            return Err(AppError::Config(format!(
                "wallet_pin must have {PIN_LENGTH} characters"
            )));
        }
        if !self.transfer_exchange_rate.is_finite() || !self.transfer_fee_rate.is_finite() {
            return Err(AppError::Config("transfer rates must be finite".to_string()));
        }
        Ok(())
    }

    pub fn validation_delay(&self) -> Duration {
        Duration::from_millis(self.validation_delay_ms)
    }

    pub fn enbd_durations(&self) -> [Duration; STEP_COUNT] {
        self.enbd_step_durations_ms.map(Duration::from_millis)
    }

    pub fn transfer_settings(&self) -> TransferSettings {
        TransferSettings {
            tick: Duration::from_millis(self.transfer_tick_ms),
            exchange_rate: self.transfer_exchange_rate,
            fee_rate: self.transfer_fee_rate,
            default_amount: self.default_transfer_amount.clone(),
        }
    }
}
