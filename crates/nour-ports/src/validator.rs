//! Validator implementations.
//!
//! - [`SimulatedValidator`]: the demo coin flip, success with a configured
//!   probability and fixed demo fields.
//! - [`ScriptedValidator`]: a deterministic verdict sequence for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use nour_core::{DocumentType, ExtractedFields, FileBlob, ValidationOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;
use tracing::debug;

use crate::traits::Validator;

/// Message attached to every rejection.
pub const REJECTION_MESSAGE: &str = "Document image is blurry or unclear";

/// Demo success probability.
pub const DEFAULT_SUCCESS_RATE: f64 = 0.7;

/// The fields every verified document reports.
pub fn demo_fields() -> ExtractedFields {
    ExtractedFields {
        document_number: "AB1234567".to_string(),
        name: "John Doe".to_string(),
        date_of_birth: "1990-05-15".to_string(),
        expiry_date: "2030-10-15".to_string(),
    }
}

/// Validator that verifies with probability `success_rate`, independent of
/// the document and the file.
pub struct SimulatedValidator {
    rng: Mutex<StdRng>,
    success_rate: f64,
}

impl SimulatedValidator {
    /// Seeded from OS entropy.
    pub fn new(success_rate: f64) -> Self {
        Self::with_rng(StdRng::from_entropy(), success_rate)
    }

    /// Reproducible sequence of verdicts for a given seed.
    pub fn seeded(seed: u64, success_rate: f64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), success_rate)
    }

    fn with_rng(rng: StdRng, success_rate: f64) -> Self {
        Self {
            rng: Mutex::new(rng),
            success_rate: success_rate.clamp(0.0, 1.0),
        }
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }
}

impl Default for SimulatedValidator {
    fn default() -> Self {
        Self::new(DEFAULT_SUCCESS_RATE)
    }
}

#[async_trait]
impl Validator for SimulatedValidator {
    async fn validate(&self, kind: DocumentType, file: &FileBlob) -> ValidationOutcome {
        let verified = self.rng.lock().await.gen_bool(self.success_rate);
        debug!(%kind, fingerprint = %file.fingerprint(), verified, "simulated validation");
        if verified {
            ValidationOutcome::verified(demo_fields())
        } else {
            ValidationOutcome::rejected(REJECTION_MESSAGE)
        }
    }
}

/// Validator that replays a fixed list of verdicts, cycling when it runs
/// out. An empty script always verifies.
pub struct ScriptedValidator {
    verdicts: Vec<bool>,
    calls: AtomicUsize,
}

impl ScriptedValidator {
    pub fn new(verdicts: impl IntoIterator<Item = bool>) -> Self {
        Self {
            verdicts: verdicts.into_iter().collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn always_verify() -> Self {
        Self::new([true])
    }

    pub fn always_reject() -> Self {
        Self::new([false])
    }

    /// Number of validations performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Validator for ScriptedValidator {
    async fn validate(&self, _kind: DocumentType, _file: &FileBlob) -> ValidationOutcome {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        let verified = if self.verdicts.is_empty() {
            true
        } else {
            self.verdicts[n % self.verdicts.len()]
        };
        if verified {
            ValidationOutcome::verified(demo_fields())
        } else {
            ValidationOutcome::rejected(REJECTION_MESSAGE)
        }
    }
}
