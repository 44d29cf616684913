//! # Nour Testkit
//!
//! Testing utilities for the Nour wallet.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: An [`App`](nour::App) wired to a scripted validator and a
//!   fixed file picker
//! - **Generators**: Proptest strategies for screens, search input and PINs
//! - **Tracing**: [`init_tracing`] routes logs into the test harness output
//!
//! ## Test Fixtures
//!
//! ```rust,no_run
//! use nour_testkit::TestFixture;
//!
//! async fn example() -> nour::Result<()> {
//!     let fixture = TestFixture::with_verdicts([false, true]);
//!     let app = fixture.signed_in_app().await?;
//!     assert!(app.is_authenticated());
//!     Ok(())
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use nour_testkit::generators::search_query;
//!
//! proptest! {
//!     #[test]
//!     fn filter_is_a_subset(query in search_query()) {
//!         prop_assert!(nour::flows::share::filter_banks(&query).len() <= 8);
//!     }
//! }
//! ```

use tracing_subscriber::filter::LevelFilter;

pub mod fixtures;
pub mod generators;

pub use fixtures::{passport_scan, TestFixture};

/// Install a debug-level fmt subscriber that writes through the test
/// harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}
