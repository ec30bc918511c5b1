#![doc(test(attr(deny(warnings))))]

//! Student Finance tracks student expenses and income, derives monthly
//! per-category budgets, and computes period-scoped spending insights.
//!
//! The aggregation engine (`core::services`) is pure: every computation takes
//! its transactions and reference time as parameters. `core::LedgerManager`
//! owns the mutable state and persists it through a `storage::StorageBackend`.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod export;
pub mod ledger;
pub mod sample_data;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "student finance initialized");
    });
}
