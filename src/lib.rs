#![doc(test(attr(deny(warnings))))]

//! Income Tracker accumulates income per day, month, and year, renders
//! summaries of the collected totals, and persists them as JSON. The
//! interactive menu in [`cli`] drives a [`ledger::Ledger`] owned by the shell.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Income tracker tracing initialized.");
    });
}
