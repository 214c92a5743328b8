#![doc(test(attr(deny(warnings))))]

//! FotoConnect Finance Core provides the transaction model, reporting-period
//! resolution, and dashboard aggregation that back the FotoConnect financial
//! dashboard, along with JSON persistence and a terminal chart CLI.

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("FotoConnect finance core tracing initialized.");
    });
}
