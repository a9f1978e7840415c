//! Shared helpers for the end-to-end tests.

#![allow(dead_code)]

pub mod cli;
pub mod fixtures;

use std::sync::Once;

static INIT: Once = Once::new();

/// Route the test process's own tracing output through the test writer.
pub fn init_test_logging() {
    INIT.call_once(benchstats::logging::init_test_logging);
}
