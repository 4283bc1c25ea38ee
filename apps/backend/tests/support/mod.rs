#![allow(dead_code)]

pub mod db;
pub mod failing;
pub mod fixtures;

/// Shared per-test setup.
pub fn init() {
    backend_test_support::logging::init();
}
