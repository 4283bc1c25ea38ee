//! Backend test support utilities
//!
//! Shared helpers for the tennis backend integration tests.

pub mod logging;
