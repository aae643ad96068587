//! Engine test support utilities
//!
//! Shared helpers for the engine's unit and integration tests: one-time
//! logging initialization and unique naming for test fixtures.

pub mod logging;
pub mod unique_helpers;
