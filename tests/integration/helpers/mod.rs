//! Helper utilities for integration tests.

pub mod fixtures;
pub mod logging;

pub use fixtures::*;
pub use logging::*;
