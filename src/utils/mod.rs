//! Utility modules for common functionality.
//!
//! This module provides various utility functions and types that are used
//! across the crate. Currently includes:
//!
//! - constants: Constants for the crate
//! - logging: Logging utilities
//! - tests: Test fixture builders (test builds only)

pub mod constants;
pub mod logging;

#[cfg(test)]
pub mod tests;

pub use constants::*;
