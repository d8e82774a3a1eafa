//! Core services implementing the crate's functionality.
//!
//! This module contains the decode-and-correlate engine:
//!
//! - `decoder`: The receipt pipeline and its decoder implementations

pub mod decoder;
