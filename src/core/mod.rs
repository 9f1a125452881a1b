//! Core types and constants for trip telemetry

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
