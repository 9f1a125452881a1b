//! Core data types for trip telemetry

use serde::{Deserialize, Serialize};

/// Geodetic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// One timestamped location reading from the provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Reading timestamp (milliseconds since epoch or session start)
    pub timestamp_ms: u64,
    /// Position at the time of the reading
    pub position: Position,
    /// Instantaneous speed over ground (m/s); providers report a
    /// negative sentinel when the speed is unknown
    pub speed_ms: f64,
}

impl Sample {
    pub fn new(timestamp_ms: u64, position: Position, speed_ms: f64) -> Self {
        Self {
            timestamp_ms,
            position,
            speed_ms,
        }
    }
}
