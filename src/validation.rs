//! Pre-ingest sample validation
//!
//! The tracker itself never fails; it guards degenerate timing internally.
//! This module is for callers that want to reject obviously broken provider
//! readings (NaN coordinates, out-of-range fixes, implausible jumps) before
//! they reach the accumulators, and to clean up the negative speed sentinel
//! some providers use for "speed unknown".

use crate::core::Sample;
use crate::geo::haversine_distance_m;
use std::fmt;

/// Configuration for sample validation parameters
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Maximum plausible instantaneous speed (m/s)
    pub max_speed_ms: f64,
    /// Maximum plausible position jump between consecutive samples (meters)
    pub max_position_jump_m: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_speed_ms: 150.0,          // ~540 km/h, beyond any road vehicle
            max_position_jump_m: 10_000.0, // 10 km between consecutive fixes
        }
    }
}

/// Validation errors for a single sample
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NonFiniteCoordinate { lat: f64, lon: f64 },
    LatitudeOutOfRange { lat: f64 },
    LongitudeOutOfRange { lon: f64 },
    NonFiniteSpeed,
    ImplausibleSpeed { speed_ms: f64, max_ms: f64 },
    PositionJump { distance_m: f64, max_m: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonFiniteCoordinate { lat, lon } => {
                write!(f, "Non-finite coordinate: lat {}, lon {}", lat, lon)
            }
            ValidationError::LatitudeOutOfRange { lat } => {
                write!(f, "Latitude out of range: {}", lat)
            }
            ValidationError::LongitudeOutOfRange { lon } => {
                write!(f, "Longitude out of range: {}", lon)
            }
            ValidationError::NonFiniteSpeed => {
                write!(f, "Speed is not a finite number")
            }
            ValidationError::ImplausibleSpeed { speed_ms, max_ms } => {
                write!(f, "Implausible speed: {:.1} m/s (max {:.1})", speed_ms, max_ms)
            }
            ValidationError::PositionJump { distance_m, max_m } => {
                write!(f, "Position jump: {:.0} m from previous sample (max {:.0})", distance_m, max_m)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates raw provider samples before they reach the tracker
#[derive(Debug, Clone, Default)]
pub struct SampleValidator {
    config: ValidationConfig,
}

impl SampleValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Check one sample, optionally against the previously accepted one
    pub fn validate(&self, sample: &Sample, prev: Option<&Sample>) -> Result<(), ValidationError> {
        let pos = &sample.position;
        if !pos.lat.is_finite() || !pos.lon.is_finite() {
            return Err(ValidationError::NonFiniteCoordinate {
                lat: pos.lat,
                lon: pos.lon,
            });
        }
        if pos.lat.abs() > 90.0 {
            return Err(ValidationError::LatitudeOutOfRange { lat: pos.lat });
        }
        if pos.lon.abs() > 180.0 {
            return Err(ValidationError::LongitudeOutOfRange { lon: pos.lon });
        }
        if !sample.speed_ms.is_finite() {
            return Err(ValidationError::NonFiniteSpeed);
        }
        if sample.speed_ms > self.config.max_speed_ms {
            return Err(ValidationError::ImplausibleSpeed {
                speed_ms: sample.speed_ms,
                max_ms: self.config.max_speed_ms,
            });
        }
        if let Some(prev) = prev {
            let jump = haversine_distance_m(&prev.position, &sample.position);
            if jump > self.config.max_position_jump_m {
                return Err(ValidationError::PositionJump {
                    distance_m: jump,
                    max_m: self.config.max_position_jump_m,
                });
            }
        }
        Ok(())
    }

    /// Replace the provider's negative "speed unknown" sentinel with zero
    pub fn sanitize(&self, mut sample: Sample) -> Sample {
        if sample.speed_ms < 0.0 {
            sample.speed_ms = 0.0;
        }
        sample
    }
}
