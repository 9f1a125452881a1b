//! Trip Telemetry
//!
//! A GUI-free trip computer core: feed timestamped location samples in,
//! read live trip statistics (speed, distance, elapsed time, acceleration,
//! over-limit status) out. Location acquisition and rendering stay outside
//! the crate.

pub mod core;
pub mod geo;
pub mod tracker;
pub mod validation;
pub mod config;
pub mod formatting;
pub mod source;

// Re-export commonly used types
pub use core::{Position, Sample, DEFAULT_SPEED_LIMIT_KMH, EARTH_RADIUS_M, MS_TO_KMH};
pub use geo::haversine_distance_m;
pub use tracker::{TripReport, TripTracker};
pub use validation::{SampleValidator, ValidationConfig, ValidationError};
pub use config::{ConfigError, TrackerConfig};
pub use formatting::{render_report, CsvFormatter, JsonFormatter, OutputFormat, TextFormatter};
pub use source::{SampleSource, ScriptedSource, SourceError};
