//! Physical constants and system parameters

/// Mean Earth radius used for great-circle distances (meters)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Conversion factor from meters/second to kilometers/hour
pub const MS_TO_KMH: f64 = 3.6;

/// Default speed limit for over-limit reporting (km/h)
pub const DEFAULT_SPEED_LIMIT_KMH: f64 = 115.0;
