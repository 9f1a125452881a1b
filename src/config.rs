//! Tracker configuration

use crate::core::DEFAULT_SPEED_LIMIT_KMH;
use crate::formatting::OutputFormat;
use crate::validation::ValidationConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Trip tracker configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Over-limit threshold for reporting (km/h)
    pub speed_limit_kmh: f64,
    /// Maximum plausible instantaneous speed accepted by validation (m/s)
    pub max_speed_ms: f64,
    /// Maximum plausible position jump between consecutive samples (meters)
    pub max_position_jump_m: f64,
    /// Default output format for rendered reports
    pub output_format: OutputFormat,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        let validation = ValidationConfig::default();
        Self {
            speed_limit_kmh: DEFAULT_SPEED_LIMIT_KMH,
            max_speed_ms: validation.max_speed_ms,
            max_position_jump_m: validation.max_position_jump_m,
            output_format: OutputFormat::Text,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid parameter value
    InvalidParameter { parameter: String, value: f64, reason: String },
    /// Configuration file I/O error
    IoError { message: String },
    /// JSON serialization/deserialization error
    SerializationError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParameter { parameter, value, reason } => {
                write!(f, "Invalid {}: {} ({})", parameter, value, reason)
            }
            ConfigError::IoError { message } => write!(f, "Config I/O error: {}", message),
            ConfigError::SerializationError { message } => {
                write!(f, "Config serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl TrackerConfig {
    /// Check all parameters for sane, finite values
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::check_positive("speed_limit_kmh", self.speed_limit_kmh)?;
        Self::check_positive("max_speed_ms", self.max_speed_ms)?;
        Self::check_positive("max_position_jump_m", self.max_position_jump_m)?;
        Ok(())
    }

    fn check_positive(parameter: &str, value: f64) -> Result<(), ConfigError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: parameter.to_string(),
                value,
                reason: "must be a positive finite number".to_string(),
            });
        }
        Ok(())
    }

    /// Validation bounds for a `SampleValidator` built from this config
    pub fn validation_config(&self) -> ValidationConfig {
        ValidationConfig {
            max_speed_ms: self.max_speed_ms,
            max_position_jump_m: self.max_position_jump_m,
        }
    }

    /// Load and validate configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: TrackerConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to serialize config: {}", e),
            })?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })
    }
}
