//! Sample sources for replay and testing
//!
//! The crate deliberately ships no real location provider; whatever feeds
//! it implements `SampleSource`. `ScriptedSource` plays back a prepared
//! sequence, for tests and for replaying recorded trips from JSON files.

use crate::core::Sample;
use std::collections::VecDeque;
use std::fmt;
use std::fs;
use std::path::Path;

/// A pull-based feed of location samples
pub trait SampleSource {
    /// Next sample, or `None` when the feed is exhausted
    fn next_sample(&mut self) -> Option<Sample>;
}

/// Errors loading a scripted replay
#[derive(Debug, Clone)]
pub enum SourceError {
    /// Replay file I/O error
    IoError { message: String },
    /// Replay file parse error
    ParseError { message: String },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::IoError { message } => write!(f, "Replay I/O error: {}", message),
            SourceError::ParseError { message } => write!(f, "Replay parse error: {}", message),
        }
    }
}

impl std::error::Error for SourceError {}

/// Plays back a prepared sequence of samples
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    queue: VecDeque<Sample>,
}

impl ScriptedSource {
    /// Create a source that plays back the given samples in order
    pub fn new(samples: Vec<Sample>) -> Self {
        Self {
            queue: samples.into(),
        }
    }

    /// Parse a JSON array of samples
    pub fn from_json_str(json: &str) -> Result<Self, SourceError> {
        let samples: Vec<Sample> =
            serde_json::from_str(json).map_err(|e| SourceError::ParseError {
                message: format!("Failed to parse replay: {}", e),
            })?;
        Ok(Self::new(samples))
    }

    /// Load a JSON replay file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let content = fs::read_to_string(&path).map_err(|e| SourceError::IoError {
            message: format!("Failed to read replay file '{}': {}", path_str, e),
        })?;
        Self::from_json_str(&content)
    }

    /// Append one sample to the end of the script
    pub fn push_sample(&mut self, sample: Sample) {
        self.queue.push_back(sample);
    }

    /// Samples remaining in the script
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl SampleSource for ScriptedSource {
    fn next_sample(&mut self) -> Option<Sample> {
        self.queue.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn test_scripted_source_plays_in_order() {
        let mut source = ScriptedSource::new(vec![
            Sample::new(0, Position::new(0.0, 0.0), 1.0),
            Sample::new(1000, Position::new(0.0, 0.001), 2.0),
        ]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.next_sample().unwrap().timestamp_ms, 0);
        assert_eq!(source.next_sample().unwrap().timestamp_ms, 1000);
        assert!(source.next_sample().is_none());
    }

    #[test]
    fn test_push_sample_extends_script() {
        let mut source = ScriptedSource::default();
        source.push_sample(Sample::new(42, Position::new(1.0, 2.0), 3.0));
        let sample = source.next_sample().unwrap();
        assert_eq!(sample.timestamp_ms, 42);
        assert_eq!(sample.speed_ms, 3.0);
    }

    #[test]
    fn test_parses_json_replay() {
        let json = r#"[
            {"timestamp_ms": 0, "position": {"lat": 47.0, "lon": 19.0}, "speed_ms": 0.0},
            {"timestamp_ms": 5000, "position": {"lat": 47.001, "lon": 19.0}, "speed_ms": 22.2}
        ]"#;
        let mut source = ScriptedSource::from_json_str(json).unwrap();
        assert_eq!(source.remaining(), 2);
        let first = source.next_sample().unwrap();
        assert_eq!(first.position.lat, 47.0);
    }

    #[test]
    fn test_rejects_malformed_replay() {
        let result = ScriptedSource::from_json_str("{not json");
        assert!(matches!(result, Err(SourceError::ParseError { .. })));
    }

    #[test]
    fn test_missing_replay_file_is_io_error() {
        let result = ScriptedSource::from_json_file("/nonexistent/replay.json");
        assert!(matches!(result, Err(SourceError::IoError { .. })));
    }
}
