//! Trip accumulator: running statistics over a stream of location samples
//!
//! The tracker is the pure computation half of a trip computer. A location
//! provider pushes `Sample` values into `ingest`, a display surface pulls
//! `TripReport` values out of `snapshot`. No operation fails; degenerate
//! input (inactive tracker, bootstrap sample, non-increasing timestamps)
//! resolves to a guarded no-change instead of an error.

use crate::core::{Sample, DEFAULT_SPEED_LIMIT_KMH, MS_TO_KMH};
use crate::geo::haversine_distance_m;
use serde::{Deserialize, Serialize};

/// Running trip statistics, mutated only by `ingest`
#[derive(Debug, Clone)]
pub struct TripTracker {
    /// First sample of the active trip
    start_sample: Option<Sample>,
    /// Most recent sample
    last_sample: Option<Sample>,
    /// Highest instantaneous speed seen (m/s)
    max_speed_ms: f64,
    /// Sum of great-circle distances between consecutive samples (m)
    total_distance_m: f64,
    /// Sum of inter-sample intervals (s)
    total_elapsed_s: f64,
    /// Largest unsigned speed change per second seen (m/s²)
    max_acceleration_ms2: f64,
    /// Over-limit threshold for reporting (km/h)
    speed_limit_kmh: f64,
    /// Whether a trip is in progress
    active: bool,
}

/// Point-in-time view of the trip, computed by `snapshot`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripReport {
    /// Speed of the most recent sample (km/h); 0 before the first sample
    pub current_speed_kmh: f64,
    /// Highest speed seen during the trip (km/h)
    pub max_speed_kmh: f64,
    /// Distance over elapsed time (km/h); 0 until time has accumulated
    pub average_speed_kmh: f64,
    /// Accumulated trip distance (km)
    pub distance_km: f64,
    /// Largest unsigned acceleration magnitude seen (m/s²)
    pub max_acceleration_ms2: f64,
    /// Whether the current speed exceeds the configured limit
    pub over_limit: bool,
    /// Whether a trip is in progress
    pub active: bool,
}

impl Default for TripTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl TripTracker {
    /// Create an idle tracker with the default speed limit
    pub fn new() -> Self {
        Self::with_speed_limit(DEFAULT_SPEED_LIMIT_KMH)
    }

    /// Create an idle tracker with a specific over-limit threshold (km/h)
    pub fn with_speed_limit(speed_limit_kmh: f64) -> Self {
        Self {
            start_sample: None,
            last_sample: None,
            max_speed_ms: 0.0,
            total_distance_m: 0.0,
            total_elapsed_s: 0.0,
            max_acceleration_ms2: 0.0,
            speed_limit_kmh,
            active: false,
        }
    }

    /// Begin a trip, clearing all accumulators from any prior trip
    pub fn start(&mut self) {
        self.start_sample = None;
        self.last_sample = None;
        self.max_speed_ms = 0.0;
        self.total_distance_m = 0.0;
        self.total_elapsed_s = 0.0;
        self.max_acceleration_ms2 = 0.0;
        self.active = true;
    }

    /// End the trip; accumulated statistics stay readable via `snapshot`.
    /// Idempotent, and later `ingest` calls are ignored until `start`.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Change the over-limit threshold, before or during a trip (km/h)
    pub fn set_speed_limit_kmh(&mut self, limit: f64) {
        self.speed_limit_kmh = limit;
    }

    pub fn speed_limit_kmh(&self) -> f64 {
        self.speed_limit_kmh
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// First sample of the current trip, once one has arrived
    pub fn start_sample(&self) -> Option<&Sample> {
        self.start_sample.as_ref()
    }

    /// Feed one location reading into the accumulators
    ///
    /// Ignored while the tracker is inactive. The first sample after
    /// `start` only seeds the baseline; deltas begin with the second.
    /// Samples whose timestamp does not advance past the previous one
    /// are skipped entirely, so duplicate or reordered provider updates
    /// cannot divide by zero or roll distance backwards.
    pub fn ingest(&mut self, sample: Sample) {
        if !self.active {
            return;
        }

        let last = match self.last_sample {
            Some(last) => last,
            None => {
                self.start_sample = Some(sample);
                self.last_sample = Some(sample);
                return;
            }
        };

        if sample.timestamp_ms <= last.timestamp_ms {
            return;
        }
        let dt_s = (sample.timestamp_ms - last.timestamp_ms) as f64 / 1000.0;

        self.total_elapsed_s += dt_s;
        self.total_distance_m += haversine_distance_m(&last.position, &sample.position);

        if sample.speed_ms > self.max_speed_ms {
            self.max_speed_ms = sample.speed_ms;
        }

        let acceleration = (sample.speed_ms - last.speed_ms).abs() / dt_s;
        if acceleration > self.max_acceleration_ms2 {
            self.max_acceleration_ms2 = acceleration;
        }

        self.last_sample = Some(sample);
    }

    /// Compute the current report; pure read, valid at any point in the
    /// lifecycle
    pub fn snapshot(&self) -> TripReport {
        let current_speed_kmh = self
            .last_sample
            .map(|s| s.speed_ms * MS_TO_KMH)
            .unwrap_or(0.0);

        let average_speed_kmh = if self.total_elapsed_s > 0.0 {
            self.total_distance_m / self.total_elapsed_s * MS_TO_KMH
        } else {
            0.0
        };

        TripReport {
            current_speed_kmh,
            max_speed_kmh: self.max_speed_ms * MS_TO_KMH,
            average_speed_kmh,
            distance_km: self.total_distance_m / 1000.0,
            max_acceleration_ms2: self.max_acceleration_ms2,
            over_limit: current_speed_kmh > self.speed_limit_kmh,
            active: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    fn sample(t_ms: u64, lat: f64, lon: f64, speed_ms: f64) -> Sample {
        Sample::new(t_ms, Position::new(lat, lon), speed_ms)
    }

    #[test]
    fn test_idle_tracker_ignores_samples() {
        let mut tracker = TripTracker::new();
        tracker.ingest(sample(0, 0.0, 0.0, 10.0));

        let report = tracker.snapshot();
        assert_eq!(report.current_speed_kmh, 0.0);
        assert_eq!(report.distance_km, 0.0);
        assert!(!report.active);
    }

    #[test]
    fn test_first_sample_seeds_without_deltas() {
        let mut tracker = TripTracker::new();
        tracker.start();
        tracker.ingest(sample(1000, 47.0, 19.0, 12.5));

        let report = tracker.snapshot();
        assert!((report.current_speed_kmh - 12.5 * 3.6).abs() < 1e-9);
        assert_eq!(report.distance_km, 0.0);
        assert_eq!(report.average_speed_kmh, 0.0);
        assert_eq!(report.max_acceleration_ms2, 0.0);
        assert!(report.active);
        assert_eq!(tracker.start_sample().unwrap().timestamp_ms, 1000);
    }

    #[test]
    fn test_two_sample_trip_statistics() {
        let mut tracker = TripTracker::new();
        tracker.start();
        tracker.ingest(sample(0, 0.0, 0.0, 0.0));
        tracker.ingest(sample(10_000, 0.0, 0.0009, 20.0));

        let report = tracker.snapshot();
        // 0.0009 deg of longitude at the equator is ~100 m in 10 s
        assert!((report.distance_km * 1000.0 - 100.0).abs() < 1.0);
        assert!((report.max_speed_kmh - 72.0).abs() < 1e-9);
        assert!((report.average_speed_kmh - 36.0).abs() < 0.5);
        assert!((report.max_acceleration_ms2 - 2.0).abs() < 1e-9);
        assert!((report.current_speed_kmh - 72.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_is_sum_of_pairwise_haversine() {
        let points = [
            (0_u64, 47.0000, 19.0000),
            (5_000, 47.0005, 19.0002),
            (10_000, 47.0011, 19.0007),
            (15_000, 47.0014, 19.0015),
        ];

        let mut tracker = TripTracker::new();
        tracker.start();
        let mut expected = 0.0;
        let mut prev: Option<Position> = None;
        for &(t, lat, lon) in &points {
            let pos = Position::new(lat, lon);
            if let Some(p) = prev {
                expected += haversine_distance_m(&p, &pos);
            }
            prev = Some(pos);
            tracker.ingest(Sample::new(t, pos, 5.0));
        }

        let report = tracker.snapshot();
        assert!((report.distance_km * 1000.0 - expected).abs() < 1e-9);
    }

    #[test]
    fn test_max_speed_tracks_maximum_seen() {
        let mut tracker = TripTracker::new();
        tracker.start();
        for (i, &speed) in [3.0, 11.0, 7.0, 9.5].iter().enumerate() {
            tracker.ingest(sample(i as u64 * 1000, 0.0, 0.0, speed));
        }

        let report = tracker.snapshot();
        assert!((report.max_speed_kmh - 11.0 * 3.6).abs() < 1e-9);
        // Last sample is slower than the max
        assert!((report.current_speed_kmh - 9.5 * 3.6).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_timestamp_is_skipped() {
        let mut tracker = TripTracker::new();
        tracker.start();
        tracker.ingest(sample(1000, 0.0, 0.0, 5.0));
        tracker.ingest(sample(1000, 0.0, 0.1, 50.0));

        let report = tracker.snapshot();
        assert_eq!(report.distance_km, 0.0);
        assert_eq!(report.average_speed_kmh, 0.0);
        assert_eq!(report.max_acceleration_ms2, 0.0);
        assert!(report.max_acceleration_ms2.is_finite());
        // The skipped sample does not become the new baseline
        assert!((report.current_speed_kmh - 5.0 * 3.6).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_order_timestamp_is_skipped() {
        let mut tracker = TripTracker::new();
        tracker.start();
        tracker.ingest(sample(5000, 0.0, 0.0, 5.0));
        tracker.ingest(sample(4000, 0.0, 0.001, 8.0));
        tracker.ingest(sample(6000, 0.0, 0.0009, 10.0));

        let report = tracker.snapshot();
        // Only the 5000 -> 6000 interval counts
        assert!((report.distance_km * 1000.0 - 100.0).abs() < 1.0);
        assert!((report.max_acceleration_ms2 - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_stop_freezes_state() {
        let mut tracker = TripTracker::new();
        tracker.start();
        tracker.ingest(sample(0, 0.0, 0.0, 0.0));
        tracker.ingest(sample(10_000, 0.0, 0.0009, 20.0));
        tracker.stop();
        tracker.stop(); // idempotent
        assert!(!tracker.is_active());

        let frozen = tracker.snapshot();
        tracker.ingest(sample(20_000, 0.0, 0.01, 40.0));
        let after = tracker.snapshot();

        assert!(!frozen.active);
        assert_eq!(frozen.distance_km, after.distance_km);
        assert_eq!(frozen.max_speed_kmh, after.max_speed_kmh);
        assert_eq!(frozen.current_speed_kmh, after.current_speed_kmh);
    }

    #[test]
    fn test_start_resets_previous_trip() {
        let mut tracker = TripTracker::new();
        tracker.start();
        tracker.ingest(sample(0, 0.0, 0.0, 15.0));
        tracker.ingest(sample(5000, 0.0, 0.002, 25.0));
        tracker.stop();

        tracker.start();
        let report = tracker.snapshot();
        assert_eq!(report.current_speed_kmh, 0.0);
        assert_eq!(report.max_speed_kmh, 0.0);
        assert_eq!(report.distance_km, 0.0);
        assert_eq!(report.average_speed_kmh, 0.0);
        assert_eq!(report.max_acceleration_ms2, 0.0);
        assert!(report.active);
        assert!(tracker.start_sample().is_none());
    }

    #[test]
    fn test_over_limit_threshold() {
        let mut tracker = TripTracker::with_speed_limit(100.0);
        tracker.start();
        tracker.ingest(sample(0, 0.0, 0.0, 30.0)); // 108 km/h
        assert!(tracker.snapshot().over_limit);

        tracker.set_speed_limit_kmh(110.0);
        assert_eq!(tracker.speed_limit_kmh(), 110.0);
        assert!(!tracker.snapshot().over_limit);
    }

    #[test]
    fn test_accumulators_never_decrease_while_active() {
        let mut tracker = TripTracker::new();
        tracker.start();
        let speeds = [2.0, 14.0, 6.0, 6.0, 1.0, 9.0];
        let mut prev = tracker.snapshot();
        for (i, &speed) in speeds.iter().enumerate() {
            tracker.ingest(sample(i as u64 * 2000, 47.0 + i as f64 * 1e-4, 19.0, speed));
            let cur = tracker.snapshot();
            assert!(cur.distance_km >= prev.distance_km);
            assert!(cur.max_speed_kmh >= prev.max_speed_kmh);
            assert!(cur.max_acceleration_ms2 >= prev.max_acceleration_ms2);
            prev = cur;
        }
    }
}
