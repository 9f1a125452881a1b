//! Great-circle distance on a spherical Earth

use crate::core::{Position, EARTH_RADIUS_M};

/// Haversine distance between two geodetic positions (meters)
///
/// Spherical-earth approximation; accurate to ~0.5% which is well within
/// consumer GPS error for consecutive trip samples.
pub fn haversine_distance_m(a: &Position, b: &Position) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (dlon / 2.0).sin().powi(2);

    // Clamp guards against rounding pushing h past 1.0 for antipodal points
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_for_identical_points() {
        let p = Position::new(45.0, 9.0);
        assert_eq!(haversine_distance_m(&p, &p), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let a = Position::new(47.4979, 19.0402); // Budapest
        let b = Position::new(48.2082, 16.3738); // Vienna
        let ab = haversine_distance_m(&a, &b);
        let ba = haversine_distance_m(&b, &a);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(1.0, 0.0);
        let d = haversine_distance_m(&a, &b);
        // One degree of arc on the mean sphere is ~111.2 km
        assert!((d - 111_195.0).abs() < 100.0);
    }

    #[test]
    fn test_small_equatorial_offset() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(0.0, 0.0009);
        let d = haversine_distance_m(&a, &b);
        // 0.0009 degrees of longitude at the equator is ~100 m
        assert!((d - 100.0).abs() < 1.0);
    }

    #[test]
    fn test_known_city_pair() {
        let budapest = Position::new(47.4979, 19.0402);
        let vienna = Position::new(48.2082, 16.3738);
        let d = haversine_distance_m(&budapest, &vienna);
        // Great-circle distance is roughly 214 km
        assert!(d > 210_000.0 && d < 218_000.0);
    }
}
