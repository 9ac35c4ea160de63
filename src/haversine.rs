//! Great-circle distance (fallback when the road router is unavailable).
//!
//! Ignores the road network, so it underestimates real travel distance, but
//! it is pure and always available. The same function doubles as the test
//! oracle, so its numeric behavior must stay bit-for-bit stable.

use crate::stop::Coordinate;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates in kilometers.
///
/// Defined for every valid coordinate pair; identical points yield 0.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let bogota = Coordinate::new(4.7110, -74.0721);
        assert_eq!(haversine_km(bogota, bogota), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let bogota = Coordinate::new(4.7110, -74.0721);
        let medellin = Coordinate::new(6.2442, -75.5812);
        assert_eq!(haversine_km(bogota, medellin), haversine_km(medellin, bogota));
    }

    #[test]
    fn test_bogota_to_medellin() {
        // Straight-line distance between the two cities is ~245 km.
        let bogota = Coordinate::new(4.7110, -74.0721);
        let medellin = Coordinate::new(6.2442, -75.5812);
        let dist = haversine_km(bogota, medellin);
        assert!(dist > 230.0 && dist < 260.0, "expected ~245km, got {}", dist);
    }

    #[test]
    fn test_short_segment() {
        // Two points ~0.5 km apart in central Bogota.
        let a = Coordinate::new(4.598, -74.076);
        let b = Coordinate::new(4.602, -74.072);
        let dist = haversine_km(a, b);
        assert!(dist > 0.1 && dist < 1.0, "expected sub-kilometer, got {}", dist);
    }
}
