//! Domain types for delivery stops.
//!
//! These are the types that cross the API boundary. Coordinate range
//! validation happens at that boundary; the planner assumes valid input.

use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees.
///
/// Latitude is in [-90, 90], longitude in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A single location to visit.
///
/// The planner reorders stops and assigns their `sequence_number`; it never
/// creates or discards identities. After an optimization call completes,
/// `sequence_number` is `Some` and strictly increasing from 0 across the
/// returned route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop<I> {
    pub id: I,
    pub coordinate: Coordinate,
    pub sequence_number: Option<u32>,
}

impl<I> Stop<I> {
    /// Creates a stop with no sequence assigned yet.
    pub fn new(id: I, coordinate: Coordinate) -> Self {
        Self {
            id,
            coordinate,
            sequence_number: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stop_has_no_sequence() {
        let stop = Stop::new(7u64, Coordinate::new(4.7110, -74.0721));
        assert_eq!(stop.sequence_number, None);
        assert_eq!(stop.id, 7);
    }

    #[test]
    fn test_coordinate_is_copy() {
        let coord = Coordinate::new(4.7110, -74.0721);
        let copied = coord;
        assert_eq!(coord, copied);
    }
}
