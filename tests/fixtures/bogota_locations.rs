//! Real Bogotá locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. These are real, routable
//! locations that work with OSRM Colombia data.

use route_optimizer::stop::{Coordinate, Stop};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

// ============================================================================
// Warehouses / logistics hubs (good depot candidates)
// ============================================================================

pub const DEPOTS: &[Location] = &[
    Location::new("Corferias", 4.6296, -74.0899),
    Location::new("Paloquemao Market", 4.6180, -74.0840),
    Location::new("Centro Mayor", 4.5827, -74.1285),
];

// ============================================================================
// Delivery points around the city center and the north
// ============================================================================

pub const DELIVERY_POINTS: &[Location] = &[
    Location::new("Plaza de Bolivar", 4.5981, -74.0758),
    Location::new("Museo del Oro", 4.6019, -74.0721),
    Location::new("Monserrate Station", 4.6019, -74.0683),
    Location::new("Parque de la 93", 4.6766, -74.0485),
    Location::new("Zona T", 4.6669, -74.0534),
    Location::new("Usaquen Park", 4.6946, -74.0309),
    Location::new("Parque Simon Bolivar", 4.6584, -74.0937),
    Location::new("Plaza de Lourdes", 4.6325, -74.0645),
    Location::new("Universidad Nacional", 4.6365, -74.0845),
    Location::new("El Campin Stadium", 4.6460, -74.0775),
];

/// Builds stops with sequential ids: the depot first, then `count` delivery
/// points.
pub fn delivery_run(depot: &Location, count: usize) -> Vec<Stop<u64>> {
    let mut stops = vec![Stop::new(0u64, depot.coordinate())];
    for (index, location) in DELIVERY_POINTS.iter().take(count).enumerate() {
        stops.push(Stop::new(index as u64 + 1, location.coordinate()));
    }
    stops
}
