//! Layered distance resolution: road network first, geodesic fallback.
//!
//! The resolver is the reason total-distance computation is total. Whatever
//! the router does (times out, finds no route, returns garbage), every
//! segment still gets a distance.

use tracing::warn;

use crate::haversine::haversine_km;
use crate::stop::Coordinate;
use crate::traits::RoadDistance;

/// Where a resolved distance came from.
///
/// Observability only; routing decisions never branch on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceSource {
    /// Derived from the road-network router.
    Road,
    /// Great-circle fallback.
    Geodesic,
}

/// A resolved segment distance with its provenance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceResult {
    pub distance_km: f64,
    pub source: DistanceSource,
}

/// Resolves segment distances, degrading from road to geodesic.
#[derive(Debug, Clone)]
pub struct DistanceResolver<R> {
    client: R,
}

impl<R: RoadDistance> DistanceResolver<R> {
    pub fn new(client: R) -> Self {
        Self { client }
    }

    /// Resolves the distance from `from` to `to`. Never fails.
    pub fn resolve(&self, from: Coordinate, to: Coordinate) -> DistanceResult {
        match self.client.road_distance(from, to) {
            Ok(leg) => DistanceResult {
                distance_km: leg.distance_km,
                source: DistanceSource::Road,
            },
            Err(err) => {
                warn!("{err}; using geodesic distance for segment");
                DistanceResult {
                    distance_km: haversine_km(from, to),
                    source: DistanceSource::Geodesic,
                }
            }
        }
    }
}
