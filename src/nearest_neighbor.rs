//! Greedy nearest-neighbor sequencing.
//!
//! Never optimal, never fails: every input yields a complete route, even
//! with the road router down (the resolver degrades to geodesic distances).

use tracing::debug;

use crate::resolver::DistanceResolver;
use crate::stop::Stop;
use crate::traits::{Id, OptimizationStrategy, RoadDistance, StrategyError};

/// Orders stops by repeatedly visiting the closest pending stop.
///
/// O(n²) distance evaluations, acceptable for single-fleet, single-day
/// route sizes.
#[derive(Debug, Clone)]
pub struct NearestNeighborStrategy<R> {
    resolver: DistanceResolver<R>,
}

impl<R: RoadDistance> NearestNeighborStrategy<R> {
    pub fn new(resolver: DistanceResolver<R>) -> Self {
        Self { resolver }
    }
}

impl<I: Id, R: RoadDistance> OptimizationStrategy<I> for NearestNeighborStrategy<R> {
    /// The first stop is the fixed depot. From there, each step scans the
    /// pending stops and takes the closest; the strict `<` comparison keeps
    /// the earliest-encountered candidate on equal distances, so input order
    /// is the tie-break and results are reproducible for a given input.
    fn sequence(&self, stops: Vec<Stop<I>>) -> Result<Vec<Stop<I>>, StrategyError> {
        let mut pending = stops;
        if pending.is_empty() {
            return Ok(pending);
        }

        debug!("nearest-neighbor sequencing {} stops", pending.len());

        let mut route = Vec::with_capacity(pending.len());
        let mut current = pending.remove(0);
        current.sequence_number = Some(0);
        let mut current_coord = current.coordinate;
        route.push(current);

        let mut sequence = 1u32;
        while !pending.is_empty() {
            let mut nearest_index = 0;
            let mut min_distance = f64::MAX;

            for (index, candidate) in pending.iter().enumerate() {
                let distance = self
                    .resolver
                    .resolve(current_coord, candidate.coordinate)
                    .distance_km;
                if distance < min_distance {
                    nearest_index = index;
                    min_distance = distance;
                }
            }

            let mut next = pending.remove(nearest_index);
            next.sequence_number = Some(sequence);
            sequence += 1;
            current_coord = next.coordinate;
            route.push(next);
        }

        Ok(route)
    }
}
