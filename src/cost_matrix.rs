//! Request-scoped pairwise cost cache for the VRP engine.
//!
//! A solver queries the same pair many times during search; this cache makes
//! each pair cost at most one router call per optimization request. It is
//! constructed fresh per request and bounded by the O(n²) pairs of that
//! request, so there is no eviction and no cross-request state.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rayon::prelude::*;
use tracing::warn;

use crate::stop::Coordinate;
use crate::traits::{Id, RoadDistance, RoadLeg, TransportCost};

/// Cost reported for a pair the router cannot connect.
///
/// Large enough that a minimizing engine steers around the leg, finite so
/// the engine's arithmetic stays stable.
pub const UNREACHABLE_COST: f64 = 1.0e7;

/// Memoizes road legs between the nodes of one routing instance.
///
/// Nodes are addressed by index (`nodes[0]` is the vehicle start, the rest
/// are visit jobs); cache entries are keyed by the ordered pair of stop
/// identities. Successful lookups are cached for the lifetime of the
/// request. Failed lookups are not cached, so a transient router error on
/// one query does not poison later queries for the same pair.
pub struct CostMatrixCache<'a, I, R> {
    client: &'a R,
    nodes: Vec<(I, Coordinate)>,
    legs: Mutex<HashMap<(I, I), RoadLeg>>,
}

impl<'a, I: Id, R: RoadDistance> CostMatrixCache<'a, I, R> {
    pub fn new(client: &'a R, nodes: Vec<(I, Coordinate)>) -> Self {
        Self {
            client,
            nodes,
            legs: Mutex::new(HashMap::new()),
        }
    }

    /// Road distance in kilometers, or [`UNREACHABLE_COST`] when the router
    /// cannot connect the pair right now.
    pub fn distance_km(&self, from: usize, to: usize) -> f64 {
        match self.leg(from, to) {
            Some(leg) => leg.distance_km,
            None => UNREACHABLE_COST,
        }
    }

    /// Travel time in seconds, or [`UNREACHABLE_COST`] when the router
    /// cannot connect the pair right now.
    pub fn travel_time_secs(&self, from: usize, to: usize) -> f64 {
        match self.leg(from, to) {
            Some(leg) => leg.duration_secs,
            None => UNREACHABLE_COST,
        }
    }

    /// Prefetches every pairwise leg concurrently.
    ///
    /// Each lookup is idempotent and independently cached; a failure in one
    /// leg does not affect the others, and later queries see the same values
    /// regardless of fetch order.
    pub fn warm(&self)
    where
        I: Send + Sync,
        R: Sync,
    {
        let n = self.nodes.len();
        (0..n).into_par_iter().for_each(|from| {
            for to in 0..n {
                if from != to {
                    self.leg(from, to);
                }
            }
        });
    }

    fn leg(&self, from: usize, to: usize) -> Option<RoadLeg> {
        let (from_id, from_coord) = &self.nodes[from];
        let (to_id, to_coord) = &self.nodes[to];

        // Identical identity is zero by definition, no lookup.
        if from_id == to_id {
            return Some(RoadLeg {
                distance_km: 0.0,
                duration_secs: 0.0,
            });
        }

        let key = (from_id.clone(), to_id.clone());
        if let Some(leg) = self.entries().get(&key) {
            return Some(*leg);
        }

        match self.client.road_distance(*from_coord, *to_coord) {
            Ok(leg) => {
                self.entries().insert(key, leg);
                Some(leg)
            }
            Err(err) => {
                warn!("{err}; reporting pair as unreachable for this query");
                None
            }
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<(I, I), RoadLeg>> {
        self.legs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<I: Id, R: RoadDistance> TransportCost for CostMatrixCache<'_, I, R> {
    fn cost(&self, from: usize, to: usize) -> f64 {
        self.distance_km(from, to)
    }
}
