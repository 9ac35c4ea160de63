//! Route orchestration: strategy selection, fallback, distance accrual.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{error, info};

use crate::nearest_neighbor::NearestNeighborStrategy;
use crate::resolver::DistanceResolver;
use crate::stop::{Coordinate, Stop};
use crate::traits::{Id, OptimizationStrategy, RoadDistance, StrategyError, VrpBackend};
use crate::vrp::VrpSolverStrategy;

/// Which optimization strategy an orchestrator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    #[default]
    NearestNeighbor,
    VrpSolver,
}

/// A strategy selected by configuration.
#[derive(Debug, Clone)]
pub enum PlannerStrategy<R, B> {
    NearestNeighbor(NearestNeighborStrategy<R>),
    VrpSolver(VrpSolverStrategy<R, B>),
}

impl<R: RoadDistance + Clone, B: VrpBackend> PlannerStrategy<R, B> {
    pub fn from_kind(kind: StrategyKind, client: R, backend: B) -> Self {
        match kind {
            StrategyKind::NearestNeighbor => {
                Self::NearestNeighbor(NearestNeighborStrategy::new(DistanceResolver::new(client)))
            }
            StrategyKind::VrpSolver => Self::VrpSolver(VrpSolverStrategy::new(client, backend)),
        }
    }
}

impl<I, R, B> OptimizationStrategy<I> for PlannerStrategy<R, B>
where
    I: Id + Send + Sync,
    R: RoadDistance + Sync,
    B: VrpBackend,
{
    fn sequence(&self, stops: Vec<Stop<I>>) -> Result<Vec<Stop<I>>, StrategyError> {
        match self {
            Self::NearestNeighbor(strategy) => strategy.sequence(stops),
            Self::VrpSolver(strategy) => strategy.sequence(stops),
        }
    }
}

/// The final ordered route and its total travel distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary<I> {
    pub stops: Vec<Stop<I>>,
    pub total_distance_km: f64,
}

/// Runs one optimization request end to end.
///
/// Two steps, try once then degrade: sequencing failures fall back to the
/// caller's input order, and distance lookups fall back to geodesic values,
/// so `optimize_route` itself never fails.
#[derive(Debug, Clone)]
pub struct RouteOrchestrator<R, S> {
    resolver: DistanceResolver<R>,
    strategy: S,
}

impl<R: RoadDistance + Sync, S: Sync> RouteOrchestrator<R, S> {
    pub fn new(resolver: DistanceResolver<R>, strategy: S) -> Self {
        Self { resolver, strategy }
    }

    /// Orders the stops and reports the total travel distance.
    ///
    /// `stops[0]` is the depot. Empty and singleton inputs are valid; for
    /// fewer than two stops the total distance is 0.
    pub fn optimize_route<I>(&self, stops: Vec<Stop<I>>) -> RouteSummary<I>
    where
        I: Id,
        S: OptimizationStrategy<I>,
    {
        info!("optimizing route with {} stops", stops.len());

        let route = match self.strategy.sequence(stops.clone()) {
            Ok(route) => route,
            Err(err) => {
                error!("{err}; keeping original stop order");
                let mut fallback = stops;
                for (index, stop) in fallback.iter_mut().enumerate() {
                    stop.sequence_number = Some(index as u32);
                }
                fallback
            }
        };

        let total_distance_km = self.total_distance_km(&route);
        info!("route optimized, total distance {total_distance_km} km");

        RouteSummary {
            stops: route,
            total_distance_km,
        }
    }

    /// Sums resolved distances over consecutive route pairs, rounded half-up
    /// to two decimals. Legs resolve in parallel but accumulate in route
    /// order, so the total does not depend on fetch completion order.
    fn total_distance_km<I>(&self, route: &[Stop<I>]) -> f64 {
        if route.len() < 2 {
            return 0.0;
        }

        let coords: Vec<Coordinate> = route.iter().map(|stop| stop.coordinate).collect();
        let legs: Vec<f64> = coords
            .par_windows(2)
            .map(|pair| self.resolver.resolve(pair[0], pair[1]).distance_km)
            .collect();
        let total: f64 = legs.iter().sum();

        (total * 100.0).round() / 100.0
    }
}
