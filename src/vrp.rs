//! VRP solver strategy: adapts a stop set to a solver-engine instance.
//!
//! The engine itself stays behind [`VrpBackend`]; this module only builds
//! the instance, feeds the engine a cached cost model, and maps the returned
//! visit order back onto the caller's stops.

use tracing::{debug, info};

use crate::cost_matrix::CostMatrixCache;
use crate::stop::Stop;
use crate::traits::{Id, OptimizationStrategy, RoadDistance, SolverError, StrategyError, VrpBackend};

/// Sequences stops by delegating to a VRP engine.
///
/// The instance is single-vehicle and open-path: the first stop becomes the
/// vehicle's fixed start location and is never reordered; the remaining
/// stops become visit jobs with a one-to-one node mapping. Engine failures
/// propagate to the caller; degrading is the orchestrator's job, not this
/// strategy's.
#[derive(Debug, Clone)]
pub struct VrpSolverStrategy<R, B> {
    client: R,
    backend: B,
}

impl<R: RoadDistance, B: VrpBackend> VrpSolverStrategy<R, B> {
    pub fn new(client: R, backend: B) -> Self {
        Self { client, backend }
    }
}

impl<I, R, B> OptimizationStrategy<I> for VrpSolverStrategy<R, B>
where
    I: Id + Send + Sync,
    R: RoadDistance + Sync,
    B: VrpBackend,
{
    fn sequence(&self, stops: Vec<Stop<I>>) -> Result<Vec<Stop<I>>, StrategyError> {
        if stops.len() <= 1 {
            let mut route = stops;
            for (index, stop) in route.iter_mut().enumerate() {
                stop.sequence_number = Some(index as u32);
            }
            return Ok(route);
        }

        info!("solving VRP instance with {} stops", stops.len());

        let nodes = stops
            .iter()
            .map(|stop| (stop.id.clone(), stop.coordinate))
            .collect();
        let cache = CostMatrixCache::new(&self.client, nodes);
        cache.warm();

        let job_count = stops.len() - 1;
        let solution = self.backend.solve(job_count, &cache)?;
        debug!(
            "engine returned a visit order covering {} jobs",
            solution.visit_order.len()
        );

        // Map the engine's visit order back onto the original stops. Each
        // node may be consumed once; anything else is a malformed solution.
        let mut slots: Vec<Option<Stop<I>>> = stops.into_iter().map(Some).collect();
        let mut route = Vec::with_capacity(slots.len());

        for node in std::iter::once(0).chain(solution.visit_order.iter().copied()) {
            let stop = slots.get_mut(node).and_then(Option::take).ok_or_else(|| {
                SolverError::MalformedSolution(format!("node {node} out of range or visited twice"))
            })?;
            route.push(stop);
        }

        if route.len() != slots.len() {
            return Err(SolverError::MalformedSolution(format!(
                "only {} of {} stops sequenced",
                route.len(),
                slots.len()
            ))
            .into());
        }

        for (index, stop) in route.iter_mut().enumerate() {
            stop.sequence_number = Some(index as u32);
        }

        Ok(route)
    }
}
