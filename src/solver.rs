//! Baseline VRP engine (cheapest insertion + 2-opt).
//!
//! The planner treats the solver engine as an external collaborator behind
//! the [`VrpBackend`] trait; this module provides a baseline engine so the
//! crate is usable without an external service. It always returns a complete
//! visit order and makes no optimality claim.

use crate::traits::{SolverError, TransportCost, VrpBackend, VrpSolution};

#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Maximum iterations for local search improvement.
    pub local_search_iterations: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            local_search_iterations: 100,
        }
    }
}

/// Constructs a tour by cheapest insertion, then improves it with 2-opt.
#[derive(Debug, Clone, Default)]
pub struct InsertionSolver {
    options: SolveOptions,
}

impl InsertionSolver {
    pub fn new(options: SolveOptions) -> Self {
        Self { options }
    }
}

impl VrpBackend for InsertionSolver {
    fn solve(&self, job_count: usize, costs: &dyn TransportCost) -> Result<VrpSolution, SolverError> {
        let mut tour: Vec<usize> = Vec::with_capacity(job_count);

        for job in 1..=job_count {
            let mut best_position = 0;
            let mut best_delta = f64::MAX;

            for position in 0..=tour.len() {
                let delta = insertion_delta(&tour, job, position, costs);
                if delta < best_delta {
                    best_delta = delta;
                    best_position = position;
                }
            }

            tour.insert(best_position, job);
        }

        local_search(&mut tour, costs, &self.options);

        Ok(VrpSolution { visit_order: tour })
    }
}

/// Cost change from inserting `job` at `position` in the open path.
fn insertion_delta(tour: &[usize], job: usize, position: usize, costs: &dyn TransportCost) -> f64 {
    let prev = if position == 0 { 0 } else { tour[position - 1] };
    if position == tour.len() {
        costs.cost(prev, job)
    } else {
        let next = tour[position];
        costs.cost(prev, job) + costs.cost(job, next) - costs.cost(prev, next)
    }
}

/// Total open-path cost from the vehicle start (node 0) through the tour.
fn path_cost(tour: &[usize], costs: &dyn TransportCost) -> f64 {
    let mut prev = 0;
    let mut total = 0.0;
    for &node in tour {
        total += costs.cost(prev, node);
        prev = node;
    }
    total
}

/// 2-opt: reverse a segment within the tour to reduce path cost.
/// Returns true if an improvement was made.
fn two_opt_improve(tour: &mut [usize], costs: &dyn TransportCost) -> bool {
    if tour.len() < 2 {
        return false;
    }

    let current_cost = path_cost(tour, costs);
    let n = tour.len();

    for i in 0..n - 1 {
        for j in i + 1..n {
            tour[i..=j].reverse();
            if path_cost(tour, costs) < current_cost {
                return true;
            }
            tour[i..=j].reverse();
        }
    }

    false
}

/// Run local search improvement until no more improvements or max iterations
/// reached.
fn local_search(tour: &mut [usize], costs: &dyn TransportCost, options: &SolveOptions) {
    for _ in 0..options.local_search_iterations {
        if !two_opt_improve(tour, costs) {
            break;
        }
    }
}
