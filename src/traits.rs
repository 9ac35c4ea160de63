//! Core contracts for the route planner.
//!
//! These are intentionally minimal. The road-network router and the VRP
//! engine are external collaborators; the planner only ever sees these
//! interfaces.

use std::fmt;
use std::hash::Hash;

use crate::stop::{Coordinate, Stop};

/// Unique identifier for a stop.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// One road-network leg between two coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadLeg {
    /// Travelled distance in kilometers.
    pub distance_km: f64,
    /// Travel time in seconds.
    pub duration_secs: f64,
}

/// Road distance lookup failed for a segment.
///
/// The planner treats every failure uniformly (no route found, backend
/// unavailable, bad response); the message exists for logs only.
#[derive(Debug, Clone)]
pub struct RoutingError {
    message: String,
}

impl RoutingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "road distance unavailable: {}", self.message)
    }
}

impl std::error::Error for RoutingError {}

/// Adapter to an external road-network routing engine.
pub trait RoadDistance {
    /// Returns the road distance and travel time from `from` to `to`.
    fn road_distance(&self, from: Coordinate, to: Coordinate) -> Result<RoadLeg, RoutingError>;
}

/// The VRP engine could not produce a usable solution.
#[derive(Debug, Clone)]
pub enum SolverError {
    /// The engine finished without finding any solution.
    NoSolution(String),
    /// The engine returned a visit order that is not a permutation of the jobs.
    MalformedSolution(String),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSolution(message) => write!(f, "solver found no solution: {message}"),
            Self::MalformedSolution(message) => {
                write!(f, "solver returned a malformed solution: {message}")
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// An optimization strategy could not sequence the stops.
#[derive(Debug, Clone)]
pub struct StrategyError {
    message: String,
}

impl StrategyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route optimization failed: {}", self.message)
    }
}

impl std::error::Error for StrategyError {}

impl From<SolverError> for StrategyError {
    fn from(err: SolverError) -> Self {
        Self::new(err.to_string())
    }
}

/// A pluggable algorithm that orders stops into a route.
///
/// `stops[0]` is the fixed depot and stays first. Implementations return
/// every input stop exactly once, with contiguous sequence numbers assigned
/// from 0.
pub trait OptimizationStrategy<I: Id> {
    fn sequence(&self, stops: Vec<Stop<I>>) -> Result<Vec<Stop<I>>, StrategyError>;
}

/// Transport-cost model a VRP engine consults during search.
///
/// Nodes are instance indices: node 0 is the vehicle start, nodes
/// `1..=job_count` are visit jobs. Implementations always return a finite,
/// non-negative number so the engine's search stays numerically stable.
pub trait TransportCost {
    fn cost(&self, from: usize, to: usize) -> f64;
}

/// Visit order produced by a VRP engine: job node indices, vehicle start
/// excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VrpSolution {
    pub visit_order: Vec<usize>,
}

/// Adapter to an external vehicle-routing solver engine.
///
/// The instance is single-vehicle and open-path: the vehicle starts at node
/// 0 and does not return to it. Engines return a single solution; when
/// several solutions score equally, which one comes back is arbitrary and
/// callers must not rely on a particular tie-break.
pub trait VrpBackend {
    fn solve(&self, job_count: usize, costs: &dyn TransportCost) -> Result<VrpSolution, SolverError>;
}
