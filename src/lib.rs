//! route-optimizer core
//!
//! Orders delivery stops into a visiting sequence and reports the travelled
//! distance. Road-network distances come from an external router; when the
//! router is unavailable the planner falls back to geodesic distances, and
//! when the optimization strategy fails it falls back to the caller's input
//! order, so an optimization request always produces an answer.

pub mod traits;
pub mod stop;
pub mod haversine;
pub mod resolver;
pub mod cost_matrix;
pub mod nearest_neighbor;
pub mod vrp;
pub mod solver;
pub mod osrm;
pub mod osrm_data;
pub mod orchestrator;
