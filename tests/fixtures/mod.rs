//! Test fixtures for route-optimizer.
//!
//! Provides real Bogotá locations (from OpenStreetMap) for realistic
//! delivery-route scenarios.

pub mod bogota_locations;

pub use bogota_locations::*;
