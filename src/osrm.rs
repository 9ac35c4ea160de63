//! OSRM HTTP adapter for road distances.

use serde::Deserialize;

use crate::stop::Coordinate;
use crate::traits::{RoadDistance, RoadLeg, RoutingError};

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl RoadDistance for OsrmClient {
    fn road_distance(&self, from: Coordinate, to: Coordinate) -> Result<RoadLeg, RoutingError> {
        let url = format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=false",
            self.config.base_url,
            self.config.profile,
            from.longitude,
            from.latitude,
            to.longitude,
            to.latitude,
        );

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmRouteResponse>())
            .map_err(|err| RoutingError::new(err.to_string()))?;

        if response.code != "Ok" {
            return Err(RoutingError::new(format!(
                "OSRM response code {}",
                response.code
            )));
        }

        let route = response
            .routes
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| RoutingError::new("OSRM returned no route for segment"))?;

        // OSRM reports meters and seconds.
        Ok(RoadLeg {
            distance_km: route.distance / 1000.0,
            duration_secs: route.duration,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    routes: Option<Vec<OsrmRoute>>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
}
