//! OSRM integration tests with real Bogotá road data.
//!
//! Ignored by default: they need docker and download/preprocess the
//! Colombia OSM extract on first run. Run with `cargo test -- --ignored`.

mod fixtures;

use std::env;

use testcontainers::core::{IntoContainerPort, Mount};
use testcontainers::runners::SyncRunner;
use testcontainers::{Container, GenericImage, ImageExt, ReuseDirective, TestcontainersError};

use route_optimizer::nearest_neighbor::NearestNeighborStrategy;
use route_optimizer::orchestrator::RouteOrchestrator;
use route_optimizer::osrm::{OsrmClient, OsrmConfig};
use route_optimizer::osrm_data::{GeofabrikRegion, OsrmDataset};
use route_optimizer::resolver::DistanceResolver;
use route_optimizer::traits::RoadDistance;

use fixtures::bogota_locations::{delivery_run, DELIVERY_POINTS, DEPOTS};

fn osrm_container() -> Result<(Container<GenericImage>, String), TestcontainersError> {
    let data_root = env::var("OSRM_DATA_DIR").unwrap_or_else(|_| "osrm-data".to_string());
    let region = GeofabrikRegion::new("south-america/colombia");
    let dataset = OsrmDataset::ensure(&region, data_root)
        .map_err(|err| TestcontainersError::other(format!("OSRM prep failed: {err}")))?;

    let image = GenericImage::new("osrm/osrm-backend", "latest")
        .with_exposed_port(5000.tcp())
        .with_mount(Mount::bind_mount(
            dataset.data_dir.to_string_lossy().to_string(),
            "/data",
        ))
        .with_cmd(vec![
            "osrm-routed",
            "--algorithm",
            "mld",
            "/data/colombia-latest.osrm",
        ])
        .with_container_name("osrm-colombia-mld")
        .with_startup_timeout(std::time::Duration::from_secs(60))
        .with_reuse(ReuseDirective::Always);

    let container = image.start()?;
    let port = container.get_host_port_ipv4(5000.tcp())?;
    let base_url = format!("http://127.0.0.1:{port}");

    Ok((container, base_url))
}

fn osrm_client(base_url: String) -> OsrmClient {
    let config = OsrmConfig {
        base_url,
        ..OsrmConfig::default()
    };
    OsrmClient::new(config).expect("build OSRM client")
}

#[test]
#[ignore = "requires docker and the Colombia OSRM dataset"]
fn road_distance_between_real_locations() {
    let (_container, base_url) = osrm_container().expect("start OSRM container");
    let client = osrm_client(base_url);

    let from = DEPOTS[0].coordinate();
    let to = DELIVERY_POINTS[0].coordinate();
    let leg = client.road_distance(from, to).expect("routable pair");

    assert!(leg.distance_km > 0.0);
    assert!(leg.duration_secs > 0.0);
}

#[test]
#[ignore = "requires docker and the Colombia OSRM dataset"]
fn optimizes_a_delivery_run_over_real_roads() {
    let (_container, base_url) = osrm_container().expect("start OSRM container");
    let client = osrm_client(base_url);

    let strategy = NearestNeighborStrategy::new(DistanceResolver::new(client.clone()));
    let orchestrator = RouteOrchestrator::new(DistanceResolver::new(client), strategy);

    let stops = delivery_run(&DEPOTS[0], 6);
    let expected_len = stops.len();
    let summary = orchestrator.optimize_route(stops);

    assert_eq!(summary.stops.len(), expected_len);
    assert_eq!(summary.stops[0].id, 0, "depot stays first");
    assert!(summary.total_distance_km > 0.0);
    for (index, stop) in summary.stops.iter().enumerate() {
        assert_eq!(stop.sequence_number, Some(index as u32));
    }
}
