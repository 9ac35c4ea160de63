//! OSRM dataset provisioning (download + preprocess) for integration tests.
//!
//! Downloads a Geofabrik extract and runs the OSRM MLD preprocessing
//! pipeline through docker. Only the ignored integration tests use this;
//! the planner itself never touches the filesystem.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug)]
pub enum OsrmDataError {
    Io(io::Error),
    Http(reqwest::Error),
    ProcessFailure(String),
}

impl From<io::Error> for OsrmDataError {
    fn from(err: io::Error) -> Self {
        OsrmDataError::Io(err)
    }
}

impl From<reqwest::Error> for OsrmDataError {
    fn from(err: reqwest::Error) -> Self {
        OsrmDataError::Http(err)
    }
}

impl fmt::Display for OsrmDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "dataset io error: {err}"),
            Self::Http(err) => write!(f, "dataset download error: {err}"),
            Self::ProcessFailure(message) => write!(f, "dataset preprocessing failed: {message}"),
        }
    }
}

impl std::error::Error for OsrmDataError {}

/// Geofabrik region path, e.g. "south-america/colombia".
#[derive(Debug, Clone)]
pub struct GeofabrikRegion {
    path: String,
}

impl GeofabrikRegion {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or("region")
    }

    pub fn url(&self) -> String {
        format!("https://download.geofabrik.de/{}-latest.osm.pbf", self.path)
    }
}

/// A downloaded and preprocessed dataset, ready for
/// `osrm-routed --algorithm mld`.
#[derive(Debug, Clone)]
pub struct OsrmDataset {
    pub data_dir: PathBuf,
    pub osrm_base: PathBuf,
}

impl OsrmDataset {
    /// Ensures the extract exists under `data_root` and is MLD-preprocessed,
    /// downloading and running the docker pipeline only for missing steps.
    pub fn ensure(region: &GeofabrikRegion, data_root: impl Into<PathBuf>) -> Result<Self, OsrmDataError> {
        let data_root = data_root.into();
        let data_root = if data_root.is_absolute() {
            data_root
        } else {
            std::env::current_dir()?.join(data_root)
        };
        let data_dir = data_root.join(region.name());
        fs::create_dir_all(&data_dir)?;

        let pbf_name = format!("{}-latest.osm.pbf", region.name());
        let pbf_path = data_dir.join(&pbf_name);
        if !pbf_path.exists() {
            download_pbf(&region.url(), &pbf_path)?;
        }

        let osrm_base = data_dir.join(format!("{}-latest.osrm", region.name()));
        if !osrm_base.exists() {
            osrm_backend(&data_dir, &["osrm-extract", "-p", "/opt/car.lua", &format!("/data/{pbf_name}")])?;
        }

        if !mld_ready(&osrm_base) {
            let osrm_name = format!("/data/{}-latest.osrm", region.name());
            osrm_backend(&data_dir, &["osrm-partition", &osrm_name])?;
            osrm_backend(&data_dir, &["osrm-customize", &osrm_name])?;
        }

        Ok(Self {
            data_dir,
            osrm_base,
        })
    }
}

fn download_pbf(url: &str, dest: &Path) -> Result<(), OsrmDataError> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let tmp_path = dest.with_extension("tmp");
    let mut writer = BufWriter::new(File::create(&tmp_path)?);
    writer.write_all(&response.bytes()?)?;
    writer.flush()?;
    fs::rename(tmp_path, dest)?;
    Ok(())
}

fn mld_ready(osrm_base: &Path) -> bool {
    osrm_base.exists()
        && osrm_base.with_extension("osrm.partition").exists()
        && osrm_base.with_extension("osrm.cells").exists()
}

fn osrm_backend(data_dir: &Path, args: &[&str]) -> Result<(), OsrmDataError> {
    let status = Command::new("docker")
        .args(["run", "--rm", "-t", "-v"])
        .arg(format!("{}:/data", data_dir.display()))
        .arg("osrm/osrm-backend")
        .args(args)
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(OsrmDataError::ProcessFailure(format!(
            "docker {} exited with status {}",
            args.first().copied().unwrap_or("run"),
            status
        )))
    }
}
