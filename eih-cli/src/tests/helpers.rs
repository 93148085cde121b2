//! Test helpers for writing JSON datasets into a scratch workspace.

use camino::{Utf8Path, Utf8PathBuf};
use rstest::fixture;
use tempfile::TempDir;

pub(super) const CANDIDATES_JSON: &str = r#"[
    {"latitude": 37.2000, "longitude": -121.7000, "address": "Coyote Valley"},
    {"latitude": 37.3382, "longitude": -121.8863, "address": "200 E Santa Clara St"},
    {"latitude": 37.3300, "longitude": -121.9500}
]"#;

pub(super) const DEMOGRAPHICS_JSON: &str = r#"[
    {"tract_id": "5001.00", "latitude": 37.34, "longitude": -121.89,
     "population_density": 5000.0, "poverty_rate": 15.0, "calenviroscreen_score": 50.0},
    {"tract_id": "5002.00", "latitude": 37.20, "longitude": -121.70,
     "population_density": 1000.0, "poverty_rate": 3.0, "calenviroscreen_score": 10.0}
]"#;

pub(super) const SHELTERS_JSON: &str = r#"[
    {"name": "Civic Center EIH", "shelter_type": "EIH", "latitude": 37.3390, "longitude": -121.8870,
     "capacity": 100, "current_occupancy": 90},
    {"name": "Monterey Transitional", "shelter_type": "Transitional", "latitude": 37.2500, "longitude": -121.8000,
     "capacity": 100, "current_occupancy": 60}
]"#;

pub(super) const PIT_COUNTS_JSON: &str = r#"[
    {"category": "Sheltered", "count": 150},
    {"category": "Total Unhoused", "count": 600}
]"#;

/// Scratch directory holding dataset files for one test.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

#[fixture]
pub(super) fn workspace() -> Workspace {
    let dir = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
    Workspace { _dir: dir, root }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write dataset file");
}

pub(super) fn output_json(buffer: &[u8]) -> serde_json::Value {
    serde_json::from_slice(buffer).expect("command output should be JSON")
}
