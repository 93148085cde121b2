//! JSON dataset loaders for the EIH siting engine.
//!
//! Each loader reads a JSON array from disk and hands back the matching
//! `eih-core` type. Demographic rows, shelters and point-in-time counts are
//! read-only inputs to scoring and coverage; candidate files list proposed
//! sites.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use eih_data::load_demographics;
//!
//! let dataset = load_demographics(Utf8Path::new("data/demographics.json"))?;
//! println!("{} tracts", dataset.len());
//! # Ok::<(), eih_data::DatasetError>(())
//! ```

#![forbid(unsafe_code)]

use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use eih_core::{DemographicDataset, DemographicRecord, PitCount, ProposedSites, Shelter};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use thiserror::Error;

mod fs;

pub use fs::{file_is_file, open_utf8_file};

/// Errors raised while loading a dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Opening the file failed.
    #[error("failed to open dataset at {path}")]
    Open {
        /// Requested path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The file was not a JSON array of the expected records.
    #[error("failed to parse dataset at {path}")]
    Parse {
        /// Requested path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Load demographic records and index their tract centroids.
///
/// # Errors
/// Returns [`DatasetError`] when the file cannot be opened or parsed.
pub fn load_demographics(path: &Utf8Path) -> Result<DemographicDataset, DatasetError> {
    let records: Vec<DemographicRecord> = load_json(path)?;
    let dataset = DemographicDataset::new(records);
    debug!(
        "loaded {} demographic records ({} with centroids) from {path}",
        dataset.len(),
        dataset.indexed_len()
    );
    let unindexed = dataset.len().saturating_sub(dataset.indexed_len());
    if unindexed > 0 {
        warn!("{unindexed} demographic records in {path} have no centroid and cannot be joined to a location");
    }
    Ok(dataset)
}

/// Load existing shelters.
///
/// # Errors
/// Returns [`DatasetError`] when the file cannot be opened or parsed.
pub fn load_shelters(path: &Utf8Path) -> Result<Vec<Shelter>, DatasetError> {
    let shelters: Vec<Shelter> = load_json(path)?;
    debug!("loaded {} shelters from {path}", shelters.len());
    Ok(shelters)
}

/// Load point-in-time counts.
///
/// # Errors
/// Returns [`DatasetError`] when the file cannot be opened or parsed.
pub fn load_pit_counts(path: &Utf8Path) -> Result<Vec<PitCount>, DatasetError> {
    let counts: Vec<PitCount> = load_json(path)?;
    debug!("loaded {} point-in-time counts from {path}", counts.len());
    Ok(counts)
}

/// Load proposed candidate sites.
///
/// # Errors
/// Returns [`DatasetError`] when the file cannot be opened or parsed.
pub fn load_candidates(path: &Utf8Path) -> Result<ProposedSites, DatasetError> {
    let sites: ProposedSites = load_json(path)?;
    debug!("loaded {} candidate sites from {path}", sites.len());
    Ok(sites)
}

fn load_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, DatasetError> {
    let file = open_utf8_file(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
