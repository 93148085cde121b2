//! Census-tract demographic records and the read-only dataset that holds
//! them.
//!
//! Every metric column is optional so a dataset with a missing column can
//! still be loaded; the community impact aggregator reports the gap instead
//! of the loader. Records that carry a centroid are indexed in an R\*-tree so
//! a location can be joined to its nearest tract.

use rstar::RTree;
use rstar::primitives::GeomWithData;
use serde::{Deserialize, Serialize};

use crate::Location;

type IndexedCentroid = GeomWithData<[f64; 2], usize>;

/// Metric columns consumed by the community impact aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemographicColumn {
    /// People per square kilometre.
    PopulationDensity,
    /// Share of residents below the poverty line, in percent.
    PovertyRate,
    /// CalEnviroScreen environmental burden index, `0..=100`.
    CalenviroscreenScore,
}

impl DemographicColumn {
    /// Column name as it appears in dataset files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PopulationDensity => "population_density",
            Self::PovertyRate => "poverty_rate",
            Self::CalenviroscreenScore => "calenviroscreen_score",
        }
    }
}

impl std::fmt::Display for DemographicColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a demographic dataset.
///
/// # Examples
/// ```
/// use eih_core::{DemographicColumn, DemographicRecord};
///
/// let record = DemographicRecord::new(4_500.0, 12.0, 40.0);
/// assert_eq!(record.value(DemographicColumn::PovertyRate), Some(12.0));
/// assert!(record.centroid().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DemographicRecord {
    /// Census tract identifier.
    #[serde(default)]
    pub tract_id: Option<String>,
    /// Latitude of the tract centroid.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude of the tract centroid.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Resident population. Informational; tabular exports may write it
    /// as a float.
    #[serde(default)]
    pub population: Option<f64>,
    /// Point-in-time unhoused count for the tract. Informational.
    #[serde(default)]
    pub unhoused_count: Option<f64>,
    /// People per square kilometre.
    #[serde(default)]
    pub population_density: Option<f64>,
    /// Poverty rate in percent.
    #[serde(default)]
    pub poverty_rate: Option<f64>,
    /// CalEnviroScreen score, `0..=100`.
    #[serde(default)]
    pub calenviroscreen_score: Option<f64>,
}

impl DemographicRecord {
    /// Build a record carrying only the three scoring metrics.
    #[must_use]
    pub const fn new(population_density: f64, poverty_rate: f64, calenviroscreen_score: f64) -> Self {
        Self {
            tract_id: None,
            latitude: None,
            longitude: None,
            population: None,
            unhoused_count: None,
            population_density: Some(population_density),
            poverty_rate: Some(poverty_rate),
            calenviroscreen_score: Some(calenviroscreen_score),
        }
    }

    /// Attach a tract identifier and centroid.
    #[must_use]
    pub fn with_tract(mut self, tract_id: impl Into<String>, centroid: Location) -> Self {
        self.tract_id = Some(tract_id.into());
        self.latitude = Some(centroid.latitude);
        self.longitude = Some(centroid.longitude);
        self
    }

    /// Return the value of a metric column, if present.
    #[must_use]
    pub const fn value(&self, column: DemographicColumn) -> Option<f64> {
        match column {
            DemographicColumn::PopulationDensity => self.population_density,
            DemographicColumn::PovertyRate => self.poverty_rate,
            DemographicColumn::CalenviroscreenScore => self.calenviroscreen_score,
        }
    }

    /// Tract centroid when both coordinates are present and finite.
    #[must_use]
    pub fn centroid(&self) -> Option<Location> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) if latitude.is_finite() && longitude.is_finite() => {
                Some(Location::new(latitude, longitude))
            }
            _ => None,
        }
    }
}

/// Read-only collection of [`DemographicRecord`]s.
///
/// # Examples
/// ```
/// use eih_core::{DemographicDataset, DemographicRecord, Location};
///
/// let dataset = DemographicDataset::new(vec![
///     DemographicRecord::new(3_000.0, 10.0, 30.0)
///         .with_tract("5001.00", Location::new(37.34, -121.89)),
///     DemographicRecord::new(8_000.0, 25.0, 70.0)
///         .with_tract("5002.00", Location::new(37.25, -121.80)),
/// ]);
/// let nearest = dataset.nearest(Location::new(37.33, -121.88));
/// assert_eq!(nearest.and_then(|r| r.tract_id.as_deref()), Some("5001.00"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DemographicDataset {
    records: Vec<DemographicRecord>,
    centroids: RTree<IndexedCentroid>,
}

impl DemographicDataset {
    /// Wrap `records` and index their centroids.
    #[must_use]
    pub fn new(records: Vec<DemographicRecord>) -> Self {
        let entries = records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                record
                    .centroid()
                    .map(|centroid| GeomWithData::new([centroid.longitude, centroid.latitude], index))
            })
            .collect();
        Self {
            records,
            centroids: RTree::bulk_load(entries),
        }
    }

    /// All records in dataset order.
    #[must_use]
    pub fn records(&self) -> &[DemographicRecord] {
        &self.records
    }

    /// Return the record at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DemographicRecord> {
        self.records.get(index)
    }

    /// Number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Report whether the dataset has no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records with a usable centroid.
    #[must_use]
    pub fn indexed_len(&self) -> usize {
        self.centroids.size()
    }

    /// Return the record whose centroid is nearest to `location`.
    ///
    /// Distances are compared in longitude/latitude degree space, which is
    /// adequate at city scale. Returns `None` when no record has a centroid
    /// or the location is not finite.
    #[must_use]
    pub fn nearest(&self, location: Location) -> Option<&DemographicRecord> {
        if !location.latitude.is_finite() || !location.longitude.is_finite() {
            return None;
        }
        self.centroids
            .nearest_neighbor(&[location.longitude, location.latitude])
            .and_then(|entry| self.records.get(entry.data))
    }
}

impl From<Vec<DemographicRecord>> for DemographicDataset {
    fn from(records: Vec<DemographicRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<DemographicRecord> for DemographicDataset {
    fn from_iter<I: IntoIterator<Item = DemographicRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
