//! Error types raised while aggregating community impact.
#![forbid(unsafe_code)]

use eih_core::DemographicColumn;
use thiserror::Error;

/// Reasons a community impact score could not be computed.
///
/// [`SiteScorer::calculate_community_impact_score`](crate::SiteScorer::calculate_community_impact_score)
/// logs these and degrades to `0.0`;
/// [`SiteScorer::community_impact`](crate::SiteScorer::community_impact)
/// returns them to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommunityImpactError {
    /// The demographic dataset has no records.
    #[error("demographic dataset is empty")]
    EmptyDataset,
    /// The selected record lacks a metric column.
    #[error("demographic record is missing column `{column}`")]
    MissingColumn {
        /// Absent column.
        column: DemographicColumn,
    },
    /// No record carries a usable tract centroid to join against.
    #[error("no census tract could be joined to the location")]
    NoTractForLocation,
    /// A fixed tract index fell outside the dataset.
    #[error("tract index {index} is out of range for {len} records")]
    TractOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of records in the dataset.
        len: usize,
    },
    /// The sampler's random number generator was poisoned by a panic.
    #[error("tract sampler is unavailable")]
    SamplerUnavailable,
}
