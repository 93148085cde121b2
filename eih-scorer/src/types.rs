//! Result types produced by the site scorer.

use eih_core::Location;
use serde::{Deserialize, Serialize};

/// Sub-scores behind a total score, each nominally in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    /// Public transit proximity.
    pub transit: f64,
    /// Healthcare proximity.
    pub healthcare: f64,
    /// Grocery proximity.
    pub grocery: f64,
    /// Social service proximity.
    pub social_services: f64,
    /// Infrastructure access.
    pub infrastructure: f64,
    /// Community impact.
    pub community_impact: f64,
}

/// Outcome of scoring one location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Weighted suitability score.
    pub total_score: f64,
    /// Per-criterion breakdown.
    pub component_scores: ComponentScores,
}

/// One row of a ranked table.
///
/// Serialises flat: coordinates, total, then each component score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedSite {
    /// Candidate latitude.
    pub latitude: f64,
    /// Candidate longitude.
    pub longitude: f64,
    /// Weighted suitability score.
    pub total_score: f64,
    /// Per-criterion breakdown.
    #[serde(flatten)]
    pub components: ComponentScores,
}

impl RankedSite {
    /// Flatten a score for `location` into a table row.
    #[must_use]
    pub const fn new(location: Location, result: ScoreResult) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
            total_score: result.total_score,
            components: result.component_scores,
        }
    }

    /// Candidate position.
    #[must_use]
    pub const fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }
}
