//! Weighted multi-criteria scoring and ranking of candidate sites.

use std::cmp::Ordering;

use eih_core::{
    DemographicDataset, DistanceDecayScorer, Location, ServiceScorers, WeightTable,
    WeightTableError,
};
use log::{debug, error};

use crate::{
    CommunityImpactError, ComponentScores, RandomSample, RankedSite, ScoreResult, TractLookup,
    community_impact,
};

/// Number of rows [`SiteScorer::get_top_locations`] callers ask for by
/// default.
pub const DEFAULT_TOP_N: usize = 5;

/// Scores candidate locations for Emergency Interim Housing.
///
/// Holds a validated [`WeightTable`], one distance-decay scorer per service
/// criterion, the infrastructure scorer and the [`TractLookup`] used for
/// community impact. None of these change after construction.
///
/// Cloning a scorer clones its lookup too: a clone of a seeded scorer
/// carries its own copy of the random sequence, so scoring through one
/// never shifts the draws seen by the other.
///
/// # Examples
/// ```
/// use eih_core::{DemographicDataset, DemographicRecord, Location};
/// use eih_scorer::{FixedTract, SiteScorer};
///
/// let dataset = DemographicDataset::new(vec![DemographicRecord::new(5_000.0, 15.0, 50.0)]);
/// let scorer = SiteScorer::with_defaults().with_lookup(FixedTract::new(0));
/// let result = scorer.score_location(Location::new(37.3382, -121.8863), &dataset);
/// assert_eq!(result.component_scores.transit, 1.0);
/// assert!((result.total_score - 0.55).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct SiteScorer {
    weights: WeightTable,
    services: ServiceScorers,
    infrastructure: DistanceDecayScorer,
    lookup: Box<dyn TractLookup>,
}

impl SiteScorer {
    /// Build a scorer over `weights` with the default landmarks and a
    /// randomly seeded sampler.
    ///
    /// # Errors
    /// Returns [`WeightTableError`] when the table is invalid.
    pub fn new(weights: WeightTable) -> Result<Self, WeightTableError> {
        Ok(Self::from_validated(weights.validate()?))
    }

    /// Scorer with the default weight table.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::from_validated(WeightTable::default())
    }

    fn from_validated(weights: WeightTable) -> Self {
        Self {
            weights,
            services: ServiceScorers::default(),
            infrastructure: DistanceDecayScorer::infrastructure(),
            lookup: Box::new(RandomSample::from_entropy()),
        }
    }

    /// Replace the tract lookup strategy.
    #[must_use]
    pub fn with_lookup(mut self, lookup: impl TractLookup + 'static) -> Self {
        self.lookup = Box::new(lookup);
        self
    }

    /// Replace the per-criterion service scorers.
    #[must_use]
    pub fn with_service_scorers(mut self, services: ServiceScorers) -> Self {
        self.services = services;
        self
    }

    /// Replace the infrastructure scorer.
    #[must_use]
    pub fn with_infrastructure(mut self, infrastructure: DistanceDecayScorer) -> Self {
        self.infrastructure = infrastructure;
        self
    }

    /// The validated weight table.
    #[must_use]
    pub const fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Community impact for `location`, surfacing failures.
    ///
    /// # Errors
    /// Returns [`CommunityImpactError`] when no record can be selected or
    /// the selected record lacks a metric column.
    pub fn community_impact(
        &self,
        location: Location,
        dataset: &DemographicDataset,
    ) -> Result<f64, CommunityImpactError> {
        let record = self.lookup.select(location, dataset)?;
        community_impact(record)
    }

    /// Community impact for `location`, or `0.0` when it cannot be computed.
    ///
    /// Failures are logged at error level and never returned, so one bad
    /// record cannot abort a batch.
    #[must_use]
    pub fn calculate_community_impact_score(
        &self,
        location: Location,
        dataset: &DemographicDataset,
    ) -> f64 {
        self.community_impact(location, dataset)
            .unwrap_or_else(|err| {
                error!(
                    "community impact unavailable for ({}, {}): {err}",
                    location.latitude, location.longitude
                );
                0.0
            })
    }

    /// Score a single location.
    #[must_use]
    pub fn score_location(&self, location: Location, dataset: &DemographicDataset) -> ScoreResult {
        let component_scores = ComponentScores {
            transit: self.services.transit.score(location),
            healthcare: self.services.healthcare.score(location),
            grocery: self.services.grocery.score(location),
            social_services: self.services.social_services.score(location),
            infrastructure: self.infrastructure.score(location),
            community_impact: self.calculate_community_impact_score(location, dataset),
        };
        let total_score = self.weights.weighted_total(
            component_scores.transit,
            component_scores.healthcare,
            component_scores.grocery,
            component_scores.social_services,
            component_scores.infrastructure,
            component_scores.community_impact,
        );
        ScoreResult {
            total_score,
            component_scores,
        }
    }

    /// Score every candidate and return the best `n`, highest first.
    ///
    /// Ties keep input order and `NaN` totals sort last. Asking for more
    /// rows than there are candidates returns every candidate.
    #[must_use]
    pub fn get_top_locations(
        &self,
        candidates: &[Location],
        dataset: &DemographicDataset,
        n: usize,
    ) -> Vec<RankedSite> {
        let mut rows: Vec<RankedSite> = candidates
            .iter()
            .map(|&location| RankedSite::new(location, self.score_location(location, dataset)))
            .collect();
        rows.sort_by(|a, b| rank_order(a.total_score, b.total_score));
        rows.truncate(n);
        debug!(
            "ranked {} candidates, returning top {}",
            candidates.len(),
            rows.len()
        );
        rows
    }
}

impl Default for SiteScorer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn rank_order(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}
