//! Criterion weights for the suitability score.
//!
//! The table has three categories and ten leaf weights. Leaf weights must be
//! finite, non-negative and sum to `1.0` within [`WEIGHT_SUM_TOLERANCE`];
//! [`WeightTable::validate`] enforces this.
//!
//! Service criteria are each weighted by their own leaf weight. The
//! infrastructure and community categories are each represented by a single
//! sub-score, which is weighted by the *mean* of the category's three leaf
//! weights (`sum / 3`), not their sum.

use thiserror::Error;

/// Allowed absolute deviation of the leaf-weight sum from `1.0`.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weights for the four service proximity criteria.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceWeights {
    /// Public transit access.
    pub public_transit: f64,
    /// Healthcare access.
    pub healthcare: f64,
    /// Grocery access.
    pub grocery: f64,
    /// Social service access.
    pub social_services: f64,
}

/// Weights for the three infrastructure criteria.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfrastructureWeights {
    /// Utility availability.
    pub utilities: f64,
    /// Road connectivity.
    pub road_connectivity: f64,
    /// Emergency response coverage.
    pub emergency_response: f64,
}

/// Weights for the three community impact criteria.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommunityWeights {
    /// Population density.
    pub population_density: f64,
    /// Demographic risk.
    pub demographic_risk: f64,
    /// Environmental justice.
    pub environmental_justice: f64,
}

impl InfrastructureWeights {
    #[expect(clippy::float_arithmetic, reason = "category weights are summed")]
    fn sum(self) -> f64 {
        self.utilities + self.road_connectivity + self.emergency_response
    }
}

impl CommunityWeights {
    #[expect(clippy::float_arithmetic, reason = "category weights are summed")]
    fn sum(self) -> f64 {
        self.population_density + self.demographic_risk + self.environmental_justice
    }
}

/// Errors returned by [`WeightTable::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightTableError {
    /// A leaf weight was `NaN` or infinite.
    #[error("weight for {criterion} must be finite")]
    NonFinite {
        /// Offending criterion.
        criterion: &'static str,
    },
    /// A leaf weight was negative.
    #[error("weight for {criterion} must not be negative, found {weight}")]
    Negative {
        /// Offending criterion.
        criterion: &'static str,
        /// Supplied weight.
        weight: f64,
    },
    /// The leaf weights did not sum to one.
    #[error("leaf weights must sum to 1.0, found {sum}")]
    InvalidSum {
        /// Actual sum of the ten leaf weights.
        sum: f64,
    },
}

/// Three-level weight table: category, criterion, weight.
///
/// # Examples
/// ```
/// use eih_core::WeightTable;
///
/// let table = WeightTable::default().validate()?;
/// assert!((table.leaf_sum() - 1.0).abs() < 1e-9);
/// # Ok::<(), eih_core::WeightTableError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTable {
    /// Service proximity weights.
    pub services: ServiceWeights,
    /// Infrastructure weights.
    pub infrastructure: InfrastructureWeights,
    /// Community impact weights.
    pub community: CommunityWeights,
}

impl WeightTable {
    /// Leaf weights paired with their criterion names.
    #[must_use]
    pub const fn leaves(&self) -> [(&'static str, f64); 10] {
        [
            ("public_transit", self.services.public_transit),
            ("healthcare", self.services.healthcare),
            ("grocery", self.services.grocery),
            ("social_services", self.services.social_services),
            ("utilities", self.infrastructure.utilities),
            ("road_connectivity", self.infrastructure.road_connectivity),
            ("emergency_response", self.infrastructure.emergency_response),
            ("population_density", self.community.population_density),
            ("demographic_risk", self.community.demographic_risk),
            ("environmental_justice", self.community.environmental_justice),
        ]
    }

    /// Sum of the ten leaf weights.
    #[must_use]
    pub fn leaf_sum(&self) -> f64 {
        self.leaves().iter().map(|(_, weight)| weight).sum()
    }

    /// Validate the table and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightTableError`] when a weight is non-finite or negative,
    /// or when the leaf weights do not sum to `1.0`.
    #[expect(
        clippy::float_arithmetic,
        reason = "validation compares the weight sum against one"
    )]
    pub fn validate(self) -> Result<Self, WeightTableError> {
        for (criterion, weight) in self.leaves() {
            if !weight.is_finite() {
                return Err(WeightTableError::NonFinite { criterion });
            }
            if weight < 0.0 {
                return Err(WeightTableError::Negative { criterion, weight });
            }
        }
        let sum = self.leaf_sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightTableError::InvalidSum { sum });
        }
        Ok(self)
    }

    /// Combine sub-scores into a total score.
    ///
    /// Each service score uses its own leaf weight; the infrastructure and
    /// community scores use the mean of their category's leaf weights.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the total is a weighted sum of sub-scores"
    )]
    pub fn weighted_total(
        &self,
        transit: f64,
        healthcare: f64,
        grocery: f64,
        social_services: f64,
        infrastructure: f64,
        community_impact: f64,
    ) -> f64 {
        let services = &self.services;
        transit * services.public_transit
            + healthcare * services.healthcare
            + grocery * services.grocery
            + social_services * services.social_services
            + infrastructure * self.infrastructure.sum() / 3.0
            + community_impact * self.community.sum() / 3.0
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            services: ServiceWeights {
                public_transit: 0.10,
                healthcare: 0.10,
                grocery: 0.10,
                social_services: 0.10,
            },
            infrastructure: InfrastructureWeights {
                utilities: 0.10,
                road_connectivity: 0.10,
                emergency_response: 0.10,
            },
            community: CommunityWeights {
                population_density: 0.10,
                demographic_risk: 0.10,
                environmental_justice: 0.10,
            },
        }
    }
}
