//! Build feasibility screening for proposed sites.
//!
//! The screen uses coarse geographic thresholds in place of real hazard
//! layers: sites west of longitude -121.91 sit in the flood zone, sites south
//! of latitude 37.32 sit on unstable soil, and sites north of latitude 37.35
//! sit on steep terrain. Each hazard deducts from a perfect score of `1.0`
//! and steep terrain raises site preparation cost.

use serde::{Deserialize, Serialize};

use crate::Location;

const FLOOD_LONGITUDE_THRESHOLD: f64 = -121.91;
const UNSTABLE_SOIL_LATITUDE_THRESHOLD: f64 = 37.32;
const STEEP_SLOPE_LATITUDE_THRESHOLD: f64 = 37.35;
const BASE_COST_PER_SQFT: f64 = 250.0;

/// Flood exposure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloodRisk {
    /// Inside the flood zone.
    High,
    /// Outside the flood zone.
    Low,
}

/// Soil stability category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilStability {
    /// Soil supports standard foundations.
    Stable,
    /// Soil needs remediation.
    Unstable,
}

/// Terrain slope category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerrainSlope {
    /// Steep terrain needing heavy site preparation.
    Steep,
    /// Moderate terrain.
    Moderate,
}

impl TerrainSlope {
    /// Multiplier applied to the base construction cost.
    #[must_use]
    pub const fn site_prep_multiplier(self) -> f64 {
        match self {
            Self::Steep => 1.4,
            Self::Moderate => 1.2,
        }
    }

    const fn penalty(self) -> f64 {
        match self {
            Self::Steep => 0.2,
            Self::Moderate => 0.1,
        }
    }
}

/// Qualitative band for a feasibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeasibilityRating {
    /// Score of at least `0.8`.
    Good,
    /// Score of at least `0.6`.
    Fair,
    /// Anything lower.
    Poor,
}

impl FeasibilityRating {
    /// Band a feasibility score.
    #[must_use]
    pub const fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::Good
        } else if score >= 0.6 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Outcome of [`evaluate_feasibility`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityReport {
    /// Flood exposure.
    pub flood_risk: FloodRisk,
    /// Soil stability.
    pub soil_stability: SoilStability,
    /// Terrain slope.
    pub terrain_slope: TerrainSlope,
    /// Estimated construction cost in dollars per square foot, to cents.
    pub estimated_cost_per_sqft: f64,
    /// Feasibility score in `0.0..=1.0`, to two decimal places.
    pub feasibility_score: f64,
    /// Band for [`FeasibilityReport::feasibility_score`].
    pub rating: FeasibilityRating,
}

/// Screen a location for build feasibility.
///
/// # Examples
/// ```
/// use eih_core::{FeasibilityRating, FloodRisk, Location, evaluate_feasibility};
///
/// let report = evaluate_feasibility(Location::new(37.3382, -121.8863));
/// assert_eq!(report.flood_risk, FloodRisk::Low);
/// assert_eq!(report.estimated_cost_per_sqft, 300.0);
/// assert_eq!(report.feasibility_score, 0.9);
/// assert_eq!(report.rating, FeasibilityRating::Good);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "costs and penalties are floating-point amounts"
)]
pub fn evaluate_feasibility(location: Location) -> FeasibilityReport {
    let flood_risk = if location.longitude < FLOOD_LONGITUDE_THRESHOLD {
        FloodRisk::High
    } else {
        FloodRisk::Low
    };
    let soil_stability = if location.latitude < UNSTABLE_SOIL_LATITUDE_THRESHOLD {
        SoilStability::Unstable
    } else {
        SoilStability::Stable
    };
    let terrain_slope = if location.latitude > STEEP_SLOPE_LATITUDE_THRESHOLD {
        TerrainSlope::Steep
    } else {
        TerrainSlope::Moderate
    };

    let estimated_cost_per_sqft =
        round_to_cents(BASE_COST_PER_SQFT * terrain_slope.site_prep_multiplier());

    let mut score = 1.0;
    if flood_risk == FloodRisk::High {
        score -= 0.3;
    }
    if soil_stability == SoilStability::Unstable {
        score -= 0.3;
    }
    score -= terrain_slope.penalty();
    let feasibility_score = round_to_cents(f64::max(score, 0.0));

    FeasibilityReport {
        flood_risk,
        soil_stability,
        terrain_slope,
        estimated_cost_per_sqft,
        feasibility_score,
        rating: FeasibilityRating::from_score(feasibility_score),
    }
}

#[expect(clippy::float_arithmetic, reason = "rounding scales by one hundred")]
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
