//! Core domain types for the EIH siting engine.
//!
//! The crate holds the pure building blocks used to evaluate Emergency
//! Interim Housing sites: WGS84 [`Location`]s, great-circle distances,
//! reference [`LandmarkSet`]s with [`DistanceDecayScorer`] heuristics,
//! demographic records, the criteria [`WeightTable`], build feasibility
//! screening and shelter coverage statistics.
//!
//! Nothing here performs I/O. Datasets are handed in by callers and are
//! treated as read-only.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod coverage;
pub mod demographic;
pub mod distance;
pub mod feasibility;
pub mod landmark;
mod location;
pub mod proximity;
pub mod site;
pub mod weights;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use coverage::{
    CoverageStats, PitCount, SERVICE_RADIUS_KM, Shelter, ShelterType, TOTAL_UNHOUSED_CATEGORY,
    shelters_within,
};
pub use demographic::{DemographicColumn, DemographicDataset, DemographicRecord};
pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use feasibility::{
    FeasibilityRating, FeasibilityReport, FloodRisk, SoilStability, TerrainSlope,
    evaluate_feasibility,
};
pub use landmark::{Landmark, LandmarkSet};
pub use location::Location;
pub use proximity::{
    DistanceDecayScorer, INFRASTRUCTURE_CAP_KM, ProximityError, SERVICE_CAP_KM, ServiceScorers,
    infrastructure_score, service_proximity,
};
pub use site::{ProposedSite, ProposedSites};
pub use weights::{
    CommunityWeights, InfrastructureWeights, ServiceWeights, WEIGHT_SUM_TOLERANCE, WeightTable,
    WeightTableError,
};
