//! Facade crate for the EIH siting engine.
//!
//! This crate re-exports the core domain types and the site scorer, and
//! exposes the JSON dataset loaders behind the `data` feature.

#![forbid(unsafe_code)]

pub use eih_core::{
    CoverageStats, DemographicColumn, DemographicDataset, DemographicRecord, DistanceDecayScorer,
    FeasibilityRating, FeasibilityReport, Landmark, LandmarkSet, Location, PitCount, ProposedSite,
    ProposedSites, ProximityError, ServiceScorers, Shelter, ShelterType, WeightTable, WeightTableError,
    evaluate_feasibility, haversine_km, shelters_within,
};

pub use eih_scorer::{
    CommunityImpactError, ComponentScores, DEFAULT_TOP_N, FixedTract, NearestTract, RandomSample,
    RankedSite, ScoreResult, SiteScorer, TractLookup, community_impact,
};

#[cfg(feature = "data")]
pub use eih_data::{
    DatasetError, load_candidates, load_demographics, load_pit_counts, load_shelters,
};
