//! Site suitability scoring for Emergency Interim Housing.
//!
//! [`SiteScorer`] combines three families of sub-scores into one weighted
//! total:
//! - **service proximity** for transit, healthcare, grocery and social
//!   services, each a distance-decay score against reference landmarks;
//! - **infrastructure access**, a distance-decay score against hubs;
//! - **community impact**, aggregated from one demographic record chosen by
//!   a pluggable [`TractLookup`].
//!
//! [`SiteScorer::get_top_locations`] ranks a batch of candidates by total
//! score.
//!
//! # Examples
//!
//! ```
//! use eih_core::{DemographicDataset, DemographicRecord, Location};
//! use eih_scorer::{DEFAULT_TOP_N, RandomSample, SiteScorer};
//!
//! let dataset = DemographicDataset::new(vec![
//!     DemographicRecord::new(3_000.0, 12.0, 35.0),
//!     DemographicRecord::new(7_500.0, 22.0, 60.0),
//! ]);
//! let scorer = SiteScorer::with_defaults().with_lookup(RandomSample::seeded(42));
//! let candidates = [
//!     Location::new(37.3382, -121.8863),
//!     Location::new(37.2000, -121.7000),
//! ];
//! let ranked = scorer.get_top_locations(&candidates, &dataset, DEFAULT_TOP_N);
//! assert_eq!(ranked.len(), 2);
//! assert!(ranked[0].total_score >= ranked[1].total_score);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod community;
mod error;
mod scorer;
mod tract;
mod types;

pub use community::community_impact;
pub use error::CommunityImpactError;
pub use scorer::{DEFAULT_TOP_N, SiteScorer};
pub use tract::{CloneLookup, FixedTract, NearestTract, RandomSample, TractLookup};
pub use types::{ComponentScores, RankedSite, ScoreResult};
