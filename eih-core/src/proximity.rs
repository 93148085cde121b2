//! Distance-decay proximity heuristics.
//!
//! A [`DistanceDecayScorer`] maps the distance to the nearest landmark of a
//! [`LandmarkSet`] through a capped linear decay:
//! `max(0, 1 - distance / cap_km)`. Service criteria decay to zero at
//! [`SERVICE_CAP_KM`]; infrastructure tolerates longer distances and decays
//! at [`INFRASTRUCTURE_CAP_KM`].

use serde::Serialize;
use thiserror::Error;

use crate::{LandmarkSet, Location};

/// Distance, in kilometres, at which service proximity reaches zero.
pub const SERVICE_CAP_KM: f64 = 5.0;

/// Distance, in kilometres, at which infrastructure proximity reaches zero.
pub const INFRASTRUCTURE_CAP_KM: f64 = 8.0;

/// Errors returned by [`DistanceDecayScorer::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProximityError {
    /// The decay cap was zero, negative or not finite.
    #[error("decay cap must be a positive, finite number of kilometres, found {cap_km}")]
    InvalidCap {
        /// Supplied cap.
        cap_km: f64,
    },
}

/// Score a location by its distance to the nearest landmark.
///
/// # Examples
/// ```
/// use eih_core::{DistanceDecayScorer, Location};
///
/// let scorer = DistanceDecayScorer::service();
/// assert_eq!(scorer.score(Location::new(37.3382, -121.8863)), 1.0);
/// assert_eq!(scorer.score(Location::new(36.0, -120.0)), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceDecayScorer {
    landmarks: LandmarkSet,
    cap_km: f64,
}

impl DistanceDecayScorer {
    /// Construct a scorer over `landmarks` decaying to zero at `cap_km`.
    ///
    /// # Errors
    /// Returns [`ProximityError::InvalidCap`] unless `cap_km` is finite and
    /// greater than zero.
    ///
    /// # Examples
    /// ```
    /// use eih_core::{DistanceDecayScorer, LandmarkSet, ProximityError};
    ///
    /// let err = DistanceDecayScorer::new(LandmarkSet::san_jose_services(), 0.0)
    ///     .expect_err("zero cap");
    /// assert_eq!(err, ProximityError::InvalidCap { cap_km: 0.0 });
    /// ```
    pub fn new(landmarks: LandmarkSet, cap_km: f64) -> Result<Self, ProximityError> {
        if !cap_km.is_finite() || cap_km <= 0.0 {
            return Err(ProximityError::InvalidCap { cap_km });
        }
        Ok(Self::with_cap(landmarks, cap_km))
    }

    /// Default service proximity scorer: San Jose service landmarks, 5 km cap.
    #[must_use]
    pub fn service() -> Self {
        Self::with_cap(LandmarkSet::san_jose_services(), SERVICE_CAP_KM)
    }

    /// Default infrastructure scorer: San Jose hubs, 8 km cap.
    #[must_use]
    pub fn infrastructure() -> Self {
        Self::with_cap(
            LandmarkSet::san_jose_infrastructure_hubs(),
            INFRASTRUCTURE_CAP_KM,
        )
    }

    const fn with_cap(landmarks: LandmarkSet, cap_km: f64) -> Self {
        Self { landmarks, cap_km }
    }

    /// Landmarks consulted by this scorer.
    #[must_use]
    pub const fn landmarks(&self) -> &LandmarkSet {
        &self.landmarks
    }

    /// Distance at which the score reaches zero.
    #[must_use]
    pub const fn cap_km(&self) -> f64 {
        self.cap_km
    }

    /// Return the score in `0.0..=1.0` for `location`.
    ///
    /// An empty landmark set scores `0.0`. Malformed coordinates produce
    /// `NaN`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "linear decay divides the distance by the cap"
    )]
    pub fn score(&self, location: Location) -> f64 {
        let Some((_, distance)) = self.landmarks.nearest(location) else {
            return 0.0;
        };
        let decayed = 1.0 - distance / self.cap_km;
        if decayed.is_nan() {
            return f64::NAN;
        }
        decayed.max(0.0)
    }
}

/// One distance-decay scorer per service criterion.
///
/// The default wires all four criteria to the same service landmarks and cap,
/// so their scores are identical. Replace individual fields to give a
/// criterion its own landmark set.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceScorers {
    /// Public transit access.
    pub transit: DistanceDecayScorer,
    /// Healthcare access.
    pub healthcare: DistanceDecayScorer,
    /// Grocery access.
    pub grocery: DistanceDecayScorer,
    /// Social service access.
    pub social_services: DistanceDecayScorer,
}

impl ServiceScorers {
    /// Use the same scorer for every service criterion.
    #[must_use]
    pub fn uniform(scorer: &DistanceDecayScorer) -> Self {
        Self {
            transit: scorer.clone(),
            healthcare: scorer.clone(),
            grocery: scorer.clone(),
            social_services: scorer.clone(),
        }
    }
}

impl Default for ServiceScorers {
    fn default() -> Self {
        Self::uniform(&DistanceDecayScorer::service())
    }
}

/// Service proximity against the default San Jose service landmarks.
///
/// # Examples
/// ```
/// use eih_core::{Location, service_proximity};
///
/// assert_eq!(service_proximity(Location::new(37.3297, -121.9018)), 1.0);
/// ```
#[must_use]
pub fn service_proximity(location: Location) -> f64 {
    DistanceDecayScorer::service().score(location)
}

/// Infrastructure access against the default San Jose hubs.
#[must_use]
pub fn infrastructure_score(location: Location) -> f64 {
    DistanceDecayScorer::infrastructure().score(location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_landmark_set_scores_zero() {
        let scorer = DistanceDecayScorer::new(LandmarkSet::new(), 5.0).expect("valid cap");
        assert_eq!(scorer.score(Location::new(37.3382, -121.8863)), 0.0);
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "assertions compare with tolerance")]
    fn halfway_to_the_cap_scores_one_half() {
        let origin = Location::new(0.0, 0.0);
        let scorer = DistanceDecayScorer::new(LandmarkSet::new().with_landmark("o", origin), 10.0)
            .expect("valid cap");
        // One degree of latitude is ~111.19 km; 0.045 degrees is ~5 km.
        let score = scorer.score(Location::new(0.044_966, 0.0));
        assert!((score - 0.5).abs() < 1e-3, "got {score}");
    }

    #[rstest]
    #[case(0.0)]
    #[case(-5.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_unusable_caps(#[case] cap_km: f64) {
        let landmarks = LandmarkSet::new().with_landmark("o", Location::new(0.0, 0.0));
        let err = DistanceDecayScorer::new(landmarks, cap_km).expect_err("invalid cap");
        assert!(matches!(err, ProximityError::InvalidCap { .. }));
    }

    #[rstest]
    fn nan_location_propagates() {
        assert!(service_proximity(Location::new(f64::NAN, -121.0)).is_nan());
    }

    #[rstest]
    fn default_service_scorers_are_uniform() {
        let scorers = ServiceScorers::default();
        assert_eq!(scorers.transit, scorers.healthcare);
        assert_eq!(scorers.grocery, scorers.social_services);
        assert_eq!(scorers.transit.cap_km(), SERVICE_CAP_KM);
    }
}
