//! Named reference points used by the proximity heuristics.
//!
//! The default sets describe San Jose: four service landmarks (downtown,
//! Diridon Station, Valley Medical Center, Eastridge) and five
//! infrastructure hubs spread around downtown. They stand in for real
//! service-location data.

use serde::{Deserialize, Serialize};

use crate::{Location, haversine_km};

/// A named reference point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Short identifier, for example `"downtown"`.
    pub name: String,
    /// Position of the landmark.
    pub location: Location,
}

impl Landmark {
    /// Construct a landmark.
    #[must_use]
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// An ordered collection of [`Landmark`]s.
///
/// # Examples
/// ```
/// use eih_core::{LandmarkSet, Location};
///
/// let services = LandmarkSet::san_jose_services();
/// assert_eq!(services.len(), 4);
/// assert_eq!(
///     services.get("downtown").map(|l| l.location),
///     Some(Location::new(37.3382, -121.8863))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    landmarks: Vec<Landmark>,
}

impl LandmarkSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            landmarks: Vec::new(),
        }
    }

    /// Add a landmark while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_landmark(mut self, name: impl Into<String>, location: Location) -> Self {
        self.landmarks.push(Landmark::new(name, location));
        self
    }

    /// Service landmarks used for transit, healthcare, grocery and social
    /// service proximity.
    #[must_use]
    pub fn san_jose_services() -> Self {
        Self::new()
            .with_landmark("downtown", Location::new(37.3382, -121.8863))
            .with_landmark("diridon", Location::new(37.3297, -121.9018))
            .with_landmark("valley_med", Location::new(37.3166, -121.9277))
            .with_landmark("eastridge", Location::new(37.3254, -121.8157))
    }

    /// Infrastructure hubs used for utility and road access.
    #[must_use]
    pub fn san_jose_infrastructure_hubs() -> Self {
        Self::new()
            .with_landmark("downtown", Location::new(37.3382, -121.8863))
            .with_landmark("north", Location::new(37.4034, -121.8863))
            .with_landmark("south", Location::new(37.2788, -121.8863))
            .with_landmark("east", Location::new(37.3382, -121.8163))
            .with_landmark("west", Location::new(37.3382, -121.9563))
    }

    /// Look up a landmark by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Landmark> {
        self.landmarks.iter().find(|landmark| landmark.name == name)
    }

    /// Iterate over the landmarks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter()
    }

    /// Number of landmarks in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Report whether the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Return the landmark closest to `location` together with its distance
    /// in kilometres.
    ///
    /// Returns `None` for an empty set. When any distance is `NaN` the
    /// reported distance is `NaN`.
    #[must_use]
    pub fn nearest(&self, location: Location) -> Option<(&Landmark, f64)> {
        self.landmarks
            .iter()
            .map(|landmark| (landmark, haversine_km(location, landmark.location)))
            .reduce(|best, candidate| {
                if best.1.is_nan() {
                    best
                } else if candidate.1.is_nan() || candidate.1 < best.1 {
                    candidate
                } else {
                    best
                }
            })
    }
}

impl FromIterator<Landmark> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        Self {
            landmarks: iter.into_iter().collect(),
        }
    }
}
