//! Service-area coverage statistics for existing shelters.
//!
//! Summarises shelter capacity against current occupancy and the
//! point-in-time (PIT) unhoused count, and finds the shelters already
//! serving the area around a proposed site.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Location, haversine_km};

/// One mile in kilometres; the service radius drawn around each shelter.
pub const SERVICE_RADIUS_KM: f64 = 1.609;

/// PIT category carrying the area-wide unhoused total.
pub const TOTAL_UNHOUSED_CATEGORY: &str = "Total Unhoused";

/// Kind of shelter programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShelterType {
    /// Emergency Interim Housing.
    #[serde(rename = "EIH")]
    Eih,
    /// Permanent supportive housing.
    Permanent,
    /// Transitional housing.
    Transitional,
}

/// An existing shelter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelter {
    /// Shelter name.
    pub name: String,
    /// Programme type.
    pub shelter_type: ShelterType,
    /// Shelter position.
    #[serde(flatten)]
    pub location: Location,
    /// Number of beds.
    pub capacity: u32,
    /// Beds currently occupied.
    pub current_occupancy: u32,
}

impl Shelter {
    /// Occupancy as a percentage of capacity, or `None` for zero capacity.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "rates are percentages")]
    pub fn occupancy_rate(&self) -> Option<f64> {
        if self.capacity == 0 {
            return None;
        }
        Some(f64::from(self.current_occupancy) / f64::from(self.capacity) * 100.0)
    }
}

/// A point-in-time count for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitCount {
    /// Category label, for example `"Total Unhoused"`.
    pub category: String,
    /// Number of people counted.
    pub count: u64,
}

/// Area-wide coverage statistics.
///
/// # Examples
/// ```
/// use eih_core::{CoverageStats, Location, PitCount, Shelter, ShelterType};
///
/// let shelters = vec![Shelter {
///     name: "Civic Center EIH".into(),
///     shelter_type: ShelterType::Eih,
///     location: Location::new(37.34, -121.89),
///     capacity: 100,
///     current_occupancy: 80,
/// }];
/// let pit = vec![PitCount { category: "Total Unhoused".into(), count: 400 }];
/// let stats = CoverageStats::from_records(&shelters, &pit);
/// assert_eq!(stats.occupancy_rate, 80.0);
/// assert_eq!(stats.unsheltered_rate, Some(80.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageStats {
    /// Sum of shelter capacities.
    pub total_capacity: u64,
    /// Sum of current occupancies.
    pub total_occupancy: u64,
    /// Occupancy as a percentage of capacity; `0.0` without capacity.
    pub occupancy_rate: f64,
    /// Number of EIH shelters.
    pub eih_shelters: usize,
    /// Shelter count per programme type.
    pub shelter_types: BTreeMap<ShelterType, usize>,
    /// Area-wide unhoused count, when the PIT data carries it.
    pub total_unhoused: Option<u64>,
    /// Share of the unhoused population not in a shelter bed, in percent.
    pub unsheltered_rate: Option<f64>,
}

impl CoverageStats {
    /// Aggregate shelters and PIT counts.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "rates are percentages")]
    pub fn from_records(shelters: &[Shelter], pit_counts: &[PitCount]) -> Self {
        let total_capacity: u64 = shelters.iter().map(|s| u64::from(s.capacity)).sum();
        let total_occupancy: u64 = shelters.iter().map(|s| u64::from(s.current_occupancy)).sum();
        let occupancy_rate = if total_capacity == 0 {
            0.0
        } else {
            count_as_f64(total_occupancy) / count_as_f64(total_capacity) * 100.0
        };

        let mut shelter_types = BTreeMap::new();
        for shelter in shelters {
            *shelter_types.entry(shelter.shelter_type).or_insert(0_usize) += 1;
        }
        let eih_shelters = shelter_types.get(&ShelterType::Eih).copied().unwrap_or(0);

        let total_unhoused = pit_counts
            .iter()
            .find(|pit| pit.category == TOTAL_UNHOUSED_CATEGORY)
            .map(|pit| pit.count);
        let unsheltered_rate = total_unhoused.filter(|total| *total > 0).map(|total| {
            let unhoused = count_as_f64(total);
            (unhoused - count_as_f64(total_occupancy)) / unhoused * 100.0
        });

        Self {
            total_capacity,
            total_occupancy,
            occupancy_rate,
            eih_shelters,
            shelter_types,
            total_unhoused,
            unsheltered_rate,
        }
    }
}

/// Shelters within `radius_km` of `location`, in input order.
///
/// # Examples
/// ```
/// use eih_core::{Location, SERVICE_RADIUS_KM, Shelter, ShelterType, shelters_within};
///
/// let shelter = Shelter {
///     name: "Diridon".into(),
///     shelter_type: ShelterType::Transitional,
///     location: Location::new(37.3297, -121.9018),
///     capacity: 40,
///     current_occupancy: 38,
/// };
/// let shelters = [shelter];
/// let nearby = shelters_within(Location::new(37.3300, -121.9000), &shelters, SERVICE_RADIUS_KM);
/// assert_eq!(nearby.len(), 1);
/// ```
#[must_use]
pub fn shelters_within(location: Location, shelters: &[Shelter], radius_km: f64) -> Vec<&Shelter> {
    shelters
        .iter()
        .filter(|shelter| haversine_km(location, shelter.location) <= radius_km)
        .collect()
}

#[expect(
    clippy::cast_precision_loss,
    reason = "head counts stay far below 2^52"
)]
const fn count_as_f64(count: u64) -> f64 {
    count as f64
}
