//! Fixtures shared by unit and behaviour tests across the workspace.

use crate::{DemographicDataset, DemographicRecord, Location, PitCount, Shelter, ShelterType};

/// Downtown San Jose, the first service landmark.
pub const DOWNTOWN: Location = Location::new(37.3382, -121.8863);

/// A point well outside every default landmark's reach.
pub const REMOTE: Location = Location::new(36.0, -120.0);

/// Three tracts with centroids north, centre and south of downtown.
///
/// Community impact for each tract under the default formula:
/// north `0.65`, centre `0.56`, south `0.47`.
#[must_use]
pub fn sample_dataset() -> DemographicDataset {
    DemographicDataset::new(vec![
        DemographicRecord::new(2_000.0, 15.0, 30.0)
            .with_tract("5001.00", Location::new(37.40, -121.89)),
        DemographicRecord::new(5_000.0, 15.0, 30.0)
            .with_tract("5002.00", Location::new(37.34, -121.89)),
        DemographicRecord::new(8_000.0, 15.0, 30.0)
            .with_tract("5003.00", Location::new(37.28, -121.89)),
    ])
}

/// Single-tract dataset whose community impact is `value`, up to rounding, when
/// `value` lies in `0.0..=0.3`.
///
/// Poverty and CalEnviroScreen are pinned so only density contributes.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "inverts the density term")]
pub fn uniform_dataset(value: f64) -> DemographicDataset {
    let density = (1.0 - value / 0.3) * 10_000.0;
    DemographicDataset::new(vec![DemographicRecord::new(density, 0.0, 100.0)])
}

/// A small shelter inventory spanning every programme type.
#[must_use]
pub fn sample_shelters() -> Vec<Shelter> {
    vec![
        Shelter {
            name: "Civic Center EIH".to_owned(),
            shelter_type: ShelterType::Eih,
            location: Location::new(37.3394, -121.8910),
            capacity: 80,
            current_occupancy: 72,
        },
        Shelter {
            name: "Diridon Transitional".to_owned(),
            shelter_type: ShelterType::Transitional,
            location: Location::new(37.3290, -121.9030),
            capacity: 40,
            current_occupancy: 28,
        },
        Shelter {
            name: "Eastridge Permanent".to_owned(),
            shelter_type: ShelterType::Permanent,
            location: Location::new(37.3250, -121.8150),
            capacity: 80,
            current_occupancy: 60,
        },
    ]
}

/// PIT counts matching [`sample_shelters`].
#[must_use]
pub fn sample_pit_counts() -> Vec<PitCount> {
    vec![
        PitCount {
            category: "Sheltered".to_owned(),
            count: 160,
        },
        PitCount {
            category: crate::TOTAL_UNHOUSED_CATEGORY.to_owned(),
            count: 800,
        },
    ]
}
