//! Community impact aggregation for a single demographic record.
//!
//! `0.3 * density + 0.4 * poverty + 0.3 * environment`, where
//! - density scores `1 - min(1, population_density / 10000)`,
//! - poverty scores `min(1, poverty_rate / 30)`,
//! - environment scores `1 - min(1, calenviroscreen_score / 100)`.

use eih_core::{DemographicColumn, DemographicRecord};

use crate::CommunityImpactError;

const DENSITY_SATURATION: f64 = 10_000.0;
const POVERTY_SATURATION: f64 = 30.0;
const CALENVIROSCREEN_SATURATION: f64 = 100.0;

const DENSITY_WEIGHT: f64 = 0.3;
const POVERTY_WEIGHT: f64 = 0.4;
const ENVIRONMENT_WEIGHT: f64 = 0.3;

/// Community impact of one demographic record.
///
/// # Errors
/// Returns [`CommunityImpactError::MissingColumn`] when the record lacks
/// any of the three metric columns.
///
/// # Examples
/// ```
/// use eih_core::DemographicRecord;
/// use eih_scorer::community_impact;
///
/// let score = community_impact(&DemographicRecord::new(0.0, 30.0, 0.0))?;
/// assert!((score - 1.0).abs() < 1e-12);
/// # Ok::<(), eih_scorer::CommunityImpactError>(())
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "community impact is a weighted sum of capped ratios"
)]
pub fn community_impact(record: &DemographicRecord) -> Result<f64, CommunityImpactError> {
    let density = column(record, DemographicColumn::PopulationDensity)?;
    let poverty = column(record, DemographicColumn::PovertyRate)?;
    let calenviroscreen = column(record, DemographicColumn::CalenviroscreenScore)?;

    let density_score = 1.0 - f64::min(1.0, density / DENSITY_SATURATION);
    let poverty_score = f64::min(1.0, poverty / POVERTY_SATURATION);
    let environment_score = 1.0 - f64::min(1.0, calenviroscreen / CALENVIROSCREEN_SATURATION);

    Ok(DENSITY_WEIGHT * density_score
        + POVERTY_WEIGHT * poverty_score
        + ENVIRONMENT_WEIGHT * environment_score)
}

fn column(record: &DemographicRecord, column: DemographicColumn) -> Result<f64, CommunityImpactError> {
    record
        .value(column)
        .ok_or(CommunityImpactError::MissingColumn { column })
}
