//! Great-circle distance between two locations.

use crate::Location;

/// Mean Earth radius, in kilometres, used by [`haversine_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Return the great-circle distance between `from` and `to` in kilometres.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`]. The
/// result is symmetric in its arguments and `0.0` for identical points.
/// Inputs are not validated; `NaN` or infinite coordinates yield `NaN`.
///
/// # Examples
/// ```
/// use eih_core::{Location, haversine_km};
///
/// let equator = Location::new(0.0, 0.0);
/// let quarter = Location::new(0.0, 90.0);
/// let distance = haversine_km(equator, quarter);
/// assert!((distance - 10_007.543).abs() < 0.01);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(from: Location, to: Location) -> f64 {
    let lat_from = from.latitude.to_radians();
    let lat_to = to.latitude.to_radians();
    let delta_lat = lat_to - lat_from;
    let delta_lon = to.longitude.to_radians() - from.longitude.to_radians();

    let half_chord = (delta_lat / 2.0).sin().powi(2)
        + lat_from.cos() * lat_to.cos() * (delta_lon / 2.0).sin().powi(2);
    let angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());
    EARTH_RADIUS_KM * angle
}
