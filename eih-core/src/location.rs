use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A WGS84 position expressed as latitude and longitude in degrees.
///
/// Values are not range-checked. Out-of-range or non-finite coordinates are
/// carried through unchanged so downstream scores degrade to `NaN` instead of
/// failing.
///
/// # Examples
/// ```
/// use eih_core::Location;
///
/// let downtown = Location::new(37.3382, -121.8863);
/// assert_eq!(downtown.latitude, 37.3382);
/// assert_eq!(downtown.coord().x, -121.8863);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Location {
    /// Construct a location from latitude and longitude.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Return the location as a `geo` coordinate (`x = longitude`,
    /// `y = latitude`).
    #[must_use]
    pub const fn coord(self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }
}

impl From<Coord<f64>> for Location {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<Location> for Coord<f64> {
    fn from(location: Location) -> Self {
        location.coord()
    }
}

impl From<Location> for Point<f64> {
    fn from(location: Location) -> Self {
        Self::from(location.coord())
    }
}
