//! Geographic coordinate type and great-circle distance.
//!
//! `Location` stores latitude/longitude as `f64` decimal degrees.  The only
//! way to build one is through [`Location::new`], which rejects out-of-range
//! and non-finite values, so every `Location` in the program is valid and
//! downstream code (ranking, export) never re-checks coordinates.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A validated WGS-84 coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Location {
    lat: f64,
    lon: f64,
}

impl Location {
    /// Build a location, failing with [`CoreError::InvalidLocation`] if
    /// `lat ∉ [-90, 90]`, `lon ∉ [-180, 180]`, or either value is NaN.
    ///
    /// Coordinates are never clamped.
    pub fn new(lat: f64, lon: f64) -> CoreResult<Self> {
        if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
            Ok(Self { lat, lon })
        } else {
            Err(CoreError::InvalidLocation { lat, lon })
        }
    }

    #[inline]
    pub fn lat(self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lon(self) -> f64 {
        self.lon
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Symmetric, non-negative, and exactly `0.0` for identical points.
    pub fn distance_km(self, other: Location) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        // `a` can drift a hair above 1.0 for antipodal points.
        2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Location {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            lat: f64,
            lon: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Location::new(raw.lat, raw.lon).map_err(serde::de::Error::custom)
    }
}
