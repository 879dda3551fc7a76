//! WGS84 coordinates
//!
//! The scorers do no bounds checking of their own, so every coordinate
//! entering the engine goes through [`Coordinate::new`].

use crate::error::{FalloutError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = FalloutError;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Coordinate::new(raw.lat, raw.lon)
    }
}

impl Coordinate {
    /// Validate and build a coordinate.
    ///
    /// # Example
    /// ```
    /// use fallout_core::Coordinate;
    ///
    /// let high_island = Coordinate::new(29.5647, -94.3912).unwrap();
    /// assert_eq!(high_island.lat(), 29.5647);
    /// assert!(Coordinate::new(91.0, 0.0).is_err());
    /// ```
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(FalloutError::InvalidLatitude(lat));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(FalloutError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Build a coordinate from trusted constants (catalog entries).
    pub(crate) const fn from_static(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.lat >= 0.0 { 'N' } else { 'S' };
        let ew = if self.lon >= 0.0 { 'E' } else { 'W' };
        write!(f, "{:.4}°{ns}, {:.4}°{ew}", self.lat.abs(), self.lon.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            Coordinate::new(-90.5, 0.0),
            Err(FalloutError::InvalidLatitude(_))
        ));
        assert!(matches!(
            Coordinate::new(0.0, 180.01),
            Err(FalloutError::InvalidLongitude(_))
        ));
        assert!(matches!(
            Coordinate::new(f64::NAN, 0.0),
            Err(FalloutError::InvalidLatitude(_))
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Coordinate = serde_json::from_str(r#"{"lat":41.6189,"lon":-83.1978}"#).unwrap();
        assert_eq!(ok.lon(), -83.1978);
        assert!(serde_json::from_str::<Coordinate>(r#"{"lat":100.0,"lon":0.0}"#).is_err());
    }

    #[test]
    fn test_display() {
        let cape_may = Coordinate::new(38.9331, -74.9597).unwrap();
        assert_eq!(cape_may.to_string(), "38.9331°N, 74.9597°W");
    }
}
