//! Geographic location and timezone resolution.
//!
//! A [`Location`] is optional everywhere in yomtov: without one, Shabbat dates and the
//! Torah portion are still computed but no sunset-based times are. When a location is
//! configured it also decides the timezone the week is computed in, unless the user names
//! one explicitly.
//!
//! ## Module Structure
//!
//! - [`timezone`]: coordinate-to-timezone lookup (`tzf-rs`) and system timezone detection

pub mod timezone;

pub use timezone::{determine_timezone_from_coordinates, get_system_timezone, resolve_timezone};

#[cfg(test)]
mod tests;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::constants::MAXIMUM_SOLAR_LATITUDE;
use crate::error::InvalidInputError;

/// Observer position for sunset calculations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Meters above sea level, when known
    pub elevation: Option<f64>,
}

impl Location {
    /// Build a location, rejecting coordinates outside the valid ranges.
    pub fn new(latitude: f64, longitude: f64, elevation: Option<f64>) -> Result<Self> {
        let location = Self {
            latitude,
            longitude,
            elevation,
        };
        location.validate()?;
        Ok(location)
    }

    /// Check coordinate ranges.
    ///
    /// Out-of-range coordinates are a caller bug, reported as [`InvalidInputError`].
    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(InvalidInputError::new(format!(
                "latitude {} must be between -90 and 90 degrees",
                self.latitude
            ))
            .into());
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(InvalidInputError::new(format!(
                "longitude {} must be between -180 and 180 degrees",
                self.longitude
            ))
            .into());
        }
        if let Some(elevation) = self.elevation
            && !elevation.is_finite()
        {
            return Err(InvalidInputError::new("elevation must be a finite number").into());
        }
        Ok(())
    }

    /// Latitude used for solar calculations, capped at ±65°.
    pub fn solar_latitude(&self) -> f64 {
        if self.latitude.abs() > MAXIMUM_SOLAR_LATITUDE {
            MAXIMUM_SOLAR_LATITUDE * self.latitude.signum()
        } else {
            self.latitude
        }
    }

    pub fn is_latitude_capped(&self) -> bool {
        self.latitude.abs() > MAXIMUM_SOLAR_LATITUDE
    }

    /// "40.7128°N, 74.0060°W"
    pub fn describe(&self) -> String {
        format!(
            "{:.4}°{}, {:.4}°{}",
            self.latitude.abs(),
            if self.latitude >= 0.0 { "N" } else { "S" },
            self.longitude.abs(),
            if self.longitude >= 0.0 { "E" } else { "W" },
        )
    }
}
