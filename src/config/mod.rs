//! Configuration for yomtov.
//!
//! Settings live in a TOML file, `$XDG_CONFIG_HOME/yomtov/yomtov.toml` by default or
//! `yomtov.toml` inside the directory given with `--config`. Every field is optional and a
//! missing file simply means all defaults.
//!
//! ```toml
//! #[Location]
//! latitude = 40.7128          # Geographic latitude (-90 to 90)
//! longitude = -74.0060        # Geographic longitude (-180 to 180)
//! elevation = 10              # Meters above sea level (optional)
//! timezone = "America/New_York"  # IANA name; detected from coordinates when omitted
//!
//! #[Shabbat times]
//! candle_lighting_minutes = 18   # Minutes before Friday sunset (0-120)
//! havdalah_minutes = 42          # Minutes after Saturday sunset (0-120)
//!
//! #[Holiday list]
//! minor_fasts = true
//! roshei_chodesh = true
//! modern_holidays = true
//! special_shabbatot = true
//!
//! #[Developer]
//! override_date = "2026-01-02"   # Pretend today is this date
//! ```
//!
//! Without coordinates, Shabbat dates and the weekly portion are still shown but sunset
//! based times are not.

pub mod loading;
pub mod validation;

use anyhow::Result;
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::*;
use crate::date_math::parse_local_iso;
use crate::geo::{self, Location};
use crate::holidays::HolidaySettings;
use crate::shabbat::ShabbatSettings;

pub use loading::{
    get_config_path, get_custom_config_dir, load, load_from_dir, load_from_path, set_config_dir,
};

/// Settings loaded from `yomtov.toml`.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Meters above sea level
    pub elevation: Option<f64>,
    /// IANA timezone name, e.g. "Asia/Jerusalem"
    pub timezone: Option<String>,

    pub candle_lighting_minutes: Option<i64>,
    pub havdalah_minutes: Option<i64>,

    pub minor_fasts: Option<bool>,
    pub roshei_chodesh: Option<bool>,
    pub modern_holidays: Option<bool>,
    pub special_shabbatot: Option<bool>,

    /// Persisted developer "today", `YYYY-MM-DD`
    pub override_date: Option<String>,
}

impl Config {
    /// Load configuration from the default or custom directory.
    pub fn load() -> Result<Self> {
        load()
    }

    /// Load configuration from a specific file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        load_from_path(path)
    }

    /// Location from the configured coordinates, if both are set.
    pub fn location(&self) -> Option<Location> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Location {
                latitude,
                longitude,
                elevation: self.elevation,
            }),
            _ => None,
        }
    }

    pub fn shabbat_settings(&self) -> ShabbatSettings {
        ShabbatSettings {
            candle_minutes_before_sunset: self
                .candle_lighting_minutes
                .unwrap_or(DEFAULT_CANDLE_LIGHTING_MINUTES),
            havdalah_minutes_after_sunset: self.havdalah_minutes.unwrap_or(DEFAULT_HAVDALAH_MINUTES),
        }
    }

    pub fn holiday_settings(&self) -> HolidaySettings {
        HolidaySettings {
            minor_fasts: self.minor_fasts.unwrap_or(DEFAULT_MINOR_FASTS),
            roshei_chodesh: self.roshei_chodesh.unwrap_or(DEFAULT_ROSHEI_CHODESH),
            modern_holidays: self.modern_holidays.unwrap_or(DEFAULT_MODERN_HOLIDAYS),
            special_shabbatot: self.special_shabbatot.unwrap_or(DEFAULT_SPECIAL_SHABBATOT),
        }
    }

    /// The persisted developer override, if set and valid.
    pub fn override_date(&self) -> Option<NaiveDate> {
        self.override_date.as_deref().and_then(parse_local_iso)
    }

    /// Timezone to compute in: configured, else from the coordinates, else the system's.
    pub fn resolve_timezone(&self) -> Result<Tz> {
        geo::resolve_timezone(self.timezone.as_deref(), self.location().as_ref())
    }

    pub fn log_config(&self, source: &str, timezone: Tz) {
        log_block_start!("Loaded {}", source);

        match self.location() {
            Some(location) => {
                log_indented!("Location: {}", location.describe());
                if let Some(elevation) = location.elevation {
                    log_indented!("Elevation: {elevation} m");
                }
                if location.is_latitude_capped() {
                    log_indented!(
                        "Sun times use latitude ±{MAXIMUM_SOLAR_LATITUDE}° (polar region)"
                    );
                }
            }
            None => log_indented!("Location: not configured (dates only)"),
        }
        log_indented!("Timezone: {timezone}");

        let shabbat = self.shabbat_settings();
        log_indented!(
            "Candle lighting: {} minutes before sunset",
            shabbat.candle_minutes_before_sunset
        );
        log_indented!(
            "Havdalah: {} minutes after sunset",
            shabbat.havdalah_minutes_after_sunset
        );

        let holidays = self.holiday_settings();
        let hidden: Vec<&str> = [
            (holidays.minor_fasts, "minor fasts"),
            (holidays.roshei_chodesh, "Rosh Chodesh"),
            (holidays.modern_holidays, "modern holidays"),
            (holidays.special_shabbatot, "special Shabbatot"),
        ]
        .into_iter()
        .filter(|(shown, _)| !shown)
        .map(|(_, name)| name)
        .collect();
        if !hidden.is_empty() {
            log_indented!("Hidden: {}", hidden.join(", "));
        }
    }
}
