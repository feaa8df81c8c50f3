//! Configuration validation.

use anyhow::Result;
use chrono_tz::Tz;

use super::Config;
use crate::constants::*;
use crate::date_math::parse_local_iso;

/// Reject out-of-range or inconsistent settings.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(lat) = config.latitude
        && !(-90.0..=90.0).contains(&lat)
    {
        anyhow::bail!("latitude must be between -90 and 90 degrees (got {})", lat);
    }

    if let Some(lon) = config.longitude
        && !(-180.0..=180.0).contains(&lon)
    {
        anyhow::bail!(
            "longitude must be between -180 and 180 degrees (got {})",
            lon
        );
    }

    match (config.latitude, config.longitude) {
        (Some(_), None) => anyhow::bail!("latitude is set but longitude is missing"),
        (None, Some(_)) => anyhow::bail!("longitude is set but latitude is missing"),
        _ => {}
    }

    if let Some(elevation) = config.elevation
        && !elevation.is_finite()
    {
        anyhow::bail!("elevation must be a finite number of meters");
    }

    if let Some(name) = config.timezone.as_deref()
        && name.parse::<Tz>().is_err()
    {
        anyhow::bail!("Unknown timezone '{}' (expected an IANA name such as \"Europe/London\")", name);
    }

    validate_offset(config.candle_lighting_minutes, "candle_lighting_minutes")?;
    validate_offset(config.havdalah_minutes, "havdalah_minutes")?;

    if let Some(date) = config.override_date.as_deref()
        && parse_local_iso(date).is_none()
    {
        anyhow::bail!("override_date '{}' must be a date in YYYY-MM-DD format", date);
    }

    Ok(())
}

fn validate_offset(minutes: Option<i64>, field: &str) -> Result<()> {
    if let Some(minutes) = minutes
        && !(MINIMUM_OFFSET_MINUTES..=MAXIMUM_OFFSET_MINUTES).contains(&minutes)
    {
        anyhow::bail!(
            "{} ({} minutes) must be between {} and {} minutes",
            field,
            minutes,
            MINIMUM_OFFSET_MINUTES,
            MAXIMUM_OFFSET_MINUTES
        );
    }
    Ok(())
}
