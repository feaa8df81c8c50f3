//! Timezone resolution.
//!
//! The week is always computed in one IANA timezone. It comes from, in order: the
//! `timezone` setting, the configured coordinates (looked up with `tzf-rs`), or the system
//! timezone.

use anyhow::{Context, Result};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use std::path::Path;

use super::Location;

// Building the finder decodes the bundled boundary data, so do it once
static FINDER: Lazy<tzf_rs::DefaultFinder> = Lazy::new(tzf_rs::DefaultFinder::new);

/// Timezone containing the given coordinates, falling back to UTC over open ocean.
pub fn determine_timezone_from_coordinates(latitude: f64, longitude: f64) -> Tz {
    let name = FINDER.get_tz_name(longitude, latitude);
    name.parse::<Tz>().unwrap_or(Tz::UTC)
}

/// Detect the system timezone.
///
/// Checks `TZ`, then `/etc/timezone`, then the target of the `/etc/localtime` link.
pub fn get_system_timezone() -> Result<Tz> {
    if let Ok(tz) = std::env::var("TZ")
        && let Ok(parsed) = tz.trim_start_matches(':').parse::<Tz>()
    {
        return Ok(parsed);
    }

    if let Ok(contents) = std::fs::read_to_string("/etc/timezone")
        && let Ok(parsed) = contents.trim().parse::<Tz>()
    {
        return Ok(parsed);
    }

    let target = std::fs::read_link("/etc/localtime")
        .context("Failed to read /etc/localtime; no system timezone available")?;
    timezone_from_zoneinfo_path(&target)
        .with_context(|| format!("Unrecognized timezone link target {}", target.display()))
}

/// Extract "Area/City" from a path like `/usr/share/zoneinfo/Area/City`.
fn timezone_from_zoneinfo_path(path: &Path) -> Result<Tz> {
    let text = path.to_string_lossy();
    let name = text
        .split_once("zoneinfo/")
        .map(|(_, name)| name)
        .context("Path is not inside a zoneinfo directory")?;
    name.parse::<Tz>()
        .map_err(|e| anyhow::anyhow!("Unknown timezone '{name}': {e}"))
}

/// Pick the timezone for a computation.
pub fn resolve_timezone(configured: Option<&str>, location: Option<&Location>) -> Result<Tz> {
    if let Some(name) = configured {
        return name
            .parse::<Tz>()
            .map_err(|e| anyhow::anyhow!("Unknown timezone '{name}': {e}"));
    }

    if let Some(location) = location {
        return Ok(determine_timezone_from_coordinates(
            location.latitude,
            location.longitude,
        ));
    }

    match get_system_timezone() {
        Ok(tz) => Ok(tz),
        Err(e) => {
            log_debug!("System timezone detection failed, using UTC: {e}");
            Ok(Tz::UTC)
        }
    }
}
