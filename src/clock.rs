//! Clock abstraction for real time and a frozen developer "today".
//!
//! The engine never reads the wall clock itself. Entry points receive an instant (and a
//! "today") that callers obtain from a [`Clock`]: [`SystemClock`] for normal operation,
//! [`FixedClock`] when a developer override pins the app to a particular day. Because the
//! clock is passed in rather than stored globally, the Saturday-night rollover and the
//! override behaviour of the countdown can be exercised in tests without timers.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::date_math::parse_local_iso;
use crate::error::InvalidInputError;

/// Trait for abstracting time operations
pub trait Clock: Send + Sync {
    /// Get the current instant
    fn now(&self) -> DateTime<Utc>;

    /// The calendar day it currently is in `tz`
    fn today(&self, tz: Tz) -> NaiveDate {
        self.now().with_timezone(&tz).date_naive()
    }

    /// Whether this clock is frozen (a developer override)
    fn is_frozen(&self) -> bool;
}

/// Real-time implementation that uses actual system time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn is_frozen(&self) -> bool {
        false
    }
}

/// A clock stuck at one instant.
///
/// Used for the developer date override: the instant is local noon of the overridden day,
/// so the countdown stays visible and stable while the override is active.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Freeze at an exact instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Freeze at local noon of `date` in `timezone`.
    pub fn local_noon(date: NaiveDate, timezone: Tz) -> Result<Self> {
        let noon = NaiveTime::from_hms_opt(12, 0, 0)
            .ok_or_else(|| anyhow::anyhow!("Invalid noon time"))?;
        // Noon is never inside a DST gap, but `earliest` keeps this total anyway
        let local = timezone
            .from_local_datetime(&date.and_time(noon))
            .earliest()
            .ok_or_else(|| anyhow::anyhow!("No local noon on {date} in {timezone}"))?;
        Ok(Self::at(local.with_timezone(&Utc)))
    }

    /// Parse a `YYYY-MM-DD` override and freeze at its local noon.
    pub fn from_override_iso(iso: &str, timezone: Tz) -> Result<Self> {
        let date = parse_local_iso(iso)
            .ok_or_else(|| InvalidInputError::new(format!("override date '{iso}' is not YYYY-MM-DD")))?;
        Self::local_noon(date, timezone)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    fn is_frozen(&self) -> bool {
        true
    }
}
