//! This week's Shabbat: when it begins, when it ends, and what is read.
//!
//! [`compute_shabbat_info`] anchors "today" to a Friday/Saturday pair, asks the calendar for
//! that window's events, classifies them, and combines the result with sunset-derived times
//! into one immutable [`ShabbatInfo`]. On Saturday night after Shabbat has ended the whole
//! computation is repeated for the following week. [`build_shabbat_view_model`] turns a
//! `ShabbatInfo` and a clock reading into countdown state for display.
//!
//! Without a location every timed field is `None`; dates and the weekly portion are still
//! filled in. Invalid input is an [`InvalidInputError`]; a failing calendar query propagates
//! as an ordinary error so callers can keep their last good result.
//!
//! ## Module Structure
//!
//! - [`week`]: Friday/Saturday anchoring
//! - [`signals`]: classification of the window's calendar events
//! - [`sunset`]: sunset, candle lighting and Shabbat end times
//! - [`view`]: countdown view model

pub mod signals;
pub mod sunset;
pub mod view;
pub mod week;


pub use signals::{ShabbatSignals, extract_signals};
pub use sunset::SunsetTimes;
pub use view::{ShabbatViewModel, ViewOptions, build_shabbat_view_model};
pub use week::ShabbatWeek;

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::calendar::{
    CalendarEventSource, CandleLightingOptions, DateRange, HebrewDate, QueryOptions,
};
use crate::constants::{DEFAULT_CANDLE_LIGHTING_MINUTES, DEFAULT_HAVDALAH_MINUTES};
use crate::date_math::{format_gregorian_long, format_iso, format_short_no_year, parse_local_iso};
use crate::details::{ParshaDetails, parsha_details};
use crate::error::InvalidInputError;
use crate::geo::Location;

/// User-configurable minute offsets around sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShabbatSettings {
    pub candle_minutes_before_sunset: i64,
    pub havdalah_minutes_after_sunset: i64,
}

impl Default for ShabbatSettings {
    fn default() -> Self {
        Self {
            candle_minutes_before_sunset: DEFAULT_CANDLE_LIGHTING_MINUTES,
            havdalah_minutes_after_sunset: DEFAULT_HAVDALAH_MINUTES,
        }
    }
}

/// Inputs to one Shabbat computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ShabbatRequest {
    /// Local calendar day the computation is anchored on
    pub today: NaiveDate,
    pub timezone: Tz,
    pub location: Option<Location>,
    pub settings: ShabbatSettings,
    /// Current instant, used only for the Saturday-night rollover
    pub now: DateTime<Utc>,
}

impl ShabbatRequest {
    /// Build a request from a `YYYY-MM-DD` "today".
    pub fn from_iso(
        today_iso: &str,
        timezone: Tz,
        location: Option<Location>,
        settings: ShabbatSettings,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let today = parse_local_iso(today_iso).ok_or_else(|| {
            InvalidInputError::new(format!("today '{today_iso}' is not a valid YYYY-MM-DD date"))
        })?;
        Ok(Self {
            today,
            timezone,
            location,
            settings,
            now,
        })
    }
}

/// How Shabbat ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "time", rename_all = "camelCase")]
pub enum ShabbatEnd {
    /// Ordinary end, marked by Havdalah
    Havdalah(DateTime<Tz>),
    /// Shabbat runs straight into a festival, begun by candle lighting
    YomTovCandleLighting(DateTime<Tz>),
}

impl ShabbatEnd {
    pub fn time(&self) -> DateTime<Tz> {
        match self {
            ShabbatEnd::Havdalah(time) | ShabbatEnd::YomTovCandleLighting(time) => *time,
        }
    }

    pub fn is_yom_tov(&self) -> bool {
        matches!(self, ShabbatEnd::YomTovCandleLighting(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShabbatEnd::Havdalah(_) => "Havdalah",
            ShabbatEnd::YomTovCandleLighting(_) => "Yom Tov candle lighting",
        }
    }
}

/// Everything known about one Shabbat.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShabbatInfo {
    pub friday: NaiveDate,
    pub saturday: NaiveDate,
    pub erev_shabbat_iso: String,
    pub yom_shabbat_iso: String,
    pub erev_shabbat_greg_date: String,
    pub yom_shabbat_greg_date: String,
    pub erev_shabbat_short: String,
    pub yom_shabbat_short: String,
    /// "13 Tevet 5786"
    pub erev_shabbat_hebrew_date: String,
    pub yom_shabbat_hebrew_date: String,
    /// "י״ג טבת תשפ״ו"
    pub erev_shabbat_hebrew_date_he: String,
    pub yom_shabbat_hebrew_date_he: String,
    pub friday_sunset: Option<DateTime<Tz>>,
    pub saturday_sunset: Option<DateTime<Tz>>,
    pub candle_time: Option<DateTime<Tz>>,
    pub end: Option<ShabbatEnd>,
    pub parsha_english: Option<String>,
    pub parsha_hebrew: Option<String>,
    pub parsha_replaced_by_holiday: bool,
    /// Torah range and summary of each portion read, empty without a portion
    pub parsha_details: Vec<&'static ParshaDetails>,
    /// The requested day, even after a rollover
    pub today_iso: String,
}

impl ShabbatInfo {
    pub fn shabbat_ends(&self) -> Option<DateTime<Tz>> {
        self.end.map(|end| end.time())
    }

    pub fn ends_into_yom_tov(&self) -> bool {
        self.end.is_some_and(|end| end.is_yom_tov())
    }
}

/// Compute this week's Shabbat for `request`.
///
/// On a Saturday whose Shabbat has already ended (location known, `now` past the end), the
/// result is next week's Shabbat instead.
pub fn compute_shabbat_info(
    source: &dyn CalendarEventSource,
    request: &ShabbatRequest,
) -> Result<ShabbatInfo> {
    if let Some(location) = &request.location {
        location.validate()?;
    }

    let info = compute_for_anchor(source, request.today, request)?;

    if request.location.is_some()
        && request.today.weekday() == Weekday::Sat
        && let Some(ends) = info.shabbat_ends()
        && request.now >= ends
    {
        let next_anchor = request.today + TimeDelta::days(1);
        log_debug!("Shabbat of {} ended at {ends}, rolling over to next week", info.yom_shabbat_iso);
        return compute_for_anchor(source, next_anchor, request);
    }

    Ok(info)
}

fn compute_for_anchor(
    source: &dyn CalendarEventSource,
    anchor: NaiveDate,
    request: &ShabbatRequest,
) -> Result<ShabbatInfo> {
    let week = ShabbatWeek::for_today(anchor);
    let range = DateRange::new(week.friday, week.window_end())?;
    let options = QueryOptions {
        sedrot: true,
        candle_lighting: request.location.map(|location| CandleLightingOptions {
            location,
            timezone: request.timezone,
            candle_lighting_mins: request.settings.candle_minutes_before_sunset,
            havdalah_mins: request.settings.havdalah_minutes_after_sunset,
        }),
        ..Default::default()
    };

    let events = source
        .query_events(range, &options)
        .with_context(|| format!("Failed to query calendar events for {}", week.friday))?;
    let signals = extract_signals(&events, &week);

    let times = match &request.location {
        Some(location) => SunsetTimes::compute(
            source,
            location,
            &week,
            request.timezone,
            &request.settings,
        ),
        None => SunsetTimes::default(),
    };

    let end = times.shabbat_ends.map(|time| {
        if signals.ends_into_yom_tov {
            ShabbatEnd::YomTovCandleLighting(time)
        } else {
            ShabbatEnd::Havdalah(time)
        }
    });

    log_debug!(
        "Shabbat {}: candles {:?}, end {:?}, parsha {:?}",
        week.saturday,
        times.candle_time,
        end,
        signals.parsha_english
    );

    let portion_details = signals
        .parsha_english
        .as_deref()
        .map(parsha_details)
        .unwrap_or_default();
    let erev = HebrewDate::from_gregorian(week.friday);
    let yom = HebrewDate::from_gregorian(week.saturday);

    Ok(ShabbatInfo {
        friday: week.friday,
        saturday: week.saturday,
        erev_shabbat_iso: format_iso(week.friday),
        yom_shabbat_iso: format_iso(week.saturday),
        erev_shabbat_greg_date: format_gregorian_long(week.friday),
        yom_shabbat_greg_date: format_gregorian_long(week.saturday),
        erev_shabbat_short: format_short_no_year(week.friday),
        yom_shabbat_short: format_short_no_year(week.saturday),
        erev_shabbat_hebrew_date: erev.to_string(),
        yom_shabbat_hebrew_date: yom.to_string(),
        erev_shabbat_hebrew_date_he: erev.render_hebrew(),
        yom_shabbat_hebrew_date_he: yom.render_hebrew(),
        friday_sunset: times.friday_sunset,
        saturday_sunset: times.saturday_sunset,
        candle_time: times.candle_time,
        end,
        parsha_english: signals.parsha_english,
        parsha_hebrew: signals.parsha_hebrew,
        parsha_replaced_by_holiday: signals.parsha_replaced_by_holiday,
        parsha_details: portion_details,
        today_iso: format_iso(request.today),
    })
}
