//! Sunset-derived Shabbat times.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use super::ShabbatSettings;
use super::week::ShabbatWeek;
use crate::calendar::CalendarEventSource;
use crate::date_math::{add_minutes, floor_to_minute};
use crate::geo::Location;

/// Sunsets of a Shabbat and the times derived from them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SunsetTimes {
    pub friday_sunset: Option<DateTime<Tz>>,
    pub saturday_sunset: Option<DateTime<Tz>>,
    pub candle_time: Option<DateTime<Tz>>,
    pub shabbat_ends: Option<DateTime<Tz>>,
}

impl SunsetTimes {
    pub fn compute(
        source: &dyn CalendarEventSource,
        location: &Location,
        week: &ShabbatWeek,
        tz: Tz,
        settings: &ShabbatSettings,
    ) -> Self {
        let friday_sunset = sunset_for(source, location, week.friday, tz);
        let saturday_sunset = sunset_for(source, location, week.saturday, tz);
        Self {
            candle_time: friday_sunset
                .as_ref()
                .map(|s| add_minutes(s, -settings.candle_minutes_before_sunset)),
            shabbat_ends: saturday_sunset
                .as_ref()
                .map(|s| add_minutes(s, settings.havdalah_minutes_after_sunset)),
            friday_sunset,
            saturday_sunset,
        }
    }
}

/// Sunset floored to the minute.
pub fn sunset_for(
    source: &dyn CalendarEventSource,
    location: &Location,
    date: NaiveDate,
    tz: Tz,
) -> Option<DateTime<Tz>> {
    source
        .sunset_for(location, date, tz)
        .map(|sunset| floor_to_minute(&sunset))
}
