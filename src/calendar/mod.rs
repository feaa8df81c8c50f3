//! Jewish calendar events.
//!
//! The Shabbat and holiday computations consume calendar data through one narrow seam,
//! [`CalendarEventSource`]: a query returning typed [`CalendarEvent`] values for a range of
//! days, and a sunset lookup. [`HebrewCalendar`] is the built-in implementation, running
//! entirely offline on Hebrew date arithmetic and the `sunrise` solar model. Tests
//! substitute a mock to pin sunsets and events.
//!
//! ## Module Structure
//!
//! - [`hdate`]: Hebrew date conversion and year arithmetic
//! - [`holidays`]: holiday occurrences for a Hebrew year
//! - [`sedra`]: weekly Torah portion schedule
//! - [`zmanim`]: sunset for a location and day

pub mod hdate;
pub mod holidays;
pub mod sedra;
pub mod zmanim;


pub use hdate::{HebrewDate, HebrewMonth};
pub use holidays::HolidayKind;

use anyhow::{Result, bail};
use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Weekday};
use chrono_tz::Tz;
use serde::Serialize;
use std::collections::HashMap;

use crate::date_math::{add_minutes, floor_to_minute};
use crate::geo::Location;
use hdate::{date_of_day_number, day_number_of};
use holidays::{Occurrence, holidays_for_year};

/// Half-open range of calendar days, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            bail!("Date range ends ({end}) before it starts ({start})");
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(|d| *d < self.end)
    }

    /// Widen to whole Hebrew years, from Rosh Hashana to Rosh Hashana.
    fn to_hebrew_years(self) -> Self {
        let first_year = HebrewDate::from_gregorian(self.start).year();
        let last_day = self.end.pred_opt().unwrap_or(self.end).max(self.start);
        let last_year = HebrewDate::from_gregorian(last_day).year();
        let start = date_of_day_number(hdate::day_number(first_year, HebrewMonth::Tishrei, 1));
        let end = date_of_day_number(hdate::day_number(last_year + 1, HebrewMonth::Tishrei, 1));
        match (start, end) {
            (Some(start), Some(end)) => Self { start, end },
            _ => self,
        }
    }
}

/// Settings for candle-lighting and Havdalah events.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleLightingOptions {
    pub location: Location,
    pub timezone: Tz,
    /// Minutes before sunset
    pub candle_lighting_mins: i64,
    /// Minutes after sunset
    pub havdalah_mins: i64,
}

/// What a calendar query should produce.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    /// Treat the range as whole Hebrew years
    pub is_hebrew_year: bool,
    /// Include the weekly Torah portion
    pub sedrot: bool,
    pub no_minor_fast: bool,
    pub no_modern: bool,
    pub no_rosh_chodesh: bool,
    pub no_special_shabbat: bool,
    /// Emit candle-lighting and Havdalah events (needs a location)
    pub candle_lighting: Option<CandleLightingOptions>,
}

impl QueryOptions {
    fn suppresses(&self, kind: HolidayKind) -> bool {
        match kind {
            HolidayKind::MinorFast => self.no_minor_fast,
            HolidayKind::Modern => self.no_modern,
            HolidayKind::RoshChodesh => self.no_rosh_chodesh,
            HolidayKind::SpecialShabbat => self.no_special_shabbat,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HolidayEvent {
    /// English description, e.g. "Sukkot III (CH''M)"
    pub description: String,
    pub hebrew_title: String,
    pub date: NaiveDate,
    pub hebrew_date: HebrewDate,
    pub kind: HolidayKind,
    /// A festival day with Shabbat-like restrictions
    pub yom_tov: bool,
}

impl HolidayEvent {
    pub fn categories(&self) -> &'static [&'static str] {
        self.kind.categories()
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories().contains(&category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandleLightingEvent {
    pub date: NaiveDate,
    pub hebrew_date: HebrewDate,
    pub time: DateTime<Tz>,
    /// The festival this lighting opens, when it is not a plain Friday lighting
    pub linked_holiday: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HavdalahEvent {
    pub date: NaiveDate,
    pub hebrew_date: HebrewDate,
    pub time: DateTime<Tz>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParshaEvent {
    pub date: NaiveDate,
    pub hebrew_date: HebrewDate,
    /// Portion name such as "Vayakhel-Pekudei"
    pub name: String,
    pub hebrew_name: String,
}

impl ParshaEvent {
    /// "Parashat Vayechi"
    pub fn render_english(&self) -> String {
        format!("Parashat {}", self.name)
    }

    /// "פרשת ויחי"
    pub fn render_hebrew(&self) -> String {
        format!("פרשת {}", self.hebrew_name)
    }
}

/// One calendar event, tagged by what it is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalendarEvent {
    Holiday(HolidayEvent),
    CandleLighting(CandleLightingEvent),
    Havdalah(HavdalahEvent),
    Parsha(ParshaEvent),
}

impl CalendarEvent {
    pub fn date(&self) -> NaiveDate {
        match self {
            CalendarEvent::Holiday(e) => e.date,
            CalendarEvent::CandleLighting(e) => e.date,
            CalendarEvent::Havdalah(e) => e.date,
            CalendarEvent::Parsha(e) => e.date,
        }
    }

    pub fn description(&self) -> String {
        match self {
            CalendarEvent::Holiday(e) => e.description.clone(),
            CalendarEvent::CandleLighting(_) => "Candle lighting".to_string(),
            CalendarEvent::Havdalah(_) => "Havdalah".to_string(),
            CalendarEvent::Parsha(e) => e.render_english(),
        }
    }
}

/// Source of calendar events and sunsets.
#[cfg_attr(test, mockall::automock)]
pub trait CalendarEventSource {
    /// Events on the days of `range`, ordered by date.
    fn query_events(&self, range: DateRange, options: &QueryOptions) -> Result<Vec<CalendarEvent>>;

    /// Sunset on `date` at `location`, in `tz`. `None` when it cannot be computed.
    fn sunset_for(&self, location: &Location, date: NaiveDate, tz: Tz) -> Option<DateTime<Tz>>;
}

/// Built-in calendar following the diaspora schedule.
#[derive(Debug, Default, Clone, Copy)]
pub struct HebrewCalendar;

impl HebrewCalendar {
    pub fn new() -> Self {
        Self
    }

    fn candle_events(
        &self,
        range: DateRange,
        options: &CandleLightingOptions,
        yom_tov: &HashMap<i64, &Occurrence>,
        out: &mut Vec<CalendarEvent>,
    ) {
        for date in range.days() {
            let day = day_number_of(date);
            let today_is_chag = yom_tov.contains_key(&day);
            let tomorrow = yom_tov.get(&(day + 1));
            let weekday = date.weekday();

            let Some(sunset) = self.sunset_for(&options.location, date, options.timezone) else {
                continue;
            };
            let sunset = floor_to_minute(&sunset);
            let after_dark = add_minutes(&sunset, options.havdalah_mins);
            let before_sunset = add_minutes(&sunset, -options.candle_lighting_mins);
            let hebrew_date = HebrewDate::from_day_number(day);

            if weekday == Weekday::Fri {
                out.push(CalendarEvent::CandleLighting(CandleLightingEvent {
                    date,
                    hebrew_date,
                    time: before_sunset,
                    linked_holiday: tomorrow.map(|o| o.description.clone()),
                }));
            } else if let Some(next) = tomorrow {
                // No kindling on Shabbat or Yom Tov itself: wait until after dark
                let time = if weekday == Weekday::Sat || today_is_chag {
                    after_dark
                } else {
                    before_sunset
                };
                out.push(CalendarEvent::CandleLighting(CandleLightingEvent {
                    date,
                    hebrew_date,
                    time,
                    linked_holiday: Some(next.description.clone()),
                }));
            }

            if (weekday == Weekday::Sat || today_is_chag)
                && tomorrow.is_none()
                && weekday != Weekday::Fri
            {
                out.push(CalendarEvent::Havdalah(HavdalahEvent {
                    date,
                    hebrew_date,
                    time: after_dark,
                }));
            }
        }
    }
}

impl CalendarEventSource for HebrewCalendar {
    fn query_events(&self, range: DateRange, options: &QueryOptions) -> Result<Vec<CalendarEvent>> {
        let range = if options.is_hebrew_year {
            range.to_hebrew_years()
        } else {
            range
        };
        if range.is_empty() {
            return Ok(Vec::new());
        }

        // The year of `end` is included so the day after the range is known too
        let first_year = HebrewDate::from_gregorian(range.start).year();
        let last_year = HebrewDate::from_gregorian(range.end).year();
        let occurrences: Vec<Occurrence> = (first_year..=last_year)
            .flat_map(holidays_for_year)
            .collect();

        let mut events = Vec::new();
        for occurrence in &occurrences {
            let Some(date) = date_of_day_number(occurrence.day) else {
                continue;
            };
            if !range.contains(date) || options.suppresses(occurrence.kind) {
                continue;
            }
            events.push(CalendarEvent::Holiday(HolidayEvent {
                description: occurrence.description.clone(),
                hebrew_title: occurrence.hebrew.clone(),
                date,
                hebrew_date: HebrewDate::from_day_number(occurrence.day),
                kind: occurrence.kind,
                yom_tov: occurrence.yom_tov,
            }));
        }

        if options.sedrot {
            let mut schedules = HashMap::new();
            let first_saturday = range.start + TimeDelta::days(
                i64::from((6 + 7 - range.start.weekday().num_days_from_sunday()) % 7),
            );
            for date in first_saturday.iter_weeks().take_while(|d| *d < range.end) {
                let hebrew_date = HebrewDate::from_gregorian(date);
                let schedule = schedules
                    .entry(hebrew_date.year())
                    .or_insert_with(|| sedra::schedule(hebrew_date.year()));
                let day = day_number_of(date);
                if let Some((_, portion)) = schedule.iter().find(|(d, _)| *d == day) {
                    events.push(CalendarEvent::Parsha(ParshaEvent {
                        date,
                        hebrew_date,
                        name: portion.english(),
                        hebrew_name: portion.hebrew(),
                    }));
                }
            }
        }

        if let Some(candle_options) = &options.candle_lighting {
            let yom_tov: HashMap<i64, &Occurrence> = occurrences
                .iter()
                .filter(|o| o.yom_tov)
                .map(|o| (o.day, o))
                .collect();
            self.candle_events(range, candle_options, &yom_tov, &mut events);
        }

        events.sort_by_key(CalendarEvent::date);
        Ok(events)
    }

    fn sunset_for(&self, location: &Location, date: NaiveDate, tz: Tz) -> Option<DateTime<Tz>> {
        zmanim::sunset(location, date, tz)
    }
}
