//! The holiday list: one Hebrew year of holidays starting today.
//!
//! The window runs from today up to (not including) the same Hebrew month and day one Hebrew
//! year later. A plain 365-day window would either cut a leap year's second Adar short or
//! show some annual holidays twice.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::calendar::{CalendarEvent, CalendarEventSource, DateRange, HebrewDate, QueryOptions};
use crate::constants::{
    DEFAULT_MINOR_FASTS, DEFAULT_MODERN_HOLIDAYS, DEFAULT_ROSHEI_CHODESH,
    DEFAULT_SPECIAL_SHABBATOT,
};
use crate::date_math::{format_iso, parse_local_iso};
use crate::details::{HolidayDetails, holiday_details};
use crate::error::InvalidInputError;

static EREV_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Erev\s+").expect("valid erev regex"));
static COUNT_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":\s*\d+.*$").expect("valid count suffix regex"));
static YEAR_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+\d{4}$").expect("valid year suffix regex"));
static ROMAN_DAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s+\b(I|II|III|IV|V|VI|VII|VIII)\b").expect("valid roman numeral regex")
});
static PARENTHESES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(.*?\)\s*").expect("valid parentheses regex"));

/// Which optional holiday groups to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HolidaySettings {
    pub minor_fasts: bool,
    pub roshei_chodesh: bool,
    pub modern_holidays: bool,
    pub special_shabbatot: bool,
}

impl Default for HolidaySettings {
    fn default() -> Self {
        Self {
            minor_fasts: DEFAULT_MINOR_FASTS,
            roshei_chodesh: DEFAULT_ROSHEI_CHODESH,
            modern_holidays: DEFAULT_MODERN_HOLIDAYS,
            special_shabbatot: DEFAULT_SPECIAL_SHABBATOT,
        }
    }
}

impl HolidaySettings {
    fn query_options(&self) -> QueryOptions {
        QueryOptions {
            no_minor_fast: !self.minor_fasts,
            no_rosh_chodesh: !self.roshei_chodesh,
            no_modern: !self.modern_holidays,
            no_special_shabbat: !self.special_shabbatot,
            ..Default::default()
        }
    }
}

/// One holiday occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRecord {
    /// `{description}-{YYYY-MM-DD}`
    pub id: String,
    /// Normalized name shared by every day of a holiday, e.g. "Sukkot"
    pub title: String,
    /// Description without parenthesised qualifiers, e.g. "Sukkot III"
    pub display_title: String,
    pub hebrew_title: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub hebrew_date: String,
    /// The Hebrew date in Hebrew script, e.g. "ט״ו שבט תשפ״ו"
    pub hebrew_date_he: String,
    pub categories: Vec<String>,
    /// What the holiday is about, when known
    pub details: Option<&'static HolidayDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidaysInfo {
    pub holidays: Vec<HolidayRecord>,
    pub today_holidays: Vec<HolidayRecord>,
    pub upcoming: Vec<HolidayRecord>,
}

/// First day after the holiday window starting at `today`.
pub fn hebrew_year_window_end(today: NaiveDate) -> Result<NaiveDate> {
    let next_year = HebrewDate::from_gregorian(today).add_years(1);
    next_year
        .to_gregorian()
        .ok_or_else(|| anyhow!("{next_year} has no Gregorian equivalent"))
}

/// List one Hebrew year of holidays from `today_iso`, split into today's and upcoming.
pub fn compute_holidays_info(
    source: &dyn CalendarEventSource,
    today_iso: &str,
    settings: &HolidaySettings,
) -> Result<HolidaysInfo> {
    let today = parse_local_iso(today_iso).ok_or_else(|| {
        InvalidInputError::new(format!("today '{today_iso}' is not a valid YYYY-MM-DD date"))
    })?;
    let range = DateRange::new(today, hebrew_year_window_end(today)?)?;

    let events = source
        .query_events(range, &settings.query_options())
        .with_context(|| format!("Failed to query holidays from {today_iso}"))?;

    let mut seen = HashSet::new();
    let holidays: Vec<HolidayRecord> = events
        .iter()
        .filter_map(|event| match event {
            CalendarEvent::Holiday(holiday) => Some(holiday),
            _ => None,
        })
        .map(|holiday| {
            let date = format_iso(holiday.date);
            HolidayRecord {
                id: format!("{}-{date}", holiday.description),
                title: normalize_holiday_name(&holiday.description),
                display_title: transform_holiday_title(&holiday.description),
                hebrew_title: holiday.hebrew_title.clone(),
                date,
                hebrew_date: holiday.hebrew_date.to_string(),
                hebrew_date_he: holiday.hebrew_date.render_hebrew(),
                categories: holiday.categories().iter().map(|c| c.to_string()).collect(),
                details: holiday_details(&holiday.description),
            }
        })
        .filter(|record| seen.insert(record.id.clone()))
        .collect();

    if crate::logger::Log::is_debug() {
        let normalized: BTreeSet<&str> = holidays.iter().map(|h| h.title.as_str()).collect();
        let display: BTreeSet<&str> = holidays.iter().map(|h| h.display_title.as_str()).collect();
        log_debug!(
            "Holidays {} to {}: {} occurrences, {} display titles, {} normalized",
            range.start,
            range.end,
            holidays.len(),
            display.len(),
            normalized.len()
        );
    }

    let today_holidays = holidays
        .iter()
        .filter(|h| h.date.as_str() == today_iso)
        .cloned()
        .collect();
    let upcoming = holidays
        .iter()
        .filter(|h| h.date.as_str() > today_iso)
        .cloned()
        .collect();

    Ok(HolidaysInfo {
        holidays,
        today_holidays,
        upcoming,
    })
}

/// Reduce a holiday description to the name shared by all its days.
///
/// "Erev Pesach" → "Pesach", "Chanukah: 6 Candles" → "Chanukah",
/// "Rosh Hashana 5787" → "Rosh Hashana", "Sukkot III (CH''M)" → "Sukkot".
pub fn normalize_holiday_name(name: &str) -> String {
    let name = name.trim();
    let name = EREV_PREFIX_RE.replace(name, "");
    let name = COUNT_SUFFIX_RE.replace(&name, "");
    let name = YEAR_SUFFIX_RE.replace(&name, "");
    let name = ROMAN_DAY_RE.replace(&name, "");
    let name = PARENTHESES_RE.replace_all(&name, "");
    name.replace('\u{2019}', "'").trim().to_string()
}

/// Title for display: the description without parenthesised qualifiers.
pub fn transform_holiday_title(name: &str) -> String {
    PARENTHESES_RE.replace_all(name.trim(), " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{HebrewCalendar, HolidayEvent, HolidayKind, MockCalendarEventSource};

    fn record_titles(info: &HolidaysInfo) -> BTreeSet<String> {
        info.holidays.iter().map(|h| h.title.clone()).collect()
    }

    #[test]
    fn test_normalize_holiday_name() {
        let cases = [
            ("Erev Pesach", "Pesach"),
            ("Chanukah: 6 Candles", "Chanukah"),
            ("Chanukah: 8th Day", "Chanukah"),
            ("Rosh Hashana 5787", "Rosh Hashana"),
            ("Rosh Hashana II", "Rosh Hashana"),
            ("Sukkot III (CH''M)", "Sukkot"),
            ("Pesach VII", "Pesach"),
            ("Tish'a B'Av (observed)", "Tish'a B'Av"),
            ("Yom HaAtzma\u{2019}ut", "Yom HaAtzma'ut"),
            ("  erev Yom Kippur ", "Yom Kippur"),
            ("Rosh Chodesh Adar II", "Rosh Chodesh Adar"),
            ("Rosh Chodesh Iyyar", "Rosh Chodesh Iyyar"),
            ("Shabbat HaChodesh", "Shabbat HaChodesh"),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_holiday_name(input), expected, "{input:?}");
        }
    }

    #[test]
    fn test_transform_holiday_title() {
        assert_eq!(transform_holiday_title("Sukkot III (CH''M)"), "Sukkot III");
        assert_eq!(transform_holiday_title("Erev Pesach"), "Erev Pesach");
        assert_eq!(
            transform_holiday_title("Tish'a B'Av (observed)"),
            "Tish'a B'Av"
        );
    }

    #[test]
    fn test_window_is_one_hebrew_year() {
        // 12 Tevet 5786 to 12 Tevet 5787
        let end = hebrew_year_window_end(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()).unwrap();
        assert_eq!(HebrewDate::from_gregorian(end).to_string(), "12 Tevet 5787");
    }

    #[test]
    fn test_rosh_chodesh_in_upcoming() {
        let info = compute_holidays_info(
            &HebrewCalendar::new(),
            "2026-01-01",
            &HolidaySettings::default(),
        )
        .unwrap();

        let shvat = info
            .holidays
            .iter()
            .find(|h| h.title == "Rosh Chodesh Sh'vat")
            .unwrap();
        assert_eq!(shvat.date, "2026-01-19");
        assert_eq!(shvat.categories, vec!["roshchodesh"]);
        assert_eq!(shvat.details.map(|d| d.title), Some("Rosh Chodesh Sh'vat"));

        let tu_bishvat = info.holidays.iter().find(|h| h.title == "Tu BiShvat").unwrap();
        assert_eq!(tu_bishvat.hebrew_date, "15 Sh'vat 5786");
        assert_eq!(tu_bishvat.hebrew_date_he, "ט״ו שבט תשפ״ו");
        assert!(tu_bishvat.details.is_some_and(|d| d.description.starts_with("The New Year for Trees")));
        assert!(info.today_holidays.is_empty());
        assert_eq!(info.upcoming.len(), info.holidays.len());

        let end = format_iso(
            hebrew_year_window_end(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()).unwrap(),
        );
        assert!(info.holidays.iter().all(|h| h.date.as_str() >= "2026-01-01"));
        assert!(info.holidays.iter().all(|h| h.date < end));
        // Each annual holiday appears once
        let purim: Vec<_> = info.holidays.iter().filter(|h| h.id.starts_with("Purim-")).collect();
        assert_eq!(purim.len(), 1);
    }

    #[test]
    fn test_leap_year_lists_more_holidays() {
        let calendar = HebrewCalendar::new();
        let settings = HolidaySettings::default();
        // 8 Adar I 5787 versus 17 Sh'vat 5785
        let leap = compute_holidays_info(&calendar, "2027-02-15", &settings).unwrap();
        let regular = compute_holidays_info(&calendar, "2025-02-15", &settings).unwrap();

        let leap_titles = record_titles(&leap);
        assert!(leap_titles.contains("Purim Katan"));
        assert!(leap_titles.len() > record_titles(&regular).len());
    }

    #[test]
    fn test_toggles_suppress_groups() {
        let calendar = HebrewCalendar::new();
        let all = compute_holidays_info(&calendar, "2026-01-01", &HolidaySettings::default()).unwrap();
        let none = compute_holidays_info(
            &calendar,
            "2026-01-01",
            &HolidaySettings {
                minor_fasts: false,
                roshei_chodesh: false,
                modern_holidays: false,
                special_shabbatot: false,
            },
        )
        .unwrap();

        let has = |info: &HolidaysInfo, category: &str| {
            info.holidays.iter().any(|h| h.categories.iter().any(|c| c == category))
        };
        for category in ["roshchodesh", "modern", "shabbat"] {
            assert!(has(&all, category), "{category}");
            assert!(!has(&none, category), "{category}");
        }
        assert!(none.holidays.iter().all(|h| h.title != "Tzom Tammuz"));
        assert!(none.holidays.iter().any(|h| h.title == "Yom Kippur"));
    }

    #[test]
    fn test_today_partition_and_dedup() {
        let mut source = MockCalendarEventSource::new();
        source.expect_query_events().returning(|range, _| {
            let event = |day: NaiveDate, description: &str| {
                CalendarEvent::Holiday(HolidayEvent {
                    description: description.to_string(),
                    hebrew_title: String::new(),
                    date: day,
                    hebrew_date: HebrewDate::from_gregorian(day),
                    kind: HolidayKind::Minor,
                    yom_tov: false,
                })
            };
            let tomorrow = range.start.succ_opt().unwrap();
            Ok(vec![
                event(range.start, "Tu BiShvat"),
                event(range.start, "Tu BiShvat"),
                event(tomorrow, "Tu BiShvat"),
            ])
        });

        let info = compute_holidays_info(&source, "2026-02-02", &HolidaySettings::default()).unwrap();
        assert_eq!(info.holidays.len(), 2);
        assert_eq!(info.today_holidays.len(), 1);
        assert_eq!(info.today_holidays[0].id, "Tu BiShvat-2026-02-02");
        assert_eq!(info.upcoming.len(), 1);
        assert_eq!(info.upcoming[0].date, "2026-02-03");
    }

    #[test]
    fn test_invalid_today() {
        let source = MockCalendarEventSource::new();
        let err = compute_holidays_info(&source, "02/02/2026", &HolidaySettings::default())
            .unwrap_err();
        assert!(err.downcast_ref::<InvalidInputError>().is_some());
    }

    #[test]
    fn test_settings_deserialize_with_defaults() {
        let settings: HolidaySettings = serde_json::from_str(r#"{"minorFasts": false}"#).unwrap();
        assert!(!settings.minor_fasts);
        assert!(settings.roshei_chodesh);
        assert!(settings.modern_holidays);
        assert!(settings.special_shabbatot);
    }
}
