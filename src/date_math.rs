//! Local-time-safe date utilities.
//!
//! Calendar days are `NaiveDate` values with no time of day, so adding or subtracting days
//! can never slide across a DST boundary into the neighbouring date. Instants are
//! `DateTime<Tz>` in the timezone the week is being computed for, and "same day" always
//! means the same wall-clock date in that timezone, never in UTC.

use chrono::{DateTime, DurationRound, NaiveDate, TimeDelta, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::calendar::HebrewDate;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid ISO date regex"));

/// Parse a strict `YYYY-MM-DD` string into a calendar day.
///
/// Returns `None` for anything malformed or out of range (month 13, February 30, signs,
/// surrounding whitespace). Never panics.
pub fn parse_local_iso(iso: &str) -> Option<NaiveDate> {
    let caps = ISO_DATE_RE.captures(iso)?;
    let year = caps[1].parse::<i32>().ok()?;
    let month = caps[2].parse::<u32>().ok()?;
    let day = caps[3].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Whether two instants fall on the same wall-clock day in `a`'s timezone.
pub fn is_same_local_date<T: TimeZone, U: TimeZone>(a: &DateTime<T>, b: &DateTime<U>) -> bool {
    let tz = a.timezone();
    a.date_naive() == b.with_timezone(&tz).date_naive()
}

/// Whether an instant falls on `date` in its own timezone.
pub fn falls_on<T: TimeZone>(instant: &DateTime<T>, date: NaiveDate) -> bool {
    instant.date_naive() == date
}

pub fn add_minutes<T: TimeZone>(instant: &DateTime<T>, minutes: i64) -> DateTime<T> {
    instant.clone() + TimeDelta::minutes(minutes)
}

/// Drop seconds and sub-seconds.
pub fn floor_to_minute<T: TimeZone>(instant: &DateTime<T>) -> DateTime<T> {
    instant
        .clone()
        .duration_trunc(TimeDelta::minutes(1))
        .unwrap_or_else(|_| instant.clone())
}

/// Round up to the next whole minute, leaving exact minutes untouched.
pub fn ceil_to_minute<T: TimeZone>(instant: &DateTime<T>) -> DateTime<T> {
    let on_minute = instant.timestamp().rem_euclid(60) == 0 && instant.timestamp_subsec_nanos() == 0;
    if on_minute {
        instant.clone()
    } else {
        floor_to_minute(instant) + TimeDelta::minutes(1)
    }
}

/// "January 2, 2026", or an empty string for invalid input.
pub fn format_gregorian_long_from_iso(iso: &str) -> String {
    parse_local_iso(iso)
        .map(format_gregorian_long)
        .unwrap_or_default()
}

pub fn format_gregorian_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "13 Tevet 5786", or an empty string for invalid input.
pub fn format_hebrew_long_from_iso(iso: &str) -> String {
    parse_local_iso(iso)
        .map(|date| HebrewDate::from_gregorian(date).to_string())
        .unwrap_or_default()
}

/// "Friday, January 2"
pub fn format_short_no_year(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

/// "5:12 PM"
pub fn format_time_12h<T: TimeZone>(instant: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    instant.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Timelike, Utc};
    use chrono_tz::America::New_York;

    #[test]
    fn test_parse_local_iso() {
        assert_eq!(
            parse_local_iso("2026-01-02"),
            NaiveDate::from_ymd_opt(2026, 1, 2)
        );
        assert_eq!(parse_local_iso("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));

        for bad in [
            "", "2026-1-2", "2026-13-01", "2026-02-30", "2025-02-29", "20260102", "2026-01-02 ",
            " 2026-01-02", "+2026-01-02", "2026-aa-02", "2026-01-02T00:00",
        ] {
            assert_eq!(parse_local_iso(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn test_is_same_local_date_uses_wall_clock() {
        // 23:30 in New York is already the next day in UTC
        let late = New_York.with_ymd_and_hms(2026, 1, 2, 23, 30, 0).unwrap();
        let morning = New_York.with_ymd_and_hms(2026, 1, 2, 6, 0, 0).unwrap();
        assert!(is_same_local_date(&late, &morning));
        assert_ne!(late.with_timezone(&Utc).date_naive(), morning.date_naive());

        let next = New_York.with_ymd_and_hms(2026, 1, 3, 0, 0, 0).unwrap();
        assert!(!is_same_local_date(&late, &next));
        assert!(falls_on(&late, NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()));
    }

    #[test]
    fn test_minute_rounding() {
        let exact = New_York.with_ymd_and_hms(2026, 1, 2, 17, 30, 0).unwrap();
        assert_eq!(ceil_to_minute(&exact), exact);
        assert_eq!(floor_to_minute(&exact), exact);

        let residue = exact + TimeDelta::milliseconds(200);
        assert_eq!(ceil_to_minute(&residue).minute(), 31);
        assert_eq!(floor_to_minute(&residue), exact);

        let twelve_seconds = exact + TimeDelta::seconds(12);
        assert_eq!(ceil_to_minute(&ceil_to_minute(&twelve_seconds)), ceil_to_minute(&twelve_seconds));
    }

    #[test]
    fn test_add_minutes_does_not_mutate() {
        let sunset = New_York.with_ymd_and_hms(2026, 1, 2, 17, 30, 0).unwrap();
        let candles = add_minutes(&sunset, -18);
        assert_eq!(candles.hour(), 17);
        assert_eq!(candles.minute(), 12);
        assert_eq!(sunset.minute(), 30);
    }

    #[test]
    fn test_long_formats() {
        assert_eq!(format_gregorian_long_from_iso("2026-01-02"), "January 2, 2026");
        assert_eq!(format_gregorian_long_from_iso("not a date"), "");
        assert_eq!(format_hebrew_long_from_iso("2026-01-02"), "13 Tevet 5786");
        assert_eq!(format_hebrew_long_from_iso("2026-02-31"), "");

        let friday = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert_eq!(format_short_no_year(friday), "Friday, January 2");
        assert_eq!(format_iso(friday), "2026-01-02");

        let candles = New_York.with_ymd_and_hms(2026, 1, 2, 16, 22, 0).unwrap();
        assert_eq!(format_time_12h(&candles), "4:22 PM");
    }
}
