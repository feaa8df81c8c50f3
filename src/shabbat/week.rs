//! Which Friday and Saturday "this week's Shabbat" means.

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use serde::Serialize;

/// The Friday/Saturday pair of one Shabbat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShabbatWeek {
    pub friday: NaiveDate,
    pub saturday: NaiveDate,
}

impl ShabbatWeek {
    /// On a Saturday, the Shabbat already under way; otherwise the next Friday at or after
    /// `today`.
    pub fn for_today(today: NaiveDate) -> Self {
        let friday = if today.weekday() == Weekday::Sat {
            today - TimeDelta::days(1)
        } else {
            let days_from_sunday = i64::from(today.weekday().num_days_from_sunday());
            today + TimeDelta::days(5 - days_from_sunday)
        };
        Self {
            friday,
            saturday: friday + TimeDelta::days(1),
        }
    }

    /// Midnight ending Saturday, the exclusive end of the week's event window.
    pub fn window_end(&self) -> NaiveDate {
        self.saturday + TimeDelta::days(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekdays_anchor_to_coming_friday() {
        // Sunday 2025-12-28 through Friday 2026-01-02
        for day in 28..=31 {
            let week = ShabbatWeek::for_today(date(2025, 12, day));
            assert_eq!(week.friday, date(2026, 1, 2));
        }
        assert_eq!(ShabbatWeek::for_today(date(2026, 1, 1)).friday, date(2026, 1, 2));
        assert_eq!(ShabbatWeek::for_today(date(2026, 1, 2)).friday, date(2026, 1, 2));
    }

    #[test]
    fn test_saturday_is_current_shabbat() {
        let week = ShabbatWeek::for_today(date(2026, 1, 3));
        assert_eq!(week.friday, date(2026, 1, 2));
        assert_eq!(week.saturday, date(2026, 1, 3));
        assert_eq!(week.window_end(), date(2026, 1, 4));
    }

    #[test]
    fn test_year_boundary() {
        let week = ShabbatWeek::for_today(date(2026, 12, 30));
        assert_eq!(week.friday, date(2027, 1, 1));
        assert_eq!(week.saturday, date(2027, 1, 2));
    }
}
