use chrono::{Datelike, NaiveDate, TimeDelta, TimeZone, Utc, Weekday};
use proptest::prelude::*;
use yomtov::calendar::HebrewDate;
use yomtov::date_math::{ceil_to_minute, floor_to_minute, format_iso, parse_local_iso};
use yomtov::shabbat::ShabbatWeek;

/// Days from 1900-01-01 to beyond 2100
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..80_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + TimeDelta::days(offset)
    })
}

/// Property tests for anchoring "today" to a Shabbat
mod week_anchor_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_friday_then_saturday(today in date_strategy()) {
            let week = ShabbatWeek::for_today(today);
            prop_assert_eq!(week.friday.weekday(), Weekday::Fri);
            prop_assert_eq!(week.saturday.weekday(), Weekday::Sat);
            prop_assert_eq!(week.saturday, week.friday + TimeDelta::days(1));
        }

        #[test]
        fn test_anchor_is_current_or_upcoming(today in date_strategy()) {
            let week = ShabbatWeek::for_today(today);
            if today.weekday() == Weekday::Sat {
                prop_assert_eq!(week.saturday, today);
            } else {
                // Never in the past, never more than six days ahead
                prop_assert!(week.friday >= today);
                prop_assert!(week.friday - today < TimeDelta::days(7));
            }
        }
    }
}

/// Property tests for date helpers
mod date_math_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_iso_round_trip(date in date_strategy()) {
            prop_assert_eq!(parse_local_iso(&format_iso(date)), Some(date));
        }

        #[test]
        fn test_ceil_to_minute_idempotent(seconds in 0i64..4_000_000_000, nanos in 0u32..1_000_000_000) {
            let instant = Utc.timestamp_opt(seconds, nanos).unwrap();
            let once = ceil_to_minute(&instant);
            prop_assert_eq!(ceil_to_minute(&once), once);
            prop_assert!(once >= instant);
            prop_assert!(once - instant < TimeDelta::minutes(1));
            prop_assert!(floor_to_minute(&instant) <= instant);
        }

        #[test]
        fn test_hebrew_date_round_trip(date in date_strategy()) {
            let hebrew = HebrewDate::from_gregorian(date);
            prop_assert_eq!(hebrew.to_gregorian(), Some(date));
        }

        #[test]
        fn test_hebrew_year_later_is_about_a_year(date in date_strategy()) {
            let next = HebrewDate::from_gregorian(date).add_years(1).to_gregorian().unwrap();
            let days = (next - date).num_days();
            // 353 days in the shortest year, 385 in the longest
            prop_assert!((353..=385).contains(&days), "{} days", days);
        }
    }
}
