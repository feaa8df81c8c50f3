//! Sunset for a location and day.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use sunrise::{Coordinates, SolarDay, SolarEvent};

use crate::geo::Location;

/// Sunset on `date` at `location`, expressed in `tz`.
///
/// Latitudes beyond ±65° are capped so the sun always sets. Elevation raises the observer,
/// which makes sunset slightly later. Returns `None` for coordinates the solar model rejects.
pub fn sunset(location: &Location, date: NaiveDate, tz: Tz) -> Option<DateTime<Tz>> {
    let coord = Coordinates::new(location.solar_latitude(), location.longitude)?;
    let mut solar_day = SolarDay::new(coord, date);
    if let Some(elevation) = location.elevation
        && elevation > 0.0
    {
        solar_day = solar_day.with_altitude(elevation);
    }
    let sunset_utc = solar_day.event_time(SolarEvent::Sunset);
    Some(sunset_utc.with_timezone(&tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::test_constants::*;
    use chrono::Timelike;

    fn nyc() -> Location {
        Location::new(TEST_NYC_LATITUDE, TEST_NYC_LONGITUDE, None).unwrap()
    }

    #[test]
    fn test_new_york_winter_sunset() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let sunset = sunset(&nyc(), date, TEST_NYC_TIMEZONE).unwrap();
        assert_eq!(sunset.date_naive(), date);
        // Around 4:40 PM in early January
        assert_eq!(sunset.hour(), 16);
        assert!((30..=50).contains(&sunset.minute()), "{sunset}");
    }

    #[test]
    fn test_new_york_summer_sunset() {
        let date = NaiveDate::from_ymd_opt(2026, 6, 26).unwrap();
        let sunset = sunset(&nyc(), date, TEST_NYC_TIMEZONE).unwrap();
        // Around 8:31 PM EDT
        assert_eq!(sunset.hour(), 20);
    }

    #[test]
    fn test_elevation_delays_sunset() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let ground = sunset(&nyc(), date, TEST_NYC_TIMEZONE).unwrap();
        let high = Location::new(TEST_NYC_LATITUDE, TEST_NYC_LONGITUDE, Some(800.0)).unwrap();
        let raised = sunset(&high, date, TEST_NYC_TIMEZONE).unwrap();
        assert!(raised > ground);
    }

    #[test]
    fn test_polar_latitude_still_has_sunset() {
        let svalbard = Location::new(78.22, 15.65, None).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 6, 21).unwrap();
        assert!(sunset(&svalbard, date, chrono_tz::Europe::Oslo).is_some());
    }
}
