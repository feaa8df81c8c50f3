use super::*;
use crate::constants::test_constants::*;
use chrono_tz::{America, Asia, Europe};
use serial_test::serial;

/// Test that coordinate validation works correctly at the API boundary.
#[test]
fn test_coordinate_validation() {
    assert!(Location::new(TEST_NYC_LATITUDE, TEST_NYC_LONGITUDE, None).is_ok());
    assert!(Location::new(90.0, 180.0, None).is_ok());
    assert!(Location::new(-90.0, -180.0, Some(0.0)).is_ok());

    // Invalid latitude
    assert!(Location::new(91.0, 0.0, None).is_err());
    assert!(Location::new(-91.0, 0.0, None).is_err());
    assert!(Location::new(f64::NAN, 0.0, None).is_err());

    // Invalid longitude
    assert!(Location::new(0.0, 181.0, None).is_err());
    assert!(Location::new(0.0, 360.0, None).is_err());

    // Non-finite elevation
    assert!(Location::new(0.0, 0.0, Some(f64::INFINITY)).is_err());
}

#[test]
fn test_invalid_coordinates_are_caller_errors() {
    let err = Location::new(120.0, 0.0, None).unwrap_err();
    assert!(err.downcast_ref::<InvalidInputError>().is_some());
}

/// Latitudes above ±65° are capped before solar calculations.
#[test]
fn test_extreme_latitude_capping() {
    let arctic = Location::new(71.0, 25.0, None).unwrap();
    assert!(arctic.is_latitude_capped());
    assert_eq!(arctic.solar_latitude(), 65.0);

    let antarctic = Location::new(-80.0, 0.0, None).unwrap();
    assert_eq!(antarctic.solar_latitude(), -65.0);

    let nyc = Location::new(TEST_NYC_LATITUDE, TEST_NYC_LONGITUDE, None).unwrap();
    assert!(!nyc.is_latitude_capped());
    assert_eq!(nyc.solar_latitude(), TEST_NYC_LATITUDE);
}

#[test]
fn test_describe() {
    let nyc = Location::new(TEST_NYC_LATITUDE, TEST_NYC_LONGITUDE, None).unwrap();
    assert_eq!(nyc.describe(), "40.7128°N, 74.0060°W");
}

/// Test that timezone detection works for real-world coordinates.
#[test]
fn test_timezone_detection() {
    let tz = determine_timezone_from_coordinates(TEST_NYC_LATITUDE, TEST_NYC_LONGITUDE);
    assert_eq!(tz, America::New_York, "NYC should be in America/New_York");

    let tz = determine_timezone_from_coordinates(51.5074, -0.1278);
    assert_eq!(tz, Europe::London, "London should be in Europe/London");

    let tz = determine_timezone_from_coordinates(31.7683, 35.2137);
    assert_eq!(tz, Asia::Jerusalem, "Jerusalem should be in Asia/Jerusalem");
}

#[test]
fn test_configured_timezone_wins() {
    let nyc = Location::new(TEST_NYC_LATITUDE, TEST_NYC_LONGITUDE, None).unwrap();
    let tz = resolve_timezone(Some("Europe/Paris"), Some(&nyc)).unwrap();
    assert_eq!(tz, Europe::Paris);

    let tz = resolve_timezone(None, Some(&nyc)).unwrap();
    assert_eq!(tz, TEST_NYC_TIMEZONE);

    assert!(resolve_timezone(Some("Mars/Olympus_Mons"), None).is_err());
}

#[test]
#[serial]
fn test_system_timezone_from_tz_variable() {
    let original = std::env::var("TZ").ok();

    unsafe {
        std::env::set_var("TZ", "Asia/Tokyo");
    }
    assert_eq!(get_system_timezone().unwrap(), Asia::Tokyo);
    assert_eq!(resolve_timezone(None, None).unwrap(), Asia::Tokyo);

    unsafe {
        match original {
            Some(value) => std::env::set_var("TZ", value),
            None => std::env::remove_var("TZ"),
        }
    }
}
