//! Application-wide constants, defaults and validation bounds.

// # Shabbat time offsets (minutes)

/// Candle lighting before Friday sunset.
pub const DEFAULT_CANDLE_LIGHTING_MINUTES: i64 = 18;
/// Shabbat ends this many minutes after Saturday sunset.
pub const DEFAULT_HAVDALAH_MINUTES: i64 = 42;

pub const MINIMUM_OFFSET_MINUTES: i64 = 0;
pub const MAXIMUM_OFFSET_MINUTES: i64 = 120;

// # Holiday toggles

pub const DEFAULT_MINOR_FASTS: bool = true;
pub const DEFAULT_ROSHEI_CHODESH: bool = true;
pub const DEFAULT_MODERN_HOLIDAYS: bool = true;
pub const DEFAULT_SPECIAL_SHABBATOT: bool = true;

/// Upcoming holidays listed without `--all`.
pub const UPCOMING_HOLIDAYS_PREVIEW: usize = 10;

// # Geography

/// Solar calculations above this absolute latitude are capped (polar day/night).
pub const MAXIMUM_SOLAR_LATITUDE: f64 = 65.0;

// # Files

pub const CONFIG_DIR_NAME: &str = "yomtov";
pub const CONFIG_FILE_NAME: &str = "yomtov.toml";

// # Exit code

pub const EXIT_FAILURE: i32 = 1;
