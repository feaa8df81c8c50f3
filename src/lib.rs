//! # Yomtov Library
//!
//! Shabbat and Jewish holiday computations behind the `yomtov` binary.
//!
//! This library exists to enable testing of the engine and provide clean separation
//! between CLI dispatch (main.rs) and application logic.
//!
//! ## Architecture
//!
//! The library is organized into several layers:
//!
//! - **Calendar**: `calendar` generates holiday, weekly portion, candle-lighting and Havdalah
//!   events behind the `CalendarEventSource` trait, offline
//! - **Engine**: `shabbat` computes this week's Shabbat and its countdown view, `holidays`
//!   the holiday list for the coming Hebrew year
//! - **Details**: `details` holds holiday descriptions and weekly portion summaries
//! - **Time**: `clock` supplies "now" (real or a frozen developer override), `date_math`
//!   local-date helpers
//! - **Geographic**: `geo` for locations and timezone resolution
//! - **Configuration**: `config` module for TOML-based settings
//! - **Commands**: `args` and `commands` for the command-line front end
//! - **Infrastructure**: structured logging and the typed input error

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

// Public API modules
pub mod args;
pub mod calendar;
pub mod clock;
pub mod commands;
pub mod config;
pub mod constants;
pub mod date_math;
pub mod details;
pub mod error;
pub mod geo;
pub mod holidays;
pub mod shabbat;

// Re-exports for embedders
pub use calendar::{CalendarEventSource, HebrewCalendar};
pub use clock::{Clock, FixedClock, SystemClock};
pub use details::{HolidayDetails, ParshaDetails, holiday_details, parsha_details};
pub use error::InvalidInputError;
pub use holidays::{HolidaySettings, HolidaysInfo, compute_holidays_info};
pub use shabbat::{
    ShabbatInfo, ShabbatRequest, ShabbatSettings, ViewOptions, build_shabbat_view_model,
    compute_shabbat_info,
};
