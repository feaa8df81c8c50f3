//! Command-line command handlers for yomtov.
//!
//! Each command lives in its own submodule. They share one setup step, [`CommandContext`],
//! which loads the configuration, settles the timezone and picks the clock: the system
//! clock normally, a [`FixedClock`] at local noon when a developer date override is given
//! on the command line or persisted in the config.

pub mod help;
pub mod holidays;
pub mod shabbat;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::{self, Config};
use crate::logger::Log;

/// Everything a command needs after startup.
pub struct CommandContext {
    pub config: Config,
    pub timezone: Tz,
    pub clock: Box<dyn Clock>,
}

impl CommandContext {
    /// Configure logging, load the configuration and choose the clock.
    ///
    /// `json` silences the logger so stdout carries only the JSON document.
    pub fn prepare(
        debug_enabled: bool,
        config_dir: Option<String>,
        date: Option<String>,
        json: bool,
    ) -> Result<Self> {
        Log::set_enabled(!json);
        Log::set_debug(debug_enabled);

        if config_dir.is_some() {
            config::set_config_dir(config_dir)?;
        }
        let config = Config::load().context("Failed to load configuration")?;
        let timezone = config.resolve_timezone()?;

        let clock: Box<dyn Clock> = match date.as_deref() {
            Some(iso) => Box::new(FixedClock::from_override_iso(iso, timezone)?),
            None => match config.override_date() {
                Some(override_date) => Box::new(FixedClock::local_noon(override_date, timezone)?),
                None => Box::new(SystemClock),
            },
        };

        if clock.is_frozen() {
            Log::set_override_date(Some(clock.today(timezone)));
        }

        Ok(Self {
            config,
            timezone,
            clock,
        })
    }

    /// Today's date in the configured timezone, honouring any override.
    pub fn today(&self) -> NaiveDate {
        self.clock.today(self.timezone)
    }

    pub fn log_header(&self) {
        log_version!();
        let source = match config::get_config_path() {
            Ok(path) if path.exists() => format!("configuration from {}", path.display()),
            _ => "default configuration".to_string(),
        };
        self.config.log_config(&source, self.timezone);
        if self.clock.is_frozen() {
            log_warning!("Developer date override active: today is {}", self.today());
        }
    }
}
