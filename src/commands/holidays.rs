//! Holidays command: today's holidays and the rest of the coming Hebrew year.

use anyhow::Result;

use super::CommandContext;
use crate::calendar::HebrewCalendar;
use crate::constants::UPCOMING_HOLIDAYS_PREVIEW;
use crate::date_math::{format_iso, parse_local_iso};
use crate::holidays::{HolidayRecord, compute_holidays_info};

/// Handle the holidays command.
pub fn handle_holidays_command(
    debug_enabled: bool,
    config_dir: Option<String>,
    date: Option<String>,
    json: bool,
    all: bool,
) -> Result<()> {
    let context = CommandContext::prepare(debug_enabled, config_dir, date, json)?;
    let today_iso = format_iso(context.today());
    let info = compute_holidays_info(
        &HebrewCalendar::new(),
        &today_iso,
        &context.config.holiday_settings(),
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    context.log_header();

    if info.today_holidays.is_empty() {
        log_block_start!("No holiday today");
    } else {
        log_block_start!("Today:");
        for holiday in &info.today_holidays {
            log_indented!("{}", describe(holiday));
            if let Some(details) = holiday.details {
                log_indented!("{}", details.description);
            }
        }
    }

    let shown = if all {
        info.upcoming.len()
    } else {
        UPCOMING_HOLIDAYS_PREVIEW.min(info.upcoming.len())
    };
    log_block_start!("Upcoming:");
    for holiday in &info.upcoming[..shown] {
        let when = parse_local_iso(&holiday.date)
            .map(|d| d.format("%a %b %-d, %Y").to_string())
            .unwrap_or_else(|| holiday.date.clone());
        log_indented!("{when}  {}", describe(holiday));
    }
    if shown < info.upcoming.len() {
        log_pipe!();
        log_info!(
            "{} more until next year; use --all to list them",
            info.upcoming.len() - shown
        );
    }

    log_end!();
    Ok(())
}

fn describe(holiday: &HolidayRecord) -> String {
    if holiday.hebrew_title.is_empty() {
        holiday.display_title.clone()
    } else {
        format!("{} ({})", holiday.display_title, holiday.hebrew_title)
    }
}

pub fn display_help() {
    log_version!();
    log_block_start!("holidays - Holidays for the coming Hebrew year");
    log_block_start!("Usage: yomtov holidays [OPTIONS]");
    log_block_start!("Options:");
    log_indented!("-a, --all           List every upcoming holiday");
    log_indented!("-D, --date <date>   List as if today were <date> (YYYY-MM-DD)");
    log_indented!("-j, --json          Output the full list as JSON");
    log_block_start!("Configuration:");
    log_indented!("minor_fasts, roshei_chodesh, modern_holidays and special_shabbatot");
    log_indented!("in yomtov.toml hide those groups when set to false.");
    log_block_start!("Examples:");
    log_indented!("yomtov holidays");
    log_indented!("yomtov holidays --all --date 2027-02-15");
    log_end!();
}
