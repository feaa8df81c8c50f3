//! Shabbat command: this week's candle lighting, end time and Torah portion.

use anyhow::Result;
use serde::Serialize;

use super::CommandContext;
use crate::calendar::HebrewCalendar;
use crate::date_math::format_time_12h;
use crate::shabbat::{
    ShabbatInfo, ShabbatRequest, ShabbatViewModel, ViewOptions, build_shabbat_view_model,
    compute_shabbat_info,
};

#[derive(Serialize)]
struct ShabbatReport<'a> {
    shabbat: &'a ShabbatInfo,
    view: &'a ShabbatViewModel,
}

/// Handle the shabbat command.
pub fn handle_shabbat_command(
    debug_enabled: bool,
    config_dir: Option<String>,
    date: Option<String>,
    json: bool,
) -> Result<()> {
    let context = CommandContext::prepare(debug_enabled, config_dir, date, json)?;
    let now = context.clock.now();

    let request = ShabbatRequest {
        today: context.today(),
        timezone: context.timezone,
        location: context.config.location(),
        settings: context.config.shabbat_settings(),
        now,
    };
    let info = compute_shabbat_info(&HebrewCalendar::new(), &request)?;
    let view = build_shabbat_view_model(
        &info,
        now,
        ViewOptions {
            is_dev_override: context.clock.is_frozen(),
        },
    );

    if json {
        let report = ShabbatReport {
            shabbat: &info,
            view: &view,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    context.log_header();
    display_shabbat(&info, &view);
    log_end!();
    Ok(())
}

fn display_shabbat(info: &ShabbatInfo, view: &ShabbatViewModel) {
    if view.countdown.show {
        let parts = &view.countdown.parts;
        log_block_start!(
            "{}: {}d {}h {}m",
            view.hero.title,
            parts.days,
            parts.hours,
            parts.mins
        );
    } else {
        log_block_start!("{}", view.hero.title);
    }
    if !view.hero.date_line.is_empty() {
        log_indented!("{}", view.hero.date_line);
    }

    log_block_start!(
        "Erev Shabbat: {} ({})",
        info.erev_shabbat_greg_date,
        info.erev_shabbat_hebrew_date
    );
    log_indented!("{}", info.erev_shabbat_hebrew_date_he);
    if let Some(sunset) = &info.friday_sunset {
        log_indented!("Sunset: {}", format_time_12h(sunset));
    }
    if let Some(candles) = &info.candle_time {
        log_indented!("Candle lighting: {}", format_time_12h(candles));
    }

    log_block_start!(
        "Yom Shabbat: {} ({})",
        info.yom_shabbat_greg_date,
        info.yom_shabbat_hebrew_date
    );
    log_indented!("{}", info.yom_shabbat_hebrew_date_he);
    if let Some(sunset) = &info.saturday_sunset {
        log_indented!("Sunset: {}", format_time_12h(sunset));
    }
    if let Some(end) = &info.end {
        log_indented!("{}: {}", end.label(), format_time_12h(&end.time()));
    }

    match (&info.parsha_english, &info.parsha_hebrew) {
        (Some(english), Some(hebrew)) => log_indented!("{} / {}", english, hebrew),
        (Some(english), None) => log_indented!("{}", english),
        _ if info.parsha_replaced_by_holiday => {
            log_indented!("Holiday reading replaces the weekly portion")
        }
        _ => {}
    }
    for portion in &info.parsha_details {
        log_pipe!();
        log_decorated!("{} ({})", portion.name, portion.verses);
        log_indented!("{}", portion.summary);
    }

    if info.candle_time.is_none() {
        log_pipe!();
        log_info!("Set latitude and longitude in yomtov.toml to see candle-lighting times");
    }
}

pub fn display_help() {
    log_version!();
    log_block_start!("shabbat - This week's Shabbat");
    log_block_start!("Usage: yomtov shabbat [OPTIONS]");
    log_block_start!("Options:");
    log_indented!("-D, --date <date>   Compute as if today were <date> (YYYY-MM-DD)");
    log_indented!("-j, --json          Output ShabbatInfo and the countdown as JSON");
    log_block_start!("Notes:");
    log_indented!("On Saturday night after Shabbat ends, next week's Shabbat is shown.");
    log_indented!("When Shabbat runs into a festival, its end is Yom Tov candle lighting.");
    log_block_start!("Examples:");
    log_indented!("yomtov shabbat");
    log_indented!("yomtov shabbat --date 2026-09-11 --json");
    log_end!();
}
