//! Countdown state for displaying a [`ShabbatInfo`].

use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use super::ShabbatInfo;

const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    /// `now` is frozen by a developer date override
    pub is_dev_override: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShabbatStatus {
    pub is_before: bool,
    pub is_during: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub date_line: String,
}

/// Time left, each unit zero-padded to two digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountdownParts {
    pub days: String,
    pub hours: String,
    pub mins: String,
}

impl CountdownParts {
    fn zero() -> Self {
        Self {
            days: "00".to_string(),
            hours: "00".to_string(),
            mins: "00".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub show: bool,
    pub target: Option<DateTime<Tz>>,
    pub parts: CountdownParts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewMeta {
    pub is_dev_override: bool,
}

/// What the Shabbat screen shows at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShabbatViewModel {
    pub status: ShabbatStatus,
    pub hero: Hero,
    pub countdown: Countdown,
    pub meta: ViewMeta,
}

/// Derive display state from `info` at `now`.
///
/// During Shabbat the countdown is hidden. Otherwise it counts down to candle lighting
/// whenever that time is known, including under a developer override where `now` is frozen.
pub fn build_shabbat_view_model(
    info: &ShabbatInfo,
    now: DateTime<Utc>,
    options: ViewOptions,
) -> ShabbatViewModel {
    let candle_time = info.candle_time;
    let shabbat_ends = info.shabbat_ends();

    let is_during = match (candle_time, shabbat_ends) {
        (Some(candle), Some(ends)) => now >= candle && now < ends,
        _ => false,
    };
    let is_before = candle_time.is_some_and(|candle| now < candle);

    let target = if is_during { None } else { candle_time };

    ShabbatViewModel {
        status: ShabbatStatus {
            is_before,
            is_during,
        },
        hero: Hero {
            title: if is_during {
                "Shabbat Shalom"
            } else {
                "Shabbat begins in"
            }
            .to_string(),
            date_line: if is_during {
                String::new()
            } else {
                info.erev_shabbat_short.clone()
            },
        },
        countdown: Countdown {
            show: target.is_some() && !is_during,
            target,
            parts: target
                .map(|target| countdown_parts(&target, now))
                .unwrap_or_else(CountdownParts::zero),
        },
        meta: ViewMeta {
            is_dev_override: options.is_dev_override,
        },
    }
}

/// Days, hours and minutes until `target`, rounding partial minutes up.
///
/// A target already passed counts as zero.
pub fn countdown_parts(target: &DateTime<Tz>, now: DateTime<Utc>) -> CountdownParts {
    let remaining = (target.with_timezone(&Utc) - now).max(TimeDelta::zero());
    let whole_minutes = remaining.num_minutes();
    let total_minutes = if remaining > TimeDelta::minutes(whole_minutes) {
        whole_minutes + 1
    } else {
        whole_minutes
    };
    CountdownParts {
        days: format!("{:02}", total_minutes / MINUTES_PER_DAY),
        hours: format!("{:02}", (total_minutes % MINUTES_PER_DAY) / 60),
        mins: format!("{:02}", total_minutes % 60),
    }
}
