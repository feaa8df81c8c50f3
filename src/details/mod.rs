//! Descriptions shown alongside holidays and weekly Torah portions.
//!
//! Holidays are found by their exact description first, then by the normalized name shared
//! by every day of the holiday, so "Sukkot III (CH''M)" and "Erev Sukkot" both resolve to
//! Sukkot. Portions are found by name, ignoring case, apostrophes and a leading "Parashat";
//! a doubled reading such as "Chukat-Balak" yields both halves in order.

mod holiday_data;
mod parsha_data;

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use crate::holidays::normalize_holiday_name;

/// What a holiday is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HolidayDetails {
    pub title: &'static str,
    pub description: &'static str,
    /// Other descriptions that resolve here without normalization
    #[serde(skip)]
    pub aliases: &'static [&'static str],
}

/// A weekly portion's Torah range and a short summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParshaDetails {
    pub name: &'static str,
    /// e.g. "Genesis 47:28–50:26"
    pub verses: &'static str,
    pub summary: &'static str,
}

static HOLIDAY_INDEX: Lazy<HashMap<&'static str, &'static HolidayDetails>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for details in holiday_data::HOLIDAYS {
        index.insert(details.title, details);
        for alias in details.aliases {
            index.entry(*alias).or_insert(details);
        }
    }
    index
});

static PARSHA_INDEX: Lazy<HashMap<String, &'static ParshaDetails>> = Lazy::new(|| {
    parsha_data::PARSHIOT
        .iter()
        .map(|details| (parsha_key(details.name), details))
        .collect()
});

/// Details for a holiday description such as "Pesach VII" or "Chanukah: 3 Candles".
pub fn holiday_details(description: &str) -> Option<&'static HolidayDetails> {
    let exact = description.trim().replace('\u{2019}', "'");
    HOLIDAY_INDEX
        .get(exact.as_str())
        .or_else(|| HOLIDAY_INDEX.get(normalize_holiday_name(description).as_str()))
        .copied()
}

/// Details for a portion name, one entry per portion read. Empty when nothing matches.
pub fn parsha_details(name: &str) -> Vec<&'static ParshaDetails> {
    let name = name.trim();
    let name = name
        .strip_prefix("Parashat ")
        .or_else(|| name.strip_prefix("Parasha "))
        .unwrap_or(name);

    // "Lech-Lecha" is a single portion despite the hyphen
    if let Some(details) = PARSHA_INDEX.get(&parsha_key(name)) {
        return vec![*details];
    }
    name.split(['-', '\u{2013}', '\u{2014}'])
        .filter_map(|part| PARSHA_INDEX.get(&parsha_key(part)).copied())
        .collect()
}

/// "Beha'alotcha" → "behaalotcha", "Lech-Lecha" → "lech_lecha"
fn parsha_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .map(|c| match c {
            ' ' | '-' | '\u{2013}' | '\u{2014}' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
