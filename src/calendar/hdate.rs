//! Hebrew calendar date arithmetic.
//!
//! Dates are converted through a running day number on the same scale as chrono's
//! `num_days_from_ce` (0001-01-01 is day 1), so the day of the week is simply the day
//! number modulo 7 with Sunday at zero. Year lengths follow the molad of Tishrei with the
//! four postponement rules.

use anyhow::{Result, bail};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

/// Day number of the day before 1 Tishrei of year 1.
const HEBREW_EPOCH: i64 = -1_373_428;

/// Average Hebrew year length in days, used only to estimate a year before correcting it.
const MEAN_YEAR_DAYS: f64 = 365.246_822_205_977_94;

/// Hebrew months numbered from Nisan, as the Torah counts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum HebrewMonth {
    Nisan = 1,
    Iyyar = 2,
    Sivan = 3,
    Tamuz = 4,
    Av = 5,
    Elul = 6,
    Tishrei = 7,
    Cheshvan = 8,
    Kislev = 9,
    Tevet = 10,
    Shvat = 11,
    /// Adar in a regular year, Adar I in a leap year
    Adar1 = 12,
    /// Only exists in leap years
    Adar2 = 13,
}

impl HebrewMonth {
    pub fn from_number(number: u8) -> Option<Self> {
        use HebrewMonth::*;
        Some(match number {
            1 => Nisan,
            2 => Iyyar,
            3 => Sivan,
            4 => Tamuz,
            5 => Av,
            6 => Elul,
            7 => Tishrei,
            8 => Cheshvan,
            9 => Kislev,
            10 => Tevet,
            11 => Shvat,
            12 => Adar1,
            13 => Adar2,
            _ => return None,
        })
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// The month that follows in the same year's numbering, wrapping Adar back to Nisan.
    fn following(self, year: i32) -> Self {
        let next = self.number() % months_in_year(year) + 1;
        Self::from_number(next).unwrap_or(HebrewMonth::Nisan)
    }

    /// English (transliterated) month name.
    pub fn name(self, year: i32) -> &'static str {
        use HebrewMonth::*;
        match self {
            Nisan => "Nisan",
            Iyyar => "Iyyar",
            Sivan => "Sivan",
            Tamuz => "Tamuz",
            Av => "Av",
            Elul => "Elul",
            Tishrei => "Tishrei",
            Cheshvan => "Cheshvan",
            Kislev => "Kislev",
            Tevet => "Tevet",
            Shvat => "Sh'vat",
            Adar1 if is_leap_year(year) => "Adar I",
            Adar1 => "Adar",
            Adar2 => "Adar II",
        }
    }

    /// Month name in Hebrew script.
    pub fn hebrew_name(self, year: i32) -> &'static str {
        use HebrewMonth::*;
        match self {
            Nisan => "ניסן",
            Iyyar => "אייר",
            Sivan => "סיון",
            Tamuz => "תמוז",
            Av => "אב",
            Elul => "אלול",
            Tishrei => "תשרי",
            Cheshvan => "חשון",
            Kislev => "כסלו",
            Tevet => "טבת",
            Shvat => "שבט",
            Adar1 if is_leap_year(year) => "אדר א׳",
            Adar1 => "אדר",
            Adar2 => "אדר ב׳",
        }
    }
}

/// Leap years carry the extra month Adar II; seven in every nineteen.
pub fn is_leap_year(year: i32) -> bool {
    (1 + 7 * i64::from(year)).rem_euclid(19) < 7
}

pub fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Days from the epoch to 1 Tishrei of `year`, after postponements.
fn elapsed_days(year: i32) -> i64 {
    let year = i64::from(year);
    let months = (235 * year - 234).div_euclid(19);
    let parts_elapsed = 204 + 793 * months.rem_euclid(1080);
    let hours_elapsed = 5 + 12 * months + 793 * months.div_euclid(1080) + parts_elapsed / 1080;
    let day = 1 + 29 * months + hours_elapsed / 24;
    let parts = 1080 * (hours_elapsed % 24) + parts_elapsed % 1080;

    let this_leap = is_leap_year(year as i32);
    let last_leap = is_leap_year(year as i32 - 1);

    let mut alt_day = day;
    if parts >= 19_440
        || (day % 7 == 2 && parts >= 9_924 && !this_leap)
        || (day % 7 == 1 && parts >= 16_789 && last_leap)
    {
        alt_day += 1;
    }
    // Lo ADU Rosh: never on Sunday, Wednesday or Friday
    if matches!(alt_day % 7, 0 | 3 | 5) {
        alt_day += 1;
    }
    alt_day
}

pub fn days_in_year(year: i32) -> i64 {
    elapsed_days(year + 1) - elapsed_days(year)
}

/// Cheshvan gets a 30th day in a "complete" year.
fn long_cheshvan(year: i32) -> bool {
    days_in_year(year) % 10 == 5
}

/// Kislev loses its 30th day in a "deficient" year.
fn short_kislev(year: i32) -> bool {
    days_in_year(year) % 10 == 3
}

pub fn days_in_month(month: HebrewMonth, year: i32) -> u8 {
    use HebrewMonth::*;
    match month {
        Iyyar | Tamuz | Elul | Tevet | Adar2 => 29,
        Adar1 if !is_leap_year(year) => 29,
        Cheshvan if !long_cheshvan(year) => 29,
        Kislev if short_kislev(year) => 29,
        _ => 30,
    }
}

/// Day number of a Hebrew date. Does not validate its input.
pub fn day_number(year: i32, month: HebrewMonth, day: u8) -> i64 {
    let mut days = i64::from(day);
    if month < HebrewMonth::Tishrei {
        // The year starts in Tishrei, so the months up to Nisan come from its tail end
        for m in HebrewMonth::Tishrei.number()..=months_in_year(year) {
            days += month_length(m, year);
        }
        for m in HebrewMonth::Nisan.number()..month.number() {
            days += month_length(m, year);
        }
    } else {
        for m in HebrewMonth::Tishrei.number()..month.number() {
            days += month_length(m, year);
        }
    }
    HEBREW_EPOCH + elapsed_days(year) + days - 1
}

fn month_length(number: u8, year: i32) -> i64 {
    HebrewMonth::from_number(number)
        .map(|m| i64::from(days_in_month(m, year)))
        .unwrap_or(0)
}

/// Day of the week of a day number.
pub fn weekday_of(day: i64) -> Weekday {
    match day.rem_euclid(7) {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

/// The Saturday falling on or after `day`.
pub fn saturday_on_or_after(day: i64) -> i64 {
    day + (6 - day.rem_euclid(7))
}

/// The Saturday falling on or before `day`.
pub fn saturday_on_or_before(day: i64) -> i64 {
    day - (day.rem_euclid(7) + 1) % 7
}

pub fn day_number_of(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

pub fn date_of_day_number(day: i64) -> Option<NaiveDate> {
    i32::try_from(day)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

/// A date in the Hebrew calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HebrewDate {
    year: i32,
    month: HebrewMonth,
    day: u8,
}

impl HebrewDate {
    /// Build a validated Hebrew date.
    pub fn new(year: i32, month: HebrewMonth, day: u8) -> Result<Self> {
        if year < 1 {
            bail!("Hebrew year {year} is before the epoch");
        }
        if month == HebrewMonth::Adar2 && !is_leap_year(year) {
            bail!("{year} is not a leap year and has no Adar II");
        }
        if day == 0 || day > days_in_month(month, year) {
            bail!(
                "{} {} has {} days, got day {day}",
                month.name(year),
                year,
                days_in_month(month, year)
            );
        }
        Ok(Self { year, month, day })
    }

    pub fn from_gregorian(date: NaiveDate) -> Self {
        Self::from_day_number(day_number_of(date))
    }

    pub fn from_day_number(day: i64) -> Self {
        let mut year = ((day - HEBREW_EPOCH) as f64 / MEAN_YEAR_DAYS) as i32;
        while day_number(year + 1, HebrewMonth::Tishrei, 1) <= day {
            year += 1;
        }
        let mut month = if day < day_number(year, HebrewMonth::Nisan, 1) {
            HebrewMonth::Tishrei
        } else {
            HebrewMonth::Nisan
        };
        while day > day_number(year, month, days_in_month(month, year)) {
            month = month.following(year);
        }
        let offset = day - day_number(year, month, 1) + 1;
        Self {
            year,
            month,
            day: offset as u8,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> HebrewMonth {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn day_number(&self) -> i64 {
        day_number(self.year, self.month, self.day)
    }

    pub fn to_gregorian(&self) -> Option<NaiveDate> {
        date_of_day_number(self.day_number())
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// The same month and day `years` later.
    ///
    /// Adar II maps to Adar in a regular year, and a day missing from the target month
    /// (30 Cheshvan in a short year) rolls over into the following month.
    pub fn add_years(&self, years: i32) -> Self {
        let year = self.year + years;
        let month = if self.month == HebrewMonth::Adar2 && !is_leap_year(year) {
            HebrewMonth::Adar1
        } else {
            self.month
        };
        let first = day_number(year, month, 1);
        Self::from_day_number(first + i64::from(self.day) - 1)
    }

    /// The date rendered in Hebrew, for example "י״ג טבת תשפ״ו".
    pub fn render_hebrew(&self) -> String {
        format!(
            "{} {} {}",
            gematriya(u32::from(self.day)),
            self.month.hebrew_name(self.year),
            gematriya(self.year.rem_euclid(1000) as u32)
        )
    }
}

impl fmt::Display for HebrewDate {
    /// "13 Tevet 5786"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month.name(self.year), self.year)
    }
}

/// Hebrew numeral with geresh/gershayim punctuation.
pub fn gematriya(mut number: u32) -> String {
    const HUNDREDS: [(u32, char); 4] = [(400, 'ת'), (300, 'ש'), (200, 'ר'), (100, 'ק')];
    const TENS: [char; 9] = ['י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ'];
    const ONES: [char; 9] = ['א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט'];

    let mut letters = Vec::new();
    for (value, letter) in HUNDREDS {
        while number >= value {
            letters.push(letter);
            number -= value;
        }
    }
    // 15 and 16 are written 9+6 and 9+7
    if number == 15 || number == 16 {
        letters.push('ט');
        letters.push(ONES[(number - 9) as usize - 1]);
        number = 0;
    }
    if number >= 10 {
        letters.push(TENS[(number / 10) as usize - 1]);
        number %= 10;
    }
    if number > 0 {
        letters.push(ONES[number as usize - 1]);
    }

    match letters.len() {
        0 => String::new(),
        1 => format!("{}׳", letters[0]),
        n => {
            let head: String = letters[..n - 1].iter().collect();
            format!("{head}״{}", letters[n - 1])
        }
    }
}
