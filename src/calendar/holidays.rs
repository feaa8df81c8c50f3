//! Holiday occurrences for one Hebrew year (diaspora).
//!
//! Every occurrence generated for year `y` falls between 1 Tishrei `y` and 29 Elul `y`, so
//! the erev of next year's Rosh Hashana and its Leil Selichot belong to `y`.

use chrono::Weekday;
use serde::Serialize;

use super::hdate::{
    HebrewMonth, day_number, days_in_month, gematriya, is_leap_year, months_in_year,
    saturday_on_or_after, saturday_on_or_before, weekday_of,
};
use super::sedra;

/// What sort of day a holiday occurrence is. Decides its categories and which query flags
/// suppress it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    Major,
    Erev,
    CholHamoed,
    MajorFast,
    ChanukahCandles,
    MinorFast,
    Minor,
    Modern,
    RoshChodesh,
    SpecialShabbat,
}

impl HolidayKind {
    pub fn categories(self) -> &'static [&'static str] {
        use HolidayKind::*;
        match self {
            Major | Erev | ChanukahCandles => &["holiday", "major"],
            CholHamoed => &["holiday", "major", "chol_hamoed"],
            MajorFast => &["holiday", "major", "fast"],
            MinorFast => &["holiday", "fast"],
            Minor => &["holiday", "minor"],
            Modern => &["holiday", "modern"],
            RoshChodesh => &["roshchodesh"],
            SpecialShabbat => &["shabbat"],
        }
    }
}

/// A holiday on a specific day, before it is turned into a public event.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Occurrence {
    pub day: i64,
    pub description: String,
    pub hebrew: String,
    pub kind: HolidayKind,
    pub yom_tov: bool,
}

const ROMAN: [&str; 8] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII"];

// Modern observances start in these years
const FIRST_YEAR_ZIKARON_ATZMAUT: i32 = 5708;
const FIRST_YEAR_SHOAH: i32 = 5711;
const FIRST_YEAR_YERUSHALAYIM: i32 = 5727;
const FIRST_YEAR_RABIN: i32 = 5758;
const FIRST_YEAR_TUESDAY_ZIKARON_SHIFT: i32 = 5764;
const FIRST_YEAR_SIGD: i32 = 5769;
const FIRST_YEAR_ALIYAH: i32 = 5777;

struct YearBuilder {
    year: i32,
    out: Vec<Occurrence>,
}

impl YearBuilder {
    fn day(&self, month: HebrewMonth, day: u8) -> i64 {
        day_number(self.year, month, day)
    }

    fn push(&mut self, day: i64, description: impl Into<String>, hebrew: impl Into<String>, kind: HolidayKind) {
        self.out.push(Occurrence {
            day,
            description: description.into(),
            hebrew: hebrew.into(),
            kind,
            yom_tov: false,
        });
    }

    fn push_yom_tov(&mut self, day: i64, description: impl Into<String>, hebrew: impl Into<String>, kind: HolidayKind) {
        self.push(day, description, hebrew, kind);
        if let Some(last) = self.out.last_mut() {
            last.yom_tov = true;
        }
    }

    /// Numbered festival days, e.g. "Pesach I" through "Pesach VIII".
    fn festival_day(&mut self, day: i64, name: &str, hebrew: &str, number: usize, kind: HolidayKind) {
        let roman = ROMAN[number - 1];
        let letter = gematriya(number as u32);
        match kind {
            HolidayKind::CholHamoed => self.push(
                day,
                format!("{name} {roman} (CH''M)"),
                format!("{hebrew} {letter} (חוה״מ)"),
                kind,
            ),
            _ => self.push_yom_tov(day, format!("{name} {roman}"), format!("{hebrew} {letter}"), kind),
        }
    }
}

/// Generate every holiday occurrence of Hebrew `year`.
pub(crate) fn holidays_for_year(year: i32) -> Vec<Occurrence> {
    use HebrewMonth::*;
    use HolidayKind::*;

    let mut b = YearBuilder {
        year,
        out: Vec::with_capacity(128),
    };
    let leap = is_leap_year(year);
    let adar = if leap { Adar2 } else { Adar1 };

    // Tishrei
    let rosh_hashana = b.day(Tishrei, 1);
    b.push_yom_tov(
        rosh_hashana,
        format!("Rosh Hashana {year}"),
        format!("ראש השנה {}", gematriya(year.rem_euclid(1000) as u32)),
        Major,
    );
    b.push_yom_tov(rosh_hashana + 1, "Rosh Hashana II", "ראש השנה ב׳", Major);
    let gedaliah = b.day(Tishrei, 3);
    let gedaliah = if weekday_of(gedaliah) == Weekday::Sat { gedaliah + 1 } else { gedaliah };
    b.push(gedaliah, "Tzom Gedaliah", "צום גדליה", MinorFast);
    b.push(saturday_on_or_after(b.day(Tishrei, 3)), "Shabbat Shuva", "שבת שובה", SpecialShabbat);
    b.push(b.day(Tishrei, 9), "Erev Yom Kippur", "ערב יום כפור", Erev);
    b.push_yom_tov(b.day(Tishrei, 10), "Yom Kippur", "יום כפור", MajorFast);
    b.push(b.day(Tishrei, 14), "Erev Sukkot", "ערב סוכות", Erev);
    for n in 1..=6 {
        let kind = if n <= 2 { Major } else { CholHamoed };
        b.festival_day(b.day(Tishrei, 14 + n as u8), "Sukkot", "סוכות", n, kind);
    }
    b.push(
        b.day(Tishrei, 21),
        "Sukkot VII (Hoshana Raba)",
        "סוכות ז׳ (הושענא רבה)",
        CholHamoed,
    );
    b.push_yom_tov(b.day(Tishrei, 22), "Shmini Atzeret", "שמיני עצרת", Major);
    b.push_yom_tov(b.day(Tishrei, 23), "Simchat Torah", "שמחת תורה", Major);

    // Cheshvan
    if year >= FIRST_YEAR_ALIYAH {
        b.push(b.day(Cheshvan, 7), "Yom HaAliyah School Observance", "שמירת יום העלייה בבתי הספר", Modern);
    }
    if year >= FIRST_YEAR_RABIN {
        let rabin = b.day(Cheshvan, 12);
        let rabin = match weekday_of(rabin) {
            Weekday::Fri => rabin - 1,
            Weekday::Sat => rabin - 2,
            _ => rabin,
        };
        b.push(rabin, "Yitzhak Rabin Memorial Day", "יום הזכרון ליצחק רבין", Modern);
    }
    if year >= FIRST_YEAR_SIGD {
        b.push(b.day(Cheshvan, 29), "Sigd", "סיגד", Modern);
    }

    // Kislev and Tevet: Chanukah candles are lit on the evening before each day
    let first_candle = b.day(Kislev, 24);
    for n in 1..=8u32 {
        let (description, hebrew) = if n == 1 {
            ("Chanukah: 1 Candle".to_string(), "חנוכה: א׳ נר".to_string())
        } else {
            (format!("Chanukah: {n} Candles"), format!("חנוכה: {} נרות", gematriya(n)))
        };
        b.push(first_candle + i64::from(n) - 1, description, hebrew, ChanukahCandles);
    }
    b.push(first_candle + 8, "Chanukah: 8th Day", "חנוכה: יום ח׳", ChanukahCandles);
    b.push(b.day(Tevet, 1), "Chag HaBanot", "חג הבנות", Minor);
    b.push(b.day(Tevet, 10), "Asara B'Tevet", "עשרה בטבת", MinorFast);

    // Sh'vat and Adar
    b.push(b.day(Shvat, 15), "Tu BiShvat", "ט״ו בשבט", Minor);
    if let Some((shirah, _)) = sedra::schedule(year)
        .into_iter()
        .find(|(_, portion)| portion.first_index() == sedra::BESHALACH)
    {
        b.push(shirah, "Shabbat Shirah", "שבת שירה", SpecialShabbat);
    }
    if leap {
        b.push(b.day(Adar1, 14), "Purim Katan", "פורים קטן", Minor);
        b.push(b.day(Adar1, 15), "Shushan Purim Katan", "שושן פורים קטן", Minor);
    }
    b.push(saturday_on_or_before(b.day(adar, 1)), "Shabbat Shekalim", "שבת שקלים", SpecialShabbat);
    b.push(saturday_on_or_before(b.day(adar, 13)), "Shabbat Zachor", "שבת זכור", SpecialShabbat);
    let esther = b.day(adar, 13);
    let esther = if weekday_of(esther) == Weekday::Sat { esther - 2 } else { esther };
    b.push(esther, "Ta'anit Esther", "תענית אסתר", MinorFast);
    b.push(b.day(adar, 13), "Erev Purim", "ערב פורים", Minor);
    b.push(b.day(adar, 14), "Purim", "פורים", Minor);
    b.push(b.day(adar, 15), "Shushan Purim", "שושן פורים", Minor);

    // Nisan
    let hachodesh = saturday_on_or_before(b.day(Nisan, 1));
    b.push(hachodesh - 7, "Shabbat Parah", "שבת פרה", SpecialShabbat);
    b.push(hachodesh, "Shabbat HaChodesh", "שבת החדש", SpecialShabbat);
    if year >= FIRST_YEAR_ALIYAH {
        b.push(b.day(Nisan, 10), "Yom HaAliyah", "יום העלייה", Modern);
    }
    b.push(saturday_on_or_before(b.day(Nisan, 14)), "Shabbat HaGadol", "שבת הגדול", SpecialShabbat);
    let bechorot = b.day(Nisan, 14);
    let bechorot = if weekday_of(bechorot) == Weekday::Sat { bechorot - 2 } else { bechorot };
    b.push(bechorot, "Ta'anit Bechorot", "תענית בכורות", MinorFast);
    b.push(b.day(Nisan, 14), "Erev Pesach", "ערב פסח", Erev);
    for n in 1..=8 {
        let kind = if matches!(n, 1 | 2 | 7 | 8) { Major } else { CholHamoed };
        b.festival_day(b.day(Nisan, 14 + n as u8), "Pesach", "פסח", n, kind);
    }

    let pesach_weekday = weekday_of(b.day(Nisan, 15));
    if year >= FIRST_YEAR_SHOAH {
        let shoah = b.day(Nisan, 27);
        let shoah = match weekday_of(shoah) {
            Weekday::Fri => shoah - 1,
            Weekday::Sun => shoah + 1,
            _ => shoah,
        };
        b.push(shoah, "Yom HaShoah", "יום השואה", Modern);
    }

    // Iyyar
    if year >= FIRST_YEAR_ZIKARON_ATZMAUT {
        // Keeps both days clear of Shabbat
        let zikaron_day = match pesach_weekday {
            Weekday::Sun => 2,
            Weekday::Sat => 3,
            Weekday::Tue if year >= FIRST_YEAR_TUESDAY_ZIKARON_SHIFT => 5,
            _ => 4,
        };
        let zikaron = b.day(Iyyar, zikaron_day);
        b.push(zikaron, "Yom HaZikaron", "יום הזכרון", Modern);
        b.push(zikaron + 1, "Yom HaAtzma'ut", "יום העצמאות", Modern);
    }
    b.push(b.day(Iyyar, 14), "Pesach Sheni", "פסח שני", Minor);
    b.push(b.day(Iyyar, 18), "Lag BaOmer", "ל״ג בעומר", Minor);
    if year >= FIRST_YEAR_YERUSHALAYIM {
        b.push(b.day(Iyyar, 28), "Yom Yerushalayim", "יום ירושלים", Modern);
    }

    // Sivan
    b.push(b.day(Sivan, 5), "Erev Shavuot", "ערב שבועות", Erev);
    b.festival_day(b.day(Sivan, 6), "Shavuot", "שבועות", 1, Major);
    b.festival_day(b.day(Sivan, 7), "Shavuot", "שבועות", 2, Major);

    // Tamuz and Av: fasts that land on Shabbat are pushed to Sunday
    let tammuz = b.day(Tamuz, 17);
    let tammuz = if weekday_of(tammuz) == Weekday::Sat { tammuz + 1 } else { tammuz };
    b.push(tammuz, "Tzom Tammuz", "צום תמוז", MinorFast);

    let av9 = b.day(Av, 9);
    b.push(saturday_on_or_before(av9), "Shabbat Chazon", "שבת חזון", SpecialShabbat);
    if weekday_of(av9) == Weekday::Sat {
        b.push(av9, "Erev Tish'a B'Av", "ערב תשעה באב", Erev);
        b.push(av9 + 1, "Tish'a B'Av (observed)", "תשעה באב נדחה", MajorFast);
    } else {
        b.push(av9 - 1, "Erev Tish'a B'Av", "ערב תשעה באב", Erev);
        b.push(av9, "Tish'a B'Av", "תשעה באב", MajorFast);
    }
    b.push(saturday_on_or_after(b.day(Av, 10)), "Shabbat Nachamu", "שבת נחמו", SpecialShabbat);
    b.push(b.day(Av, 15), "Tu B'Av", "ט״ו באב", Minor);

    // Elul
    b.push(b.day(Elul, 1), "Rosh Hashana LaBehemot", "ראש השנה לבהמות", Minor);
    let next_rosh_hashana = day_number(year + 1, Tishrei, 1);
    b.push(
        saturday_on_or_before(next_rosh_hashana - 4),
        "Leil Selichot",
        "ליל סליחות",
        Minor,
    );
    b.push(next_rosh_hashana - 1, "Erev Rosh Hashana", "ערב ראש השנה", Erev);

    // Rosh Chodesh: two days when the previous month has thirty
    for number in 1..=months_in_year(year) {
        let Some(month) = HebrewMonth::from_number(number) else {
            continue;
        };
        if month == Tishrei {
            continue;
        }
        let first = b.day(month, 1);
        let previous_length = if month == Nisan {
            // Adar (or Adar II) directly precedes Nisan
            days_in_month(adar, year)
        } else {
            days_in_month(HebrewMonth::from_number(number - 1).unwrap_or(month), year)
        };
        let description = format!("Rosh Chodesh {}", month.name(year));
        let hebrew = format!("ראש חודש {}", month.hebrew_name(year));
        if previous_length == 30 {
            b.push(first - 1, description.clone(), hebrew.clone(), RoshChodesh);
        }
        b.push(first, description, hebrew, RoshChodesh);
    }

    b.out.sort_by_key(|o| o.day);
    b.out
}
