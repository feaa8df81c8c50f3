//! Weekly Torah portion schedule (diaspora).
//!
//! The 54 portions are read over one Hebrew year, starting with Bereshit on the Shabbat after
//! Simchat Torah. Shabbatot that are festival or chol hamoed days get no portion, so some
//! neighbouring portions are read together. The year is laid out in three stretches pinned
//! by fixed points: Tzav (regular years) or the last portion that fits (leap years) before
//! Pesach, Devarim on Shabbat Chazon, and Nitzavim before the next Rosh Hashana.

use chrono::Weekday;

use super::hdate::{HebrewMonth, day_number, is_leap_year, saturday_on_or_after, saturday_on_or_before, weekday_of};

const PORTIONS: [(&str, &str); 54] = [
    ("Bereshit", "בראשית"),
    ("Noach", "נח"),
    ("Lech-Lecha", "לך לך"),
    ("Vayera", "וירא"),
    ("Chayei Sara", "חיי שרה"),
    ("Toldot", "תולדות"),
    ("Vayetzei", "ויצא"),
    ("Vayishlach", "וישלח"),
    ("Vayeshev", "וישב"),
    ("Miketz", "מקץ"),
    ("Vayigash", "ויגש"),
    ("Vayechi", "ויחי"),
    ("Shemot", "שמות"),
    ("Vaera", "וארא"),
    ("Bo", "בא"),
    ("Beshalach", "בשלח"),
    ("Yitro", "יתרו"),
    ("Mishpatim", "משפטים"),
    ("Terumah", "תרומה"),
    ("Tetzaveh", "תצוה"),
    ("Ki Tisa", "כי תשא"),
    ("Vayakhel", "ויקהל"),
    ("Pekudei", "פקודי"),
    ("Vayikra", "ויקרא"),
    ("Tzav", "צו"),
    ("Shmini", "שמיני"),
    ("Tazria", "תזריע"),
    ("Metzora", "מצורע"),
    ("Achrei Mot", "אחרי מות"),
    ("Kedoshim", "קדושים"),
    ("Emor", "אמור"),
    ("Behar", "בהר"),
    ("Bechukotai", "בחקתי"),
    ("Bamidbar", "במדבר"),
    ("Nasso", "נשא"),
    ("Beha'alotcha", "בהעלתך"),
    ("Sh'lach", "שלח לך"),
    ("Korach", "קרח"),
    ("Chukat", "חקת"),
    ("Balak", "בלק"),
    ("Pinchas", "פינחס"),
    ("Matot", "מטות"),
    ("Masei", "מסעי"),
    ("Devarim", "דברים"),
    ("Vaetchanan", "ואתחנן"),
    ("Eikev", "עקב"),
    ("Re'eh", "ראה"),
    ("Shoftim", "שופטים"),
    ("Ki Teitzei", "כי תצא"),
    ("Ki Tavo", "כי תבוא"),
    ("Nitzavim", "נצבים"),
    ("Vayeilech", "וילך"),
    ("Ha'azinu", "האזינו"),
    ("Vezot Haberakhah", "וזאת הברכה"),
];

const BERESHIT: usize = 0;
pub(crate) const BESHALACH: usize = 15;
const VAYAKHEL: usize = 21;
const TZAV: usize = 24;
const CHUKAT: usize = 38;
const DEVARIM: usize = 43;
const VAETCHANAN: usize = 44;
const NITZAVIM: usize = 50;
const VAYEILECH: usize = 51;
const HAAZINU: usize = 52;

/// Pairs that may be joined between Pesach and Tish'a B'Av, most common first:
/// Matot-Masei, Behar-Bechukotai, Achrei Mot-Kedoshim, Tazria-Metzora.
const SUMMER_JOINS: [usize; 4] = [41, 31, 28, 26];

/// One Shabbat's reading: a single portion or two read together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portion {
    first: usize,
    doubled: bool,
}

impl Portion {
    fn single(index: usize) -> Self {
        Self {
            first: index,
            doubled: false,
        }
    }

    fn doubled(index: usize) -> Self {
        Self {
            first: index,
            doubled: true,
        }
    }

    pub fn is_doubled(&self) -> bool {
        self.doubled
    }

    pub(crate) fn first_index(&self) -> usize {
        self.first
    }

    fn names(&self, pick: fn(&(&'static str, &'static str)) -> &'static str) -> String {
        let first = pick(&PORTIONS[self.first]);
        match PORTIONS.get(self.first + 1) {
            Some(second) if self.doubled => format!("{first}-{}", pick(second)),
            _ => first.to_string(),
        }
    }

    /// "Vayakhel-Pekudei"
    pub fn english(&self) -> String {
        self.names(|p| p.0)
    }

    /// "ויקהל-פקודי"
    pub fn hebrew(&self) -> String {
        self.names(|p| p.1)
    }
}

/// Lay out `first..=last` over `saturdays`, joining pairs from `candidates` as needed.
fn assign(
    first: usize,
    last: usize,
    saturdays: &[i64],
    candidates: &[usize],
    out: &mut Vec<(i64, Portion)>,
) {
    let portions = last + 1 - first;
    let joins = portions.saturating_sub(saturdays.len());
    let joined: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&p| first <= p && p < last)
        .take(joins)
        .collect();

    let mut next = first;
    for &saturday in saturdays {
        if next > last {
            break;
        }
        if joined.contains(&next) {
            out.push((saturday, Portion::doubled(next)));
            next += 2;
        } else {
            out.push((saturday, Portion::single(next)));
            next += 1;
        }
    }
}

fn saturdays_between(from: i64, until_exclusive: i64) -> Vec<i64> {
    (saturday_on_or_after(from)..until_exclusive)
        .step_by(7)
        .collect()
}

/// Every Shabbat reading from Rosh Hashana of `year` up to the next Rosh Hashana, keyed by
/// day number.
pub fn schedule(year: i32) -> Vec<(i64, Portion)> {
    let mut out = Vec::with_capacity(52);
    let rosh_hashana = day_number(year, HebrewMonth::Tishrei, 1);
    let rh_early_week = matches!(weekday_of(rosh_hashana), Weekday::Mon | Weekday::Tue);

    // Vayeilech gets its own Shabbat when Rosh Hashana is Monday or Tuesday
    let mut haazinu = saturday_on_or_after(rosh_hashana + 1);
    if rh_early_week {
        out.push((saturday_on_or_after(rosh_hashana), Portion::single(VAYEILECH)));
        haazinu += 7;
    }
    if haazinu == day_number(year, HebrewMonth::Tishrei, 10) {
        haazinu += 7;
    }
    out.push((haazinu, Portion::single(HAAZINU)));

    // Bereshit through the last portion before Pesach
    let pesach = day_number(year, HebrewMonth::Nisan, 15);
    let winter = saturdays_between(day_number(year, HebrewMonth::Tishrei, 24), pesach);
    let winter_last = if is_leap_year(year) {
        winter.len().saturating_sub(1)
    } else {
        TZAV
    };
    assign(BERESHIT, winter_last, &winter, &[VAYAKHEL], &mut out);

    // After Pesach through Devarim on Shabbat Chazon, skipping Shavuot II
    let chazon = saturday_on_or_before(day_number(year, HebrewMonth::Av, 9));
    let shavuot_second = day_number(year, HebrewMonth::Sivan, 7);
    let summer: Vec<i64> = saturdays_between(day_number(year, HebrewMonth::Nisan, 23), chazon + 1)
        .into_iter()
        .filter(|&s| s != shavuot_second)
        .collect();
    let mut candidates = Vec::with_capacity(5);
    if weekday_of(shavuot_second) == Weekday::Sat {
        candidates.push(CHUKAT);
    }
    candidates.extend(SUMMER_JOINS);
    assign(winter_last + 1, DEVARIM, &summer, &candidates, &mut out);

    // Va'etchanan through Nitzavim, with Vayeilech attached unless it has its own Shabbat
    let next_rosh_hashana = day_number(year + 1, HebrewMonth::Tishrei, 1);
    let autumn = saturdays_between(day_number(year, HebrewMonth::Av, 10), next_rosh_hashana);
    let start = out.len();
    assign(VAETCHANAN, NITZAVIM, &autumn, &[], &mut out);
    let next_rh_early_week = matches!(
        weekday_of(next_rosh_hashana),
        Weekday::Mon | Weekday::Tue
    );
    if !next_rh_early_week
        && out.len() > start
        && let Some(last) = out.last_mut()
        && last.1.first == NITZAVIM
    {
        last.1 = Portion::doubled(NITZAVIM);
    }

    out
}

/// The portion read on the Shabbat with day number `saturday`, if any.
pub fn portion_on(year: i32, saturday: i64) -> Option<Portion> {
    schedule(year)
        .into_iter()
        .find(|(day, _)| *day == saturday)
        .map(|(_, portion)| portion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::hdate::{HebrewDate, date_of_day_number, day_number_of};
    use chrono::NaiveDate;

    fn portion_for(y: i32, m: u32, d: u32) -> Option<String> {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let year = HebrewDate::from_gregorian(date).year();
        portion_on(year, day_number_of(date)).map(|p| p.english())
    }

    #[test]
    fn test_known_readings_5786() {
        assert_eq!(portion_for(2025, 10, 18).as_deref(), Some("Bereshit"));
        assert_eq!(portion_for(2026, 1, 3).as_deref(), Some("Vayechi"));
        assert_eq!(portion_for(2026, 3, 14).as_deref(), Some("Vayakhel-Pekudei"));
        assert_eq!(portion_for(2026, 6, 27).as_deref(), Some("Chukat-Balak"));
        assert_eq!(portion_for(2026, 7, 11).as_deref(), Some("Matot-Masei"));
        // Shabbat Chazon, then the Shabbat after Tish'a B'Av
        assert_eq!(portion_for(2026, 7, 18).as_deref(), Some("Devarim"));
        assert_eq!(portion_for(2026, 7, 25).as_deref(), Some("Vaetchanan"));
        // 5787 begins on Shabbat, so Vayeilech is joined to Nitzavim
        assert_eq!(portion_for(2026, 9, 5).as_deref(), Some("Nitzavim-Vayeilech"));
        assert_eq!(portion_for(2026, 9, 19).as_deref(), Some("Ha'azinu"));

        let joined = portion_on(5786, day_number_of(NaiveDate::from_ymd_opt(2026, 6, 27).unwrap()));
        assert!(joined.is_some_and(|p| p.is_doubled()));
        let single = portion_on(5786, day_number_of(NaiveDate::from_ymd_opt(2026, 1, 3).unwrap()));
        assert!(single.is_some_and(|p| !p.is_doubled()));
    }

    #[test]
    fn test_festival_shabbatot_have_no_portion() {
        // Shavuot II 5786 and Sukkot I 5787
        assert_eq!(portion_for(2026, 5, 23), None);
        assert_eq!(portion_for(2026, 9, 26), None);
        // Rosh Hashana 5787 falls on Shabbat
        assert_eq!(portion_for(2026, 9, 12), None);
    }

    #[test]
    fn test_vayeilech_alone_when_rosh_hashana_early_in_week() {
        // 5786 began on a Tuesday
        assert_eq!(portion_for(2025, 9, 20).as_deref(), Some("Nitzavim"));
        let first = schedule(5786).first().copied().unwrap();
        assert_eq!(date_of_day_number(first.0), NaiveDate::from_ymd_opt(2025, 9, 27));
        assert_eq!(first.1.english(), "Vayeilech");
        assert_eq!(portion_for(2025, 10, 4).as_deref(), Some("Ha'azinu"));
    }

    #[test]
    fn test_tzav_before_pesach_5785() {
        assert_eq!(portion_for(2025, 4, 12).as_deref(), Some("Tzav"));
        // 5785 is a complete year: Vayakhel and Pekudei are read separately
        assert_eq!(portion_for(2025, 3, 22).as_deref(), Some("Vayakhel"));
        assert_eq!(portion_for(2025, 3, 29).as_deref(), Some("Pekudei"));
    }

    #[test]
    fn test_every_portion_read_once_per_year() {
        for year in 5700..5900 {
            let mut seen = [0u8; 54];
            let mut days: Vec<i64> = Vec::new();
            // Vayeilech either opens this year or closes it joined to Nitzavim
            for (day, portion) in schedule(year) {
                assert_eq!(weekday_of(day), Weekday::Sat, "{year}");
                days.push(day);
                seen[portion.first] += 1;
                if portion.doubled {
                    seen[portion.first + 1] += 1;
                }
            }
            assert!(days.windows(2).all(|w| w[0] < w[1]), "{year} out of order");
            for (index, count) in seen.iter().enumerate().take(VAYEILECH) {
                assert_eq!(*count, 1, "{year}: {}", PORTIONS[index].0);
            }
        }
    }

    #[test]
    fn test_chukat_balak_joined_exactly_when_shavuot_ii_is_shabbat() {
        for year in 5700..5900 {
            let shavuot_second = day_number(year, HebrewMonth::Sivan, 7);
            let joined = schedule(year)
                .iter()
                .any(|(_, p)| p.first == CHUKAT && p.doubled);
            assert_eq!(joined, weekday_of(shavuot_second) == Weekday::Sat, "{year}");
        }
    }

    #[test]
    fn test_hebrew_names() {
        assert_eq!(Portion::single(11).hebrew(), "ויחי");
        assert_eq!(Portion::doubled(VAYAKHEL).hebrew(), "ויקהל-פקודי");
        assert_eq!(Portion::doubled(28).english(), "Achrei Mot-Kedoshim");
    }
}
