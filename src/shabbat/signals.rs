//! Classifying one week's calendar events.

use chrono::DateTime;
use chrono_tz::Tz;

use super::week::ShabbatWeek;
use crate::calendar::CalendarEvent;
use crate::date_math::falls_on;

/// What the events of a Friday-Saturday window say about that Shabbat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShabbatSignals {
    pub friday_candle_time: Option<DateTime<Tz>>,
    pub havdalah_time: Option<DateTime<Tz>>,
    /// A candle lighting on Saturday night opens a festival
    pub ends_into_yom_tov: bool,
    pub parsha_english: Option<String>,
    pub parsha_hebrew: Option<String>,
    pub parsha_replaced_by_holiday: bool,
}

/// Walk the events once and pick out the Shabbat signals.
///
/// Missing events leave fields empty; this never fails.
pub fn extract_signals(events: &[CalendarEvent], week: &ShabbatWeek) -> ShabbatSignals {
    let mut friday_unlinked = None;
    let mut friday_any = None;
    let mut saturday_candle = None;
    let mut havdalah_time = None;
    let mut parsha_english = None;
    let mut parsha_hebrew = None;
    let mut holiday_on_saturday = false;

    for event in events {
        match event {
            CalendarEvent::CandleLighting(candle) => {
                if falls_on(&candle.time, week.friday) {
                    if candle.linked_holiday.is_none() && friday_unlinked.is_none() {
                        friday_unlinked = Some(candle.time);
                    }
                    friday_any.get_or_insert(candle.time);
                } else if falls_on(&candle.time, week.saturday) {
                    saturday_candle.get_or_insert(candle.time);
                }
            }
            CalendarEvent::Havdalah(havdalah) => {
                if falls_on(&havdalah.time, week.saturday) {
                    havdalah_time.get_or_insert(havdalah.time);
                }
            }
            CalendarEvent::Parsha(parsha) => {
                parsha_english = Some(parsha.render_english());
                parsha_hebrew = Some(parsha.render_hebrew());
            }
            CalendarEvent::Holiday(holiday) => {
                if holiday.date == week.saturday
                    && (holiday.has_category("major") || holiday.has_category("chol_hamoed"))
                {
                    holiday_on_saturday = true;
                }
            }
        }
    }

    let parsha_replaced_by_holiday =
        holiday_on_saturday && (parsha_english.is_none() || parsha_hebrew.is_none());

    ShabbatSignals {
        friday_candle_time: friday_unlinked.or(friday_any),
        havdalah_time,
        ends_into_yom_tov: saturday_candle.is_some(),
        parsha_english,
        parsha_hebrew,
        parsha_replaced_by_holiday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{
        CandleLightingEvent, HavdalahEvent, HebrewDate, HolidayEvent, HolidayKind, ParshaEvent,
    };
    use chrono::{NaiveDate, TimeZone};
    use chrono_tz::America::New_York;

    fn week() -> ShabbatWeek {
        ShabbatWeek::for_today(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
    }

    fn at(d: u32, h: u32, m: u32) -> DateTime<Tz> {
        New_York.with_ymd_and_hms(2026, 1, d, h, m, 0).unwrap()
    }

    fn candle(d: u32, h: u32, m: u32, linked: Option<&str>) -> CalendarEvent {
        let time = at(d, h, m);
        CalendarEvent::CandleLighting(CandleLightingEvent {
            date: time.date_naive(),
            hebrew_date: HebrewDate::from_gregorian(time.date_naive()),
            time,
            linked_holiday: linked.map(str::to_string),
        })
    }

    fn holiday(d: u32, description: &str, kind: HolidayKind) -> CalendarEvent {
        let date = NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
        CalendarEvent::Holiday(HolidayEvent {
            description: description.to_string(),
            hebrew_title: String::new(),
            date,
            hebrew_date: HebrewDate::from_gregorian(date),
            kind,
            yom_tov: false,
        })
    }

    fn parsha(name: &str, hebrew: &str) -> CalendarEvent {
        let date = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
        CalendarEvent::Parsha(ParshaEvent {
            date,
            hebrew_date: HebrewDate::from_gregorian(date),
            name: name.to_string(),
            hebrew_name: hebrew.to_string(),
        })
    }

    #[test]
    fn test_empty_events_degrade_to_none() {
        let signals = extract_signals(&[], &week());
        assert_eq!(signals, ShabbatSignals::default());
    }

    #[test]
    fn test_ordinary_week() {
        let havdalah_time = at(3, 17, 23);
        let events = vec![
            candle(2, 16, 22, None),
            parsha("Vayechi", "ויחי"),
            CalendarEvent::Havdalah(HavdalahEvent {
                date: havdalah_time.date_naive(),
                hebrew_date: HebrewDate::from_gregorian(havdalah_time.date_naive()),
                time: havdalah_time,
            }),
        ];
        let signals = extract_signals(&events, &week());
        assert_eq!(signals.friday_candle_time, Some(at(2, 16, 22)));
        assert_eq!(signals.havdalah_time, Some(havdalah_time));
        assert!(!signals.ends_into_yom_tov);
        assert_eq!(signals.parsha_english.as_deref(), Some("Parashat Vayechi"));
        assert_eq!(signals.parsha_hebrew.as_deref(), Some("פרשת ויחי"));
        assert!(!signals.parsha_replaced_by_holiday);
    }

    #[test]
    fn test_friday_prefers_unlinked_lighting() {
        let events = vec![candle(2, 16, 20, Some("Pesach I")), candle(2, 16, 22, None)];
        let signals = extract_signals(&events, &week());
        assert_eq!(signals.friday_candle_time, Some(at(2, 16, 22)));

        let linked_only = vec![candle(2, 16, 20, Some("Pesach I"))];
        let signals = extract_signals(&linked_only, &week());
        assert_eq!(signals.friday_candle_time, Some(at(2, 16, 20)));
    }

    #[test]
    fn test_saturday_lighting_means_yom_tov() {
        let events = vec![candle(2, 16, 22, None), candle(3, 17, 23, Some("Shavuot I"))];
        let signals = extract_signals(&events, &week());
        assert!(signals.ends_into_yom_tov);
        // Yom Tov continuation alone does not replace the portion
        assert!(!signals.parsha_replaced_by_holiday);
    }

    #[test]
    fn test_holiday_on_saturday_without_parsha() {
        let events = vec![holiday(3, "Pesach VII", HolidayKind::Major)];
        let signals = extract_signals(&events, &week());
        assert!(signals.parsha_replaced_by_holiday);
        assert!(!signals.ends_into_yom_tov);

        let chol = vec![holiday(3, "Sukkot IV (CH''M)", HolidayKind::CholHamoed)];
        assert!(extract_signals(&chol, &week()).parsha_replaced_by_holiday);
    }

    #[test]
    fn test_minor_holiday_or_parsha_keeps_reading() {
        let minor = vec![holiday(3, "Tu BiShvat", HolidayKind::Minor)];
        assert!(!extract_signals(&minor, &week()).parsha_replaced_by_holiday);

        let with_parsha = vec![
            holiday(3, "Chanukah: 8th Day", HolidayKind::ChanukahCandles),
            parsha("Miketz", "מקץ"),
        ];
        assert!(!extract_signals(&with_parsha, &week()).parsha_replaced_by_holiday);

        // A major holiday on Friday does not count
        let friday = vec![holiday(2, "Pesach I", HolidayKind::Major)];
        assert!(!extract_signals(&friday, &week()).parsha_replaced_by_holiday);
    }

    #[test]
    fn test_havdalah_only_on_saturday() {
        let thursday = at(1, 17, 20);
        let events = vec![CalendarEvent::Havdalah(HavdalahEvent {
            date: thursday.date_naive(),
            hebrew_date: HebrewDate::from_gregorian(thursday.date_naive()),
            time: thursday,
        })];
        assert_eq!(extract_signals(&events, &week()).havdalah_time, None);
    }
}
