//! Gregorian to Hijri and Javanese calendar conversion.
//!
//! Hijri dates come from precomputed month tables in two variants: the Saudi
//! Umm al-Qura calendar and the Indonesian government calendar following the
//! MABIMS criteria. Javanese dates follow the eight-year Windu cycle with the
//! five-day Pasaran market week and its Neptu score.
//!
//! ```
//! use hijri_jawa::{CalendarVariant, GregorianDate, gregorian_to_hijri, resolve_jawa};
//!
//! let ramadhan = gregorian_to_hijri(2026, 2, 19, CalendarVariant::Mabims).unwrap();
//! assert_eq!((ramadhan.year, ramadhan.month, ramadhan.day), (1447, 9, 1));
//!
//! let jawa = resolve_jawa(GregorianDate::new(2026, 1, 14));
//! assert_eq!(jawa.pasaran.name(), "Legi");
//! assert_eq!(jawa.neptu.total, 12);
//! ```

mod calendars;
mod consts;
mod converter;
mod events;
mod hijri;
mod jawa;
pub mod julian;
mod locale;
mod prelude;
mod range;
mod types;

pub use calendars::AllCalendars;
pub use consts::*;
pub use converter::{
    CalendarComparison, Clock, ConverterOptions, FixedClock, HijriConversion, HijriConverter, SystemClock,
};
pub use events::{IslamicEvent, events_for, islamic_events};
pub use hijri::{
    CalendarVariant, HijriDate, HijriError, MonthTable, gregorian_to_hijri, hijri_to_gregorian, resolve_hijri,
};
pub use jawa::{JawaAnchor, JawaDate, Neptu, NeptuMeaning, Pasaran, WinduYear, pasaran_of, resolve_jawa};
pub use locale::{Language, hijri_month_name, jawa_month_name, pasaran_name, weekday_name};
pub use range::{GregorianRange, RangeError};
pub use types::{GregorianDate, Weekday, days_in_month, is_leap_year};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Unknown calendar variant: {_0}")]
    UnknownVariant(String),
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            ParseError::InvalidFormat("2026/01".to_owned()).to_string(),
            "Invalid date format: 2026/01"
        );
        assert_eq!(ParseError::InvalidMonth(13).to_string(), "Invalid month: 13 (must be 1-12)");
        assert_eq!(
            ParseError::InvalidDay {
                year:  2023,
                month: 2,
                day:   29,
            }
            .to_string(),
            "Invalid day 29 for month 2023-02"
        );
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty date string");
        assert_eq!(
            ParseError::UnknownVariant("hisab".to_owned()).to_string(),
            "Unknown calendar variant: hisab"
        );
    }

    #[test]
    fn test_known_dates_through_public_api() {
        let start = gregorian_to_hijri(2026, 2, 19, CalendarVariant::Mabims).unwrap();
        assert_eq!((start.day, start.month), (1, 9));
        assert_eq!(hijri_month_name(start.month, Language::En), Some("Ramadhan"));

        let eid = gregorian_to_hijri(2026, 3, 20, CalendarVariant::Mabims).unwrap();
        assert_eq!((eid.day, eid.month), (1, 10));
        assert_eq!(hijri_month_name(eid.month, Language::En), Some("Syawal"));

        let new_year = resolve_jawa(GregorianDate::new(2024, 7, 7));
        assert_eq!((new_year.year, new_year.month, new_year.day), (1958, 1, 1));
    }

    #[test]
    fn test_calendars_are_independent_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let date = GregorianDate::new(2026, 1, 14).add_days(i);
                    (
                        resolve_hijri(date.jdn(), CalendarVariant::UmmAlQura),
                        resolve_jawa(date),
                    )
                })
            })
            .collect();

        for (i, handle) in (0..4).zip(handles) {
            let date = GregorianDate::new(2026, 1, 14).add_days(i);
            let (hijri, jawa) = handle.join().unwrap();
            assert_eq!(hijri, resolve_hijri(date.jdn(), CalendarVariant::UmmAlQura));
            assert_eq!(jawa, resolve_jawa(date));
        }
    }
}
