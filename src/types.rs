use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY,
};
use crate::julian::{gregorian_to_jdn, jdn_to_gregorian, weekday_of};
use crate::{ParseError, prelude::*};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A proleptic Gregorian calendar date.
///
/// Components are stored as given. [`GregorianDate::new`] does not check the
/// day against the month: an impossible date such as `2023-02-30` still has
/// a Julian Day Number and simply lands on a later day. Use
/// [`GregorianDate::try_new`] or [`FromStr`] when the input must be a real
/// calendar date.
///
/// Equality, ordering and hashing follow the day denoted, so
/// `2024-01-32` equals `2024-02-01`.
#[derive(Debug, Clone, Copy, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Creates a date without validating it
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a date, rejecting months outside 1-12 and days the month does
    /// not have
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay`.
    pub fn try_new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        if month == 0 || month > MAX_MONTH {
            return Err(ParseError::InvalidMonth(month));
        }
        match days_in_month(year, month) {
            Some(days) if (MIN_DAY..=days).contains(&day) => Ok(Self { year, month, day }),
            _ => Err(ParseError::InvalidDay { year, month, day }),
        }
    }

    /// Creates the date a Julian Day Number falls on
    pub fn from_jdn(jdn: i64) -> Self {
        jdn_to_gregorian(jdn)
    }

    /// Returns the year component
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month component
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day component
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns the Julian Day Number of this date
    pub fn jdn(self) -> i64 {
        gregorian_to_jdn(self.year, i32::from(self.month), i32::from(self.day))
    }

    /// Returns the day of the week
    pub fn weekday(self) -> Weekday {
        weekday_of(self.jdn())
    }

    /// Returns true if the components name a real calendar day
    pub const fn is_valid(self) -> bool {
        match days_in_month(self.year, self.month) {
            Some(days) => self.day >= MIN_DAY && self.day <= days,
            None => false,
        }
    }

    /// Returns the calendar day this date actually falls on, rolling
    /// overflowing components forward
    pub fn normalized(self) -> Self {
        Self::from_jdn(self.jdn())
    }

    /// Returns the date `days` days later (or earlier, if negative)
    pub fn add_days(self, days: i64) -> Self {
        Self::from_jdn(self.jdn() + days)
    }

    /// Returns the following day
    pub fn succ(self) -> Self {
        self.add_days(1)
    }

    /// Returns the preceding day
    pub fn pred(self) -> Self {
        self.add_days(-1)
    }

    /// Signed number of days from `earlier` to `self`
    pub fn days_since(self, earlier: Self) -> i64 {
        self.jdn() - earlier.jdn()
    }

    fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses an ISO 8601 calendar date (`YYYY-MM-DD`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [year, month, day] => {
                let year = Self::parse_component::<i32>(year)?;
                let month = Self::parse_component::<u8>(month)?;
                let day = Self::parse_component::<u8>(day)?;
                Self::try_new(year, month, day)
            },
            _ => Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s) in {trimmed}",
                parts.len()
            ))),
        }
    }
}

impl From<NaiveDate> for GregorianDate {
    #[allow(clippy::cast_possible_truncation)]
    fn from(date: NaiveDate) -> Self {
        // chrono guarantees month 1..=12 and day 1..=31
        Self::new(date.year(), date.month() as u8, date.day() as u8)
    }
}

impl PartialEq for GregorianDate {
    fn eq(&self, other: &Self) -> bool {
        self.jdn() == other.jdn()
    }
}

impl Eq for GregorianDate {}

impl PartialOrd for GregorianDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GregorianDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.jdn().cmp(&other.jdn())
    }
}

impl Hash for GregorianDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.jdn().hash(state);
    }
}

impl Serialize for GregorianDate {
    /// Serializes the calendar day denoted, so the output always parses back
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized().to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Day of the week, numbered from Sunday as in the Javanese and Hijri
/// reckonings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays, Sunday first
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Weekday for an index counted from Sunday; wraps modulo 7
    pub const fn from_index(index: i64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let i = index.rem_euclid(7) as usize;
        Self::ALL[i]
    }

    /// Index counted from Sunday = 0
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// ISO 8601 weekday number, Monday = 1 through Sunday = 7
    pub const fn iso_number(self) -> u8 {
        match self {
            Self::Sunday => 7,
            other => other as u8,
        }
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in a Gregorian month, or `None` for a month outside 1-12
pub const fn days_in_month(year: i32, month: u8) -> Option<u8> {
    if month == 0 || month > MAX_MONTH {
        return None;
    }

    if month == FEBRUARY && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(DAYS_IN_MONTH[month as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_valid() {
        assert!(GregorianDate::try_new(2024, 1, 31).is_ok());
        assert!(GregorianDate::try_new(2024, 2, 29).is_ok());
        assert!(GregorianDate::try_new(2023, 2, 28).is_ok());
        assert!(GregorianDate::try_new(2024, 4, 30).is_ok());
    }

    #[test]
    fn test_try_new_invalid() {
        assert!(matches!(
            GregorianDate::try_new(2024, 13, 1),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            GregorianDate::try_new(2024, 0, 1),
            Err(ParseError::InvalidMonth(0))
        ));
        assert!(matches!(
            GregorianDate::try_new(2023, 2, 29),
            Err(ParseError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        ));
        assert!(matches!(
            GregorianDate::try_new(2024, 4, 0),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_new_keeps_components_and_normalizes_on_demand() {
        let date = GregorianDate::new(2023, 2, 30);
        assert!(!date.is_valid());
        assert_eq!((date.year(), date.month(), date.day()), (2023, 2, 30));
        assert_eq!(date.normalized(), GregorianDate::new(2023, 3, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(GregorianDate::new(2026, 2, 19).to_string(), "2026-02-19");
        assert_eq!(GregorianDate::new(987, 12, 1).to_string(), "0987-12-01");
    }

    #[test]
    fn test_parse() {
        let date = "2026-02-19".parse::<GregorianDate>().unwrap();
        assert_eq!(date, GregorianDate::new(2026, 2, 19));

        let date = " 2024 - 07 - 07 ".parse::<GregorianDate>().unwrap();
        assert_eq!(date, GregorianDate::new(2024, 7, 7));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<GregorianDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!(
            "2026-02".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2026-XX-01".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2026-02-30".parse::<GregorianDate>(),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(matches!(
            "2026-13-01".parse::<GregorianDate>(),
            Err(ParseError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_day_arithmetic() {
        let date = GregorianDate::new(2024, 2, 28);
        assert_eq!(date.succ(), GregorianDate::new(2024, 2, 29));
        assert_eq!(date.succ().succ(), GregorianDate::new(2024, 3, 1));
        assert_eq!(GregorianDate::new(2025, 1, 1).pred(), GregorianDate::new(2024, 12, 31));
        assert_eq!(date.add_days(366), GregorianDate::new(2025, 2, 28));
        assert_eq!(
            GregorianDate::new(2026, 1, 14).days_since(GregorianDate::new(2024, 7, 7)),
            556
        );
    }

    #[test]
    fn test_ordering() {
        let d1 = GregorianDate::new(2025, 12, 31);
        let d2 = GregorianDate::new(2026, 1, 1);
        let d3 = GregorianDate::new(2026, 1, 2);
        assert!(d1 < d2);
        assert!(d2 < d3);
    }

    #[test]
    fn test_from_naive_date() {
        let naive = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        assert_eq!(GregorianDate::from(naive), GregorianDate::new(2026, 3, 20));
    }

    #[test]
    fn test_serde() {
        let date = GregorianDate::new(2024, 7, 7);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2024-07-07""#);

        let parsed: GregorianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let result: Result<GregorianDate, _> = serde_json::from_str(r#""2024-02-30""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_weekday_numbering() {
        assert_eq!(Weekday::from_index(0), Weekday::Sunday);
        assert_eq!(Weekday::from_index(6), Weekday::Saturday);
        assert_eq!(Weekday::from_index(7), Weekday::Sunday);
        assert_eq!(Weekday::from_index(-1), Weekday::Saturday);
        assert_eq!(Weekday::Wednesday.index(), 3);
        assert_eq!(Weekday::Monday.iso_number(), 1);
        assert_eq!(Weekday::Sunday.iso_number(), 7);
        assert_eq!(Weekday::Friday.to_string(), "Friday");
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        -4,
                is_leap:     true,
                description: "proleptic year before 1 BC",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                Some(expected[month as usize]),
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2000, 2), Some(29), "Century year divisible by 400");
        assert_eq!(days_in_month(1900, 2), Some(28), "Century year not divisible by 400");
    }

    #[test]
    fn test_days_in_month_rejects_impossible_months() {
        assert_eq!(days_in_month(2024, 0), None);
        assert_eq!(days_in_month(2024, 13), None);
        assert_eq!(days_in_month(2024, u8::MAX), None);
        assert!(!GregorianDate::new(2024, 13, 1).is_valid());
    }

    #[test]
    fn test_equality_follows_the_day_denoted() {
        use std::collections::HashSet;

        let overflowing = GregorianDate::new(2024, 1, 32);
        let real = GregorianDate::new(2024, 2, 1);
        assert_eq!(overflowing, real);
        assert!(GregorianDate::new(2023, 2, 30) > GregorianDate::new(2023, 3, 1));

        let days: HashSet<_> = [overflowing, real, GregorianDate::new(2024, 2, 2)].into_iter().collect();
        assert_eq!(days.len(), 2);
    }

    #[test]
    fn test_serde_of_impossible_day_round_trips() {
        let date = GregorianDate::new(2024, 1, 32);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-02-01\"");

        let parsed: GregorianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
        assert_eq!((parsed.month(), parsed.day()), (2, 1));
    }
}
