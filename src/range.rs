use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{GregorianDate, ParseError, RANGE_SEPARATOR, prelude::*};

/// An inclusive range of Gregorian days.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct GregorianRange {
    start: GregorianDate,
    end:   GregorianDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: GregorianDate, end: GregorianDate },

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl GregorianRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: GregorianDate, end: GregorianDate) -> Result<Self, RangeError> {
        let (start, end) = (start.normalized(), end.normalized());
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range covering a single day
    pub fn day(date: GregorianDate) -> Self {
        let date = date.normalized();
        Self {
            start: date,
            end:   date,
        }
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> GregorianDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> GregorianDate {
        self.end
    }

    /// Number of days in the range, both ends included
    pub fn len(&self) -> i64 {
        self.end.days_since(self.start) + 1
    }

    /// A range always holds at least one day
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: GregorianDate) -> bool {
        let date = date.normalized();
        self.start <= date && date <= self.end
    }

    /// Checks if this range overlaps with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Iterates over every day of the range in order
    pub fn days(&self) -> impl Iterator<Item = GregorianDate> + use<> {
        let start = self.start;
        (0..self.len()).map(move |offset| start.add_days(offset))
    }

    /// Julian Day Numbers of the first and last day
    pub fn jdn_bounds(&self) -> (i64, i64) {
        (self.start.jdn(), self.end.jdn())
    }
}

impl FromStr for GregorianRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        match trimmed.split_once(RANGE_SEPARATOR) {
            None => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            Some((_, rest)) if rest.contains(RANGE_SEPARATOR) => Err(RangeError::InvalidFormat(format!(
                "Multiple range separators found: {s}"
            ))),
            Some((start, end)) => {
                let start = start.parse::<GregorianDate>()?;
                let end = end.parse::<GregorianDate>()?;
                Self::new(start, end)
            }
        }
    }
}

impl Serialize for GregorianRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> GregorianDate {
        GregorianDate::new(y, m, d)
    }

    #[test]
    fn test_new_valid() {
        let range = GregorianRange::new(date(2026, 1, 1), date(2026, 12, 31)).unwrap();
        assert_eq!(range.start(), date(2026, 1, 1));
        assert_eq!(range.end(), date(2026, 12, 31));
        assert_eq!(range.len(), 365);
    }

    #[test]
    fn test_new_invalid() {
        let result = GregorianRange::new(date(2026, 2, 1), date(2026, 1, 1));
        assert!(matches!(result, Err(RangeError::InvalidRange { .. })));
    }

    #[test]
    fn test_single_day() {
        let range = GregorianRange::day(date(2024, 2, 29));
        assert_eq!(range.len(), 1);
        assert_eq!(range.days().collect::<Vec<_>>(), vec![date(2024, 2, 29)]);
    }

    #[test]
    fn test_contains() {
        let range = GregorianRange::new(date(2026, 2, 18), date(2026, 3, 20)).unwrap();
        assert!(range.contains(date(2026, 2, 18)));
        assert!(range.contains(date(2026, 3, 1)));
        assert!(range.contains(date(2026, 3, 20)));
        assert!(!range.contains(date(2026, 2, 17)));
        assert!(!range.contains(date(2026, 3, 21)));
    }

    #[test]
    fn test_overlaps() {
        let a = GregorianRange::new(date(2026, 1, 1), date(2026, 1, 31)).unwrap();
        let b = GregorianRange::new(date(2026, 1, 31), date(2026, 2, 28)).unwrap();
        let c = GregorianRange::new(date(2026, 2, 1), date(2026, 2, 28)).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_days_cross_month_and_year() {
        let range = GregorianRange::new(date(2024, 12, 30), date(2025, 1, 2)).unwrap();
        let days: Vec<_> = range.days().collect();
        assert_eq!(days, vec![
            date(2024, 12, 30),
            date(2024, 12, 31),
            date(2025, 1, 1),
            date(2025, 1, 2)
        ]);
    }

    #[test]
    fn test_display_and_parse() {
        let range: GregorianRange = "2026-01-01/2026-12-31".parse().unwrap();
        assert_eq!(range.to_string(), "2026-01-01/2026-12-31");
        assert_eq!(range.len(), 365);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "2026-01-01".parse::<GregorianRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2026-01-01/2026-02-01/2026-03-01".parse::<GregorianRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2026-13-01/2026-12-31".parse::<GregorianRange>(),
            Err(RangeError::ParseError(ParseError::InvalidMonth(13)))
        ));
        assert!(matches!(
            "2026-12-31/2026-01-01".parse::<GregorianRange>(),
            Err(RangeError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_serde() {
        let range = GregorianRange::new(date(2026, 2, 19), date(2026, 3, 20)).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#""2026-02-19/2026-03-20""#);

        let parsed: GregorianRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, range);
    }
}
