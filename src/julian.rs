//! Julian Day Number arithmetic for the proleptic Gregorian calendar.
//!
//! Julian Day Numbers are the common bridge between the Gregorian, Hijri and
//! Javanese calendars: every conversion in this crate goes through one.

use crate::consts::DAYS_IN_WEEK;
use crate::types::{GregorianDate, Weekday};

/// Converts a proleptic Gregorian date to its Julian Day Number.
///
/// January and February are counted as months 13 and 14 of the previous
/// year so the leap day falls at the end of the computational year.
///
/// Month and day are not checked against the calendar. Values outside their
/// usual range roll into the linear day count: month 13 is January of the
/// following year, month 0 is December of the previous one, and
/// `(2024, 1, 32)` lands on 2024-02-01.
///
/// ```
/// use hijri_jawa::julian::gregorian_to_jdn;
///
/// assert_eq!(gregorian_to_jdn(2000, 1, 1), 2_451_545);
/// assert_eq!(gregorian_to_jdn(2024, 13, 1), gregorian_to_jdn(2025, 1, 1));
/// ```
pub fn gregorian_to_jdn(year: i32, month: i32, day: i32) -> i64 {
    let (year, month, day) = (i64::from(year), i64::from(month), i64::from(day));

    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Converts a Julian Day Number back to a proleptic Gregorian date.
///
/// This is the inverse of [`gregorian_to_jdn`] for every valid date.
///
/// # Panics
/// Panics in debug builds if the resulting year does not fit in an `i32`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn jdn_to_gregorian(jdn: i64) -> GregorianDate {
    let alpha = (4 * jdn - 7_468_865).div_euclid(146_097);
    let a = jdn + 1 + alpha - alpha.div_euclid(4);
    let b = a + 1524;
    let c = (100 * b - 12_210).div_euclid(36_525);
    let d = (36_525 * c).div_euclid(100);
    let mut e = (10_000 * (b - d)).div_euclid(306_001);
    let day = b - d - (306_001 * e).div_euclid(10_000);

    // E runs 4..=15 with January and February as 14 and 15.
    if e > 13 {
        e -= 12;
    }
    let month = e - 1;
    let year = if month > 2 { c - 4716 } else { c - 4715 };

    debug_assert!(i32::try_from(year).is_ok(), "year {year} out of i32 range");

    GregorianDate::new(year as i32, month as u8, day as u8)
}

/// Largest distance from JDN 0 whose Gregorian year still fits in an `i32`.
const MAX_CONVERTIBLE_JDN: i64 = 730_000_000_000;

/// Converts a Julian Day Number to a Gregorian date, or `None` when the
/// year would not fit in an `i32`.
pub fn checked_jdn_to_gregorian(jdn: i64) -> Option<GregorianDate> {
    (-MAX_CONVERTIBLE_JDN..=MAX_CONVERTIBLE_JDN)
        .contains(&jdn)
        .then(|| jdn_to_gregorian(jdn))
}

/// Returns the weekday of a Julian Day Number.
pub fn weekday_of(jdn: i64) -> Weekday {
    Weekday::from_index((jdn + 1).rem_euclid(DAYS_IN_WEEK))
}

/// Returns the ISO 8601 weekday number (Monday = 1 ... Sunday = 7) of a
/// Julian Day Number.
pub fn iso_weekday(jdn: i64) -> u8 {
    weekday_of(jdn).iso_number()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::days_in_month;

    #[test]
    fn test_known_julian_day_numbers() {
        struct TestCase {
            date:        (i32, i32, i32),
            jdn:         i64,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date:        (2000, 1, 1),
                jdn:         2_451_545,
                description: "J2000 epoch",
            },
            TestCase {
                date:        (1970, 1, 1),
                jdn:         2_440_588,
                description: "Unix epoch",
            },
            TestCase {
                date:        (-4713, 11, 24),
                jdn:         0,
                description: "start of the Julian period (proleptic Gregorian)",
            },
            TestCase {
                date:        (1582, 10, 15),
                jdn:         2_299_161,
                description: "first day of the Gregorian reform",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            assert_eq!(gregorian_to_jdn(y, m, d), case.jdn, "{}", case.description);
            let date = jdn_to_gregorian(case.jdn);
            assert_eq!(
                (date.year(), i32::from(date.month()), i32::from(date.day())),
                (y, m, d),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_round_trip_every_day() {
        for year in (-500..=-480).chain(1890..=2110).chain(9990..=10_010) {
            for month in 1..=12u8 {
                for day in 1..=days_in_month(year, month).unwrap() {
                    let jdn = gregorian_to_jdn(year, i32::from(month), i32::from(day));
                    let date = jdn_to_gregorian(jdn);
                    assert_eq!(
                        (date.year(), date.month(), date.day()),
                        (year, month, day),
                        "round trip failed for {year}-{month}-{day}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_inverse_is_contiguous() {
        let start = gregorian_to_jdn(1899, 12, 25);
        for jdn in start..start + 100_000 {
            let date = jdn_to_gregorian(jdn);
            assert_eq!(date.jdn(), jdn);
        }
    }

    #[test]
    fn test_out_of_range_components_roll_forward() {
        assert_eq!(gregorian_to_jdn(2024, 13, 1), gregorian_to_jdn(2025, 1, 1));
        assert_eq!(gregorian_to_jdn(2024, 14, 1), gregorian_to_jdn(2025, 2, 1));
        assert_eq!(gregorian_to_jdn(2024, 15, 1), gregorian_to_jdn(2025, 3, 1));
        assert_eq!(gregorian_to_jdn(2024, 0, 1), gregorian_to_jdn(2023, 12, 1));
        assert_eq!(gregorian_to_jdn(2024, 1, 32), gregorian_to_jdn(2024, 2, 1));
        assert_eq!(gregorian_to_jdn(2023, 2, 29), gregorian_to_jdn(2023, 3, 1));
        assert_eq!(gregorian_to_jdn(2024, 3, 0), gregorian_to_jdn(2024, 2, 29));
    }

    #[test]
    fn test_checked_conversion() {
        let jdn = gregorian_to_jdn(2026, 3, 20);
        assert_eq!(checked_jdn_to_gregorian(jdn), Some(GregorianDate::new(2026, 3, 20)));

        let far = checked_jdn_to_gregorian(MAX_CONVERTIBLE_JDN).unwrap();
        assert!(far.year() > 1_990_000_000);
        assert!(checked_jdn_to_gregorian(-MAX_CONVERTIBLE_JDN).unwrap().year() < -1_990_000_000);

        assert_eq!(checked_jdn_to_gregorian(MAX_CONVERTIBLE_JDN + 1), None);
        assert_eq!(checked_jdn_to_gregorian(i64::MAX / 2), None);
        assert_eq!(checked_jdn_to_gregorian(i64::MIN), None);
    }

    #[test]
    fn test_weekday() {
        assert_eq!(weekday_of(gregorian_to_jdn(2000, 1, 1)), Weekday::Saturday);
        assert_eq!(weekday_of(gregorian_to_jdn(2026, 1, 14)), Weekday::Wednesday);
        assert_eq!(weekday_of(gregorian_to_jdn(2024, 7, 7)), Weekday::Sunday);
        assert_eq!(weekday_of(0), Weekday::Monday);
        assert_eq!(weekday_of(-1), Weekday::Sunday);
    }

    #[test]
    fn test_iso_weekday() {
        assert_eq!(iso_weekday(gregorian_to_jdn(2024, 7, 7)), 7);
        assert_eq!(iso_weekday(gregorian_to_jdn(2024, 7, 8)), 1);
        assert_eq!(iso_weekday(gregorian_to_jdn(2000, 1, 1)), 6);
    }
}
