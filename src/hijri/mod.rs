//! Table-driven Hijri calendar resolution.
//!
//! Month boundaries are never computed here: each [`CalendarVariant`] owns a
//! precomputed table of month starts and resolution is a search in that
//! table. Dates outside a table, and MABIMS dates outside the Gregorian years
//! the government calendar is published for, are reported as
//! [`HijriError`]s rather than extrapolated.

mod mabims;
mod table;
mod umm_al_qura;

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

pub use table::MonthTable;

use crate::julian::{checked_jdn_to_gregorian, gregorian_to_jdn};
use crate::consts::{MABIMS_EPOCH, MABIMS_MAX_YEAR, MABIMS_MIN_YEAR, MAX_MONTH, MIN_DAY, MJD_OFFSET, UMM_AL_QURA_EPOCH};
use crate::types::{GregorianDate, Weekday};
use crate::{ParseError, prelude::*};

static UMM_AL_QURA_TABLE: MonthTable = MonthTable::new(
    CalendarVariant::UmmAlQura,
    UMM_AL_QURA_EPOCH,
    &umm_al_qura::UMM_AL_QURA_MONTH_STARTS,
);

static MABIMS_TABLE: MonthTable =
    MonthTable::new(CalendarVariant::Mabims, MABIMS_EPOCH, &mabims::MABIMS_MONTH_STARTS);

/// The Hijri calendar tables this crate can resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalendarVariant {
    /// Saudi Umm al-Qura calendar
    #[default]
    #[display(fmt = "Umm al-Qura")]
    #[serde(alias = "umm", alias = "ummalqura", alias = "u")]
    UmmAlQura,
    /// Indonesian government calendar following the MABIMS criteria
    #[display(fmt = "MABIMS")]
    #[serde(alias = "m", alias = "mabim")]
    Mabims,
}

impl CalendarVariant {
    pub const ALL: [Self; 2] = [Self::UmmAlQura, Self::Mabims];

    /// Month table backing this variant
    pub fn table(self) -> &'static MonthTable {
        match self {
            Self::UmmAlQura => &UMM_AL_QURA_TABLE,
            Self::Mabims => &MABIMS_TABLE,
        }
    }

    /// Gregorian years conversions are accepted for, if the variant is
    /// restricted beyond its table
    pub const fn gregorian_years(self) -> Option<RangeInclusive<i32>> {
        match self {
            Self::UmmAlQura => None,
            Self::Mabims => Some(MABIMS_MIN_YEAR..=MABIMS_MAX_YEAR),
        }
    }

    /// Short machine-readable code
    pub const fn code(self) -> &'static str {
        match self {
            Self::UmmAlQura => "umm-al-qura",
            Self::Mabims => "mabims",
        }
    }
}

impl FromStr for CalendarVariant {
    type Err = ParseError;

    /// Accepts the usual spellings: `umm`, `ummalqura`, `umm-al-qura`, `u`,
    /// `mabims`, `mabim`, `m`, in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "umm" | "ummalqura" | "u" | "uq" => Ok(Self::UmmAlQura),
            "mabims" | "mabim" | "m" => Ok(Self::Mabims),
            _ => Err(ParseError::UnknownVariant(s.to_owned())),
        }
    }
}

/// A resolved Hijri date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct HijriDate {
    /// Anno Hegirae year
    pub year:                i32,
    /// Month, 1 (Muharram) through 12 (Dzulhijjah)
    pub month:               u8,
    /// Day of month, starting at 1
    pub day:                 u8,
    /// Days in this month, 29 or 30
    pub month_length:        u8,
    /// Months elapsed since the Hijri epoch, counting 1 Muharram 1 AH as 1
    pub lunar_month_ordinal: i64,
    /// Day of the week
    pub weekday:             Weekday,
    /// Table the date was resolved against
    pub variant:             CalendarVariant,
}

impl HijriDate {
    pub const fn is_short_month(&self) -> bool {
        self.month_length == 29
    }

    pub const fn is_first_day(&self) -> bool {
        self.day == MIN_DAY
    }

    pub const fn is_last_day(&self) -> bool {
        self.day == self.month_length
    }
}

/// Why a Hijri conversion produced no date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HijriError {
    /// The variant is not defined for this Gregorian year.
    #[error("{variant} conversion is only defined for Gregorian years {min}-{max}, got {year}")]
    OutOfRange {
        variant: CalendarVariant,
        year:    i32,
        min:     i32,
        max:     i32,
    },

    /// The date falls before or after the variant's month table.
    #[error("date lies outside the {variant} month table ({first} to {last})")]
    OutsideTable {
        variant: CalendarVariant,
        first:   GregorianDate,
        last:    GregorianDate,
    },

    /// The Hijri date does not exist in the variant's table.
    #[error("{variant} has no day {day} in month {month} of {year} AH")]
    InvalidHijriDate {
        variant: CalendarVariant,
        year:    i32,
        month:   u8,
        day:     u8,
    },
}

fn check_years(variant: CalendarVariant, year: i32) -> Result<(), HijriError> {
    match variant.gregorian_years() {
        Some(years) if !years.contains(&year) => Err(HijriError::OutOfRange {
            variant,
            year,
            min: *years.start(),
            max: *years.end(),
        }),
        _ => Ok(()),
    }
}

/// Checks a Julian Day Number against the variant's Gregorian window
/// without converting days far outside it.
fn check_window(variant: CalendarVariant, jdn: i64) -> Result<(), HijriError> {
    let Some(years) = variant.gregorian_years() else {
        return Ok(());
    };
    let first = gregorian_to_jdn(*years.start(), 1, 1);
    let last = gregorian_to_jdn(*years.end(), 12, 31);
    if (first..=last).contains(&jdn) {
        return Ok(());
    }

    let year = checked_jdn_to_gregorian(jdn).map_or(
        if jdn < first { i32::MIN } else { i32::MAX },
        GregorianDate::year,
    );
    check_years(variant, year)
}

fn outside_table(variant: CalendarVariant) -> HijriError {
    let table = variant.table();
    HijriError::OutsideTable {
        variant,
        first: table.first_date(),
        last: table.last_date(),
    }
}

/// Resolves the Hijri date of a Julian Day Number.
///
/// # Errors
/// Returns `HijriError::OutOfRange` for MABIMS dates outside 2010-2030 and
/// `HijriError::OutsideTable` when the day is not covered by the table.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn resolve_hijri(jdn: i64, variant: CalendarVariant) -> Result<HijriDate, HijriError> {
    check_window(variant, jdn)?;

    let mjdn = jdn.saturating_sub(MJD_OFFSET);
    let month = variant
        .table()
        .locate(mjdn)
        .ok_or_else(|| outside_table(variant))?;
    let (year, month_of_year) = month.year_month();

    trace!(%variant, mjdn, ordinal = month.ordinal, "resolved lunar month");

    Ok(HijriDate {
        year:                year as i32,
        month:               month_of_year as u8,
        day:                 (mjdn - month.start + 1) as u8,
        month_length:        month.length as u8,
        lunar_month_ordinal: month.ordinal,
        weekday:             crate::julian::weekday_of(jdn),
        variant,
    })
}

/// Converts a Gregorian date to the Hijri calendar.
///
/// Components are not checked; an impossible day such as February 30 is
/// counted forward into March.
///
/// # Errors
/// See [`resolve_hijri`].
pub fn gregorian_to_hijri(year: i32, month: u8, day: u8, variant: CalendarVariant) -> Result<HijriDate, HijriError> {
    resolve_hijri(GregorianDate::new(year, month, day).jdn(), variant)
}

/// Finds the Gregorian date of a Hijri date in the given variant.
///
/// # Errors
/// Returns `HijriError::InvalidHijriDate` for a month outside 1-12 or a day
/// the month does not have, `HijriError::OutsideTable` when the month is not
/// in the table and `HijriError::OutOfRange` when the result falls outside
/// the variant's Gregorian years.
pub fn hijri_to_gregorian(
    year: i32,
    month: u8,
    day: u8,
    variant: CalendarVariant,
) -> Result<GregorianDate, HijriError> {
    let invalid = HijriError::InvalidHijriDate {
        variant,
        year,
        month,
        day,
    };
    if month == 0 || month > MAX_MONTH || day < MIN_DAY {
        return Err(invalid);
    }

    let ordinal = (i64::from(year) - 1) * 12 + i64::from(month);
    let found = variant
        .table()
        .month_by_ordinal(ordinal)
        .ok_or_else(|| outside_table(variant))?;
    if i64::from(day) > found.length {
        return Err(invalid);
    }

    let date = GregorianDate::from_jdn(found.start + MJD_OFFSET + i64::from(day) - 1);
    check_years(variant, date.year())?;
    Ok(date)
}
