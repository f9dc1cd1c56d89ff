use super::CalendarVariant;
use crate::consts::MJD_OFFSET;
use crate::types::GregorianDate;

/// A lunar month located in a [`MonthTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TableMonth {
    /// Lunar month ordinal counted from 1 Muharram 1 AH
    pub(crate) ordinal: i64,
    /// Modified Julian day of the first day of the month
    pub(crate) start:   i64,
    /// Days in the month (29 or 30)
    pub(crate) length:  i64,
}

impl TableMonth {
    /// Hijri (year, month) of this lunar month
    pub(crate) const fn year_month(&self) -> (i64, i64) {
        let years = (self.ordinal - 1).div_euclid(12);
        (years + 1, self.ordinal - 12 * years)
    }
}

/// Precomputed month starts of one Hijri calendar variant.
///
/// `starts[i]` is the modified Julian day on which lunar month
/// `i + epoch` begins. Entries are strictly increasing and the final entry
/// only closes the month before it, so a table of `n` entries covers `n - 1`
/// months.
#[derive(Debug)]
pub struct MonthTable {
    variant: CalendarVariant,
    epoch:   i64,
    starts:  &'static [i32],
}

impl MonthTable {
    pub(crate) const fn new(variant: CalendarVariant, epoch: i64, starts: &'static [i32]) -> Self {
        Self {
            variant,
            epoch,
            starts,
        }
    }

    /// The calendar variant this table belongs to
    pub const fn variant(&self) -> CalendarVariant {
        self.variant
    }

    /// Lunar month ordinal of the first month in the table
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }

    /// Number of complete months the table covers
    pub const fn months(&self) -> usize {
        self.starts.len().saturating_sub(1)
    }

    /// Month starts as modified Julian days
    pub const fn starts(&self) -> &'static [i32] {
        self.starts
    }

    /// First Gregorian day the table covers
    pub fn first_date(&self) -> GregorianDate {
        let first = self.starts.first().copied().unwrap_or_default();
        GregorianDate::from_jdn(i64::from(first) + MJD_OFFSET)
    }

    /// Last Gregorian day the table covers
    pub fn last_date(&self) -> GregorianDate {
        let closing = self.starts.last().copied().unwrap_or_default();
        GregorianDate::from_jdn(i64::from(closing) + MJD_OFFSET - 1)
    }

    /// Finds the month containing a modified Julian day.
    ///
    /// Returns `None` before the first entry and on or after the closing
    /// entry.
    pub(crate) fn locate(&self, mjdn: i64) -> Option<TableMonth> {
        // Number of months that have started on or before `mjdn`.
        let started = self.starts.partition_point(|&start| i64::from(start) <= mjdn);
        let index = started.checked_sub(1)?;
        self.month_at(index)
    }

    /// Returns the month with the given lunar month ordinal
    pub(crate) fn month_by_ordinal(&self, ordinal: i64) -> Option<TableMonth> {
        let index = usize::try_from(ordinal - self.epoch).ok()?;
        self.month_at(index)
    }

    fn month_at(&self, index: usize) -> Option<TableMonth> {
        let start = i64::from(*self.starts.get(index)?);
        let next = i64::from(*self.starts.get(index + 1)?);
        let offset = i64::try_from(index).ok()?;
        Some(TableMonth {
            ordinal: offset + self.epoch,
            start,
            length: next - start,
        })
    }
}
