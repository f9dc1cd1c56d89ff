//! Gregorian to Hijri conversion with names, a configurable day boundary
//! and an injectable clock.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::SUNSET_HOUR;
use crate::hijri::{CalendarVariant, HijriDate, HijriError, resolve_hijri};
use crate::locale::{self, Language};
use crate::range::GregorianRange;
use crate::types::GregorianDate;

/// Source of the current local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Settings shared by every conversion a [`HijriConverter`] makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterOptions {
    /// Language for month names and event texts
    pub language:               Language,
    /// Start the new day at midnight. When false the day changes at 18:00,
    /// approximating sunset.
    pub day_change_at_midnight: bool,
    pub calendar:               CalendarVariant,
    /// Attach Hijri events to combined results
    pub include_events:         bool,
    /// Attach the Javanese date to combined results
    pub include_jawa:           bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            language:               Language::En,
            day_change_at_midnight: true,
            calendar:               CalendarVariant::UmmAlQura,
            include_events:         true,
            include_jawa:           true,
        }
    }
}

impl ConverterOptions {
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub const fn with_calendar(mut self, calendar: CalendarVariant) -> Self {
        self.calendar = calendar;
        self
    }

    pub const fn with_day_change_at_midnight(mut self, at_midnight: bool) -> Self {
        self.day_change_at_midnight = at_midnight;
        self
    }

    pub const fn with_events(mut self, include: bool) -> Self {
        self.include_events = include;
        self
    }

    pub const fn with_jawa(mut self, include: bool) -> Self {
        self.include_jawa = include;
        self
    }
}

/// A Hijri date with its Gregorian source and localized month name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HijriConversion {
    pub hijri:      HijriDate,
    /// The Gregorian day converted, after rolling impossible days forward
    pub gregorian:  GregorianDate,
    pub month_name: String,
    pub language:   Language,
}

impl HijriConversion {
    fn new(hijri: HijriDate, gregorian: GregorianDate, language: Language) -> Self {
        let month_name = locale::hijri_month_name(hijri.month, language)
            .map_or_else(|| format!("Month {}", hijri.month), str::to_owned);
        Self {
            hijri,
            gregorian,
            month_name,
            language,
        }
    }

    /// Day, month name and year, e.g. `1 Ramadhan 1447`
    pub fn full_date(&self) -> String {
        format!("{} {} {}", self.hijri.day, self.month_name, self.hijri.year)
    }

    /// `YYYY-MM-DD` form of the Hijri date
    pub fn hijri_date(&self) -> String {
        self.hijri.to_string()
    }
}

/// How two Hijri variants differ on one Gregorian day.
///
/// Differences are MABIMS minus Umm al-Qura, component by component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarComparison {
    pub umm_al_qura: HijriConversion,
    pub mabims:      HijriConversion,
    pub day_diff:    i32,
    pub month_diff:  i32,
    pub year_diff:   i32,
    pub is_same_day: bool,
}

/// Converts Gregorian dates to Hijri dates using a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct HijriConverter<C = SystemClock> {
    options: ConverterOptions,
    clock:   C,
}

impl HijriConverter<SystemClock> {
    /// Creates a converter reading the host clock
    pub const fn new(options: ConverterOptions) -> Self {
        Self {
            options,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> HijriConverter<C> {
    /// Creates a converter reading the given clock
    pub const fn with_clock(options: ConverterOptions, clock: C) -> Self {
        Self { options, clock }
    }

    pub const fn options(&self) -> &ConverterOptions {
        &self.options
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Converts a Gregorian date using the configured calendar.
    ///
    /// # Errors
    /// Returns `HijriError` when the configured calendar does not cover the
    /// date.
    pub fn gregorian_to_hijri(&self, year: i32, month: u8, day: u8) -> Result<HijriConversion, HijriError> {
        self.convert(GregorianDate::new(year, month, day), self.options.calendar)
    }

    /// Converts a Gregorian date using the given calendar.
    ///
    /// # Errors
    /// Returns `HijriError` when the calendar does not cover the date.
    pub fn convert(&self, date: GregorianDate, variant: CalendarVariant) -> Result<HijriConversion, HijriError> {
        let jdn = date.jdn();
        let hijri = resolve_hijri(jdn, variant)?;
        Ok(HijriConversion::new(
            hijri,
            GregorianDate::from_jdn(jdn),
            self.options.language,
        ))
    }

    /// The calendar day in effect now.
    ///
    /// With the sunset rule, from 18:00 local time the following day is
    /// already counted.
    pub fn current_date(&self, day_change_at_midnight: bool) -> GregorianDate {
        let now = self.clock.now();
        let today = GregorianDate::from(now.date());

        if !day_change_at_midnight && now.hour() >= SUNSET_HOUR {
            debug!(%today, hour = now.hour(), "past sunset, counting the next day");
            return today.succ();
        }
        today
    }

    /// Hijri date in effect now, under the configured day-change rule and
    /// calendar.
    ///
    /// # Errors
    /// Returns `HijriError` when the calendar does not cover today.
    pub fn current_hijri_date(&self) -> Result<HijriConversion, HijriError> {
        self.current_hijri_date_with(self.options.day_change_at_midnight, self.options.calendar)
    }

    /// Hijri date in effect now, under an explicit day-change rule and
    /// calendar.
    ///
    /// # Errors
    /// Returns `HijriError` when the calendar does not cover today.
    pub fn current_hijri_date_with(
        &self,
        day_change_at_midnight: bool,
        variant: CalendarVariant,
    ) -> Result<HijriConversion, HijriError> {
        self.convert(self.current_date(day_change_at_midnight), variant)
    }

    /// Converts one Gregorian day under both calendars and reports where
    /// they disagree.
    ///
    /// # Errors
    /// Returns the first `HijriError` either calendar reports.
    #[tracing::instrument(skip(self))]
    pub fn compare_calendars(&self, year: i32, month: u8, day: u8) -> Result<CalendarComparison, HijriError> {
        let date = GregorianDate::new(year, month, day);
        let umm_al_qura = self.convert(date, CalendarVariant::UmmAlQura)?;
        let mabims = self.convert(date, CalendarVariant::Mabims)?;

        let (u, m) = (&umm_al_qura.hijri, &mabims.hijri);
        let is_same_day = (u.year, u.month, u.day) == (m.year, m.month, m.day);
        if !is_same_day {
            debug!(umm_al_qura = %u, mabims = %m, "calendars disagree");
        }

        Ok(CalendarComparison {
            day_diff: i32::from(m.day) - i32::from(u.day),
            month_diff: i32::from(m.month) - i32::from(u.month),
            year_diff: m.year - u.year,
            is_same_day,
            umm_al_qura,
            mabims,
        })
    }

    /// Every first day of a Hijri month within a Gregorian range.
    ///
    /// # Errors
    /// Returns `HijriError` if any day of the range is not covered.
    pub fn month_starts(
        &self,
        range: &GregorianRange,
        variant: CalendarVariant,
    ) -> Result<Vec<HijriConversion>, HijriError> {
        let mut starts = Vec::new();
        for date in range.days() {
            let conversion = self.convert(date, variant)?;
            if conversion.hijri.is_first_day() {
                starts.push(conversion);
            }
        }
        Ok(starts)
    }
}
