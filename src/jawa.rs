//! The Javanese (Sultan Agungan) calendar: Anno Javanico years in the
//! eight-year Windu cycle, the five-day Pasaran market week and Neptu.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::consts::{
    JAWA_LONG_YEAR, JAWA_SHORT_YEAR, MAX_MONTH, NEPTU_FALLBACK_MEANING, PASARAN_DAYS, PASARAN_NEPTU,
    WEEKDAY_NEPTU, WINDU_DAYS, WINDU_YEARS,
};
use crate::locale::{self, Language};
use crate::types::{GregorianDate, Weekday};
use crate::prelude::*;

/// Day of the five-day market week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Pasaran {
    Legi,
    Pahing,
    Pon,
    Wage,
    Kliwon,
}

impl Pasaran {
    pub const ALL: [Self; 5] = [Self::Legi, Self::Pahing, Self::Pon, Self::Wage, Self::Kliwon];

    /// Pasaran for an index counted from Legi; wraps modulo 5
    pub const fn from_index(index: i64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let i = index.rem_euclid(PASARAN_DAYS) as usize;
        Self::ALL[i]
    }

    /// Index counted from Legi = 0
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Legi => "Legi",
            Self::Pahing => "Pahing",
            Self::Pon => "Pon",
            Self::Wage => "Wage",
            Self::Kliwon => "Kliwon",
        }
    }

    /// Neptu weight of this market day
    pub const fn neptu(self) -> u8 {
        PASARAN_NEPTU[self as usize]
    }
}

/// Year of the eight-year Windu cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum WinduYear {
    Alip,
    Ehe,
    Jimawal,
    Je,
    Dal,
    Be,
    Wawu,
    Jimakir,
}

impl WinduYear {
    pub const ALL: [Self; WINDU_YEARS] = [
        Self::Alip,
        Self::Ehe,
        Self::Jimawal,
        Self::Je,
        Self::Dal,
        Self::Be,
        Self::Wawu,
        Self::Jimakir,
    ];

    /// Windu year for a position in the cycle; wraps modulo 8
    pub const fn from_index(index: i64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
        let i = index.rem_euclid(WINDU_YEARS as i64) as usize;
        Self::ALL[i]
    }

    /// Position in the cycle, Alip = 0
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ehe, Dal and Jimakir are long (wuntu) years
    pub const fn is_long(self) -> bool {
        matches!(self, Self::Ehe | Self::Dal | Self::Jimakir)
    }

    /// Days in a year of this type
    pub const fn days(self) -> i64 {
        if self.is_long() { JAWA_LONG_YEAR } else { JAWA_SHORT_YEAR }
    }

    /// The year following this one in the cycle
    pub const fn succ(self) -> Self {
        Self::from_index(self as i64 + 1)
    }

    /// Days in a month of a year of this type.
    ///
    /// Months alternate 30 and 29 days. Besar, the twelfth, takes the extra
    /// day of a long year.
    pub const fn month_length(self, month: u8) -> u8 {
        if month == MAX_MONTH {
            if self.is_long() { 30 } else { 29 }
        } else if month % 2 == 1 {
            30
        } else {
            29
        }
    }
}

/// Traditional reading of a Neptu total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum NeptuMeaning {
    Lungguh,
    Laku,
    Mantra,
    Pendito,
    Aras,
    Padu,
    Lintang,
    Rembulan,
    Srengenge,
    Banyu,
    Bumi,
    Gede,
    /// Totals the table has no reading for
    #[display(fmt = "{}", NEPTU_FALLBACK_MEANING)]
    Various,
}

impl NeptuMeaning {
    pub const fn from_total(total: u8) -> Self {
        match total {
            7 => Self::Lungguh,
            8 => Self::Laku,
            9 => Self::Mantra,
            10 => Self::Pendito,
            11 => Self::Aras,
            12 => Self::Padu,
            13 => Self::Lintang,
            14 => Self::Rembulan,
            15 => Self::Srengenge,
            16 => Self::Banyu,
            17 => Self::Bumi,
            18 => Self::Gede,
            _ => Self::Various,
        }
    }
}

/// Numerological score of a weekday and market day pair (a weton).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Neptu {
    pub total:   u8,
    pub meaning: NeptuMeaning,
}

impl Neptu {
    pub const fn new(pasaran: Pasaran, weekday: Weekday) -> Self {
        let total = pasaran.neptu() + WEEKDAY_NEPTU[weekday.index() as usize];
        Self {
            total,
            meaning: NeptuMeaning::from_total(total),
        }
    }
}

/// Reference point of the Javanese calendar.
///
/// One anchor pins both cycles: the Gregorian date of a known 1 Sura, its
/// Anno Javanico year and Windu position, and the Pasaran of that day.
/// Every other date is resolved relative to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JawaAnchor {
    date:    GregorianDate,
    year:    i32,
    windu:   WinduYear,
    pasaran: Pasaran,
}

impl JawaAnchor {
    /// 1 Sura 1958 AJ, Ahad Kliwon 2024-07-07, a Wawu year
    pub const CANONICAL: Self = Self {
        date:    GregorianDate::new(2024, 7, 7),
        year:    1958,
        windu:   WinduYear::Wawu,
        pasaran: Pasaran::Kliwon,
    };

    /// Creates an anchor from a known 1 Sura date
    pub const fn new(date: GregorianDate, year: i32, windu: WinduYear, pasaran: Pasaran) -> Self {
        Self {
            date,
            year,
            windu,
            pasaran,
        }
    }

    pub const fn date(&self) -> GregorianDate {
        self.date
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn windu(&self) -> WinduYear {
        self.windu
    }

    pub const fn pasaran(&self) -> Pasaran {
        self.pasaran
    }

    /// Pasaran of a Julian Day Number
    pub fn pasaran_of(&self, jdn: i64) -> Pasaran {
        Pasaran::from_index(i64::from(self.pasaran.index()) + jdn - self.date.jdn())
    }

    /// Checks that another pinned Pasaran reference agrees with this anchor
    pub fn agrees_with(&self, date: GregorianDate, pasaran: Pasaran) -> bool {
        self.pasaran_of(date.jdn()) == pasaran
    }

    /// Resolves the Javanese date of a Julian Day Number
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    pub fn resolve(&self, jdn: i64) -> JawaDate {
        let diff = jdn - self.date.jdn();

        // Whole Windu cycles first, then at most seven single years.
        let cycles = diff.div_euclid(WINDU_DAYS);
        let mut offset = diff.rem_euclid(WINDU_DAYS);
        let mut year = i64::from(self.year) + cycles * WINDU_YEARS as i64;
        let mut windu = self.windu;
        while offset >= windu.days() {
            offset -= windu.days();
            year += 1;
            windu = windu.succ();
        }

        let mut month = 1;
        while month < MAX_MONTH && offset >= i64::from(windu.month_length(month)) {
            offset -= i64::from(windu.month_length(month));
            month += 1;
        }

        let weekday = crate::julian::weekday_of(jdn);
        let pasaran = self.pasaran_of(jdn);

        trace!(jdn, year, month, %windu, %pasaran, "resolved javanese date");

        JawaDate {
            year: year as i32,
            month,
            day: (offset + 1) as u8,
            windu,
            is_leap_windu_year: windu.is_long(),
            pasaran,
            weekday,
            neptu: Neptu::new(pasaran, weekday),
        }
    }
}

impl Default for JawaAnchor {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// A resolved Javanese date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{} {}, {} {} {} AJ", weekday, pasaran, day, month, year)]
pub struct JawaDate {
    /// Anno Javanico year
    pub year:               i32,
    /// Month, 1 (Sura) through 12 (Besar)
    pub month:              u8,
    /// Day of month, starting at 1
    pub day:                u8,
    /// Position of the year in the Windu cycle
    pub windu:              WinduYear,
    /// Whether the year has 355 days
    pub is_leap_windu_year: bool,
    pub pasaran:            Pasaran,
    pub weekday:            Weekday,
    pub neptu:              Neptu,
}

impl JawaDate {
    /// Index of the Pasaran day, Legi = 0
    pub const fn day_index(&self) -> u8 {
        self.pasaran.index()
    }

    /// 1 Sura, the Javanese new year
    pub const fn is_new_year(&self) -> bool {
        self.month == 1 && self.day == 1
    }

    /// Days in this date's month
    pub const fn month_length(&self) -> u8 {
        self.windu.month_length(self.month)
    }

    pub fn month_name(&self, language: Language) -> &'static str {
        locale::jawa_month_name(self.month, language).unwrap_or_default()
    }

    pub const fn pasaran_name(&self, language: Language) -> &'static str {
        locale::pasaran_name(self.pasaran, language)
    }

    /// Weekday and market day, e.g. `Rabu Legi`
    pub fn weton(&self, language: Language) -> String {
        format!(
            "{} {}",
            locale::weekday_name(self.weekday, language),
            self.pasaran_name(language)
        )
    }

    /// Market day, day, month and year, e.g. `Legi, 26 Rejeb 1959 AJ`
    pub fn formatted(&self, language: Language) -> String {
        format!(
            "{}, {} {} {} AJ",
            self.pasaran_name(language),
            self.day,
            self.month_name(language),
            self.year
        )
    }
}

/// Resolves the Javanese date of a Gregorian date.
///
/// Total over every date: the Windu cycle repeats in both directions.
pub fn resolve_jawa(date: GregorianDate) -> JawaDate {
    JawaAnchor::CANONICAL.resolve(date.jdn())
}

/// Pasaran of a Gregorian date
pub fn pasaran_of(date: GregorianDate) -> Pasaran {
    JawaAnchor::CANONICAL.pasaran_of(date.jdn())
}
