//! Month, market-day and weekday names by language.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::jawa::Pasaran;
use crate::types::Weekday;
use crate::{MAX_MONTH, prelude::*};

/// Languages names are available in.
///
/// Any language code can be turned into one of these with
/// [`Language::normalize`]; unsupported codes fall back to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Language {
    #[default]
    #[display(fmt = "en")]
    En,
    #[display(fmt = "ar")]
    Ar,
    #[display(fmt = "id")]
    Id,
    #[display(fmt = "jv")]
    Jv,
}

impl Language {
    pub const ALL: [Self; 4] = [Self::En, Self::Ar, Self::Id, Self::Jv];

    /// Maps a language tag such as `en-US`, `ms` or `ur` onto a supported
    /// language.
    ///
    /// Malay and the legacy `in` code read Indonesian names. Languages
    /// written in Arabic script read Arabic names. Everything else is
    /// English.
    pub fn normalize(code: &str) -> Self {
        let code = code.trim().to_ascii_lowercase();
        let primary = code.split(['-', '_']).next().unwrap_or_default();

        match primary {
            "ar" | "ur" | "fa" | "ps" | "ku" | "sd" | "ug" => Self::Ar,
            "id" | "in" | "ms" => Self::Id,
            "jv" => Self::Jv,
            _ => Self::En,
        }
    }

    /// Two-letter language code
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
            Self::Id => "id",
            Self::Jv => "jv",
        }
    }
}

impl FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Self::normalize(&code)
    }
}

const HIJRI_MONTHS_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabiul Awal",
    "Rabiul Akhir",
    "Jumadil Awal",
    "Jumadil Akhir",
    "Rajab",
    "Sya'ban",
    "Ramadhan",
    "Syawal",
    "Dzulqa'dah",
    "Dzulhijjah",
];

const HIJRI_MONTHS_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

const HIJRI_MONTHS_ID: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabiul Awal",
    "Rabiul Akhir",
    "Jumadil Awal",
    "Jumadil Akhir",
    "Rajab",
    "Sya'ban",
    "Ramadhan",
    "Syawal",
    "Dzulkaidah",
    "Dzulhijjah",
];

// Javanese speakers name the Hijri months after the Javanese ones.
const HIJRI_MONTHS_JV: [&str; 12] = [
    "Sura",
    "Sapar",
    "Mulud",
    "Bakda Mulud",
    "Jumadil Awal",
    "Jumadil Akhir",
    "Rejeb",
    "Ruwah",
    "Pasa",
    "Sawal",
    "Sela",
    "Besar",
];

const JAWA_MONTHS: [&str; 12] = HIJRI_MONTHS_JV;

const JAWA_MONTHS_JV: [&str; 12] = [
    "Suro",
    "Sapar",
    "Mulud",
    "Bakda Mulud",
    "Jumadil Awal",
    "Jumadil Akir",
    "Rejeb",
    "Ruwah",
    "Poso",
    "Sawal",
    "Sela",
    "Besar",
];

const WEEKDAYS_EN: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
const WEEKDAYS_AR: [&str; 7] = ["الأحد", "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت"];
const WEEKDAYS_ID: [&str; 7] = ["Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu"];
const WEEKDAYS_JV: [&str; 7] = ["Ahad", "Senen", "Selasa", "Rebo", "Kemis", "Jemuwah", "Setu"];

fn month_index(month: u8) -> Option<usize> {
    (1..=MAX_MONTH).contains(&month).then(|| usize::from(month - 1))
}

/// Name of a Hijri month (1 = Muharram), or `None` outside 1-12
pub fn hijri_month_name(month: u8, language: Language) -> Option<&'static str> {
    let names = match language {
        Language::En => &HIJRI_MONTHS_EN,
        Language::Ar => &HIJRI_MONTHS_AR,
        Language::Id => &HIJRI_MONTHS_ID,
        Language::Jv => &HIJRI_MONTHS_JV,
    };
    month_index(month).map(|i| names[i])
}

/// Name of a Javanese month (1 = Sura), or `None` outside 1-12
///
/// Only Javanese has its own spelling; every other language uses the
/// Indonesian transliteration.
pub fn jawa_month_name(month: u8, language: Language) -> Option<&'static str> {
    let names = match language {
        Language::Jv => &JAWA_MONTHS_JV,
        Language::En | Language::Ar | Language::Id => &JAWA_MONTHS,
    };
    month_index(month).map(|i| names[i])
}

/// Name of a Pasaran day
pub const fn pasaran_name(pasaran: Pasaran, language: Language) -> &'static str {
    match (pasaran, language) {
        (Pasaran::Pahing, Language::Jv) => "Paing",
        _ => pasaran.name(),
    }
}

/// Name of a weekday
pub const fn weekday_name(weekday: Weekday, language: Language) -> &'static str {
    let names = match language {
        Language::En => &WEEKDAYS_EN,
        Language::Ar => &WEEKDAYS_AR,
        Language::Id => &WEEKDAYS_ID,
        Language::Jv => &WEEKDAYS_JV,
    };
    names[weekday.index() as usize]
}
