/// Maximum valid month (December, and Dzulhijjah / Besar in the lunar calendars)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a week
pub const DAYS_IN_WEEK: i64 = 7;

/// Offset between a Julian Day Number and a modified Julian day as used by
/// the Hijri month tables
pub const MJD_OFFSET: i64 = 2_400_000;

/// Lunar month ordinal of the first Umm al-Qura table entry (1 Muharram 1356)
pub const UMM_AL_QURA_EPOCH: i64 = 16_261;

/// Lunar month ordinal of the first MABIMS table entry (1 Muharram 1430)
pub const MABIMS_EPOCH: i64 = 17_149;

/// First Gregorian year the MABIMS table is authoritative for
pub const MABIMS_MIN_YEAR: i32 = 2010;
/// Last Gregorian year the MABIMS table is authoritative for
pub const MABIMS_MAX_YEAR: i32 = 2030;

/// Local hour from which the sunset convention counts the next day
pub const SUNSET_HOUR: u32 = 18;

/// Length of a short Javanese year (Alip-type)
pub const JAWA_SHORT_YEAR: i64 = 354;
/// Length of a long Javanese year (Ehe-type)
pub const JAWA_LONG_YEAR: i64 = 355;

/// Years in a Windu cycle
pub const WINDU_YEARS: usize = 8;

/// Days in a full Windu cycle (five short and three long years)
pub const WINDU_DAYS: i64 = 5 * JAWA_SHORT_YEAR + 3 * JAWA_LONG_YEAR;

/// Days in the Pasaran market week
pub const PASARAN_DAYS: i64 = 5;

/// Neptu weight per Pasaran day: Legi, Pahing, Pon, Wage, Kliwon
pub const PASARAN_NEPTU: [u8; 5] = [5, 9, 7, 4, 8];

/// Neptu weight per weekday, Sunday first
pub const WEEKDAY_NEPTU: [u8; 7] = [5, 4, 3, 7, 8, 6, 9];

/// Label for Neptu totals outside the traditional table
pub const NEPTU_FALLBACK_MEANING: &str = "Various";

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
