//! Observances and sunnah fasts attached to Hijri dates.

use serde::{Deserialize, Serialize};

use crate::hijri::HijriDate;
use crate::locale::Language;
use crate::types::Weekday;

const MUHARRAM: u8 = 1;
const RABIUL_AWAL: u8 = 3;
const RAJAB: u8 = 7;
const SYABAN: u8 = 8;
const RAMADHAN: u8 = 9;
const SYAWAL: u8 = 10;
const DZULHIJJAH: u8 = 12;

/// An observance or recommended fast falling on a Hijri date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IslamicEvent {
    RamadhanFast,
    LastTenNightsPreparation,
    LaylatulQadr,
    EidAlFitrEve,
    EidAlFitr,
    EidAlFitrSecondDay,
    IsraMiraj,
    ArafahFast,
    EidAlAdha,
    IslamicNewYear,
    TasuaPreparation,
    TasuaFast,
    AshuraPreparation,
    AshuraFast,
    NisfuSyaban,
    Mawlid,
    AyyamulBidhPreparation,
    AyyamulBidhFast,
    MondayThursdayPreparation,
    MondayThursdayFast,
}

impl IslamicEvent {
    /// Greeting or description of the event in the given language
    #[allow(clippy::too_many_lines)]
    pub const fn text(self, language: Language) -> &'static str {
        let [en, id, ar, jv] = match self {
            Self::RamadhanFast => [
                "Happy observing the fast of Ramadan",
                "Selamat menunaikan ibadah puasa Ramadhan",
                "صوماً مباركاً في شهر رمضان",
                "Sugeng nindakaken ibadah siyam Ramadhan",
            ],
            Self::LastTenNightsPreparation => [
                "Preparation for the last 10 days of Ramadan",
                "Persiapan memasuki 10 hari terakhir Ramadhan",
                "الاستعداد للعشر الأواخر من رمضان",
                "Nyamektakaken 10 dinten pungkasan Ramadhan",
            ],
            Self::LaylatulQadr => [
                "Night of Power (Laylatul Qadr)",
                "Malam Lailatul Qadr",
                "ليلة القدر",
                "Dalu Laylatul Qadr",
            ],
            Self::EidAlFitrEve => [
                "Preparations for tomorrow's Eid al-Fitr holiday",
                "Persiapan menyambut Idul Fitri besok",
                "الاستعداد لعيد الفطر غداً",
                "Nyamektakaken dinten riyaya Idul Fitri benjing",
            ],
            Self::EidAlFitr => [
                "Happy Eid al-Fitr",
                "Selamat Hari Raya Idul Fitri",
                "عيد فطر سعيد",
                "Sugeng Riyadi Idul Fitri",
            ],
            Self::EidAlFitrSecondDay => [
                "Happy Eid al-Fitr (Day 2)",
                "Selamat Hari Raya Idul Fitri (Hari Ke-2)",
                "عيد فطر سعيد (اليوم الثاني)",
                "Sugeng Riyadi Idul Fitri (Dinten Kaping kalih)",
            ],
            Self::IsraMiraj => [
                "Isra and Mi'raj of the Prophet Muhammad ﷺ",
                "Isra Mi'raj Nabi Muhammad ﷺ",
                "الإسراء والمعراج",
                "Isra Mi'raj Nabi Muhammad ﷺ",
            ],
            Self::ArafahFast => [
                "Happy observing the Sunnah fast of Arafah",
                "Selamat menunaikan puasa sunnah Arafah",
                "صوماً مباركاً لصيام عرفة",
                "Sugeng nindakaken siyam sunah Arafah",
            ],
            Self::EidAlAdha => [
                "Happy Eid al-Adha",
                "Selamat Hari Raya Idul Adha",
                "عيد أضحى مبارك",
                "Sugeng Riyadi Idul Adha",
            ],
            Self::IslamicNewYear => [
                "Islamic New Year",
                "Tahun Baru Islam",
                "رأس السنة الهجرية",
                "Warsa Enggal Islam",
            ],
            Self::TasuaPreparation => [
                "Preparation for tomorrow's Tasu'a Sunnah fast",
                "Persiapan puasa sunnah Tasu'a besok",
                "الاستعداد لصيام تاسوعاء غداً",
                "Nyamektakaken siyam sunah Tasu'a benjing",
            ],
            Self::TasuaFast => [
                "Happy observing the Sunnah fast of Tasu'a",
                "Selamat menunaikan puasa sunnah Tasu'a",
                "صوماً مباركاً لصيام تاسوعاء",
                "Sugeng nindakaken siyam sunah Tasu'a",
            ],
            Self::AshuraPreparation => [
                "Preparation for tomorrow's Ashura Sunnah fast",
                "Persiapan puasa sunnah Asyura besok",
                "الاستعداد لصيام عاشوراء غداً",
                "Nyamektakaken siyam sunah Asyura benjing",
            ],
            Self::AshuraFast => [
                "Happy observing the Sunnah fast of Ashura",
                "Selamat menunaikan puasa sunnah Asyura",
                "صوماً مباركاً لصيام عاشوراء",
                "Sugeng nindakaken siyam sunah Asyura",
            ],
            Self::NisfuSyaban => [
                "Mid-Sha'ban (Nisfu Sya'ban)",
                "Pertengahan Sya'ban (Nisfu Sya'ban)",
                "ليلة النصف من شعبان",
                "Tengahing Sya'ban (Nisfu Sya'ban)",
            ],
            Self::Mawlid => [
                "Mawlid of the Prophet Muhammad ﷺ",
                "Maulid Nabi Muhammad ﷺ",
                "المولد النبوي الشريف",
                "Maulid Nabi Muhammad ﷺ",
            ],
            Self::AyyamulBidhPreparation => [
                "Preparation for tomorrow's Ayyamul Bidh fast",
                "Persiapan puasa Ayyamul Bidh besok",
                "الاستعداد لصيام الأيام البيض غداً",
                "Nyamektakaken siyam Ayyamul Bidh benjing",
            ],
            Self::AyyamulBidhFast => [
                "Happy observing the Sunnah fast of Ayyamul Bidh",
                "Selamat menunaikan puasa sunnah Ayyamul Bidh",
                "صوماً مباركاً لصيام الأيام البيض",
                "Sugeng nindakaken siyam sunah Ayyamul Bidh",
            ],
            Self::MondayThursdayPreparation => [
                "Preparation for tomorrow's Monday–Thursday Sunnah fast",
                "Persiapan puasa sunnah Senin–Kamis besok",
                "الاستعداد لصيام الاثنين والخميس غداً",
                "Nyamektakaken siyam sunah Senen–Kemis benjing",
            ],
            Self::MondayThursdayFast => [
                "Happy observing the Sunnah fast (Monday–Thursday)",
                "Selamat menunaikan puasa sunnah Senin–Kamis",
                "صوماً مباركاً لصيام الاثنين والخميس",
                "Sugeng nindakaken siyam sunah Senen–Kemis",
            ],
        };

        match language {
            Language::En => en,
            Language::Id => id,
            Language::Ar => ar,
            Language::Jv => jv,
        }
    }
}

/// Events on a Hijri month and day.
///
/// The eve of Eid al-Fitr is announced on 30 Ramadhan only, since a bare
/// month and day cannot tell whether Ramadhan has 29 days. Use
/// [`events_for`] when the resolved date is at hand.
pub fn islamic_events(month: u8, day: u8, weekday: Weekday) -> Vec<IslamicEvent> {
    collect_events(month, day, weekday, day == 30)
}

/// Events on a resolved Hijri date, announcing the eve of Eid al-Fitr on
/// the last day of Ramadhan whatever its length.
pub fn events_for(date: &HijriDate) -> Vec<IslamicEvent> {
    collect_events(date.month, date.day, date.weekday, date.is_last_day())
}

#[allow(clippy::enum_glob_use)]
fn collect_events(month: u8, day: u8, weekday: Weekday, last_day: bool) -> Vec<IslamicEvent> {
    use IslamicEvent::*;

    let mut events = Vec::new();

    match (month, day) {
        (RAMADHAN, _) if last_day => events.push(EidAlFitrEve),
        (RAMADHAN, 20) => events.push(LastTenNightsPreparation),
        (RAMADHAN, _) => events.push(RamadhanFast),
        (SYAWAL, 1) => events.push(EidAlFitr),
        (SYAWAL, 2) => events.push(EidAlFitrSecondDay),
        (RAJAB, 27) => events.push(IsraMiraj),
        (DZULHIJJAH, 9) => events.push(ArafahFast),
        (DZULHIJJAH, 10) => events.push(EidAlAdha),
        (MUHARRAM, 1) => events.push(IslamicNewYear),
        (MUHARRAM, 2) => events.push(TasuaPreparation),
        (MUHARRAM, 3) => events.extend([TasuaFast, AshuraPreparation]),
        (MUHARRAM, 4) => events.push(AshuraFast),
        (SYABAN, 15) => events.push(NisfuSyaban),
        (RABIUL_AWAL, 12) => events.push(Mawlid),
        _ => {}
    }

    // Odd nights of the last ten.
    if month == RAMADHAN && (21..=29).contains(&day) && day % 2 == 1 {
        events.push(LaylatulQadr);
    }

    if month != RAMADHAN {
        match day {
            12 => events.push(AyyamulBidhPreparation),
            13..=15 => events.push(AyyamulBidhFast),
            _ => {}
        }

        match weekday {
            Weekday::Sunday | Weekday::Wednesday => events.push(MondayThursdayPreparation),
            Weekday::Monday | Weekday::Thursday => events.push(MondayThursdayFast),
            _ => {}
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hijri::{CalendarVariant, resolve_hijri};
    use crate::julian::gregorian_to_jdn;

    #[test]
    fn test_ramadhan() {
        assert_eq!(islamic_events(9, 1, Weekday::Monday), vec![IslamicEvent::RamadhanFast]);
        assert_eq!(
            islamic_events(9, 20, Weekday::Friday),
            vec![IslamicEvent::LastTenNightsPreparation]
        );
        assert_eq!(
            islamic_events(9, 27, Weekday::Tuesday),
            vec![IslamicEvent::RamadhanFast, IslamicEvent::LaylatulQadr]
        );
        assert_eq!(islamic_events(9, 28, Weekday::Tuesday), vec![IslamicEvent::RamadhanFast]);
        assert_eq!(islamic_events(9, 30, Weekday::Thursday), vec![IslamicEvent::EidAlFitrEve]);
    }

    #[test]
    fn test_fixed_observances() {
        struct TestCase {
            month:    u8,
            day:      u8,
            expected: Vec<IslamicEvent>,
        }

        let cases = [
            TestCase {
                month:    10,
                day:      1,
                expected: vec![IslamicEvent::EidAlFitr],
            },
            TestCase {
                month:    10,
                day:      2,
                expected: vec![IslamicEvent::EidAlFitrSecondDay],
            },
            TestCase {
                month:    7,
                day:      27,
                expected: vec![IslamicEvent::IsraMiraj],
            },
            TestCase {
                month:    12,
                day:      9,
                expected: vec![IslamicEvent::ArafahFast],
            },
            TestCase {
                month:    12,
                day:      10,
                expected: vec![IslamicEvent::EidAlAdha],
            },
            TestCase {
                month:    1,
                day:      1,
                expected: vec![IslamicEvent::IslamicNewYear],
            },
            TestCase {
                month:    1,
                day:      3,
                expected: vec![IslamicEvent::TasuaFast, IslamicEvent::AshuraPreparation],
            },
            TestCase {
                month:    8,
                day:      15,
                expected: vec![IslamicEvent::NisfuSyaban, IslamicEvent::AyyamulBidhFast],
            },
            TestCase {
                month:    3,
                day:      12,
                expected: vec![IslamicEvent::Mawlid, IslamicEvent::AyyamulBidhPreparation],
            },
            TestCase {
                month:    5,
                day:      5,
                expected: vec![],
            },
        ];

        // Saturday carries no weekly fast.
        for case in &cases {
            assert_eq!(
                islamic_events(case.month, case.day, Weekday::Saturday),
                case.expected,
                "{}/{}",
                case.day,
                case.month
            );
        }
    }

    #[test]
    fn test_weekly_fast() {
        assert_eq!(
            islamic_events(5, 5, Weekday::Sunday),
            vec![IslamicEvent::MondayThursdayPreparation]
        );
        assert_eq!(
            islamic_events(5, 6, Weekday::Monday),
            vec![IslamicEvent::MondayThursdayFast]
        );
        assert_eq!(
            islamic_events(5, 8, Weekday::Wednesday),
            vec![IslamicEvent::MondayThursdayPreparation]
        );
        assert_eq!(
            islamic_events(5, 9, Weekday::Thursday),
            vec![IslamicEvent::MondayThursdayFast]
        );
        assert!(islamic_events(5, 10, Weekday::Friday).is_empty());
        assert_eq!(islamic_events(9, 2, Weekday::Monday), vec![IslamicEvent::RamadhanFast]);
    }

    #[test]
    fn test_events_for_short_ramadhan() {
        // MABIMS Ramadhan 1447 has 29 days.
        let last = resolve_hijri(gregorian_to_jdn(2026, 3, 19), CalendarVariant::Mabims).unwrap();
        assert_eq!((last.month, last.day, last.month_length), (9, 29, 29));
        assert_eq!(
            events_for(&last),
            vec![IslamicEvent::EidAlFitrEve, IslamicEvent::LaylatulQadr]
        );
        assert_eq!(
            islamic_events(last.month, last.day, last.weekday),
            vec![IslamicEvent::RamadhanFast, IslamicEvent::LaylatulQadr]
        );
    }

    #[test]
    fn test_no_duplicates() {
        for month in 1..=12 {
            for day in 1..=30 {
                for weekday in Weekday::ALL {
                    let events = islamic_events(month, day, weekday);
                    for (i, event) in events.iter().enumerate() {
                        assert!(!events[i + 1..].contains(event), "{event:?} repeated on {day}/{month}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_text() {
        assert_eq!(IslamicEvent::EidAlFitr.text(Language::En), "Happy Eid al-Fitr");
        assert_eq!(IslamicEvent::EidAlFitr.text(Language::Id), "Selamat Hari Raya Idul Fitri");
        assert_eq!(IslamicEvent::EidAlFitr.text(Language::Jv), "Sugeng Riyadi Idul Fitri");
        assert_eq!(IslamicEvent::EidAlFitr.text(Language::Ar), "عيد فطر سعيد");
        assert_eq!(IslamicEvent::IslamicNewYear.text(Language::normalize("ms")), "Tahun Baru Islam");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&IslamicEvent::LaylatulQadr).unwrap();
        assert_eq!(json, r#""laylatul_qadr""#);
    }
}
