//! One Gregorian day seen through every calendar the crate knows.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::converter::{Clock, HijriConversion, HijriConverter};
use crate::events::{IslamicEvent, events_for};
use crate::hijri::HijriError;
use crate::jawa::{JawaDate, resolve_jawa};
use crate::locale::Language;
use crate::types::GregorianDate;

/// Combined Gregorian, Hijri and Javanese view of a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllCalendars {
    pub gregorian:       GregorianDate,
    pub hijri:           HijriConversion,
    /// e.g. `1 Ramadhan 1447 H`
    pub hijri_formatted: String,
    /// Present when events were requested
    pub events:          Option<Vec<IslamicEvent>>,
    /// Present when the Javanese date was requested
    pub jawa:            Option<JawaDate>,
    /// e.g. `Legi, 26 Rejeb 1959 AJ`
    pub jawa_formatted:  Option<String>,
}

impl AllCalendars {
    /// Event texts in the language of the Hijri conversion
    pub fn event_texts(&self) -> Vec<&'static str> {
        let language = self.hijri.language;
        self.events
            .iter()
            .flatten()
            .map(|event| event.text(language))
            .collect()
    }
}

fn hijri_formatted(hijri: &HijriConversion) -> String {
    format!("{} H", hijri.full_date())
}

impl<C: Clock> HijriConverter<C> {
    /// Events on a Gregorian day under the configured calendar.
    ///
    /// # Errors
    /// Returns `HijriError` when the calendar does not cover the date.
    pub fn events_on(&self, date: GregorianDate) -> Result<Vec<IslamicEvent>, HijriError> {
        let conversion = self.convert(date, self.options().calendar)?;
        Ok(events_for(&conversion.hijri))
    }

    /// Today's Hijri date together with its events.
    ///
    /// # Errors
    /// Returns `HijriError` when the calendar does not cover today.
    pub fn current_hijri_date_with_events(&self) -> Result<(HijriConversion, Vec<IslamicEvent>), HijriError> {
        let hijri = self.current_hijri_date()?;
        let events = events_for(&hijri.hijri);
        Ok((hijri, events))
    }

    /// Every calendar for one Gregorian day.
    ///
    /// Hijri and Javanese dates both describe `date`; no day-change rule is
    /// applied.
    ///
    /// # Errors
    /// Returns `HijriError` when the configured calendar does not cover the
    /// date.
    pub fn calendars_for(&self, date: GregorianDate) -> Result<AllCalendars, HijriError> {
        let options = self.options();
        let hijri = self.convert(date, options.calendar)?;
        Ok(self.compose(hijri.gregorian, hijri))
    }

    /// Every calendar for now.
    ///
    /// The Hijri date follows the configured day-change rule. The Javanese
    /// date and the Gregorian field follow the civil day, so after sunset
    /// they name the day before the Hijri date.
    ///
    /// # Errors
    /// Returns `HijriError` when the configured calendar does not cover
    /// today.
    pub fn all_calendars(&self) -> Result<AllCalendars, HijriError> {
        let today = self.current_date(true);
        let hijri = self.current_hijri_date().inspect_err(|err| {
            warn!(%today, error = %err, "hijri conversion failed");
        })?;
        Ok(self.compose(today, hijri))
    }

    fn compose(&self, gregorian: GregorianDate, hijri: HijriConversion) -> AllCalendars {
        let options = self.options();
        let language: Language = options.language;

        let events = options.include_events.then(|| events_for(&hijri.hijri));
        let jawa = options.include_jawa.then(|| resolve_jawa(gregorian));
        let jawa_formatted = jawa.map(|date| date.formatted(language));

        AllCalendars {
            gregorian,
            hijri_formatted: hijri_formatted(&hijri),
            hijri,
            events,
            jawa,
            jawa_formatted,
        }
    }
}
