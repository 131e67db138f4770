//! Raw and normalized observation records.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::borrow::Cow;

/// One field of a raw record as it comes out of a JSON or XML document.
///
/// Some document parsers wrap every scalar in a one-element sequence, so a field may be
/// a plain number, a text, or a sequence whose first element is the value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
    Many(Vec<RawField>),
}

impl Default for RawField {
    fn default() -> Self {
        RawField::Text(String::new())
    }
}

impl RawField {
    /// The scalar value, unwrapping a sequence to its first element.
    fn scalar(&self) -> Option<&RawField> {
        match self {
            RawField::Many(items) => items.first().and_then(RawField::scalar),
            scalar => Some(scalar),
        }
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        match self.scalar() {
            Some(RawField::Text(text)) => Cow::Borrowed(text.as_str()),
            Some(RawField::Number(n)) => Cow::Owned(n.to_string()),
            _ => Cow::Borrowed(""),
        }
    }

    /// Numeric value; text that is not a number yields `NaN`.
    pub fn as_number(&self) -> f64 {
        match self.scalar() {
            Some(RawField::Number(n)) => *n,
            Some(RawField::Text(text)) => text.trim().parse().unwrap_or(f64::NAN),
            _ => f64::NAN,
        }
    }
}

/// An observation as stored in the source documents: `date` as `dd/mm/yyyy`,
/// `time` as `hh:mm`, wind speed in m/s and solar radiation in W/m².
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub date: RawField,
    #[serde(default)]
    pub time: RawField,
    #[serde(default)]
    pub ws: RawField,
    #[serde(default)]
    pub sr: RawField,
}

impl RawRecord {
    pub fn new(date: &str, time: &str, ws: f64, sr: f64) -> Self {
        Self {
            date: RawField::Text(date.to_string()),
            time: RawField::Text(time.to_string()),
            ws: RawField::Number(ws),
            sr: RawField::Number(sr),
        }
    }
}

/// A parsed observation. Date and time parts are `None` when the fixed-width text did not
/// hold a number there; the measurements are `NaN` in the same situation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    /// m/s
    pub wind_speed: f64,
    /// W/m²
    pub solar_radiation: f64,
}

impl Observation {
    /// The observation time, if every date and time part is present and valid.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year?, self.month?, self.day?)?
            .and_hms_opt(self.hour?, self.minute?, 0)
    }
}
