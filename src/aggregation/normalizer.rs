use crate::types::observation::{Observation, RawRecord};
use std::ops::Range;
use std::str::FromStr;

const DAY: Range<usize> = 0..2;
const MONTH: Range<usize> = 3..5;
const YEAR_START: usize = 6;
const HOUR: Range<usize> = 0..2;
const MINUTE: Range<usize> = 3..5;

/// Parses a raw `dd/mm/yyyy` + `hh:mm` record into an [`Observation`].
///
/// There is no validation beyond numeric coercion: a date or time part that does not hold
/// a number becomes `None`, unparseable measurements become `NaN`.
pub fn normalize(record: &RawRecord) -> Observation {
    let date = record.date.as_text();
    let time = record.time.as_text();
    Observation {
        day: part(&date, DAY),
        month: part(&date, MONTH),
        year: part(&date, YEAR_START..date.len()),
        hour: part(&time, HOUR),
        minute: part(&time, MINUTE),
        wind_speed: record.ws.as_number(),
        solar_radiation: record.sr.as_number(),
    }
}

fn part<T: FromStr>(text: &str, range: Range<usize>) -> Option<T> {
    text.get(range)?.trim().parse().ok()
}
