//! Tolerant conversion of host-supplied values into wall-clock date-times.
//!
//! Hosts hand the picker dates in whatever shape they have: a chrono value,
//! or text out of a form field or a config file. Parsing returns a typed
//! [`ParseError`], but every caller inside the picker downgrades that error
//! to `None`; a bad value never reaches the host as a failure.

use super::config::SelectionMode;
use super::selection::PickerValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Errors produced while interpreting a [`DateInput`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text was empty or whitespace only.
    #[error("empty date input")]
    Empty,
    /// No supported format matched.
    #[error("unrecognized date input {0:?}")]
    Unrecognized(String),
}

/// A single date as supplied by the host.
///
/// Deserializing never fails: quoted text, TOML's native date and date-time
/// values, and anything else are all accepted, and whatever cannot be read
/// as a date is dropped later when the picker parses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// A full wall-clock date-time.
    DateTime(NaiveDateTime),
    /// A calendar day; its time of day is midnight.
    Date(NaiveDate),
    /// Text to be parsed. See [`parse_date_time`] for the accepted shapes.
    Text(String),
}

impl DateInput {
    /// Interpret the input as a wall-clock date-time.
    pub fn to_date_time(&self) -> Result<NaiveDateTime, ParseError> {
        match self {
            DateInput::DateTime(dt) => Ok(*dt),
            DateInput::Date(date) => Ok(date.and_time(NaiveTime::MIN)),
            DateInput::Text(text) => parse_date_time(text),
        }
    }

    /// Like [`to_date_time`](Self::to_date_time), but logs and discards errors.
    pub fn to_date_time_lenient(&self) -> Option<NaiveDateTime> {
        match self.to_date_time() {
            Ok(dt) => Some(dt),
            Err(err) => {
                log::debug!("ignoring date input: {err}");
                None
            }
        }
    }
}

impl DateInput {
    fn from_text(text: String) -> Self {
        if let Ok(dt) = text.parse::<NaiveDateTime>() {
            DateInput::DateTime(dt)
        } else if let Ok(date) = text.parse::<NaiveDate>() {
            DateInput::Date(date)
        } else {
            DateInput::Text(text)
        }
    }

    /// Offsets are dropped like RFC 3339 offsets in text. A bare time of day
    /// has no date and is kept as text, which does not parse.
    fn from_toml(value: &toml::value::Datetime) -> Self {
        let date = value.date.and_then(|d| {
            NaiveDate::from_ymd_opt(i32::from(d.year), u32::from(d.month), u32::from(d.day))
        });
        let time = value.time.and_then(|t| {
            NaiveTime::from_hms_nano_opt(
                u32::from(t.hour),
                u32::from(t.minute),
                u32::from(t.second),
                t.nanosecond,
            )
        });
        match (date, time) {
            (Some(date), Some(time)) => DateInput::DateTime(date.and_time(time)),
            (Some(date), None) => DateInput::Date(date),
            (None, _) => DateInput::Text(value.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for DateInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Toml(toml::value::Datetime),
            Text(String),
            Other(toml::Value),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Toml(value) => DateInput::from_toml(&value),
            Raw::Text(text) => DateInput::from_text(text),
            Raw::Other(value) => DateInput::Text(value.to_string()),
        })
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::DateTime(dt)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

/// Parse text into a wall-clock date-time.
///
/// Accepted: ISO dates (`2024-06-10`, `2024/06/10`), ISO date-times with a
/// `T` or space separator and optional seconds/fraction, and RFC 3339 with an
/// offset. An offset is dropped, keeping the wall-clock reading as written.
pub fn parse_date_time(text: &str) -> Result<NaiveDateTime, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.naive_local());
    }

    let date_time = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok());
    if let Some(dt) = date_time {
        return Ok(dt);
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .map(|date| date.and_time(NaiveTime::MIN))
        .ok_or_else(|| ParseError::Unrecognized(text.to_string()))
}

/// A value written into the picker through the bound-value contract.
///
/// The shape does not have to match the picker's selection mode; see
/// [`value_from_input`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValueInput {
    /// No value.
    #[default]
    Null,
    /// One date.
    Single(DateInput),
    /// A range; either end may be missing.
    Range {
        start: Option<DateInput>,
        end: Option<DateInput>,
    },
}

impl ValueInput {
    /// Build a range input from anything convertible to [`DateInput`].
    pub fn range<S, E>(start: Option<S>, end: Option<E>) -> Self
    where
        S: Into<DateInput>,
        E: Into<DateInput>,
    {
        ValueInput::Range {
            start: start.map(Into::into),
            end: end.map(Into::into),
        }
    }
}

impl<T: Into<DateInput>> From<Option<T>> for ValueInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(ValueInput::Null, |v| ValueInput::Single(v.into()))
    }
}

impl From<NaiveDateTime> for ValueInput {
    fn from(dt: NaiveDateTime) -> Self {
        ValueInput::Single(dt.into())
    }
}

impl From<NaiveDate> for ValueInput {
    fn from(date: NaiveDate) -> Self {
        ValueInput::Single(date.into())
    }
}

impl From<&str> for ValueInput {
    fn from(text: &str) -> Self {
        ValueInput::Single(text.into())
    }
}

impl From<PickerValue> for ValueInput {
    fn from(value: PickerValue) -> Self {
        match value {
            PickerValue::Single(dt) => dt.into(),
            PickerValue::Range { start, end } => ValueInput::range(start, end),
        }
    }
}

/// Convert a written value into a [`PickerValue`] of the given mode.
///
/// Unparsable fields become `None`. A single date written into a range picker
/// becomes the range start; a range written into a single picker keeps its
/// start.
pub fn value_from_input(input: &ValueInput, mode: SelectionMode) -> PickerValue {
    let lenient = |input: &Option<DateInput>| input.as_ref().and_then(DateInput::to_date_time_lenient);

    match (mode, input) {
        (SelectionMode::Single, ValueInput::Null) => PickerValue::Single(None),
        (SelectionMode::Single, ValueInput::Single(date)) => {
            PickerValue::Single(date.to_date_time_lenient())
        }
        (SelectionMode::Single, ValueInput::Range { start, .. }) => PickerValue::Single(lenient(start)),
        (SelectionMode::Range, ValueInput::Null) => PickerValue::Range {
            start: None,
            end: None,
        },
        (SelectionMode::Range, ValueInput::Single(date)) => PickerValue::Range {
            start: date.to_date_time_lenient(),
            end: None,
        },
        (SelectionMode::Range, ValueInput::Range { start, end }) => PickerValue::Range {
            start: lenient(start),
            end: lenient(end),
        },
    }
}
