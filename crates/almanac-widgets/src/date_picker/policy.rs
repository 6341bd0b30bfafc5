//! Which calendar days can be picked.

use super::config::{PickerConfig, PickerMode};
use super::parse::DateInput;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// The `"year-month-day"` key used for day-granular membership checks.
///
/// Month and day are 1-based and unpadded: 2024-06-09 becomes `"2024-6-9"`.
pub fn day_key(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// Day keys of explicitly disabled dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisabledDateSet {
    keys: HashSet<String>,
}

impl DisabledDateSet {
    /// Build the set from raw inputs. Entries that do not parse are dropped
    /// one by one; the rest still make it in.
    pub fn from_inputs<'a>(inputs: impl IntoIterator<Item = &'a DateInput>) -> Self {
        let keys = inputs
            .into_iter()
            .filter_map(DateInput::to_date_time_lenient)
            .map(|dt| day_key(dt.date()))
            .collect();
        Self { keys }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.keys.contains(&day_key(date))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<NaiveDate> for DisabledDateSet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            keys: iter.into_iter().map(day_key).collect(),
        }
    }
}

/// The parsed inputs of the disable rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatePolicy {
    pub mode: PickerMode,
    pub disable_weekends: bool,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub disabled: DisabledDateSet,
}

impl DatePolicy {
    /// Derive the policy from a config. Bounds that fail to parse are
    /// treated as absent.
    pub fn from_config(config: &PickerConfig) -> Self {
        Self {
            mode: config.mode,
            disable_weekends: config.disable_weekends,
            min_date: parse_bound(config.min_date.as_ref(), "min_date"),
            max_date: parse_bound(config.max_date.as_ref(), "max_date"),
            disabled: DisabledDateSet::from_inputs(&config.disabled_dates),
        }
    }

    /// Whether `date` cannot be picked.
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        is_disabled(date, self)
    }
}

/// Whether `date` cannot be picked under `policy`.
///
/// Time-only pickers have no calendar, so nothing is ever disabled there.
/// Otherwise a day is disabled when any rule matches: weekend, before the
/// minimum, after the maximum, or listed explicitly.
pub fn is_disabled(date: NaiveDate, policy: &DatePolicy) -> bool {
    if policy.mode == PickerMode::Time {
        return false;
    }

    let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
    (policy.disable_weekends && weekend)
        || policy.min_date.is_some_and(|min| date < min)
        || policy.max_date.is_some_and(|max| date > max)
        || policy.disabled.contains(date)
}

pub(crate) fn parse_bound(input: Option<&DateInput>, name: &str) -> Option<NaiveDate> {
    let input = input?;
    match input.to_date_time() {
        Ok(dt) => Some(dt.date()),
        Err(err) => {
            log::warn!("{name} ignored: {err}");
            None
        }
    }
}
