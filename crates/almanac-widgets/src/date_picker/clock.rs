//! Wall-clock sources for "now".

use chrono::{NaiveDate, NaiveDateTime};

/// Source of "now" for the picker (today highlighting, go-to-today, clear).
pub trait Clock: Send {
    /// The current wall-clock date-time.
    fn now(&self) -> NaiveDateTime;

    /// The current calendar day.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// The machine's local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock stuck at one instant, for tests and previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// A clock reading midnight on `date`.
    pub fn on(date: NaiveDate) -> Self {
        FixedClock(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
