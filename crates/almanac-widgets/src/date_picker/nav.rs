//! Month navigation for the calendar panel.

use super::config::WeekStart;
use chrono::{Datelike, NaiveDate};

/// The month currently shown by the calendar panel.
///
/// The month index is always `0..=11` and the year stays one year inside
/// chrono's date range, so the six-week grid around it is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    year: i32,
    month: u32,
    week_start: WeekStart,
}

impl ViewState {
    /// A view of `month` (zero-based, clamped to 11) in `year`.
    pub fn new(year: i32, month: u32, week_start: WeekStart) -> Self {
        Self {
            year: year.clamp(min_year(), max_year()),
            month: month.min(11),
            week_start,
        }
    }

    /// The view whose month contains `date`.
    pub fn containing(date: NaiveDate, week_start: WeekStart) -> Self {
        Self::new(date.year(), date.month0(), week_start)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based: January is 0, December is 11.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// First day of the viewed month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).unwrap_or(if self.year < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
    }

    /// Whether `date` falls in the viewed month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }

    /// The view `months` months away, saturating at the supported years.
    fn shifted(self, months: i64) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month) + months;
        let index = index.clamp(i64::from(min_year()) * 12, i64::from(max_year()) * 12 + 11);
        let year = i32::try_from(index.div_euclid(12)).unwrap_or(self.year);
        Self::new(year, index.rem_euclid(12) as u32, self.week_start)
    }
}

fn min_year() -> i32 {
    NaiveDate::MIN.year() + 1
}

fn max_year() -> i32 {
    NaiveDate::MAX.year() - 1
}

/// The following month; December wraps to January of the next year.
pub fn next_month(view: ViewState) -> ViewState {
    view.shifted(1)
}

/// The preceding month; January wraps to December of the previous year.
pub fn prev_month(view: ViewState) -> ViewState {
    view.shifted(-1)
}

/// The view of today's month, keeping the week-start convention.
pub fn today_view(view: ViewState, today: NaiveDate) -> ViewState {
    ViewState::containing(today, view.week_start)
}
