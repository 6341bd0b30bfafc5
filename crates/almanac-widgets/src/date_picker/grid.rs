//! The 6×7 calendar grid.
//!
//! The grid always spans six full weeks starting on the configured week-start
//! day, so short months are padded with days from their neighbours and the
//! panel height never changes between months.

use super::nav::ViewState;
use super::policy::{day_key, DatePolicy};
use chrono::{Datelike, Days, NaiveDate};

pub const GRID_ROWS: usize = 6;
pub const GRID_COLUMNS: usize = 7;

/// What the selection wants marked on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    /// One selected day (single mode).
    Day(NaiveDate),
    /// Range ends (range mode); either may be missing.
    Range {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

/// One day square of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub day_of_month: u32,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_disabled: bool,
    pub is_selected: bool,
    /// The day is the start or the end of the highlighted range.
    pub is_range_edge: bool,
    /// The day lies strictly between both range ends.
    pub is_in_range: bool,
}

impl CalendarCell {
    /// A cell for `date` with every flag cleared.
    pub(crate) fn plain(date: NaiveDate) -> Self {
        Self {
            date,
            day_of_month: date.day(),
            is_current_month: false,
            is_today: false,
            is_disabled: false,
            is_selected: false,
            is_range_edge: false,
            is_in_range: false,
        }
    }
}

/// Six weeks of cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    rows: [[CalendarCell; GRID_COLUMNS]; GRID_ROWS],
}

impl CalendarGrid {
    pub fn rows(&self) -> &[[CalendarCell; GRID_COLUMNS]; GRID_ROWS] {
        &self.rows
    }

    /// All 42 cells in display order.
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.rows.iter().flatten()
    }

    /// The cell showing `date`, if it is on the grid.
    pub fn cell(&self, date: NaiveDate) -> Option<&CalendarCell> {
        let first = self.rows[0][0].date;
        let offset = usize::try_from(date.signed_duration_since(first).num_days()).ok()?;
        self.rows
            .get(offset / GRID_COLUMNS)
            .map(|row| &row[offset % GRID_COLUMNS])
    }

    pub fn first_day(&self) -> NaiveDate {
        self.rows[0][0].date
    }

    pub fn last_day(&self) -> NaiveDate {
        self.rows[GRID_ROWS - 1][GRID_COLUMNS - 1].date
    }
}

/// The day in the top-left cell: the first of the month, backed up to the
/// week-start day.
pub fn grid_start(view: &ViewState) -> NaiveDate {
    let first = view.first_day();
    let weekday = first.weekday().num_days_from_sunday();
    let back = (weekday + 7 - view.week_start().days_from_sunday()) % 7;
    first.checked_sub_days(Days::new(u64::from(back))).unwrap_or(first)
}

/// Build the grid for `view`, marking today, disabled days and `highlight`.
///
/// [`ViewState`] keeps its year one inside chrono's range, so all 42 days
/// exist and the fallback below is never taken.
pub fn build(view: &ViewState, highlight: &Highlight, policy: &DatePolicy, today: NaiveDate) -> CalendarGrid {
    let start = grid_start(view);
    let today_key = day_key(today);
    let rows = std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            let offset = (row * GRID_COLUMNS + col) as u64;
            let date = start.checked_add_days(Days::new(offset)).unwrap_or(NaiveDate::MAX);
            cell_for(date, view, highlight, policy, &today_key)
        })
    });
    CalendarGrid { rows }
}

/// Build a single cell, also used for days that are not on the current grid.
pub(crate) fn cell_for(
    date: NaiveDate,
    view: &ViewState,
    highlight: &Highlight,
    policy: &DatePolicy,
    today_key: &str,
) -> CalendarCell {
    let (is_selected, is_range_edge, is_in_range) = match *highlight {
        Highlight::None => (false, false, false),
        Highlight::Day(day) => (day == date, false, false),
        Highlight::Range { start, end } => {
            let edge = start == Some(date) || end == Some(date);
            let inside = matches!((start, end), (Some(s), Some(e)) if s < date && date < e);
            (edge, edge, inside)
        }
    };

    CalendarCell {
        is_current_month: view.contains(date),
        is_today: day_key(date) == today_key,
        is_disabled: policy.is_disabled(date),
        is_selected,
        is_range_edge,
        is_in_range,
        ..CalendarCell::plain(date)
    }
}
