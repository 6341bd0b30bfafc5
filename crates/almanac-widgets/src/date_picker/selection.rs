//! Committed value and click sequencing.
//!
//! In single mode every accepted click commits. In range mode the first click
//! only opens a [`PendingRange`]; the second, distinct click commits the two
//! days ordered earliest first, whichever order they were clicked in.
//! Clicking the pending start again restarts the pending range instead of
//! committing a one-day range.

use super::config::SelectionMode;
use super::grid::{CalendarCell, Highlight};
use super::time::{merge_day, TimeOfDay};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// The picker's value, shaped by the selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerValue {
    Single(Option<NaiveDateTime>),
    Range {
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    },
}

impl PickerValue {
    /// The empty value for `mode`.
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => PickerValue::Single(None),
            SelectionMode::Range => PickerValue::Range {
                start: None,
                end: None,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            PickerValue::Single(dt) => dt.is_none(),
            PickerValue::Range { start, end } => start.is_none() && end.is_none(),
        }
    }

    /// The single date, if this is a single value holding one.
    pub fn single(&self) -> Option<NaiveDateTime> {
        match self {
            PickerValue::Single(dt) => *dt,
            PickerValue::Range { .. } => None,
        }
    }

    /// The range ends; `(None, None)` for a single value.
    pub fn range(&self) -> (Option<NaiveDateTime>, Option<NaiveDateTime>) {
        match self {
            PickerValue::Single(_) => (None, None),
            PickerValue::Range { start, end } => (*start, *end),
        }
    }

    /// The earliest date the value mentions, used to position the view.
    pub fn anchor(&self) -> Option<NaiveDateTime> {
        match self {
            PickerValue::Single(dt) => *dt,
            PickerValue::Range { start, end } => start.or(*end),
        }
    }

    /// Reorder range ends so that `start <= end`.
    fn normalized(self) -> Self {
        match self {
            PickerValue::Range {
                start: Some(start),
                end: Some(end),
            } if start > end => PickerValue::Range {
                start: Some(end),
                end: Some(start),
            },
            other => other,
        }
    }
}

/// A half-finished range: the first click of a range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl PendingRange {
    fn starting_at(day: NaiveDate) -> Self {
        Self {
            start: Some(day),
            end: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The cell was disabled; nothing changed.
    Ignored,
    /// A range was started or restarted; nothing was committed.
    Pending,
    /// The value changed to the carried one.
    Committed(PickerValue),
}

/// Owns the committed value and the pending range cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEngine {
    mode: SelectionMode,
    value: PickerValue,
    pending: PendingRange,
}

impl SelectionEngine {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            value: PickerValue::empty(mode),
            pending: PendingRange::default(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn value(&self) -> PickerValue {
        self.value
    }

    pub fn pending(&self) -> PendingRange {
        self.pending
    }

    /// Process a click on `cell`. In single mode the committed date-time is
    /// the cell's day at `time`; range ends are taken at midnight.
    pub fn select_day(&mut self, cell: &CalendarCell, time: TimeOfDay) -> Transition {
        if cell.is_disabled {
            return Transition::Ignored;
        }
        let clicked = cell.date;

        match self.mode {
            SelectionMode::Single => Transition::Committed(self.commit_single(merge_day(clicked, time))),
            SelectionMode::Range => match self.pending.start {
                Some(start) if self.pending.end.is_none() && start != clicked => {
                    let (start, end) = if clicked < start {
                        (clicked, start)
                    } else {
                        (start, clicked)
                    };
                    self.value = PickerValue::Range {
                        start: Some(start.and_time(NaiveTime::MIN)),
                        end: Some(end.and_time(NaiveTime::MIN)),
                    };
                    self.pending = PendingRange::default();
                    Transition::Committed(self.value)
                }
                // No range in progress, a finished one, or the same day again.
                _ => {
                    self.pending = PendingRange::starting_at(clicked);
                    Transition::Pending
                }
            },
        }
    }

    /// Replace the value with a single date-time and return the new value.
    /// In range mode this is a no-op returning the current value.
    pub fn commit_single(&mut self, date_time: NaiveDateTime) -> PickerValue {
        if self.mode == SelectionMode::Single {
            self.value = PickerValue::Single(Some(date_time));
        }
        self.value
    }

    /// Empty the value and the pending range; returns the new (empty) value.
    pub fn clear(&mut self) -> PickerValue {
        self.value = PickerValue::empty(self.mode);
        self.pending = PendingRange::default();
        self.value
    }

    /// Replace the value from the host's write path.
    ///
    /// The value is coerced to the engine's mode and range ends are ordered.
    /// Any pending range is discarded.
    pub fn set_value(&mut self, value: PickerValue) {
        let value = match (self.mode, value) {
            (SelectionMode::Single, PickerValue::Range { start, .. }) => PickerValue::Single(start),
            (SelectionMode::Range, PickerValue::Single(dt)) => PickerValue::Range { start: dt, end: None },
            (_, value) => value,
        };
        self.value = value.normalized();
        self.pending = PendingRange::default();
    }

    /// What the grid should mark. A pending range wins over the committed one.
    pub fn highlight(&self) -> Highlight {
        match self.value {
            PickerValue::Single(dt) => dt.map_or(Highlight::None, |dt| Highlight::Day(dt.date())),
            PickerValue::Range { start, end } => {
                if self.pending.start.is_some() {
                    Highlight::Range {
                        start: self.pending.start,
                        end: self.pending.end,
                    }
                } else {
                    Highlight::Range {
                        start: start.map(|dt| dt.date()),
                        end: end.map(|dt| dt.date()),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        ymd(y, m, d).and_time(NaiveTime::MIN)
    }

    fn cell(date: NaiveDate) -> CalendarCell {
        CalendarCell::plain(date)
    }

    fn disabled(date: NaiveDate) -> CalendarCell {
        CalendarCell {
            is_disabled: true,
            ..CalendarCell::plain(date)
        }
    }

    #[test]
    fn single_click_commits_with_time() {
        let mut engine = SelectionEngine::new(SelectionMode::Single);
        let transition = engine.select_day(&cell(ymd(2024, 6, 12)), TimeOfDay::new(9, 30));
        let expected = PickerValue::Single(Some(ymd(2024, 6, 12).and_hms_opt(9, 30, 0).unwrap()));
        assert_eq!(transition, Transition::Committed(expected));
        assert_eq!(engine.value(), expected);
    }

    #[test]
    fn range_first_click_is_pending() {
        let mut engine = SelectionEngine::new(SelectionMode::Range);
        let transition = engine.select_day(&cell(ymd(2024, 6, 20)), TimeOfDay::default());
        assert_eq!(transition, Transition::Pending);
        assert_eq!(engine.pending().start, Some(ymd(2024, 6, 20)));
        assert!(engine.value().is_empty());
    }

    #[test]
    fn range_swaps_on_reversal() {
        let mut engine = SelectionEngine::new(SelectionMode::Range);
        engine.select_day(&cell(ymd(2024, 6, 20)), TimeOfDay::default());
        let transition = engine.select_day(&cell(ymd(2024, 6, 15)), TimeOfDay::default());
        let expected = PickerValue::Range {
            start: Some(midnight(2024, 6, 15)),
            end: Some(midnight(2024, 6, 20)),
        };
        assert_eq!(transition, Transition::Committed(expected));
        assert!(engine.pending().is_empty());
    }

    #[test]
    fn range_order_is_independent_of_click_order() {
        let days = [ymd(2023, 12, 30), ymd(2024, 1, 2), ymd(2024, 2, 29), ymd(2024, 3, 1)];
        for &a in &days {
            for &b in &days {
                if a == b {
                    continue;
                }
                let mut engine = SelectionEngine::new(SelectionMode::Range);
                engine.select_day(&cell(a), TimeOfDay::default());
                engine.select_day(&cell(b), TimeOfDay::default());
                let (start, end) = engine.value().range();
                assert_eq!(start.map(|d| d.date()), Some(a.min(b)));
                assert_eq!(end.map(|d| d.date()), Some(a.max(b)));
            }
        }
    }

    #[test]
    fn same_day_twice_resets_pending() {
        let mut engine = SelectionEngine::new(SelectionMode::Range);
        engine.select_day(&cell(ymd(2024, 6, 10)), TimeOfDay::default());
        let transition = engine.select_day(&cell(ymd(2024, 6, 10)), TimeOfDay::default());
        assert_eq!(transition, Transition::Pending);
        assert_eq!(
            engine.pending(),
            PendingRange {
                start: Some(ymd(2024, 6, 10)),
                end: None,
            }
        );
        assert!(engine.value().is_empty());
    }

    #[test]
    fn third_click_starts_new_range() {
        let mut engine = SelectionEngine::new(SelectionMode::Range);
        engine.select_day(&cell(ymd(2024, 6, 1)), TimeOfDay::default());
        engine.select_day(&cell(ymd(2024, 6, 5)), TimeOfDay::default());
        let transition = engine.select_day(&cell(ymd(2024, 6, 9)), TimeOfDay::default());
        assert_eq!(transition, Transition::Pending);
        assert_eq!(engine.pending().start, Some(ymd(2024, 6, 9)));
        // The committed range stays until the new one completes.
        assert_eq!(engine.value().range().1, Some(midnight(2024, 6, 5)));
    }

    #[test]
    fn disabled_cell_changes_nothing() {
        let mut single = SelectionEngine::new(SelectionMode::Single);
        assert_eq!(
            single.select_day(&disabled(ymd(2024, 6, 1)), TimeOfDay::default()),
            Transition::Ignored
        );
        assert!(single.value().is_empty());

        let mut range = SelectionEngine::new(SelectionMode::Range);
        range.select_day(&cell(ymd(2024, 6, 1)), TimeOfDay::default());
        let before = range.clone();
        assert_eq!(
            range.select_day(&disabled(ymd(2024, 6, 3)), TimeOfDay::default()),
            Transition::Ignored
        );
        assert_eq!(range, before);
    }

    #[test]
    fn clear_empties_value_and_pending() {
        let mut engine = SelectionEngine::new(SelectionMode::Range);
        engine.select_day(&cell(ymd(2024, 6, 1)), TimeOfDay::default());
        engine.select_day(&cell(ymd(2024, 6, 2)), TimeOfDay::default());
        engine.select_day(&cell(ymd(2024, 6, 3)), TimeOfDay::default());
        assert_eq!(engine.clear(), PickerValue::Range { start: None, end: None });
        assert!(engine.pending().is_empty());
    }

    #[test]
    fn set_value_orders_and_coerces() {
        let mut engine = SelectionEngine::new(SelectionMode::Range);
        engine.set_value(PickerValue::Range {
            start: Some(midnight(2024, 6, 20)),
            end: Some(midnight(2024, 6, 15)),
        });
        assert_eq!(
            engine.value().range(),
            (Some(midnight(2024, 6, 15)), Some(midnight(2024, 6, 20)))
        );

        engine.set_value(PickerValue::Single(Some(midnight(2024, 1, 1))));
        assert_eq!(engine.value().range(), (Some(midnight(2024, 1, 1)), None));
    }

    #[test]
    fn highlight_prefers_pending() {
        let mut engine = SelectionEngine::new(SelectionMode::Range);
        engine.set_value(PickerValue::Range {
            start: Some(midnight(2024, 6, 1)),
            end: Some(midnight(2024, 6, 5)),
        });
        assert_eq!(
            engine.highlight(),
            Highlight::Range {
                start: Some(ymd(2024, 6, 1)),
                end: Some(ymd(2024, 6, 5)),
            }
        );

        engine.select_day(&cell(ymd(2024, 6, 9)), TimeOfDay::default());
        assert_eq!(
            engine.highlight(),
            Highlight::Range {
                start: Some(ymd(2024, 6, 9)),
                end: None,
            }
        );
    }

    #[test]
    fn commit_single_ignored_in_range_mode() {
        let mut engine = SelectionEngine::new(SelectionMode::Range);
        let value = engine.commit_single(midnight(2024, 6, 1));
        assert!(value.is_empty());
    }
}
