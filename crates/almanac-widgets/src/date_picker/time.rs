//! Hour/minute handling.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// An hour and minute, independent of any date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Out-of-range parts are clamped to 23 and 59.
    pub fn new(hour: u32, minute: u32) -> Self {
        Self {
            hour: hour.min(23),
            minute: minute.min(59),
        }
    }

    pub fn hour(self) -> u32 {
        self.hour
    }

    pub fn minute(self) -> u32 {
        self.minute
    }

    pub fn with_hour(self, hour: u32) -> Self {
        Self::new(hour, self.minute)
    }

    pub fn with_minute(self, minute: u32) -> Self {
        Self::new(self.hour, minute)
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveDateTime> for TimeOfDay {
    fn from(dt: NaiveDateTime) -> Self {
        Self::new(dt.hour(), dt.minute())
    }
}

/// `date`'s calendar day at `time`, seconds and below zeroed.
pub fn merge_time(date: NaiveDateTime, time: TimeOfDay) -> NaiveDateTime {
    merge_day(date.date(), time)
}

/// `day` at `time`.
pub fn merge_day(day: NaiveDate, time: TimeOfDay) -> NaiveDateTime {
    day.and_time(time.to_naive_time())
}

/// Minute choices `0, step, 2*step, ...` below 60. A step below 1 is
/// treated as 1.
pub fn minute_options(step_minutes: i64) -> Vec<u32> {
    let step = step_minutes.clamp(1, 60) as usize;
    (0..60).step_by(step).collect()
}

/// Hour choices `0..=23`.
pub fn hour_options() -> Vec<u32> {
    (0..24).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 12)
            .unwrap()
            .and_hms_milli_opt(h, m, s, 250)
            .unwrap()
    }

    #[test]
    fn merge_replaces_time_and_zeroes_seconds() {
        let merged = merge_time(at(1, 2, 3), TimeOfDay::new(14, 30));
        assert_eq!(merged, NaiveDate::from_ymd_opt(2024, 6, 12).unwrap().and_hms_opt(14, 30, 0).unwrap());
    }

    #[test]
    fn merge_leaves_input_untouched() {
        let original = at(1, 2, 3);
        let _ = merge_time(original, TimeOfDay::new(9, 0));
        assert_eq!(original, at(1, 2, 3));
    }

    #[test]
    fn merge_is_idempotent() {
        let time = TimeOfDay::new(7, 45);
        let once = merge_time(at(23, 59, 59), time);
        assert_eq!(merge_time(once, time), once);
    }

    #[test]
    fn time_of_day_clamps() {
        let time = TimeOfDay::new(99, 75);
        assert_eq!((time.hour(), time.minute()), (23, 59));
        assert_eq!(time.with_hour(5).hour(), 5);
        assert_eq!(TimeOfDay::from(at(8, 15, 59)), TimeOfDay::new(8, 15));
    }

    #[test]
    fn minute_options_by_step() {
        assert_eq!(minute_options(15), vec![0, 15, 30, 45]);
        assert_eq!(minute_options(30), vec![0, 30]);
        assert_eq!(minute_options(7).last(), Some(&56));
    }

    #[test]
    fn degenerate_step_is_one() {
        assert_eq!(minute_options(0).len(), 60);
        assert_eq!(minute_options(-5).len(), 60);
        assert_eq!(minute_options(1)[59], 59);
    }

    #[test]
    fn oversized_step_keeps_zero() {
        assert_eq!(minute_options(90), vec![0]);
    }

    #[test]
    fn hours() {
        let hours = hour_options();
        assert_eq!(hours.len(), 24);
        assert_eq!(hours.first(), Some(&0));
        assert_eq!(hours.last(), Some(&23));
    }
}
