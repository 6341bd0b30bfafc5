//! Locale-aware text for the trigger line and the panel header.

use super::config::{DisplayFormat, PickerMode, WeekStart};
use super::selection::PickerValue;
use chrono::format::{DelayedFormat, StrftimeItems};
use chrono::{Days, Locale, NaiveDate, NaiveDateTime};
use std::fmt::Write;

pub const RANGE_SEPARATOR: &str = " → ";
pub const ELLIPSIS: &str = "...";
/// Pattern of the month title above the grid.
pub const MONTH_TITLE: &str = "%B %Y";

/// Look up a locale such as `"de_DE"`. Unknown names fall back to POSIX.
pub fn locale_for(name: &str) -> Locale {
    Locale::try_from(name).unwrap_or_else(|_| {
        log::warn!("unknown locale {name:?}, using POSIX");
        Locale::POSIX
    })
}

/// Render `value` for display. An empty value renders as `""`.
pub fn format_value(value: &PickerValue, mode: PickerMode, format: &DisplayFormat) -> String {
    match *value {
        PickerValue::Single(None) => String::new(),
        PickerValue::Single(Some(dt)) => format_date_time(dt, mode, format),
        PickerValue::Range { start: None, end: None } => String::new(),
        PickerValue::Range { start, end } => {
            let side = |dt: Option<NaiveDateTime>| {
                dt.map_or_else(|| ELLIPSIS.to_string(), |dt| format_date_time(dt, mode, format))
            };
            format!("{}{RANGE_SEPARATOR}{}", side(start), side(end))
        }
    }
}

/// Render one date-time with the pattern for `mode`.
///
/// A pattern chrono cannot render falls back to the default for that mode.
pub fn format_date_time(dt: NaiveDateTime, mode: PickerMode, format: &DisplayFormat) -> String {
    let (pattern, fallback) = match mode {
        PickerMode::Date => (&format.date, DisplayFormat::DEFAULT_DATE),
        PickerMode::Time => (&format.time, DisplayFormat::DEFAULT_TIME),
        PickerMode::DateTime => (&format.date_time, DisplayFormat::DEFAULT_DATE_TIME),
    };

    let locale = locale_for(&format.locale);
    render(dt, pattern, locale).unwrap_or_else(|| {
        log::warn!("display pattern {pattern:?} cannot be rendered, using {fallback:?}");
        render(dt, fallback, locale).unwrap_or_default()
    })
}

/// The month and year above the grid, e.g. `June 2024` or `Juni 2024`.
pub fn month_title(first_day: NaiveDate, format: &DisplayFormat) -> String {
    let dt = first_day.and_time(chrono::NaiveTime::MIN);
    render(dt, MONTH_TITLE, locale_for(&format.locale)).unwrap_or_default()
}

/// Two-letter weekday labels in grid column order.
pub fn weekday_labels(week_start: WeekStart, format: &DisplayFormat) -> [String; 7] {
    let locale = locale_for(&format.locale);
    // 1970-01-04 is a Sunday.
    let sunday = NaiveDate::default() + Days::new(3);
    std::array::from_fn(|column| {
        let offset = u64::from(week_start.days_from_sunday()) + column as u64;
        let day = sunday + Days::new(offset);
        render(day.and_time(chrono::NaiveTime::MIN), "%a", locale)
            .unwrap_or_default()
            .chars()
            .take(2)
            .collect()
    })
}

fn render(dt: NaiveDateTime, pattern: &str, locale: Locale) -> Option<String> {
    let items = StrftimeItems::new_with_locale(pattern, locale);
    let formatted = DelayedFormat::new_with_locale(Some(dt.date()), Some(dt.time()), items, locale);
    let mut out = String::new();
    write!(out, "{formatted}").ok()?;
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    fn fmt(value: PickerValue, mode: PickerMode) -> String {
        format_value(&value, mode, &DisplayFormat::default())
    }

    #[test]
    fn single_modes() {
        let value = PickerValue::Single(Some(at(2024, 6, 9, 7, 5)));
        assert_eq!(fmt(value, PickerMode::Date), "2024-06-09");
        assert_eq!(fmt(value, PickerMode::Time), "07:05");
        assert_eq!(fmt(value, PickerMode::DateTime), "2024-06-09 07:05");
    }

    #[test]
    fn empty_values_are_blank() {
        assert_eq!(fmt(PickerValue::Single(None), PickerMode::Date), "");
        assert_eq!(
            fmt(PickerValue::Range { start: None, end: None }, PickerMode::Date),
            ""
        );
    }

    #[test]
    fn half_range_uses_ellipsis() {
        let text = fmt(
            PickerValue::Range {
                start: Some(at(2024, 6, 15, 0, 0)),
                end: None,
            },
            PickerMode::Date,
        );
        assert_eq!(text, "2024-06-15 → ...");
        assert!(text.contains(ELLIPSIS));
        assert!(text.contains('→'));
    }

    #[test]
    fn full_range_has_no_ellipsis() {
        let text = fmt(
            PickerValue::Range {
                start: Some(at(2024, 6, 15, 0, 0)),
                end: Some(at(2024, 6, 20, 0, 0)),
            },
            PickerMode::Date,
        );
        assert_eq!(text, "2024-06-15 → 2024-06-20");
        assert!(!text.contains(ELLIPSIS));
    }

    #[test]
    fn custom_pattern() {
        let format = DisplayFormat {
            date: "%d %b %Y".into(),
            ..DisplayFormat::default()
        };
        let value = PickerValue::Single(Some(at(2024, 6, 9, 0, 0)));
        assert_eq!(format_value(&value, PickerMode::Date, &format), "09 Jun 2024");
    }

    #[test]
    fn unrenderable_pattern_falls_back() {
        // A naive date-time has no offset to print.
        let format = DisplayFormat {
            date: "%Y-%m-%d %z".into(),
            ..DisplayFormat::default()
        };
        let value = PickerValue::Single(Some(at(2024, 6, 9, 0, 0)));
        assert_eq!(format_value(&value, PickerMode::Date, &format), "2024-06-09");
    }

    #[test]
    fn localized_month_names() {
        let german = DisplayFormat {
            date: "%d. %B %Y".into(),
            locale: "de_DE".into(),
            ..DisplayFormat::default()
        };
        let value = PickerValue::Single(Some(at(2024, 3, 9, 0, 0)));
        assert_eq!(format_value(&value, PickerMode::Date, &german), "09. März 2024");

        let june = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(month_title(june, &german), "Juni 2024");
        assert_eq!(month_title(june, &DisplayFormat::default()), "June 2024");
    }

    #[test]
    fn weekday_labels_follow_locale_and_week_start() {
        let posix = weekday_labels(WeekStart::Sunday, &DisplayFormat::default());
        assert_eq!(posix.join(" "), "Su Mo Tu We Th Fr Sa");

        let german = DisplayFormat {
            locale: "de_DE".into(),
            ..DisplayFormat::default()
        };
        assert_eq!(weekday_labels(WeekStart::Monday, &german).join(" "), "Mo Di Mi Do Fr Sa So");
    }

    #[test]
    fn unknown_locale_falls_back_to_posix() {
        assert_eq!(locale_for("xx_YY"), Locale::POSIX);
        let format = DisplayFormat {
            date: "%B".into(),
            locale: "xx_YY".into(),
            ..DisplayFormat::default()
        };
        let value = PickerValue::Single(Some(at(2024, 6, 9, 0, 0)));
        assert_eq!(format_value(&value, PickerMode::Date, &format), "June");
    }
}
