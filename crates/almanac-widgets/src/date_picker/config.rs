//! Host-facing options for the date picker.

use super::parse::DateInput;
use chrono::Weekday;
use serde::Deserialize;

/// Which part of a date-time the picker edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerMode {
    /// Calendar day only.
    #[default]
    Date,
    /// Hour and minute only; date rules do not apply.
    Time,
    /// Calendar day plus hour and minute.
    DateTime,
}

impl PickerMode {
    /// Whether the calendar panel is shown in this mode.
    pub fn has_calendar(self) -> bool {
        !matches!(self, PickerMode::Time)
    }

    /// Whether the time row is shown in this mode.
    pub fn has_time(self) -> bool {
        !matches!(self, PickerMode::Date)
    }
}

/// Whether a click commits one date or builds a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Range,
}

/// First column of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Days after Sunday: 0 for Sunday, 1 for Monday.
    pub fn days_from_sunday(self) -> u32 {
        match self {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
        }
    }

    /// The weekday shown in the first grid column.
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

/// strftime patterns (chrono syntax) used for the display string, and the
/// locale for month and weekday names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayFormat {
    pub date: String,
    pub time: String,
    pub date_time: String,
    /// A locale name such as `"de_DE"`. Unknown names render as POSIX.
    pub locale: String,
}

impl DisplayFormat {
    pub const DEFAULT_DATE: &'static str = "%Y-%m-%d";
    pub const DEFAULT_TIME: &'static str = "%H:%M";
    pub const DEFAULT_DATE_TIME: &'static str = "%Y-%m-%d %H:%M";
    pub const DEFAULT_LOCALE: &'static str = "POSIX";
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            date: Self::DEFAULT_DATE.to_string(),
            time: Self::DEFAULT_TIME.to_string(),
            date_time: Self::DEFAULT_DATE_TIME.to_string(),
            locale: Self::DEFAULT_LOCALE.to_string(),
        }
    }
}

/// Errors from loading a [`PickerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML text could not be deserialized.
    #[error("invalid picker config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Every option a host can set on a [`DatePicker`](super::DatePicker).
///
/// Date bounds and disabled dates are kept in their raw form; the picker
/// parses them when it derives its policy, dropping whatever does not parse.
///
/// ```toml
/// mode = "datetime"
/// selection_mode = "range"
/// week_start = "monday"
/// min_date = "2024-06-10"
/// disabled_dates = ["2024-06-14", "2024-06-21"]
/// time_step_minutes = 15
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub mode: PickerMode,
    pub selection_mode: SelectionMode,
    pub min_date: Option<DateInput>,
    pub max_date: Option<DateInput>,
    pub disabled_dates: Vec<DateInput>,
    pub disable_weekends: bool,
    pub week_start: WeekStart,
    /// Request the panel to close after a commit from a day click.
    pub auto_close: bool,
    /// Render the panel permanently; never request open or close.
    pub inline: bool,
    /// Spacing of the minute options. Values below 1 are treated as 1.
    pub time_step_minutes: i64,
    pub display_format: DisplayFormat,
    /// Trigger text while the value is empty. `None` picks one per mode.
    pub placeholder: Option<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            mode: PickerMode::Date,
            selection_mode: SelectionMode::Single,
            min_date: None,
            max_date: None,
            disabled_dates: Vec::new(),
            disable_weekends: false,
            week_start: WeekStart::Sunday,
            auto_close: true,
            inline: false,
            time_step_minutes: 1,
            display_format: DisplayFormat::default(),
            placeholder: None,
        }
    }
}

impl PickerConfig {
    /// Load a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn with_mode(mut self, mode: PickerMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_selection_mode(mut self, selection_mode: SelectionMode) -> Self {
        self.selection_mode = selection_mode;
        self
    }

    pub fn with_min_date(mut self, date: impl Into<DateInput>) -> Self {
        self.min_date = Some(date.into());
        self
    }

    pub fn with_max_date(mut self, date: impl Into<DateInput>) -> Self {
        self.max_date = Some(date.into());
        self
    }

    pub fn with_disabled_dates<I, D>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<DateInput>,
    {
        self.disabled_dates = dates.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_disable_weekends(mut self, disable: bool) -> Self {
        self.disable_weekends = disable;
        self
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn with_auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = auto_close;
        self
    }

    pub fn with_inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    pub fn with_time_step_minutes(mut self, step: i64) -> Self {
        self.time_step_minutes = step;
        self
    }

    pub fn with_display_format(mut self, format: DisplayFormat) -> Self {
        self.display_format = format;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.display_format.locale = locale.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// The trigger text shown while the value is empty.
    pub fn placeholder_text(&self) -> &str {
        if let Some(placeholder) = &self.placeholder {
            return placeholder;
        }
        match (self.mode, self.selection_mode) {
            (PickerMode::Time, _) => "Select time",
            (_, SelectionMode::Range) => "Select range",
            (PickerMode::DateTime, SelectionMode::Single) => "Select date and time",
            (PickerMode::Date, SelectionMode::Single) => "Select date",
        }
    }
}
