//! Date, time and date-range picker.
//!
//! The picker is split into small deterministic parts that the
//! [`DatePicker`] component wires together:
//!
//! | Module | Role |
//! |--------|------|
//! | [`policy`] | which days are disabled (weekends, bounds, explicit list) |
//! | [`grid`] | the 6×7 calendar grid for the viewed month |
//! | [`selection`] | committed value, pending range, click sequencing |
//! | [`time`] | hour/minute merging and minute-step options |
//! | [`nav`] | month navigation with year wraparound |
//! | [`format`] | locale-aware display string, month title and weekday labels |
//! | [`parse`] | tolerant parsing of host-supplied values |
//! | [`config`] | host options, loadable from TOML |
//!
//! The component never opens or closes itself. It emits
//! [`Message::OpenRequested`] / [`Message::CloseRequested`] and waits for the
//! host to answer with [`Message::Open`] / [`Message::Close`]. Every value
//! change is reported as [`Message::Committed`] and to the bound
//! [`ValueSink`], if any.
//!
//! # Example
//!
//! ```ignore
//! use almanac_widgets::date_picker::{DatePicker, PickerConfig, SelectionMode};
//!
//! let picker = DatePicker::new(
//!     PickerConfig::default()
//!         .with_selection_mode(SelectionMode::Range)
//!         .with_min_date("2024-06-10"),
//! );
//! ```

pub mod clock;
pub mod config;
pub mod format;
pub mod grid;
pub mod nav;
pub mod parse;
pub mod policy;
pub mod selection;
pub mod time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, DisplayFormat, PickerConfig, PickerMode, SelectionMode, WeekStart};
pub use grid::{CalendarCell, CalendarGrid, Highlight};
pub use nav::ViewState;
pub use parse::{DateInput, ParseError, ValueInput};
pub use policy::{DatePolicy, DisabledDateSet};
pub use selection::{PendingRange, PickerValue, SelectionEngine, Transition};
pub use time::TimeOfDay;

use almanac_core::binding::{Bindable, ValueSink};
use almanac_core::command::Command;
use almanac_core::component::Component;
use almanac_core::id::IdGenerator;
use chrono::{Days, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

/// Messages for the date picker.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A key press forwarded to the picker.
    KeyPress(KeyEvent),
    /// A day was clicked.
    SelectDay(NaiveDate),
    /// Show the following month.
    NextMonth,
    /// Show the preceding month.
    PrevMonth,
    /// Jump to today's month; in single mode also commits today.
    GoToToday,
    /// Set the hour of the time-of-day.
    ChangeHour(u32),
    /// Set the minute of the time-of-day.
    ChangeMinute(u32),
    /// Empty the value.
    Clear,
    /// The host made the panel visible.
    Open,
    /// The host hid the panel.
    Close,
    /// Emitted after every value change.
    Committed(PickerValue),
    /// Emitted when the picker wants its panel shown.
    OpenRequested,
    /// Emitted when the picker wants its panel hidden.
    CloseRequested,
}

/// Visual style configuration for the [`DatePicker`].
#[derive(Debug, Clone)]
pub struct DatePickerStyle {
    pub value: Style,
    pub placeholder: Style,
    pub header: Style,
    pub weekday: Style,
    pub day: Style,
    pub outside_month: Style,
    pub disabled: Style,
    pub today: Style,
    pub selected: Style,
    pub in_range: Style,
    /// Overlaid on the keyboard cursor while focused.
    pub cursor: Style,
    pub time: Style,
}

impl Default for DatePickerStyle {
    fn default() -> Self {
        Self {
            value: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            header: Style::default().add_modifier(Modifier::BOLD),
            weekday: Style::default().fg(Color::Yellow),
            day: Style::default(),
            outside_month: Style::default().fg(Color::DarkGray),
            disabled: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            today: Style::default().add_modifier(Modifier::UNDERLINED),
            selected: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            in_range: Style::default().fg(Color::Cyan),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            time: Style::default().fg(Color::Cyan),
        }
    }
}

/// A date / time / date-range picker component.
pub struct DatePicker {
    id: String,
    config: PickerConfig,
    policy: DatePolicy,
    engine: SelectionEngine,
    view_state: ViewState,
    time: TimeOfDay,
    grid: CalendarGrid,
    cursor: NaiveDate,
    open: bool,
    focus: bool,
    clock: Box<dyn Clock>,
    sink: Option<Box<dyn ValueSink<PickerValue>>>,
    style: DatePickerStyle,
    block: Option<Block<'static>>,
}

impl DatePicker {
    /// Create a picker reading "now" from the local wall clock.
    pub fn new(config: PickerConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create a picker reading "now" from `clock`.
    pub fn with_clock(config: PickerConfig, clock: impl Clock + 'static) -> Self {
        let today = clock.today();
        let view_state = ViewState::containing(today, config.week_start);
        let policy = DatePolicy::from_config(&config);
        let engine = SelectionEngine::new(config.selection_mode);
        let grid = grid::build(&view_state, &engine.highlight(), &policy, today);

        Self {
            id: "date-picker".to_string(),
            open: config.inline,
            config,
            policy,
            engine,
            view_state,
            time: TimeOfDay::default(),
            grid,
            cursor: today,
            focus: false,
            clock: Box::new(clock),
            sink: None,
            style: DatePickerStyle::default(),
            block: None,
        }
    }

    /// Take this instance's id from `ids`.
    pub fn with_id_from(mut self, ids: &mut dyn IdGenerator) -> Self {
        self.id = ids.next_id("date-picker");
        self
    }

    /// Report commits and touches to `sink`.
    pub fn with_sink(mut self, sink: impl ValueSink<PickerValue> + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Set the visual style.
    pub fn with_style(mut self, style: DatePickerStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the block (border/title container) around the picker.
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn policy(&self) -> &DatePolicy {
        &self.policy
    }

    pub fn pending(&self) -> PendingRange {
        self.engine.pending()
    }

    pub fn view_state(&self) -> ViewState {
        self.view_state
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time
    }

    /// The grid for the current view, rebuilt after every operation.
    pub fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    /// The day the keyboard cursor is on.
    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The formatted value; empty while there is no value.
    pub fn display_text(&self) -> String {
        format::format_value(&self.engine.value(), self.config.mode, &self.config.display_format)
    }

    pub fn minute_options(&self) -> Vec<u32> {
        time::minute_options(self.config.time_step_minutes)
    }

    pub fn hour_options(&self) -> Vec<u32> {
        time::hour_options()
    }

    /// Give the picker keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus and mark the bound value as touched.
    pub fn blur(&mut self) {
        if self.focus {
            self.focus = false;
            if let Some(sink) = self.sink.as_mut() {
                sink.on_touched();
            }
        }
    }

    /// Replace the disabled-dates list; unparsable entries are dropped.
    pub fn set_disabled_dates(&mut self, dates: Vec<DateInput>) {
        self.config.disabled_dates = dates;
        self.refresh_policy();
    }

    pub fn set_min_date(&mut self, date: Option<DateInput>) {
        self.config.min_date = date;
        self.refresh_policy();
    }

    pub fn set_max_date(&mut self, date: Option<DateInput>) {
        self.config.max_date = date;
        self.refresh_policy();
    }

    pub fn set_disable_weekends(&mut self, disable: bool) {
        self.config.disable_weekends = disable;
        self.refresh_policy();
    }

    /// Handle a click on `date`. Disabled days are ignored.
    pub fn select_day(&mut self, date: NaiveDate) -> Command<Message> {
        let cell = match self.grid.cell(date) {
            Some(cell) => *cell,
            None => {
                let today_key = policy::day_key(self.clock.today());
                grid::cell_for(date, &self.view_state, &self.engine.highlight(), &self.policy, &today_key)
            }
        };

        let transition = self.engine.select_day(&cell, self.time);
        if transition == Transition::Ignored {
            log::debug!("{}: ignored click on disabled day {date}", self.id);
            return Command::none();
        }

        self.cursor = date;
        self.rebuild();
        match transition {
            Transition::Committed(value) => Command::batch([self.commit(value), self.request_close()]),
            Transition::Pending | Transition::Ignored => Command::none(),
        }
    }

    pub fn next_month(&mut self) -> Command<Message> {
        self.show(nav::next_month(self.view_state));
        Command::none()
    }

    pub fn prev_month(&mut self) -> Command<Message> {
        self.show(nav::prev_month(self.view_state));
        Command::none()
    }

    /// Show today's month. A single-mode picker also commits today.
    pub fn go_to_today(&mut self) -> Command<Message> {
        let today = self.clock.today();
        self.view_state = nav::today_view(self.view_state, today);
        self.cursor = today;

        if self.engine.mode() == SelectionMode::Single {
            let value = self.engine.commit_single(time::merge_day(today, self.time));
            self.rebuild();
            return self.commit(value);
        }
        self.rebuild();
        Command::none()
    }

    pub fn change_hour(&mut self, hour: u32) -> Command<Message> {
        self.time = self.time.with_hour(hour);
        self.remerge_time()
    }

    pub fn change_minute(&mut self, minute: u32) -> Command<Message> {
        self.time = self.time.with_minute(minute);
        self.remerge_time()
    }

    /// Empty the value and the pending range and return to today's month.
    pub fn clear_selection(&mut self) -> Command<Message> {
        let value = self.engine.clear();
        let today = self.clock.today();
        self.view_state = nav::today_view(self.view_state, today);
        self.cursor = today;
        self.rebuild();
        self.commit(value)
    }

    fn remerge_time(&mut self) -> Command<Message> {
        if self.engine.mode() != SelectionMode::Single {
            return Command::none();
        }
        let base = match self.engine.value().single() {
            Some(existing) => existing,
            None if self.config.mode == PickerMode::Time => self.clock.now(),
            None => return Command::none(),
        };
        let value = self.engine.commit_single(time::merge_time(base, self.time));
        self.rebuild();
        self.commit(value)
    }

    fn commit(&mut self, value: PickerValue) -> Command<Message> {
        log::debug!("{}: committed {:?}", self.id, value);
        if let Some(sink) = self.sink.as_mut() {
            sink.on_change(&value);
        }
        Command::message(Message::Committed(value))
    }

    fn request_close(&self) -> Command<Message> {
        if self.config.auto_close && !self.config.inline {
            Command::message(Message::CloseRequested)
        } else {
            Command::none()
        }
    }

    fn show(&mut self, view: ViewState) {
        self.view_state = view;
        if !view.contains(self.cursor) {
            self.cursor = view.first_day();
        }
        self.rebuild();
    }

    fn move_cursor(&mut self, days: i64) {
        let step = Days::new(days.unsigned_abs());
        let moved = if days < 0 {
            self.cursor.checked_sub_days(step)
        } else {
            self.cursor.checked_add_days(step)
        };
        if let Some(cursor) = moved {
            self.cursor = cursor;
            if !self.view_state.contains(cursor) {
                self.view_state = ViewState::containing(cursor, self.view_state.week_start());
            }
            self.rebuild();
        }
    }

    fn step_minute(&mut self, forward: bool) -> Command<Message> {
        let options = self.minute_options();
        let minute = self.time.minute();
        let next = if forward {
            options.iter().copied().find(|&m| m > minute).unwrap_or(0)
        } else {
            options
                .iter()
                .copied()
                .rev()
                .find(|&m| m < minute)
                .or_else(|| options.last().copied())
                .unwrap_or(0)
        };
        self.change_minute(next)
    }

    fn refresh_policy(&mut self) {
        self.policy = DatePolicy::from_config(&self.config);
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.grid = grid::build(
            &self.view_state,
            &self.engine.highlight(),
            &self.policy,
            self.clock.today(),
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        if !self.open {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                    Command::message(Message::OpenRequested)
                }
                _ => Command::none(),
            };
        }

        match key.code {
            KeyCode::Esc if !self.config.inline => Command::message(Message::CloseRequested),
            KeyCode::Backspace | KeyCode::Delete => self.clear_selection(),
            KeyCode::Up if !self.config.mode.has_calendar() => {
                self.change_hour((self.time.hour() + 1) % 24)
            }
            KeyCode::Down if !self.config.mode.has_calendar() => {
                self.change_hour((self.time.hour() + 23) % 24)
            }
            KeyCode::Right if !self.config.mode.has_calendar() => self.step_minute(true),
            KeyCode::Left if !self.config.mode.has_calendar() => self.step_minute(false),
            _ if !self.config.mode.has_calendar() => Command::none(),
            KeyCode::Left => {
                self.move_cursor(-1);
                Command::none()
            }
            KeyCode::Right => {
                self.move_cursor(1);
                Command::none()
            }
            KeyCode::Up => {
                self.move_cursor(-7);
                Command::none()
            }
            KeyCode::Down => {
                self.move_cursor(7);
                Command::none()
            }
            KeyCode::PageUp => self.prev_month(),
            KeyCode::PageDown => self.next_month(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select_day(self.cursor),
            KeyCode::Char('t') => self.go_to_today(),
            _ => Command::none(),
        }
    }

    fn day_style(&self, cell: &CalendarCell) -> Style {
        let mut style = if cell.is_selected {
            self.style.selected
        } else if cell.is_in_range {
            self.style.in_range
        } else if cell.is_disabled {
            self.style.disabled
        } else if !cell.is_current_month {
            self.style.outside_month
        } else {
            self.style.day
        };
        if cell.is_today {
            style = style.patch(self.style.today);
        }
        if self.focus && cell.date == self.cursor {
            style = style.patch(self.style.cursor);
        }
        style
    }

    fn panel_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if self.config.mode.has_calendar() {
            let display = &self.config.display_format;
            let title = format::month_title(self.view_state.first_day(), display);
            lines.push(Line::from(vec![
                Span::raw("‹ "),
                Span::styled(format!("{title:^16}"), self.style.header),
                Span::raw(" ›"),
            ]));

            let header: Vec<Span<'static>> = format::weekday_labels(self.view_state.week_start(), display)
                .into_iter()
                .enumerate()
                .flat_map(|(i, label)| {
                    let sep = if i == 0 { "" } else { " " };
                    [Span::raw(sep), Span::styled(label, self.style.weekday)]
                })
                .collect();
            lines.push(Line::from(header));

            for row in self.grid.rows() {
                let spans: Vec<Span<'static>> = row
                    .iter()
                    .enumerate()
                    .flat_map(|(i, cell)| {
                        let sep = if i == 0 { "" } else { " " };
                        [
                            Span::raw(sep),
                            Span::styled(format!("{:>2}", cell.day_of_month), self.day_style(cell)),
                        ]
                    })
                    .collect();
                lines.push(Line::from(spans));
            }
        }

        if self.config.mode.has_time() {
            lines.push(Line::from(vec![
                Span::raw("Time "),
                Span::styled(
                    format!("{:02}:{:02}", self.time.hour(), self.time.minute()),
                    self.style.time,
                ),
            ]));
        }

        lines
    }
}

impl Bindable for DatePicker {
    type Input = ValueInput;
    type Value = PickerValue;

    fn write_value(&mut self, input: ValueInput) {
        let value = parse::value_from_input(&input, self.engine.mode());
        self.engine.set_value(value);
        let value = self.engine.value();

        if let Some(dt) = value.single() {
            self.time = TimeOfDay::from(dt);
        }
        if let Some(anchor) = value.anchor() {
            self.cursor = anchor.date();
            self.view_state = ViewState::containing(self.cursor, self.view_state.week_start());
        }
        log::debug!("{}: value written {:?}", self.id, value);
        self.rebuild();
    }

    fn value(&self) -> PickerValue {
        self.engine.value()
    }
}

impl Component for DatePicker {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => self.handle_key(key),
            Message::SelectDay(date) => self.select_day(date),
            Message::NextMonth => self.next_month(),
            Message::PrevMonth => self.prev_month(),
            Message::GoToToday => self.go_to_today(),
            Message::ChangeHour(hour) => self.change_hour(hour),
            Message::ChangeMinute(minute) => self.change_minute(minute),
            Message::Clear => self.clear_selection(),
            Message::Open => {
                self.open = true;
                Command::none()
            }
            Message::Close => {
                self.open = self.config.inline;
                Command::none()
            }
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            frame.render_widget(block.clone(), area);
            inner
        } else {
            area
        };

        if self.config.inline {
            frame.render_widget(Paragraph::new(self.panel_lines()), inner);
            return;
        }

        let text = self.display_text();
        let trigger = if text.is_empty() {
            Span::styled(self.config.placeholder_text().to_string(), self.style.placeholder)
        } else {
            Span::styled(text, self.style.value)
        };
        let arrow = if self.open { " ▾" } else { " ▸" };
        let trigger_area = Rect { height: 1, ..inner };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                trigger,
                Span::styled(arrow, self.style.placeholder),
            ])),
            trigger_area,
        );

        if self.open && inner.height > 1 {
            let panel = Rect {
                y: inner.y + 1,
                height: inner.height - 1,
                ..inner
            };
            frame.render_widget(Clear, panel);
            frame.render_widget(Paragraph::new(self.panel_lines()), panel);
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
