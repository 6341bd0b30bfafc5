use crate::command::Command;
use crate::component::Component;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Component`] without a real terminal.
///
/// `TestHarness` lets you exercise the update/view cycle of a widget in a
/// plain `#[test]` function. Messages emitted through [`Command`]s are
/// collected in an outbox; inspect them with
/// [`take_emitted`](TestHarness::take_emitted) or route them back into the
/// component with [`drain_messages`](TestHarness::drain_messages), the way a
/// host that simply echoes notifications would.
///
/// # Example
///
/// ```rust,ignore
/// use almanac_core::testing::TestHarness;
///
/// let mut harness = TestHarness::new(DatePicker::new(config));
/// harness.send(Message::NextMonth);
/// let emitted = harness.take_emitted();
/// let output = harness.render_string(30, 12);
/// assert!(output.contains("July 2024"));
/// ```
pub struct TestHarness<C: Component> {
    component: C,
    outbox: Vec<C::Message>,
}

impl<C: Component> TestHarness<C> {
    /// Wrap a component.
    pub fn new(component: C) -> Self {
        Self {
            component,
            outbox: Vec::new(),
        }
    }

    /// Send a message, triggering a single update.
    ///
    /// Messages emitted by the update are appended to the outbox.
    pub fn send(&mut self, msg: C::Message) {
        let cmd = self.component.update(msg);
        self.collect(cmd);
    }

    /// Send several messages in order.
    pub fn send_all(&mut self, msgs: impl IntoIterator<Item = C::Message>) {
        for msg in msgs {
            self.send(msg);
        }
    }

    /// Remove and return everything emitted so far, oldest first.
    pub fn take_emitted(&mut self) -> Vec<C::Message> {
        std::mem::take(&mut self.outbox)
    }

    /// Feed every emitted message back into the component until none remain.
    pub fn drain_messages(&mut self) {
        while !self.outbox.is_empty() {
            let messages: Vec<_> = self.outbox.drain(..).collect();
            for msg in messages {
                let cmd = self.component.update(msg);
                self.collect(cmd);
            }
        }
    }

    /// Get a shared reference to the component for assertions.
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Get a mutable reference to the component for direct test setup.
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Consume the harness, returning the component.
    pub fn into_inner(self) -> C {
        self.component
    }

    /// Render the component to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                self.component.view(frame, area);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the component and return the visible content as a plain string.
    ///
    /// Rows are separated by newlines; trailing whitespace is preserved.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                output.push_str(buf[(x, y)].symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn collect(&mut self, cmd: Command<C::Message>) {
        self.outbox.extend(cmd.into_messages());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;
    use ratatui::Frame;

    // A counter that reports when it crosses a threshold.
    struct Counter {
        count: i64,
        limit: i64,
    }

    #[derive(Debug, PartialEq)]
    enum CounterMsg {
        Increment,
        Reset,
        LimitReached(i64),
    }

    impl Component for Counter {
        type Message = CounterMsg;

        fn update(&mut self, msg: CounterMsg) -> Command<CounterMsg> {
            match msg {
                CounterMsg::Increment => {
                    self.count += 1;
                    if self.count == self.limit {
                        return Command::message(CounterMsg::LimitReached(self.count));
                    }
                    Command::none()
                }
                CounterMsg::Reset => {
                    self.count = 0;
                    Command::none()
                }
                CounterMsg::LimitReached(_) => Command::message(CounterMsg::Reset),
            }
        }

        fn view(&self, frame: &mut Frame, area: Rect) {
            frame.render_widget(Paragraph::new(format!("Count: {}", self.count)), area);
        }
    }

    fn counter(limit: i64) -> TestHarness<Counter> {
        TestHarness::new(Counter { count: 0, limit })
    }

    #[test]
    fn send_updates_component() {
        let mut harness = counter(10);
        harness.send_all([CounterMsg::Increment, CounterMsg::Increment]);
        assert_eq!(harness.component().count, 2);
        assert!(harness.take_emitted().is_empty());
    }

    #[test]
    fn emitted_messages_are_collected() {
        let mut harness = counter(2);
        harness.send(CounterMsg::Increment);
        harness.send(CounterMsg::Increment);
        assert_eq!(harness.take_emitted(), vec![CounterMsg::LimitReached(2)]);
        assert!(harness.take_emitted().is_empty());
    }

    #[test]
    fn drain_feeds_messages_back() {
        let mut harness = counter(1);
        harness.send(CounterMsg::Increment);
        harness.drain_messages();
        assert_eq!(harness.component().count, 0);
    }

    #[test]
    fn render_string_shows_state() {
        let mut harness = counter(10);
        harness.send(CounterMsg::Increment);
        let content = harness.render_string(20, 1);
        assert!(content.contains("Count: 1"));
    }
}
