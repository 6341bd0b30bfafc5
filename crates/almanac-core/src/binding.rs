//! Two-way value binding between a widget and the host's form layer.
//!
//! A form system talks to a value-carrying widget through two small traits:
//!
//! * the widget implements [`Bindable`], so the host can push a value in
//!   ([`write_value`](Bindable::write_value)) and read the current one back;
//! * the host implements [`ValueSink`], so the widget can report every
//!   committed change and the moment it is first touched.
//!
//! How the host stores the value (callbacks, a channel, a shared cell) is up
//! to the sink implementation.

/// A widget whose value can be written by the host.
pub trait Bindable {
    /// What the host may write. Usually more permissive than [`Value`](Bindable::Value).
    type Input;
    /// What the widget reports back.
    type Value: Clone;

    /// Replace the current value without notifying any [`ValueSink`].
    ///
    /// Implementations must accept malformed input and degrade to an empty
    /// value instead of failing.
    fn write_value(&mut self, input: Self::Input);

    /// The current committed value.
    fn value(&self) -> Self::Value;
}

/// Receives notifications from a bound widget.
pub trait ValueSink<V>: Send {
    /// Called after every committed value change.
    fn on_change(&mut self, value: &V);

    /// Called when the user leaves the widget. The default does nothing.
    fn on_touched(&mut self) {}
}

impl<V, F> ValueSink<V> for F
where
    F: FnMut(&V) + Send,
{
    fn on_change(&mut self, value: &V) {
        self(value)
    }
}

/// A sink that records every change, handy in tests and simple hosts.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSink<V> {
    /// Every value received through [`ValueSink::on_change`], oldest first.
    pub changes: Vec<V>,
    /// How many times [`ValueSink::on_touched`] fired.
    pub touched: usize,
}

impl<V> Default for RecordingSink<V> {
    fn default() -> Self {
        Self {
            changes: Vec::new(),
            touched: 0,
        }
    }
}

impl<V: Clone + Send> ValueSink<V> for RecordingSink<V> {
    fn on_change(&mut self, value: &V) {
        self.changes.push(value.clone());
    }

    fn on_touched(&mut self) {
        self.touched += 1;
    }
}
