use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable widget that renders into a given [`Rect`] area.
///
/// Every widget in the toolkit follows the Elm Architecture: input arrives as
/// a `Message`, [`update`](Component::update) mutates state and reports
/// anything the host should know about as a [`Command`], and
/// [`view`](Component::view) is a pure projection of the current state.
///
/// # Composition pattern
///
/// To embed a `Component`, wrap its message type in a variant of the parent
/// message and use [`Command::map`] to translate commands:
///
/// ```rust,ignore
/// use almanac_core::{Component, Command};
/// use almanac_widgets::date_picker::{self, DatePicker};
///
/// struct Form { due: DatePicker }
///
/// enum FormMsg { Due(date_picker::Message) }
///
/// impl Form {
///     fn update(&mut self, msg: FormMsg) -> Command<FormMsg> {
///         match msg {
///             FormMsg::Due(date_picker::Message::CloseRequested) => {
///                 self.due.update(date_picker::Message::Close).map(FormMsg::Due)
///             }
///             FormMsg::Due(m) => self.due.update(m).map(FormMsg::Due),
///         }
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's message type.
    ///
    /// It carries both directions: input events delivered by the host and
    /// notifications the component emits back through [`Command`]s.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] carrying any
    /// notifications for the host.
    ///
    /// Implementations must finish every state change before returning; the
    /// host never observes a half-applied message.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// A parent can query `focused()` to decide which child should receive
    /// keyboard events. The default implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
