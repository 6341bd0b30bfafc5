//! **almanac** -- calendar and date-range picker widgets for [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything you need from a
//! single dependency:
//!
//! ```toml
//! [dependencies]
//! almanac = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`almanac_core`] are available at the crate root
//!   ([`Component`], [`Command`], [`Bindable`], [`ValueSink`], etc.).
//! * The [`widgets`] module re-exports everything from [`almanac_widgets`].
//! * [`ratatui`], [`crossterm`], and [`chrono`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use almanac::widgets::date_picker::{DatePicker, Message, PickerConfig, SelectionMode};
//! use almanac::Component;
//!
//! let mut picker = DatePicker::new(
//!     PickerConfig::default().with_selection_mode(SelectionMode::Range),
//! );
//!
//! // Forward input and react to what the picker reports.
//! for msg in picker.update(Message::NextMonth).into_messages() {
//!     match msg {
//!         Message::Committed(value) => println!("new value: {value:?}"),
//!         Message::OpenRequested => { picker.update(Message::Open); }
//!         Message::CloseRequested => { picker.update(Message::Close); }
//!         _ => {}
//!     }
//! }
//! ```

pub use almanac_core::*;
pub mod widgets {
    pub use almanac_widgets::*;
}

// Re-export dependencies for downstream crates
pub use chrono;
pub use crossterm;
pub use ratatui;
