//! Core contracts for the **almanac** widget toolkit.
//!
//! `almanac-core` holds the small set of traits and types every widget in the
//! toolkit is built on. The design follows the [Elm Architecture]: a widget is
//! a [`Component`] whose `update` turns an input message into a state change
//! plus a [`Command`] of notifications, and whose `view` is a pure projection
//! of its state into a [`ratatui::layout::Rect`].
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Component`] | Update/view contract every widget implements |
//! | [`Command`] | Ordered notifications a widget hands back to its host |
//! | [`Bindable`] / [`ValueSink`] | Two-way value binding with a host form layer |
//! | [`IdGenerator`] | Injected source of per-instance widget ids |
//! | [`TestHarness`](testing::TestHarness) | Headless harness for unit-testing a component |
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod binding;
pub mod command;
pub mod component;
pub mod id;
pub mod testing;

pub use binding::{Bindable, RecordingSink, ValueSink};
pub use command::Command;
pub use component::Component;
pub use id::{IdGenerator, SequentialIds};
