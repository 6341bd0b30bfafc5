//! Ready-made widgets for the **almanac** toolkit.
//!
//! Every widget in this crate implements [`almanac_core::Component`], so it
//! can be embedded in any host that drives components and composed freely
//! within [`ratatui`] layouts.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`date_picker`] | Date, time and date-range picker with a 6×7 calendar grid |

pub mod date_picker;
