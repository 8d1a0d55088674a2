//! Router bit / guide bushing offset calculator.
//!
//! Everything here is pure: field texts go in, a [`DisplayState`] comes out.
//! The browser binding and the schematic renderer only apply it.

pub mod calc;
pub mod constants;
pub mod display;
pub mod format;
pub mod geometry;
pub mod i18n;
pub mod measurement;

pub use calc::{CalculationResult, Inputs, Outcome, calculate};
pub use display::{AppState, DisplayState, ResultTone, render, render_fields};
pub use geometry::Schematic;
pub use i18n::{LabelKey, Locale};
pub use measurement::parse_measurement;
