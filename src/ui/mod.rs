//! Terminal presentation of diagnostic results
//!
//! Rendering returns plain `String`s so commands decide where output goes.
//! `console` drops the styling on its own when stdout is not a terminal.

pub mod display;

pub use display::{render_comparison, render_component, render_report};
