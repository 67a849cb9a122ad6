//! Shared pieces for the knightpath demo binaries: the text board renderer
//! and the exhaustive-sweep experiment driver.

mod render;
mod sweep;

pub use render::{legend, render};
pub use sweep::{SweepSummary, sweep_from};
