//! Terminal output formatting
//!
//! Colored CLI printing, time formatting and the share summary.

pub mod display;
pub mod formatters;
pub mod share;

pub use display::{print_evaluation, print_schedule, print_today};
pub use share::{ShareStats, build_grid, build_summary_text, grid_to_verdicts};
