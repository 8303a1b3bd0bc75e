//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
pub mod render;

pub use display::{print_analysis_result, print_run_summary, print_solve_result};
pub use render::{AnsiRenderer, ColourRenderer, PlainRenderer};
