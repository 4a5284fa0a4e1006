//! Terminal output formatting
//!
//! Display utilities for the game screen, command results and the result file.

pub mod display;
pub mod formatters;
pub mod report;

pub use display::{print_check_result, print_solve_result};
pub use report::{format_report, write_report};
