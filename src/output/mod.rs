//! Terminal output formatting
//!
//! Display utilities for game text and simulation results.

pub mod display;
pub mod formatters;

pub use display::{
    print_bagels_intro, print_birthday_intro, print_simulation_report, styled_clues,
};
pub use formatters::{format_birthday_list, format_count, simulation_progress_bar};
