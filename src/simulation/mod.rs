//! Birthday Paradox simulation
//!
//! Duplicate detection plus the repeated-trial estimator built on it.

mod matcher;
mod monte_carlo;

pub use matcher::find_match;
pub use monte_carlo::{DEFAULT_TRIALS, PROGRESS_INTERVAL, SimulationReport, run_simulation};
