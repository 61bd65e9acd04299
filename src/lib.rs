//! Bagels & Birthday Paradox
//!
//! Two small console programs: the Bagels digit-deduction game and a Monte
//! Carlo demonstration of the Birthday Paradox.
//!
//! # Quick Start
//!
//! ```rust
//! use bagels_paradox::core::{Digits, compute_clues};
//! use bagels_paradox::simulation::run_simulation;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! // Clues for a guess
//! let secret = Digits::parse("248", 3).unwrap();
//! let guess = Digits::parse("843", 3).unwrap();
//! println!("{}", compute_clues(&guess, &secret));
//!
//! // Shared-birthday odds for 23 people
//! let mut rng = StdRng::seed_from_u64(7);
//! let report = run_simulation(23, 10_000, &mut rng, |_| {});
//! println!("{:.2} %", report.probability_percent());
//! ```

// Core domain types
pub mod core;

// Secret and birthday generation
pub mod generator;

// Duplicate detection and Monte Carlo runs
pub mod simulation;

// Interactive game loops
pub mod commands;

// Terminal output formatting
pub mod output;
