//! Random value generation
//!
//! Every generator takes the RNG as a parameter so seeded runs are reproducible.

mod sampler;
mod secret;

pub use sampler::{random_birthday, sample_birthdays};
pub use secret::generate_secret;
