//! Birthday Paradox walkthrough
//!
//! One illustrative sample, then a Monte Carlo batch for the same group size.

use super::{CommandError, Console};
use crate::generator::sample_birthdays;
use crate::output::{
    format_birthday_list, format_count, print_birthday_intro, print_simulation_report,
    simulation_progress_bar,
};
use crate::simulation::{DEFAULT_TRIALS, SimulationReport, find_match, run_simulation};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::info;

/// Configuration for a Birthday Paradox run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayConfig {
    pub trials: usize,
    pub max_birthdays: usize,
}

impl BirthdayConfig {
    /// Create a configuration with the default group-size limit
    ///
    /// # Errors
    ///
    /// Returns an error if `trials` is zero.
    pub fn new(trials: usize) -> Result<Self, String> {
        if trials == 0 {
            return Err("At least one simulation trial is required".to_string());
        }
        Ok(Self {
            trials,
            ..Self::default()
        })
    }
}

impl Default for BirthdayConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            max_birthdays: 100,
        }
    }
}

/// Parse a group size typed by the user
///
/// Accepts only ASCII decimal digits with a value in `1..=max`.
///
/// # Examples
/// ```
/// use bagels_paradox::commands::parse_count;
///
/// assert_eq!(parse_count("23", 100), Some(23));
/// assert_eq!(parse_count("0", 100), None);
/// assert_eq!(parse_count("+5", 100), None);
/// ```
#[must_use]
pub fn parse_count(text: &str, max: usize) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<usize>()
        .ok()
        .filter(|n| (1..=max).contains(n))
}

/// Run the Birthday Paradox demonstration
///
/// `show_progress` draws an indicatif bar on stderr during the batch; the
/// textual progress lines are written either way.
///
/// # Errors
///
/// Returns an error if the console fails or input ends before a group size
/// is given.
pub fn run_birthday_paradox<R, W, G>(
    config: &BirthdayConfig,
    console: &mut Console<R, W>,
    rng: &mut G,
    show_progress: bool,
) -> Result<SimulationReport, CommandError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    print_birthday_intro(console.output())?;

    let count = loop {
        console.say(format_args!(
            "How many birthdays shall I generate? (Max {})",
            config.max_birthdays
        ))?;
        let line = console.ask()?;
        if let Some(n) = parse_count(&line, config.max_birthdays) {
            break n;
        }
        console.say(format_args!(
            "Please enter a whole number from 1 to {}.",
            config.max_birthdays
        ))?;
    };

    console.say(format_args!("Here are {count} birthdays:"))?;
    let birthdays = sample_birthdays(count, rng);
    console.say(format_birthday_list(&birthdays))?;
    console.say("")?;

    match find_match(&birthdays) {
        Some(day) => console.say(format_args!(
            "In this simulation, multiple people have a birthday on {day}."
        ))?,
        None => console.say("In this simulation, there are no matching birthdays.")?,
    }
    console.say("")?;

    let trials = format_count(config.trials);
    console.say(format_args!(
        "Generating {count} random birthdays {trials} times..."
    ))?;
    console.pause("Press Enter to begin...")?;
    console.say("")?;
    console.say(format_args!("Let's run another {trials} simulations."))?;

    info!(sample_size = count, trials = config.trials, "simulation started");

    let pb = simulation_progress_bar(config.trials, show_progress);
    let mut write_error = None;
    let report = run_simulation(count, config.trials, rng, |done| {
        pb.set_position(done as u64);
        if write_error.is_none()
            && let Err(e) = pb.suspend(|| {
                console.say(format_args!("{} simulations ran...", format_count(done)))
            })
        {
            write_error = Some(e);
        }
    });
    pb.finish_and_clear();

    if let Some(e) = write_error {
        return Err(e);
    }

    console.say(format_args!("{trials} simulations ran."))?;
    console.say("")?;
    print_simulation_report(console.output(), &report)?;

    info!(
        matches = report.matches,
        percent = report.probability_percent(),
        "simulation finished"
    );
    Ok(report)
}
