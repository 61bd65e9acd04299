//! Display functions for game text and results

use super::formatters::format_count;
use crate::core::ClueResult;
use crate::simulation::SimulationReport;
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// Print the Bagels title and rules
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn print_bagels_intro<W: Write>(out: &mut W, digits: usize) -> io::Result<()> {
    writeln!(out, "{}", "Bagels, a deductive logic game.".bright_cyan().bold())?;
    writeln!(out)?;
    writeln!(out, "There is a {digits}-digit number with no repeated digits.")?;
    writeln!(out, "Try to guess what it is.")?;
    writeln!(out)?;
    writeln!(out, "  Pico         One digit is correct but in the wrong position.")?;
    writeln!(out, "  Fermi        One digit is correct and in the right position.")?;
    writeln!(out, "  Bagels       No digit is correct.")?;
    writeln!(out)?;
    writeln!(out, "For example, if the secret number was 248 and your guess was 843, the")?;
    writeln!(out, "clues would be Fermi Pico.")?;
    writeln!(out)
}

/// Clue text colored by outcome
#[must_use]
pub fn styled_clues(result: &ClueResult) -> ColoredString {
    let text = result.to_string();
    match result {
        ClueResult::Correct => text.bright_green().bold(),
        ClueResult::Bagels => text.bright_black(),
        ClueResult::Clues(_) => text.yellow(),
    }
}

/// Print the Birthday Paradox title and explanation
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn print_birthday_intro<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Birthday Paradox.".bright_cyan().bold())?;
    writeln!(out)?;
    writeln!(out, "The birthday paradox shows us that in a group of N people, the odds")?;
    writeln!(out, "that two of them have matching birthdays is surprisingly large.")?;
    writeln!(out, "This program does a Monte Carlo simulation (that is, repeated random")?;
    writeln!(out, "simulations) to explore this concept.")?;
    writeln!(out)
}

/// Print the closing paragraph of a simulation run
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn print_simulation_report<W: Write>(out: &mut W, report: &SimulationReport) -> io::Result<()> {
    let trials = format_count(report.trials);
    let people = report.sample_size;
    let percent = format!("{:.2} %", report.probability_percent());

    writeln!(out, "Out of {trials} simulations of {people} people, there was a")?;
    writeln!(
        out,
        "matching birthday in that group {} times. This means",
        report.matches
    )?;
    writeln!(
        out,
        "that {people} people have a {} chance of",
        percent.bright_yellow().bold()
    )?;
    writeln!(out, "having a matching birthday in their group.")?;
    writeln!(
        out,
        "{}",
        format!("({:.2}s)", report.duration.as_secs_f64()).bright_black()
    )
}
