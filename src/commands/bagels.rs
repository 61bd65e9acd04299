//! Bagels game loop
//!
//! Rounds of guess-and-clue until the player declines another round.

use super::{CommandError, Console};
use crate::core::{DIGIT_SYMBOLS, Digits, compute_clues};
use crate::generator::generate_secret;
use crate::output::{print_bagels_intro, styled_clues};
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info, trace};

/// Configuration for a Bagels session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BagelsConfig {
    pub digits: usize,
    pub max_guesses: u32,
}

impl BagelsConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `digits` is outside 1-10 or `max_guesses` is zero.
    pub fn new(digits: usize, max_guesses: u32) -> Result<Self, String> {
        if !(1..=DIGIT_SYMBOLS).contains(&digits) {
            return Err(format!(
                "Digit count must be between 1 and {DIGIT_SYMBOLS}, got {digits}"
            ));
        }
        if max_guesses == 0 {
            return Err("At least one guess is required".to_string());
        }
        Ok(Self {
            digits,
            max_guesses,
        })
    }
}

impl Default for BagelsConfig {
    fn default() -> Self {
        Self {
            digits: 3,
            max_guesses: 5,
        }
    }
}

/// Tally of a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds: u32,
    pub wins: u32,
}

/// Play Bagels until the player stops
///
/// # Errors
///
/// Returns an error if the console fails, if input ends while a guess is
/// expected, or if the configured digit count cannot form a secret.
pub fn run_bagels<R, W, G>(
    config: &BagelsConfig,
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<SessionStats, CommandError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    print_bagels_intro(console.output(), config.digits)?;

    let mut stats = SessionStats::default();

    loop {
        let secret = generate_secret(config.digits, rng)?;
        stats.rounds += 1;
        debug!(round = stats.rounds, "round started");
        trace!(%secret, "secret drawn");

        console.say(format_args!(
            "You have {} guesses to get it.",
            config.max_guesses
        ))?;

        if play_round(config, console, &secret)? {
            stats.wins += 1;
            debug!(round = stats.rounds, "round won");
        } else {
            console.say("Game over. You ran out of guesses.".red())?;
            console.say(format_args!("The answer was {secret}."))?;
            debug!(round = stats.rounds, "round lost");
        }

        console.say(
            "Do you want to play again? (input \"y\" to continue, anything else to exit)",
        )?;
        if console.read_line()?.as_deref() != Some("y") {
            break;
        }
    }

    console.say("Thanks for playing!")?;
    info!(rounds = stats.rounds, wins = stats.wins, "bagels session finished");
    Ok(stats)
}

/// Run one round; returns true when the secret was guessed
fn play_round<R: BufRead, W: Write>(
    config: &BagelsConfig,
    console: &mut Console<R, W>,
    secret: &Digits,
) -> Result<bool, CommandError> {
    for attempt in 1..=config.max_guesses {
        console.say(format_args!("Guess #{attempt}: "))?;

        let guess = loop {
            let line = console.ask()?;
            match Digits::parse(&line, config.digits) {
                Ok(guess) => break guess,
                Err(e) => {
                    debug!(input = %line, error = %e, "rejected guess");
                    console.say("Invalid input. Try again.")?;
                    console.say(format_args!("Guess #{attempt}: "))?;
                }
            }
        };

        let clues = compute_clues(&guess, secret);
        debug!(
            attempt,
            fermi = clues.count_fermi(config.digits),
            pico = clues.count_pico(),
            "guess scored"
        );
        console.say(styled_clues(&clues))?;

        if clues.is_correct() {
            return Ok(true);
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::console::PROMPT;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    const SEED: u64 = 2024;

    fn secret_for_seed(seed: u64, digits: usize) -> String {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_secret(digits, &mut rng).unwrap().text().to_string()
    }

    /// A guess that differs from `secret` but is still well-formed
    fn wrong_guess(secret: &str) -> String {
        let mut bytes = secret.as_bytes().to_vec();
        bytes[0] = if bytes[0] == b'9' { b'0' } else { bytes[0] + 1 };
        String::from_utf8(bytes).unwrap()
    }

    fn play(config: BagelsConfig, input: &str) -> (Result<SessionStats, CommandError>, String) {
        colored::control::set_override(false);
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut rng = StdRng::seed_from_u64(SEED);
        let result = run_bagels(&config, &mut console, &mut rng);
        let output = String::from_utf8(console.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn config_validation() {
        assert!(BagelsConfig::new(3, 5).is_ok());
        assert!(BagelsConfig::new(10, 1).is_ok());
        assert!(BagelsConfig::new(0, 5).is_err());
        assert!(BagelsConfig::new(11, 5).is_err());
        assert!(BagelsConfig::new(3, 0).is_err());
        assert_eq!(BagelsConfig::default(), BagelsConfig::new(3, 5).unwrap());
    }

    #[test]
    fn correct_first_guess_wins() {
        let secret = secret_for_seed(SEED, 3);
        let (result, out) = play(BagelsConfig::default(), &format!("{secret}\nn\n"));

        assert_eq!(result.unwrap(), SessionStats { rounds: 1, wins: 1 });
        assert!(out.contains("Bagels, a deductive logic game."));
        assert!(out.contains("You have 5 guesses to get it."));
        assert!(out.contains("Guess #1: "));
        assert!(out.contains("You got it!"));
        assert!(!out.contains("Guess #2: "));
        assert!(out.trim_end().ends_with("Thanks for playing!"));
    }

    #[test]
    fn invalid_guesses_reprompt_same_number() {
        let secret = secret_for_seed(SEED, 3);
        let input = format!("12\nabc\n1234\n{secret}\nn\n");
        let (result, out) = play(BagelsConfig::default(), &input);

        assert_eq!(result.unwrap().wins, 1);
        assert_eq!(out.matches("Invalid input. Try again.").count(), 3);
        assert_eq!(out.matches("Guess #1: ").count(), 4);
        assert!(!out.contains("Guess #2: "));
    }

    #[test]
    fn running_out_reveals_answer() {
        let secret = secret_for_seed(SEED, 3);
        let wrong = wrong_guess(&secret);
        let config = BagelsConfig::new(3, 2).unwrap();
        let (result, out) = play(config, &format!("{wrong}\n{wrong}\nno\n"));

        assert_eq!(result.unwrap(), SessionStats { rounds: 1, wins: 0 });
        assert!(out.contains("Guess #2: "));
        assert!(!out.contains("Guess #3: "));
        assert!(out.contains("Game over. You ran out of guesses."));
        assert!(out.contains(&format!("The answer was {secret}.")));
    }

    #[test]
    fn clue_line_printed_for_wrong_guess() {
        let secret = secret_for_seed(SEED, 3);
        let wrong = wrong_guess(&secret);
        let expected = compute_clues(
            &Digits::parse(&wrong, 3).unwrap(),
            &Digits::parse(&secret, 3).unwrap(),
        )
        .to_string();
        let config = BagelsConfig::new(3, 1).unwrap();
        let (_, out) = play(config, &format!("{wrong}\n\n"));

        // The clue line follows the unechoed guess, so it shares a line with the prompt
        assert!(
            out.lines()
                .any(|line| line.trim_start_matches(PROMPT) == expected),
            "missing {expected}"
        );
    }

    #[test]
    fn play_again_only_on_lowercase_y() {
        let secret = secret_for_seed(SEED, 3);
        let (result, out) = play(BagelsConfig::default(), &format!("{secret}\nY\n"));

        assert_eq!(result.unwrap().rounds, 1);
        assert_eq!(out.matches("Do you want to play again?").count(), 1);
    }

    #[test]
    fn y_starts_another_round() {
        let first = secret_for_seed(SEED, 3);
        let config = BagelsConfig::new(3, 1).unwrap();
        let wrong = wrong_guess(&first);
        // 000 never matches a repeat-free secret
        let (result, out) = play(config, &format!("{wrong}\ny\n000\nn\n"));

        let stats = result.unwrap();
        assert_eq!(stats.rounds, 2);
        assert_eq!(out.matches("You have 1 guesses to get it.").count(), 2);
        assert_eq!(out.matches("Thanks for playing!").count(), 1);
    }

    #[test]
    fn end_of_input_at_play_again_exits_cleanly() {
        let secret = secret_for_seed(SEED, 3);
        let (result, out) = play(BagelsConfig::default(), &format!("{secret}\n"));

        assert!(result.is_ok());
        assert!(out.contains("Thanks for playing!"));
    }

    #[test]
    fn end_of_input_mid_round_is_an_error() {
        let (result, _) = play(BagelsConfig::default(), "12\n");
        assert!(matches!(result, Err(CommandError::InputClosed)));
    }

    #[test]
    fn four_digit_game() {
        let secret = secret_for_seed(SEED, 4);
        let config = BagelsConfig::new(4, 5).unwrap();
        let (result, out) = play(config, &format!("123\n{secret}\nn\n"));

        assert_eq!(result.unwrap().wins, 1);
        assert!(out.contains("There is a 4-digit number"));
        assert!(out.contains("Invalid input. Try again."));
    }
}
