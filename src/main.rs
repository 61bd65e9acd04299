//! Bagels & Birthday Paradox - CLI
//!
//! Console front end for the Bagels deduction game and the Birthday Paradox
//! Monte Carlo simulation.

use anyhow::{Context, Result};
use bagels_paradox::commands::{
    BagelsConfig, BirthdayConfig, Console, run_bagels, run_birthday_paradox,
};
use bagels_paradox::simulation::DEFAULT_TRIALS;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, IsTerminal};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "bagels_paradox",
    about = "Bagels deduction game and Birthday Paradox Monte Carlo simulation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed the random number generator for a reproducible run
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play Bagels (default)
    Bagels {
        /// Number of digits in the secret (1-10)
        #[arg(short, long, default_value_t = 3)]
        digits: usize,

        /// Guesses allowed per round
        #[arg(short, long, default_value_t = 5)]
        max_guesses: u32,
    },

    /// Explore the Birthday Paradox
    Birthday {
        /// Number of Monte Carlo trials
        #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
        trials: usize,
    },
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Bagels { .. } => "bagels",
            Self::Birthday { .. } => "birthday",
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install log subscriber: {e}");
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!(seed, "using seeded RNG");
            StdRng::seed_from_u64(seed)
        }
        None => {
            info!("using OS-seeded RNG");
            StdRng::from_os_rng()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut rng = make_rng(cli.seed);

    // Default to Bagels if no command given
    let defaults = BagelsConfig::default();
    let command = cli.command.unwrap_or(Commands::Bagels {
        digits: defaults.digits,
        max_guesses: defaults.max_guesses,
    });

    info!(
        game = command.name(),
        seeded = cli.seed.is_some(),
        "session started"
    );

    match command {
        Commands::Bagels {
            digits,
            max_guesses,
        } => run_bagels_command(digits, max_guesses, &mut rng),
        Commands::Birthday { trials } => run_birthday_command(trials, &mut rng),
    }
}

fn run_bagels_command(digits: usize, max_guesses: u32, rng: &mut StdRng) -> Result<()> {
    let config = BagelsConfig::new(digits, max_guesses).map_err(|e| anyhow::anyhow!(e))?;
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    run_bagels(&config, &mut console, rng).context("Bagels session ended unexpectedly")?;
    Ok(())
}

fn run_birthday_command(trials: usize, rng: &mut StdRng) -> Result<()> {
    let config = BirthdayConfig::new(trials).map_err(|e| anyhow::anyhow!(e))?;
    let show_progress = io::stdout().is_terminal();
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    run_birthday_paradox(&config, &mut console, rng, show_progress)
        .context("Birthday Paradox run ended unexpectedly")?;
    Ok(())
}
