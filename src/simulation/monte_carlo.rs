//! Monte Carlo estimate of the shared-birthday probability

use super::find_match;
use crate::generator::sample_birthdays;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default number of trials per simulation
pub const DEFAULT_TRIALS: usize = 100_000;

/// Trials between progress callbacks
pub const PROGRESS_INTERVAL: usize = 10_000;

/// Result of a simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub sample_size: usize,
    pub trials: usize,
    /// Trials whose sample contained a shared birthday
    pub matches: usize,
    pub duration: Duration,
}

impl SimulationReport {
    /// Share of trials with a match, as a percentage rounded to 2 decimals
    ///
    /// Rounds the exact binary value once, half to even, so 0.125 becomes
    /// 0.12. Zero trials report 0.0.
    #[must_use]
    pub fn probability_percent(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let percent = self.matches as f64 / self.trials as f64 * 100.0;
        format!("{percent:.2}").parse().unwrap_or(percent)
    }
}

/// Run `trials` independent samples of `sample_size` birthdays
///
/// `on_progress(i)` is called before trial `i` whenever `i` is a non-zero
/// multiple of [`PROGRESS_INTERVAL`].
///
/// # Examples
/// ```
/// use bagels_paradox::simulation::run_simulation;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let report = run_simulation(1, 1_000, &mut rng, |_| {});
/// assert_eq!(report.matches, 0);
/// assert_eq!(report.probability_percent(), 0.0);
/// ```
pub fn run_simulation<R, F>(
    sample_size: usize,
    trials: usize,
    rng: &mut R,
    mut on_progress: F,
) -> SimulationReport
where
    R: Rng + ?Sized,
    F: FnMut(usize),
{
    let start = Instant::now();
    let mut matches = 0;

    for i in 0..trials {
        if i != 0 && i % PROGRESS_INTERVAL == 0 {
            on_progress(i);
        }

        let sample = sample_birthdays(sample_size, rng);
        if find_match(&sample).is_some() {
            matches += 1;
        }
    }

    let duration = start.elapsed();
    debug!(sample_size, trials, matches, ?duration, "simulation finished");

    SimulationReport {
        sample_size,
        trials,
        matches,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn report(matches: usize, trials: usize) -> SimulationReport {
        SimulationReport {
            sample_size: 23,
            trials,
            matches,
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn probability_rounds_to_two_decimals() {
        assert!((report(50_729, 100_000).probability_percent() - 50.73).abs() < 1e-9);
        assert!((report(1, 3).probability_percent() - 33.33).abs() < 1e-9);
        assert!((report(2, 3).probability_percent() - 66.67).abs() < 1e-9);
    }

    #[test]
    fn probability_rounds_once_like_decimal_formatting() {
        // 99.985 is stored just below the tie, 0.125 is an exact tie
        assert_eq!(
            format!("{:.2}", report(99_985, 100_000).probability_percent()),
            "99.98"
        );
        assert_eq!(format!("{:.2}", report(1, 800).probability_percent()), "0.12");
        assert_eq!(
            format!("{:.2}", report(125, 100_000).probability_percent()),
            "0.12"
        );
    }

    #[test]
    fn probability_bounds() {
        assert_eq!(report(0, 10).probability_percent(), 0.0);
        assert!((report(10, 10).probability_percent() - 100.0).abs() < f64::EPSILON);
        assert_eq!(report(0, 0).probability_percent(), 0.0);
    }

    #[test]
    fn progress_called_every_interval() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut calls = Vec::new();
        run_simulation(1, 35_000, &mut rng, |i| calls.push(i));
        assert_eq!(calls, vec![10_000, 20_000, 30_000]);
    }

    #[test]
    fn progress_not_called_at_final_trial_count() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut calls = Vec::new();
        run_simulation(1, 20_000, &mut rng, |i| calls.push(i));
        assert_eq!(calls, vec![10_000]);
    }

    #[test]
    fn single_person_never_matches() {
        let mut rng = StdRng::seed_from_u64(9);
        let report = run_simulation(1, 5_000, &mut rng, |_| {});
        assert_eq!(report.matches, 0);
        assert_eq!(report.trials, 5_000);
    }

    #[test]
    fn oversized_group_always_matches() {
        let mut rng = StdRng::seed_from_u64(9);
        let report = run_simulation(366, 200, &mut rng, |_| {});
        assert_eq!(report.matches, 200);
        assert!((report.probability_percent() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn twenty_three_people_near_half() {
        // Exact value is about 50.73%
        let mut rng = StdRng::seed_from_u64(2023);
        let report = run_simulation(23, 20_000, &mut rng, |_| {});
        let p = report.probability_percent();
        assert!((47.0..54.5).contains(&p), "got {p}");
    }

    #[test]
    fn probability_grows_with_group_size() {
        let mut rng = StdRng::seed_from_u64(77);
        let small = run_simulation(10, 10_000, &mut rng, |_| {}).probability_percent();
        let medium = run_simulation(30, 10_000, &mut rng, |_| {}).probability_percent();
        let large = run_simulation(60, 10_000, &mut rng, |_| {}).probability_percent();

        // ~11.7%, ~70.6%, ~99.4%
        assert!(small < medium, "{small} vs {medium}");
        assert!(medium < large, "{medium} vs {large}");
        assert!((0.0..=100.0).contains(&large));
    }

    #[test]
    fn deterministic_for_seed() {
        let a = run_simulation(20, 2_000, &mut StdRng::seed_from_u64(5), |_| {});
        let b = run_simulation(20, 2_000, &mut StdRng::seed_from_u64(5), |_| {});
        assert_eq!(a.matches, b.matches);
    }
}
