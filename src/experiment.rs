//! Experiment orchestration.
//!
//! Runs a batch of independent trials against one decay rule, sharing a
//! single sequential RNG stream. A fixed seed reproduces the whole
//! experiment, including the aggregator's trial sampling.

use crate::constants::DEFAULT_POPULATION;
use crate::rules::DecayRule;
use crate::trial::{run_trial, TrialResult};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::error::Error;
use std::fmt;

/// Configuration for one experiment run.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Which die values decay.
    pub rule: DecayRule,

    /// Number of trials to run.
    pub trials: i64,

    /// Dice per trial at round 0.
    pub initial_population: u32,

    /// Random seed for reproducibility (None = entropy).
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-trial lines).
    pub verbosity: u8,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            rule: DecayRule::OddEven,
            trials: 1,
            initial_population: DEFAULT_POPULATION,
            seed: None,
            verbosity: 0,
        }
    }
}

/// All curves from one experiment run, in trial order. Owned by the caller
/// for the duration of the run and dropped after rendering.
#[derive(Debug, Clone)]
pub struct ExperimentResult {
    pub trials: Vec<TrialResult>,
}

impl ExperimentResult {
    /// The decay curves alone, in trial order.
    pub fn curves(&self) -> Vec<Vec<f64>> {
        self.trials.iter().map(|t| t.curve.clone()).collect()
    }
}

/// Experiment-level input errors. Recoverable: the caller re-prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExperimentError {
    /// Trial count was zero or negative.
    InvalidTrialCount(i64),
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperimentError::InvalidTrialCount(n) => {
                write!(f, "trial count must be positive, got {}", n)
            }
        }
    }
}

impl Error for ExperimentError {}

/// Build the RNG for an experiment stream.
///
/// `stream` offsets the seed so that independent consumers (trial rolls,
/// aggregate sampling) stay deterministic under one user-facing seed without
/// sharing a stream position.
pub fn rng_for(seed: Option<u64>, stream: u64) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(stream)),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Run every trial of an experiment, in sequence, collecting curves in
/// trial order.
pub fn run_experiment(config: &ExperimentConfig) -> Result<ExperimentResult, ExperimentError> {
    if config.trials <= 0 {
        return Err(ExperimentError::InvalidTrialCount(config.trials));
    }

    let mut rng = rng_for(config.seed, 0);
    let mut trials = Vec::with_capacity(config.trials as usize);

    for trial_num in 1..=config.trials {
        let result = run_trial(&mut rng, config.rule, config.initial_population);

        if config.verbosity >= 2 {
            println!(
                "Trial {}/{} - {} rounds to exhaustion",
                trial_num,
                config.trials,
                result.rounds_to_exhaustion()
            );
        }

        trials.push(result);
    }

    Ok(ExperimentResult { trials })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_trials() {
        let config = ExperimentConfig {
            trials: 0,
            ..Default::default()
        };
        assert!(matches!(
            run_experiment(&config),
            Err(ExperimentError::InvalidTrialCount(0))
        ));
    }

    #[test]
    fn test_rejects_negative_trials() {
        let config = ExperimentConfig {
            trials: -3,
            ..Default::default()
        };
        assert!(matches!(
            run_experiment(&config),
            Err(ExperimentError::InvalidTrialCount(-3))
        ));
    }

    #[test]
    fn test_runs_requested_trial_count() {
        let config = ExperimentConfig {
            trials: 5,
            seed: Some(42),
            ..Default::default()
        };
        let result = run_experiment(&config).unwrap();
        assert_eq!(result.trials.len(), 5);
        assert_eq!(result.curves().len(), 5);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let config = ExperimentConfig {
            trials: 10,
            seed: Some(777),
            rule: DecayRule::HighLow,
            ..Default::default()
        };
        let a = run_experiment(&config).unwrap();
        let b = run_experiment(&config).unwrap();
        assert_eq!(a.curves(), b.curves());
    }

    #[test]
    fn test_error_display() {
        let err = ExperimentError::InvalidTrialCount(-1);
        assert!(err.to_string().contains("-1"));
    }
}
