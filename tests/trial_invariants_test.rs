//! Integration test: decay curve invariants
//!
//! Runs many seeded trials and checks the structural properties every decay
//! curve must hold, plus the statistical behavior of both rules.

use dicedecay::rules::DecayRule;
use dicedecay::trial::{run_trial, TrialResult};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded_trials(rule: DecayRule, population: u32, count: u64) -> Vec<TrialResult> {
    (0..count)
        .map(|seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            run_trial(&mut rng, rule, population)
        })
        .collect()
}

// =============================================================================
// Curve Shape Invariants
// =============================================================================

#[test]
fn test_curves_start_at_exactly_100() {
    for trial in seeded_trials(DecayRule::OddEven, 80, 50) {
        assert_eq!(trial.curve[0], 100.0);
    }
}

#[test]
fn test_curves_are_non_increasing() {
    for trial in seeded_trials(DecayRule::HighLow, 80, 50) {
        for pair in trial.curve.windows(2) {
            assert!(
                pair[1] <= pair[0],
                "curve increased from {} to {}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn test_terminal_zero_is_first_zero() {
    // The population never revives: 0.0 appears exactly once, at the end.
    for rule in DecayRule::ALL {
        for trial in seeded_trials(rule, 80, 50) {
            let first_zero = trial.curve.iter().position(|&p| p == 0.0);
            assert_eq!(first_zero, Some(trial.curve.len() - 1));
        }
    }
}

#[test]
fn test_curve_length_matches_round_log() {
    for trial in seeded_trials(DecayRule::OddEven, 80, 20) {
        assert_eq!(trial.curve.len(), trial.rounds.len() + 1);
    }
}

// =============================================================================
// Per-Round Conservation
// =============================================================================

#[test]
fn test_survivors_plus_decayed_equals_remaining() {
    for rule in DecayRule::ALL {
        for trial in seeded_trials(rule, 80, 30) {
            for stats in &trial.rounds {
                assert_eq!(stats.survivors + stats.decayed, stats.remaining_before);
                assert!(stats.decayed <= stats.remaining_before);
            }
        }
    }
}

#[test]
fn test_rounds_chain_together() {
    // Each round's survivors are the next round's remaining_before.
    for trial in seeded_trials(DecayRule::HighLow, 60, 20) {
        for pair in trial.rounds.windows(2) {
            assert_eq!(pair[0].survivors, pair[1].remaining_before);
        }
        assert_eq!(trial.rounds.last().unwrap().survivors, 0);
    }
}

// =============================================================================
// Statistical Behavior
// =============================================================================

fn observed_decay_probability(trials: &[TrialResult]) -> f64 {
    let rolled: u64 = trials
        .iter()
        .flat_map(|t| &t.rounds)
        .map(|r| r.remaining_before as u64)
        .sum();
    let decayed: u64 = trials
        .iter()
        .flat_map(|t| &t.rounds)
        .map(|r| r.decayed as u64)
        .sum();
    decayed as f64 / rolled as f64
}

#[test]
fn test_odd_even_decay_probability_near_one_half() {
    let trials = seeded_trials(DecayRule::OddEven, 80, 200);
    let observed = observed_decay_probability(&trials);
    assert!(
        (observed - 0.5).abs() < 0.02,
        "observed {} too far from 1/2",
        observed
    );
}

#[test]
fn test_high_low_decay_probability_near_one_sixth() {
    let trials = seeded_trials(DecayRule::HighLow, 80, 200);
    let observed = observed_decay_probability(&trials);
    assert!(
        (observed - 1.0 / 6.0).abs() < 0.01,
        "observed {} too far from 1/6",
        observed
    );
}

#[test]
fn test_high_low_trials_outlast_odd_even() {
    // A 1/6 decay chance decays far slower than 1/2 on average.
    let odd_even = seeded_trials(DecayRule::OddEven, 80, 100);
    let high_low = seeded_trials(DecayRule::HighLow, 80, 100);

    let avg = |trials: &[TrialResult]| {
        trials
            .iter()
            .map(|t| t.rounds_to_exhaustion() as f64)
            .sum::<f64>()
            / trials.len() as f64
    };

    assert!(avg(&high_low) > avg(&odd_even));
}

// =============================================================================
// Degenerate Populations
// =============================================================================

#[test]
fn test_zero_population_yields_bare_curve() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let trial = run_trial(&mut rng, DecayRule::HighLow, 0);
    assert_eq!(trial.curve, vec![100.0]);
    assert!(trial.rounds.is_empty());
}

#[test]
fn test_single_die_percentages_are_all_or_nothing() {
    // With one die, every round is either 100% or 0% remaining.
    for trial in seeded_trials(DecayRule::HighLow, 1, 50) {
        for &pct in &trial.curve {
            assert!(pct == 100.0 || pct == 0.0);
        }
        assert_eq!(*trial.curve.last().unwrap(), 0.0);
    }
}
