//! Single-trial decay simulation.
//!
//! One trial starts with a population of dice and rolls every surviving die
//! each round, removing the ones that decay, until none remain. The product
//! is the decay curve: percent of the initial population still surviving
//! after each round, starting at 100.

use crate::dice::roll_dice;
use crate::rules::DecayRule;
use rand::Rng;
use serde::Serialize;

/// Everything observable about one round of rolling.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RoundStats {
    /// 1-based round number.
    pub round: u32,
    /// Parents alive going into the round.
    pub remaining_before: u32,
    /// Parents still alive after the round.
    pub survivors: u32,
    /// Decays this round.
    pub decayed: u32,
    /// Survivors as a percent of the initial population.
    pub percent_remaining: f64,
    /// Daughters as a percent of the initial population.
    pub percent_decayed: f64,
    /// Observed decay fraction this round: decayed / remaining_before.
    pub decay_probability: f64,
}

/// Result of a single trial run to exhaustion.
#[derive(Debug, Clone, Serialize)]
pub struct TrialResult {
    /// Percent of initial population remaining per round, starting with
    /// 100.0 at round 0. Non-increasing; the last entry is the first 0.0.
    pub curve: Vec<f64>,
    /// Per-round statistics, one entry per rolling round (round 0 excluded).
    pub rounds: Vec<RoundStats>,
}

impl TrialResult {
    /// Number of rolling rounds until the population was exhausted.
    pub fn rounds_to_exhaustion(&self) -> usize {
        self.rounds.len()
    }
}

/// Resolve one round of rolls against a rule.
///
/// Pure arithmetic over an already-rolled batch, so round behavior can be
/// tested with literal roll values.
pub fn resolve_round(
    rolls: &[u32],
    rule: DecayRule,
    remaining_before: u32,
    initial_population: u32,
    round: u32,
) -> RoundStats {
    debug_assert_eq!(rolls.len(), remaining_before as usize);

    let decayed = rolls.iter().filter(|&&v| rule.decays(v)).count() as u32;
    let survivors = remaining_before - decayed;
    let percent_remaining = (survivors as f64 / initial_population as f64) * 100.0;

    RoundStats {
        round,
        remaining_before,
        survivors,
        decayed,
        percent_remaining,
        percent_decayed: 100.0 - percent_remaining,
        decay_probability: decayed as f64 / remaining_before as f64,
    }
}

/// Run one trial to exhaustion and return its decay curve and round log.
///
/// A zero initial population is degenerate but valid: the curve is just
/// `[100.0]` and no rounds are rolled.
pub fn run_trial(rng: &mut impl Rng, rule: DecayRule, initial_population: u32) -> TrialResult {
    let mut remaining = initial_population;
    let mut curve = vec![100.0];
    let mut rounds = Vec::new();

    while remaining > 0 {
        let rolls = roll_dice(rng, remaining as usize);
        let stats = resolve_round(
            &rolls,
            rule,
            remaining,
            initial_population,
            rounds.len() as u32 + 1,
        );

        curve.push(stats.percent_remaining);
        remaining = stats.survivors;
        rounds.push(stats);
    }

    TrialResult { curve, rounds }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_resolve_round_single_six_high_low() {
        // One die, rolls a 6 under the 1-5/6 rule: full decay.
        let stats = resolve_round(&[6], DecayRule::HighLow, 1, 1, 1);
        assert_eq!(stats.survivors, 0);
        assert_eq!(stats.decayed, 1);
        assert_eq!(stats.percent_remaining, 0.0);
        assert_eq!(stats.percent_decayed, 100.0);
        assert_eq!(stats.decay_probability, 1.0);
    }

    #[test]
    fn test_resolve_round_survivor_then_decay() {
        // One die rolling 3 then 6 under 1-5/6 gives curve 100, 100, 0.
        let first = resolve_round(&[3], DecayRule::HighLow, 1, 1, 1);
        assert_eq!(first.survivors, 1);
        assert_eq!(first.percent_remaining, 100.0);
        assert_eq!(first.decay_probability, 0.0);

        let second = resolve_round(&[6], DecayRule::HighLow, first.survivors, 1, 2);
        assert_eq!(second.survivors, 0);
        assert_eq!(second.percent_remaining, 0.0);
    }

    #[test]
    fn test_resolve_round_mixed_batch() {
        let rolls = [1, 2, 3, 4, 5, 6];
        let stats = resolve_round(&rolls, DecayRule::OddEven, 6, 80, 1);
        assert_eq!(stats.decayed, 3);
        assert_eq!(stats.survivors, 3);
        assert!((stats.percent_remaining - 3.75).abs() < 1e-9);
        assert!((stats.decay_probability - 0.5).abs() < 1e-9);

        let stats = resolve_round(&rolls, DecayRule::HighLow, 6, 80, 1);
        assert_eq!(stats.decayed, 1);
        assert_eq!(stats.survivors, 5);
    }

    #[test]
    fn test_trial_starts_at_100_and_ends_at_0() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let result = run_trial(&mut rng, DecayRule::OddEven, 80);

        assert_eq!(result.curve[0], 100.0);
        assert_eq!(*result.curve.last().unwrap(), 0.0);
        assert_eq!(result.curve.len(), result.rounds.len() + 1);
    }

    #[test]
    fn test_trial_curve_non_increasing() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let result = run_trial(&mut rng, DecayRule::HighLow, 80);

        for pair in result.curve.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn test_trial_population_conservation() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let result = run_trial(&mut rng, DecayRule::OddEven, 80);

        for stats in &result.rounds {
            assert_eq!(stats.survivors + stats.decayed, stats.remaining_before);
            assert!(stats.decayed <= stats.remaining_before);
        }
    }

    #[test]
    fn test_zero_population_is_degenerate() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = run_trial(&mut rng, DecayRule::OddEven, 0);

        assert_eq!(result.curve, vec![100.0]);
        assert!(result.rounds.is_empty());
        assert_eq!(result.rounds_to_exhaustion(), 0);
    }

    #[test]
    fn test_zero_appears_exactly_once() {
        // Population never revives: the terminal 0 is the only 0.
        let mut rng = ChaCha8Rng::seed_from_u64(123);
        for _ in 0..20 {
            let result = run_trial(&mut rng, DecayRule::OddEven, 40);
            let zeros = result.curve.iter().filter(|&&p| p == 0.0).count();
            assert_eq!(zeros, 1);
        }
    }
}
