//! Console reports: per-trial round tables and the experiment summary.
//!
//! Pure formatting over finished trial data; nothing here mutates or rolls.

use crate::experiment::{ExperimentConfig, ExperimentResult};
use crate::rules::DecayRule;
use crate::trial::TrialResult;

/// Fixed-width round-by-round table for one trial, including the round-0 row.
pub fn trial_table(trial_number: usize, rule: DecayRule, trial: &TrialResult) -> String {
    let mut out = String::new();

    let initial = trial
        .rounds
        .first()
        .map(|r| r.remaining_before)
        .unwrap_or(0);

    out.push_str(&format!(
        "\n=== Trial {} ({}) ===\n",
        trial_number,
        rule.label()
    ));
    out.push_str(&format!(
        "{:<8}{:<12}{:<10}{:<12}{:<18}{:<20}{:<16}\n",
        "Roll(s)", "Dice Left", "Parents", "Daughters", "% Parents Left", "% Daughters Left", "Prob (decay)"
    ));
    out.push_str(&format!(
        "{:<8}{:<12}{:<10}{:<12}{:<18.2}{:<20.2}{:<16.4}\n",
        0, initial, initial, 0, 100.00, 0.00, 0.0
    ));
    out.push_str(&"-".repeat(90));
    out.push('\n');

    for stats in &trial.rounds {
        out.push_str(&format!(
            "{:<8}{:<12}{:<10}{:<12}{:<18.2}{:<20.2}{:<16.4}\n",
            stats.round,
            stats.remaining_before,
            stats.survivors,
            stats.decayed,
            stats.percent_remaining,
            stats.percent_decayed,
            stats.decay_probability
        ));
    }

    out
}

/// One-screen summary of a whole experiment run.
pub fn experiment_summary(config: &ExperimentConfig, result: &ExperimentResult) -> String {
    let mut out = String::new();

    let rounds: Vec<usize> = result
        .trials
        .iter()
        .map(|t| t.rounds_to_exhaustion())
        .collect();
    let total_rounds: usize = rounds.iter().sum();
    let avg_rounds = total_rounds as f64 / rounds.len() as f64;
    let min_rounds = rounds.iter().min().copied().unwrap_or(0);
    let max_rounds = rounds.iter().max().copied().unwrap_or(0);

    // Observed decay rate across every roll of the experiment.
    let total_rolled: u64 = result
        .trials
        .iter()
        .flat_map(|t| &t.rounds)
        .map(|r| r.remaining_before as u64)
        .sum();
    let total_decayed: u64 = result
        .trials
        .iter()
        .flat_map(|t| &t.rounds)
        .map(|r| r.decayed as u64)
        .sum();
    let observed_prob = if total_rolled > 0 {
        total_decayed as f64 / total_rolled as f64
    } else {
        0.0
    };

    out.push_str("═══════════════════════════════════════════════════════════════\n");
    out.push_str("                    EXPERIMENT SUMMARY\n");
    out.push_str("═══════════════════════════════════════════════════════════════\n\n");
    out.push_str(&format!("  Rule:               {}\n", config.rule.label()));
    out.push_str(&format!("  Trials:             {}\n", result.trials.len()));
    out.push_str(&format!(
        "  Initial Population: {}\n\n",
        config.initial_population
    ));
    out.push_str(&format!("  Avg Rounds to Zero: {:.1}\n", avg_rounds));
    out.push_str(&format!("  Min Rounds:         {}\n", min_rounds));
    out.push_str(&format!("  Max Rounds:         {}\n\n", max_rounds));
    out.push_str(&format!(
        "  Decay Probability:  {:.4} observed vs {:.4} expected\n",
        observed_prob,
        config.rule.expected_probability()
    ));
    out.push_str("═══════════════════════════════════════════════════════════════\n");

    out
}
