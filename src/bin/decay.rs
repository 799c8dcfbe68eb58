//! Headless dice decay simulator CLI.
//!
//! Runs experiments without the TUI, printing per-trial round tables and a
//! summary, for scripted or reproducible runs.
//!
//! Usage:
//!   cargo run --bin decay -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin decay                          # 1 trial, Odd/Even rule
//!   cargo run --bin decay -- --rule 2 --trials 30  # 30 trials, 1-5/6 rule
//!   cargo run --bin decay -- --seed 42 --json      # reproducible + JSON spec

use dicedecay::aggregate::summarize;
use dicedecay::experiment::{rng_for, run_experiment, ExperimentConfig};
use dicedecay::report::{experiment_summary, trial_table};
use dicedecay::rules::DecayRule;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, show_tables, write_json) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Run with --help for usage.");
            std::process::exit(1);
        }
    };

    if config.verbosity >= 1 {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              DICE DECAY SIMULATOR                             ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Rule:        {}", config.rule.label());
        println!("  Trials:      {}", config.trials);
        println!("  Population:  {}", config.initial_population);
        if let Some(seed) = config.seed {
            println!("  Seed:        {}", seed);
        }
        println!();
    }

    let result = match run_experiment(&config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if show_tables {
        for (idx, trial) in result.trials.iter().enumerate() {
            println!("{}", trial_table(idx + 1, config.rule, trial));
        }
    }

    if config.verbosity >= 1 {
        println!("{}", experiment_summary(&config, &result));
    }

    if write_json {
        let mut sample_rng = rng_for(config.seed, 1);
        let spec = summarize(&result.curves(), &mut sample_rng);
        let json = serde_json::to_string_pretty(&spec).unwrap_or_else(|_| "{}".to_string());
        let filename = format!(
            "decay_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(_) => println!("Render spec written to {}", filename),
            Err(e) => eprintln!("Could not write {}: {}", filename, e),
        }
    }
}

type ParsedArgs = (ExperimentConfig, bool, bool);

fn parse_args(args: &[String]) -> Result<ParsedArgs, String> {
    let mut config = ExperimentConfig {
        verbosity: 1,
        ..Default::default()
    };
    let mut show_tables = true;
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rule" => {
                let value = next_value(args, &mut i, "--rule")?;
                config.rule = match value.as_str() {
                    "1" | "odd-even" => DecayRule::OddEven,
                    "2" | "high-low" => DecayRule::HighLow,
                    other => return Err(format!("Unknown rule: {}", other)),
                };
            }
            "--trials" | "-n" => {
                let value = next_value(args, &mut i, "--trials")?;
                config.trials = value
                    .parse()
                    .map_err(|_| format!("Invalid trial count: {}", value))?;
            }
            "--population" | "-p" => {
                let value = next_value(args, &mut i, "--population")?;
                config.initial_population = value
                    .parse()
                    .map_err(|_| format!("Invalid population: {}", value))?;
            }
            "--seed" => {
                let value = next_value(args, &mut i, "--seed")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                config.seed = Some(seed);
            }
            "--no-tables" => show_tables = false,
            "--json" => write_json = true,
            "--verbose" => config.verbosity = 2,
            "--quiet" | "-q" => {
                config.verbosity = 0;
                show_tables = false;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok((config, show_tables, write_json))
}

fn next_value(args: &[String], i: &mut usize, flag: &str) -> Result<String, String> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| format!("{} requires a value", flag))
}

fn print_help() {
    println!("Dice Decay Simulator (headless)\n");
    println!("Usage: decay [OPTIONS]\n");
    println!("Options:");
    println!("  --rule 1|2         Decay rule: 1 = Odd/Even, 2 = 1-5/6 (default: 1)");
    println!("  --trials, -n N     Number of trials (default: 1)");
    println!("  --population, -p N Initial dice per trial (default: 80)");
    println!("  --seed N           RNG seed for reproducible runs");
    println!("  --no-tables        Skip per-trial round tables");
    println!("  --json             Write the chart render spec as JSON");
    println!("  --verbose          Per-trial progress lines");
    println!("  --quiet, -q        Suppress all non-error output");
    println!("  --help, -h         Show this help message");
}
