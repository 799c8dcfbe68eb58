//! Dice Decay - Radioactive Decay Simulator Library
//!
//! Models radioactive decay with dice: each surviving "parent isotope" rolls a
//! die every round and decays into a "daughter" when the roll matches the
//! chosen rule. This module exposes the simulation core for testing and for
//! the headless binary.

// Allow dead code in library - some functions are only used by the binaries
#![allow(dead_code)]

pub mod aggregate;
pub mod build_info;
pub mod constants;
pub mod dice;
pub mod experiment;
pub mod report;
pub mod rules;
pub mod trial;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;

pub use constants::{DEFAULT_POPULATION, SUMMARY_MODE_THRESHOLD, SUMMARY_SAMPLE_SIZE};
pub use experiment::{run_experiment, ExperimentConfig, ExperimentError, ExperimentResult};
pub use rules::DecayRule;
