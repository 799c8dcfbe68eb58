// Dice constants
pub const DIE_SIDES: u32 = 6;

// Simulation constants
pub const DEFAULT_POPULATION: u32 = 80;

// Aggregation constants
// Trial counts above the threshold switch the chart from one-line-per-trial
// to summary curves plus a random sample of individual trials.
pub const SUMMARY_MODE_THRESHOLD: usize = 20;
pub const SUMMARY_SAMPLE_SIZE: usize = 14;

// Chart labels
pub const X_AXIS_LABEL: &str = "Roll(s)";
pub const Y_AXIS_LABEL: &str = "% Parent Isotopes Remaining";
