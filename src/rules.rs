//! Decay rules.
//!
//! A rule decides whether a rolled die value makes a parent isotope decay
//! into a daughter. The enumeration is closed and matched exhaustively, so
//! there is no "unknown rule" branch anywhere in the simulation.

use serde::Serialize;

/// Which die values count as decay events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DecayRule {
    /// Odd values survive as parents, even values decay (p = 1/2 per roll).
    OddEven,
    /// Values 1-5 survive, only a 6 decays (p = 1/6 per roll).
    HighLow,
}

impl DecayRule {
    /// All rules, in menu order.
    pub const ALL: [DecayRule; 2] = [DecayRule::OddEven, DecayRule::HighLow];

    /// Does a rolled value trigger decay under this rule?
    pub fn decays(self, value: u32) -> bool {
        match self {
            DecayRule::OddEven => value % 2 == 0,
            DecayRule::HighLow => value == 6,
        }
    }

    /// Expected per-roll decay probability, for display alongside the
    /// observed rate.
    pub fn expected_probability(self) -> f64 {
        match self {
            DecayRule::OddEven => 0.5,
            DecayRule::HighLow => 1.0 / 6.0,
        }
    }

    /// Full menu label.
    pub fn label(self) -> &'static str {
        match self {
            DecayRule::OddEven => "Odd (Parent) / Even (Daughter)",
            DecayRule::HighLow => "1-5 (Parent) / 6 (Daughter)",
        }
    }

    /// Short label for table headers and chart titles.
    pub fn short_label(self) -> &'static str {
        match self {
            DecayRule::OddEven => "Odd/Even",
            DecayRule::HighLow => "1-5/6",
        }
    }
}
