//! Dice rolling primitives.
//!
//! The RNG is always an explicitly threaded handle rather than a global
//! stream, so trials can be reproduced with a seeded generator.

use crate::constants::DIE_SIDES;
use rand::Rng;

/// Roll a single six-sided die.
pub fn roll_die(rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=DIE_SIDES)
}

/// Roll `count` dice, one per still-surviving parent isotope.
pub fn roll_dice(rng: &mut impl Rng, count: usize) -> Vec<u32> {
    (0..count).map(|_| roll_die(rng)).collect()
}
