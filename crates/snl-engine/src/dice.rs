//! The six-sided die: validated roll values and a seeded roller.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::error::{GameError, GameResult};

/// Unicode die faces, indexed by value - 1.
const DIE_FACES: [char; 6] = ['⚀', '⚁', '⚂', '⚃', '⚄', '⚅'];

/// A validated d6 value (1..=6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiceRoll(u8);

impl DiceRoll {
    /// Wrap a raw die value, rejecting anything outside 1..=6.
    pub fn new(value: u8) -> GameResult<Self> {
        if (1..=6).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GameError::InvalidDiceValue(value))
        }
    }

    /// The rolled value (1..=6).
    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether this roll earns a bonus roll.
    pub fn is_six(self) -> bool {
        self.0 == 6
    }

    /// The unicode die face for this value.
    pub fn face(self) -> char {
        DIE_FACES[usize::from(self.0 - 1)]
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.face(), self.0)
    }
}

/// A seeded six-sided die roller.
///
/// Wraps a [`StdRng`] so that a game constructed with the same seed rolls
/// the same sequence.
#[derive(Debug, Clone)]
pub struct Dice {
    rng: StdRng,
}

impl Dice {
    /// Create a roller seeded from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Roll the die.
    pub fn roll(&mut self) -> DiceRoll {
        DiceRoll(self.rng.random_range(1..=6))
    }
}
