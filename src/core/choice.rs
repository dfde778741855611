//! The three-symbol choice alphabet and its cyclic dominance relation.
//!
//! Each choice carries a rank in `0..3`. A choice beats another exactly when
//! `(rank - other_rank) mod 3 == 1`, which makes the relation total and
//! antisymmetric without enumerating the pairs:
//!
//! ```
//! use rps_arena::core::Choice;
//!
//! assert!(Choice::Rock.beats(Choice::Scissors));
//! assert!(!Choice::Scissors.beats(Choice::Rock));
//! assert!(!Choice::Paper.beats(Choice::Paper));
//! ```

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the three symbolic game options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All choices in rank order.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Rank used by the dominance relation (Rock = 0, Paper = 1, Scissors = 2).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Choice::Rock => 0,
            Choice::Paper => 1,
            Choice::Scissors => 2,
        }
    }

    /// Look up a choice by rank. Ranks wrap modulo 3.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Self {
        Self::ALL[(rank % 3) as usize]
    }

    /// Does `self` beat `other`?
    #[must_use]
    pub const fn beats(self, other: Choice) -> bool {
        (self.rank() + 3 - other.rank()) % 3 == 1
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Uniform draw over the three choices.
impl Distribution<Choice> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Choice {
        Choice::ALL[rng.gen_range(0..Choice::ALL.len())]
    }
}
