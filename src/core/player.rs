//! Seats, agents, and per-seat data storage.
//!
//! ## Side
//!
//! A match always has exactly two seats, `Side::A` and `Side::B`.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`, so per-agent data never needs
//! bounds checks or name lookups.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::Choice;

/// One of the two seats in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both seats, A first.
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    /// Storage index (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "Side A"),
            Side::B => write!(f, "Side B"),
        }
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use rps_arena::core::{Side, SideMap};
///
/// let mut wins: SideMap<u32> = SideMap::with_value(0);
/// wins[Side::B] += 1;
/// assert_eq!(wins[Side::A], 0);
/// assert_eq!(wins[Side::B], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map from explicit values for A and B.
    pub fn new(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(factory: impl Fn(Side) -> T) -> Self {
        Self::new(factory(Side::A), factory(Side::B))
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, A first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs, A first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::BOTH.into_iter().zip(self.data.iter_mut())
    }

    /// Apply `f` to both entries.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> SideMap<U> {
        SideMap::new(f(&self.data[0]), f(&self.data[1]))
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

/// A scripted contestant: a name, a running score, and its latest choice.
///
/// Created once per match. Only the match mutates it: the score when the
/// agent wins a round, the choice on every draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    name: String,
    score: u32,
    last_choice: Option<Choice>,
}

impl Agent {
    /// Create a new agent with a zero score and no choice yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            last_choice: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The choice made in the most recent round, if any.
    #[must_use]
    pub fn last_choice(&self) -> Option<Choice> {
        self.last_choice
    }

    pub(crate) fn record_choice(&mut self, choice: Choice) {
        self.last_choice = Some(choice);
    }

    pub(crate) fn record_win(&mut self) {
        self.score += 1;
    }

    /// Back to a fresh agent, keeping the name.
    pub(crate) fn reset(&mut self) {
        self.score = 0;
        self.last_choice = None;
    }
}
