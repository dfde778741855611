//! Choice sources: where each round's draws come from.
//!
//! ## Key Features
//!
//! - **Injectable**: matches draw through the `ChoiceSource` trait
//! - **Deterministic**: `GameRng` with the same seed produces the same rounds
//! - **Scriptable**: `ScriptedChoices` replays a fixed sequence for tests
//!
//! ```
//! use rps_arena::core::{ChoiceSource, GameRng};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! for _ in 0..10 {
//!     assert_eq!(rng1.draw(), rng2.draw());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::Choice;

/// A source of choices for the per-round draw.
///
/// Each call must return one choice; real play uses a uniform source, tests
/// can supply any sequence.
pub trait ChoiceSource {
    /// Draw the next choice.
    fn draw(&mut self) -> Choice;
}

impl<S: ChoiceSource + ?Sized> ChoiceSource for Box<S> {
    fn draw(&mut self) -> Choice {
        (**self).draw()
    }
}

impl<S: ChoiceSource + ?Sized> ChoiceSource for &mut S {
    fn draw(&mut self) -> Choice {
        (**self).draw()
    }
}

/// Deterministic uniform RNG.
///
/// Uses ChaCha8 for speed while keeping statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }
}

impl ChoiceSource for GameRng {
    fn draw(&mut self) -> Choice {
        self.inner.gen()
    }
}

/// Replays a fixed sequence of choices, cycling when exhausted.
///
/// A match draws A then B each round, so a script of
/// `[Rock, Scissors, Paper, Paper]` plays Rock vs Scissors, then Paper vs
/// Paper.
///
/// ```
/// use rps_arena::core::{Choice, ChoiceSource, ScriptedChoices};
///
/// let mut script = ScriptedChoices::new([Choice::Rock, Choice::Paper]);
/// assert_eq!(script.draw(), Choice::Rock);
/// assert_eq!(script.draw(), Choice::Paper);
/// assert_eq!(script.draw(), Choice::Rock);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedChoices {
    choices: Vec<Choice>,
    cursor: usize,
}

impl ScriptedChoices {
    /// Create a script. Panics if the script is empty.
    pub fn new(choices: impl IntoIterator<Item = Choice>) -> Self {
        let choices: Vec<Choice> = choices.into_iter().collect();
        assert!(!choices.is_empty(), "Script must contain at least one choice");
        Self { choices, cursor: 0 }
    }

    /// Build a script from (A, B) round pairs.
    pub fn rounds(rounds: impl IntoIterator<Item = (Choice, Choice)>) -> Self {
        Self::new(rounds.into_iter().flat_map(|(a, b)| [a, b]))
    }

    /// Number of choices in one cycle of the script.
    #[must_use]
    pub fn cycle_len(&self) -> usize {
        self.choices.len()
    }
}

impl ChoiceSource for ScriptedChoices {
    fn draw(&mut self) -> Choice {
        // `cursor < choices.len()` always, and `new` rejects empty scripts.
        let next = self.choices[self.cursor];
        self.cursor = (self.cursor + 1) % self.choices.len();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.draw(), rng2.draw());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..32).map(|_| rng1.draw()).collect();
        let seq2: Vec<_> = (0..32).map(|_| rng2.draw()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_draw_covers_alphabet() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 3];
        for _ in 0..100 {
            seen[rng.draw().rank() as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_scripted_cycles() {
        let mut script = ScriptedChoices::rounds([(Choice::Rock, Choice::Scissors)]);
        assert_eq!(script.cycle_len(), 2);
        let drawn: Vec<_> = (0..4).map(|_| script.draw()).collect();
        assert_eq!(
            drawn,
            vec![Choice::Rock, Choice::Scissors, Choice::Rock, Choice::Scissors]
        );
    }

    #[test]
    fn test_scripted_wraps_across_cycles() {
        let mut script = ScriptedChoices::new([Choice::Rock, Choice::Paper, Choice::Scissors]);
        let drawn: Vec<_> = (0..7).map(|_| script.draw().rank()).collect();
        assert_eq!(drawn, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    #[should_panic(expected = "at least one choice")]
    fn test_scripted_empty() {
        let _ = ScriptedChoices::new(Vec::new());
    }

    #[test]
    fn test_boxed_source() {
        let mut source: Box<dyn ChoiceSource> = Box::new(ScriptedChoices::new([Choice::Paper]));
        assert_eq!(source.draw(), Choice::Paper);
    }
}
