//! One-step-per-round progress stack.
//!
//! After every round the stack moves at most one tier, driven only by the
//! sign of `score_a - score_b`:
//!
//! - A leads: reveal the next tier, unless all tiers are shown
//! - B leads: hide the last tier, unless none are shown
//! - level: no change
//!
//! The stack is never recomputed from the size of the lead, so it can lag
//! behind the real gap. That lag is the intended animation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::trace;

use super::Tier;

/// Maximum number of tiers on the stack.
pub const MAX_TIERS: usize = Tier::ORDER.len();

/// What a single tracker step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackChange {
    /// A tier was revealed.
    Grew(Tier),
    /// The last tier was hidden.
    Shrank(Tier),
    /// Nothing moved (level score, saturated, or already empty).
    Unchanged,
}

/// A tier list that is not a prefix of `Tier::ORDER`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("stack holds {0} tiers, at most {max} allowed", max = MAX_TIERS)]
    TooManyTiers(usize),

    /// `found` sits where `expected` belongs.
    #[error("tier {found} at position {position}, expected {expected}")]
    OutOfOrder {
        position: usize,
        expected: Tier,
        found: Tier,
    },
}

/// Ordered stack of revealed tiers, always a prefix of `Tier::ORDER`.
///
/// Deserialization goes through `TryFrom<RawStack>`, so a decoded stack
/// holds the same invariant as one built by `step`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStack")]
pub struct ProgressStack {
    tiers: SmallVec<[Tier; MAX_TIERS]>,
}

/// Unchecked wire shape of a `ProgressStack`.
#[derive(Deserialize)]
struct RawStack {
    tiers: Vec<Tier>,
}

impl TryFrom<RawStack> for ProgressStack {
    type Error = StackError;

    fn try_from(raw: RawStack) -> Result<Self, Self::Error> {
        if raw.tiers.len() > MAX_TIERS {
            return Err(StackError::TooManyTiers(raw.tiers.len()));
        }
        for (position, (&found, &expected)) in raw.tiers.iter().zip(Tier::ORDER.iter()).enumerate() {
            if found != expected {
                return Err(StackError::OutOfOrder { position, expected, found });
            }
        }
        Ok(Self {
            tiers: raw.tiers.into_iter().collect(),
        })
    }
}

impl ProgressStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of revealed tiers, in `0..=MAX_TIERS`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// All tiers revealed.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiers.len() == MAX_TIERS
    }

    /// Revealed tiers in reveal order.
    #[must_use]
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    #[must_use]
    pub fn contains(&self, tier: Tier) -> bool {
        self.tiers.contains(&tier)
    }

    /// The most recently revealed tier.
    #[must_use]
    pub fn top(&self) -> Option<Tier> {
        self.tiers.last().copied()
    }

    /// Apply one round's step for the given score delta.
    ///
    /// ```
    /// use rps_arena::progress::{ProgressStack, StackChange, Tier};
    ///
    /// let mut stack = ProgressStack::new();
    /// assert_eq!(stack.step(3), StackChange::Grew(Tier::Star));
    /// assert_eq!(stack.step(0), StackChange::Unchanged);
    /// assert_eq!(stack.step(-1), StackChange::Shrank(Tier::Star));
    /// assert!(stack.is_empty());
    /// ```
    pub fn step(&mut self, score_delta: i64) -> StackChange {
        let change = if score_delta > 0 {
            match Tier::at(self.tiers.len()) {
                Some(next) => {
                    self.tiers.push(next);
                    StackChange::Grew(next)
                }
                None => StackChange::Unchanged,
            }
        } else if score_delta < 0 {
            match self.tiers.pop() {
                Some(last) => StackChange::Shrank(last),
                None => StackChange::Unchanged,
            }
        } else {
            StackChange::Unchanged
        };

        trace!(score_delta, ?change, len = self.tiers.len(), "progress step");
        change
    }

    /// Hide every tier.
    pub fn clear(&mut self) {
        self.tiers.clear();
    }
}

/// Functional form of `ProgressStack::step`: the stack after one round.
#[must_use]
pub fn update(stack: &ProgressStack, score_delta: i64) -> ProgressStack {
    let mut next = stack.clone();
    next.step(score_delta);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(len: usize) -> ProgressStack {
        let mut stack = ProgressStack::new();
        for _ in 0..len {
            stack.step(1);
        }
        stack
    }

    #[test]
    fn test_grows_in_order() {
        let mut stack = ProgressStack::new();
        for tier in Tier::ORDER {
            assert_eq!(stack.step(1), StackChange::Grew(tier));
            assert_eq!(stack.top(), Some(tier));
        }
        assert_eq!(stack.tiers(), &Tier::ORDER);
        assert!(stack.is_full());
    }

    #[test]
    fn test_saturates() {
        let mut stack = stack_of(MAX_TIERS);
        assert_eq!(stack.step(10), StackChange::Unchanged);
        assert_eq!(stack.len(), MAX_TIERS);
    }

    #[test]
    fn test_shrinks_from_top() {
        let mut stack = stack_of(3);
        assert_eq!(stack.step(-1), StackChange::Shrank(Tier::Middle));
        assert_eq!(stack.len(), 2);
        assert!(!stack.contains(Tier::Middle));
    }

    #[test]
    fn test_empty_stays_empty_on_negative() {
        let mut stack = ProgressStack::new();
        assert_eq!(stack.step(-5), StackChange::Unchanged);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_zero_delta_never_moves() {
        for len in 0..=MAX_TIERS {
            let mut stack = stack_of(len);
            assert_eq!(stack.step(0), StackChange::Unchanged);
            assert_eq!(stack.len(), len);
        }
    }

    #[test]
    fn test_lags_behind_large_delta() {
        // A big lead still reveals only one tier per round.
        let mut stack = ProgressStack::new();
        stack.step(4);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_update_is_pure() {
        let before = stack_of(2);
        let after = update(&before, -1);
        assert_eq!(before.len(), 2);
        assert_eq!(after.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut stack = stack_of(4);
        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_serialization() {
        let stack = stack_of(2);
        let json = serde_json::to_string(&stack).unwrap();
        assert_eq!(json, r#"{"tiers":["Star","Top"]}"#);
        let deserialized: ProgressStack = serde_json::from_str(&json).unwrap();
        assert_eq!(stack, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_out_of_order() {
        let err = serde_json::from_str::<ProgressStack>(r#"{"tiers":["Trunk","Star"]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("expected star"), "{err}");

        let raw = RawStack { tiers: vec![Tier::Star, Tier::Middle] };
        assert_eq!(
            ProgressStack::try_from(raw),
            Err(StackError::OutOfOrder {
                position: 1,
                expected: Tier::Top,
                found: Tier::Middle,
            })
        );
    }

    #[test]
    fn test_deserialize_rejects_too_many_tiers() {
        let json = r#"{"tiers":["Star","Top","Middle","Bottom","Trunk","Star","Top"]}"#;
        assert!(serde_json::from_str::<ProgressStack>(json).is_err());

        let raw = RawStack { tiers: vec![Tier::Star; MAX_TIERS + 1] };
        assert_eq!(
            ProgressStack::try_from(raw),
            Err(StackError::TooManyTiers(MAX_TIERS + 1))
        );
    }

    #[test]
    fn test_deserialize_accepts_every_prefix() {
        for len in 0..=MAX_TIERS {
            let stack = stack_of(len);
            let json = serde_json::to_string(&stack).unwrap();
            let back: ProgressStack = serde_json::from_str(&json).unwrap();
            assert_eq!(back, stack);
            assert_eq!(back.tiers(), &Tier::ORDER[..len]);
        }
    }
}
