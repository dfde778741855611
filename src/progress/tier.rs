//! The named tiers of the progress visual.

use serde::{Deserialize, Serialize};

/// One level of the progress visual, top to bottom of the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Star,
    Top,
    Middle,
    Bottom,
    Trunk,
}

impl Tier {
    /// Fixed reveal order. The stack is always a prefix of this.
    pub const ORDER: [Tier; 5] = [Tier::Star, Tier::Top, Tier::Middle, Tier::Bottom, Tier::Trunk];

    /// Position in the reveal order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Tier::Star => 0,
            Tier::Top => 1,
            Tier::Middle => 2,
            Tier::Bottom => 3,
            Tier::Trunk => 4,
        }
    }

    /// The tier revealed at position `index`, if within bounds.
    #[must_use]
    pub fn at(index: usize) -> Option<Tier> {
        Self::ORDER.get(index).copied()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Tier::Star => "star",
            Tier::Top => "top",
            Tier::Middle => "middle",
            Tier::Bottom => "bottom",
            Tier::Trunk => "trunk",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_index() {
        for (i, tier) in Tier::ORDER.iter().enumerate() {
            assert_eq!(tier.index(), i);
            assert_eq!(Tier::at(i), Some(*tier));
        }
        assert_eq!(Tier::at(5), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tier::Star.to_string(), "star");
        assert_eq!(Tier::Trunk.to_string(), "trunk");
    }
}
