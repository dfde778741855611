//! Score-driven progress visual.
//!
//! A stack of up to five named tiers that grows while agent A leads and
//! shrinks while agent B leads, one tier per round.

mod tier;
mod tracker;

pub use tier::Tier;
pub use tracker::{update, ProgressStack, StackChange, StackError, MAX_TIERS};
