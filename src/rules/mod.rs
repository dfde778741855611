//! Round resolution rules.
//!
//! Given the two simultaneous choices of a round, decide whether it is a
//! tie or which agent won. Score mutation is left to the caller.

pub mod resolver;

pub use resolver::{duel, resolve, RoundOutcome};
