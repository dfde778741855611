//! # rps-arena
//!
//! Two scripted agents play rock-paper-scissors round after round. Wins are
//! tallied and the running score drives a five-tier progress visual.
//!
//! ## Design Principles
//!
//! 1. **Plain values out**: the engine returns a `RoundReport` per round and
//!    never touches a rendering surface. Hosts draw.
//!
//! 2. **Injectable randomness**: draws come from a `ChoiceSource`, so tests
//!    can script every round and seeded runs are reproducible.
//!
//! 3. **One step per round**: the progress stack moves at most one tier per
//!    round and may lag behind the real score gap.
//!
//! ## Modules
//!
//! - `core`: choices, seats and agents, choice sources, configuration
//! - `rules`: round resolution
//! - `progress`: the tier stack and its update rule
//! - `arena`: the match engine, reports, and statistics
//! - `driver`: fixed-cadence start/pause driver
//! - `display`: plain-text rendering for terminal hosts

pub mod core;
pub mod rules;
pub mod progress;
pub mod arena;
pub mod driver;
pub mod display;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Agent, Choice, ChoiceSource, ConfigError, GameRng, MatchConfig, ScriptedChoices,
    Side, SideMap,
};

pub use crate::rules::{duel, resolve, RoundOutcome};

pub use crate::progress::{ProgressStack, StackChange, StackError, Tier, MAX_TIERS};

pub use crate::arena::{Match, MatchState, MatchStats, RoundReport};

pub use crate::driver::Cadence;
