//! Core types: choices, seats and agents, choice sources, configuration.
//!
//! Everything here is independent of how a match is driven or rendered.

pub mod choice;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use choice::Choice;
pub use player::{Agent, Side, SideMap};
pub use rng::{ChoiceSource, GameRng, ScriptedChoices};
pub use config::{MatchConfig, DEFAULT_DELAY_MS};
pub use error::ConfigError;
