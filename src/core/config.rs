//! Match configuration.
//!
//! Hosts build a `MatchConfig` once per match:
//! - agent names (unique per match, since outcomes carry names)
//! - an optional seed for reproducible draws
//! - the delay between rounds used by the cadence driver
//!
//! Odds and the choice alphabet are fixed and not configurable.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{ConfigError, Side, SideMap};

/// Default delay between rounds, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Agent names, seat A first.
    pub names: SideMap<String>,

    /// Seed for the choice RNG. `None` draws a seed from OS entropy.
    pub seed: Option<u64>,

    /// Delay between rounds when driven on a cadence (milliseconds).
    pub delay_ms: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            names: SideMap::new("AI 1".to_string(), "AI 2".to_string()),
            seed: None,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both agent names.
    #[must_use]
    pub fn with_names(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.names = SideMap::new(a.into(), b.into());
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the delay between rounds.
    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// The delay between rounds as a `Duration`.
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Check that both names are non-empty and distinct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (side, name) in self.names.iter() {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyName(side));
            }
        }
        if self.names[Side::A] == self.names[Side::B] {
            return Err(ConfigError::DuplicateName(self.names[Side::A].clone()));
        }
        Ok(())
    }
}
