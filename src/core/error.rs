//! Configuration errors.

use thiserror::Error;

use super::Side;

/// Errors from validating a `MatchConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An agent name was empty or whitespace.
    #[error("agent name for {0} must not be empty")]
    EmptyName(Side),

    /// Both agents share a name, so outcomes could not tell them apart.
    #[error("agent names must be unique, both are {0:?}")]
    DuplicateName(String),
}
