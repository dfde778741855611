//! Fixed-cadence driver with a start/pause toggle.
//!
//! Rounds are issued one at a time on the calling thread, so a second round
//! can never start before the first returns.

use std::ops::ControlFlow;
use std::thread;
use std::time::Duration;

use tracing::info;

use crate::arena::{Match, RoundReport};
use crate::core::{ChoiceSource, MatchConfig};

/// Issues `play_round` calls at a fixed delay while running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cadence {
    delay: Duration,
    running: bool,
}

impl Cadence {
    /// Create a paused cadence with the given delay between rounds.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            running: false,
        }
    }

    /// Create a paused cadence using the configured delay.
    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(config.delay())
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start issuing rounds. Starting twice is a no-op.
    pub fn start(&mut self) {
        if !self.running {
            info!(delay_ms = self.delay.as_millis() as u64, "cadence started");
            self.running = true;
        }
    }

    /// Stop issuing rounds. Pausing twice is a no-op.
    pub fn pause(&mut self) {
        if self.running {
            info!("cadence paused");
            self.running = false;
        }
    }

    /// Flip between running and paused. Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
        self.running
    }

    /// One timer tick from an external event loop: plays a round only while
    /// running.
    pub fn tick<S: ChoiceSource>(&self, game: &mut Match<S>) -> Option<RoundReport> {
        self.running.then(|| game.play_round())
    }

    /// Drive `game` on this thread until `limit` rounds have been played or
    /// `on_round` breaks. `None` means no limit.
    ///
    /// Sleeps the configured delay between rounds, never after the last one.
    /// Leaves the cadence paused and returns the number of rounds played.
    pub fn run<S, F>(&mut self, game: &mut Match<S>, limit: Option<u64>, mut on_round: F) -> u64
    where
        S: ChoiceSource,
        F: FnMut(&RoundReport) -> ControlFlow<()>,
    {
        self.start();
        let mut played = 0u64;

        while self.running {
            if limit.is_some_and(|limit| played >= limit) {
                break;
            }
            if played > 0 && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }

            let report = game.play_round();
            played += 1;

            if on_round(&report).is_break() {
                break;
            }
        }

        self.pause();
        played
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::from_config(&MatchConfig::default())
    }
}
