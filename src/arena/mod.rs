//! Match orchestration.
//!
//! A `Match` owns the state `(score_a, score_b, stack)` and exposes the two
//! operations a host needs:
//!
//! - `play_round`: draw both choices, resolve, credit the winner, step the
//!   progress stack, and return a `RoundReport`
//! - `reset_match`: back to `(0, 0, [])`
//!
//! Rendering and timing belong to the host.

mod game;
mod report;
mod state;
mod stats;

pub use game::Match;
pub use report::RoundReport;
pub use state::MatchState;
pub use stats::MatchStats;
