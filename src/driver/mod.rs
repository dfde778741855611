//! Cadence driver: turns a start/pause toggle and a fixed delay into a
//! sequence of `play_round` calls.

mod cadence;

pub use cadence::Cadence;
