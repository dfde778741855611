//! Match bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::arena::Match;
use crate::core::{MatchConfig, Side};
use crate::display::render_tree;

use super::py_core::PyRoundReport;

/// Python wrapper for a seeded Match.
#[pyclass(name = "Arena")]
pub struct PyArena {
    game: Match,
}

#[pymethods]
impl PyArena {
    /// Create a new match.
    ///
    /// # Arguments
    /// - name_a, name_b: Unique agent names
    /// - seed: RNG seed, or None for OS entropy
    #[new]
    #[pyo3(signature = (name_a = "AI 1", name_b = "AI 2", seed = None))]
    fn new(name_a: &str, name_b: &str, seed: Option<u64>) -> PyResult<Self> {
        let mut config = MatchConfig::new().with_names(name_a, name_b);
        config.seed = seed;
        let game = Match::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { game })
    }

    /// Advance the match by one round.
    fn play_round(&mut self) -> PyRoundReport {
        PyRoundReport(self.game.play_round())
    }

    /// Reset scores and the progress stack.
    fn reset_match(&mut self) {
        self.game.reset_match();
    }

    #[getter]
    fn score_a(&self) -> u32 {
        self.game.scores()[Side::A]
    }

    #[getter]
    fn score_b(&self) -> u32 {
        self.game.scores()[Side::B]
    }

    #[getter]
    fn rounds(&self) -> u64 {
        self.game.state().round
    }

    /// Revealed tier names.
    #[getter]
    fn stack(&self) -> Vec<&'static str> {
        self.game.stack().tiers().iter().map(|tier| tier.name()).collect()
    }

    /// Text rendering of the current tree.
    fn render_tree(&self) -> String {
        render_tree(self.game.stack())
    }

    fn __repr__(&self) -> String {
        let scores = self.game.scores();
        format!(
            "Arena({}={}, {}={}, round={})",
            self.game.agent(Side::A).name(),
            scores[Side::A],
            self.game.agent(Side::B).name(),
            scores[Side::B],
            self.game.state().round
        )
    }
}
