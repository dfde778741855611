//! Value type bindings for Python.

use pyo3::prelude::*;

use crate::arena::RoundReport;

/// Python wrapper for RoundReport.
///
/// Choices and tiers are exposed as their display names.
#[pyclass(name = "RoundReport")]
#[derive(Clone, Debug)]
pub struct PyRoundReport(pub RoundReport);

#[pymethods]
impl PyRoundReport {
    #[getter]
    fn round(&self) -> u64 {
        self.0.round
    }

    #[getter]
    fn choice_a(&self) -> &'static str {
        self.0.choice_a.name()
    }

    #[getter]
    fn choice_b(&self) -> &'static str {
        self.0.choice_b.name()
    }

    /// Winner's name, or None on a tie.
    #[getter]
    fn winner(&self) -> Option<String> {
        self.0.outcome.winner().map(str::to_string)
    }

    #[getter]
    fn is_tie(&self) -> bool {
        self.0.outcome.is_tie()
    }

    /// Result line: "It's a tie!" or "Winner: <name>".
    #[getter]
    fn result_text(&self) -> String {
        self.0.outcome.to_string()
    }

    #[getter]
    fn score_a(&self) -> u32 {
        self.0.score_a
    }

    #[getter]
    fn score_b(&self) -> u32 {
        self.0.score_b
    }

    /// Revealed tier names, e.g. ["star", "top"].
    #[getter]
    fn stack(&self) -> Vec<&'static str> {
        self.0.stack.tiers().iter().map(|tier| tier.name()).collect()
    }

    /// JSON encoding of the full report.
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.0)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "RoundReport(round={}, {} vs {}, score={}-{}, tiers={})",
            self.0.round,
            self.0.choice_a,
            self.0.choice_b,
            self.0.score_a,
            self.0.score_b,
            self.0.stack.len()
        )
    }
}
