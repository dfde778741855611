//! Python bindings for the rps-arena match engine.
//!
//! Lets a Python UI own the window and timer while the match logic runs
//! here.
//!
//! # Quick Start
//!
//! ```python
//! import rps_arena
//!
//! arena = rps_arena.Arena(name_a="AI 1", name_b="AI 2", seed=42)
//!
//! report = arena.play_round()
//! print(report.choice_a, report.choice_b, report.result_text)
//! print(report.score_a, report.score_b, report.stack)
//!
//! arena.reset_match()
//! ```

use pyo3::prelude::*;

mod py_arena;
mod py_core;

pub use py_arena::*;
pub use py_core::*;

/// rps_arena: a rock-paper-scissors agent arena.
#[pymodule]
fn rps_arena(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyArena>()?;
    m.add_class::<PyRoundReport>()?;
    Ok(())
}
