//! Python bindings for the Origins engine.
//!
//! A Python callable can stand in as the move oracle, and a whole session
//! can be driven from Python.
//!
//! # Quick Start
//!
//! ```python
//! import numpy as np
//! import origins_engine as oe
//!
//! def oracle(board: np.ndarray) -> list[float]:
//!     return model.predict(board.reshape(1, 100))[0].tolist()
//!
//! game = oe.GameSession(oracle=oracle)
//! game.apply_human_move(0, 0, 0, 1)
//! moves = game.run_ai_turn()
//! ```

use pyo3::prelude::*;

mod py_oracle;
mod py_session;

pub use py_oracle::*;
pub use py_session::*;

/// origins_engine: the Origins board game engine.
#[pymodule]
fn origins_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEncodedState>()?;
    m.add_class::<PyOracle>()?;
    m.add_class::<PyGameSession>()?;
    Ok(())
}
