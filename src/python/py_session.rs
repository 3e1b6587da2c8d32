//! Session bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::ai::{FirstMoveSelector, MoveSelector, RandomMoveSelector};
use crate::core::{SessionConfig, Square, CELL_COUNT};
use crate::error::EngineError;
use crate::game::{AiOutcome, AiStep, GameSession, TurnController};
use crate::nn::{MoveOracle, UnavailableOracle};
use crate::rules::{Move, ProgenitorRule};

use super::py_oracle::{PyEncodedState, PyOracle};

fn to_py_err(err: EngineError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

type MoveTuple = (i8, i8, i8, i8, bool);

fn move_tuple(mv: &Move) -> MoveTuple {
    (
        mv.origin.x,
        mv.origin.y,
        mv.destination.x,
        mv.destination.y,
        mv.is_capture,
    )
}

fn step_tuple(step: &AiStep) -> Option<MoveTuple> {
    match &step.outcome {
        AiOutcome::Moved(record) => Some(move_tuple(&record.mv)),
        AiOutcome::Skipped(_) => None,
    }
}

/// Python wrapper for a game session and its turn controller.
///
/// Moves are reported as `(from_x, from_y, to_x, to_y, is_capture)` tuples.
#[pyclass(name = "GameSession")]
pub struct PyGameSession {
    controller: TurnController<Box<dyn MoveOracle>, Box<dyn MoveSelector>>,
}

#[pymethods]
impl PyGameSession {
    /// Create a session on the standard layout.
    ///
    /// # Arguments
    /// - oracle: callable taking a float32 array of length 100, or None
    /// - seed: seed for the random selector
    /// - random_selector: pick AI moves uniformly instead of the first one
    /// - claim_on_generate: run the Fire claim during move generation
    /// - progenitor_rule: end the game by the progenitor race
    #[new]
    #[pyo3(signature = (
        oracle = None,
        seed = 42,
        random_selector = false,
        claim_on_generate = true,
        progenitor_rule = false
    ))]
    fn new(
        oracle: Option<PyObject>,
        seed: u64,
        random_selector: bool,
        claim_on_generate: bool,
        progenitor_rule: bool,
    ) -> PyResult<Self> {
        let config = SessionConfig::headless()
            .with_seed(seed)
            .with_claim_on_generate(claim_on_generate);
        let session = GameSession::new(config).map_err(to_py_err)?;

        let oracle: Box<dyn MoveOracle> = match oracle {
            Some(callback) => Box::new(PyOracle::from_callable(callback)),
            None => Box::new(UnavailableOracle::new("no oracle supplied")),
        };
        let selector: Box<dyn MoveSelector> = if random_selector {
            Box::new(RandomMoveSelector::from_config(session.config()))
        } else {
            Box::new(FirstMoveSelector)
        };

        let mut controller = TurnController::with_selector(session, oracle, selector);
        if progenitor_rule {
            controller = controller.with_win_condition(ProgenitorRule::new());
        }
        Ok(Self { controller })
    }

    /// Oracle encoding of the current board.
    fn encode<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_slice_bound(py, &self.controller.session().encode().tensor)
    }

    fn encoded_state(&self) -> PyEncodedState {
        PyEncodedState(self.controller.session().encode())
    }

    /// The 80 board cells, row-major, as catalog encodings (0 = empty).
    fn board(&self) -> Vec<i8> {
        let board = self.controller.session().board();
        (0..CELL_COUNT)
            .map(|i| {
                Square::from_index(i)
                    .and_then(|sq| board.get(sq))
                    .map_or(0, |p| p.variant.encoding())
            })
            .collect()
    }

    /// Piece name on a square, or None.
    fn piece_at(&self, x: i8, y: i8) -> Option<&'static str> {
        self.controller
            .session()
            .board()
            .get(Square::new(x, y))
            .map(|p| p.variant.name())
    }

    /// Claimed neutral squares as `(x, y, side)`.
    fn marked(&self) -> Vec<(i8, i8, String)> {
        self.controller
            .session()
            .markers()
            .marked()
            .map(|(sq, side)| (sq.x, sq.y, side.to_string()))
            .collect()
    }

    #[getter]
    fn current_side(&self) -> Option<String> {
        self.controller.session().current_side().map(|s| s.to_string())
    }

    #[getter]
    fn turn_number(&self) -> u32 {
        self.controller.session().turn_number()
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.controller.session().is_game_over()
    }

    /// "Creationist wins", "Evolutionist wins", "draw", or None.
    #[getter]
    fn result(&self) -> Option<String> {
        self.controller.session().result().map(|r| r.to_string())
    }

    fn select_piece(&mut self, x: i8, y: i8) -> PyResult<Vec<MoveTuple>> {
        let moves = self
            .controller
            .select_piece(Square::new(x, y))
            .map_err(to_py_err)?;
        Ok(moves.iter().map(move_tuple).collect())
    }

    fn apply_human_move(&mut self, fx: i8, fy: i8, tx: i8, ty: i8) -> PyResult<MoveTuple> {
        let record = self
            .controller
            .apply_human_move(Square::new(fx, fy), Square::new(tx, ty))
            .map_err(to_py_err)?;
        Ok(move_tuple(&record.mv))
    }

    /// Process one AI piece. Returns its move, or None if it was skipped.
    fn step_ai(&mut self) -> PyResult<Option<MoveTuple>> {
        let step = self.controller.step_ai().map_err(to_py_err)?;
        Ok(step_tuple(&step))
    }

    /// Finish the AI turn. Returns the moves made.
    fn run_ai_turn(&mut self) -> PyResult<Vec<MoveTuple>> {
        let steps = self.controller.run_ai_turn().map_err(to_py_err)?;
        Ok(steps.iter().filter_map(step_tuple).collect())
    }

    fn __repr__(&self) -> String {
        let session = self.controller.session();
        let status = match session.current_side() {
            Some(side) => side.to_string(),
            None => "game over".to_string(),
        };
        format!("GameSession(turn={}, to_move={})", session.turn_number(), status)
    }
}
