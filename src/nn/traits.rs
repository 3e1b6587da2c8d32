//! Oracle traits for move prediction.
//!
//! The engine never knows what sits behind `MoveOracle`: a neural network, a
//! lookup table, a Python callable, or one of the baselines below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Square;

/// Oracle input: the board flattened to row-major `f32` values.
///
/// `shape` travels with the data so a tensor backend can reshape it without
/// knowing the board size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    pub tensor: Vec<f32>,
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Wrap an encoding. `shape` must multiply out to `tensor.len()`.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "encoding length does not match its shape"
        );
        Self { tensor, shape }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Encoded value of `square`, `None` off the board.
    #[must_use]
    pub fn cell(&self, square: Square) -> Option<f32> {
        square.index().and_then(|i| self.tensor.get(i).copied())
    }
}

/// Failure reported by (or about) an oracle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OracleError {
    /// The oracle is not loaded or cannot be reached.
    #[error("oracle unavailable: {0}")]
    Unavailable(String),

    /// The oracle ran but raised an error.
    #[error("oracle failed: {0}")]
    Failed(String),

    #[error("oracle input has length {actual}, expected {expected}")]
    InputShape { expected: usize, actual: usize },

    #[error("oracle output has length {actual}, expected {expected}")]
    OutputShape { expected: usize, actual: usize },
}

/// External prediction capability.
///
/// Maps a 100-long board encoding to a 2-long output. Implementations return
/// the raw output; shape validation happens in `MoveOracleAdapter`.
pub trait MoveOracle: Send + Sync {
    fn predict(&self, encoded: &EncodedState) -> Result<Vec<f32>, OracleError>;
}

impl<O: MoveOracle + ?Sized> MoveOracle for Box<O> {
    fn predict(&self, encoded: &EncodedState) -> Result<Vec<f32>, OracleError> {
        (**self).predict(encoded)
    }
}

/// Always predicts `[0.0, 0.0]` (baseline for testing).
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroOracle;

impl MoveOracle for ZeroOracle {
    fn predict(&self, _encoded: &EncodedState) -> Result<Vec<f32>, OracleError> {
        Ok(vec![0.0, 0.0])
    }
}

/// Always predicts the same pair.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstantOracle {
    output: [f32; 2],
}

impl ConstantOracle {
    pub fn new(a: f32, b: f32) -> Self {
        Self { output: [a, b] }
    }
}

impl MoveOracle for ConstantOracle {
    fn predict(&self, _encoded: &EncodedState) -> Result<Vec<f32>, OracleError> {
        Ok(self.output.to_vec())
    }
}

/// Stands in for a model that failed to load.
#[derive(Clone, Debug)]
pub struct UnavailableOracle {
    reason: String,
}

impl UnavailableOracle {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for UnavailableOracle {
    fn default() -> Self {
        Self::new("model asset not loaded")
    }
}

impl MoveOracle for UnavailableOracle {
    fn predict(&self, _encoded: &EncodedState) -> Result<Vec<f32>, OracleError> {
        Err(OracleError::Unavailable(self.reason.clone()))
    }
}

/// Closure-backed oracle.
///
/// ```
/// use origins_engine::nn::{EncodedState, FnOracle, MoveOracle};
///
/// let oracle = FnOracle::new(|s: &EncodedState| Ok(vec![s.tensor[0], 1.0]));
/// let out = oracle.predict(&EncodedState::new(vec![0.0; 100], vec![100])).unwrap();
/// assert_eq!(out, vec![0.0, 1.0]);
/// ```
pub struct FnOracle<F> {
    f: F,
}

impl<F> FnOracle<F>
where
    F: Fn(&EncodedState) -> Result<Vec<f32>, OracleError> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> MoveOracle for FnOracle<F>
where
    F: Fn(&EncodedState) -> Result<Vec<f32>, OracleError> + Send + Sync,
{
    fn predict(&self, encoded: &EncodedState) -> Result<Vec<f32>, OracleError> {
        (self.f)(encoded)
    }
}
