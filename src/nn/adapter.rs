//! Bridge between the board and an injected `MoveOracle`.

use serde::{Deserialize, Serialize};

use crate::board::BoardModel;
use crate::error::EngineResult;
use crate::nn::encoder::{BoardEncoder, StateEncoder, ENCODING_LEN};
use crate::nn::traits::{EncodedState, MoveOracle, OracleError};

/// Oracle output length.
pub const OUTPUT_LEN: usize = 2;

/// The oracle's raw two-value prediction, passed through unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OracleOutput(pub f32, pub f32);

impl OracleOutput {
    #[must_use]
    pub fn to_array(self) -> [f32; OUTPUT_LEN] {
        [self.0, self.1]
    }
}

/// Encodes boards, calls the oracle and validates both ends of the call.
///
/// ```
/// use origins_engine::board::BoardSetup;
/// use origins_engine::nn::{ConstantOracle, MoveOracleAdapter, OracleOutput};
///
/// let setup = BoardSetup::standard().unwrap();
/// let adapter = MoveOracleAdapter::new(ConstantOracle::new(0.5, 0.25));
/// let out = adapter.predict_board(setup.board()).unwrap();
/// assert_eq!(out, OracleOutput(0.5, 0.25));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MoveOracleAdapter<O> {
    oracle: O,
    encoder: BoardEncoder,
}

impl<O: MoveOracle> MoveOracleAdapter<O> {
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            encoder: BoardEncoder,
        }
    }

    /// Encode a board into the 100-long oracle input.
    #[must_use]
    pub fn encode(&self, board: &BoardModel) -> EncodedState {
        self.encoder.encode(board)
    }

    /// Run the oracle on an encoded board.
    ///
    /// Fails with `OraclePrediction` when the input is not 100 long, the
    /// oracle errors, or its output is not exactly 2 long.
    pub fn predict(&self, encoded: &EncodedState) -> EngineResult<OracleOutput> {
        if encoded.len() != ENCODING_LEN {
            return Err(OracleError::InputShape {
                expected: ENCODING_LEN,
                actual: encoded.len(),
            }
            .into());
        }

        let raw = self.oracle.predict(encoded)?;
        match raw.as_slice() {
            &[a, b] => Ok(OracleOutput(a, b)),
            other => Err(OracleError::OutputShape {
                expected: OUTPUT_LEN,
                actual: other.len(),
            }
            .into()),
        }
    }

    /// `encode` followed by `predict`.
    pub fn predict_board(&self, board: &BoardModel) -> EngineResult<OracleOutput> {
        self.predict(&self.encode(board))
    }

    #[must_use]
    pub fn oracle(&self) -> &O {
        &self.oracle
    }
}
