//! Board encoding for oracle input.
//!
//! The oracle was trained on a flat vector of 100 values: the 80 board cells
//! in row-major order (`y * 10 + x`), followed by 20 reserved zeros. Each cell
//! holds the occupant's signed catalog encoding, or 0 when empty.

use crate::board::BoardModel;
use crate::core::CELL_COUNT;
use crate::nn::traits::EncodedState;

/// Length of an encoded board.
pub const ENCODING_LEN: usize = 100;

/// Trailing slots after the board cells, always zero.
pub const RESERVED_LEN: usize = ENCODING_LEN - CELL_COUNT;

/// Encodes a board into a tensor for oracle input.
pub trait StateEncoder: Send + Sync {
    fn encode(&self, board: &BoardModel) -> EncodedState;

    /// Shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;
}

/// The standard 100-long board encoding.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardEncoder;

impl StateEncoder for BoardEncoder {
    fn encode(&self, board: &BoardModel) -> EncodedState {
        let mut tensor = vec![0.0f32; ENCODING_LEN];
        for (square, piece) in board.pieces() {
            if let Some(idx) = square.index() {
                tensor[idx] = f32::from(piece.variant.encoding());
            }
        }
        EncodedState::new(tensor, self.output_shape())
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![ENCODING_LEN]
    }
}
