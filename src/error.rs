//! Engine error taxonomy.
//!
//! Only `OraclePrediction` is recovered inside the engine (the AI skips the
//! piece and the turn continues). Everything else is surfaced to the caller.

use thiserror::Error;

use crate::core::{Side, Square};
use crate::nn::OracleError;

/// Errors produced by the game engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Square lies outside the 10x8 grid.
    #[error("square {0} is outside the board")]
    OutOfBounds(Square),

    /// Piece name not present in the catalog.
    #[error("unknown piece variant: {0:?}")]
    UnknownVariant(String),

    /// The oracle collaborator was unavailable or returned a malformed result.
    #[error("oracle prediction failed: {0}")]
    OraclePrediction(#[from] OracleError),

    /// The selector was handed an empty move list.
    #[error("no legal moves")]
    NoLegalMoves,

    /// Expected a piece on this square and found none (or a different one).
    #[error("no piece at {0}")]
    NoPieceAt(Square),

    /// The action belongs to the other phase.
    #[error("it is not the {0} turn")]
    NotYourTurn(Side),

    /// The selected piece belongs to the wrong side.
    #[error("piece at {square} belongs to {owner}")]
    WrongSide { square: Square, owner: Side },

    /// The destination is not among the piece's legal moves.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// The game has already ended.
    #[error("game is over")]
    GameOver,
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::OutOfBounds(Square::new(10, 3));
        assert_eq!(err.to_string(), "square (10, 3) is outside the board");

        let err = EngineError::UnknownVariant("dragon".into());
        assert_eq!(err.to_string(), "unknown piece variant: \"dragon\"");

        let err = EngineError::WrongSide {
            square: Square::new(0, 7),
            owner: Side::Evolutionist,
        };
        assert_eq!(err.to_string(), "piece at (0, 7) belongs to Evolutionist");
    }

    #[test]
    fn test_oracle_error_converts() {
        let err: EngineError = OracleError::Unavailable("no model".into()).into();
        assert!(matches!(err, EngineError::OraclePrediction(_)));
    }
}
