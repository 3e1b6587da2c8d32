//! Move history entries.

use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::pieces::PieceVariant;
use crate::rules::Move;

/// Record of an applied move.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that moved.
    pub side: Side,

    /// The move applied.
    pub mv: Move,

    /// Variant of the moving piece.
    pub piece: PieceVariant,

    /// Variant of the captured piece, if any.
    pub captured: Option<PieceVariant>,

    /// Turn number when the move was applied.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{} {} {}", self.turn, self.sequence, self.piece, self.mv)?;
        if let Some(captured) = self.captured {
            write!(f, " takes {captured}")?;
        }
        Ok(())
    }
}
