//! Piece instances.
//!
//! A `Piece` is a variant plus a stable id. Ids are handed out in creation
//! order and the AI visits its pieces in that order. The square a piece sits
//! on is owned by the board, not the piece.

use serde::{Deserialize, Serialize};

use super::catalog::PieceVariant;
use crate::core::Side;

/// Stable, creation-ordered piece identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u16);

impl PieceId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub variant: PieceVariant,
}

impl Piece {
    #[must_use]
    pub const fn new(id: PieceId, variant: PieceVariant) -> Self {
        Self { id, variant }
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.variant.side()
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.variant, self.id.0)
    }
}
