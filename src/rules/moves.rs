//! Move representation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Square;
use crate::pieces::PieceId;

/// A single move: one piece from origin to destination.
///
/// Moves are transient. The generator produces them and the session applies
/// one of them straight away.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub piece: PieceId,
    pub origin: Square,
    pub destination: Square,
    pub is_capture: bool,
}

impl Move {
    /// A move onto an empty square.
    #[must_use]
    pub const fn step(piece: PieceId, origin: Square, destination: Square) -> Self {
        Self {
            piece,
            origin,
            destination,
            is_capture: false,
        }
    }

    /// A move that captures the piece on `destination`.
    #[must_use]
    pub const fn capture(piece: PieceId, origin: Square, destination: Square) -> Self {
        Self {
            piece,
            origin,
            destination,
            is_capture: true,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.is_capture { "x" } else { "-" };
        write!(f, "{}{}{}", self.origin, sep, self.destination)
    }
}

/// Generated moves in emission order.
/// Inline capacity covers a piece in open play without heap allocation.
pub type MoveList = SmallVec<[Move; 24]>;
