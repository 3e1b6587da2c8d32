//! Neutral-square markers.
//!
//! Neutral tiles sit on squares that were empty at setup. A tile starts
//! unmarked; a Fire piece that rays across it claims it. Once marked, a tile
//! blocks traversal and capture for every non-Fire piece. Marking is
//! permanent.
//!
//! Markers are independent of occupancy: a piece may stand on a marked square.

use serde::{Deserialize, Serialize};

use super::model::BoardModel;
use crate::core::{Side, Square, CELL_COUNT};
use crate::error::{EngineError, EngineResult};

/// State of a neutral tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeutralSquareState {
    Unmarked,
    /// Claimed by a Fire piece of `claimed_by`. Presentation derives the tile
    /// colour from the side.
    Marked { claimed_by: Side },
}

impl NeutralSquareState {
    #[must_use]
    pub fn is_marked(self) -> bool {
        matches!(self, NeutralSquareState::Marked { .. })
    }
}

/// Per-square neutral tiles. `None` means the square has no tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeutralMarkers {
    tiles: [Option<NeutralSquareState>; CELL_COUNT],
}

impl Default for NeutralMarkers {
    fn default() -> Self {
        Self::unmarked()
    }
}

impl NeutralMarkers {
    /// An unmarked tile on every square.
    #[must_use]
    pub fn unmarked() -> Self {
        Self {
            tiles: [Some(NeutralSquareState::Unmarked); CELL_COUNT],
        }
    }

    /// Unmarked tiles on the squares that are empty on `board`.
    ///
    /// Occupied squares get no tile and can never be marked.
    #[must_use]
    pub fn for_board(board: &BoardModel) -> Self {
        let mut markers = Self::unmarked();
        for (square, _) in board.pieces() {
            if let Some(i) = square.index() {
                markers.tiles[i] = None;
            }
        }
        markers
    }

    /// Tile state, or `None` for squares without a tile (or off the board).
    #[must_use]
    pub fn state(&self, square: Square) -> Option<NeutralSquareState> {
        square.index().and_then(|i| self.tiles[i])
    }

    /// Check whether the square carries a tile at all.
    #[must_use]
    pub fn has_tile(&self, square: Square) -> bool {
        self.state(square).is_some()
    }

    /// Check whether the square carries a marked tile.
    #[must_use]
    pub fn is_marked(&self, square: Square) -> bool {
        self.state(square).is_some_and(NeutralSquareState::is_marked)
    }

    /// Mark an unmarked tile for `side`.
    ///
    /// Returns `true` if the tile changed. Squares without a tile and tiles
    /// already marked are left alone.
    pub fn claim(&mut self, square: Square, side: Side) -> EngineResult<bool> {
        let idx = square.index().ok_or(EngineError::OutOfBounds(square))?;
        match self.tiles[idx] {
            Some(NeutralSquareState::Unmarked) => {
                self.tiles[idx] = Some(NeutralSquareState::Marked { claimed_by: side });
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Iterate over marked squares in row-major order.
    pub fn marked(&self) -> impl Iterator<Item = (Square, Side)> + '_ {
        self.tiles.iter().enumerate().filter_map(|(i, tile)| match tile {
            Some(NeutralSquareState::Marked { claimed_by }) => {
                Square::from_index(i).map(|sq| (sq, *claimed_by))
            }
            _ => None,
        })
    }

    /// Number of marked tiles.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.marked().count()
    }
}
