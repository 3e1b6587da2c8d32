//! The 10x8 piece grid.
//!
//! `BoardModel` stores at most one piece per square and keeps a
//! `PieceId -> Square` index in step with the grid, so pieces can be found by
//! id (the turn controller walks its roster that way).

use rustc_hash::FxHashMap;

use crate::core::{Side, Square, CELL_COUNT};
use crate::error::{EngineError, EngineResult};
use crate::pieces::{Piece, PieceId};
use crate::rules::Move;

/// Board occupancy.
///
/// ## Example
///
/// ```
/// use origins_engine::board::BoardModel;
/// use origins_engine::core::Square;
/// use origins_engine::pieces::{Piece, PieceId, PieceVariant};
///
/// let mut board = BoardModel::new();
/// let fire = Piece::new(PieceId::new(0), PieceVariant::Fire);
///
/// board.set(Square::new(2, 2), fire).unwrap();
/// assert_eq!(board.get(Square::new(2, 2)), Some(&fire));
/// assert_eq!(board.locate(PieceId::new(0)), Some(Square::new(2, 2)));
///
/// assert!(board.set(Square::new(10, 0), fire).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardModel {
    cells: [Option<Piece>; CELL_COUNT],
    index: FxHashMap<PieceId, Square>,
}

impl Default for BoardModel {
    fn default() -> Self {
        Self {
            cells: [None; CELL_COUNT],
            index: FxHashMap::default(),
        }
    }
}

impl BoardModel {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a square lies on the grid.
    #[must_use]
    pub fn in_bounds(&self, square: Square) -> bool {
        square.in_bounds()
    }

    /// Piece on a square. Off-board squares read as empty.
    #[must_use]
    pub fn get(&self, square: Square) -> Option<&Piece> {
        square.index().and_then(|i| self.cells[i].as_ref())
    }

    /// Check whether a square holds a piece.
    #[must_use]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    /// Place a piece, replacing whatever was there.
    ///
    /// Returns the displaced piece. If the same piece already stood on another
    /// square it is moved, never duplicated.
    pub fn set(&mut self, square: Square, piece: Piece) -> EngineResult<Option<Piece>> {
        let idx = square.index().ok_or(EngineError::OutOfBounds(square))?;

        if let Some(previous) = self.index.get(&piece.id).copied() {
            if previous != square {
                if let Some(prev_idx) = previous.index() {
                    self.cells[prev_idx] = None;
                }
            }
        }

        let displaced = self.cells[idx].replace(piece);
        if let Some(old) = displaced {
            if old.id != piece.id {
                self.index.remove(&old.id);
            }
        }
        self.index.insert(piece.id, square);

        Ok(displaced.filter(|old| old.id != piece.id))
    }

    /// Empty a square, returning the piece that was there.
    pub fn clear(&mut self, square: Square) -> EngineResult<Option<Piece>> {
        let idx = square.index().ok_or(EngineError::OutOfBounds(square))?;
        let removed = self.cells[idx].take();
        if let Some(piece) = removed {
            self.index.remove(&piece.id);
        }
        Ok(removed)
    }

    /// Square a piece currently stands on, or `None` once captured.
    #[must_use]
    pub fn locate(&self, id: PieceId) -> Option<Square> {
        self.index.get(&id).copied()
    }

    /// Check whether a piece is still on the board.
    #[must_use]
    pub fn contains(&self, id: PieceId) -> bool {
        self.index.contains_key(&id)
    }

    /// Move a piece from origin to destination, capturing any occupant.
    ///
    /// Returns the captured piece. Fails if the origin does not hold the
    /// move's piece or either square is off the board.
    pub fn apply(&mut self, mv: &Move) -> EngineResult<Option<Piece>> {
        if !mv.destination.in_bounds() {
            return Err(EngineError::OutOfBounds(mv.destination));
        }
        let piece = match self.get(mv.origin) {
            Some(p) if p.id == mv.piece => *p,
            _ if !mv.origin.in_bounds() => return Err(EngineError::OutOfBounds(mv.origin)),
            _ => return Err(EngineError::NoPieceAt(mv.origin)),
        };

        self.clear(mv.origin)?;
        self.set(mv.destination, piece)
    }

    /// Iterate over (square, piece) pairs in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            let piece = cell.as_ref()?;
            Square::from_index(i).map(|sq| (sq, piece))
        })
    }

    /// Iterate over one side's pieces in row-major order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, &Piece)> {
        self.pieces().filter(move |(_, p)| p.side() == side)
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::PieceVariant;

    fn piece(id: u16, variant: PieceVariant) -> Piece {
        Piece::new(PieceId::new(id), variant)
    }

    #[test]
    fn test_set_then_get() {
        let mut board = BoardModel::new();
        let p = piece(0, PieceVariant::Earth);
        assert_eq!(board.set(Square::new(3, 4), p).unwrap(), None);
        assert_eq!(board.get(Square::new(3, 4)), Some(&p));
        assert!(board.is_occupied(Square::new(3, 4)));
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn test_set_overwrites_and_drops_displaced() {
        let mut board = BoardModel::new();
        let a = piece(0, PieceVariant::Earth);
        let b = piece(1, PieceVariant::EvoAir);
        let sq = Square::new(5, 5);

        board.set(sq, a).unwrap();
        let displaced = board.set(sq, b).unwrap();

        assert_eq!(displaced, Some(a));
        assert_eq!(board.get(sq), Some(&b));
        assert_eq!(board.locate(a.id), None);
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn test_set_same_piece_elsewhere_moves_it() {
        let mut board = BoardModel::new();
        let a = piece(0, PieceVariant::Water);

        board.set(Square::new(0, 0), a).unwrap();
        board.set(Square::new(1, 1), a).unwrap();

        assert_eq!(board.get(Square::new(0, 0)), None);
        assert_eq!(board.locate(a.id), Some(Square::new(1, 1)));
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn test_set_same_piece_same_square_is_noop() {
        let mut board = BoardModel::new();
        let a = piece(0, PieceVariant::Water);
        board.set(Square::new(0, 0), a).unwrap();
        assert_eq!(board.set(Square::new(0, 0), a).unwrap(), None);
        assert_eq!(board.locate(a.id), Some(Square::new(0, 0)));
    }

    #[test]
    fn test_out_of_bounds_mutators() {
        let mut board = BoardModel::new();
        let p = piece(0, PieceVariant::Fire);
        let off = Square::new(-1, 0);

        assert_eq!(board.set(off, p), Err(EngineError::OutOfBounds(off)));
        assert_eq!(board.clear(Square::new(0, 8)), Err(EngineError::OutOfBounds(Square::new(0, 8))));
        assert_eq!(board.get(off), None);
        assert!(!board.in_bounds(off));
    }

    #[test]
    fn test_clear() {
        let mut board = BoardModel::new();
        let p = piece(7, PieceVariant::Man);
        board.set(Square::new(4, 0), p).unwrap();

        assert_eq!(board.clear(Square::new(4, 0)).unwrap(), Some(p));
        assert_eq!(board.clear(Square::new(4, 0)).unwrap(), None);
        assert!(!board.contains(p.id));
    }

    #[test]
    fn test_apply_move_with_capture() {
        let mut board = BoardModel::new();
        let fire = piece(0, PieceVariant::Fire);
        let water = piece(1, PieceVariant::EvoWater);
        board.set(Square::new(2, 2), fire).unwrap();
        board.set(Square::new(2, 5), water).unwrap();

        let mv = Move::capture(fire.id, Square::new(2, 2), Square::new(2, 5));
        let captured = board.apply(&mv).unwrap();

        assert_eq!(captured, Some(water));
        assert_eq!(board.get(Square::new(2, 5)), Some(&fire));
        assert_eq!(board.get(Square::new(2, 2)), None);
        assert!(!board.contains(water.id));
    }

    #[test]
    fn test_apply_rejects_wrong_origin() {
        let mut board = BoardModel::new();
        let fire = piece(0, PieceVariant::Fire);
        board.set(Square::new(2, 2), fire).unwrap();

        let mv = Move::step(PieceId::new(9), Square::new(2, 2), Square::new(2, 3));
        assert_eq!(board.apply(&mv), Err(EngineError::NoPieceAt(Square::new(2, 2))));

        let mv = Move::step(fire.id, Square::new(2, 2), Square::new(2, 8));
        assert_eq!(board.apply(&mv), Err(EngineError::OutOfBounds(Square::new(2, 8))));
        assert_eq!(board.locate(fire.id), Some(Square::new(2, 2)));
    }

    #[test]
    fn test_pieces_iterate_row_major() {
        let mut board = BoardModel::new();
        board.set(Square::new(9, 7), piece(0, PieceVariant::ApeMan)).unwrap();
        board.set(Square::new(0, 0), piece(1, PieceVariant::Earth)).unwrap();
        board.set(Square::new(5, 0), piece(2, PieceVariant::Man)).unwrap();

        let squares: Vec<_> = board.pieces().map(|(sq, _)| sq).collect();
        assert_eq!(squares, vec![Square::new(0, 0), Square::new(5, 0), Square::new(9, 7)]);

        let evo: Vec<_> = board.pieces_of(Side::Evolutionist).map(|(_, p)| p.id).collect();
        assert_eq!(evo, vec![PieceId::new(0)]);
    }
}
