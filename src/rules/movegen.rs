//! Legal move generation by ray casting.
//!
//! Each piece casts one ray per direction in its movement pattern, in
//! pattern order. Along a ray:
//! - an empty square is a destination and the ray continues
//! - a marked neutral tile stops a non-Fire ray before it
//! - the first occupied square stops the ray; an opposing piece there is a
//!   capture unless the square is marked and the mover is not Fire
//!
//! Fire pieces also claim every unmarked tile their rays cross. That claim is
//! a separate step (`claim_traversal`); `generate` runs query and claim
//! together the way a live session does.

use tracing::trace;

use crate::board::{BoardModel, NeutralMarkers};
use crate::core::Square;
use crate::error::{EngineError, EngineResult};
use crate::pieces::Piece;

use super::moves::{Move, MoveList};

/// Move generator. Stateless; all state lives in the board and markers.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    /// Legal moves for the piece on `from`, in emission order.
    ///
    /// Pure: neither board nor markers change.
    pub fn legal_moves(
        board: &BoardModel,
        markers: &NeutralMarkers,
        from: Square,
    ) -> EngineResult<MoveList> {
        let piece = Self::piece_at(board, from)?;
        let mut moves = MoveList::new();
        Self::cast_rays(board, markers, from, piece, &mut moves);
        Ok(moves)
    }

    /// Claim the tiles a Fire piece on `from` passes over.
    ///
    /// Returns the number of newly marked tiles. Non-Fire pieces claim nothing.
    pub fn claim_traversal(
        board: &BoardModel,
        markers: &mut NeutralMarkers,
        from: Square,
    ) -> EngineResult<usize> {
        let piece = Self::piece_at(board, from)?;
        if !piece.variant.is_fire() {
            return Ok(0);
        }
        let moves = Self::legal_moves(board, markers, from)?;
        Self::claim(markers, piece, &moves)
    }

    /// Legal moves, followed by the Fire claim when `claim` is set.
    ///
    /// With `claim` on, repeated calls on an unchanged board return the same
    /// moves while the marker state may change on the first call.
    pub fn generate(
        board: &BoardModel,
        markers: &mut NeutralMarkers,
        from: Square,
        claim: bool,
    ) -> EngineResult<MoveList> {
        let moves = Self::legal_moves(board, markers, from)?;
        if claim {
            let piece = Self::piece_at(board, from)?;
            if piece.variant.is_fire() {
                Self::claim(markers, piece, &moves)?;
            }
        }
        Ok(moves)
    }

    fn piece_at(board: &BoardModel, from: Square) -> EngineResult<Piece> {
        if !from.in_bounds() {
            return Err(EngineError::OutOfBounds(from));
        }
        board.get(from).copied().ok_or(EngineError::NoPieceAt(from))
    }

    fn cast_rays(
        board: &BoardModel,
        markers: &NeutralMarkers,
        from: Square,
        piece: Piece,
        out: &mut MoveList,
    ) {
        let fire = piece.variant.is_fire();
        let side = piece.side();

        for &dir in piece.variant.pattern().directions() {
            let mut sq = from.offset(dir);
            while sq.in_bounds() {
                let blocked = !fire && markers.is_marked(sq);
                match board.get(sq) {
                    None if blocked => break,
                    None => {
                        out.push(Move::step(piece.id, from, sq));
                        sq = sq.offset(dir);
                    }
                    Some(target) => {
                        if target.side() != side && !blocked {
                            out.push(Move::capture(piece.id, from, sq));
                        }
                        break;
                    }
                }
            }
        }
    }

    // Fire rays pass through marks, so every crossed square is a step destination.
    fn claim(markers: &mut NeutralMarkers, piece: Piece, moves: &[Move]) -> EngineResult<usize> {
        let mut claimed = 0;
        for mv in moves.iter().filter(|m| !m.is_capture) {
            if markers.claim(mv.destination, piece.side())? {
                claimed += 1;
            }
        }
        trace!(piece = %piece, claimed, "fire claim traversal");
        Ok(claimed)
    }
}
