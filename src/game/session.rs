//! Game session: the top-level aggregate a presentation layer reads from.
//!
//! The session owns the board, the neutral markers, each side's roster and
//! the move history. It knows how to apply a move but not whose turn it is
//! allowed to be; `TurnController` drives phase changes.

use im::Vector;

use crate::board::{BoardModel, BoardSetup, NeutralMarkers, Roster};
use crate::core::{SessionConfig, Side, Square};
use crate::error::{EngineError, EngineResult};
use crate::nn::{BoardEncoder, EncodedState, StateEncoder};
use crate::pieces::Piece;
use crate::rules::{GameResult, Move, MoveGenerator, MoveList};

use super::history::MoveRecord;
use super::turn::TurnPhase;

/// Complete game state.
///
/// Cloning is cheap enough for presentation snapshots: history is an
/// `im::Vector` and the board is a fixed array.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: BoardModel,
    markers: NeutralMarkers,
    roster: Roster,
    phase: TurnPhase,
    turn_number: u32,
    sequence: u32,
    history: Vector<MoveRecord>,
    config: SessionConfig,
}

impl GameSession {
    /// Session on the standard opening layout, Creationist to move.
    pub fn new(config: SessionConfig) -> EngineResult<Self> {
        Ok(Self::from_setup(BoardSetup::standard()?, config))
    }

    /// Session on a custom layout. Neutral tiles go on every empty square.
    pub fn from_setup(setup: BoardSetup, config: SessionConfig) -> Self {
        let (board, roster) = setup.finish();
        let markers = NeutralMarkers::for_board(&board);
        Self {
            board,
            markers,
            roster,
            phase: TurnPhase::CreationistTurn,
            turn_number: 1,
            sequence: 0,
            history: Vector::new(),
            config,
        }
    }

    /// Replace the neutral marker layer.
    pub fn with_markers(mut self, markers: NeutralMarkers) -> Self {
        self.markers = markers;
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &BoardModel {
        &self.board
    }

    #[must_use]
    pub fn markers(&self) -> &NeutralMarkers {
        &self.markers
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Side to act, or `None` once the game is over.
    #[must_use]
    pub fn current_side(&self) -> Option<Side> {
        self.phase.side()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase.is_game_over()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            TurnPhase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Roster pieces still on the board, in creation order.
    pub fn live_pieces(&self, side: Side) -> impl Iterator<Item = &Piece> {
        self.roster[side]
            .iter()
            .filter(move |p| self.board.contains(p.id))
    }

    /// Oracle encoding of the current board.
    #[must_use]
    pub fn encode(&self) -> EncodedState {
        BoardEncoder.encode(&self.board)
    }

    // === Moves ===

    /// Legal moves for the piece on `square`, without claiming.
    pub fn legal_moves(&self, square: Square) -> EngineResult<MoveList> {
        MoveGenerator::legal_moves(&self.board, &self.markers, square)
    }

    /// Legal moves for the piece on `square`, claiming per
    /// `SessionConfig::claim_on_generate`.
    pub fn moves_for(&mut self, square: Square) -> EngineResult<MoveList> {
        MoveGenerator::generate(
            &self.board,
            &mut self.markers,
            square,
            self.config.claim_on_generate,
        )
    }

    /// Apply a move for `side` and record it.
    ///
    /// Legality is the caller's concern; this only checks that the origin
    /// holds the moving piece.
    pub(crate) fn apply_move(&mut self, side: Side, mv: Move) -> EngineResult<MoveRecord> {
        let piece = self
            .board
            .get(mv.origin)
            .copied()
            .filter(|p| p.id == mv.piece)
            .ok_or(EngineError::NoPieceAt(mv.origin))?;

        let captured = self.board.apply(&mv)?;
        let record = MoveRecord {
            side,
            mv,
            piece: piece.variant,
            captured: captured.map(|p| p.variant),
            turn: self.turn_number,
            sequence: self.sequence,
        };
        self.history.push_back(record);
        self.sequence += 1;
        Ok(record)
    }

    // === Phase ===

    pub(crate) fn set_phase(&mut self, phase: TurnPhase) {
        self.phase = phase;
    }

    /// Close a full round: back to the Creationist, next turn number.
    pub(crate) fn advance_round(&mut self) {
        self.phase = TurnPhase::CreationistTurn;
        self.turn_number += 1;
        self.sequence = 0;
    }
}
