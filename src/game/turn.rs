//! Turn sequencing.
//!
//! `TurnController` is the two-phase state machine. The human acts on the
//! Creationist turn through `select_piece` and `apply_human_move`. The
//! Evolutionist turn is a queue of live Evolutionist pieces in creation order,
//! processed one piece per `step_ai` call so a scheduler can pace them.
//!
//! Per AI piece:
//! 1. skip it if it was captured since the turn began
//! 2. generate its legal moves (claiming per config)
//! 3. encode the board and ask the oracle; a failure skips the piece
//! 4. let the selector choose; an empty move list skips the piece, and so
//!    does a choice that is not one of the generated moves
//! 5. apply the move
//!
//! The win condition is checked after every applied move.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::ai::{FirstMoveSelector, MoveSelector};
use crate::core::{Side, Square};
use crate::error::{EngineError, EngineResult};
use crate::nn::{MoveOracle, MoveOracleAdapter, OracleError, OracleOutput};
use crate::pieces::PieceId;
use crate::rules::{GameResult, Move, MoveList, NoWinCondition, WinCondition};

use super::history::MoveRecord;
use super::session::GameSession;

/// Whose turn it is, or how the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    CreationistTurn,
    EvolutionistTurn,
    GameOver(GameResult),
}

impl TurnPhase {
    /// Side to act, `None` once the game is over.
    #[must_use]
    pub fn side(self) -> Option<Side> {
        match self {
            TurnPhase::CreationistTurn => Some(Side::Creationist),
            TurnPhase::EvolutionistTurn => Some(Side::Evolutionist),
            TurnPhase::GameOver(_) => None,
        }
    }

    #[must_use]
    pub fn is_game_over(self) -> bool {
        matches!(self, TurnPhase::GameOver(_))
    }
}

/// Why an AI piece did not move.
#[derive(Clone, Debug, PartialEq)]
pub enum SkipReason {
    /// The piece left the board before its step.
    Captured,
    /// The oracle was unavailable or returned a malformed result.
    OracleFailed(OracleError),
    NoLegalMoves,
    /// The selector returned a move that was not in the legal list.
    IllegalChoice(Move),
}

#[derive(Clone, Debug, PartialEq)]
pub enum AiOutcome {
    Moved(MoveRecord),
    Skipped(SkipReason),
}

/// Result of processing one AI piece.
#[derive(Clone, Debug, PartialEq)]
pub struct AiStep {
    pub piece: PieceId,
    pub outcome: AiOutcome,
    /// Oracle output for the board the piece saw, when the oracle was reached.
    pub oracle_output: Option<OracleOutput>,
}

impl AiStep {
    fn skipped(piece: PieceId, reason: SkipReason, oracle_output: Option<OracleOutput>) -> Self {
        Self {
            piece,
            outcome: AiOutcome::Skipped(reason),
            oracle_output,
        }
    }

    #[must_use]
    pub fn moved(&self) -> Option<&MoveRecord> {
        match &self.outcome {
            AiOutcome::Moved(record) => Some(record),
            AiOutcome::Skipped(_) => None,
        }
    }
}

/// Drives a `GameSession` through its phases.
///
/// ```
/// use origins_engine::core::{SessionConfig, Square};
/// use origins_engine::game::{GameSession, TurnController, TurnPhase};
/// use origins_engine::nn::ZeroOracle;
///
/// let session = GameSession::new(SessionConfig::headless()).unwrap();
/// let mut controller = TurnController::new(session, ZeroOracle);
///
/// controller.apply_human_move(Square::new(0, 0), Square::new(0, 1)).unwrap();
/// assert_eq!(controller.phase(), TurnPhase::EvolutionistTurn);
///
/// let steps = controller.run_ai_turn().unwrap();
/// assert_eq!(steps.len(), 10);
/// assert_eq!(controller.phase(), TurnPhase::CreationistTurn);
/// assert_eq!(controller.session().turn_number(), 2);
/// ```
pub struct TurnController<O, S = FirstMoveSelector> {
    session: GameSession,
    adapter: MoveOracleAdapter<O>,
    selector: S,
    win: Box<dyn WinCondition>,
    pending: VecDeque<PieceId>,
}

impl<O: MoveOracle> TurnController<O> {
    /// Controller with the first-move selector and no win condition.
    pub fn new(session: GameSession, oracle: O) -> Self {
        Self::with_selector(session, oracle, FirstMoveSelector)
    }
}

impl<O: MoveOracle, S: MoveSelector> TurnController<O, S> {
    pub fn with_selector(session: GameSession, oracle: O, selector: S) -> Self {
        let mut controller = Self {
            session,
            adapter: MoveOracleAdapter::new(oracle),
            selector,
            win: Box::new(NoWinCondition),
            pending: VecDeque::new(),
        };
        // A session handed over mid-turn resumes with a fresh queue.
        if controller.session.phase() == TurnPhase::EvolutionistTurn {
            controller.begin_evolutionist_turn();
        }
        controller
    }

    /// Replace the win condition.
    pub fn with_win_condition(mut self, win: impl WinCondition + 'static) -> Self {
        self.win = Box::new(win);
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn adapter(&self) -> &MoveOracleAdapter<O> {
        &self.adapter
    }

    /// AI pieces still waiting for their step this turn.
    pub fn pending_ai_pieces(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.pending.iter().copied()
    }

    #[must_use]
    pub fn into_session(self) -> GameSession {
        self.session
    }

    // === Creationist turn ===

    /// Moves for the Creationist piece on `square`.
    ///
    /// Claims like any other generation when the session config says so.
    pub fn select_piece(&mut self, square: Square) -> EngineResult<MoveList> {
        self.check_human_piece(square)?;
        self.session.moves_for(square)
    }

    /// Apply the human move `from` -> `to` and hand over to the AI.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, from: Square, to: Square) -> EngineResult<MoveRecord> {
        self.check_human_piece(from)?;
        let mv = self
            .session
            .moves_for(from)?
            .into_iter()
            .find(|m| m.destination == to)
            .ok_or(EngineError::IllegalMove { from, to })?;

        let record = self.session.apply_move(Side::Creationist, mv)?;
        debug!(%record, "human move applied");

        if !self.check_win() {
            self.begin_evolutionist_turn();
        }
        Ok(record)
    }

    fn check_human_piece(&self, square: Square) -> EngineResult<()> {
        match self.session.phase() {
            TurnPhase::GameOver(_) => return Err(EngineError::GameOver),
            TurnPhase::EvolutionistTurn => return Err(EngineError::NotYourTurn(Side::Creationist)),
            TurnPhase::CreationistTurn => {}
        }
        if !square.in_bounds() {
            return Err(EngineError::OutOfBounds(square));
        }
        let piece = self
            .session
            .board()
            .get(square)
            .ok_or(EngineError::NoPieceAt(square))?;
        if piece.side() != Side::Creationist {
            return Err(EngineError::WrongSide {
                square,
                owner: piece.side(),
            });
        }
        Ok(())
    }

    // === Evolutionist turn ===

    fn begin_evolutionist_turn(&mut self) {
        self.session.set_phase(TurnPhase::EvolutionistTurn);
        self.pending = self
            .session
            .live_pieces(Side::Evolutionist)
            .map(|p| p.id)
            .collect();
        info!(
            turn = self.session.turn_number(),
            pieces = self.pending.len(),
            "Evolutionist turn begins"
        );
        if self.pending.is_empty() {
            self.finish_evolutionist_turn();
        }
    }

    fn finish_evolutionist_turn(&mut self) {
        self.pending.clear();
        self.session.advance_round();
        info!(turn = self.session.turn_number(), "Creationist turn begins");
    }

    /// Process the next queued AI piece.
    #[instrument(skip(self))]
    pub fn step_ai(&mut self) -> EngineResult<AiStep> {
        match self.session.phase() {
            TurnPhase::GameOver(_) => return Err(EngineError::GameOver),
            TurnPhase::CreationistTurn => return Err(EngineError::NotYourTurn(Side::Evolutionist)),
            TurnPhase::EvolutionistTurn => {}
        }
        let id = self
            .pending
            .pop_front()
            .ok_or(EngineError::NotYourTurn(Side::Evolutionist))?;

        // A drained queue closes the turn even if this piece failed.
        let step = self.process_piece(id);

        if !self.session.is_game_over() && self.pending.is_empty() {
            self.finish_evolutionist_turn();
        }
        step
    }

    fn process_piece(&mut self, id: PieceId) -> EngineResult<AiStep> {
        let Some(from) = self.session.board().locate(id) else {
            debug!(%id, "skipping captured piece");
            return Ok(AiStep::skipped(id, SkipReason::Captured, None));
        };

        let moves = self.session.moves_for(from)?;

        let output = match self.adapter.predict_board(self.session.board()) {
            Ok(output) => output,
            Err(EngineError::OraclePrediction(err)) => {
                warn!(%id, error = %err, "oracle prediction failed, skipping piece");
                return Ok(AiStep::skipped(id, SkipReason::OracleFailed(err), None));
            }
            Err(err) => return Err(err),
        };

        let mv = match self.selector.choose(&moves, &output) {
            Ok(mv) => mv,
            Err(EngineError::NoLegalMoves) => {
                debug!(%id, %from, "no legal moves, skipping piece");
                return Ok(AiStep::skipped(id, SkipReason::NoLegalMoves, Some(output)));
            }
            Err(err) => return Err(err),
        };
        if !moves.contains(&mv) {
            warn!(%id, %mv, "selector chose a move outside the legal set, skipping piece");
            return Ok(AiStep::skipped(id, SkipReason::IllegalChoice(mv), Some(output)));
        }

        let record = self.session.apply_move(Side::Evolutionist, mv)?;
        debug!(%record, "AI move applied");
        self.check_win();

        Ok(AiStep {
            piece: id,
            outcome: AiOutcome::Moved(record),
            oracle_output: Some(output),
        })
    }

    /// Step until the Evolutionist turn ends (or the game does).
    pub fn run_ai_turn(&mut self) -> EngineResult<Vec<AiStep>> {
        let mut steps = Vec::with_capacity(self.pending.len());
        loop {
            steps.push(self.step_ai()?);
            if self.session.phase() != TurnPhase::EvolutionistTurn {
                return Ok(steps);
            }
        }
    }

    fn check_win(&mut self) -> bool {
        match self.win.evaluate(&self.session) {
            Some(result) => {
                info!(%result, "game over");
                self.session.set_phase(TurnPhase::GameOver(result));
                self.pending.clear();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSetup;
    use crate::core::SessionConfig;
    use crate::nn::{UnavailableOracle, ZeroOracle};
    use crate::rules::ProgenitorRule;

    /// Picks a destination the generator never offers.
    struct OffBoardSelector;

    impl MoveSelector for OffBoardSelector {
        fn choose(&mut self, moves: &[Move], _output: &OracleOutput) -> EngineResult<Move> {
            let first = moves.first().ok_or(EngineError::NoLegalMoves)?;
            Ok(Move::step(first.piece, first.origin, Square::new(9, 3)))
        }
    }

    /// Fails every choice with an error the controller does not recover.
    struct BrokenSelector;

    impl MoveSelector for BrokenSelector {
        fn choose(&mut self, _moves: &[Move], _output: &OracleOutput) -> EngineResult<Move> {
            Err(EngineError::OutOfBounds(Square::new(-1, -1)))
        }
    }

    fn controller() -> TurnController<ZeroOracle> {
        TurnController::new(GameSession::new(SessionConfig::headless()).unwrap(), ZeroOracle)
    }

    #[test]
    fn test_turn_phase_side() {
        assert_eq!(TurnPhase::CreationistTurn.side(), Some(Side::Creationist));
        assert_eq!(TurnPhase::EvolutionistTurn.side(), Some(Side::Evolutionist));
        assert_eq!(TurnPhase::GameOver(GameResult::Draw).side(), None);
    }

    #[test]
    fn test_select_piece_errors() {
        let mut c = controller();
        assert_eq!(
            c.select_piece(Square::new(0, 7)),
            Err(EngineError::WrongSide {
                square: Square::new(0, 7),
                owner: Side::Evolutionist
            })
        );
        assert_eq!(c.select_piece(Square::new(4, 4)), Err(EngineError::NoPieceAt(Square::new(4, 4))));
        assert_eq!(c.select_piece(Square::new(-1, 0)), Err(EngineError::OutOfBounds(Square::new(-1, 0))));
        assert_eq!(c.select_piece(Square::new(0, 0)).unwrap()[0].destination, Square::new(0, 1));
    }

    #[test]
    fn test_human_move_queues_ai_pieces() {
        let mut c = controller();
        c.apply_human_move(Square::new(0, 0), Square::new(0, 1)).unwrap();

        assert_eq!(c.phase(), TurnPhase::EvolutionistTurn);
        let queued: Vec<u16> = c.pending_ai_pieces().map(|id| id.raw()).collect();
        assert_eq!(queued, (10..20).collect::<Vec<_>>());
        assert_eq!(c.select_piece(Square::new(1, 0)), Err(EngineError::NotYourTurn(Side::Creationist)));
    }

    #[test]
    fn test_step_ai_outside_turn() {
        let mut c = controller();
        assert_eq!(c.step_ai(), Err(EngineError::NotYourTurn(Side::Evolutionist)));
        assert_eq!(c.run_ai_turn(), Err(EngineError::NotYourTurn(Side::Evolutionist)));
    }

    #[test]
    fn test_first_ai_step_moves_left_earth() {
        let mut c = controller();
        c.apply_human_move(Square::new(0, 0), Square::new(0, 1)).unwrap();

        let step = c.step_ai().unwrap();
        let record = step.moved().unwrap();
        assert_eq!(step.piece, PieceId::new(10));
        assert_eq!(record.mv.origin, Square::new(0, 7));
        assert_eq!(record.mv.destination, Square::new(0, 6));
        assert_eq!(step.oracle_output, Some(OracleOutput(0.0, 0.0)));
        assert_eq!(c.pending_ai_pieces().count(), 9);
    }

    #[test]
    fn test_oracle_failure_skips_every_piece() {
        let session = GameSession::new(SessionConfig::headless()).unwrap();
        let mut c = TurnController::new(session, UnavailableOracle::default());
        c.apply_human_move(Square::new(0, 0), Square::new(0, 1)).unwrap();

        let steps = c.run_ai_turn().unwrap();
        assert_eq!(steps.len(), 10);
        assert!(steps
            .iter()
            .all(|s| matches!(s.outcome, AiOutcome::Skipped(SkipReason::OracleFailed(_)))));
        assert_eq!(c.phase(), TurnPhase::CreationistTurn);
        assert_eq!(c.session().history().len(), 1);
    }

    #[test]
    fn test_no_live_ai_pieces_returns_to_creationist() {
        let mut setup = BoardSetup::new();
        setup.place("earth", 0, 0).unwrap();
        let session = GameSession::from_setup(setup, SessionConfig::headless());
        let mut c = TurnController::new(session, ZeroOracle);

        c.apply_human_move(Square::new(0, 0), Square::new(0, 1)).unwrap();
        assert_eq!(c.phase(), TurnPhase::CreationistTurn);
        assert_eq!(c.session().turn_number(), 2);
    }

    #[test]
    fn test_win_condition_ends_game() {
        let mut setup = BoardSetup::new();
        setup.place("fire", 5, 2).unwrap();
        setup.place("man", 0, 0).unwrap();
        setup.place("ape_man", 5, 5).unwrap();
        let session = GameSession::from_setup(setup, SessionConfig::headless());
        let mut c = TurnController::new(session, ZeroOracle).with_win_condition(ProgenitorRule::new());

        c.apply_human_move(Square::new(5, 2), Square::new(5, 5)).unwrap();
        assert_eq!(c.phase(), TurnPhase::GameOver(GameResult::Winner(Side::Creationist)));
        assert_eq!(c.pending_ai_pieces().count(), 0);
        assert_eq!(c.step_ai(), Err(EngineError::GameOver));
        assert_eq!(c.select_piece(Square::new(0, 0)), Err(EngineError::GameOver));
    }

    #[test]
    fn test_selector_choice_outside_legal_set_is_skipped() {
        let session = GameSession::new(SessionConfig::headless()).unwrap();
        let mut c = TurnController::with_selector(session, ZeroOracle, OffBoardSelector);
        c.apply_human_move(Square::new(0, 0), Square::new(0, 1)).unwrap();
        let before = c.session().board().clone();

        let step = c.step_ai().unwrap();
        assert_eq!(step.piece, PieceId::new(10));
        assert_eq!(
            step.outcome,
            AiOutcome::Skipped(SkipReason::IllegalChoice(Move::step(
                PieceId::new(10),
                Square::new(0, 7),
                Square::new(9, 3)
            )))
        );
        assert_eq!(step.oracle_output, Some(OracleOutput(0.0, 0.0)));
        assert_eq!(c.session().board(), &before);
        assert_eq!(c.session().history().len(), 1);
        assert_eq!(c.pending_ai_pieces().count(), 9);
    }

    #[test]
    fn test_selector_error_on_last_piece_still_closes_turn() {
        let mut setup = BoardSetup::new();
        setup.place("earth", 0, 0).unwrap();
        setup.place("evolutionist_earth", 9, 7).unwrap();
        let session = GameSession::from_setup(setup, SessionConfig::headless());
        let mut c = TurnController::with_selector(session, ZeroOracle, BrokenSelector);
        c.apply_human_move(Square::new(0, 0), Square::new(0, 1)).unwrap();

        assert_eq!(c.step_ai(), Err(EngineError::OutOfBounds(Square::new(-1, -1))));
        assert_eq!(c.phase(), TurnPhase::CreationistTurn);
        assert_eq!(c.session().turn_number(), 2);
        assert_eq!(c.pending_ai_pieces().count(), 0);

        c.apply_human_move(Square::new(0, 1), Square::new(0, 2)).unwrap();
        assert_eq!(c.phase(), TurnPhase::EvolutionistTurn);
    }
}
