//! Game results and terminal-state evaluation.
//!
//! The turn controller asks its `WinCondition` after every applied move. The
//! default rule never ends the game; `ProgenitorRule` is opt-in.

use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::game::GameSession;
use crate::pieces::Piece;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Side),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(side) => write!(f, "{side} wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// Terminal-state evaluation.
///
/// Return `None` while the game continues.
pub trait WinCondition: Send + Sync {
    fn evaluate(&self, session: &GameSession) -> Option<GameResult>;
}

impl<W: WinCondition + ?Sized> WinCondition for Box<W> {
    fn evaluate(&self, session: &GameSession) -> Option<GameResult> {
        (**self).evaluate(session)
    }
}

/// Never ends the game.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoWinCondition;

impl WinCondition for NoWinCondition {
    fn evaluate(&self, _session: &GameSession) -> Option<GameResult> {
        None
    }
}

/// Progenitor race.
///
/// Checked in this order after every move:
/// 1. a side whose Man and Woman (Ape Man and Ape Woman) have all arrived on
///    its destination row wins, Creationist first
/// 2. a side whose progenitor left the board without having arrived loses;
///    if both sides did, the game is drawn
/// 3. the game is drawn when the side that just moved has no legal move left
///
/// Arrival is latched: a progenitor whose move ended on the row counts as
/// arrived even after it moves off or is captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgenitorRule {
    pub creationist_destination: i8,
    pub evolutionist_destination: i8,
}

impl Default for ProgenitorRule {
    fn default() -> Self {
        Self {
            creationist_destination: 6,
            evolutionist_destination: 1,
        }
    }
}

impl ProgenitorRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_destinations(mut self, creationist: i8, evolutionist: i8) -> Self {
        self.creationist_destination = creationist;
        self.evolutionist_destination = evolutionist;
        self
    }

    #[must_use]
    pub fn destination(&self, side: Side) -> i8 {
        match side {
            Side::Creationist => self.creationist_destination,
            Side::Evolutionist => self.evolutionist_destination,
        }
    }

    fn progenitors(session: &GameSession, side: Side) -> impl Iterator<Item = &Piece> {
        session.roster()[side].iter().filter(|p| p.variant.is_progenitor())
    }

    fn has_arrived(&self, session: &GameSession, piece: &Piece) -> bool {
        let row = self.destination(piece.side());
        session.board().locate(piece.id).is_some_and(|sq| sq.y == row)
            || session
                .history()
                .iter()
                .any(|r| r.mv.piece == piece.id && r.mv.destination.y == row)
    }

    fn reached_destination(&self, session: &GameSession, side: Side) -> bool {
        let mut progenitors = Self::progenitors(session, side).peekable();
        progenitors.peek().is_some() && progenitors.all(|p| self.has_arrived(session, p))
    }

    fn lost_progenitor(&self, session: &GameSession, side: Side) -> bool {
        Self::progenitors(session, side)
            .any(|p| !session.board().contains(p.id) && !self.has_arrived(session, p))
    }

    fn has_legal_move(session: &GameSession, side: Side) -> bool {
        session.live_pieces(side).any(|p| {
            session
                .board()
                .locate(p.id)
                .and_then(|sq| session.legal_moves(sq).ok())
                .is_some_and(|moves| !moves.is_empty())
        })
    }
}

impl WinCondition for ProgenitorRule {
    fn evaluate(&self, session: &GameSession) -> Option<GameResult> {
        if let Some(side) = Side::ALL
            .into_iter()
            .find(|&side| self.reached_destination(session, side))
        {
            return Some(GameResult::Winner(side));
        }

        let lost_c = self.lost_progenitor(session, Side::Creationist);
        let lost_e = self.lost_progenitor(session, Side::Evolutionist);
        match (lost_c, lost_e) {
            (true, true) => return Some(GameResult::Draw),
            (true, false) => return Some(GameResult::Winner(Side::Evolutionist)),
            (false, true) => return Some(GameResult::Winner(Side::Creationist)),
            (false, false) => {}
        }

        // Stalemate is judged for the side that just moved.
        match session.current_side() {
            Some(side) if !Self::has_legal_move(session, side) => Some(GameResult::Draw),
            _ => None,
        }
    }
}
