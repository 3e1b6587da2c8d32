//! Move selection policies for the Evolutionist AI.
//!
//! A selector receives the piece's legal moves in generation order together
//! with the oracle's output for the current board, and returns one move.

use crate::core::{GameRng, SessionConfig};
use crate::error::{EngineError, EngineResult};
use crate::nn::OracleOutput;
use crate::rules::Move;

// =============================================================================
// Move Selector
// =============================================================================

/// Policy for choosing one move from a legal move list.
pub trait MoveSelector: Send {
    /// Choose a move. Fails with `NoLegalMoves` on an empty list.
    fn choose(&mut self, moves: &[Move], output: &OracleOutput) -> EngineResult<Move>;
}

impl<S: MoveSelector + ?Sized> MoveSelector for Box<S> {
    fn choose(&mut self, moves: &[Move], output: &OracleOutput) -> EngineResult<Move> {
        (**self).choose(moves, output)
    }
}

/// Takes the first generated move. The oracle output is ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMoveSelector;

impl MoveSelector for FirstMoveSelector {
    fn choose(&mut self, moves: &[Move], _output: &OracleOutput) -> EngineResult<Move> {
        moves.first().copied().ok_or(EngineError::NoLegalMoves)
    }
}

// =============================================================================
// Random Selector
// =============================================================================

/// Uniform random choice from a seeded generator. Also ignores the oracle.
#[derive(Clone, Debug)]
pub struct RandomMoveSelector {
    rng: GameRng,
}

impl RandomMoveSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Seeded from `SessionConfig::seed`.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.seed)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl MoveSelector for RandomMoveSelector {
    fn choose(&mut self, moves: &[Move], _output: &OracleOutput) -> EngineResult<Move> {
        self.rng.choose(moves).copied().ok_or(EngineError::NoLegalMoves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Square;
    use crate::pieces::PieceId;

    fn moves() -> Vec<Move> {
        let id = PieceId::new(3);
        let from = Square::new(4, 4);
        vec![
            Move::step(id, from, Square::new(5, 4)),
            Move::step(id, from, Square::new(6, 4)),
            Move::capture(id, from, Square::new(7, 4)),
        ]
    }

    #[test]
    fn test_first_move_selector() {
        let moves = moves();
        let mut selector = FirstMoveSelector;
        let chosen = selector.choose(&moves, &OracleOutput(0.0, 0.0)).unwrap();
        assert_eq!(chosen, moves[0]);
    }

    #[test]
    fn test_first_move_ignores_output() {
        let moves = moves();
        let mut selector = FirstMoveSelector;
        for output in [OracleOutput(0.0, 0.0), OracleOutput(1.0, -1.0), OracleOutput(f32::NAN, 9.5)] {
            assert_eq!(selector.choose(&moves, &output).unwrap(), moves[0]);
        }
    }

    #[test]
    fn test_empty_moves() {
        let out = OracleOutput::default();
        assert_eq!(FirstMoveSelector.choose(&[], &out), Err(EngineError::NoLegalMoves));
        assert_eq!(
            RandomMoveSelector::new(1).choose(&[], &out),
            Err(EngineError::NoLegalMoves)
        );
    }

    #[test]
    fn test_random_selector_is_deterministic() {
        let moves = moves();
        let out = OracleOutput::default();
        let mut a = RandomMoveSelector::new(42);
        let mut b = RandomMoveSelector::new(42);
        for _ in 0..20 {
            let pick = a.choose(&moves, &out).unwrap();
            assert_eq!(pick, b.choose(&moves, &out).unwrap());
            assert!(moves.contains(&pick));
        }
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_random_selector_from_config() {
        let moves = moves();
        let out = OracleOutput::default();
        let config = SessionConfig::default().with_seed(7);
        let mut from_config = RandomMoveSelector::from_config(&config);
        let mut direct = RandomMoveSelector::new(7);

        assert_eq!(from_config.seed(), 7);
        for _ in 0..20 {
            assert_eq!(
                from_config.choose(&moves, &out).unwrap(),
                direct.choose(&moves, &out).unwrap()
            );
        }
    }

    #[test]
    fn test_boxed_selector() {
        let mut selector: Box<dyn MoveSelector> = Box::new(FirstMoveSelector);
        let moves = moves();
        assert_eq!(selector.choose(&moves, &OracleOutput::default()).unwrap(), moves[0]);
    }
}
