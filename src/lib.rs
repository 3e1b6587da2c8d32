//! # origins-engine
//!
//! Game engine for Origins, a two-player elemental board game on a 10x8 grid.
//! The Creationist side is played by a human; the Evolutionist side is a
//! scripted AI that consults a pre-trained prediction oracle before each move.
//!
//! ## Design Principles
//!
//! 1. **Explicit Injection**: the oracle, the move selector and the win
//!    condition are passed in. Nothing is looked up globally.
//!
//! 2. **Presentation Outside**: rendering, pacing and asset loading live in
//!    the caller. The engine exposes read accessors and two intents
//!    (`select_piece`, `apply_human_move`), and paces nothing itself.
//!
//! 3. **Per-Piece Stepping**: the AI turn advances one piece per `step_ai`
//!    call, in Evolutionist creation order.
//!
//! ## Modules
//!
//! - `core`: Squares, sides, configuration, RNG
//! - `pieces`: Piece catalog and piece identities
//! - `board`: Occupancy grid, neutral markers, standard layout
//! - `rules`: Moves, ray-cast move generation, win conditions
//! - `nn`: Oracle trait, board encoding, prediction adapter
//! - `ai`: Move selection policies
//! - `game`: Session aggregate and turn controller
//!
//! ## Example
//!
//! ```
//! use origins_engine::{GameSession, SessionConfig, Square, TurnController, ZeroOracle};
//!
//! let session = GameSession::new(SessionConfig::headless()).unwrap();
//! let mut game = TurnController::new(session, ZeroOracle);
//!
//! let moves = game.select_piece(Square::new(4, 0)).unwrap();
//! game.apply_human_move(Square::new(4, 0), moves[0].destination).unwrap();
//! game.run_ai_turn().unwrap();
//!
//! assert_eq!(game.session().history().len(), 11);
//! ```

pub mod core;
pub mod pieces;
pub mod board;
pub mod rules;
pub mod nn;
pub mod ai;
pub mod game;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Direction, Square, BOARD_HEIGHT, BOARD_WIDTH, CELL_COUNT,
    Side, SideMap,
    GameRng, SessionConfig,
};

pub use crate::pieces::{Element, MovementPattern, Piece, PieceCatalog, PieceId, PieceVariant};

pub use crate::board::{BoardModel, BoardSetup, NeutralMarkers, NeutralSquareState, Roster};

pub use crate::rules::{
    Move, MoveList, MoveGenerator,
    GameResult, WinCondition, NoWinCondition, ProgenitorRule,
};

pub use crate::nn::{
    EncodedState, MoveOracle, MoveOracleAdapter, OracleError, OracleOutput,
    BoardEncoder, StateEncoder,
    ZeroOracle, ConstantOracle, UnavailableOracle, FnOracle,
};

pub use crate::ai::{FirstMoveSelector, MoveSelector, RandomMoveSelector};

pub use crate::game::{AiOutcome, AiStep, GameSession, MoveRecord, SkipReason, TurnController, TurnPhase};

pub use crate::error::{EngineError, EngineResult};
