//! Game rules: moves, legal-move generation, and game outcomes.
//!
//! Rules read the board and neutral markers but never decide whose turn it
//! is; that belongs to `game::TurnController`.

pub mod moves;
pub mod movegen;
pub mod outcome;

pub use moves::{Move, MoveList};
pub use movegen::MoveGenerator;
pub use outcome::{GameResult, NoWinCondition, ProgenitorRule, WinCondition};
