//! Game sessions and turn sequencing.

pub mod history;
pub mod session;
pub mod turn;

pub use history::MoveRecord;
pub use session::GameSession;
pub use turn::{AiOutcome, AiStep, SkipReason, TurnController, TurnPhase};
