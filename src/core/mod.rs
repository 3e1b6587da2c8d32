//! Core value types: squares, sides, configuration, RNG.

pub mod square;
pub mod side;
pub mod rng;
pub mod config;

pub use square::{Direction, Square, BOARD_HEIGHT, BOARD_WIDTH, CELL_COUNT};
pub use side::{Side, SideMap};
pub use rng::GameRng;
pub use config::SessionConfig;
