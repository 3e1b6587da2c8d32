//! Board state: piece occupancy, neutral-square markers, and setup.

pub mod model;
pub mod markers;
pub mod layout;

pub use model::BoardModel;
pub use markers::{NeutralMarkers, NeutralSquareState};
pub use layout::{BoardSetup, Roster, CREATIONIST_HOME, EVOLUTIONIST_HOME};
