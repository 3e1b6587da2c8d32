//! Board setup and the standard opening position.
//!
//! `BoardSetup` places pieces by catalog name or variant, hands out
//! `PieceId`s in creation order and records each side's roster in that same
//! order. The roster order is the order in which the AI later visits its
//! pieces.

use crate::core::{Side, SideMap, Square};
use crate::error::EngineResult;
use crate::pieces::{Piece, PieceCatalog, PieceId, PieceVariant};

use super::model::BoardModel;

/// Pieces of each side in creation order.
pub type Roster = SideMap<Vec<Piece>>;

/// Creationist home row (y = 0), left to right.
pub const CREATIONIST_HOME: [&str; 10] = [
    "earth", "water", "fire", "air", "woman", "man", "air", "fire", "water", "earth",
];

/// Evolutionist home row (y = 7), left to right.
pub const EVOLUTIONIST_HOME: [&str; 10] = [
    "evolutionist_earth",
    "evolutionist_water",
    "evolutionist_fire",
    "evolutionist_air",
    "ape_woman",
    "ape_man",
    "evolutionist_air",
    "evolutionist_fire",
    "evolutionist_water",
    "evolutionist_earth",
];

/// Incremental board builder.
///
/// ```
/// use origins_engine::board::BoardSetup;
/// use origins_engine::core::{Side, Square};
///
/// let mut setup = BoardSetup::new();
/// let fire = setup.place("fire", 2, 2).unwrap();
/// setup.place("evolutionist_water", 2, 5).unwrap();
///
/// let (board, roster) = setup.finish();
/// assert_eq!(board.locate(fire), Some(Square::new(2, 2)));
/// assert_eq!(roster[Side::Evolutionist].len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoardSetup {
    board: BoardModel,
    roster: Roster,
    next_id: u16,
}

impl BoardSetup {
    /// Start from an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard opening: both home rows filled, Creationist pieces created first.
    pub fn standard() -> EngineResult<Self> {
        let mut setup = Self::new();
        for (x, name) in CREATIONIST_HOME.iter().enumerate() {
            setup.place(name, x as i8, 0)?;
        }
        for (x, name) in EVOLUTIONIST_HOME.iter().enumerate() {
            setup.place(name, x as i8, 7)?;
        }
        Ok(setup)
    }

    /// Place a piece by catalog name.
    pub fn place(&mut self, name: &str, x: i8, y: i8) -> EngineResult<PieceId> {
        let variant = PieceCatalog::variant_of(name)?;
        self.place_variant(variant, Square::new(x, y))
    }

    /// Place a piece by variant. A piece already on the square is replaced.
    pub fn place_variant(&mut self, variant: PieceVariant, square: Square) -> EngineResult<PieceId> {
        let piece = Piece::new(PieceId::new(self.next_id), variant);
        self.board.set(square, piece)?;
        self.next_id += 1;
        self.roster[variant.side()].push(piece);
        Ok(piece.id)
    }

    #[must_use]
    pub fn board(&self) -> &BoardModel {
        &self.board
    }

    #[must_use]
    pub fn roster(&self, side: Side) -> &[Piece] {
        &self.roster[side]
    }

    /// Hand over the board and the creation-ordered rosters.
    #[must_use]
    pub fn finish(self) -> (BoardModel, Roster) {
        (self.board, self.roster)
    }
}
