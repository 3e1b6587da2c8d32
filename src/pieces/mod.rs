//! Piece variants, the static catalog, and piece instances.

pub mod catalog;
pub mod piece;

pub use catalog::{CatalogEntry, Element, MovementPattern, PieceCatalog, PieceVariant};
pub use piece::{Piece, PieceId};
