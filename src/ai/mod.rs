//! AI move selection.
//!
//! `MoveSelector` is the single substitution point for smarter play. The
//! default `FirstMoveSelector` keeps the shipped behaviour: the first
//! generated move, whatever the oracle said.

pub mod selector;

pub use selector::{FirstMoveSelector, MoveSelector, RandomMoveSelector};
