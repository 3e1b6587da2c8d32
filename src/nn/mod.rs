//! Oracle integration.
//!
//! The Evolutionist AI consults a small pre-trained model before each move.
//! This module keeps that model behind a trait so any predictor (or a
//! deterministic stub) can be plugged in.
//!
//! ## Overview
//!
//! - **Traits**: `MoveOracle`, `StateEncoder`
//! - **Encoding**: `BoardEncoder` (80 row-major cells + 20 zeros)
//! - **Adapter**: `MoveOracleAdapter` validates input and output shapes
//! - **Baseline**: `ZeroOracle`, `ConstantOracle`, `UnavailableOracle`, `FnOracle`
//!
//! ## Usage
//!
//! ```
//! use origins_engine::board::BoardSetup;
//! use origins_engine::nn::{MoveOracleAdapter, ZeroOracle};
//!
//! let setup = BoardSetup::standard().unwrap();
//! let adapter = MoveOracleAdapter::new(ZeroOracle);
//!
//! let encoded = adapter.encode(setup.board());
//! assert_eq!(encoded.len(), 100);
//!
//! let output = adapter.predict(&encoded).unwrap();
//! assert_eq!(output.to_array(), [0.0, 0.0]);
//! ```

pub mod adapter;
pub mod encoder;
pub mod traits;

pub use adapter::{MoveOracleAdapter, OracleOutput, OUTPUT_LEN};
pub use encoder::{BoardEncoder, StateEncoder, ENCODING_LEN, RESERVED_LEN};
pub use traits::{
    ConstantOracle, EncodedState, FnOracle, MoveOracle, OracleError, UnavailableOracle,
    ZeroOracle,
};
