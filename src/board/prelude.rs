//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_engine::board::prelude::*;
//! ```

pub use super::{Bitboard, Board, Color, FenError, Move, MoveList, Piece, Square};
