//! Board module tests.
//!
//! - `perft.rs` - reference node counts at fixed depths
//! - `edge_cases.rs` - hand-picked positions (castling, en passant, promotion)
//! - `fen.rs` - FEN round-trip
//! - `proptest.rs` - property-based invariant checks

mod edge_cases;
mod fen;
mod proptest;
