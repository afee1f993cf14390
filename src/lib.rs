//! Bitboard chess position core: board representation, pseudo-legal move
//! generation, move application, and a perft driver.

pub mod board;
pub mod perft_suite;
