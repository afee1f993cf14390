//! Error types for board operations.

use std::fmt;

/// FEN parsing failures: unknown piece letter, missing field, or invalid
/// side-to-move. Halfmove/fullmove counters are accepted and ignored, so
/// their absence or malformedness is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Fewer than the four required fields (placement, turn, castling, en passant).
    TooFewFields { found: usize },
    /// Unknown piece letter in the placement field.
    InvalidPiece { char: char },
    /// A rank in the placement field didn't sum to exactly 8 files.
    InvalidRank { rank: usize, files: usize },
    /// More than 8 ranks in the placement field.
    TooManyRanks,
    /// Side-to-move field was neither `w` nor `b`.
    InvalidSideToMove { found: String },
    /// Unknown castling-rights character.
    InvalidCastling { char: char },
    /// En-passant target field was not `-` or a valid algebraic square.
    InvalidEnPassant { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewFields { found } => {
                write!(f, "FEN must have at least 4 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "invalid piece character '{char}' in FEN")
            }
            FenError::InvalidRank { rank, files } => {
                write!(f, "rank {rank} has {files} files, expected 8")
            }
            FenError::TooManyRanks => write!(f, "FEN placement has more than 8 ranks"),
            FenError::InvalidSideToMove { found } => {
                write!(f, "invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en passant square '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}
