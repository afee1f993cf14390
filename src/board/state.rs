//! The `Board` position type: parallel piece bitboards, occupancy,
//! side to move, castling rights, and the en-passant target.

use super::types::{Bitboard, Color, Piece, Square};

/// A chess position.
///
/// Invariants maintained on every `Board` produced by this crate:
/// 1. For any square, at most one `(color, piece)` bitboard has that bit set.
/// 2. `occupied[c]` is the OR of `pieces[c]` over all piece kinds.
/// 3. `occupied_both` equals `occupied[White] | occupied[Black]`.
/// 4. `castling_rights` is a subset of `{a1, h1, a8, h8}`; a set bit implies
///    a rook of the matching color sits on that square and that color's
///    king sits on its home square.
/// 5. `en_passant` is zero or a single bit on rank 3 or rank 6.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) occupied_both: Bitboard,
    pub(crate) turn: Color,
    /// Bitboard over the rook-home squares `{a1,h1,a8,h8}` still available.
    pub(crate) castling_rights: Bitboard,
    /// Zero, or a single-bit mask on the square behind a pawn that just
    /// double-pushed (where a capturing enemy pawn would land).
    pub(crate) en_passant: Bitboard,
}

impl Board {
    /// An empty board: no pieces, white to move, no castling rights.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            occupied_both: Bitboard::EMPTY,
            turn: Color::White,
            castling_rights: Bitboard::EMPTY,
            en_passant: Bitboard::EMPTY,
        }
    }

    /// The standard chess starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::try_from_fen(super::types::FEN_INITIAL).expect("built-in initial FEN is valid")
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[must_use]
    pub fn castling_rights(&self) -> Bitboard {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant(&self) -> Bitboard {
        self.en_passant
    }

    #[must_use]
    pub fn occupied(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    #[must_use]
    pub fn occupied_both(&self) -> Bitboard {
        self.occupied_both
    }

    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    /// The piece occupying `sq`, if any.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let bit = sq.mask();
        if (self.occupied_both & bit).is_empty() {
            return None;
        }
        let color = if !(self.occupied[Color::White.index()] & bit).is_empty() {
            Color::White
        } else {
            Color::Black
        };
        for piece in Piece::ALL {
            if !(self.pieces[color.index()][piece.index()] & bit).is_empty() {
                return Some((color, piece));
            }
        }
        unreachable!("occupied_both set but no piece bitboard has this bit")
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = sq.mask();
        self.pieces[color.index()][piece.index()] |= bit;
        self.occupied[color.index()] |= bit;
        self.occupied_both |= bit;
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = sq.mask();
        self.pieces[color.index()][piece.index()] &= !bit;
        self.occupied[color.index()] &= !bit;
        self.occupied_both &= !bit;
    }

    /// Re-derives `occupied` and `occupied_both` from `pieces`. Used after
    /// FEN placement parsing and as a consistency check.
    pub(crate) fn recompute_occupancy(&mut self) {
        for color in [Color::White, Color::Black] {
            let mut bb = Bitboard::EMPTY;
            for piece in Piece::ALL {
                bb |= self.pieces[color.index()][piece.index()];
            }
            self.occupied[color.index()] = bb;
        }
        self.occupied_both = self.occupied[Color::White.index()] | self.occupied[Color::Black.index()];
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces[color.index()][Piece::King.index()].to_square()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
