//! Move application.
//!
//! There is no unmake: [`Board::perft`] recurses on cloned positions
//! instead of saving enough state to reverse a move. `make_move` only
//! needs to move forward correctly, including the castling-rights and
//! en-passant bookkeeping that a naive port of the reference
//! implementation gets wrong — notably, capturing a rook on its home
//! square must clear that side's castling right even though the rook's
//! own color never moved.

use super::attack_tables::{castling_rights_for_color, castling_rook_home, CastleSide};
use super::types::{Bitboard, Color, Move, Piece, Square};
use super::Board;

impl Board {
    /// Applies `m` to the position. Assumes `m` was produced by
    /// [`Board::generate_moves`] for the side currently to move; behavior
    /// is unspecified for an arbitrary `Move`.
    pub fn make_move(&mut self, m: Move) {
        let color = self.turn();
        let opponent = color.opponent();

        let is_en_passant = m.piece == Piece::Pawn && m.to.mask() == self.en_passant() && m.capture.is_some();

        if is_en_passant {
            let captured_sq = en_passant_captured_square(color, m.to);
            self.remove_piece(captured_sq, opponent, Piece::Pawn);
        } else if let Some(captured) = m.capture {
            self.remove_piece(m.to, opponent, captured);
        }

        self.remove_piece(m.from, color, m.piece);
        self.set_piece(m.to, color, m.promotion.unwrap_or(m.piece));

        if m.is_castle() {
            let side = if m.to.file() == 6 {
                CastleSide::Kingside
            } else {
                CastleSide::Queenside
            };
            let rook_from = castling_rook_home(color, side).to_square().unwrap();
            let rook_to = castling_rook_landing(color, side);
            self.remove_piece(rook_from, color, Piece::Rook);
            self.set_piece(rook_to, color, Piece::Rook);
        }

        self.en_passant = if m.is_double_pawn_push() {
            en_passant_target_square(color, m.from).mask()
        } else {
            Bitboard::EMPTY
        };

        self.clear_castling_rights(m, color);

        self.turn = opponent;
    }
}

impl Board {
    fn clear_castling_rights(&mut self, m: Move, color: Color) {
        if self.castling_rights.is_empty() {
            return;
        }
        if m.piece == Piece::King {
            self.castling_rights &= !castling_rights_for_color(color);
        }
        // A rook moving off, or being captured on, its home square forfeits
        // that side's right regardless of whose rook it was.
        self.castling_rights &= !m.from.mask();
        self.castling_rights &= !m.to.mask();
    }
}

fn en_passant_target_square(color: Color, pawn_from: Square) -> Square {
    let rank = if color == Color::White {
        pawn_from.rank() + 1
    } else {
        pawn_from.rank() - 1
    };
    Square::from_file_rank(pawn_from.file(), rank)
}

fn en_passant_captured_square(color: Color, to: Square) -> Square {
    let rank = if color == Color::White {
        to.rank() - 1
    } else {
        to.rank() + 1
    };
    Square::from_file_rank(to.file(), rank)
}

fn castling_rook_landing(color: Color, side: CastleSide) -> Square {
    let rank = if color == Color::White { 0 } else { 7 };
    match side {
        CastleSide::Kingside => Square::from_file_rank(5, rank),
        CastleSide::Queenside => Square::from_file_rank(3, rank),
    }
}
