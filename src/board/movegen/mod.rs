//! Pseudo-legal move generation.
//!
//! Moves emitted here may leave the mover's own king in check; legality is
//! established only where it's actually needed — at perft leaves — by
//! applying the move and checking [`Board::in_check`]. This mirrors the
//! scope of the core: a move generator and a perft driver, not a full
//! legality-filtering search.

mod kings;
mod knights;
mod pawns;
mod sliders;

use self::sliders::SliderType;
use super::types::{MoveList, Piece};
use super::Board;

impl Board {
    /// All pseudo-legal moves for the side to move.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.turn();

        self.generate_pawn_moves(color, &mut moves);
        self.generate_knight_moves(color, &mut moves);
        self.generate_slider_moves(color, Piece::Bishop, SliderType::Bishop, &mut moves);
        self.generate_slider_moves(color, Piece::Rook, SliderType::Rook, &mut moves);
        self.generate_slider_moves(color, Piece::Queen, SliderType::Queen, &mut moves);
        self.generate_king_moves(color, &mut moves);

        moves
    }
}
