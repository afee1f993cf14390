use super::super::attack_tables::{bishop_targets, rook_targets};
use super::super::types::{Bitboard, Color, Move, MoveList, Piece};
use super::super::Board;

/// Which ray set a sliding piece draws moves from.
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        color: Color,
        piece: Piece,
        slider: SliderType,
        moves: &mut MoveList,
    ) {
        let own_occ = self.occupied(color).0;
        let occ = self.occupied_both().0;

        for from in self.pieces(color, piece).squares() {
            let idx = from.index();
            let raw = match slider {
                SliderType::Bishop => bishop_targets(idx, occ),
                SliderType::Rook => rook_targets(idx, occ),
                SliderType::Queen => bishop_targets(idx, occ) | rook_targets(idx, occ),
            } & !own_occ;

            for to in Bitboard(raw).squares() {
                let capture = self.piece_at(to).map(|(_, captured)| captured);
                moves.push(Move {
                    from,
                    to,
                    piece,
                    capture,
                    promotion: None,
                });
            }
        }
    }
}
