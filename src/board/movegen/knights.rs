use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::types::{Bitboard, Color, Move, MoveList, Piece};
use super::super::Board;

impl Board {
    pub(crate) fn generate_knight_moves(&self, color: Color, moves: &mut MoveList) {
        let own_occ = self.occupied(color);
        for from in self.pieces(color, Piece::Knight).squares() {
            let targets = Bitboard(KNIGHT_ATTACKS[from.index()]) & !own_occ;
            for to in targets.squares() {
                let capture = self.piece_at(to).map(|(_, piece)| piece);
                moves.push(Move {
                    from,
                    to,
                    piece: Piece::Knight,
                    capture,
                    promotion: None,
                });
            }
        }
    }
}
