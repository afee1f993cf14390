use super::super::attack_tables::{
    castling_empty_path, castling_king_steps, castling_rook_home, king_home, CastleSide,
    KING_ATTACKS,
};
use super::super::types::{Bitboard, Color, Move, MoveList, Piece};
use super::super::Board;

impl Board {
    pub(crate) fn generate_king_moves(&self, color: Color, moves: &mut MoveList) {
        let own_occ = self.occupied(color);
        let Some(from) = self.king_square(color) else {
            return;
        };
        let targets = Bitboard(KING_ATTACKS[from.index()]) & !own_occ;
        for to in targets.squares() {
            let capture = self.piece_at(to).map(|(_, piece)| piece);
            moves.push(Move {
                from,
                to,
                piece: Piece::King,
                capture,
                promotion: None,
            });
        }

        if from != king_home(color) {
            return;
        }
        for side in [CastleSide::Kingside, CastleSide::Queenside] {
            if (self.castling_rights() & castling_rook_home(color, side)).is_empty() {
                continue;
            }
            if !(self.occupied_both() & castling_empty_path(color, side)).is_empty() {
                continue;
            }
            let opponent = color.opponent();
            if self.is_attacked(from, opponent) {
                continue;
            }
            let steps = castling_king_steps(color, side);
            if steps
                .squares()
                .any(|sq| self.is_attacked(sq, opponent))
            {
                continue;
            }
            let to = steps
                .squares()
                .max_by_key(|sq| sq.file().abs_diff(from.file()))
                .expect("castling step mask has exactly two squares");
            moves.push(Move::quiet(from, to, Piece::King));
        }
    }
}
