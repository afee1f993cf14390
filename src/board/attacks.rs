//! Attack queries: is a given square attacked by a given side?

use super::attack_tables::{bishop_targets, rook_targets, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKERS};
use super::state::Board;
use super::types::{Color, Piece, Square};

impl Board {
    /// True if any piece of `by_color` attacks `sq` in the current
    /// position. Sliding attacks reuse the occlusion-aware ray tables by
    /// asking "if a bishop/rook of the defending color stood on `sq`,
    /// would it see an enemy bishop/rook/queen" — attacks are symmetric,
    /// so this is equivalent to asking whether a slider on the attacker's
    /// side actually reaches `sq`.
    #[must_use]
    pub fn is_attacked(&self, sq: Square, by_color: Color) -> bool {
        let idx = sq.index();
        let occ = self.occupied_both.0;
        let attackers = self.pieces[by_color.index()];

        if attackers[Piece::Pawn.index()].0 & PAWN_ATTACKERS[by_color.index()][idx] != 0 {
            return true;
        }
        if attackers[Piece::Knight.index()].0 & KNIGHT_ATTACKS[idx] != 0 {
            return true;
        }
        if attackers[Piece::King.index()].0 & KING_ATTACKS[idx] != 0 {
            return true;
        }
        let bishops_queens = attackers[Piece::Bishop.index()].0 | attackers[Piece::Queen.index()].0;
        if bishop_targets(idx, occ) & bishops_queens != 0 {
            return true;
        }
        let rooks_queens = attackers[Piece::Rook.index()].0 | attackers[Piece::Queen.index()].0;
        if rook_targets(idx, occ) & rooks_queens != 0 {
            return true;
        }
        false
    }

    /// True if `color`'s king is currently attacked. Returns `false` if
    /// `color` has no king on the board (reachable only from hand-built
    /// test positions, never from a legal game).
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(sq) => self.is_attacked(sq, color.opponent()),
            None => false,
        }
    }
}
