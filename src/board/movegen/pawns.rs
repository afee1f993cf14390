use super::super::attack_tables::{promotion_rank, PAWN_ATTACKS, PAWN_PUSH_ONE, PAWN_PUSH_TWO};
use super::super::types::{Bitboard, Color, Move, MoveList, Piece, Square};
use super::super::Board;

impl Board {
    pub(crate) fn generate_pawn_moves(&self, color: Color, moves: &mut MoveList) {
        let own = self.pieces(color, Piece::Pawn);
        let empty = !self.occupied_both();
        let enemy = self.occupied(color.opponent());
        let promo_rank = promotion_rank(color);

        for from in own.squares() {
            let idx = from.index();

            let one_step = Bitboard(PAWN_PUSH_ONE[color.index()][idx]) & empty;
            if !one_step.is_empty() {
                push_pawn_move(moves, from, one_step.to_square().unwrap(), promo_rank);

                let two_step = Bitboard(PAWN_PUSH_TWO[color.index()][idx]) & empty & !one_step;
                if !two_step.is_empty() {
                    moves.push(Move::quiet(from, two_step.to_square().unwrap(), Piece::Pawn));
                }
            }

            let attacks = Bitboard(PAWN_ATTACKS[color.index()][idx]);
            for to in (attacks & enemy).squares() {
                let captured = self.piece_at(to).map(|(_, piece)| piece);
                push_pawn_capture(moves, from, to, captured, promo_rank);
            }

            let ep_target = attacks & self.en_passant();
            if !ep_target.is_empty() {
                moves.push(Move {
                    from,
                    to: ep_target.to_square().unwrap(),
                    piece: Piece::Pawn,
                    capture: Some(Piece::Pawn),
                    promotion: None,
                });
            }
        }
    }
}

fn push_pawn_move(moves: &mut MoveList, from: Square, to: Square, promo_rank: Bitboard) {
    if !(to.mask() & promo_rank).is_empty() {
        for promo in Piece::PROMOTIONS {
            moves.push(Move {
                from,
                to,
                piece: Piece::Pawn,
                capture: None,
                promotion: Some(promo),
            });
        }
    } else {
        moves.push(Move::quiet(from, to, Piece::Pawn));
    }
}

fn push_pawn_capture(
    moves: &mut MoveList,
    from: Square,
    to: Square,
    captured: Option<Piece>,
    promo_rank: Bitboard,
) {
    if !(to.mask() & promo_rank).is_empty() {
        for promo in Piece::PROMOTIONS {
            moves.push(Move {
                from,
                to,
                piece: Piece::Pawn,
                capture: captured,
                promotion: Some(promo),
            });
        }
    } else {
        moves.push(Move {
            from,
            to,
            piece: Piece::Pawn,
            capture: captured,
            promotion: None,
        });
    }
}
