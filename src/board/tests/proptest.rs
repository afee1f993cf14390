//! Property-based invariant checks, driven by proptest-generated move
//! choices (no `rand` dependency: each step consumes one `usize` from the
//! generated vector and reduces it mod the legal move count).

use crate::board::{Board, Bitboard};
use proptest::prelude::*;

fn choices_strategy() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(any::<usize>(), 1..30)
}

fn play_random_walk(board: &mut Board, choices: &[usize]) {
    for &choice in choices {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[choice % moves.len()];
        board.make_move(mv);
    }
}

proptest! {
    /// Every reachable position keeps at most one piece per square: no two
    /// color/piece bitboards ever overlap.
    #[test]
    fn prop_piece_bitboards_never_overlap(choices in choices_strategy()) {
        let mut board = Board::new();
        play_random_walk(&mut board, &choices);

        for c1 in [crate::board::Color::White, crate::board::Color::Black] {
            for p1 in crate::board::Piece::ALL {
                for p2 in crate::board::Piece::ALL {
                    if p1 == p2 {
                        continue;
                    }
                    prop_assert!((board.pieces(c1, p1) & board.pieces(c1, p2)).is_empty());
                }
            }
        }
        prop_assert!((board.pieces(crate::board::Color::White, crate::board::Piece::Pawn)
            & board.pieces(crate::board::Color::Black, crate::board::Piece::Pawn))
            .is_empty());
    }

    /// `occupied_both` always equals the OR of both sides' occupancy, which
    /// always equals the OR of all twelve piece bitboards.
    #[test]
    fn prop_occupancy_matches_piece_union(choices in choices_strategy()) {
        let mut board = Board::new();
        play_random_walk(&mut board, &choices);

        let mut union = Bitboard::EMPTY;
        for color in [crate::board::Color::White, crate::board::Color::Black] {
            let mut side = Bitboard::EMPTY;
            for piece in crate::board::Piece::ALL {
                side |= board.pieces(color, piece);
            }
            prop_assert_eq!(side, board.occupied(color));
            union |= side;
        }
        prop_assert_eq!(union, board.occupied_both());
    }

    /// Castling rights stay a subset of the four rook-home squares, and
    /// en passant stays empty or a single bit on rank 3 or rank 6.
    #[test]
    fn prop_castling_and_en_passant_invariants_hold(choices in choices_strategy()) {
        let mut board = Board::new();
        play_random_walk(&mut board, &choices);

        let rook_homes = crate::board::Square::from_file_rank(0, 0).mask()
            | crate::board::Square::from_file_rank(7, 0).mask()
            | crate::board::Square::from_file_rank(0, 7).mask()
            | crate::board::Square::from_file_rank(7, 7).mask();
        prop_assert_eq!(board.castling_rights() & !rook_homes, Bitboard::EMPTY);

        let ep = board.en_passant();
        prop_assert!(ep.popcount() <= 1);
        if ep.popcount() == 1 {
            let on_rank_3_or_6 = !(ep & Bitboard::RANK_3).is_empty() || !(ep & Bitboard::RANK_6).is_empty();
            prop_assert!(on_rank_3_or_6);
        }
    }

    /// At most one king per side survives any sequence of pseudo-legal
    /// moves (a king is never promoted into, and capturing the king itself
    /// is outside what `make_move` is asked to do correctly, but the count
    /// the generator can reach should never exceed one).
    #[test]
    fn prop_at_most_one_king_per_side(choices in choices_strategy()) {
        let mut board = Board::new();
        play_random_walk(&mut board, &choices);

        for color in [crate::board::Color::White, crate::board::Color::Black] {
            prop_assert!(board.pieces(color, crate::board::Piece::King).popcount() <= 1);
        }
    }

    /// Re-parsing a position's own FEN yields a bit-identical occupancy.
    #[test]
    fn prop_fen_roundtrip_after_random_walk(choices in choices_strategy()) {
        let mut board = Board::new();
        play_random_walk(&mut board, &choices);

        let fen = board.to_fen();
        let restored = Board::from_fen(&fen);

        prop_assert_eq!(board.occupied_both(), restored.occupied_both());
        prop_assert_eq!(board.occupied(crate::board::Color::White), restored.occupied(crate::board::Color::White));
        prop_assert_eq!(board.turn(), restored.turn());
        prop_assert_eq!(board.castling_rights(), restored.castling_rights());
        prop_assert_eq!(board.en_passant(), restored.en_passant());
    }

    /// Cloning before `make_move` leaves the original position untouched.
    #[test]
    fn prop_make_move_on_copy_preserves_original(choices in choices_strategy()) {
        let mut board = Board::new();
        play_random_walk(&mut board, &choices);

        let moves = board.generate_moves();
        if !moves.is_empty() {
            let before = board.to_fen();
            let mv = moves.as_slice()[choices[0] % moves.len()];
            let mut copy = board.clone();
            copy.make_move(mv);
            prop_assert_eq!(board.to_fen(), before);
        }
    }
}
