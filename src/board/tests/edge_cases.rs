//! Hand-picked positions exercising castling, en passant, promotion, and
//! the lone-king-move leaf-legality filter.

use crate::board::{Board, Color, Piece};

#[test]
fn initial_position_has_twenty_pseudo_legal_moves() {
    let board = Board::new();
    let moves = board.generate_moves();
    assert_eq!(moves.len(), 20);

    let pawn_moves = moves.iter().filter(|m| m.piece == Piece::Pawn).count();
    let knight_moves = moves.iter().filter(|m| m.piece == Piece::Knight).count();
    assert_eq!(pawn_moves, 16);
    assert_eq!(knight_moves, 4);
}

#[test]
fn lone_king_has_five_legal_moves_against_a_pawn() {
    // The e2 pawn covers d3/f3, leaving five of the king's eight
    // neighboring squares legal once check-leaving moves are filtered.
    let board = Board::from_fen("8/8/8/8/8/8/4p3/4K3 w - - 0 1");
    let legal = board
        .generate_moves()
        .iter()
        .filter(|m| {
            let mut next = board.clone();
            next.make_move(**m);
            !next.in_check(Color::White)
        })
        .count();
    assert_eq!(legal, 5);
}

#[test]
fn en_passant_capture_removes_the_passed_pawn() {
    let mut board = Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
    let moves = board.generate_moves();
    let ep_move = *moves
        .iter()
        .find(|m| m.piece == Piece::Pawn && m.capture == Some(Piece::Pawn) && m.to.to_string() == "d6")
        .expect("en passant capture should be generated");

    board.make_move(ep_move);

    assert!(board.piece_at(crate::board::Square::from_file_rank(3, 4)).is_none());
    assert_eq!(
        board.piece_at(crate::board::Square::from_file_rank(3, 5)).map(|(_, p)| p),
        Some(Piece::Pawn)
    );
}

#[test]
fn castling_generated_both_sides_when_path_is_clear() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let moves = board.generate_moves();
    let castles: Vec<_> = moves.iter().filter(|m| m.is_castle()).collect();
    assert_eq!(castles.len(), 2);
}

#[test]
fn castling_unavailable_while_in_check() {
    let board = Board::from_fen("r3k2r/8/8/8/4Q3/8/8/R3K2R b KQkq - 0 1");
    let moves = board.generate_moves();
    assert!(
        moves.iter().all(|m| !m.is_castle()),
        "black king is in check, castling must not be generated as a way out"
    );
}

#[test]
fn castling_clears_both_rights_for_the_moved_side() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mv = *board
        .generate_moves()
        .iter()
        .find(|m| m.is_castle() && m.to.to_string() == "g1")
        .expect("kingside castle should be generated");
    board.make_move(mv);
    let white_rights = crate::board::Square::from_file_rank(0, 0).mask()
        | crate::board::Square::from_file_rank(7, 0).mask();
    assert!((board.castling_rights() & white_rights).is_empty());
}

#[test]
fn promotion_offers_all_four_piece_choices() {
    let board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = board.generate_moves();
    for piece in Piece::PROMOTIONS {
        assert!(
            moves.iter().any(|m| m.promotion == Some(piece)),
            "missing promotion choice {piece:?}"
        );
    }
}

#[test]
fn rook_capture_clears_castling_right_even_without_rook_moving() {
    // Black rook captures the a1 rook; white's queenside right must die
    // even though no white piece moved.
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/r3K2R b K - 0 1");
    let mv = *board
        .generate_moves()
        .iter()
        .find(|m| m.to.to_string() == "a1")
        .expect("rook should be able to capture on a1");
    board.make_move(mv);
    assert!((board.castling_rights() & crate::board::Square::from_file_rank(0, 0).mask()).is_empty());
}
