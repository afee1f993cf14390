//! FEN round-trip and parse-error tests.

use crate::board::{Board, Color};

#[test]
fn initial_fen_round_trips() {
    let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    let board = Board::from_fen(fen);
    assert_eq!(board.to_fen(), fen);
}

#[test]
fn initial_fen_occupancy_matches_reference_masks() {
    let board = Board::new();
    assert_eq!(board.occupied(Color::White).0, 0x0000_0000_0000_FFFF);
    assert_eq!(board.occupied(Color::Black).0, 0xFFFF_0000_0000_0000);
    assert_eq!(board.occupied_both().0, 0xFFFF_0000_0000_FFFF);
}

#[test]
fn kiwipete_fen_round_trips() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let board = Board::from_fen(fen);
    assert_eq!(board.to_fen(), fen);
}

#[test]
fn en_passant_square_parses() {
    let board = Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
    assert_eq!(board.en_passant().to_square().unwrap().to_string(), "d6");
}

#[test]
fn missing_fields_are_rejected() {
    assert!(Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").is_err());
}

#[test]
fn unknown_piece_letter_is_rejected() {
    assert!(
        Board::try_from_fen("rnbxkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").is_err()
    );
}

#[test]
fn bad_side_to_move_is_rejected() {
    assert!(
        Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1").is_err()
    );
}

#[test]
fn board_parses_via_fromstr() {
    let board: Board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        .parse()
        .unwrap();
    assert_eq!(board.turn(), Color::White);

    let result: Result<Board, _> = "not a fen".parse();
    assert!(result.is_err());
}
