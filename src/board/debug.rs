use super::types::{Bitboard, Color, Piece};
use super::Board;

#[cfg(debug_assertions)]
impl Board {
    /// Prints every piece bitboard, side to move, castling rights, and the
    /// en-passant mask. For ad hoc debugging only.
    pub fn debug_bitboards(&self) {
        let pieces = [
            (Piece::Pawn, "P"),
            (Piece::Knight, "N"),
            (Piece::Bishop, "B"),
            (Piece::Rook, "R"),
            (Piece::Queen, "Q"),
            (Piece::King, "K"),
        ];

        println!(
            "Side to move: {}",
            if self.turn() == Color::White {
                "White"
            } else {
                "Black"
            }
        );
        println!("Castling rights mask: {:#018x}", self.castling_rights().0);
        println!("En passant mask: {:#018x}", self.en_passant().0);
        println!("All occupied: {:#018x}", self.occupied_both().0);

        for color in [Color::White, Color::Black] {
            let label = if color == Color::White { "White" } else { "Black" };
            for (piece, name) in pieces {
                println!("{label} {name}: {:#018x}", self.pieces(color, piece).0);
            }
        }
        println!("------------------------------------");
    }

    /// Prints a single bitboard as an 8x8 grid, rank 8 at the top.
    pub fn print_bitboard_grid(label: &str, bb: Bitboard) {
        println!("{label} {:#018x}", bb.0);
        println!("  +---+---+---+---+---+---+---+---+");
        for rank in (0..8).rev() {
            print!("{} |", rank + 1);
            for file in 0..8 {
                let idx = rank * 8 + file;
                let ch = if (bb.0 >> idx) & 1 == 1 { '1' } else { '.' };
                print!(" {ch} |");
            }
            println!("\n  +---+---+---+---+---+---+---+---+");
        }
        println!("    a   b   c   d   e   f   g   h");
        println!("------------------------------------");
    }
}
