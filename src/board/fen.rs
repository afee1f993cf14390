//! FEN (Forsyth-Edwards Notation) ingest and pretty-printing.

use std::fmt;
use std::str::FromStr;

use super::error::FenError;
use super::state::Board;
use super::types::{Color, Piece, Square, A1, A8, H1, H8};

impl Board {
    /// Parses the first four whitespace-separated FEN fields (piece
    /// placement, side to move, castling rights, en-passant target).
    /// Halfmove and fullmove counters, if present, are accepted and
    /// ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(FenError::TooFewFields {
                found: fields.len(),
            });
        }

        // The cursor starts on a8 and walks the placement string left to
        // right; '/' drops it one rank (minus the eight files just
        // consumed), digits skip empty squares, letters place a piece and
        // advance by one.
        let mut cursor: i32 = 56;
        let mut rank_count = 0usize;
        let mut file_in_rank = 0usize;
        for c in fields[0].chars() {
            match c {
                '/' => {
                    if file_in_rank != 8 {
                        return Err(FenError::InvalidRank {
                            rank: rank_count,
                            files: file_in_rank,
                        });
                    }
                    cursor -= 16;
                    rank_count += 1;
                    if rank_count >= 8 {
                        return Err(FenError::TooManyRanks);
                    }
                    file_in_rank = 0;
                }
                '1'..='8' => {
                    let skip = c.to_digit(10).unwrap() as usize;
                    cursor += skip as i32;
                    file_in_rank += skip;
                }
                _ => {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    board.set_piece(Square::new(cursor as u8), color, piece);
                    cursor += 1;
                    file_in_rank += 1;
                }
            }
        }
        if file_in_rank != 8 {
            return Err(FenError::InvalidRank {
                rank: rank_count,
                files: file_in_rank,
            });
        }
        board.recompute_occupancy();

        board.turn = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in fields[2].chars() {
            match c {
                'K' => board.castling_rights |= H1.mask(),
                'Q' => board.castling_rights |= A1.mask(),
                'k' => board.castling_rights |= H8.mask(),
                'q' => board.castling_rights |= A8.mask(),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        board.en_passant = if fields[3] == "-" {
            super::types::Bitboard::EMPTY
        } else {
            let chars: Vec<char> = fields[3].chars().collect();
            if chars.len() == 2
                && ('a'..='h').contains(&chars[0])
                && ('1'..='8').contains(&chars[1])
            {
                let file = chars[0] as u8 - b'a';
                let rank = chars[1] as u8 - b'1';
                Square::from_file_rank(file, rank).mask()
            } else {
                return Err(FenError::InvalidEnPassant {
                    found: fields[3].to_string(),
                });
            }
        };

        Ok(board)
    }

    /// Parses a FEN string, panicking on malformed input. Use
    /// [`Board::try_from_fen`] for fallible parsing.
    ///
    /// # Panics
    /// Panics if `fen` is not valid FEN.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("invalid FEN string")
    }

    /// Serializes the position back to FEN. Halfmove/fullmove counters are
    /// not tracked by this core, so they are emitted as `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut ranks = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0u32;
            for file in 0..8 {
                let sq = Square::from_file_rank(file, rank);
                if let Some((color, piece)) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            ranks.push(row);
        }

        let turn = if self.turn == Color::White { "w" } else { "b" };

        let mut castling = String::new();
        if !(self.castling_rights & H1.mask()).is_empty() {
            castling.push('K');
        }
        if !(self.castling_rights & A1.mask()).is_empty() {
            castling.push('Q');
        }
        if !(self.castling_rights & H8.mask()).is_empty() {
            castling.push('k');
        }
        if !(self.castling_rights & A8.mask()).is_empty() {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant
            .to_square()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {} {} {} 0 1", ranks.join("/"), turn, castling, ep)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

impl fmt::Display for Board {
    /// A diagnostic ASCII board, rank 8 at the top, files a-h labeled
    /// underneath. `*` marks the en-passant target and the squares a
    /// castling right still pins a rook to.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "+---+---+---+---+---+---+---+---+";
        writeln!(f, "{separator}")?;
        for rank in (0..8).rev() {
            write!(f, "|")?;
            for file in 0..8 {
                let sq = Square::from_file_rank(file, rank);
                let marker = if !(self.en_passant & sq.mask()).is_empty()
                    || !(self.castling_rights & sq.mask()).is_empty()
                {
                    '*'
                } else {
                    ' '
                };
                match self.piece_at(sq) {
                    Some((color, piece)) => write!(f, " {}{marker}|", piece.to_fen_char(color))?,
                    None => write!(f, "  {marker}|")?,
                }
            }
            writeln!(f, "\n{separator}")?;
        }
        write!(
            f,
            "Turn: {}",
            if self.turn == Color::White {
                "White"
            } else {
                "Black"
            }
        )
    }
}
