//! Precomputed per-square attack tables (pawn/knight/king leapers, sliding
//! rays, castling geometry). Built once, read-only afterward; safe to share
//! across threads a future caller might add.

use once_cell::sync::Lazy;

use super::types::{Bitboard, Color, Square, A1, A8, E1, E8, H1, H8};

/// Ray direction codes, indexing [`RAYS`] and the slider step tables.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

use Direction::{East, North, NorthEast, NorthWest, South, SouthEast, SouthWest, West};

const ALL_DIRECTIONS: [Direction; 8] = [
    North, East, South, West, NorthWest, NorthEast, SouthEast, SouthWest,
];

/// Signed shift amount for one step in a direction (positive = left shift).
fn step(dir: Direction) -> i32 {
    match dir {
        North => 8,
        South => -8,
        East => 1,
        West => -1,
        NorthEast => 9,
        NorthWest => 7,
        SouthEast => -7,
        SouthWest => -9,
    }
}

fn shift(bb: u64, amount: i32) -> u64 {
    if amount >= 0 {
        bb.wrapping_shl(amount as u32)
    } else {
        bb.wrapping_shr((-amount) as u32)
    }
}

fn in_bounds(rank: i32, file: i32) -> bool {
    (0..8).contains(&rank) && (0..8).contains(&file)
}

/// Single push target for a pawn of `color` from each square (zero on ranks 1 and 8).
pub(crate) static PAWN_PUSH_ONE: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let mut table = [[0u64; 64]; 2];
    for idx in 0..64 {
        let rank = idx / 8;
        if rank > 0 && rank < 7 {
            table[Color::White.index()][idx] = 1u64 << (idx + 8);
            table[Color::Black.index()][idx] = 1u64 << (idx - 8);
        }
    }
    table
});

/// Union of the one-push and two-push targets; non-zero two-push component
/// only from rank 2 (white) / rank 7 (black). Callers AND this against
/// emptiness only after confirming the one-push square is itself empty,
/// so a single mask encodes "one push if two is blocked, both if both are
/// empty".
pub(crate) static PAWN_PUSH_TWO: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let mut table = [[0u64; 64]; 2];
    for idx in 0..64 {
        let rank = idx / 8;
        table[Color::White.index()][idx] = PAWN_PUSH_ONE[Color::White.index()][idx];
        table[Color::Black.index()][idx] = PAWN_PUSH_ONE[Color::Black.index()][idx];
        if rank == 1 {
            table[Color::White.index()][idx] |= 1u64 << (idx + 16);
        }
        if rank == 6 {
            table[Color::Black.index()][idx] |= 1u64 << (idx - 16);
        }
    }
    table
});

/// Diagonal attack squares for a pawn of `color` from each square.
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let mut table = [[0u64; 64]; 2];
    for idx in 0..64 {
        let rank = (idx / 8) as i32;
        let file = (idx % 8) as i32;
        for (color, dr) in [(Color::White, 1i32), (Color::Black, -1i32)] {
            let r2 = rank + dr;
            if !(0..8).contains(&r2) {
                continue;
            }
            let mut mask = 0u64;
            for df in [-1i32, 1i32] {
                let f2 = file + df;
                if (0..8).contains(&f2) {
                    mask |= 1u64 << (r2 * 8 + f2);
                }
            }
            table[color.index()][idx] = mask;
        }
    }
    table
});

/// Inverse of [`PAWN_ATTACKS`]: the squares from which a pawn of `color`
/// attacks the given target square.
pub(crate) static PAWN_ATTACKERS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let mut table = [[0u64; 64]; 2];
    for attacker_idx in 0..64 {
        for color in [Color::White, Color::Black] {
            let mut targets = PAWN_ATTACKS[color.index()][attacker_idx];
            while targets != 0 {
                let target_idx = targets.trailing_zeros() as usize;
                targets &= targets - 1;
                table[color.index()][target_idx] |= 1u64 << attacker_idx;
            }
        }
    }
    table
});

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut table = [0u64; 64];
    const DELTAS: [(i32, i32); 8] = [
        (1, 2),
        (-1, 2),
        (2, 1),
        (-2, 1),
        (1, -2),
        (-1, -2),
        (2, -1),
        (-2, -1),
    ];
    for idx in 0..64 {
        let rank = (idx / 8) as i32;
        let file = (idx % 8) as i32;
        let mut mask = 0u64;
        for (dr, df) in DELTAS {
            let (r2, f2) = (rank + dr, file + df);
            if in_bounds(r2, f2) {
                mask |= 1u64 << (r2 * 8 + f2);
            }
        }
        table[idx] = mask;
    }
    table
});

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut table = [0u64; 64];
    for idx in 0..64 {
        let rank = (idx / 8) as i32;
        let file = (idx % 8) as i32;
        let mut mask = 0u64;
        for dr in -1..=1 {
            for df in -1..=1 {
                if dr == 0 && df == 0 {
                    continue;
                }
                let (r2, f2) = (rank + dr, file + df);
                if in_bounds(r2, f2) {
                    mask |= 1u64 << (r2 * 8 + f2);
                }
            }
        }
        table[idx] = mask;
    }
    table
});

/// Ray bitboard in each of the eight directions from each square, exclusive
/// of the source square, extending to the board edge.
pub(crate) static RAYS: Lazy<[[u64; 64]; 8]> = Lazy::new(|| {
    let mut table = [[0u64; 64]; 8];
    for idx in 0..64 {
        let rank = (idx / 8) as i32;
        let file = (idx % 8) as i32;
        for (d, dir) in ALL_DIRECTIONS.iter().enumerate() {
            let (dr, df) = match dir {
                North => (1, 0),
                South => (-1, 0),
                East => (0, 1),
                West => (0, -1),
                NorthEast => (1, 1),
                NorthWest => (1, -1),
                SouthEast => (-1, 1),
                SouthWest => (-1, -1),
            };
            let mut mask = 0u64;
            let (mut r, mut f) = (rank + dr, file + df);
            while in_bounds(r, f) {
                mask |= 1u64 << (r * 8 + f);
                r += dr;
                f += df;
            }
            table[d][idx] = mask;
        }
    }
    table
});

fn ray(dir: Direction, sq_idx: usize) -> u64 {
    RAYS[dir as usize][sq_idx]
}

/// Targets along one ray direction, occluded by the nearest blocker in
/// `occupied`. Walks the blocker set toward the ray's far edge by shifting
/// six times (a ray spans at most 7 squares), then XORs against the full
/// ray: what remains is everything strictly before the blocker, plus the
/// blocker square itself (a capture if it's an opponent, trimmed by the
/// caller if it's a friendly piece).
fn ray_targets(dir: Direction, sq_idx: usize, occupied: u64) -> u64 {
    let full_ray = ray(dir, sq_idx);
    let blockers = full_ray & occupied;
    if blockers == 0 {
        return full_ray;
    }
    let k = step(dir);
    let mut beyond = 0u64;
    for m in 1..=6 {
        beyond |= shift(blockers, k * m);
    }
    beyond &= full_ray;
    beyond ^ full_ray
}

/// Sliding targets for a bishop standing on `sq_idx`, occlusion-aware.
pub(crate) fn bishop_targets(sq_idx: usize, occupied: u64) -> u64 {
    ray_targets(NorthWest, sq_idx, occupied)
        | ray_targets(NorthEast, sq_idx, occupied)
        | ray_targets(SouthEast, sq_idx, occupied)
        | ray_targets(SouthWest, sq_idx, occupied)
}

/// Sliding targets for a rook standing on `sq_idx`, occlusion-aware.
pub(crate) fn rook_targets(sq_idx: usize, occupied: u64) -> u64 {
    ray_targets(North, sq_idx, occupied)
        | ray_targets(South, sq_idx, occupied)
        | ray_targets(East, sq_idx, occupied)
        | ray_targets(West, sq_idx, occupied)
}

/// Castling side: queenside (a-rook) or kingside (h-rook).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum CastleSide {
    Queenside,
    Kingside,
}

/// The rook-home square mask for a color/side, keyed by the castling-rights
/// bitboard convention (castling rights are a bitboard over `{a1,h1,a8,h8}`).
pub(crate) fn castling_rook_home(color: Color, side: CastleSide) -> Bitboard {
    match (color, side) {
        (Color::White, CastleSide::Queenside) => A1.mask(),
        (Color::White, CastleSide::Kingside) => H1.mask(),
        (Color::Black, CastleSide::Queenside) => A8.mask(),
        (Color::Black, CastleSide::Kingside) => H8.mask(),
    }
}

/// The two squares the king itself traverses (start excluded, landing
/// square included) — used for the "does the king pass through or land on
/// an attacked square" check.
pub(crate) fn castling_king_steps(color: Color, side: CastleSide) -> Bitboard {
    let rank = if color == Color::White { 0 } else { 7 };
    match side {
        CastleSide::Kingside => {
            Square::from_file_rank(5, rank).mask() | Square::from_file_rank(6, rank).mask()
        }
        CastleSide::Queenside => {
            Square::from_file_rank(3, rank).mask() | Square::from_file_rank(2, rank).mask()
        }
    }
}

/// All squares between king and rook that must be empty for the move
/// (wider than [`castling_king_steps`] on the queenside, which also needs
/// the b-file clear even though the king itself never crosses it).
pub(crate) fn castling_empty_path(color: Color, side: CastleSide) -> Bitboard {
    let rank = if color == Color::White { 0 } else { 7 };
    match side {
        CastleSide::Kingside => {
            Square::from_file_rank(5, rank).mask() | Square::from_file_rank(6, rank).mask()
        }
        CastleSide::Queenside => {
            Square::from_file_rank(1, rank).mask()
                | Square::from_file_rank(2, rank).mask()
                | Square::from_file_rank(3, rank).mask()
        }
    }
}

pub(crate) fn king_home(color: Color) -> Square {
    if color == Color::White {
        E1
    } else {
        E8
    }
}

/// The OR of both rook-home masks for a color; used to clear both castling
/// rights at once when that color's king moves.
pub(crate) fn castling_rights_for_color(color: Color) -> Bitboard {
    castling_rook_home(color, CastleSide::Queenside) | castling_rook_home(color, CastleSide::Kingside)
}

/// The promotion rank: the far rank from the mover's own back rank.
pub(crate) fn promotion_rank(color: Color) -> Bitboard {
    if color == Color::White {
        Bitboard::RANK_8
    } else {
        Bitboard::RANK_1
    }
}
