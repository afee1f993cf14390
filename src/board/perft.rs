//! Perft: exhaustive move-tree node counting, used to validate the move
//! generator and move application against known-good reference counts.
//!
//! Legality is never filtered out of the move list itself; instead, each
//! candidate move is applied and immediately checked — if it left the
//! mover's own king attacked, that subtree contributes zero nodes and is
//! pruned without further recursion. This keeps the generator simple at
//! the cost of briefly materializing moves that turn out to be illegal.

use super::Board;

/// Breakdown of a single top-level move's subtree, as returned by
/// [`Board::divide`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivideEntry {
    pub mv: String,
    pub nodes: u64,
}

impl Board {
    /// Counts the legal move paths to `depth` plies from this position.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let color = self.turn();
        let mut nodes = 0u64;
        for mv in self.generate_moves().iter() {
            let mut next = self.clone();
            next.make_move(*mv);
            if next.in_check(color) {
                continue;
            }
            nodes += next.perft(depth - 1);
        }
        nodes
    }

    /// Like [`Board::perft`], but returns the node count contributed by
    /// each legal top-level move instead of only the total. Useful for
    /// bisecting a perft discrepancy against a reference engine.
    #[must_use]
    pub fn divide(&self, depth: u32) -> Vec<DivideEntry> {
        let color = self.turn();
        let mut entries = Vec::new();
        for mv in self.generate_moves().iter() {
            let mut next = self.clone();
            next.make_move(*mv);
            if next.in_check(color) {
                continue;
            }
            let nodes = if depth == 0 { 1 } else { next.perft(depth - 1) };
            entries.push(DivideEntry {
                mv: mv.to_string(),
                nodes,
            });
        }
        entries
    }
}
