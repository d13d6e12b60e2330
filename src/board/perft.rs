//! Perft: the legal move tree node counter used as a movegen oracle.

use super::state::Position;
use super::types::Move;

impl Position {
    /// Count the leaf nodes of the legal move tree to `depth`.
    ///
    /// Pseudo-legal children that leave the mover's king attacked are
    /// skipped silently, exactly as the search does.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let mover = self.side_to_move();
        let mut nodes = 0;
        for mv in &self.pseudo_moves() {
            let mut child = self.clone();
            child.make_move(*mv);
            if child.king_attacked(mover) {
                continue;
            }
            nodes += child.perft(depth - 1);
        }
        nodes
    }

    /// Per-root-move node breakdown, for hunting down generator
    /// discrepancies against a reference engine.
    #[must_use]
    pub fn perft_divide(&self, depth: u32) -> Vec<(Move, u64)> {
        let mover = self.side_to_move();
        let mut results = Vec::new();
        for mv in &self.pseudo_moves() {
            let mut child = self.clone();
            child.make_move(*mv);
            if child.king_attacked(mover) {
                continue;
            }
            let nodes = if depth > 0 { child.perft(depth - 1) } else { 1 };
            results.push((*mv, nodes));
        }
        results
    }
}
