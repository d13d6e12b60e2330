//! Negamax with alpha-beta pruning.

use super::super::state::Position;
use super::super::types::{Move, MAX_PLY};
use super::{SearchContext, MATE_VALUE, SCORE_INFINITE};

impl SearchContext {
    /// Root search: negamax over the root moves, additionally tracking the
    /// best move. Returns `(score, best)`; the best move is meaningless if
    /// the stop flag was raised mid-iteration.
    pub(crate) fn search_root(
        &mut self,
        pos: &Position,
        mut alpha: i32,
        beta: i32,
        depth: u32,
    ) -> (i32, Move) {
        let moves = self.order_moves(pos, 0);
        let mover = pos.side_to_move();

        let mut best_score = -SCORE_INFINITE;
        let mut best_move = Move::NULL;
        let mut legal_moves = 0;

        for scored in moves.iter() {
            let mv = scored.mv;
            let mut child = pos.clone();
            child.make_move(mv);
            if child.king_attacked(mover) {
                continue;
            }
            legal_moves += 1;

            let score = -self.negamax(&child, -beta, -alpha, depth - 1, 1);
            if self.stop {
                return (0, Move::NULL);
            }

            if score > best_score {
                best_score = score;
                best_move = mv;
            }
            if score >= beta {
                break;
            }
            if score > alpha {
                alpha = score;
            }
        }

        if legal_moves == 0 {
            let score = if pos.in_check(mover) {
                // Deeper remaining depth means a shallower mate: worse for
                // the mated side, better for the mating side once negated.
                -MATE_VALUE - depth as i32
            } else {
                0
            };
            return (score, Move::NULL);
        }

        (best_score, best_move)
    }

    /// Negamax over pseudo-legal children with alpha-beta bounds.
    ///
    /// Polls the clock every 2048 nodes; once the stop flag is up every
    /// frame returns 0 immediately and the root discards the iteration.
    pub(crate) fn negamax(
        &mut self,
        pos: &Position,
        mut alpha: i32,
        beta: i32,
        depth: u32,
        ply: usize,
    ) -> i32 {
        self.nodes += 1;
        if self.poll_due() {
            self.check_clock();
        }
        if self.stop {
            return 0;
        }

        if depth == 0 {
            return self.quiescence(pos, alpha, beta);
        }

        let moves = self.order_moves(pos, ply);
        let mover = pos.side_to_move();
        let mut legal_moves = 0;

        for scored in moves.iter() {
            let mv = scored.mv;
            let mut child = pos.clone();
            child.make_move(mv);
            if child.king_attacked(mover) {
                continue;
            }
            legal_moves += 1;

            let score = -self.negamax(&child, -beta, -alpha, depth - 1, ply + 1);

            if score >= beta {
                // A quiet refutation is worth trying early in sibling
                // subtrees at the same ply.
                if !mv.is_capture() && ply < MAX_PLY {
                    self.killers[ply][1] = self.killers[ply][0];
                    self.killers[ply][0] = mv;
                }
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        if legal_moves == 0 {
            return if pos.in_check(mover) {
                -MATE_VALUE - depth as i32
            } else {
                0
            };
        }

        alpha
    }
}
