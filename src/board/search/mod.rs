//! Alpha-beta search with iterative deepening.
//!
//! Features:
//! - Negamax with alpha-beta pruning
//! - Quiescence search over captures
//! - Move ordering (captures by victim value, promotions, killer moves)
//! - Iterative deepening under a wall-clock budget with cooperative stop

mod move_order;
mod negamax;
mod quiescence;

use std::time::Instant;

use super::state::Position;
use super::types::{Move, MAX_PLY};

/// Score of a mate at the root; mates found deeper score progressively
/// worse so the search prefers the shortest one.
pub(crate) const MATE_VALUE: i32 = 49_000;

/// Any score beyond this is a mate report.
pub(crate) const MATE_THRESHOLD: i32 = 48_000;

/// Window bound wider than any reachable score.
pub(crate) const SCORE_INFINITE: i32 = 50_000;

/// Iterative deepening ceiling.
const MAX_SEARCH_DEPTH: u32 = 64;

/// The clock is polled every 2048 nodes.
const CLOCK_POLL_MASK: u64 = 2047;

/// Safety buffer subtracted from the budget, and the floor under it.
const TIME_MARGIN_MS: u64 = 50;

/// One completed deepening iteration.
#[derive(Debug, Clone)]
pub struct SearchInfo {
    pub depth: u32,
    pub score: i32,
    pub nodes: u64,
    pub pv: String,
}

/// Sink for per-iteration search reports.
pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

/// Logger printing UCI `info` lines.
pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn info(&self, info: &SearchInfo) {
        println!(
            "info depth {} score cp {} nodes {} pv {}",
            info.depth, info.score, info.nodes, info.pv
        );
    }
}

/// Result of a full search.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// Best move of the deepest completed iteration; the null move when the
    /// position has no legal moves.
    pub best_move: Move,
    /// Score of that iteration, from the mover's perspective.
    pub score: i32,
    /// Deepest completed iteration.
    pub depth: u32,
    /// Nodes visited by the main search.
    pub nodes: u64,
}

/// Per-search state: killer slots, node counter, clock and stop flag. A
/// fresh context is built for every `find_best` call; searches must not
/// run concurrently.
pub(crate) struct SearchContext {
    pub(crate) killers: [[Move; 2]; MAX_PLY],
    pub(crate) nodes: u64,
    pub(crate) stop: bool,
    start: Instant,
    allocated_ms: u64,
}

impl SearchContext {
    fn new(budget_ms: u64) -> Self {
        SearchContext {
            killers: [[Move::NULL; 2]; MAX_PLY],
            nodes: 0,
            stop: false,
            start: Instant::now(),
            allocated_ms: budget_ms.saturating_sub(TIME_MARGIN_MS).max(TIME_MARGIN_MS),
        }
    }

    /// Cooperative cancellation: flips the stop flag once the allocation is
    /// spent. Called from the node-count poll in the main search.
    pub(crate) fn check_clock(&mut self) {
        if self.start.elapsed().as_millis() as u64 >= self.allocated_ms {
            self.stop = true;
        }
    }

    #[inline]
    pub(crate) fn poll_due(&self) -> bool {
        self.nodes & CLOCK_POLL_MASK == 0
    }
}

/// Search `pos` for up to `time_ms` milliseconds and return the best move,
/// or the null move if the position has no legal moves.
#[must_use]
pub fn find_best(pos: &Position, time_ms: u64) -> Move {
    search(pos, time_ms, None).best_move
}

/// Full search entry point: iterative deepening from depth 1, keeping the
/// best move of the last iteration that finished inside the budget.
#[must_use]
pub fn search(pos: &Position, time_ms: u64, logger: Option<&dyn SearchLogger>) -> SearchOutcome {
    #[cfg(feature = "logging")]
    log::debug!("search start: budget {time_ms} ms, fen {}", pos.to_fen());

    let mut ctx = SearchContext::new(time_ms);
    let mut outcome = SearchOutcome {
        best_move: Move::NULL,
        score: 0,
        depth: 0,
        nodes: 0,
    };

    for depth in 1..=MAX_SEARCH_DEPTH {
        let (score, best) = ctx.search_root(pos, -SCORE_INFINITE, SCORE_INFINITE, depth);

        if ctx.stop {
            // The iteration was cut short; its result is untrustworthy.
            break;
        }

        outcome.best_move = best;
        outcome.score = score;
        outcome.depth = depth;
        outcome.nodes = ctx.nodes;

        if let Some(logger) = logger {
            logger.info(&SearchInfo {
                depth,
                score,
                nodes: ctx.nodes,
                pv: best.to_string(),
            });
        }

        // A forced mate will not improve with more depth.
        if score.abs() > MATE_THRESHOLD {
            break;
        }
    }

    outcome.nodes = ctx.nodes;

    #[cfg(feature = "logging")]
    log::debug!(
        "search done: depth {} score {} nodes {}",
        outcome.depth,
        outcome.score,
        outcome.nodes
    );

    outcome
}
