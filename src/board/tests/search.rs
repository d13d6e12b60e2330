//! Search behaviour tests beyond the unit tests in the search module.

use crate::board::types::PIECE_VALUES;
use crate::board::{find_best, search, Position};

/// After the engine's reply, no enemy piece may be able to capture a piece
/// of strictly greater value than its own on the next ply.
fn leaves_no_hanging_trade(pos: &Position) -> bool {
    !pos.legal_moves().iter().any(|m| {
        m.captured_piece().zip(pos.piece_at(m.from())).map_or(
            false,
            |(victim, attacker)| {
                PIECE_VALUES[victim.kind()] > PIECE_VALUES[attacker.kind()]
            },
        )
    })
}

#[test]
fn test_no_capture_blunder_in_petrov() {
    // 1. e4 e5 2. Nf3 and Black to move: the reply must not hang material
    // to a cheaper attacker.
    let pos =
        Position::from_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2");
    let outcome = search(&pos, 2000, None);
    assert!(outcome.depth >= 4, "expected depth 4+, got {}", outcome.depth);

    let mut after = pos.clone();
    after.make_move(outcome.best_move);
    assert!(
        leaves_no_hanging_trade(&after),
        "reply {} hangs material",
        outcome.best_move
    );
}

#[test]
fn test_best_move_is_always_legal() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        "4k3/8/8/8/8/8/8/4K2R w K - 0 1",
    ];
    for fen in fens {
        let pos = Position::from_fen(fen);
        let mv = find_best(&pos, 200);
        assert!(
            pos.legal_moves().contains(mv),
            "illegal best move {mv} for {fen}"
        );
    }
}

#[test]
fn test_checkmated_side_gets_null_move() {
    let pos = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    assert!(find_best(&pos, 200).is_null());
}

#[test]
fn test_deeper_search_keeps_time_budget_roughly() {
    let pos = Position::new();
    let start = std::time::Instant::now();
    let _ = find_best(&pos, 300);
    // The 2048-node clock poll is coarse; allow generous slack but catch
    // runaway searches.
    assert!(start.elapsed().as_millis() < 5000);
}
