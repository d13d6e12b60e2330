//! Known-tricky positions for the generator and legality filter.

use std::str::FromStr;

use crate::board::types::Square;
use crate::board::{Color, Position};

fn sq(s: &str) -> Square {
    Square::from_str(s).unwrap()
}

#[test]
fn test_en_passant_exposing_own_king_is_illegal() {
    // Capturing en passant would clear both pawns off the fourth rank and
    // expose the black king to the h4 rook.
    let pos = Position::from_fen("8/8/8/8/k2Pp2R/8/8/4K3 b - d3 0 1");
    let legal = pos.legal_moves();
    assert!(!legal.iter().any(|m| m.is_en_passant()));
    assert!(pos.parse_move("e4d3").is_err());
}

#[test]
fn test_en_passant_allowed_when_safe() {
    let pos = Position::from_fen("8/8/8/8/k2Pp3/8/8/4K3 b - d3 0 1");
    let legal = pos.legal_moves();
    assert!(legal.iter().any(|m| m.is_en_passant()));
}

#[test]
fn test_pinned_pawn_may_not_capture_sideways() {
    // The d4 pawn shields its king from the a-file rook sliding along the
    // fourth rank: capturing to e5 would be suicide.
    let pos = Position::from_fen("4k3/8/8/4p3/r2PK3/8/8/8 w - - 0 1");
    let legal = pos.legal_moves();
    assert!(!legal.iter().any(|m| m.from() == sq("d4") && m.is_capture()));
}

#[test]
fn test_double_check_forces_king_move() {
    // Knight on d3 and rook on e8 both give check; only the king may move
    // (the queen can capture the knight, but that leaves the rook's check).
    let pos = Position::from_fen("4r1k1/8/8/8/8/3n4/3Q4/4K3 w - - 0 1");
    let legal = pos.legal_moves();
    assert!(!legal.is_empty());
    assert!(legal.iter().all(|m| m.from() == sq("e1")));
}

#[test]
fn test_castling_rights_are_independent() {
    // Only Black retains rights; White generates no castling moves.
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1");
    assert!(!pos.legal_moves().iter().any(|m| m.is_castling()));

    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b kq - 0 1");
    assert_eq!(
        pos.legal_moves().iter().filter(|m| m.is_castling()).count(),
        2
    );
}

#[test]
fn test_promotion_square_occupied_by_friend() {
    // A friendly knight sits on the promotion square; only the capture
    // promotion to b8 remains.
    let pos = Position::from_fen("Nn6/P7/8/8/8/8/k3K3/8 w - - 0 1");
    let legal = pos.legal_moves();
    let promos: Vec<_> = legal.iter().filter(|m| m.is_promotion()).collect();
    assert_eq!(promos.len(), 4);
    assert!(promos.iter().all(|m| m.is_capture() && m.to() == sq("b8")));
}

#[test]
fn test_king_cannot_step_into_protected_square() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1");
    // The rook on e2 is defended... by nothing, so Kxe2 is fine; but
    // stepping to d2 or f2 stays within the rook's reach and is illegal.
    let legal = pos.legal_moves();
    assert!(legal.iter().any(|m| m.to() == sq("e2")));
    assert!(!legal.iter().any(|m| m.to() == sq("d2")));
    assert!(!legal.iter().any(|m| m.to() == sq("f2")));
}

#[test]
fn test_kings_never_adjacent() {
    let pos = Position::from_fen("8/8/8/3k4/8/3K4/8/8 w - - 0 1");
    let legal = pos.legal_moves();
    // d4, c4 and e4 touch the black king.
    assert!(!legal.iter().any(|m| m.to() == sq("d4")));
    assert!(!legal.iter().any(|m| m.to() == sq("c4")));
    assert!(!legal.iter().any(|m| m.to() == sq("e4")));
    assert!(legal.iter().any(|m| m.to() == sq("c3")));
}

#[test]
fn test_in_check_detection_through_discovered_lines() {
    let pos = Position::from_fen("4k3/4r3/8/8/4N3/8/8/4K3 w - - 0 1");
    // The knight blocks the e-file; White is not in check.
    assert!(!pos.in_check(Color::White));
    // Moving the knight away is illegal.
    let legal = pos.legal_moves();
    assert!(!legal.iter().any(|m| m.from() == sq("e4")));
}
