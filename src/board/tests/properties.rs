//! Property tests: state invariants over random legal playouts.

use proptest::prelude::*;

use crate::board::types::{Bitboard, Color, Piece, Square};
use crate::board::Position;

/// Every invariant the data model promises: mailbox and planes agree both
/// ways, occupancies are the unions of their piece planes, the sides never
/// overlap, each side has one king, and an en-passant target only ever sits
/// on the third or sixth rank.
fn assert_consistent(pos: &Position) {
    let mut white = Bitboard::EMPTY;
    let mut black = Bitboard::EMPTY;
    for idx in 0..6 {
        white = white.or(pos.planes[idx]);
        black = black.or(pos.planes[idx + 6]);
    }
    assert_eq!(pos.occupancy(Color::White), white, "white occupancy union");
    assert_eq!(pos.occupancy(Color::Black), black, "black occupancy union");
    assert_eq!(pos.all_occupancy(), white.or(black), "combined occupancy");
    assert!(!white.intersects(black), "sides overlap");

    for idx in 0..64 {
        let sq = Square::from_index(idx);
        match pos.piece_at(sq) {
            Some(piece) => {
                assert!(pos.pieces(piece).contains(sq), "mailbox without plane bit");
            }
            None => {
                assert!(!pos.all_occupancy().contains(sq), "plane bit without mailbox");
            }
        }
    }

    assert_eq!(pos.pieces(Piece::WhiteKing).popcount(), 1);
    assert_eq!(pos.pieces(Piece::BlackKing).popcount(), 1);

    if let Some(ep) = pos.ep_target() {
        assert!(ep.rank() == 2 || ep.rank() == 5, "ep target off rank 3/6");
    }
}

proptest! {
    #[test]
    fn invariants_hold_over_random_playouts(
        picks in proptest::collection::vec(0usize..4096, 0..80)
    ) {
        let mut pos = Position::new();
        for pick in picks {
            let legal = pos.legal_moves();
            if legal.is_empty() {
                break;
            }
            pos.make_move(legal[pick % legal.len()]);
            assert_consistent(&pos);
        }
    }

    #[test]
    fn legal_moves_never_leave_king_attacked(
        picks in proptest::collection::vec(0usize..4096, 0..40)
    ) {
        let mut pos = Position::new();
        for pick in picks {
            let legal = pos.legal_moves();
            if legal.is_empty() {
                break;
            }
            let mover = pos.side_to_move();
            for mv in &legal {
                let mut child = pos.clone();
                child.make_move(*mv);
                prop_assert!(!child.attacked(
                    child.king_square(mover),
                    child.side_to_move()
                ));
            }
            pos.make_move(legal[pick % legal.len()]);
        }
    }

    #[test]
    fn move_strings_unique_within_a_position(
        picks in proptest::collection::vec(0usize..4096, 0..30)
    ) {
        let mut pos = Position::new();
        for pick in picks {
            let legal = pos.legal_moves();
            if legal.is_empty() {
                break;
            }
            let mut strings: Vec<String> =
                legal.iter().map(std::string::ToString::to_string).collect();
            strings.sort();
            let before = strings.len();
            strings.dedup();
            prop_assert_eq!(before, strings.len());
            pos.make_move(legal[pick % legal.len()]);
        }
    }

    #[test]
    fn fen_round_trips_through_playouts(
        picks in proptest::collection::vec(0usize..4096, 0..30)
    ) {
        let mut pos = Position::new();
        for pick in picks {
            let legal = pos.legal_moves();
            if legal.is_empty() {
                break;
            }
            pos.make_move(legal[pick % legal.len()]);
            let reparsed = Position::from_fen(&pos.to_fen());
            prop_assert_eq!(&reparsed, &pos);
        }
    }
}
