//! Sliding piece move generation: bishops, rooks and queens.
//!
//! Rays are walked square by square with an edge-wrap guard; no magic
//! bitboards.

use super::super::state::Position;
use super::super::types::{Move, MoveList, Piece, Square};
use super::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::board::types::pop_lsb;

impl Position {
    /// Generate moves for every slider of `kind` (bishop, rook or queen
    /// kind index) belonging to the side to move.
    pub(crate) fn generate_slider_moves(&self, kind: usize, moves: &mut MoveList) {
        let color = self.side_to_move;
        let piece = Piece::from_index(color.index() * 6 + kind).expect("slider kind");
        let own_occ = self.occupancy(color);
        let enemy_occ = self.occupancy(color.opponent());

        let directions: &[(isize, isize)] = match kind {
            k if k == Piece::WhiteBishop.kind() => &BISHOP_DIRECTIONS,
            k if k == Piece::WhiteRook.kind() => &ROOK_DIRECTIONS,
            _ => &[
                ROOK_DIRECTIONS[0],
                ROOK_DIRECTIONS[1],
                ROOK_DIRECTIONS[2],
                ROOK_DIRECTIONS[3],
                BISHOP_DIRECTIONS[0],
                BISHOP_DIRECTIONS[1],
                BISHOP_DIRECTIONS[2],
                BISHOP_DIRECTIONS[3],
            ],
        };

        let mut sliders = self.pieces(piece);
        while !sliders.is_empty() {
            let from = pop_lsb(&mut sliders);
            for &(offset, file_delta) in directions {
                let mut cur = from.index() as isize;
                loop {
                    // Stop before stepping off the a- or h-file edge.
                    let file = cur % 8;
                    if (file_delta > 0 && file == 7) || (file_delta < 0 && file == 0) {
                        break;
                    }
                    cur += offset;
                    if !(0..64).contains(&cur) {
                        break;
                    }
                    let to = Square::from_index(cur as usize);
                    if own_occ.contains(to) {
                        break;
                    }
                    if enemy_occ.contains(to) {
                        let victim =
                            self.mailbox[to.index()].expect("enemy occupancy has a piece");
                        moves.push(Move::capture(from, to, victim));
                        break;
                    }
                    moves.push(Move::quiet(from, to));
                }
            }
        }
    }
}
