//! Pawn move generation.

use super::super::state::Position;
use super::super::types::{Color, Move, MoveList, Piece};
use crate::board::types::{pop_lsb, Square};

impl Position {
    /// Pushes, double pushes, diagonal captures, en passant and promotions
    /// for every pawn of the side to move.
    pub(crate) fn generate_pawn_moves(&self, moves: &mut MoveList) {
        let color = self.side_to_move;
        let fwd: isize = match color {
            Color::White => 8,
            Color::Black => -8,
        };
        let (start_rank, promo_rank) = match color {
            Color::White => (1, 7),
            Color::Black => (6, 0),
        };
        let enemy_occ = self.occupancy(color.opponent());

        let mut pawns = self.pieces(Piece::pawn(color));
        while !pawns.is_empty() {
            let from = pop_lsb(&mut pawns);
            let from_idx = from.index() as isize;

            // Single push, promoting on the last rank; double push from the
            // initial rank when both squares ahead are clear.
            let push_idx = from_idx + fwd;
            if (0..64).contains(&push_idx) {
                let to = Square::from_index(push_idx as usize);
                if self.is_empty_square(to) {
                    if to.rank() == promo_rank {
                        for promo in Piece::promotions(color) {
                            moves.push(Move::promotion(from, to, promo));
                        }
                    } else {
                        moves.push(Move::quiet(from, to));
                        if from.rank() == start_rank {
                            let double = Square::from_index((from_idx + 2 * fwd) as usize);
                            if self.is_empty_square(double) {
                                moves.push(Move::double_push(from, double));
                            }
                        }
                    }
                }
            }

            // Diagonal captures, guarded against file wrap.
            for file_delta in [-1isize, 1] {
                if (file_delta < 0 && from.file() == 0) || (file_delta > 0 && from.file() == 7) {
                    continue;
                }
                let cap_idx = from_idx + fwd + file_delta;
                if !(0..64).contains(&cap_idx) {
                    continue;
                }
                let to = Square::from_index(cap_idx as usize);
                if enemy_occ.contains(to) {
                    let victim = self.mailbox[to.index()].expect("enemy occupancy has a piece");
                    if to.rank() == promo_rank {
                        for promo in Piece::promotions(color) {
                            moves.push(Move::promotion_capture(from, to, promo, victim));
                        }
                    } else {
                        moves.push(Move::capture(from, to, victim));
                    }
                } else if self.ep_target == Some(to) {
                    moves.push(Move::en_passant(from, to, Piece::pawn(color.opponent())));
                }
            }
        }
    }
}
