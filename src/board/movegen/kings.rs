//! King move generation, castling included.

use super::super::attack_tables::KING_ATTACKS;
use super::super::state::Position;
use super::super::types::{Bitboard, Color, Move, MoveList, Piece, Square};
use crate::board::types::{pop_lsb, BK_CA, BQ_CA, WK_CA, WQ_CA};

impl Position {
    pub(crate) fn generate_king_moves(&self, moves: &mut MoveList) {
        let color = self.side_to_move;
        let own_occ = self.occupancy(color);
        let enemy_occ = self.occupancy(color.opponent());

        let from = self.king_square(color);
        let mut targets = Bitboard(KING_ATTACKS[from.index()]).and(own_occ.not());
        while !targets.is_empty() {
            let to = pop_lsb(&mut targets);
            if enemy_occ.contains(to) {
                let victim = self.mailbox[to.index()].expect("enemy occupancy has a piece");
                moves.push(Move::capture(from, to, victim));
            } else {
                moves.push(Move::quiet(from, to));
            }
        }

        self.generate_castling_moves(from, moves);
    }

    /// Castling: the right must still be held, the squares between king and
    /// rook empty, the rook on its corner, and the king's origin, crossing
    /// and destination squares free of enemy attack. Only the king hop is
    /// encoded; applying the move replays the rook.
    fn generate_castling_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let enemy = color.opponent();
        let rook = match color {
            Color::White => Piece::WhiteRook,
            Color::Black => Piece::BlackRook,
        };
        let (kingside, queenside, home, rook_k, rook_q) = match color {
            Color::White => (WK_CA, WQ_CA, Square::E1, Square::H1, Square::A1),
            Color::Black => (BK_CA, BQ_CA, Square::E8, Square::H8, Square::A8),
        };
        if from != home {
            return;
        }
        let rank = home.rank();

        if self.castling_rights & kingside != 0
            && self.is_empty_square(Square::new(rank, 5))
            && self.is_empty_square(Square::new(rank, 6))
            && self.pieces(rook).contains(rook_k)
            && !self.attacked(home, enemy)
            && !self.attacked(Square::new(rank, 5), enemy)
            && !self.attacked(Square::new(rank, 6), enemy)
        {
            moves.push(Move::castle(home, Square::new(rank, 6)));
        }

        if self.castling_rights & queenside != 0
            && self.is_empty_square(Square::new(rank, 1))
            && self.is_empty_square(Square::new(rank, 2))
            && self.is_empty_square(Square::new(rank, 3))
            && self.pieces(rook).contains(rook_q)
            && !self.attacked(home, enemy)
            && !self.attacked(Square::new(rank, 3), enemy)
            && !self.attacked(Square::new(rank, 2), enemy)
        {
            moves.push(Move::castle(home, Square::new(rank, 2)));
        }
    }
}
