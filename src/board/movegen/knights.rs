//! Knight move generation.

use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::state::Position;
use super::super::types::{Bitboard, Move, MoveList, Piece};
use crate::board::types::pop_lsb;

impl Position {
    pub(crate) fn generate_knight_moves(&self, moves: &mut MoveList) {
        let color = self.side_to_move;
        let own_occ = self.occupancy(color);
        let enemy_occ = self.occupancy(color.opponent());

        let mut knights = self.pieces(Piece::knight(color));
        while !knights.is_empty() {
            let from = pop_lsb(&mut knights);
            let mut targets = Bitboard(KNIGHT_ATTACKS[from.index()]).and(own_occ.not());
            while !targets.is_empty() {
                let to = pop_lsb(&mut targets);
                if enemy_occ.contains(to) {
                    let victim = self.mailbox[to.index()].expect("enemy occupancy has a piece");
                    moves.push(Move::capture(from, to, victim));
                } else {
                    moves.push(Move::quiet(from, to));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knight_moves(fen: &str) -> MoveList {
        let pos = Position::from_fen(fen);
        let mut moves = MoveList::new();
        pos.generate_knight_moves(&mut moves);
        moves
    }

    #[test]
    fn test_startpos_knight_moves() {
        let moves = knight_moves("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        // b1 -> a3, c3; g1 -> f3, h3.
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn test_knight_captures_and_blocks() {
        // Knight on e4 with a friendly pawn on d6 and an enemy pawn on f6.
        let moves = knight_moves("4k3/8/3P1p2/8/4N3/8/8/4K3 w - - 0 1");
        assert_eq!(moves.len(), 7);
        let captures: Vec<_> = moves.iter().filter(|m| m.is_capture()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].captured_piece(), Some(Piece::BlackPawn));
    }
}
