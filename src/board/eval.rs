//! Static evaluation: material plus piece-square tables.

use super::pst::{KING_ENDGAME_TABLE, KING_TABLE, PIECE_TABLES};
use super::state::Position;
use super::types::{Color, Piece, PIECE_VALUES};

impl Position {
    /// Centipawn score from the side-to-move's perspective (positive is
    /// good for the mover).
    ///
    /// White pieces read the shared tables at `sq ^ 56`, black pieces at
    /// `sq`. The king switches to the endgame table exactly when the
    /// opposing queen plane is empty; keying off the queen rather than a
    /// material count keeps test positions deterministic.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let white_king_table = if self.pieces(Piece::BlackQueen).is_empty() {
            &KING_ENDGAME_TABLE
        } else {
            &KING_TABLE
        };
        let black_king_table = if self.pieces(Piece::WhiteQueen).is_empty() {
            &KING_ENDGAME_TABLE
        } else {
            &KING_TABLE
        };

        let mut score = 0;

        for kind in 0..5 {
            let table = PIECE_TABLES[kind];
            for sq in self.planes[kind].iter() {
                score += PIECE_VALUES[kind] + table[sq.index() ^ 56];
            }
            for sq in self.planes[kind + 6].iter() {
                score -= PIECE_VALUES[kind] + table[sq.index()];
            }
        }

        for sq in self.pieces(Piece::WhiteKing).iter() {
            score += PIECE_VALUES[5] + white_king_table[sq.index() ^ 56];
        }
        for sq in self.pieces(Piece::BlackKing).iter() {
            score -= PIECE_VALUES[5] + black_king_table[sq.index()];
        }

        match self.side_to_move {
            Color::White => score,
            Color::Black => -score,
        }
    }
}
