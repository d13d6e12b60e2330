//! Pseudo-legal move generation and the square-attacked query.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};
use super::state::Position;
use super::types::{Color, MoveList, Piece, Square};

/// Ray directions as (square offset, file delta). The file delta drives the
/// edge-wrap guard: a walk stops before stepping east off the h-file or west
/// off the a-file.
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(8, 0), (1, 1), (-8, 0), (-1, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(9, 1), (-7, 1), (-9, -1), (7, -1)];

impl Position {
    /// Generate every move that respects piece geometry and occupancy.
    ///
    /// Moves that leave the mover's own king attacked are *not* filtered
    /// here; callers clone, apply and test king safety. For each promoting
    /// pawn the four promotion moves are emitted in the order N, B, R, Q.
    #[must_use]
    pub fn pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_pawn_moves(&mut moves);
        self.generate_knight_moves(&mut moves);
        self.generate_slider_moves(Piece::WhiteBishop.kind(), &mut moves);
        self.generate_slider_moves(Piece::WhiteRook.kind(), &mut moves);
        self.generate_slider_moves(Piece::WhiteQueen.kind(), &mut moves);
        self.generate_king_moves(&mut moves);
        moves
    }

    /// The legal moves of this position: pseudo-legal moves that leave the
    /// mover's king unattacked.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mover = self.side_to_move;
        let mut legal = MoveList::new();
        for mv in &self.pseudo_moves() {
            let mut child = self.clone();
            child.make_move(*mv);
            if !child.king_attacked(mover) {
                legal.push(*mv);
            }
        }
        legal
    }

    /// True if any piece of `by` attacks `sq`.
    ///
    /// Leapers are answered from the precomputed tables (pawns by reverse
    /// lookup: the squares a pawn of the *defending* colour would attack
    /// from `sq` are exactly the squares an attacking pawn must stand on).
    /// Sliders walk the eight rays from `sq` until blocked.
    #[must_use]
    pub fn attacked(&self, sq: Square, by: Color) -> bool {
        let idx = sq.index();

        let pawn_sources = PAWN_ATTACKS[by.opponent().index()][idx];
        if self.pieces(Piece::pawn(by)).0 & pawn_sources != 0 {
            return true;
        }

        if self.pieces(Piece::knight(by)).0 & KNIGHT_ATTACKS[idx] != 0 {
            return true;
        }

        if self.pieces(Piece::king(by)).0 & KING_ATTACKS[idx] != 0 {
            return true;
        }

        let (rooks, bishops, queens) = match by {
            Color::White => (
                self.pieces(Piece::WhiteRook),
                self.pieces(Piece::WhiteBishop),
                self.pieces(Piece::WhiteQueen),
            ),
            Color::Black => (
                self.pieces(Piece::BlackRook),
                self.pieces(Piece::BlackBishop),
                self.pieces(Piece::BlackQueen),
            ),
        };
        let rook_like = rooks.or(queens);
        let bishop_like = bishops.or(queens);

        self.ray_hits(sq, &ROOK_DIRECTIONS, rook_like)
            || self.ray_hits(sq, &BISHOP_DIRECTIONS, bishop_like)
    }

    /// Walk each ray from `sq`; true if the first occupied square on any of
    /// them holds a piece of `attackers`.
    fn ray_hits(
        &self,
        sq: Square,
        directions: &[(isize, isize)],
        attackers: super::types::Bitboard,
    ) -> bool {
        for &(offset, file_delta) in directions {
            let mut cur = sq.index() as isize;
            loop {
                let file = cur % 8;
                if (file_delta > 0 && file == 7) || (file_delta < 0 && file == 0) {
                    break;
                }
                cur += offset;
                if !(0..64).contains(&cur) {
                    break;
                }
                if self.mailbox[cur as usize].is_some() {
                    if attackers.has_bit(cur as usize) {
                        return true;
                    }
                    break;
                }
            }
        }
        false
    }

    /// True if `color`'s king is currently attacked.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.attacked(self.king_square(color), color.opponent())
    }

    /// King-safety test for a freshly applied move: `mover` made the move,
    /// the side to move has already flipped.
    #[inline]
    pub(crate) fn king_attacked(&self, mover: Color) -> bool {
        self.attacked(self.king_square(mover), self.side_to_move)
    }
}
