//! Applying a move to a position.

use super::state::Position;
use super::types::{Color, Move, Square, BK_CA, BQ_CA, WK_CA, WQ_CA};

impl Position {
    /// Apply `mv` in place.
    ///
    /// `mv` must be a pseudo-legal move produced by the generator from this
    /// exact position; anything else leaves the position in an undefined
    /// state. There is no undo: callers clone before applying when they need
    /// to keep the parent.
    pub fn make_move(&mut self, mv: Move) {
        let from = mv.from();
        let to = mv.to();
        let mover = self.mailbox[from.index()].expect("move source square is occupied");

        // Lift the mover off its source square.
        self.planes[mover.index()].clear(from);
        self.mailbox[from.index()] = None;

        // A double push leaves an en-passant target behind it; every other
        // move clears the old one. Must happen before the capture handling
        // below ever looks at it.
        self.ep_target = if mv.is_double_push() {
            Some(Square::from_index((from.index() + to.index()) / 2))
        } else {
            None
        };

        if let Some(victim) = mv.captured_piece() {
            if mv.is_en_passant() {
                // The captured pawn is behind the arrival square, not on it.
                let cap_sq = match mover.color() {
                    Color::White => Square::from_index(to.index() - 8),
                    Color::Black => Square::from_index(to.index() + 8),
                };
                self.planes[victim.index()].clear(cap_sq);
                self.mailbox[cap_sq.index()] = None;
            } else {
                self.planes[victim.index()].clear(to);
            }
        }

        if mv.is_castling() {
            // The move word only carries the king hop; the rook follows.
            let (rook_from, rook_to) = match to {
                Square::G1 => (Square::H1, Square::F1),
                Square::C1 => (Square::A1, Square::D1),
                Square::G8 => (Square::H8, Square::F8),
                _ => (Square::A8, Square::D8),
            };
            let rook = self.mailbox[rook_from.index()].expect("castling rook present");
            self.planes[rook.index()].clear(rook_from);
            self.planes[rook.index()].set(rook_to);
            self.mailbox[rook_from.index()] = None;
            self.mailbox[rook_to.index()] = Some(rook);
        }

        // Castling rights die with the king, with a rook leaving its corner,
        // or with a rook captured on its corner.
        if mover.is_king() {
            match mover.color() {
                Color::White => self.castling_rights &= !(WK_CA | WQ_CA),
                Color::Black => self.castling_rights &= !(BK_CA | BQ_CA),
            }
        }
        match from {
            Square::H1 => self.castling_rights &= !WK_CA,
            Square::A1 => self.castling_rights &= !WQ_CA,
            Square::H8 => self.castling_rights &= !BK_CA,
            Square::A8 => self.castling_rights &= !BQ_CA,
            _ => {}
        }
        if mv.is_capture() {
            match to {
                Square::H1 => self.castling_rights &= !WK_CA,
                Square::A1 => self.castling_rights &= !WQ_CA,
                Square::H8 => self.castling_rights &= !BK_CA,
                Square::A8 => self.castling_rights &= !BQ_CA,
                _ => {}
            }
        }

        // Land the mover, transformed if promoting.
        let placed = mv.promotion_piece().unwrap_or(mover);
        self.planes[placed.index()].set(to);
        self.mailbox[to.index()] = Some(placed);

        if mover.is_pawn() || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.opponent();

        self.recompute_occupancies();
    }
}
