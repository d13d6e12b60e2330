//! Piece and colour types.
//!
//! Pieces carry their colour and use the stable 0-11 codes that index the
//! per-piece board planes; the same codes travel inside the move word.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite colour.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A coloured piece. The discriminants are the plane indices: white pieces
/// 0-5, black pieces 6-11.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Piece {
    WhitePawn = 0,
    WhiteKnight = 1,
    WhiteBishop = 2,
    WhiteRook = 3,
    WhiteQueen = 4,
    WhiteKing = 5,
    BlackPawn = 6,
    BlackKnight = 7,
    BlackBishop = 8,
    BlackRook = 9,
    BlackQueen = 10,
    BlackKing = 11,
}

/// Base material values in centipawns, indexed by piece kind (pawn..king).
pub(crate) const PIECE_VALUES: [i32; 6] = [100, 300, 350, 500, 900, 100_000];

impl Piece {
    /// Plane index of this piece (0-11).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Reconstruct a piece from its plane index.
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Piece> {
        match idx {
            0 => Some(Piece::WhitePawn),
            1 => Some(Piece::WhiteKnight),
            2 => Some(Piece::WhiteBishop),
            3 => Some(Piece::WhiteRook),
            4 => Some(Piece::WhiteQueen),
            5 => Some(Piece::WhiteKing),
            6 => Some(Piece::BlackPawn),
            7 => Some(Piece::BlackKnight),
            8 => Some(Piece::BlackBishop),
            9 => Some(Piece::BlackRook),
            10 => Some(Piece::BlackQueen),
            11 => Some(Piece::BlackKing),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        if (self as usize) < 6 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Kind index 0-5 (pawn, knight, bishop, rook, queen, king), shared by
    /// both colours. Indexes the value and piece-square tables.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> usize {
        self as usize % 6
    }

    #[inline]
    #[must_use]
    pub const fn is_pawn(self) -> bool {
        matches!(self, Piece::WhitePawn | Piece::BlackPawn)
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, Piece::WhiteKing | Piece::BlackKing)
    }

    /// Base material value in centipawns.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        PIECE_VALUES[self.kind()]
    }

    #[must_use]
    pub const fn pawn(color: Color) -> Piece {
        match color {
            Color::White => Piece::WhitePawn,
            Color::Black => Piece::BlackPawn,
        }
    }

    #[must_use]
    pub const fn knight(color: Color) -> Piece {
        match color {
            Color::White => Piece::WhiteKnight,
            Color::Black => Piece::BlackKnight,
        }
    }

    #[must_use]
    pub const fn king(color: Color) -> Piece {
        match color {
            Color::White => Piece::WhiteKing,
            Color::Black => Piece::BlackKing,
        }
    }

    /// The four promotion choices for a colour, in generation order.
    #[must_use]
    pub const fn promotions(color: Color) -> [Piece; 4] {
        match color {
            Color::White => [
                Piece::WhiteKnight,
                Piece::WhiteBishop,
                Piece::WhiteRook,
                Piece::WhiteQueen,
            ],
            Color::Black => [
                Piece::BlackKnight,
                Piece::BlackBishop,
                Piece::BlackRook,
                Piece::BlackQueen,
            ],
        }
    }

    /// Parse a FEN placement character (uppercase = White).
    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let idx = match c.to_ascii_lowercase() {
            'p' => 0,
            'n' => 1,
            'b' => 2,
            'r' => 3,
            'q' => 4,
            'k' => 5,
            _ => return None,
        };
        Piece::from_index(if c.is_ascii_uppercase() { idx } else { idx + 6 })
    }

    /// FEN placement character for this piece (uppercase = White).
    #[inline]
    #[must_use]
    pub const fn to_fen_char(self) -> char {
        let c = self.kind_char();
        if matches!(self.color(), Color::White) {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Lowercase kind character (p, n, b, r, q, k), as used for the UCI
    /// promotion suffix.
    #[inline]
    #[must_use]
    pub const fn kind_char(self) -> char {
        match self.kind() {
            0 => 'p',
            1 => 'n',
            2 => 'b',
            3 => 'r',
            4 => 'q',
            _ => 'k',
        }
    }
}
