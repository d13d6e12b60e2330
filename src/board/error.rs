//! Error types for position and move parsing.

use std::fmt;

/// FEN parsing failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The string has fewer fields than a FEN needs.
    TooFewFields { found: usize },
    /// Unknown character in the placement field.
    InvalidPiece { ch: char },
    /// Placement field does not describe exactly eight ranks.
    InvalidRankCount { found: usize },
    /// A rank describes more than eight files.
    TooManyFiles { rank: usize },
    /// Active colour is neither `w` nor `b`.
    InvalidSideToMove { found: String },
    /// Unknown character in the castling field.
    InvalidCastling { ch: char },
    /// En passant field is neither `-` nor a square.
    InvalidEnPassant { found: String },
    /// Half- or full-move counter is not a number.
    InvalidCounter { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewFields { found } => {
                write!(f, "FEN must have at least 4 fields, found {found}")
            }
            FenError::InvalidPiece { ch } => {
                write!(f, "invalid piece character '{ch}' in FEN placement")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::TooManyFiles { rank } => {
                write!(f, "too many files in FEN rank {rank}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { ch } => {
                write!(f, "invalid castling character '{ch}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en passant square '{found}' in FEN")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "invalid move counter '{found}' in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// UCI move string parsing failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// The string is not 4 or 5 characters long.
    InvalidLength { len: usize },
    /// A square in the string is malformed.
    InvalidSquare { notation: String },
    /// The promotion suffix is not one of n, b, r, q.
    InvalidPromotion { ch: char },
    /// No legal move in the position matches the string.
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "invalid square in move '{notation}'")
            }
            MoveParseError::InvalidPromotion { ch } => {
                write!(f, "invalid promotion piece '{ch}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "move '{notation}' is not legal here")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Square notation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Not a file letter followed by a rank digit.
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
