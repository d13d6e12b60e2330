//! FEN import/export and UCI move parsing.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::state::Position;
use super::types::{rights_to_fen, Color, Move, Piece, Square, BK_CA, BQ_CA, WK_CA, WQ_CA};

impl Position {
    /// Parse a position from Forsyth-Edwards Notation.
    ///
    /// The placement, side, castling and en-passant fields are required;
    /// the half-move and full-move counters default to 0 and 1 when absent
    /// (UCI drivers sometimes send truncated FENs).
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(FenError::TooFewFields {
                found: fields.len(),
            });
        }

        let mut pos = Position::empty();

        // Placement reads rank 8 down to rank 1, files a through h.
        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i;
            let mut file = 0usize;
            for ch in rank_str.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(FenError::InvalidPiece { ch });
                    }
                    file += skip as usize;
                } else {
                    let piece =
                        Piece::from_fen_char(ch).ok_or(FenError::InvalidPiece { ch })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles { rank: rank + 1 });
                    }
                    pos.set_piece(Square::new(rank, file), piece);
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::TooManyFiles { rank: rank + 1 });
            }
        }

        pos.side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for ch in fields[2].chars() {
            match ch {
                'K' => pos.castling_rights |= WK_CA,
                'Q' => pos.castling_rights |= WQ_CA,
                'k' => pos.castling_rights |= BK_CA,
                'q' => pos.castling_rights |= BQ_CA,
                '-' => {}
                _ => return Err(FenError::InvalidCastling { ch }),
            }
        }

        pos.ep_target = if fields[3] == "-" {
            None
        } else {
            Some(Square::from_str(fields[3]).map_err(|_| FenError::InvalidEnPassant {
                found: fields[3].to_string(),
            })?)
        };

        if let Some(half) = fields.get(4) {
            pos.halfmove_clock = half.parse().map_err(|_| FenError::InvalidCounter {
                found: (*half).to_string(),
            })?;
        }
        if let Some(full) = fields.get(5) {
            pos.fullmove_number = full.parse().map_err(|_| FenError::InvalidCounter {
                found: (*full).to_string(),
            })?;
        }

        pos.recompute_occupancies();
        Ok(pos)
    }

    /// Parse a position from FEN, panicking on malformed input.
    ///
    /// # Panics
    /// Panics if the FEN is invalid; use [`Position::try_from_fen`] where
    /// the input is untrusted.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("invalid FEN string")
    }

    /// Render the position in FEN form.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut empties = 0;
            for file in 0..8 {
                match self.piece_at(Square::new(rank, file)) {
                    Some(piece) => {
                        if empties > 0 {
                            placement.push_str(&empties.to_string());
                            empties = 0;
                        }
                        placement.push(piece.to_fen_char());
                    }
                    None => empties += 1,
                }
            }
            if empties > 0 {
                placement.push_str(&empties.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .ep_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{placement} {side} {} {ep} {} {}",
            rights_to_fen(self.castling_rights),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in UCI long algebraic notation ("e2e4", "e7e8q") by
    /// matching it against the legal moves of this position.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        if !(4..=5).contains(&text.chars().count()) {
            return Err(MoveParseError::InvalidLength {
                len: text.chars().count(),
            });
        }
        let squares_ok = text
            .get(0..2)
            .zip(text.get(2..4))
            .is_some_and(|(from, to)| {
                Square::from_str(from).is_ok() && Square::from_str(to).is_ok()
            });
        if !squares_ok {
            return Err(MoveParseError::InvalidSquare {
                notation: text.to_string(),
            });
        }
        if let Some(promo) = text.chars().nth(4) {
            if !matches!(promo, 'n' | 'b' | 'r' | 'q') {
                return Err(MoveParseError::InvalidPromotion { ch: promo });
            }
        }

        // The wire form uniquely identifies a move within the legal set.
        for mv in &self.legal_moves() {
            if mv.to_string() == text {
                return Ok(*mv);
            }
        }
        Err(MoveParseError::IllegalMove {
            notation: text.to_string(),
        })
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
