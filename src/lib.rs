//! A small UCI chess engine built on bitboards.
//!
//! The `board` module holds the position representation, move generation,
//! evaluation and search; the `uci` module speaks the text protocol on
//! stdin/stdout.

pub mod board;
pub mod uci;
