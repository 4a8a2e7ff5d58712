//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type across the crate. Recoverable
//! caller mistakes (illegal move requests, missing promotion choices) are
//! ordinary variants; `InconsistentState` marks invariant violations that
//! indicate a bug rather than bad input, since search correctness depends
//! on the board never reaching such a state.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Coord;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The caller asked for a move whose destination is not in the current
    /// legal-move list. The board is left untouched.
    IllegalMoveRequested { from: Coord, to: Coord },
    /// A pawn reached the far rank and no promotion target was supplied.
    /// The commit is not started; the caller must re-invoke with a choice.
    PromotionPending { from: Coord, to: Coord },
    /// The supplied promotion target is not one of Queen/Knight/Bishop/Rook.
    InvalidPromotion,
    /// An engine invariant was violated (missing king, coordinate mismatch).
    /// Not expected to occur through correct use of the API.
    InconsistentState(String),
    /// An algebraic square string could not be parsed.
    InvalidAlgebraic(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::IllegalMoveRequested { from, to } => {
                write!(f, "illegal move requested from {from} to {to}")
            }
            ChessError::PromotionPending { from, to } => {
                write!(f, "promotion choice required for pawn move {from} to {to}")
            }
            ChessError::InvalidPromotion => {
                write!(f, "promotion target must be a queen, knight, bishop or rook")
            }
            ChessError::InconsistentState(msg) => write!(f, "inconsistent board state: {msg}"),
            ChessError::InvalidAlgebraic(text) => {
                write!(f, "invalid algebraic square: {text:?}")
            }
        }
    }
}

impl Error for ChessError {}
