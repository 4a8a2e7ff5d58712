//! Core value types shared across the engine.
//!
//! Everything here is small and `Copy`; the heavier `Piece`, `Square` and
//! `Board` structures live in their own modules.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::piece::Piece;

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

/// Piece kind. Color is carried separately on `Piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Board coordinate. Row 0 is Black's back rank; White starts on rows 6-7.
/// A square's coordinate never changes after board construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offsets this coordinate, returning `None` when the result would
    /// leave the 8x8 grid.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        let row = self.row as i32 + d_row;
        let col = self.col as i32 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Algebraic form: row 0 is rank 8.
        let file = char::from(b'a' + self.col as u8);
        let rank = 8 - self.row;
        write!(f, "{file}{rank}")
    }
}

/// How the current game is being played. En passant generation and the
/// undo protocol both consult this explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans alternate; en passant is generated normally.
    TwoPlayer,
    /// One human against the engine; undo removes two half-moves at once.
    VsComputer { human_color: Color },
}

/// Why a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Checkmate,
    Stalemate,
    DrawFiftyMove,
    DrawInsufficientMaterial,
    DrawDeclared,
}

#[cfg(test)]
mod tests {
    use super::Coord;

    #[test]
    fn coord_offset_rejects_off_board_targets() {
        let corner = Coord::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Coord::new(1, 1)));
    }

    #[test]
    fn coord_displays_in_algebraic_notation() {
        assert_eq!(Coord::new(7, 0).to_string(), "a1");
        assert_eq!(Coord::new(0, 7).to_string(), "h8");
        assert_eq!(Coord::new(4, 4).to_string(), "e4");
    }
}
