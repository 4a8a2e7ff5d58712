//! Piece representation and positional valuation.
//!
//! A `Piece` is a flat struct dispatched on a closed `PieceKind` enum so
//! move generation and scoring stay exhaustiveness-checked. The pawn and
//! king auxiliary fields (`en_passant_possible`, `in_check`, `threats`) are
//! meaningful only for their kinds and stay at their defaults elsewhere.

use crate::game_state::chess_types::{Color, Coord, PieceKind};

/// Base material values. The king's value only matters for evaluation
/// symmetry; kings are never captured.
pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 350;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 1000;
pub const KING_VALUE: i32 = 32676;

/// Positional bonus tables indexed `[row][col]` from White's perspective
/// (row 0 is the far rank White promotes on). Black reads them mirrored
/// vertically.
const PAWN_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 27, 27, 10, 5, 5],
    [0, 0, 0, 25, 25, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -25, -25, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -20, -20, -30, -40, -50],
    [-50, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -50],
    [-50, 5, 5, 10, 10, 5, 5, -50],
    [-50, 0, 40, 40, 40, 10, 0, -50],
    [-50, 10, 40, 40, 40, 40, 10, -50],
    [-50, 5, 0, 0, 0, 0, 5, -50],
    [-50, -10, -40, -10, -10, -40, -10, -50],
];

const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -40, -10, -10, -40, -10, -20],
];

const ROOK_TABLE: [[i32; 8]; 8] = [
    [20, 20, 20, 20, 20, 20, 20, 20],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, -20, -20, -20, -20, -20, -20, -20],
];

const QUEEN_TABLE: [[i32; 8]; 8] = [
    [-40, -20, -20, -20, -20, -20, -20, -40],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [-40, 0, 0, 0, 0, 0, 0, -40],
];

const KING_TABLE: [[i32; 8]; 8] = [
    [-100, -100, -100, -100, -100, -100, -100, -100],
    [-100, -100, -100, -100, -100, -100, -100, -100],
    [-100, -100, -100, -100, -100, -100, -100, -100],
    [-50, -50, -50, -50, -50, -50, -50, -50],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [30, 25, 0, 0, 0, 0, 20, 20],
    [20, 10, 60, 10, 10, 0, 60, 20],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub row: usize,
    pub col: usize,
    pub original_row: usize,
    pub original_col: usize,
    pub has_moved: bool,
    /// Pawn only: travels toward increasing rows when set (Black's side).
    pub on_opposite_side: bool,
    /// Pawn only: set immediately after a first double step, cleared once
    /// any other piece commits a move.
    pub en_passant_possible: bool,
    /// King only.
    pub in_check: bool,
    /// King only: squares whose occupants currently check this king.
    pub threats: Vec<Coord>,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, at: Coord) -> Self {
        Self {
            kind,
            color,
            row: at.row,
            col: at.col,
            original_row: at.row,
            original_col: at.col,
            has_moved: false,
            on_opposite_side: kind == PieceKind::Pawn && color == Color::Black,
            en_passant_possible: false,
            in_check: false,
            threats: Vec::new(),
        }
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    #[inline]
    pub fn is_same_color(&self, other: &Piece) -> bool {
        self.color == other.color
    }

    /// The rank this pawn promotes on.
    #[inline]
    pub fn promotion_row(&self) -> usize {
        if self.on_opposite_side {
            7
        } else {
            0
        }
    }

    /// Updates this piece's coordinates after placement, maintaining the
    /// `has_moved` and en-passant bookkeeping the rest of the engine relies
    /// on. During lookahead probes non-pawn `has_moved` flags are left
    /// untouched so make/unmake cannot permanently alter castling rights;
    /// pawns instead re-derive `has_moved` from their original square, which
    /// makes their flag self-restoring when a probe is unwound.
    pub fn set_position(&mut self, at: Coord, lookahead: bool) {
        if self.kind == PieceKind::Pawn {
            if !self.has_moved {
                let double_step_row = if self.on_opposite_side { 3 } else { 4 };
                self.en_passant_possible = at.row == double_step_row;
                if at.row != self.original_row || at.col != self.original_col {
                    self.has_moved = true;
                }
            } else if at.row == self.original_row && at.col == self.original_col {
                self.has_moved = false;
            }
        } else if (at.row != self.original_row || at.col != self.original_col) && !lookahead {
            self.has_moved = true;
        }

        self.row = at.row;
        self.col = at.col;
    }

    /// Material value plus the positional bonus at the current square,
    /// mirrored vertically for Black.
    pub fn value(&self) -> i32 {
        let (base, table) = match self.kind {
            PieceKind::Pawn => (PAWN_VALUE, &PAWN_TABLE),
            PieceKind::Knight => (KNIGHT_VALUE, &KNIGHT_TABLE),
            PieceKind::Bishop => (BISHOP_VALUE, &BISHOP_TABLE),
            PieceKind::Rook => (ROOK_VALUE, &ROOK_TABLE),
            PieceKind::Queen => (QUEEN_VALUE, &QUEEN_TABLE),
            PieceKind::King => (KING_VALUE, &KING_TABLE),
        };

        let row = match self.color {
            Color::White => self.row,
            Color::Black => 7 - self.row,
        };

        base + table[row][self.col]
    }
}
