//! Square threat detection and the self-check legality filter.
//!
//! `attackers_of` answers "which pieces of this color attack this square"
//! by scanning outward from the square itself: knight jumps, slider rays,
//! pawn capture squares and king adjacency. The legality filter probes each
//! candidate move and drops any that leave the mover's own king attacked,
//! which covers pins, moving into check and failing to resolve a check with
//! one pass.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coord, PieceKind};

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Squares holding pieces of `by` that attack `target` right now. En
/// passant capture rights are not threats against any square and do not
/// appear here.
pub fn attackers_of(board: &Board, target: Coord, by: Color) -> Vec<Coord> {
    let mut attackers = Vec::new();

    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Some(at) = target.offset(d_row, d_col) {
            if holds(board, at, by, PieceKind::Knight) {
                attackers.push(at);
            }
        }
    }

    for (d_row, d_col) in BISHOP_DIRECTIONS {
        if let Some(at) = first_piece_along(board, target, d_row, d_col) {
            if holds(board, at, by, PieceKind::Bishop) || holds(board, at, by, PieceKind::Queen) {
                attackers.push(at);
            }
        }
    }

    for (d_row, d_col) in ROOK_DIRECTIONS {
        if let Some(at) = first_piece_along(board, target, d_row, d_col) {
            if holds(board, at, by, PieceKind::Rook) || holds(board, at, by, PieceKind::Queen) {
                attackers.push(at);
            }
        }
    }

    // A pawn attacks the two squares diagonally ahead of it, so the
    // attacker sits one row behind the target relative to its direction
    // of travel.
    let pawn_dir: i32 = match by {
        Color::White => -1,
        Color::Black => 1,
    };
    for d_col in [-1, 1] {
        if let Some(at) = target.offset(-pawn_dir, d_col) {
            if holds(board, at, by, PieceKind::Pawn) {
                attackers.push(at);
            }
        }
    }

    for (d_row, d_col) in KING_OFFSETS {
        if let Some(at) = target.offset(d_row, d_col) {
            if holds(board, at, by, PieceKind::King) {
                attackers.push(at);
            }
        }
    }

    attackers
}

/// Whether any piece of `by` attacks `target`.
#[inline]
pub fn threaten_square(board: &Board, target: Coord, by: Color) -> bool {
    !attackers_of(board, target, by).is_empty()
}

#[inline]
fn holds(board: &Board, at: Coord, color: Color, kind: PieceKind) -> bool {
    board
        .piece_at(at)
        .map_or(false, |p| p.color == color && p.kind == kind)
}

/// Walks a ray from `from` (exclusive) and returns the first occupied
/// square, if any.
fn first_piece_along(board: &Board, from: Coord, d_row: i32, d_col: i32) -> Option<Coord> {
    let mut at = from;
    while let Some(next) = at.offset(d_row, d_col) {
        if board.square(next).contains_piece() {
            return Some(next);
        }
        at = next;
    }
    None
}

/// Retains only destinations that leave the mover's own king unattacked.
/// Each survivor is verified by probing the move on the live board and
/// asking whether the king's square is threatened afterward.
pub fn filter_self_check_moves(board: &mut Board, from: Coord, moves: Vec<Coord>) -> Vec<Coord> {
    let color = match board.piece_at(from) {
        Some(piece) => piece.color,
        None => return Vec::new(),
    };
    let enemy = color.opposite();

    moves
        .into_iter()
        .filter(|&to| {
            board.probe(from, to, |b| match b.king_coord(color) {
                Some(king) => !threaten_square(b, king, enemy),
                // Kingless positions (analysis setups) have nothing to pin.
                None => true,
            })
        })
        .collect()
}
