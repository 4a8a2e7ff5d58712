//! Dispatch from piece kind to its generator, plus the legality wrappers.
//!
//! `pseudo_legal_moves` honors occupancy and piece geometry only;
//! `legal_moves` additionally strips everything the self-check filter
//! rejects. Whole-board enumeration walks squares in row-major order, which
//! fixes move ordering for the search and its tie-breaks.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coord, PieceKind};
use crate::move_generation::bishop_moves::bishop_moves;
use crate::move_generation::check_filter::filter_self_check_moves;
use crate::move_generation::king_moves::king_moves;
use crate::move_generation::knight_moves::knight_moves;
use crate::move_generation::pawn_moves::pawn_moves;
use crate::move_generation::queen_moves::queen_moves;
use crate::move_generation::rook_moves::rook_moves;

/// Walks each direction from `at` until the board edge or the first piece,
/// including that piece's square when it belongs to the opponent.
pub(crate) fn slide(
    board: &Board,
    at: Coord,
    mover: Color,
    directions: &[(i32, i32)],
) -> Vec<Coord> {
    let mut moves = Vec::new();
    for &(d_row, d_col) in directions {
        let mut cursor = at;
        while let Some(next) = cursor.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => moves.push(next),
                Some(piece) => {
                    if piece.color != mover {
                        moves.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
    moves
}

/// Destination squares reachable by the piece on `at`, ignoring whether the
/// mover's king would be left attacked.
pub fn pseudo_legal_moves(board: &Board, at: Coord) -> Vec<Coord> {
    match board.piece_at(at).map(|p| p.kind) {
        Some(PieceKind::Pawn) => pawn_moves(board, at),
        Some(PieceKind::Knight) => knight_moves(board, at),
        Some(PieceKind::Bishop) => bishop_moves(board, at),
        Some(PieceKind::Rook) => rook_moves(board, at),
        Some(PieceKind::Queen) => queen_moves(board, at),
        Some(PieceKind::King) => king_moves(board, at),
        None => Vec::new(),
    }
}

/// Fully legal destination squares for the piece on `at`.
pub fn legal_moves(board: &mut Board, at: Coord) -> Vec<Coord> {
    let pseudo = pseudo_legal_moves(board, at);
    filter_self_check_moves(board, at, pseudo)
}

/// All legal `(from, to)` pairs for `color`, source squares in row-major
/// order.
pub fn all_legal_moves(board: &mut Board, color: Color) -> Vec<(Coord, Coord)> {
    let mut moves = Vec::new();
    for from in Board::all_coords() {
        let owned = board.piece_at(from).map_or(false, |p| p.color == color);
        if !owned {
            continue;
        }
        for to in legal_moves(board, from) {
            moves.push((from, to));
        }
    }
    moves
}

/// Whether `color` has at least one legal move. Cheaper than
/// `all_legal_moves` because it stops at the first hit.
pub fn any_legal_move(board: &mut Board, color: Color) -> bool {
    for from in Board::all_coords() {
        let owned = board.piece_at(from).map_or(false, |p| p.color == color);
        if owned && !legal_moves(board, from).is_empty() {
            return true;
        }
    }
    false
}
