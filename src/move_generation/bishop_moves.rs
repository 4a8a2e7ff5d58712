//! Bishop move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Coord, PieceKind};
use crate::move_generation::check_filter::BISHOP_DIRECTIONS;
use crate::move_generation::move_generator::slide;

pub fn bishop_moves(board: &Board, at: Coord) -> Vec<Coord> {
    match board.piece_at(at) {
        Some(piece) if piece.kind == PieceKind::Bishop => {
            slide(board, at, piece.color, &BISHOP_DIRECTIONS)
        }
        _ => Vec::new(),
    }
}
