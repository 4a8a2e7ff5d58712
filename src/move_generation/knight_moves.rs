//! Knight move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Coord, PieceKind};
use crate::move_generation::check_filter::KNIGHT_OFFSETS;

pub fn knight_moves(board: &Board, at: Coord) -> Vec<Coord> {
    let knight = match board.piece_at(at) {
        Some(piece) if piece.kind == PieceKind::Knight => piece,
        _ => return Vec::new(),
    };

    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(d_row, d_col)| at.offset(d_row, d_col))
        .filter(|&target| {
            board
                .piece_at(target)
                .map_or(true, |p| p.color != knight.color)
        })
        .collect()
}
