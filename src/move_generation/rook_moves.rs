//! Rook move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Coord, PieceKind};
use crate::move_generation::check_filter::ROOK_DIRECTIONS;
use crate::move_generation::move_generator::slide;

pub fn rook_moves(board: &Board, at: Coord) -> Vec<Coord> {
    match board.piece_at(at) {
        Some(piece) if piece.kind == PieceKind::Rook => {
            slide(board, at, piece.color, &ROOK_DIRECTIONS)
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::rook_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Coord, GameMode, PieceKind};

    #[test]
    fn open_board_rook_covers_fourteen_squares() {
        let mut board = Board::empty(GameMode::TwoPlayer);
        board.put_piece(PieceKind::Rook, Color::White, Coord::new(3, 3));
        assert_eq!(rook_moves(&board, Coord::new(3, 3)).len(), 14);
    }

    #[test]
    fn rook_in_starting_position_is_boxed_in() {
        let board = Board::new_game(GameMode::TwoPlayer);
        assert!(rook_moves(&board, Coord::new(7, 0)).is_empty());
    }
}
