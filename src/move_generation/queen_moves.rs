//! Queen move generation: the union of rook and bishop rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Coord, PieceKind};
use crate::move_generation::check_filter::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::move_generation::move_generator::slide;

pub fn queen_moves(board: &Board, at: Coord) -> Vec<Coord> {
    let queen = match board.piece_at(at) {
        Some(piece) if piece.kind == PieceKind::Queen => piece,
        _ => return Vec::new(),
    };
    let mut moves = slide(board, at, queen.color, &ROOK_DIRECTIONS);
    moves.extend(slide(board, at, queen.color, &BISHOP_DIRECTIONS));
    moves
}

#[cfg(test)]
mod tests {
    use super::queen_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Coord, GameMode, PieceKind};

    #[test]
    fn open_board_queen_covers_both_piece_patterns() {
        let mut board = Board::empty(GameMode::TwoPlayer);
        board.put_piece(PieceKind::Queen, Color::White, Coord::new(4, 4));
        // 14 rook squares plus 13 bishop squares from e4.
        assert_eq!(queen_moves(&board, Coord::new(4, 4)).len(), 27);
    }
}
