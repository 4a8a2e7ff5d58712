//! Static evaluation.
//!
//! Material plus the per-piece positional tables, summed White-positive.
//! A finished game scores as an immediate mate for the side that delivered
//! it, far outside any reachable material swing.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, EndReason};

pub const CHECKMATE_SCORE: i32 = 100_000;

/// Scores the position from White's perspective: positive favors White.
pub fn evaluate(board: &Board) -> i32 {
    if board.end_reason == Some(EndReason::Checkmate) {
        // The side to move is the one that got mated.
        return match board.side_to_move {
            Color::White => -CHECKMATE_SCORE,
            Color::Black => CHECKMATE_SCORE,
        };
    }

    let mut score = 0;
    for at in Board::all_coords() {
        if let Some(piece) = board.piece_at(at) {
            match piece.color {
                Color::White => score += piece.value(),
                Color::Black => score -= piece.value(),
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::{evaluate, CHECKMATE_SCORE};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Coord, GameMode, PieceKind};

    #[test]
    fn starting_position_is_balanced() {
        let board = Board::new_game(GameMode::TwoPlayer);
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn material_advantage_shows_with_the_right_sign() {
        let mut board = Board::empty(GameMode::TwoPlayer);
        board.put_piece(PieceKind::King, Color::White, Coord::new(7, 4));
        board.put_piece(PieceKind::King, Color::Black, Coord::new(0, 4));
        board.put_piece(PieceKind::Rook, Color::White, Coord::new(4, 4));
        assert!(evaluate(&board) > 0);

        board.put_piece(PieceKind::Queen, Color::Black, Coord::new(3, 3));
        assert!(evaluate(&board) < 0);
    }

    #[test]
    fn checkmate_dominates_any_material_count() {
        let mut board = Board::new_game(GameMode::TwoPlayer);
        board.apply_move(Coord::new(6, 5), Coord::new(5, 5), None).unwrap();
        board.apply_move(Coord::new(1, 4), Coord::new(3, 4), None).unwrap();
        board.apply_move(Coord::new(6, 6), Coord::new(4, 6), None).unwrap();
        board.apply_move(Coord::new(0, 3), Coord::new(4, 7), None).unwrap();

        // White is mated.
        assert_eq!(evaluate(&board), -CHECKMATE_SCORE);
    }
}
