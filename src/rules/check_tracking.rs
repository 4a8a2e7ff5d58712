//! Maintains the per-king check flags.
//!
//! Kings cache whether they are attacked and by which squares; the cache is
//! rebuilt from scratch after every committed move and undo, which also
//! picks up discovered checks the moved piece itself does not give.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coord};
use crate::move_generation::check_filter::{attackers_of, threaten_square};

/// Recomputes `in_check` and the threat list for both kings from the
/// current position.
pub fn refresh_check_state(board: &mut Board) {
    for color in [Color::White, Color::Black] {
        let king = match board.king_coord(color) {
            Some(at) => at,
            None => continue,
        };
        let attackers = attackers_of(board, king, color.opposite());
        if let Some(piece) = board.piece_at_mut(king) {
            piece.in_check = !attackers.is_empty();
            piece.threats = attackers;
        }
    }
}

/// Whether `color`'s king is attacked right now, computed from the
/// position rather than the cached flag.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_coord(color) {
        Some(king) => threaten_square(board, king, color.opposite()),
        None => false,
    }
}

/// Squares of the pieces currently checking `color`'s king, from its
/// cached threat list.
pub fn checking_squares(board: &Board, color: Color) -> Vec<Coord> {
    board
        .king_coord(color)
        .and_then(|at| board.piece_at(at))
        .map(|king| king.threats.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{checking_squares, is_in_check, refresh_check_state};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Coord, GameMode, PieceKind};

    #[test]
    fn refresh_marks_and_clears_check() {
        let mut board = Board::empty(GameMode::TwoPlayer);
        board.put_piece(PieceKind::King, Color::White, Coord::new(7, 4));
        board.put_piece(PieceKind::King, Color::Black, Coord::new(0, 0));
        board.put_piece(PieceKind::Rook, Color::Black, Coord::new(3, 4));

        refresh_check_state(&mut board);
        assert!(is_in_check(&board, Color::White));
        assert_eq!(checking_squares(&board, Color::White), vec![Coord::new(3, 4)]);
        assert!(!is_in_check(&board, Color::Black));

        board.take_piece(Coord::new(3, 4));
        refresh_check_state(&mut board);
        assert!(!is_in_check(&board, Color::White));
        assert!(checking_squares(&board, Color::White).is_empty());
    }

    #[test]
    fn discovered_check_is_detected_after_a_commit() {
        let mut board = Board::empty(GameMode::TwoPlayer);
        board.put_piece(PieceKind::King, Color::White, Coord::new(7, 4));
        board.put_piece(PieceKind::King, Color::Black, Coord::new(0, 4));
        // Black rook behind a black knight on the e-file; the knight moving
        // away gives check without itself attacking the king.
        board.put_piece(PieceKind::Rook, Color::Black, Coord::new(1, 4));
        board.put_piece(PieceKind::Knight, Color::Black, Coord::new(4, 4));
        board.side_to_move = Color::Black;
        refresh_check_state(&mut board);
        assert!(!is_in_check(&board, Color::White));

        board
            .apply_move(Coord::new(4, 4), Coord::new(2, 3), None)
            .expect("knight hop is legal");
        assert!(is_in_check(&board, Color::White));
        assert_eq!(checking_squares(&board, Color::White), vec![Coord::new(1, 4)]);
    }
}
