//! Pawn move generation.
//!
//! Pawns are the only piece whose direction depends on ownership: White
//! travels toward row 0, Black toward row 7. En passant is offered only in
//! two-player games and never inside a lookahead probe, so the search does
//! not explore captures it could not unwind.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Coord, GameMode, PieceKind};

pub fn pawn_moves(board: &Board, at: Coord) -> Vec<Coord> {
    let pawn = match board.piece_at(at) {
        Some(piece) if piece.kind == PieceKind::Pawn => piece,
        _ => return Vec::new(),
    };
    let dir: i32 = if pawn.on_opposite_side { 1 } else { -1 };
    let mut moves = Vec::new();

    if let Some(step) = at.offset(dir, 0) {
        if !board.square(step).contains_piece() {
            moves.push(step);
            if !pawn.has_moved {
                if let Some(double) = at.offset(2 * dir, 0) {
                    if !board.square(double).contains_piece() {
                        moves.push(double);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(target) = at.offset(dir, d_col) {
            if board
                .piece_at(target)
                .map_or(false, |p| p.color != pawn.color)
            {
                moves.push(target);
            }
        }
    }

    if board.mode == GameMode::TwoPlayer && !board.lookahead {
        for d_col in [-1, 1] {
            let beside = match at.offset(0, d_col) {
                Some(beside) => beside,
                None => continue,
            };
            let vulnerable = board.piece_at(beside).map_or(false, |p| {
                p.kind == PieceKind::Pawn && p.color != pawn.color && p.en_passant_possible
            });
            if vulnerable {
                if let Some(target) = at.offset(dir, d_col) {
                    if !board.square(target).contains_piece() {
                        moves.push(target);
                    }
                }
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::pawn_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Coord, GameMode, PieceKind};

    #[test]
    fn unmoved_pawn_has_single_and_double_step() {
        let board = Board::new_game(GameMode::TwoPlayer);
        let moves = pawn_moves(&board, Coord::new(6, 4));
        assert_eq!(moves, vec![Coord::new(5, 4), Coord::new(4, 4)]);
    }

    #[test]
    fn blocked_pawn_cannot_advance_or_jump() {
        let mut board = Board::new_game(GameMode::TwoPlayer);
        board.put_piece(PieceKind::Knight, Color::Black, Coord::new(5, 4));
        assert!(pawn_moves(&board, Coord::new(6, 4)).is_empty());

        // A blocker on the double-step square still allows the single step.
        let mut board = Board::new_game(GameMode::TwoPlayer);
        board.put_piece(PieceKind::Knight, Color::Black, Coord::new(4, 4));
        assert_eq!(pawn_moves(&board, Coord::new(6, 4)), vec![Coord::new(5, 4)]);
    }

    #[test]
    fn pawn_captures_diagonally_not_straight() {
        let mut board = Board::new_game(GameMode::TwoPlayer);
        board.put_piece(PieceKind::Knight, Color::Black, Coord::new(5, 3));
        board.put_piece(PieceKind::Knight, Color::Black, Coord::new(5, 4));
        let moves = pawn_moves(&board, Coord::new(6, 4));
        assert_eq!(moves, vec![Coord::new(5, 3)]);
    }

    #[test]
    fn en_passant_appears_only_inside_its_window() {
        let mut board = Board::new_game(GameMode::TwoPlayer);
        // White e2-e4, black a7-a6, white e4-e5, black d7-d5.
        board.apply_move(Coord::new(6, 4), Coord::new(4, 4), None).unwrap();
        board.apply_move(Coord::new(1, 0), Coord::new(2, 0), None).unwrap();
        board.apply_move(Coord::new(4, 4), Coord::new(3, 4), None).unwrap();
        board.apply_move(Coord::new(1, 3), Coord::new(3, 3), None).unwrap();

        let moves = pawn_moves(&board, Coord::new(3, 4));
        assert!(moves.contains(&Coord::new(2, 3)), "exd6 en passant offered");

        // An unrelated move closes the window.
        board.apply_move(Coord::new(7, 6), Coord::new(5, 5), None).unwrap();
        board.apply_move(Coord::new(1, 7), Coord::new(2, 7), None).unwrap();
        let moves = pawn_moves(&board, Coord::new(3, 4));
        assert!(!moves.contains(&Coord::new(2, 3)), "window closed");
    }

    #[test]
    fn en_passant_is_withheld_during_lookahead() {
        let mut board = Board::new_game(GameMode::TwoPlayer);
        board.apply_move(Coord::new(6, 4), Coord::new(4, 4), None).unwrap();
        board.apply_move(Coord::new(1, 0), Coord::new(2, 0), None).unwrap();
        board.apply_move(Coord::new(4, 4), Coord::new(3, 4), None).unwrap();
        board.apply_move(Coord::new(1, 3), Coord::new(3, 3), None).unwrap();

        board.probe(Coord::new(6, 0), Coord::new(5, 0), |b| {
            let moves = pawn_moves(b, Coord::new(3, 4));
            assert!(!moves.contains(&Coord::new(2, 3)));
        });
    }
}
