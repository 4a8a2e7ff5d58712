//! King move generation, including the castling scan.
//!
//! Plain king steps are generated pseudo-legally; the self-check filter is
//! what keeps the king off attacked squares and away from the enemy king.
//! Castling is vetted here because its legality depends on squares the king
//! passes through, not just the one it lands on: the king may not castle
//! out of, through or into check. One asymmetry is deliberate: on the queen
//! side the b-file square is crossed only by the rook, so an attack there
//! does not forbid castling.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Coord, PieceKind};
use crate::game_state::piece::Piece;
use crate::move_generation::check_filter::{threaten_square, KING_OFFSETS};

pub fn king_moves(board: &Board, at: Coord) -> Vec<Coord> {
    let king = match board.piece_at(at) {
        Some(piece) if piece.kind == PieceKind::King => piece.clone(),
        _ => return Vec::new(),
    };

    let mut moves: Vec<Coord> = KING_OFFSETS
        .iter()
        .filter_map(|&(d_row, d_col)| at.offset(d_row, d_col))
        .filter(|&target| {
            board
                .piece_at(target)
                .map_or(true, |p| p.color != king.color)
        })
        .collect();

    moves.extend(castling_targets(board, at, &king));
    moves
}

fn castling_targets(board: &Board, at: Coord, king: &Piece) -> Vec<Coord> {
    let mut targets = Vec::new();
    if king.has_moved || king.in_check {
        return targets;
    }
    let enemy = king.color.opposite();
    let row = at.row;

    // King side: both crossed squares must be empty and unattacked.
    let mut clear = 0;
    for col in (at.col + 1)..7 {
        let square = Coord::new(row, col);
        if board.square(square).contains_piece() || threaten_square(board, square, enemy) {
            clear = 0;
            break;
        }
        clear += 1;
    }
    if clear >= 2 && unmoved_rook_at(board, Coord::new(row, 7), king) {
        targets.push(Coord::new(row, 6));
    }

    // Queen side: three empty squares; the square next to the rook may be
    // attacked since only the rook crosses it.
    let mut clear = 0;
    for col in (1..at.col).rev() {
        let square = Coord::new(row, col);
        let threatened = threaten_square(board, square, enemy);
        if board.square(square).contains_piece() || (threatened && clear < 2) {
            clear = 0;
            break;
        }
        clear += 1;
    }
    if clear >= 3 && unmoved_rook_at(board, Coord::new(row, 0), king) {
        targets.push(Coord::new(row, 2));
    }

    targets
}

fn unmoved_rook_at(board: &Board, at: Coord, king: &Piece) -> bool {
    board.piece_at(at).map_or(false, |p| {
        p.kind == PieceKind::Rook && p.color == king.color && !p.has_moved
    })
}

#[cfg(test)]
mod tests {
    use super::king_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Coord, GameMode, PieceKind};

    const E1: Coord = Coord::new(7, 4);
    const G1: Coord = Coord::new(7, 6);
    const C1: Coord = Coord::new(7, 2);

    fn castling_board() -> Board {
        let mut board = Board::empty(GameMode::TwoPlayer);
        board.put_piece(PieceKind::King, Color::White, E1);
        board.put_piece(PieceKind::Rook, Color::White, Coord::new(7, 0));
        board.put_piece(PieceKind::Rook, Color::White, Coord::new(7, 7));
        board.put_piece(PieceKind::King, Color::Black, Coord::new(0, 4));
        board
    }

    #[test]
    fn both_castling_sides_offered_on_an_open_rank() {
        let board = castling_board();
        let moves = king_moves(&board, E1);
        assert!(moves.contains(&G1));
        assert!(moves.contains(&C1));
    }

    #[test]
    fn castling_denied_after_king_or_rook_moved() {
        let mut board = castling_board();
        if let Some(king) = board.piece_at_mut(E1) {
            king.has_moved = true;
        }
        let moves = king_moves(&board, E1);
        assert!(!moves.contains(&G1));
        assert!(!moves.contains(&C1));

        let mut board = castling_board();
        if let Some(rook) = board.piece_at_mut(Coord::new(7, 7)) {
            rook.has_moved = true;
        }
        let moves = king_moves(&board, E1);
        assert!(!moves.contains(&G1));
        assert!(moves.contains(&C1));
    }

    #[test]
    fn castling_denied_while_in_check_or_through_an_attacked_square() {
        let mut board = castling_board();
        if let Some(king) = board.piece_at_mut(E1) {
            king.in_check = true;
        }
        let moves = king_moves(&board, E1);
        assert!(!moves.contains(&G1));
        assert!(!moves.contains(&C1));

        // Rook on f8 covers f1, the square the king crosses king side.
        let mut board = castling_board();
        board.put_piece(PieceKind::Rook, Color::Black, Coord::new(0, 5));
        let moves = king_moves(&board, E1);
        assert!(!moves.contains(&G1));
        assert!(moves.contains(&C1));
    }

    #[test]
    fn queenside_b_file_attack_does_not_block_castling() {
        let mut board = castling_board();
        // Rook on b8 attacks b1, which only the rook crosses.
        board.put_piece(PieceKind::Rook, Color::Black, Coord::new(0, 1));
        let moves = king_moves(&board, E1);
        assert!(moves.contains(&C1));

        // An attack on d1 or c1 does block it.
        let mut board = castling_board();
        board.put_piece(PieceKind::Rook, Color::Black, Coord::new(0, 3));
        let moves = king_moves(&board, E1);
        assert!(!moves.contains(&C1));
    }

    #[test]
    fn castling_denied_through_occupied_squares() {
        let mut board = castling_board();
        board.put_piece(PieceKind::Knight, Color::White, Coord::new(7, 1));
        let moves = king_moves(&board, E1);
        assert!(moves.contains(&G1));
        assert!(!moves.contains(&C1));
    }
}
