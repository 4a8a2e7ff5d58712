//! Terminal-position detection.
//!
//! Runs after every committed move and undo. Checkmate and stalemate hinge
//! on whether the side to move has any legal reply; insufficient material
//! uses the simplified rule: bare kings, king and one minor piece, or one
//! bishop each. The fifty-move rule is a declaration the players may claim
//! through the board API, never an automatic termination.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{EndReason, PieceKind};
use crate::move_generation::move_generator::any_legal_move;
use crate::rules::check_tracking::is_in_check;

/// Updates `game_over` / `end_reason` for the current position. A side
/// with no legal reply is classified before material is examined, so a
/// stalemate with bare material still reads as stalemate.
pub fn check_end_of_game(board: &mut Board) {
    let side = board.side_to_move;
    if !any_legal_move(board, side) {
        board.game_over = true;
        board.end_reason = Some(if is_in_check(board, side) {
            EndReason::Checkmate
        } else {
            EndReason::Stalemate
        });
        return;
    }

    if insufficient_material(board) {
        board.game_over = true;
        board.end_reason = Some(EndReason::DrawInsufficientMaterial);
        return;
    }

    board.game_over = false;
    board.end_reason = None;
}

/// Neither side can force mate: bare kings, a lone minor piece, or exactly
/// one bishop per side.
pub fn insufficient_material(board: &Board) -> bool {
    let mut others = Vec::new();
    for at in Board::all_coords() {
        if let Some(piece) = board.piece_at(at) {
            if piece.kind != PieceKind::King {
                others.push((piece.kind, piece.color));
                if others.len() > 2 {
                    return false;
                }
            }
        }
    }

    match others.as_slice() {
        [] => true,
        [(kind, _)] => matches!(kind, PieceKind::Bishop | PieceKind::Knight),
        [(PieceKind::Bishop, a), (PieceKind::Bishop, b)] => a != b,
        _ => false,
    }
}
