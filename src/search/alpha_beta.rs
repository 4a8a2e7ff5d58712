//! Fixed-depth alpha-beta search over the live board.
//!
//! The search never clones positions: every node is explored through
//! `Board::probe`, which applies a candidate move in place and unwinds it
//! exactly on the way out. Probes run under lookahead rules, so castling
//! rights survive the exploration and en passant lines are not entered.
//! Moves are visited in row-major source order and a candidate replaces the
//! incumbent only on strict improvement, making move selection
//! deterministic for a given position.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coord};
use crate::move_generation::move_generator::all_legal_moves;
use crate::rules::check_tracking::refresh_check_state;
use crate::search::board_scoring::evaluate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedMove {
    pub from: Coord,
    pub to: Coord,
    pub score: i32,
}

/// Picks the best move for the side to move, searching `depth` half-moves
/// deep. Returns `None` when no legal move exists.
pub fn best_move(board: &mut Board, depth: u8) -> Option<SelectedMove> {
    let color = board.side_to_move;
    let moves = all_legal_moves(board, color);
    let mut best: Option<SelectedMove> = None;
    let child_depth = depth.saturating_sub(1);

    for (from, to) in moves {
        let score = board.probe(from, to, |b| {
            refresh_check_state(b);
            match color {
                Color::White => alpha_beta_min(b, best_score(&best, i32::MIN), i32::MAX, child_depth),
                Color::Black => alpha_beta_max(b, i32::MIN, best_score(&best, i32::MAX), child_depth),
            }
        });

        let improved = match (&best, color) {
            (None, _) => true,
            (Some(incumbent), Color::White) => score > incumbent.score,
            (Some(incumbent), Color::Black) => score < incumbent.score,
        };
        if improved {
            best = Some(SelectedMove { from, to, score });
        }
    }

    best
}

#[inline]
fn best_score(best: &Option<SelectedMove>, fallback: i32) -> i32 {
    best.as_ref().map_or(fallback, |m| m.score)
}

/// White to act: raises alpha.
fn alpha_beta_max(board: &mut Board, mut alpha: i32, beta: i32, depth: u8) -> i32 {
    if depth == 0 {
        return evaluate(board);
    }
    let moves = all_legal_moves(board, Color::White);
    if moves.is_empty() {
        return evaluate(board);
    }

    for (from, to) in moves {
        let score = board.probe(from, to, |b| {
            refresh_check_state(b);
            alpha_beta_min(b, alpha, beta, depth - 1)
        });
        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }
    alpha
}

/// Black to act: lowers beta.
fn alpha_beta_min(board: &mut Board, alpha: i32, mut beta: i32, depth: u8) -> i32 {
    if depth == 0 {
        return evaluate(board);
    }
    let moves = all_legal_moves(board, Color::Black);
    if moves.is_empty() {
        return evaluate(board);
    }

    for (from, to) in moves {
        let score = board.probe(from, to, |b| {
            refresh_check_state(b);
            alpha_beta_max(b, alpha, beta, depth - 1)
        });
        if score <= alpha {
            return alpha;
        }
        if score < beta {
            beta = score;
        }
    }
    beta
}
