//! Alpha-beta engine.
//!
//! Wraps the fixed-depth search behind the `Engine` trait. Promotion moves
//! found by the search always promote to a queen; the search itself never
//! evaluates underpromotions.

use crate::engines::engine_trait::{ChosenMove, Engine, EngineOutput, GoParams};
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::search::alpha_beta::best_move;

const DEFAULT_DEPTH: u8 = 3;

pub struct AlphaBetaEngine {
    depth: u8,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }

    pub fn with_depth(depth: u8) -> Self {
        Self { depth: depth.max(1) }
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for AlphaBetaEngine {
    fn name(&self) -> &str {
        "QuinceChess AlphaBeta"
    }

    fn choose_move(
        &mut self,
        board: &mut Board,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let depth = params.depth.unwrap_or(self.depth).max(1);

        let mut out = EngineOutput::default();
        let selected = match best_move(board, depth) {
            Some(selected) => selected,
            None => return Ok(out),
        };
        out.info_lines
            .push(format!("info depth {depth} score cp {}", selected.score));

        let promotion = board
            .piece_at(selected.from)
            .filter(|p| p.kind == PieceKind::Pawn && selected.to.row == p.promotion_row())
            .map(|_| PieceKind::Queen);

        out.best_move = Some(ChosenMove {
            from: selected.from,
            to: selected.to,
            promotion,
        });
        Ok(out)
    }
}

/// Selects a move with `engine` and commits it. Errors from the engine and
/// from the board are reported uniformly as strings.
pub fn play_engine_move(
    board: &mut Board,
    engine: &mut dyn Engine,
    params: &GoParams,
) -> Result<Option<ChosenMove>, String> {
    let output = engine.choose_move(board, params)?;
    let chosen = match output.best_move {
        Some(chosen) => chosen,
        None => return Ok(None),
    };
    board
        .apply_move(chosen.from, chosen.to, chosen.promotion)
        .map_err(|e| e.to_string())?;
    Ok(Some(chosen))
}
