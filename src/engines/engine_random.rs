//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for
//! diagnostics, integration testing and low-strength play.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{ChosenMove, Engine, EngineOutput, GoParams};
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::move_generation::move_generator::all_legal_moves;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "QuinceChess Random"
    }

    fn choose_move(
        &mut self,
        board: &mut Board,
        _params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let color = board.side_to_move;
        let legal_moves = all_legal_moves(board, color);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine legal_moves {}", legal_moves.len()));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let mut rng = rand::rng();
        let &(from, to) = legal_moves
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random move")?;

        let promotion = board
            .piece_at(from)
            .filter(|p| p.kind == PieceKind::Pawn && to.row == p.promotion_row())
            .map(|_| PieceKind::Queen);

        out.best_move = Some(ChosenMove {
            from,
            to,
            promotion,
        });
        Ok(out)
    }
}
