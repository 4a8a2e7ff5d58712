//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different move
//! selection strategies can be swapped behind a single trait interface.
//! Engines receive the live board mutably because selection explores it
//! through probes; they must return it untouched.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Coord, PieceKind};

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
}

/// A fully specified move an engine wants played, including the promotion
/// target where one is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChosenMove {
    pub from: Coord,
    pub to: Coord,
    pub promotion: Option<PieceKind>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChosenMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &mut Board, params: &GoParams)
        -> Result<EngineOutput, String>;
}
