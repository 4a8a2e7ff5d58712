//! Crate root module declarations for the Quince Chess engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! rule enforcement, search, engines, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod chess_errors;
pub mod events;

pub mod game_state {
    pub mod board;
    pub mod chess_types;
    pub mod move_record;
    pub mod piece;
    pub mod square;
}

pub mod move_generation {
    pub mod bishop_moves;
    pub mod check_filter;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_generator;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod rules {
    pub mod check_tracking;
    pub mod end_of_game;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_board;
}
