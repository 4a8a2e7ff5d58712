//! Timestamped game lifecycle events.
//!
//! The board announces game starts and decisive results through an
//! `EventSink`. Sinks are passive observers; nothing in the rules engine
//! depends on one being installed. `StatsTally` is the in-memory sink used
//! by the self-play harness to keep running win counts.

use chrono::{DateTime, Utc};

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEventKind {
    GameStarted,
    GameWon { winner: Color },
}

#[derive(Debug, Clone)]
pub struct GameEvent {
    pub kind: GameEventKind,
    pub at: DateTime<Utc>,
}

impl GameEvent {
    pub fn game_started() -> Self {
        Self {
            kind: GameEventKind::GameStarted,
            at: Utc::now(),
        }
    }

    pub fn game_won(winner: Color) -> Self {
        Self {
            kind: GameEventKind::GameWon { winner },
            at: Utc::now(),
        }
    }
}

pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

/// Running totals across games. Draws are visible as games started minus
/// games won.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsTally {
    pub games_started: u32,
    pub white_wins: u32,
    pub black_wins: u32,
}

impl EventSink for StatsTally {
    fn on_event(&mut self, event: &GameEvent) {
        match event.kind {
            GameEventKind::GameStarted => self.games_started += 1,
            GameEventKind::GameWon { winner } => match winner {
                Color::White => self.white_wins += 1,
                Color::Black => self.black_wins += 1,
            },
        }
    }
}
