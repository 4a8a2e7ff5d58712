//! Self-play harness: the alpha-beta engine plays both sides.
//!
//! Usage: `self_play [depth] [max_half_moves]`. Prints each move in long
//! algebraic form, the final board and the tally collected through the
//! event sink.

use std::cell::RefCell;
use std::env;
use std::process;
use std::rc::Rc;

use quince_chess::engines::engine_alpha_beta::{play_engine_move, AlphaBetaEngine};
use quince_chess::engines::engine_trait::GoParams;
use quince_chess::events::{EventSink, GameEvent, StatsTally};
use quince_chess::game_state::board::Board;
use quince_chess::game_state::chess_types::{EndReason, GameMode};
use quince_chess::utils::algebraic::format_move;
use quince_chess::utils::render_board::render_board;

struct SharedTally(Rc<RefCell<StatsTally>>);

impl EventSink for SharedTally {
    fn on_event(&mut self, event: &GameEvent) {
        self.0.borrow_mut().on_event(event);
    }
}

fn main() {
    if let Err(message) = run() {
        eprintln!("self_play: {message}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let depth: u8 = match args.next() {
        Some(raw) => raw.parse().map_err(|_| format!("invalid depth {raw:?}"))?,
        None => 2,
    };
    let max_half_moves: usize = match args.next() {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("invalid move limit {raw:?}"))?,
        None => 200,
    };

    let tally = Rc::new(RefCell::new(StatsTally::default()));
    let mut board = Board::empty(GameMode::TwoPlayer);
    board.set_event_sink(Box::new(SharedTally(Rc::clone(&tally))));
    board.reset();

    let mut engine = AlphaBetaEngine::with_depth(depth);
    let params = GoParams::default();

    for half_move in 1..=max_half_moves {
        let played = play_engine_move(&mut board, &mut engine, &params)?;
        match played {
            Some(chosen) => {
                println!(
                    "{half_move:>3}. {}",
                    format_move(chosen.from, chosen.to, chosen.promotion)
                );
            }
            None => break,
        }

        if board.game_over {
            break;
        }
        if board.can_declare_draw() {
            board.declare_fifty_move_draw();
            break;
        }
    }

    println!("{}", render_board(&board));
    let (over, reason) = board.is_game_over();
    match (over, reason) {
        (true, Some(EndReason::Checkmate)) => println!("result: checkmate"),
        (true, Some(EndReason::Stalemate)) => println!("result: stalemate"),
        (true, Some(EndReason::DrawFiftyMove)) => println!("result: fifty-move draw"),
        (true, Some(EndReason::DrawInsufficientMaterial)) => {
            println!("result: insufficient material")
        }
        (true, Some(EndReason::DrawDeclared)) => println!("result: draw declared"),
        _ => println!("result: unfinished after move limit"),
    }

    let tally = tally.borrow();
    println!(
        "games {} / white wins {} / black wins {}",
        tally.games_started, tally.white_wins, tally.black_wins
    );
    Ok(())
}
