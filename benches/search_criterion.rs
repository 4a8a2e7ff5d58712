use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use quince_chess::game_state::board::Board;
use quince_chess::game_state::chess_types::{Coord, GameMode};
use quince_chess::move_generation::move_generator::all_legal_moves;
use quince_chess::search::alpha_beta::best_move;

fn open_middlegame() -> Board {
    let mut board = Board::new_game(GameMode::TwoPlayer);
    for (from, to) in [
        ((6, 4), (4, 4)),
        ((1, 4), (3, 4)),
        ((7, 6), (5, 5)),
        ((0, 1), (2, 2)),
        ((7, 5), (3, 1)),
    ] {
        board
            .apply_move(Coord::new(from.0, from.1), Coord::new(to.0, to.1), None)
            .expect("scripted opening is legal");
    }
    board
}

fn bench_move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_generation");

    group.bench_function("all_legal_moves_startpos", |b| {
        let mut board = Board::new_game(GameMode::TwoPlayer);
        b.iter(|| {
            let color = board.side_to_move;
            black_box(all_legal_moves(&mut board, color))
        });
    });

    group.bench_function("all_legal_moves_middlegame", |b| {
        let mut board = open_middlegame();
        b.iter(|| {
            let color = board.side_to_move;
            black_box(all_legal_moves(&mut board, color))
        });
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha_beta");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    for depth in [2u8, 3] {
        group.bench_with_input(
            BenchmarkId::new("best_move_startpos", depth),
            &depth,
            |b, &depth| {
                let mut board = Board::new_game(GameMode::TwoPlayer);
                b.iter(|| black_box(best_move(&mut board, depth)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("best_move_middlegame", depth),
            &depth,
            |b, &depth| {
                let mut board = open_middlegame();
                b.iter(|| black_box(best_move(&mut board, depth)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_move_generation, bench_search);
criterion_main!(benches);
