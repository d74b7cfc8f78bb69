use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_engine::{Board, Mark, analyze, best_move, choose_move, evaluate};

fn bench_self_play_full_game() {
    let mut board = Board::new();
    while !evaluate(&board).is_terminal() {
        let side = board.side_to_move();
        match best_move(&board, side) {
            Some(mv) => board = board.with_mark(mv, side),
            None => break,
        }
    }
}

fn bench_single_move_empty_board() {
    let board = Board::new();
    black_box(analyze(black_box(&board), Mark::X));
}

fn bench_single_move_mid_game() {
    let board: Board = "X__ _O_ __X".parse().unwrap_or_default();
    black_box(choose_move(black_box(&board)));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("self_play_full_game", |b| {
        b.iter(bench_self_play_full_game)
    });

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
