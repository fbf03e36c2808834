use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gridfall::core::{Board, GameState};
use gridfall::types::{Cell, Command, Rotation, ShapeId, BOARD_COLS, BOARD_ROWS};

fn bench_fits(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("fits_open_interior", |b| {
        b.iter(|| board.fits(black_box(ShapeId::T), Rotation::R90, 8, 4))
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick_50ms", |b| {
        b.iter(|| {
            state.tick();
        })
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("apply_move", |b| {
        b.iter(|| {
            state.apply(black_box(Command::MoveLeft));
            state.apply(black_box(Command::MoveRight));
        })
    });
}

fn bench_clear_rows(c: &mut Criterion) {
    c.bench_function("clear_two_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in [BOARD_ROWS - 2, BOARD_ROWS - 3] {
                for col in 1..BOARD_COLS - 1 {
                    board.set(row, col, Cell::Filled(ShapeId::I));
                }
            }
            board.clear_completed_rows(black_box(BOARD_ROWS - 5))
        })
    });
}

criterion_group!(
    benches,
    bench_fits,
    bench_tick,
    bench_apply_move,
    bench_clear_rows
);
criterion_main!(benches);
