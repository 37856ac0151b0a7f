use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameEngine, GameSnapshot};
use blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut game = GameEngine::new(12345);
    game.start();

    c.bench_function("engine_tick_16ms", |b| {
        b.iter(|| {
            if game.is_game_over() {
                game.start();
            }
            game.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut game = GameEngine::new(12345);
    game.start();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            game.spawn_piece();
        })
    });
}

fn bench_move_piece(c: &mut Criterion) {
    let mut game = GameEngine::new(12345);
    game.start();

    c.bench_function("move_piece", |b| {
        let mut dx = 1;
        b.iter(|| {
            if !game.move_piece(black_box(dx), 0) {
                dx = -dx;
            }
        })
    });
}

fn bench_rotate_piece(c: &mut Criterion) {
    let mut game = GameEngine::new(12345);
    game.start();

    c.bench_function("rotate_piece", |b| {
        b.iter(|| {
            game.rotate_piece();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = GameEngine::new(12345);
    game.start();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_move_piece,
    bench_rotate_piece,
    bench_snapshot
);
criterion_main!(benches);
