use criterion::{criterion_group, criterion_main, Criterion};

use chess_engine::board::Board;

fn bench_initial_position(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("perft initial depth 4", |b| {
        b.iter(|| board.perft(4));
    });
}

fn bench_kiwipete(c: &mut Criterion) {
    let board = Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    c.bench_function("perft kiwipete depth 3", |b| {
        b.iter(|| board.perft(3));
    });
}

criterion_group!(benches, bench_initial_position, bench_kiwipete);
criterion_main!(benches);
