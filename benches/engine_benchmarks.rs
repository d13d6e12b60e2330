//! Criterion benchmarks for movegen, perft and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ember::board::{find_best, Position};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let startpos = Position::new();
    for depth in 1..=4u32 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)));
        });
    }

    let kiwipete = Position::from_fen(KIWIPETE);
    for depth in 1..=3u32 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)));
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Position::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.legal_moves()));
    });

    let kiwipete = Position::from_fen(KIWIPETE);
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(kiwipete.legal_moves()));
    });

    let endgame = Position::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
    group.bench_function("endgame", |b| {
        b.iter(|| black_box(endgame.legal_moves()));
    });

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let kiwipete = Position::from_fen(KIWIPETE);
    c.bench_function("evaluate/kiwipete", |b| {
        b.iter(|| black_box(kiwipete.evaluate()));
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let startpos = Position::new();
    group.bench_function("startpos_100ms", |b| {
        b.iter(|| black_box(find_best(&startpos, 100)));
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_evaluate, bench_search);
criterion_main!(benches);
