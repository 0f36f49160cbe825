//! Scout Engine Benchmarks
//!
//! Performance benchmarks for table decoding, evaluation and search using Criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scout_engine::evaluation::pst;
use scout_engine::position::Position;
use scout_engine::{ChessPosition, Engine, EngineConfig, Evaluator};

const MIDDLEGAME: &str = "r1bq1rk1/pp2bppp/2n1pn2/3p4/2PP4/2N1PN2/PP2BPPP/R2QKB1R w KQ - 0 8";

fn bench_pst_decode(c: &mut Criterion) {
    c.bench_function("pst_decode", |b| b.iter(|| black_box(pst::decode())));
}

fn bench_evaluate_starting(c: &mut Criterion) {
    let evaluator = Evaluator::new();
    let pos = ChessPosition::default();

    c.bench_function("evaluate_starting_position", |b| {
        b.iter(|| black_box(evaluator.evaluate(&pos)))
    });
}

fn bench_generate_moves(c: &mut Criterion) {
    let pos = ChessPosition::from_fen(MIDDLEGAME).unwrap();
    let mut moves = Vec::with_capacity(64);

    c.bench_function("generate_moves_middlegame", |b| {
        b.iter(|| {
            moves.clear();
            pos.generate_moves(false, &mut moves);
            black_box(moves.len())
        })
    });
}

fn bench_fixed_depth_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_depth");
    group.sample_size(10);

    for depth in [3, 4, 5] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut engine = Engine::new(EngineConfig {
                    tt_slots_log2: 18,
                    ..EngineConfig::default()
                })
                .unwrap();
                let mut pos = ChessPosition::from_fen(MIDDLEGAME).unwrap();
                black_box(engine.search_depth(&mut pos, depth).unwrap().nodes)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_pst_decode,
    bench_evaluate_starting,
    bench_generate_moves,
    bench_fixed_depth_search,
);
criterion_main!(benches);
