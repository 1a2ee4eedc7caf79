use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kinship_calc::kinship::RelationStep::*;
use kinship_calc::{EngineConfig, Gender, KinshipEngine};

fn bench_queries(c: &mut Criterion) {
    let engine = KinshipEngine::from_config(EngineConfig::default()).expect("embedded tables");

    let direct = [Father, OlderBrother];
    let continued = [Mother, OlderSister, Son, YoungerSister, Husband];
    let mut deep = vec![Father, OlderBrother, Son];
    deep.extend([OlderBrother; 10]);

    c.bench_function("resolve_direct", |b| {
        b.iter(|| engine.resolve(black_box(&direct), Gender::Male))
    });
    c.bench_function("resolve_continuation", |b| {
        b.iter(|| engine.resolve(black_box(&continued), Gender::Male))
    });
    c.bench_function("resolve_id_depth_limit", |b| {
        b.iter(|| engine.resolve_id(black_box(&deep), Gender::Male))
    });
    c.bench_function("valid_next_steps", |b| {
        b.iter(|| engine.valid_next_steps(black_box(&continued[..3]), Gender::Female))
    });
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
