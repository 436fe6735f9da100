use criterion::{black_box, criterion_group, criterion_main, Criterion};
use farm_scorer_rust::profile::chennai_sample;
use farm_scorer_rust::{rank_crops, FarmProfile, FarmScorer, ScoringConstants, SoilType};

fn bench_rank_crops(c: &mut Criterion) {
    let scorer = FarmScorer::with_defaults();
    let constants = ScoringConstants::default();
    let profile = chennai_sample();

    c.bench_function("rank_crops builtin catalog", |b| {
        b.iter(|| rank_crops(black_box(&profile), scorer.catalog().crops(), &constants))
    });

    c.bench_function("score single farm", |b| b.iter(|| scorer.score(black_box(&profile))));
}

fn bench_batch(c: &mut Criterion) {
    let scorer = FarmScorer::with_defaults();
    let soils = [SoilType::Alluvial, SoilType::Black, SoilType::Red, SoilType::Clayey];
    let profiles: Vec<FarmProfile> = (0..10_000)
        .map(|i| FarmProfile {
            area_acres: 1.0 + (i % 20) as f64 * 0.5,
            soil_type: soils[i % soils.len()],
            ..FarmProfile::default()
        })
        .collect();

    let mut group = c.benchmark_group("batch 10k farms");
    group.bench_function("sequential", |b| b.iter(|| scorer.score_batch(black_box(&profiles))));
    group.bench_function("parallel", |b| {
        b.iter(|| scorer.score_batch_parallel(black_box(&profiles)))
    });
    group.finish();
}

criterion_group!(benches, bench_rank_crops, bench_batch);
criterion_main!(benches);
