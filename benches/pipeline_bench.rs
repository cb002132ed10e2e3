use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pitchmap::config::ParallelConfig;
use pitchmap::core::FeatureVector;
use pitchmap::{KnowledgeBase, Pipeline, PitchmapConfig, ProjectInput, Scenario, ScenarioEngine};
use std::hint::black_box;

fn project() -> ProjectInput {
    let features: FeatureVector = [
        ("budget", 500_000.0),
        ("team_size", 5.0),
        ("market_demand", 65.0),
        ("technical_feasibility", 75.0),
        ("hypothesis_validation_rate", 0.6),
        ("rat_completion_rate", 0.55),
        ("user_count", 2000.0),
        ("revenue_growth", 0.15),
        ("user_engagement", 60.0),
        ("market_share", 0.02),
        ("roi", 0.10),
    ]
    .into_iter()
    .collect();
    ProjectInput::new(features)
        .with_sector("fintech")
        .with_stage("seed")
        .with_success_probability(65.0)
}

fn bench_analyze(c: &mut Criterion) {
    let config = PitchmapConfig::default();
    let pipeline = Pipeline::new(KnowledgeBase::standard(), &config);
    let input = project();

    c.bench_function("analyze_project", |b| {
        b.iter(|| pipeline.analyze(black_box(&input)))
    });
}

fn bench_scenario_batch(c: &mut Criterion) {
    let config = PitchmapConfig::default();
    let pipeline = Pipeline::new(KnowledgeBase::standard(), &config);
    let input = project();
    let mut group = c.benchmark_group("scenario_batch");

    for size in [4usize, 16, 64] {
        let scenarios: Vec<Scenario> = (0..size)
            .map(|i| Scenario::new(format!("s{i}")).with("budget", format!("+{}", i * 10_000).as_str()))
            .collect();

        for (label, parallel) in [
            ("sequential", ParallelConfig::sequential()),
            ("parallel", ParallelConfig::default()),
        ] {
            let engine = ScenarioEngine::new(pipeline).with_parallel(parallel);
            group.bench_with_input(BenchmarkId::new(label, size), &scenarios, |b, s| {
                b.iter(|| engine.run_batch(black_box(&input), s))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_analyze, bench_scenario_batch);
criterion_main!(benches);
