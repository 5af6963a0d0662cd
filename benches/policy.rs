use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linbandit::{HistoricalRecord, LinearBandit, LinearBanditConfig};
use std::hint::black_box;

fn bench_select_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_update");
    for &(num_arms, num_features) in &[(4usize, 8usize), (16, 32), (64, 128)] {
        let cfg = LinearBanditConfig {
            num_arms,
            num_features,
            learning_rate: 0.05,
            seed: 1,
        };
        let mut policy = LinearBandit::new(cfg).unwrap();

        // A deterministic, slightly-non-uniform context.
        let ctx: Vec<f64> = (0..num_features)
            .map(|i| ((i * 17 + 3) % 101) as f64 / 101.0)
            .collect();

        let id = format!("{num_arms}x{num_features}");
        group.bench_with_input(BenchmarkId::new("select", &id), &ctx, |b, ctx| {
            b.iter(|| black_box(policy.select_arm(black_box(ctx)).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("select+update", &id), &ctx, |b, ctx| {
            b.iter(|| {
                let arm = policy.select_arm(black_box(ctx)).unwrap();
                black_box(policy.update_weights(arm, ctx, 0.5).unwrap());
            })
        });
    }
    group.finish();
}

fn bench_offline_evaluate(c: &mut Criterion) {
    let cfg = LinearBanditConfig {
        num_arms: 8,
        num_features: 16,
        learning_rate: 0.1,
        seed: 2,
    };
    let policy = LinearBandit::new(cfg).unwrap();
    let log: Vec<HistoricalRecord> = (0..10_000usize)
        .map(|i| {
            let ctx = (0..16).map(|j| (((i + 1) * (j + 7)) % 13) as f64 / 13.0).collect();
            HistoricalRecord::new(ctx, i % 8, (i % 5) as f64 / 4.0)
        })
        .collect();

    c.bench_function("offline_evaluate/10k", |b| {
        b.iter(|| black_box(policy.offline_evaluate(black_box(&log)).unwrap()))
    });
}

criterion_group!(benches, bench_select_update, bench_offline_evaluate);
criterion_main!(benches);
