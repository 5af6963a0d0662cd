//! Simulated routing between three backends with a greedy linear bandit.
//!
//! Run with `RUST_LOG=linbandit=debug cargo run --example greedy_router` to
//! see per-round log lines.

use linbandit::{HistoricalRecord, LinearBandit, LinearBanditConfig, PostUpdate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::Cell;
use tracing_subscriber::EnvFilter;

// Hidden per-arm response: reward ≈ theta · [bias, prompt_len, difficulty].
const THETAS: [[f64; 3]; 3] = [
    [0.8, -0.4, -0.3], // "small": good on short, easy prompts
    [0.5, 0.1, 0.1],   // "medium"
    [0.2, 0.3, 0.6],   // "big": good on hard prompts
];
const ARMS: [&str; 3] = ["small", "medium", "big"];

fn expected_reward(arm: usize, x: &[f64]) -> f64 {
    THETAS[arm].iter().zip(x).map(|(t, v)| t * v).sum()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = LinearBanditConfig {
        num_arms: ARMS.len(),
        num_features: 3,
        learning_rate: 0.05,
        seed: 0,
    };
    let mut policy = match LinearBandit::new(cfg)
        .and_then(|p| p.with_post_update(PostUpdate::ClampNorm { max_norm: 5.0 }))
    {
        Ok(p) => p,
        Err(e) => {
            eprintln!("invalid policy config: {e}");
            return;
        }
    };

    let mut env = StdRng::seed_from_u64(123);
    let mut noise = StdRng::seed_from_u64(456);
    let current = Cell::new([0.0f64; 3]);

    let summary = policy.run(
        5_000,
        || {
            let x = [1.0, env.random::<f64>(), env.random::<f64>()];
            current.set(x);
            x.to_vec()
        },
        |arm| expected_reward(arm, &current.get()) + noise.random_range(-0.05..0.05),
    );
    let summary = match summary {
        Ok(s) => s,
        Err(e) => {
            eprintln!("run failed: {e}");
            return;
        }
    };

    println!("rounds={} mean_reward={:.3}", summary.rounds, summary.mean_reward());
    for (arm, pulls) in summary.pulls.iter().enumerate() {
        println!("  {:<6} pulls={pulls}", ARMS[arm]);
    }

    // Replay against a log collected by a uniform-random logging policy.
    let mut log_rng = StdRng::seed_from_u64(789);
    let log: Vec<HistoricalRecord> = (0..2_000)
        .map(|_| {
            let x = vec![1.0, log_rng.random::<f64>(), log_rng.random::<f64>()];
            let arm = log_rng.random_range(0..ARMS.len());
            let reward = expected_reward(arm, &x);
            HistoricalRecord::new(x, arm, reward)
        })
        .collect();

    match policy.offline_evaluate_explain(&log) {
        Ok(r) => println!(
            "replay: records={} matched={} ({:.1}%) estimate={:.3}",
            r.records,
            r.matched,
            100.0 * r.match_rate(),
            r.average_reward
        ),
        Err(e) => eprintln!("offline evaluation failed: {e}"),
    }

    for &(label, x) in &[
        ("short/easy", [1.0, 0.1, 0.1]),
        ("long/hard", [1.0, 0.9, 0.9]),
    ] {
        if let Ok(d) = policy.decide(&x) {
            println!("  {label:<10} -> {} (scores {:?})", ARMS[d.chosen], d.scores);
        }
    }
}
