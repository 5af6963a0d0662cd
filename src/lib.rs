//! `linbandit`: a greedy linear contextual bandit.
//!
//! Designed for small "which action now?" problems: a fixed set of arms, a
//! fixed-length feature vector per decision, and a scalar reward observed
//! after the choice. Each arm keeps a linear weight vector; the arm whose
//! weights score highest against the context wins, and only that arm learns
//! from the reward.
//!
//! **Pieces:**
//! - [`LinearBandit`]: scoring ([`LinearBandit::score`]), greedy selection
//!   ([`LinearBandit::select_arm`] / [`LinearBandit::decide`]) and the SGD
//!   update rule ([`LinearBandit::update_weights`]).
//! - [`LinearBandit::run`]: online loop over caller-supplied context and reward
//!   closures, returning a [`RunSummary`].
//! - [`LinearBandit::offline_evaluate`] / [`LinearBandit::offline_evaluate_explain`]:
//!   replay estimate over a log of [`HistoricalRecord`]s.
//! - [`PostUpdate`]: strategy run on the updated arm's weights after every step
//!   (no-op by default; decay, norm clipping, or a caller function).
//!
//! **Goals:**
//! - **Deterministic**: same seed + same inputs → same weights and choices.
//!   Ties go to the lowest arm index.
//! - **No partial failure**: inputs are validated before any state changes.
//!
//! **Non-goals:**
//! - Exploration (epsilon-greedy, UCB, Thompson sampling). Selection is pure argmax.
//! - Non-linear models, weight persistence, concurrent training.
//! - Generating contexts or rewards; those are the caller's closures.
//!
//! # Example
//!
//! ```rust
//! use linbandit::{HistoricalRecord, LinearBandit, LinearBanditConfig};
//!
//! let cfg = LinearBanditConfig { num_arms: 3, num_features: 2, learning_rate: 0.1, seed: 7 };
//! let mut policy = LinearBandit::new(cfg).unwrap();
//!
//! let summary = policy
//!     .run(100, || vec![1.0, 0.5], |arm| if arm == 2 { 1.0 } else { 0.0 })
//!     .unwrap();
//! assert_eq!(summary.rounds, 100);
//!
//! let log = vec![HistoricalRecord::new(vec![1.0, 0.5], 2, 1.0)];
//! let v = policy.offline_evaluate(&log).unwrap();
//! assert!((0.0..=1.0).contains(&v));
//! ```

#![forbid(unsafe_code)]

mod config;
pub use config::*;

mod error;
pub use error::{BanditError, Result};

mod hook;
pub use hook::*;

mod decision;
pub use decision::*;

mod policy;
pub use policy::*;

mod harness;
pub use harness::*;

mod replay;
pub use replay::*;

/// Crate version, for log lines that record which policy build produced them.
pub const LINBANDIT_VERSION: &str = env!("CARGO_PKG_VERSION");
