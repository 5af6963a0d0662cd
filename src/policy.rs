//! Greedy linear contextual bandit.
//!
//! Each arm owns a dense weight vector. An arm's score for a context is the
//! dot product of the two; selection is argmax with a lowest-index tie-break,
//! and there is no exploration term. After the caller observes a reward for
//! the chosen arm, [`LinearBandit::update_weights`] takes one SGD step on the
//! squared error between that arm's prediction and the reward.
//!
//! Notes:
//! - Initial weights are uniform draws on `[0, 1)`. [`LinearBandit::new`] seeds
//!   a `StdRng` from the config, so construction is deterministic by default;
//!   [`LinearBandit::with_rng`] takes any caller RNG.
//! - Every operation validates its inputs before touching state: an `Err`
//!   never leaves the weights partially updated.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::config::LinearBanditConfig;
use crate::decision::{argmax_first, decision_from_scores, Decision};
use crate::error::{BanditError, Result};
use crate::hook::PostUpdate;

fn dot(a: &[f64], b: &[f64]) -> f64 {
    let mut s = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        s += x * y;
    }
    s
}

/// Greedy linear contextual bandit with per-arm SGD updates.
///
/// Usage:
/// - call `select_arm(context)` (or `decide(context)`) to pick an arm
/// - call `update_weights(arm, context, reward)` after observing the reward
///
/// # Example
///
/// ```rust
/// use linbandit::LinearBandit;
///
/// let mut p = LinearBandit::from_weights(vec![vec![1.0, 0.0], vec![0.0, 1.0]], 0.1).unwrap();
/// assert_eq!(p.select_arm(&[1.0, 0.0]).unwrap(), 0);
///
/// p.update_weights(0, &[1.0, 0.0], 0.0).unwrap();
/// assert!((p.weights()[0][0] - 0.9).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearBandit {
    cfg: LinearBanditConfig,
    // One row per arm, each exactly `num_features` long.
    weights: Vec<Vec<f64>>,
    uses: Vec<u64>,
    post_update: PostUpdate,
}

impl LinearBandit {
    /// Create a policy whose initial weights come from a `StdRng` seeded with `cfg.seed`.
    pub fn new(cfg: LinearBanditConfig) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        Self::with_rng(cfg, &mut rng)
    }

    /// Create a policy drawing its initial weights from `rng`.
    pub fn with_rng<R: Rng>(cfg: LinearBanditConfig, rng: &mut R) -> Result<Self> {
        cfg.validate()?;
        let weights: Vec<Vec<f64>> = (0..cfg.num_arms)
            .map(|_| (0..cfg.num_features).map(|_| rng.random::<f64>()).collect())
            .collect();
        debug!(
            num_arms = cfg.num_arms,
            num_features = cfg.num_features,
            learning_rate = cfg.learning_rate,
            "initialized linear bandit"
        );
        Ok(Self {
            uses: vec![0; cfg.num_arms],
            cfg,
            weights,
            post_update: PostUpdate::Noop,
        })
    }

    /// Create a policy from an explicit weight matrix (one row per arm).
    ///
    /// Rows must be non-empty, equally long and finite.
    pub fn from_weights(weights: Vec<Vec<f64>>, learning_rate: f64) -> Result<Self> {
        let num_arms = weights.len();
        let num_features = weights.first().map(|w| w.len()).unwrap_or(0);
        let cfg = LinearBanditConfig {
            num_arms,
            num_features,
            learning_rate,
            seed: 0,
        };
        cfg.validate()?;
        for (arm, row) in weights.iter().enumerate() {
            if row.len() != num_features {
                return Err(BanditError::InvalidConfiguration(format!(
                    "arm {arm} has {} weights, arm 0 has {num_features}",
                    row.len()
                )));
            }
            if !row.iter().all(|w| w.is_finite()) {
                return Err(BanditError::InvalidConfiguration(format!(
                    "arm {arm} has non-finite weights"
                )));
            }
        }
        Ok(Self {
            uses: vec![0; num_arms],
            cfg,
            weights,
            post_update: PostUpdate::Noop,
        })
    }

    /// Install a post-update hook (builder style).
    pub fn with_post_update(mut self, hook: PostUpdate) -> Result<Self> {
        self.set_post_update(hook)?;
        Ok(self)
    }

    /// Replace the post-update hook.
    pub fn set_post_update(&mut self, hook: PostUpdate) -> Result<()> {
        hook.validate()?;
        self.post_update = hook;
        Ok(())
    }

    pub fn config(&self) -> &LinearBanditConfig {
        &self.cfg
    }

    pub fn num_arms(&self) -> usize {
        self.cfg.num_arms
    }

    pub fn num_features(&self) -> usize {
        self.cfg.num_features
    }

    pub fn learning_rate(&self) -> f64 {
        self.cfg.learning_rate
    }

    pub fn post_update(&self) -> &PostUpdate {
        &self.post_update
    }

    /// Full weight matrix, one row per arm.
    pub fn weights(&self) -> &[Vec<f64>] {
        &self.weights
    }

    /// Weights of a single arm.
    pub fn arm_weights(&self, arm: usize) -> Result<&[f64]> {
        self.check_arm(arm)?;
        Ok(&self.weights[arm])
    }

    /// Number of updates applied to each arm so far.
    pub fn uses(&self) -> &[u64] {
        &self.uses
    }

    pub(crate) fn check_context(&self, context: &[f64]) -> Result<()> {
        if context.len() != self.cfg.num_features {
            return Err(BanditError::DimensionMismatch {
                expected: self.cfg.num_features,
                got: context.len(),
            });
        }
        Ok(())
    }

    fn check_arm(&self, arm: usize) -> Result<()> {
        if arm >= self.cfg.num_arms {
            return Err(BanditError::ArmOutOfRange {
                arm,
                num_arms: self.cfg.num_arms,
            });
        }
        Ok(())
    }

    /// Linear prediction `weights[arm] · context`.
    pub fn score(&self, arm: usize, context: &[f64]) -> Result<f64> {
        self.check_arm(arm)?;
        self.check_context(context)?;
        Ok(dot(&self.weights[arm], context))
    }

    /// Scores of every arm for `context`, in arm index order.
    pub fn scores(&self, context: &[f64]) -> Result<Vec<f64>> {
        self.check_context(context)?;
        Ok(self.weights.iter().map(|w| dot(w, context)).collect())
    }

    /// Greedy choice: the arm with the highest score, lowest index on ties.
    pub fn select_arm(&self, context: &[f64]) -> Result<usize> {
        let scores = self.scores(context)?;
        let chosen = argmax_first(&scores);
        trace!(chosen, score = scores[chosen], "selected arm");
        Ok(chosen)
    }

    /// Same choice as [`select_arm`](Self::select_arm), wrapped with per-arm scores and notes.
    pub fn decide(&self, context: &[f64]) -> Result<Decision> {
        let scores = self.scores(context)?;
        Ok(decision_from_scores(scores))
    }

    /// One SGD step on `(reward - weights[arm] · context)^2` for the chosen arm.
    ///
    /// The prediction is computed once, before any component changes, and the
    /// same scalar error is applied to every feature:
    /// `w_i += learning_rate * (reward - prediction) * context_i`.
    /// The post-update hook then runs on this arm's weights. Other arms are
    /// never touched.
    ///
    /// Returns the pre-update prediction.
    pub fn update_weights(&mut self, arm: usize, context: &[f64], reward: f64) -> Result<f64> {
        let prediction = self.score(arm, context)?;
        let step = self.cfg.learning_rate * (reward - prediction);

        let w = &mut self.weights[arm];
        for (wi, xi) in w.iter_mut().zip(context.iter()) {
            *wi += step * xi;
        }
        self.post_update.apply(arm, w);
        self.uses[arm] = self.uses[arm].saturating_add(1);

        debug!(arm, reward, prediction, "updated arm weights");
        Ok(prediction)
    }
}
