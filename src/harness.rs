//! Online driving loop.
//!
//! The policy has no opinion on where contexts and rewards come from: the
//! caller passes two closures and [`LinearBandit::run`] alternates
//! select → reward → update for a fixed number of rounds. Rounds are strictly
//! sequential; round `t + 1` sees the weights left by round `t`.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::policy::LinearBandit;

/// What happened during a [`LinearBandit::run`] call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// Completed rounds.
    pub rounds: usize,
    /// Sum of rewards observed over the completed rounds.
    pub total_reward: f64,
    /// How many times each arm was chosen (arm index order).
    pub pulls: Vec<u64>,
}

impl RunSummary {
    /// Mean observed reward per round (0 when no round ran).
    pub fn mean_reward(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.total_reward / self.rounds as f64
        }
    }
}

impl LinearBandit {
    /// Run `num_rounds` online rounds.
    ///
    /// Each round:
    /// 1. `context = context_provider()`
    /// 2. `arm = select_arm(&context)`
    /// 3. `reward = reward_provider(arm)`
    /// 4. `update_weights(arm, &context, reward)`
    ///
    /// If the context provider returns a vector of the wrong length, the loop
    /// stops with `DimensionMismatch` before the reward provider is called for
    /// that round. Earlier rounds keep their updates.
    pub fn run<C, R>(
        &mut self,
        num_rounds: usize,
        mut context_provider: C,
        mut reward_provider: R,
    ) -> Result<RunSummary>
    where
        C: FnMut() -> Vec<f64>,
        R: FnMut(usize) -> f64,
    {
        let mut summary = RunSummary {
            rounds: 0,
            total_reward: 0.0,
            pulls: vec![0; self.num_arms()],
        };

        for round in 0..num_rounds {
            let context = context_provider();
            let arm = match self.select_arm(&context) {
                Ok(arm) => arm,
                Err(e) => {
                    warn!(round, error = %e, "run stopped on invalid context");
                    return Err(e);
                }
            };
            let reward = reward_provider(arm);
            self.update_weights(arm, &context, reward)?;

            summary.rounds += 1;
            summary.total_reward += reward;
            summary.pulls[arm] += 1;
            debug!(round, arm, reward, "round complete");
        }

        info!(
            rounds = summary.rounds,
            total_reward = summary.total_reward,
            mean_reward = summary.mean_reward(),
            "run finished"
        );
        Ok(summary)
    }
}
