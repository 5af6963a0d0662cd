//! Replay-based offline (off-policy) evaluation.
//!
//! Given a fully materialized log of `(context, logged arm, reward)` records,
//! the current policy is replayed against each context. A record contributes
//! its logged reward only when the policy picks the same arm that was logged;
//! every other record contributes zero. The estimate is the total divided by
//! the number of records.
//!
//! The weights are frozen for the whole pass: replay does not learn from the
//! log as it goes.

use tracing::info;

use crate::error::{BanditError, Result};
use crate::policy::LinearBandit;

/// One logged interaction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoricalRecord {
    pub context: Vec<f64>,
    /// Arm the logging policy actually took.
    pub arm: usize,
    pub reward: f64,
}

impl HistoricalRecord {
    pub fn new(context: Vec<f64>, arm: usize, reward: f64) -> Self {
        Self {
            context,
            arm,
            reward,
        }
    }
}

impl From<(Vec<f64>, usize, f64)> for HistoricalRecord {
    fn from((context, arm, reward): (Vec<f64>, usize, f64)) -> Self {
        Self::new(context, arm, reward)
    }
}

/// Breakdown of an offline evaluation pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplayReport {
    /// Records in the log.
    pub records: usize,
    /// Records where the policy agreed with the logged arm.
    pub matched: usize,
    /// Sum of logged rewards over matched records.
    pub total_reward: f64,
    /// `total_reward / records`.
    pub average_reward: f64,
}

impl ReplayReport {
    /// Fraction of records where the policy agreed with the log.
    pub fn match_rate(&self) -> f64 {
        if self.records == 0 {
            0.0
        } else {
            self.matched as f64 / self.records as f64
        }
    }
}

impl LinearBandit {
    /// Average replayed reward of the current greedy policy over `records`.
    ///
    /// Errors:
    /// - `EmptyDataset` when `records` is empty.
    /// - `DimensionMismatch` when any record's context has the wrong length
    ///   (checked for every record before any scoring).
    pub fn offline_evaluate(&self, records: &[HistoricalRecord]) -> Result<f64> {
        Ok(self.offline_evaluate_explain(records)?.average_reward)
    }

    /// Same as [`offline_evaluate`](Self::offline_evaluate), returning the full breakdown.
    pub fn offline_evaluate_explain(&self, records: &[HistoricalRecord]) -> Result<ReplayReport> {
        if records.is_empty() {
            return Err(BanditError::EmptyDataset);
        }
        for r in records {
            self.check_context(&r.context)?;
        }

        let mut matched = 0usize;
        let mut total_reward = 0.0;
        for r in records {
            if self.select_arm(&r.context)? == r.arm {
                matched += 1;
                total_reward += r.reward;
            }
        }

        let report = ReplayReport {
            records: records.len(),
            matched,
            total_reward,
            average_reward: total_reward / records.len() as f64,
        };
        info!(
            records = report.records,
            matched = report.matched,
            average_reward = report.average_reward,
            "offline evaluation finished"
        );
        Ok(report)
    }
}
