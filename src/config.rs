//! Policy configuration.

use crate::error::{BanditError, Result};

/// Learning rate used when the caller does not pick one.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Configuration for [`LinearBandit`][crate::LinearBandit].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearBanditConfig {
    /// Number of arms (must be >= 1).
    pub num_arms: usize,
    /// Context / weight vector dimension (must be >= 1).
    pub num_features: usize,
    /// SGD step size (must be finite and > 0). Fixed for the lifetime of the policy.
    pub learning_rate: f64,
    /// Seed for the RNG that draws the initial weights in [`LinearBandit::new`][crate::LinearBandit::new].
    ///
    /// Ignored by `with_rng` and `from_weights`.
    pub seed: u64,
}

impl Default for LinearBanditConfig {
    fn default() -> Self {
        Self {
            num_arms: 2,
            num_features: 8,
            learning_rate: DEFAULT_LEARNING_RATE,
            seed: 0,
        }
    }
}

impl LinearBanditConfig {
    /// Config with the given shape and default learning rate / seed.
    pub fn new(num_arms: usize, num_features: usize) -> Self {
        Self {
            num_arms,
            num_features,
            ..Self::default()
        }
    }

    /// Check the construction preconditions.
    pub fn validate(&self) -> Result<()> {
        if self.num_arms < 1 {
            return Err(BanditError::InvalidConfiguration(
                "num_arms must be >= 1".to_string(),
            ));
        }
        if self.num_features < 1 {
            return Err(BanditError::InvalidConfiguration(
                "num_features must be >= 1".to_string(),
            ));
        }
        validate_learning_rate(self.learning_rate)
    }
}

fn validate_learning_rate(learning_rate: f64) -> Result<()> {
    if !(learning_rate.is_finite() && learning_rate > 0.0) {
        return Err(BanditError::InvalidConfiguration(format!(
            "learning_rate must be finite and > 0, got {learning_rate}"
        )));
    }
    Ok(())
}
