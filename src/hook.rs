//! Post-update extension point.
//!
//! After every SGD step the policy hands the updated arm's weights to a
//! [`PostUpdate`] strategy. The default does nothing; the other variants cover
//! the usual regularizers (shrinkage, norm clipping) without touching the core
//! update rule. The hook only ever sees one arm's slice, so it cannot change
//! the weight vector's length or reach other arms.

use crate::error::{BanditError, Result};

/// Caller-supplied hook: `(arm, weights_of_that_arm)`.
pub type PostUpdateFn = fn(usize, &mut [f64]);

/// Strategy applied to the updated arm's weights after each update.
#[derive(Debug, Clone, Copy, Default)]
pub enum PostUpdate {
    /// Leave the weights as the SGD step left them.
    #[default]
    Noop,
    /// Multiply every weight by `factor` (in `(0, 1]`).
    Decay { factor: f64 },
    /// Rescale so the L2 norm is at most `max_norm` (> 0).
    ClampNorm { max_norm: f64 },
    /// Arbitrary caller function.
    Custom(PostUpdateFn),
}

impl PostUpdate {
    pub(crate) fn validate(&self) -> Result<()> {
        match *self {
            PostUpdate::Noop | PostUpdate::Custom(_) => Ok(()),
            PostUpdate::Decay { factor } => {
                if factor.is_finite() && factor > 0.0 && factor <= 1.0 {
                    Ok(())
                } else {
                    Err(BanditError::InvalidConfiguration(format!(
                        "decay factor must be in (0, 1], got {factor}"
                    )))
                }
            }
            PostUpdate::ClampNorm { max_norm } => {
                if max_norm.is_finite() && max_norm > 0.0 {
                    Ok(())
                } else {
                    Err(BanditError::InvalidConfiguration(format!(
                        "max_norm must be finite and > 0, got {max_norm}"
                    )))
                }
            }
        }
    }

    pub(crate) fn apply(&self, arm: usize, weights: &mut [f64]) {
        match *self {
            PostUpdate::Noop => {}
            PostUpdate::Decay { factor } => {
                for w in weights.iter_mut() {
                    *w *= factor;
                }
            }
            PostUpdate::ClampNorm { max_norm } => {
                let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
                if norm.is_finite() && norm > max_norm {
                    let scale = max_norm / norm;
                    for w in weights.iter_mut() {
                        *w *= scale;
                    }
                }
            }
            PostUpdate::Custom(f) => f(arm, weights),
        }
    }
}
