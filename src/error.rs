//! Error type shared by every fallible policy operation.
//!
//! All variants are local precondition violations: they are detected at the
//! entry of an operation, before any weight is touched, so an `Err` never
//! leaves the policy half-updated.

/// Errors returned by [`LinearBandit`][crate::LinearBandit] operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BanditError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("context has {got} features, policy expects {expected}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("offline evaluation needs at least one historical record")]
    EmptyDataset,

    #[error("arm index {arm} out of range (policy has {num_arms} arms)")]
    ArmOutOfRange { arm: usize, num_arms: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BanditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let e = BanditError::DimensionMismatch {
            expected: 3,
            got: 5,
        };
        assert_eq!(e.to_string(), "context has 5 features, policy expects 3");

        let e = BanditError::ArmOutOfRange {
            arm: 7,
            num_arms: 2,
        };
        assert!(e.to_string().contains("7"));
        assert!(e.to_string().contains("2 arms"));
    }
}
