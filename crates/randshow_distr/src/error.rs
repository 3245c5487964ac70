//! Error types for distribution construction.

use thiserror::Error;

/// Distribution construction error.
///
/// # Examples
///
/// ```rust
/// use randshow_distr::{Benford, DistributionError};
///
/// let err = Benford::new(2).unwrap_err();
/// assert!(matches!(err, DistributionError::InvalidParameter { name: "base", .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// The cumulative table would exceed the supported size.
    #[error("Support of {len} values exceeds the maximum table size {max}")]
    SupportTooLarge {
        /// Requested number of support points.
        len: u64,
        /// Largest accepted number of support points.
        max: u64,
    },
}

impl DistributionError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
