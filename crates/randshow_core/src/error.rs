//! Error types for engine construction and quality checks.
//!
//! Draw operations never fail: degenerate ranges are normalised instead of
//! reported. Errors only arise when a caller supplies parameters that would
//! leave an engine or a check ill-defined.

use thiserror::Error;

/// Engine construction and configuration error.
///
/// # Examples
///
/// ```rust
/// use randshow_core::{EngineError, Lcg};
///
/// let err = Lcg::with_params(1, 3, 0, 0).unwrap_err();
/// assert_eq!(err, EngineError::InvalidModulus(0));
/// assert_eq!(err.to_string(), "Invalid LCG modulus 0: must be at least 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// LCG modulus below 2 leaves the recurrence undefined or constant.
    #[error("Invalid LCG modulus {0}: must be at least 2")]
    InvalidModulus(u64),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },
}

impl EngineError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::InvalidModulus(1);
        assert!(err.to_string().contains("Invalid LCG modulus 1"));

        let err = EngineError::invalid_parameter("state", "must not be all zero");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'state': must not be all zero"
        );
    }
}
