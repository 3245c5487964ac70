//! Error types for the randshow CLI.

use randshow_core::EngineError;
use randshow_distr::DistributionError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Engine construction or quality-check parameter error
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Distribution construction error
    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// One or more engines failed the uniformity check
    #[error("Uniformity check failed for: {}", .0.join(", "))]
    CheckFailed(Vec<String>),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::invalid_argument("low must be below high");
        assert!(err.to_string().contains("low must be below high"));

        let err = CliError::CheckFailed(vec!["lcg".to_string(), "pcg32".to_string()]);
        assert_eq!(err.to_string(), "Uniformity check failed for: lcg, pcg32");
    }

    #[test]
    fn test_from_engine_error() {
        let err: CliError = EngineError::InvalidModulus(0).into();
        assert!(matches!(err, CliError::Engine(_)));
    }
}
