use std::time::Duration;

use thiserror::Error;

use crate::cache::{OceanError, StoreError};
use crate::config::ConfigError;

/// Errors surfaced by the `ocean` binary
///
/// Library callers deal with [`OceanError`] directly; this type only wraps it
/// together with the failures that can happen around a command.
#[derive(Error, Debug)]
pub enum AppError {
    /// A facade operation failed
    #[error(transparent)]
    Cache(#[from] OceanError),

    /// The store could not be constructed
    #[error("Store unavailable")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// The command did not finish within `--timeout`
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    /// Interrupted by Ctrl-C
    #[error("Operation cancelled")]
    Cancelled,
}

impl AppError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Process exit code for this error
    ///
    /// A missing key gets its own code so scripts can tell it apart from failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Cache(err) if err.is_not_found() => 2,
            AppError::Config(_) | AppError::Validation { .. } => 78,
            AppError::Timeout(_) => 124,
            AppError::Cancelled => 130,
            _ => 1,
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_has_distinct_exit_code() {
        let err = AppError::from(OceanError::NotFound {
            key: "app:missing".to_string(),
        });
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "key app:missing does not exist");
    }

    #[test]
    fn test_other_cache_errors_exit_one() {
        let err = AppError::from(OceanError::StoreRead {
            key: "k".to_string(),
            source: StoreError::Backend("down".to_string()),
        });
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_and_timeout_exit_codes() {
        let config = AppError::from(ConfigError::validation("redis.url", "empty"));
        assert_eq!(config.exit_code(), 78);
        assert!(config.to_string().contains("redis.url"));

        let timeout = AppError::Timeout(Duration::from_secs(3));
        assert_eq!(timeout.exit_code(), 124);
        assert_eq!(timeout.to_string(), "Operation timed out after 3s");
    }

    #[test]
    fn test_store_error_chain_names_cause_once() {
        let err = AppError::from(StoreError::Pool("timed out".to_string()));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            format!("{:#}", anyhow::Error::from(err)),
            "Store unavailable: Connection pool error: timed out"
        );
    }
}
