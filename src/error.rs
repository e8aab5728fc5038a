//! Error types for strategy analysis.
//!
//! The analyzers themselves never fail: missing per-record fields are filtered
//! out and an analyzable-nothing result is represented by omission. Errors only
//! surface at the edges of the crate:
//!
//! ## Error Categories
//!
//! - **Scope Errors**: no session data at all, or an unknown driver code
//! - **Record Errors**: a lap or stint record violates its invariants
//! - **Configuration Errors**: analysis configuration could not be parsed
//! - **Provider Errors**: a session data source could not deliver records
//!
//! Callers translating errors into responses should use [`StrategyError::is_not_found`]:
//!
//! ```rust
//! use stintlab::StrategyError;
//!
//! let error = StrategyError::driver_not_found("ham");
//! assert!(error.is_not_found());
//! assert_eq!(error.to_string(), "Driver 'HAM' has no stint records in this session");
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for strategy operations.
pub type Result<T, E = StrategyError> = std::result::Result<T, E>;

/// Main error type for strategy operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StrategyError {
    #[error("Insufficient data for {scope}: no lap or stint records supplied")]
    InsufficientData { scope: String },

    #[error("Driver '{driver}' has no stint records in this session")]
    DriverNotFound { driver: String },

    #[error("Invalid {record} record: {reason}")]
    InvalidRecord { record: &'static str, reason: String },

    #[error("Invalid stint sequence for driver '{driver}': {reason}")]
    InvalidStintSequence { driver: String, reason: String },

    #[error("Configuration error: {details}")]
    Config { details: String },

    #[error("Session '{session}' not found")]
    SessionNotFound { session: String },

    #[error("Session data provider failed: {reason}")]
    Provider {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Fixture file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StrategyError {
    /// Returns whether callers should report this error as "not found".
    pub fn is_not_found(&self) -> bool {
        match self {
            StrategyError::DriverNotFound { .. } => true,
            StrategyError::SessionNotFound { .. } => true,
            StrategyError::InsufficientData { .. } => true,
            StrategyError::InvalidRecord { .. } => false,
            StrategyError::InvalidStintSequence { .. } => false,
            StrategyError::Config { .. } => false,
            StrategyError::Provider { .. } => false,
            StrategyError::File { .. } => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            StrategyError::InsufficientData { .. } => vec![
                "Check the session identifier resolves to a completed session",
                "Verify the timing provider returned lap and stint records",
            ],
            StrategyError::DriverNotFound { .. } => vec![
                "Check the driver code spelling (three-letter abbreviation)",
                "Verify the driver took part in this session",
            ],
            StrategyError::InvalidRecord { .. } => vec![
                "Check lap and stint numbers start at 1",
                "Verify lap times are positive and finite",
            ],
            StrategyError::InvalidStintSequence { .. } => vec![
                "Check stint numbers are unique per driver",
                "Verify stint lap ranges do not overlap",
                "Verify each stint starts on the lap after the previous one ends",
            ],
            StrategyError::Config { .. } => vec![
                "Check the configuration file is valid YAML",
                "Verify numeric thresholds are within range",
            ],
            StrategyError::SessionNotFound { .. } => vec![
                "Check the session identifier",
                "Verify the provider has loaded this session",
            ],
            StrategyError::Provider { .. } => vec![
                "Retry the request",
                "Check the upstream timing provider is reachable",
            ],
            StrategyError::File { .. } => vec![
                "Check file exists and is readable",
                "Check file permissions",
            ],
        }
    }

    /// Helper constructor for insufficient data errors.
    pub fn insufficient_data(scope: impl Into<String>) -> Self {
        StrategyError::InsufficientData { scope: scope.into() }
    }

    /// Helper constructor for unknown driver codes. The code is uppercased.
    pub fn driver_not_found(driver: impl AsRef<str>) -> Self {
        StrategyError::DriverNotFound { driver: driver.as_ref().trim().to_uppercase() }
    }

    /// Helper constructor for record validation errors.
    pub fn invalid_record(record: &'static str, reason: impl Into<String>) -> Self {
        StrategyError::InvalidRecord { record, reason: reason.into() }
    }

    /// Helper constructor for stint sequence errors.
    pub fn invalid_stint_sequence(driver: impl Into<String>, reason: impl Into<String>) -> Self {
        StrategyError::InvalidStintSequence { driver: driver.into(), reason: reason.into() }
    }

    /// Helper constructor for configuration errors.
    pub fn config(details: impl Into<String>) -> Self {
        StrategyError::Config { details: details.into() }
    }

    /// Helper constructor for provider failures with source.
    pub fn provider_failed_with_source(
        reason: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        StrategyError::Provider { reason: reason.into(), source: Some(source) }
    }

    /// Helper constructor for fixture file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        StrategyError::File { path, source }
    }
}
