//! Error types for oversize-checker

use thiserror::Error;

use crate::PackageField;

/// Reasons a package check is rejected instead of evaluated.
///
/// The `Display` text of each variant is the exact message placed in the
/// `error` field of the response payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The invocation context is not a well-formed record.
    #[error("Invalid JSON format in context")]
    MalformedInput,

    /// A dimension or the weight could not be coerced to a number.
    #[error("Invalid input: All dimensions and weight must be numeric values.")]
    NonNumericField { field: PackageField },

    /// Anything else that went wrong while processing the check.
    #[error("Error processing package check: {0}")]
    UnexpectedFailure(String),
}

impl EvaluationError {
    /// Short machine-readable kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            EvaluationError::MalformedInput => "malformed_input",
            EvaluationError::NonNumericField { .. } => "non_numeric_field",
            EvaluationError::UnexpectedFailure(_) => "unexpected_failure",
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(ConfigError::ParseError(err.to_string()))
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(ConfigError::SaveError(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
