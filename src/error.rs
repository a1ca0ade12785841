//! Error types for strategy callbacks.
//!
//! Every callback returns [`Result`]. Nothing in the library swallows an error;
//! the catch-all barrier lives in [`StrategyHost`](crate::StrategyHost), which
//! logs and suppresses failures at the outermost call boundary.
//!
//! ## Error Categories
//!
//! - **Payload faults**: a required nested attribute is missing, a payload
//!   cannot be decoded, or an enumeration code is out of range
//! - **Configuration errors**: the host configuration file is unreadable or invalid
//!
//! ```rust
//! use v5strategy::StrategyError;
//!
//! let error = StrategyError::missing_attribute("SelfRobots[0].Position");
//! assert!(error.is_payload_fault());
//! assert!(error.to_string().contains("SelfRobots[0].Position"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for strategy operations.
pub type Result<T, E = StrategyError> = std::result::Result<T, E>;

/// Main error type for strategy operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StrategyError {
    #[error("Attribute '{path}' is missing from payload")]
    MissingAttribute { path: String },

    #[error("Decode error in {context}: {details}")]
    Decode { context: String, details: String },

    #[error("Unknown {kind} code {code}")]
    UnknownCode { kind: &'static str, code: i32 },

    #[error("Invalid configuration: {details}")]
    Config { details: String },

    #[error("Configuration file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StrategyError {
    /// Returns whether this error was caused by the content of an incoming payload.
    pub fn is_payload_fault(&self) -> bool {
        match self {
            StrategyError::MissingAttribute { .. } => true,
            StrategyError::Decode { .. } => true,
            StrategyError::UnknownCode { .. } => true,
            StrategyError::Config { .. } => false,
            StrategyError::File { .. } => false,
        }
    }

    /// Helper constructor for a missing required attribute.
    pub fn missing_attribute(path: impl Into<String>) -> Self {
        StrategyError::MissingAttribute { path: path.into() }
    }

    /// Helper constructor for payload decoding failures.
    pub fn decode(context: impl Into<String>, details: impl Into<String>) -> Self {
        StrategyError::Decode { context: context.into(), details: details.into() }
    }

    /// Helper constructor for out-of-range enumeration codes.
    pub fn unknown_code(kind: &'static str, code: i32) -> Self {
        StrategyError::UnknownCode { kind, code }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        StrategyError::File { path, source }
    }
}

impl From<std::io::Error> for StrategyError {
    fn from(err: std::io::Error) -> Self {
        StrategyError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}

impl From<serde_yaml_ng::Error> for StrategyError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        StrategyError::Decode { context: "YAML payload".to_string(), details: err.to_string() }
    }
}
