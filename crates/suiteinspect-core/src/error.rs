//! Error types for SuiteInspect

use thiserror::Error;

/// Main error type for SuiteInspect operations
#[derive(Error, Debug)]
pub enum SuiteInspectError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A selected inspector has no matching check body
    #[error("Unknown inspector: {0}")]
    UnknownInspector(String),

    /// A descriptor document is missing required fields or unparsable
    #[error("Malformed descriptor {path}: {message}")]
    MalformedDescriptor { path: String, message: String },

    /// A check body failed while running
    #[error("Inspector {inspector} failed: {message}")]
    ExecutionFailure { inspector: String, message: String },

    /// A required template region marker pair is absent or unbalanced
    #[error("Template region missing or unterminated: {0}")]
    TemplateRegionMissing(String),

    /// The report or a sidecar file cannot be written
    #[error("Cannot write output {path}: {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A service handle required by a check is not connected
    #[error("Service not connected: {0}")]
    ServiceUnavailable(String),

    /// A read-only service query failed
    #[error("Query failed: {0}")]
    Query(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SuiteInspectError {
    fn from(err: serde_json::Error) -> Self {
        SuiteInspectError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for SuiteInspectError {
    fn from(err: serde_yaml::Error) -> Self {
        SuiteInspectError::Serialization(err.to_string())
    }
}

/// Result type alias for SuiteInspect operations
pub type Result<T> = std::result::Result<T, SuiteInspectError>;
