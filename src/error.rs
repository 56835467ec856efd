//! Error types for ferro-annotate
//!
//! Only query type resolution and the configuration/CLI layers can fail.
//! Notation conversion, fusion parsing, CNA classification and level
//! resolution are total and never produce an [`AnnotateError`].

use std::fmt;
use thiserror::Error;

/// Error codes for categorizing errors
///
/// These codes can be used for programmatic error handling
/// and for documentation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // Query type errors (E1xxx)
    /// Requested query type is missing its required columns
    InvalidQueryType = 1001,
    /// No query type can be derived from the available columns
    NoQueryTypeResolvable = 1002,
    /// Query type name not recognized
    UnknownQueryType = 1003,

    // Configuration errors (E8xxx)
    /// Invalid configuration value
    InvalidConfig = 8001,

    // IO errors (E9xxx)
    /// File IO error
    IoError = 9001,
    /// JSON parsing error
    JsonError = 9002,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("E{:04}", *self as u16)
    }

    /// Get a brief description of this error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidQueryType => "query type is missing required columns",
            ErrorCode::NoQueryTypeResolvable => "no query type can be resolved",
            ErrorCode::UnknownQueryType => "unknown query type",
            ErrorCode::InvalidConfig => "invalid configuration",
            ErrorCode::IoError => "file I/O error",
            ErrorCode::JsonError => "JSON parsing error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for ferro-annotate operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnotateError {
    /// The requested query type cannot be used with the available columns
    #[error("Query type {query_type} requires column(s) {missing:?}, which are not present")]
    InvalidQueryType {
        query_type: String,
        missing: Vec<String>,
    },

    /// No query type was requested and none could be derived from the columns
    #[error("Cannot resolve a query type from columns {headers:?}")]
    NoQueryTypeResolvable { headers: Vec<String> },

    /// A query type name could not be parsed
    #[error("Unknown query type: {value}")]
    UnknownQueryType { value: String },

    /// Configuration file or value error
    #[error("Configuration error: {msg}")]
    Config { msg: String },

    /// IO error
    #[error("IO error: {msg}")]
    Io { msg: String },

    /// JSON error
    #[error("JSON error: {msg}")]
    Json { msg: String },
}

impl AnnotateError {
    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AnnotateError::InvalidQueryType { .. } => ErrorCode::InvalidQueryType,
            AnnotateError::NoQueryTypeResolvable { .. } => ErrorCode::NoQueryTypeResolvable,
            AnnotateError::UnknownQueryType { .. } => ErrorCode::UnknownQueryType,
            AnnotateError::Config { .. } => ErrorCode::InvalidConfig,
            AnnotateError::Io { .. } => ErrorCode::IoError,
            AnnotateError::Json { .. } => ErrorCode::JsonError,
        }
    }

    /// Format the error prefixed with its code, e.g. `[E1002] Cannot resolve ...`
    pub fn detailed_message(&self) -> String {
        format!("[{}] {}", self.code(), self)
    }
}

impl From<std::io::Error> for AnnotateError {
    fn from(err: std::io::Error) -> Self {
        AnnotateError::Io {
            msg: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AnnotateError {
    fn from(err: serde_json::Error) -> Self {
        AnnotateError::Json {
            msg: err.to_string(),
        }
    }
}
