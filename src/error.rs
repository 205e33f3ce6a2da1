//! Error types for the RaniClean site core.
//!
//! Storage problems never surface here: the locale resolver and switcher
//! degrade silently when browser-style storage is missing. These errors
//! cover configuration, user input and the email relay.

use std::io;
use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (invalid config file, bad endpoint URL).
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file operations, state directory access).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Command-line usage error, already reported by the argument parser.
    #[error("")]
    Usage,

    /// A page path that does not start with a supported locale segment.
    #[error("Invalid page path '{0}': expected /en/... or /de/...")]
    InvalidPath(String),

    /// Contact form failed validation. Carries the localized messages.
    #[error("{}", .0.join("\n"))]
    Validation(Vec<String>),

    /// The email relay rejected or failed to deliver a submission.
    ///
    /// The message is already localized for the visitor.
    #[error("{0}")]
    Relay(String),

    /// HTTP transport error talking to the email relay.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// General/unspecified error.
    #[error("{0}")]
    Other(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the process exit code for this error type.
    ///
    /// - 1: General error
    /// - 2: Invalid arguments or configuration
    /// - 4: Contact form validation failed
    /// - 10: Network error
    /// - 11: Email relay error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::InvalidArgument(_) | Self::Usage | Self::InvalidPath(_) => 2,
            Self::Validation(_) => 4,
            Self::Io(_) | Self::Http(_) => 10,
            Self::Relay(_) => 11,
            Self::Json(_) | Self::Yaml(_) | Self::Other(_) => 1,
        }
    }

    /// Returns true if a failed contact submission can be retried from its draft.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Relay(_) | Self::Http(_))
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an invalid path error.
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath(path.into())
    }

    /// Create a relay error.
    pub fn relay(msg: impl Into<String>) -> Self {
        Self::Relay(msg.into())
    }

    /// Create a general error.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
