//! Error types for testrail-client
//!
//! This module defines the error hierarchy used throughout the crate.
//! Library errors are `thiserror` enums; the binary wraps them in `anyhow`
//! at the boundary.

use crate::client::ResponseShape;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("TestRail API error: {0}")]
    TestRail(#[from] TestRailError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Missing required configuration: {field}")]
    Missing { field: String },
}

/// Errors surfaced by request execution.
///
/// Every variant belongs to exactly one [`ErrorKind`]; see [`TestRailError::kind`].
#[derive(Error, Debug)]
pub enum TestRailError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Resource not found: {message}")]
    NotFound { message: String },

    #[error("Rate limited, gave up after {attempts} attempts")]
    RateLimited {
        attempts: u32,
        /// Last wait hint sent by the server, in seconds
        retry_after: Option<u64>,
    },

    #[error("TestRail server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    #[error("Request rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("Expected {expected} response, got {found}")]
    DecodeMismatch {
        expected: ResponseShape,
        found: &'static str,
    },
}

/// Coarse classification of [`TestRailError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimited,
    ServerError,
    Rejected,
    Transport,
    DecodeMismatch,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not found",
            ErrorKind::RateLimited => "rate limited",
            ErrorKind::ServerError => "server error",
            ErrorKind::Rejected => "rejected",
            ErrorKind::Transport => "transport error",
            ErrorKind::DecodeMismatch => "decode mismatch",
        };
        f.write_str(name)
    }
}

/// TestRail error body: `{"error": "..."}`
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl TestRailError {
    /// Create an appropriate error from a failed HTTP status and its body.
    ///
    /// Throttling (429) is resolved by the request executor, which retries or
    /// reports [`TestRailError::RateLimited`] with the real attempt count, so
    /// it has no arm of its own here.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = error_message(status, body);
        match status {
            401 => TestRailError::Unauthorized { message },
            403 => TestRailError::Forbidden { message },
            404 => TestRailError::NotFound { message },
            500..=599 => TestRailError::Server { status, message },
            _ => TestRailError::Rejected { status, message },
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        TestRailError::InvalidArgument(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TestRailError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            TestRailError::Unauthorized { .. } => ErrorKind::Unauthorized,
            TestRailError::Forbidden { .. } => ErrorKind::Forbidden,
            TestRailError::NotFound { .. } => ErrorKind::NotFound,
            TestRailError::RateLimited { .. } => ErrorKind::RateLimited,
            TestRailError::Server { .. } => ErrorKind::ServerError,
            TestRailError::Rejected { .. } => ErrorKind::Rejected,
            TestRailError::Transport(_) | TestRailError::MalformedBody(_) => ErrorKind::Transport,
            TestRailError::DecodeMismatch { .. } => ErrorKind::DecodeMismatch,
        }
    }

    /// Only throttling is retried; everything else surfaces on first sight.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TestRailError::RateLimited { .. })
    }
}

fn error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status)
    } else {
        trimmed.to_string()
    }
}

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No credentials configured")]
    NotConfigured,

    #[error("Username must not be empty")]
    MissingUsername,

    #[error("API key must not be empty")]
    MissingApiKey,

    #[error("Authentication failed: {0}")]
    Failed(String),
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for TestRail API operations
pub type TestRailResult<T> = std::result::Result<T, TestRailError>;
