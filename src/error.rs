//! Error types and handling infrastructure for renvelope.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types and `anyhow` for application-level error handling with context.
//!
//! The renderer itself is total over JSON values and never returns an error; the
//! variants here cover the surrounding pipeline — fetching an envelope, decoding
//! it, and routing the result to a display region.

use thiserror::Error;

/// The main error type for renvelope operations.
///
/// This enum covers the error conditions that can occur while obtaining an
/// envelope and driving the dispatch pipeline. Errors of this type always take
/// the error-render path, never the success formatter.
#[derive(Error, Debug)]
pub enum RenvelopeError {
    /// Network-level failure reported by the caller's transport
    #[error("Transport failed: {message}")]
    Transport { message: String },

    /// Response body was not valid JSON
    #[error("Response is not valid JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// A well-formed envelope that the backend flagged as a failure
    #[error("{message}")]
    Backend { message: String },

    /// Canned fixture for an endpoint could not be loaded
    #[error("Fixture error: {message}")]
    Fixture {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A response referenced a panel the controller does not own
    #[error("Unknown panel: {panel}")]
    UnknownPanel { panel: String },

    /// The fetch worker or its channel went away
    #[error("Fetch worker unavailable: {message}")]
    WorkerGone { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for renvelope operations.
///
/// This type alias provides a consistent error handling interface across
/// all modules in the renvelope codebase.
pub type Result<T> = std::result::Result<T, RenvelopeError>;

impl RenvelopeError {
    /// Create a Transport error with a descriptive message
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a Backend error carrying the failure message from an error envelope
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Create a Fixture error from an io::Error with additional context
    pub fn fixture_io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Fixture {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a Fixture error with a descriptive message only
    pub fn fixture(message: impl Into<String>) -> Self {
        Self::Fixture {
            message: message.into(),
            source: None,
        }
    }

    /// Create an UnknownPanel error for an unrecognized display region key
    pub fn unknown_panel(panel: impl Into<String>) -> Self {
        Self::UnknownPanel {
            panel: panel.into(),
        }
    }

    /// Create a WorkerGone error with a descriptive message
    pub fn worker_gone(message: impl Into<String>) -> Self {
        Self::WorkerGone {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}
