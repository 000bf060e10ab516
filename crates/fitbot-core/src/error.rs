//! Unified error type exposed by **`fitbot-core`**.
//!
//! Backend crates convert their internal errors into one of these variants
//! before handing them to the caller. Only configuration, upstream status and
//! transport failures ever end a reply stream; a malformed stream frame is
//! recovered inside the decoder and has no variant here.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, FitbotError>;

#[derive(Debug, Error)]
pub enum FitbotError {
    /// Required configuration (usually the API key) is missing or unusable.
    /// Raised before any network call is attempted.
    #[error("{0}")]
    Configuration(String),

    /// The completion endpoint answered with a non-success status.
    #[error("upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Connection, DNS, timeout or body-read failure.
    #[error("transport failure: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid: {0}")]
    Invalid(String),
}
