use std::time::Duration;

use fitbot_core::error::FitbotError;
use reqwest::{StatusCode, header::InvalidHeaderValue};

/// Fixed message shown when no API key is configured.
pub const MISSING_API_KEY_MESSAGE: &str =
    "GROQ_API_KEY is not set. Add it to your environment (or a .env file) and restart.";

/// Every failure mode the Groq client can hit.
#[derive(Debug, thiserror::Error)]
pub enum GroqError {
    #[error("{}", MISSING_API_KEY_MESSAGE)]
    MissingApiKey,

    #[error("API key cannot be sent as a header: {0}")]
    InvalidApiKey(#[from] InvalidHeaderValue),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no response within {0:?}")]
    Timeout(Duration),

    #[error("Groq returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },
}

impl From<GroqError> for FitbotError {
    fn from(value: GroqError) -> Self {
        match value {
            GroqError::MissingApiKey | GroqError::InvalidApiKey(_) => {
                FitbotError::Configuration(value.to_string())
            }
            GroqError::Api { status, body } => FitbotError::UpstreamStatus {
                status: status.as_u16(),
                body,
            },
            GroqError::Http(_) | GroqError::Timeout(_) => FitbotError::Transport(Box::new(value)),
        }
    }
}
