use std::{env, sync::Arc};

use fitbot_core::error::{FitbotError, Result};

use crate::client::GroqClient;
use crate::error::MISSING_API_KEY_MESSAGE;

/// Thin wrapper that wires the HTTP client [`GroqClient`] into a value that
/// implements [`fitbot_core::StreamingChatProvider`].
///
/// The adapter owns a shareable, connection-pooled client; all user-facing
/// functionality goes through the provider trait.
pub struct GroqAdapter {
    pub(crate) client: Arc<GroqClient>,
}

/// Builder for [`GroqAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use fitbot_groq::GroqAdapterBuilder;
///
/// let backend = GroqAdapterBuilder::new_from_env()
///     .build()
///     .expect("GROQ_API_KEY must be set");
/// ```
#[derive(Default)]
pub struct GroqAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
}

impl GroqAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `GROQ_API_KEY` and the optional `GROQ_BASE_URL` from the
    /// environment, after loading a `.env` file if one exists.
    ///
    /// Never fails; a missing key only surfaces during [`Self::build`].
    pub fn new_from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            api_key: env::var("GROQ_API_KEY").ok(),
            base_url: env::var("GROQ_BASE_URL").ok().filter(|url| !url.is_empty()),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at another OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`FitbotError::Configuration`] – if the API key is missing or blank.
    pub fn build(self) -> Result<GroqAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| FitbotError::Configuration(MISSING_API_KEY_MESSAGE.into()))?;

        let client = GroqClient::with_http(api_key, reqwest::Client::new(), self.base_url);

        Ok(GroqAdapter {
            client: Arc::new(client),
        })
    }
}
