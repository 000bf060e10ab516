use std::time::Duration;

use crate::{error::Result, generic::Message, model::Model};
use futures_core::stream::Stream;

/// A provider that delivers the model’s answer **incrementally**.
///
/// Unlike a raw delta stream, every item is the *cumulative* reply text so
/// far: each snapshot extends the previous one, so a display can simply
/// replace what it shows with the latest item.
///
/// A call issues exactly one request. The returned stream is single-pass;
/// dropping it early releases the underlying connection.
pub trait StreamingChatProvider: Send + Sync {
    /// Stream of reply snapshots.
    type Snapshots<'s>: Stream<Item = Result<String>> + Send + 's
    where
        Self: 's;

    /// Start a streaming chat completion.
    fn chat_complete_stream(&self, params: ChatCompleteParameters) -> Self::Snapshots<'_>;
}

/// Sampling and transport settings for one completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Hard cap on generated tokens.
    pub max_output_tokens: u32,
    /// 0 = greedy, 1 = very random.
    pub temperature: f64,
    /// Nucleus sampling probability mass cutoff (`top_p`).
    pub nucleus_probability: f64,
    /// How long to wait for the endpoint to start responding.
    pub request_timeout: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: 1024,
            temperature: 0.7,
            nucleus_probability: 0.92,
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl GenerationConfig {
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_nucleus_probability(mut self, nucleus_probability: f64) -> Self {
        self.nucleus_probability = nucleus_probability;
        self
    }

    pub fn with_request_timeout_seconds(mut self, seconds: u64) -> Self {
        self.request_timeout = Duration::from_secs(seconds);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ChatCompleteParameters {
    pub messages: Vec<Message>,
    pub model: Model,
    pub config: GenerationConfig,
}

impl ChatCompleteParameters {
    pub fn new(messages: Vec<Message>, model: Model) -> Self {
        Self {
            messages,
            model,
            config: GenerationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_defaults_match_fitbot_settings() {
        let config = GenerationConfig::default();
        assert_eq!(config.max_output_tokens, 1024);
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.nucleus_probability, 0.92);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn builder_methods_override_single_fields() {
        let config = GenerationConfig::default()
            .with_temperature(0.0)
            .with_request_timeout_seconds(5);
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.max_output_tokens, 1024);
    }
}
