use fitbot_core::generic::{Message, Role};
use fitbot_core::provider::ChatCompleteParameters;
use serde::{Deserialize, Serialize};

use crate::model_map::map_model;

/// Body of `POST /chat/completions`.
#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model,
            messages,
            max_tokens: None,
            temperature: None,
            top_p: None,
            stream: None,
        }
    }
}

optional_setters!(ChatCompletionRequest {
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
    stream: bool,
});

impl From<ChatCompleteParameters> for ChatCompletionRequest {
    fn from(value: ChatCompleteParameters) -> Self {
        let config = value.config;
        Self::new(
            map_model(value.model).into_owned(),
            value.messages.into_iter().map(Into::into).collect(),
        )
        .max_tokens(config.max_output_tokens)
        .temperature(config.temperature)
        .top_p(config.nucleus_probability)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl From<Role> for MessageRole {
    fn from(value: Role) -> Self {
        match value {
            Role::System => MessageRole::System,
            Role::User => MessageRole::User,
            Role::Assistant => MessageRole::Assistant,
        }
    }
}

/// A conversation entry as sent on the wire. Content is sent verbatim, empty
/// strings included.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: String,
}

impl From<Message> for ChatCompletionMessage {
    fn from(value: Message) -> Self {
        Self {
            role: value.role.into(),
            content: value.content,
        }
    }
}
