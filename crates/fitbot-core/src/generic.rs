//! Message and role types shared by every FitBot crate.
//!
//! They mirror the three roles a chat-completion API understands: “system”,
//! “user” and “assistant”. Content is opaque text; nothing in the workspace
//! re-interprets, trims or merges it.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single chat message.
///
/// Serializes as `{"role": "user", "content": "…"}`, which is also the shape
/// accepted from callers that already keep their history as records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Convenience constructor mirroring the field order used by common HTTP
    /// APIs (`role`, then `content`).
    ///
    /// ```rust
    /// use fitbot_core::generic::{Message, Role};
    ///
    /// let sys = Message::new(Role::System, "You are a fitness coach.");
    /// assert_eq!(sys.role.to_string(), "system");
    /// ```
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Chat roles recognised by the completion endpoint.
///
/// The `Display` implementation renders the canonical lowercase name, the
/// same string serde uses on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Global behaviour and persona instructions.
    System,
    /// Messages originating from the human user.
    User,
    /// Messages produced by the model.
    Assistant,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// Append-only accumulator for the reply of a single streamed request.
///
/// Every snapshot handed out by [`PartialReply::push`] extends the previous
/// one; the buffer never shrinks. Create a fresh value per request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PartialReply(String);

impl PartialReply {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `delta` and return the full text so far.
    ///
    /// Empty deltas leave the reply untouched and return `None`, so callers
    /// never emit the same snapshot twice.
    pub fn push(&mut self, delta: &str) -> Option<&str> {
        if delta.is_empty() {
            return None;
        }
        self.0.push_str(delta);
        Some(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
