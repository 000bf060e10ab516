//! Normalizes caller-held chat history into a flat list of [`Message`]s.
//!
//! Chat front-ends hand over their history in one of two shapes:
//!
//! * **records** – `[{"role": "user", "content": "hi"}, …]`, already the
//!   wire format;
//! * **turns** – `[["hi", "hello!"], ["plan?", null], …]`, one pair per
//!   exchange where either side may be missing.
//!
//! The shape is decided once, when a [`History`] is built, and never
//! branched on afterwards. [`normalize`] flattens either variant:
//!
//! ```rust
//! use fitbot_core::generic::Message;
//! use fitbot_core::history::{normalize, History, Turn};
//!
//! let history = History::Turns(vec![Turn::new("hi", ""), Turn::new("", "hello!")]);
//! assert_eq!(
//!     normalize(history),
//!     vec![Message::user("hi"), Message::assistant("hello!")],
//! );
//! ```
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{FitbotError, Result},
    generic::Message,
    template::IntoPrompt,
};

/// Caller-supplied conversation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum History {
    /// Role/content records, passed through unchanged.
    Records(Vec<Message>),
    /// Paired user/assistant exchanges.
    Turns(Vec<Turn>),
}

impl Default for History {
    fn default() -> Self {
        History::Records(Vec::new())
    }
}

/// One exchange of a turn-shaped history. Absent and empty sides are
/// equivalent: neither produces a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Turn {
    pub user: Option<String>,
    pub assistant: Option<String>,
}

impl Turn {
    pub fn new(user: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            assistant: Some(assistant.into()),
        }
    }
}

impl From<(Option<String>, Option<String>)> for Turn {
    fn from((user, assistant): (Option<String>, Option<String>)) -> Self {
        Self { user, assistant }
    }
}

impl From<Vec<Message>> for History {
    fn from(value: Vec<Message>) -> Self {
        History::Records(value)
    }
}

impl From<Vec<Turn>> for History {
    fn from(value: Vec<Turn>) -> Self {
        History::Turns(value)
    }
}

/// Wire shape of a single history entry, used only while parsing JSON.
#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Record(Message),
    Turn(Option<String>, Option<String>),
}

impl History {
    /// Parse the opaque JSON list handed over by a chat front-end.
    ///
    /// # Errors
    ///
    /// * [`FitbotError::InvalidRequest`] – the value is not a list, an entry
    ///   is neither a `{role, content}` record nor a `[user, assistant]`
    ///   pair, or the list mixes both shapes.
    pub fn from_json(value: Value) -> Result<Self> {
        let Value::Array(entries) = value else {
            return Err(FitbotError::InvalidRequest(
                "history must be a JSON array".into(),
            ));
        };

        let mut records = Vec::new();
        let mut turns = Vec::new();

        for (index, raw) in entries.into_iter().enumerate() {
            let entry: Entry = serde_json::from_value(raw).map_err(|_| {
                FitbotError::InvalidRequest(format!(
                    "history entry {index} is neither a role/content record nor a user/assistant pair"
                ))
            })?;

            match entry {
                Entry::Record(message) => records.push(message),
                Entry::Turn(user, assistant) => turns.push(Turn { user, assistant }),
            }

            if !records.is_empty() && !turns.is_empty() {
                return Err(FitbotError::InvalidRequest(format!(
                    "history entry {index} mixes records and user/assistant pairs"
                )));
            }
        }

        if turns.is_empty() {
            Ok(History::Records(records))
        } else {
            Ok(History::Turns(turns))
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            History::Records(records) => records.is_empty(),
            History::Turns(turns) => turns.is_empty(),
        }
    }
}

/// Flatten a history into ordered messages.
///
/// Records are returned as-is. Each turn contributes its user message and
/// then its assistant message, skipping sides that are absent or empty.
pub fn normalize(history: History) -> Vec<Message> {
    match history {
        History::Records(records) => records,
        History::Turns(turns) => {
            let mut messages = Vec::with_capacity(turns.len() * 2);
            for turn in turns {
                if let Some(user) = turn.user.filter(|text| !text.is_empty()) {
                    messages.push(Message::user(user));
                }
                if let Some(assistant) = turn.assistant.filter(|text| !text.is_empty()) {
                    messages.push(Message::assistant(assistant));
                }
            }
            messages
        }
    }
}

impl IntoPrompt for History {
    type Message = Message;

    fn into_prompt(self) -> Vec<Self::Message> {
        normalize(self)
    }
}
