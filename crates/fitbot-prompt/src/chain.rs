//! Simple **builder** that concatenates multiple values implementing
//! [`IntoPrompt`](fitbot_core::template::IntoPrompt).
//!
//! ```text
//! ┌────────────────┐    IntoPrompt     ┌────────────────┐
//! │ Persona        │ ─────────────────►│ [system]       │
//! ├────────────────┤                   ├────────────────┤
//! │ History        │ ─────────────────►│ [user, asst…]  │
//! ├────────────────┤                   ├────────────────┤
//! │ Message::user  │ ─────────────────►│ [user]         │
//! └────────────────┘                   └────────────────┘
//!            ▲                                     │
//!            └────────── PromptChain::build() ◄────┘
//! ```
//!
//! Every chat turn rebuilds its conversation this way: the persona first,
//! then the normalized history, then the new user message.
//!
//! ```rust
//! use fitbot_core::generic::Message;
//! use fitbot_core::history::{History, Turn};
//! use fitbot_prompt::chain::PromptChain;
//!
//! let messages: Vec<Message> = PromptChain::new()
//!     .with(Message::system("You are a fitness coach."))
//!     .with(History::Turns(vec![Turn::new("hi", "hello!")]))
//!     .with(Message::user("Build me a plan."))
//!     .build();
//!
//! assert_eq!(messages.len(), 4);
//! ```
use fitbot_core::template::IntoPrompt;

/// Lightweight container that accumulates messages produced by
/// [`IntoPrompt`] implementors.
///
/// The single `Vec` field is kept private so the only way to obtain the result
/// is through [`Self::build`], ensuring the builder API remains fluent.
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `with` to the chain, keeping their
    /// order.
    pub fn with(mut self, with: impl IntoPrompt<Message = Message>) -> Self {
        self.0.append(&mut with.into_prompt());
        self
    }

    /// Consume the builder and return the accumulated messages.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitbot_core::generic::{Message, Role};
    use fitbot_core::history::{History, Turn};
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_fragment_order() {
        let messages = PromptChain::new()
            .with(Message::system("persona"))
            .with(History::Turns(vec![Turn::new("q1", ""), Turn::new("", "a1")]))
            .with(Message::user("q2"))
            .build();

        let roles: Vec<Role> = messages.iter().map(|message| message.role).collect();
        assert_eq!(
            roles,
            vec![Role::System, Role::User, Role::Assistant, Role::User]
        );
        assert_eq!(messages[3].content, "q2");
    }

    #[test]
    fn empty_history_adds_nothing() {
        let messages = PromptChain::new()
            .with(Message::system("persona"))
            .with(History::default())
            .build();

        assert_eq!(messages, vec![Message::system("persona")]);
    }
}
