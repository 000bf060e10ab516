//! Turning values into chat messages.
//!
//! [`IntoPrompt`] is the single seam between prompt *fragments* (persona
//! text, normalized history, the new user message) and the request that is
//! eventually sent. Fragments are concatenated with
//! `fitbot_prompt::chain::PromptChain`.

/// Converts a value into a series of chat messages.
///
/// The `Message` type is an **associated type** so a back-end could accept a
/// richer struct, but every fragment in this workspace emits
/// [`crate::generic::Message`].
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// A single message is a prompt of length one.
impl IntoPrompt for crate::generic::Message {
    type Message = crate::generic::Message;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}

impl IntoPrompt for Vec<crate::generic::Message> {
    type Message = crate::generic::Message;

    fn into_prompt(self) -> Vec<Self::Message> {
        self
    }
}
