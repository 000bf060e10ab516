//! A minimal fragment that injects a *static* string into the prompt.
//!
//! Use this for text that does not change between turns, such as the
//! persona instruction:
//!
//! ```rust
//! use fitbot_types::fragments::{PERSONA_INSTRUCTION, StaticFragment};
//! use fitbot_core::{generic::Role, template::IntoPrompt};
//!
//! let messages = StaticFragment::from(PERSONA_INSTRUCTION).into_prompt();
//! assert_eq!(messages[0].role, Role::System);
//! ```
//!
//! The `From<&str>` impl defaults to [`Role::System`] since system messages
//! are the most common static fragments.

use fitbot_core::{
    generic::{Message, Role},
    template::IntoPrompt,
};

/// A borrowed string bundled with the chat role it is sent under.
pub struct StaticFragment<'a>((&'a str, Role));

/// Shorthand so you can write `StaticFragment::from("…")` without specifying
/// the role each time. Defaults to **system**.
impl<'a> From<&'a str> for StaticFragment<'a> {
    fn from(value: &'a str) -> Self {
        Self((value, Role::System))
    }
}

impl<'a> StaticFragment<'a> {
    /// Create a new fragment with explicit role.
    pub fn new(value: &'a str, role: Role) -> Self {
        Self((value, role))
    }
}

impl IntoPrompt for StaticFragment<'_> {
    type Message = Message;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![Message::new(self.0.1, self.0.0)]
    }
}
