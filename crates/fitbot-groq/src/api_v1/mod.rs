//! Wire types of Groq's OpenAI-compatible `v1` chat API.

/// Setters for the `Option<_>` fields of a request body; each one stores
/// `Some(value)` and returns the body for chaining.
macro_rules! optional_setters {
    ($body:ident { $($field:ident: $ty:ty),* $(,)? }) => {
        impl $body {
            $(
                pub fn $field(mut self, value: $ty) -> Self {
                    self.$field = Some(value);
                    self
                }
            )*
        }
    };
}

mod chat_completion;
mod chat_completion_stream;

pub use chat_completion::*;
pub use chat_completion_stream::*;
