//! Model identifiers used throughout the **fitbot** workspace.
//!
//! Pick an enum variant for the models FitBot ships with and let the
//! provider crate translate it into the wire name. Anything else (a newer or
//! preview model) goes through [`Model::Custom`].
//!
//! ```rust
//! use fitbot_core::model::{GroqModel, Model};
//! assert_eq!(Model::default(), Model::Groq(GroqModel::Llama3_3_70bVersatile));
//! assert_eq!(Model::from(GroqModel::Llama3_1_8bInstant),
//!            Model::Groq(GroqModel::Llama3_1_8bInstant));
//! ```
use std::borrow::Cow;

/// Universal identifier for an LLM model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Built-in Groq models (chat completion API).
    Groq(GroqModel),
    /// Any model id not covered by [`GroqModel`], sent verbatim.
    Custom(Cow<'static, str>),
}

impl Default for Model {
    fn default() -> Self {
        Model::Groq(GroqModel::Llama3_3_70bVersatile)
    }
}

/// Models **officially** supported by the Groq back-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroqModel {
    Llama3_3_70bVersatile,
    Llama3_1_8bInstant,
}

impl From<GroqModel> for Model {
    fn from(val: GroqModel) -> Self {
        Model::Groq(val)
    }
}

impl From<String> for Model {
    fn from(val: String) -> Self {
        Model::Custom(val.into())
    }
}
