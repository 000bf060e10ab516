//! Provider-agnostic building blocks of the FitBot chat core.
//!
//! * [`generic`] – chat messages, roles and the cumulative [`PartialReply`].
//! * [`history`] – normalizes caller-held chat history into messages.
//! * [`provider`] – the [`StreamingChatProvider`] trait and request parameters.
//! * [`error`] – the error taxonomy every backend converts into.
//!
//! [`PartialReply`]: generic::PartialReply
//! [`StreamingChatProvider`]: provider::StreamingChatProvider
pub mod error;
pub mod generic;
pub mod history;
pub mod model;
pub mod provider;
pub mod template;

pub use provider::{ChatCompleteParameters, GenerationConfig, StreamingChatProvider};
