//! Groq backend for FitBot.
//!
//! Talks to Groq's OpenAI-compatible `chat/completions` endpoint and turns
//! its server-sent-event stream into cumulative reply snapshots.
//!
//! ```rust,no_run
//! use fitbot_core::{ChatCompleteParameters, StreamingChatProvider as _};
//! use fitbot_core::{generic::Message, model::Model};
//! use fitbot_groq::GroqAdapterBuilder;
//! use futures_util::StreamExt;
//!
//! # async fn run() -> fitbot_core::error::Result<()> {
//! let backend = GroqAdapterBuilder::new_from_env().build()?;
//! let params = ChatCompleteParameters::new(
//!     vec![Message::system("You are terse."), Message::user("Hi!")],
//!     Model::default(),
//! );
//!
//! let mut replies = backend.chat_complete_stream(params);
//! while let Some(snapshot) = replies.next().await {
//!     println!("{}", snapshot?);
//! }
//! # Ok(())
//! # }
//! ```
mod adapter;
mod lifecycle;
mod model_map;
mod provider_impl_chat_stream;

pub use adapter::{GroqAdapter, GroqAdapterBuilder};
pub use client::{DEFAULT_BASE_URL, GroqClient};
pub mod api_v1;
mod client;
pub mod error;
pub mod sse;
