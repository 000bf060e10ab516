//! # `fitbot` – The umbrella crate
//!
//! One dependency for the whole FitBot chat core:
//!
//! | Crate               | What it provides                                                    |
//! |---------------------|---------------------------------------------------------------------|
//! | **`fitbot-core`**   | Messages, history normalization, the streaming provider trait, errors |
//! | **`fitbot-prompt`** | Prompt builder and chain helpers                                    |
//! | **`fitbot-types`**  | Persona instruction, goal prompts, BMI and TDEE helpers             |
//! | **`fitbot-groq`**   | Groq streaming backend *(feature `groq`, on by default)*            |
//!
//! [`FitBot`] drives one chat turn: it puts the persona in front of the
//! caller's history, sends the conversation to the backend and hands back
//! the growing reply.
//!
//! ```rust,no_run
//! use fitbot::{FitBot, history::History};
//! use futures_util::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let bot = FitBot::from_env()?;
//!     let mut reply = std::pin::pin!(bot.respond("Hi, I want to get stronger.", History::default()));
//!     while let Some(text) = reply.next().await {
//!         println!("{text}");
//!     }
//!     Ok(())
//! }
//! ```
#![doc(html_root_url = "https://docs.rs/fitbot/latest")]

mod bot;

pub use bot::{FitBot, render_error};
pub use fitbot_core::*;
pub use fitbot_prompt as prompt;
pub use fitbot_types as types;

#[cfg(feature = "groq")]
pub use fitbot_groq as groq;
