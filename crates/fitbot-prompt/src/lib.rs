//! Helpers for composing the messages FitBot sends.
//!
//! * [`builder::PromptBuilder`] renders markdown text line by line.
//! * [`chain::PromptChain`] concatenates prompt fragments into one ordered
//!   message list.
pub mod builder;
pub mod chain;
