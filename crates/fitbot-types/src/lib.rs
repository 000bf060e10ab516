//! Domain pieces of FitBot that are not tied to any transport.
//!
//! * [`fragments`] – the persona instruction and goal-specific sub-prompts.
//! * [`health`] – BMI and daily-energy estimates.
//! * [`input`] – checks applied to raw user input.
pub mod fragments;
pub mod health;
pub mod input;
