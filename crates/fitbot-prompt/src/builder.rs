//! Builder-style helper for constructing **markdown prompt text**.
//!
//! Writing multi-line prompt strings inline is tedious and easy to get
//! subtly wrong (a missing newline changes what the model sees).
//! `PromptBuilder` offers a fluent API where every method returns `self`:
//!
//! ```rust
//! use fitbot_prompt::builder::PromptBuilder;
//!
//! let md = PromptBuilder::new()
//!     .add_blank_line()
//!     .add_line("Focus on:")
//!     .add_bullet("Progressive overload")
//!     .finalize();
//!
//! assert_eq!(md, "\nFocus on:\n- Progressive overload\n");
//! ```
//!
//! Newlines and whitespace are emitted exactly as requested; the builder
//! never reflows or trims text.

use std::fmt::{Display, Write as _};

/// Fluent helper to produce markdown fragments.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you’re done, call [`Self::finalize`] to obtain the assembled text.
pub struct PromptBuilder {
    buffer: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Start from existing text, e.g. a fixed instruction that further
    /// sections are appended to.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            buffer: text.into(),
        }
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        // Writing into a `String` cannot fail.
        let _ = writeln!(self.buffer, "{line}");
        self
    }

    /// Add a `- item` bullet and a trailing newline.
    pub fn add_bullet(mut self, item: impl Display) -> Self {
        let _ = writeln!(self.buffer, "- {item}");
        self
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}
