//! Decoding of the `text/event-stream` body returned when `stream = true`.
//!
//! The body is a sequence of newline-terminated lines:
//!
//! ```text
//! data: {"choices":[{"delta":{"content":"Hel"}}]}
//!
//! data: {"choices":[{"delta":{"content":"lo"}}]}
//!
//! data: [DONE]
//! ```
//!
//! [`LineBuffer`] reassembles lines from arbitrarily split network chunks and
//! [`decode_frame`] classifies each line. A line that cannot be decoded is
//! reported as [`Frame::Malformed`] and the caller moves on to the next one.
use bytes::{Bytes, BytesMut};

use crate::api_v1::ChatCompletionChunkResponse;

/// Payload that ends the stream.
pub const DONE_SENTINEL: &str = "[DONE]";

const DATA_PREFIX: &str = "data:";

/// Outcome of decoding a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Blank line, comment, or a fragment without text.
    Skip,
    /// Non-empty text from `choices[0].delta.content`.
    Delta(String),
    /// The end-of-stream sentinel.
    Done,
    /// The line could not be decoded; carries the reason for logging.
    Malformed(String),
}

/// Classify one line of the event stream (without its line terminator).
pub fn decode_frame(line: &[u8]) -> Frame {
    let Ok(line) = std::str::from_utf8(line) else {
        return Frame::Malformed("line is not valid UTF-8".into());
    };

    if line.trim().is_empty() || line.starts_with(':') {
        return Frame::Skip;
    }

    let payload = match line.strip_prefix(DATA_PREFIX) {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    };

    if payload.trim() == DONE_SENTINEL {
        return Frame::Done;
    }

    match serde_json::from_str::<ChatCompletionChunkResponse>(payload) {
        Ok(chunk) => chunk.first_delta_text().map_or(Frame::Skip, Frame::Delta),
        Err(err) => Frame::Malformed(err.to_string()),
    }
}

/// Byte buffer that yields complete lines as they become available.
///
/// Lines end with `\n`, `\r\n` or a lone `\r`. Bytes are kept raw until a
/// terminator arrives, so a multi-byte character split across two network
/// chunks is decoded intact.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buf: BytesMut,
}

impl LineBuffer {
    pub fn extend(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Next complete line, if one is buffered.
    ///
    /// A `\r` at the very end of the buffer is held back until the next
    /// byte shows whether it starts a `\r\n` pair.
    pub fn next_line(&mut self) -> Option<Bytes> {
        let pos = self
            .buf
            .iter()
            .position(|byte| matches!(byte, b'\n' | b'\r'))?;
        let terminator = match (self.buf[pos], self.buf.get(pos + 1)) {
            (b'\r', Some(b'\n')) => 2,
            (b'\r', None) => return None,
            _ => 1,
        };
        let mut line = self.buf.split_to(pos + terminator);
        line.truncate(pos);
        Some(line.freeze())
    }

    /// Whatever is left once the input is exhausted: a final line that had
    /// no terminator.
    pub fn finish(&mut self) -> Option<Bytes> {
        if self.buf.is_empty() {
            return None;
        }
        let mut line = self.buf.split();
        if line.last() == Some(&b'\r') {
            line.truncate(line.len() - 1);
        }
        Some(line.freeze())
    }
}
