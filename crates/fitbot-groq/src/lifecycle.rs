use tracing::{debug, trace, warn};

use crate::error::GroqError;

/// Where a single streamed completion is in its life.
///
/// `NotStarted → Streaming → (Done | Failed)`; a failure may also happen
/// before dispatch (missing key, bad header).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StreamState {
    NotStarted,
    Streaming,
    Done,
    Failed,
}

/// Tracks one stream and logs how it ended when dropped.
///
/// Lives inside the stream generator next to the response it owns, so it is
/// dropped together with the connection on every exit path. Dropping it while
/// still `Streaming` means the consumer abandoned the stream.
#[derive(Debug)]
pub(crate) struct StreamLifecycle {
    state: StreamState,
    frames: usize,
    skipped: usize,
}

impl StreamLifecycle {
    pub(crate) fn new() -> Self {
        Self {
            state: StreamState::NotStarted,
            frames: 0,
            skipped: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> StreamState {
        self.state
    }

    pub(crate) fn dispatched(&mut self) {
        if self.state == StreamState::NotStarted {
            self.state = StreamState::Streaming;
        }
    }

    pub(crate) fn frame(&mut self) {
        self.frames += 1;
    }

    pub(crate) fn skipped(&mut self, reason: &str) {
        self.skipped += 1;
        trace!(reason, "skipping undecodable stream frame");
    }

    pub(crate) fn done(&mut self) {
        if self.state == StreamState::Streaming {
            self.state = StreamState::Done;
        }
    }

    pub(crate) fn failed(&mut self, err: &GroqError) {
        if matches!(self.state, StreamState::NotStarted | StreamState::Streaming) {
            self.state = StreamState::Failed;
            warn!(error = %err, "chat completion stream failed");
        }
    }
}

impl Drop for StreamLifecycle {
    fn drop(&mut self) {
        match self.state {
            StreamState::Streaming => debug!(
                frames = self.frames,
                skipped = self.skipped,
                "stream abandoned by consumer; releasing connection"
            ),
            StreamState::Done => debug!(
                frames = self.frames,
                skipped = self.skipped,
                "stream complete"
            ),
            StreamState::NotStarted | StreamState::Failed => {}
        }
    }
}
