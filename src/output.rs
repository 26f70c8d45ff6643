//! Output channel for generation logs.
//!
//! The orchestrator writes one line per invocation attempt plus the outcome
//! message. The sink is passed in explicitly rather than living in a global.

use std::sync::{Arc, Mutex, PoisonError};

/// Append-only text channel.
pub trait OutputSink: Send + Sync {
    /// Appends `text` followed by a newline.
    fn append_line(&self, text: &str);
}

/// Sink that forwards every line to `tracing` on the `gounit` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingOutput;

impl OutputSink for TracingOutput {
    fn append_line(&self, text: &str) {
        tracing::info!(target: "gounit", "{}", text);
    }
}

/// Sink that keeps everything in memory.
///
/// Clones share the same buffer, so the IDE bridge can hand one clone to the
/// orchestrator and read the collected lines back afterwards.
#[derive(Debug, Default, Clone)]
pub struct MemoryOutput {
    buffer: Arc<Mutex<String>>,
}

impl MemoryOutput {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything appended so far.
    #[must_use]
    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the appended text split into lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl OutputSink for MemoryOutput {
    fn append_line(&self, text: &str) {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        buffer.push_str(text);
        buffer.push('\n');
    }
}
