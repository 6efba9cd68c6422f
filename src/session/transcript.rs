use serde::{Deserialize, Serialize};

/// Accumulates recognized text across the utterances of one session.
///
/// Plain data structure, owned and mutated only by the session controller.
/// Finalized fragments are append-only in arrival order; the partial fragment
/// is replaced wholesale by each new partial result.
#[derive(Debug, Clone, Default)]
pub struct TranscriptBuffer {
    finalized: Vec<String>,
    partial: String,
}

/// Point-in-time copy of the buffer contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSnapshot {
    /// Finalized fragments joined with newlines, oldest first
    pub finalized_text: String,
    /// Current provisional fragment (may be empty)
    pub partial_text: String,
}

impl TranscriptBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the partial fragment.
    pub fn set_partial(&mut self, text: impl Into<String>) {
        self.partial = text.into();
    }

    /// Append a finalized fragment. Empty text is a no-op; some engines emit
    /// an empty final result when no speech was recognized.
    pub fn commit_final(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.finalized.push(text.to_string());
    }

    pub fn snapshot(&self) -> TranscriptSnapshot {
        TranscriptSnapshot {
            finalized_text: self.finalized.join("\n"),
            partial_text: self.partial.clone(),
        }
    }

    /// Finalized fragments in arrival order.
    pub fn fragments(&self) -> &[String] {
        &self.finalized
    }

    /// Whether any text has been finalized.
    pub fn is_empty(&self) -> bool {
        self.finalized.is_empty()
    }

    /// Reset both fragments. Called when a note was persisted successfully or
    /// the user discards the session.
    pub fn clear(&mut self) {
        self.finalized.clear();
        self.partial.clear();
    }
}
