use serde::{Deserialize, Serialize};

/// Lifecycle state of a recognition session.
///
/// Owned by the `SessionController`; everything else observes it read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No session in progress; `start()` is valid.
    Idle,
    /// The engine is consuming audio and emitting events.
    Listening,
    /// `stop()` was requested; waiting for the engine to acknowledge. Events
    /// still in flight are applied to the transcript.
    Stopping,
}
