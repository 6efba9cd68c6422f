/// A single result emitted by a speech engine while a session is listening.
///
/// One session produces zero or more `Partial` events followed by exactly one
/// terminal event (`Final`, `Error`, or `Timeout`). Events are consumed by the
/// session controller and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// Provisional hypothesis for in-progress speech. Each one replaces the
    /// previous partial wholesale.
    Partial(String),

    /// Recognition output for a completed utterance. Commits text to the
    /// transcript and ends the session.
    Final(String),

    /// Engine failure, with the engine's own message. Terminal.
    Error(String),

    /// The engine gave up waiting for speech. Terminal.
    Timeout,
}

impl RecognitionEvent {
    /// Whether this event ends the session.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RecognitionEvent::Partial(_))
    }
}
