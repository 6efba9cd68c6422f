use thiserror::Error;

/// Failures returned by the session control surface.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No initialized speech engine is attached yet (model still unpacking,
    /// or unpacking failed).
    #[error("speech engine is not ready")]
    EngineNotReady,

    /// `start()` was called while a session is already in progress.
    #[error("already listening")]
    AlreadyListening,

    /// The engine failed while starting or stopping.
    #[error("engine failure: {0}")]
    Engine(anyhow::Error),
}

/// Failures returned by the note store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No authenticated owner; nothing was read or written.
    #[error("not authenticated")]
    Unauthenticated,

    /// Refused to create a note with empty transcribed text.
    #[error("transcribed text is empty")]
    EmptyTranscript,

    /// The note id does not exist (or was already deleted).
    #[error("note not found")]
    NotFound,

    /// The persistence backend failed, with its own message.
    #[error("note store unavailable: {0}")]
    Unavailable(String),
}
