pub mod config;
pub mod engine;
pub mod error;
pub mod http;
pub mod identity;
pub mod session;
pub mod store;

pub use config::Config;
pub use engine::{
    EngineFactory, EngineSource, ModelStorage, RecognitionEvent, ScriptedEngine, SpeechEngine,
    UnpackedModel,
};
pub use error::{SessionError, StoreError};
pub use http::{create_router, AppState};
pub use identity::{IdentityGate, StaticIdentity};
pub use session::{
    SessionController, SessionState, SessionStatus, TranscriptBuffer, TranscriptSnapshot,
};
pub use store::{DocumentBackend, MemoryBackend, Note, NoteDocument, NoteStore};
