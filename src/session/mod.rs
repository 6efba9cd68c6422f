//! Recognition session management
//!
//! This module provides the `SessionController` abstraction that manages:
//! - Speech engine lifecycle (start, stop, terminal events)
//! - The Idle / Listening / Stopping state machine
//! - Transcript accumulation (partial and finalized fragments)
//! - The save path into the note store

mod controller;
mod state;
mod status;
mod transcript;

pub use controller::SessionController;
pub use state::SessionState;
pub use status::SessionStatus;
pub use transcript::{TranscriptBuffer, TranscriptSnapshot};
