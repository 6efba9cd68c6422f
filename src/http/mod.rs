//! HTTP API server for the note-taking frontend
//!
//! This module provides a REST API over the session controller and note
//! store:
//! - POST /session/start - Begin a listening session
//! - POST /session/stop - End the current session
//! - GET /session/status - State, transcript, and last error
//! - POST /notes - Save the transcript as a note
//! - GET /notes - List the owner's notes, newest first
//! - DELETE /notes/:id - Permanently remove a note
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
