use std::sync::Arc;

use crate::session::SessionController;
use crate::store::NoteStore;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The one recognition session controller for this service
    pub controller: Arc<SessionController>,

    /// Note persistence for the signed-in owner
    pub store: Arc<NoteStore>,
}

impl AppState {
    pub fn new(controller: Arc<SessionController>, store: Arc<NoteStore>) -> Self {
        Self { controller, store }
    }
}
