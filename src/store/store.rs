use std::sync::Arc;

use tracing::info;

use super::backend::DocumentBackend;
use super::documents::{Note, NoteDocument};
use crate::error::StoreError;
use crate::identity::IdentityGate;

/// Per-user, ordered, append/delete persistence of notes.
///
/// Validates at the boundary (authentication, non-empty text) before touching
/// the backend. Notes are immutable once created; there is no update
/// operation.
pub struct NoteStore {
    backend: Arc<dyn DocumentBackend>,
    identity: Arc<dyn IdentityGate>,
}

impl NoteStore {
    pub fn new(backend: Arc<dyn DocumentBackend>, identity: Arc<dyn IdentityGate>) -> Self {
        info!("Note store using {} backend", backend.name());
        Self { backend, identity }
    }

    fn owner(&self) -> Result<String, StoreError> {
        self.identity
            .current_owner()
            .ok_or(StoreError::Unauthenticated)
    }

    /// Persist a new note for the current owner. The backend assigns the id
    /// and creation timestamp; the note is visible to subsequent `list` calls
    /// once this returns.
    pub async fn create(
        &self,
        transcribed_text: &str,
        translated_text: &str,
    ) -> Result<Note, StoreError> {
        let owner_id = self.owner()?;

        if transcribed_text.is_empty() {
            return Err(StoreError::EmptyTranscript);
        }

        self.backend
            .insert(NoteDocument {
                owner_id,
                transcribed_text: transcribed_text.to_string(),
                translated_text: translated_text.to_string(),
            })
            .await
    }

    /// The current owner's notes, newest first. An owner with no notes gets
    /// an empty list, not an error.
    pub async fn list(&self) -> Result<Vec<Note>, StoreError> {
        let owner_id = self.owner()?;
        self.backend.query_by_owner(&owner_id).await
    }

    /// Permanently remove a note by id. Terminal and not reversible; deleting
    /// an id again fails with `NotFound`.
    ///
    /// The backend does not verify the note belongs to the current owner;
    /// only pass ids obtained from this owner's own `list` call.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.backend.delete(id).await
    }
}
