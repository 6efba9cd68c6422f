use crate::error::StoreError;

use super::documents::{Note, NoteDocument};

/// Document persistence trait
///
/// The external capability behind the note store: a remote per-user document
/// collection. Implementations assign ids and creation timestamps, filter
/// queries by owner, and order them newest first. Each operation is atomic on
/// its own; no multi-operation transactions exist, so callers tolerate stale
/// reads between a `query_by_owner` and a later `delete`.
#[async_trait::async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Persist a new note, assigning its id and creation timestamp.
    async fn insert(&self, doc: NoteDocument) -> Result<Note, StoreError>;

    /// Point-in-time snapshot of one owner's notes, `created_at` descending.
    /// Ties on identical timestamps break in no guaranteed order.
    async fn query_by_owner(&self, owner_id: &str) -> Result<Vec<Note>, StoreError>;

    /// Remove a note permanently. `NotFound` for unknown or already-deleted
    /// ids.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Get backend name for logging
    fn name(&self) -> &str;
}
