use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::info;

use super::backend::DocumentBackend;
use super::documents::{Note, NoteDocument};
use crate::error::StoreError;

/// In-process document backend.
///
/// Backs the service when no remote collection is configured, and the tests.
/// Assigned timestamps are monotonic-enough: a note created within the clock
/// resolution of the previous one gets a timestamp just after it, so list
/// order stays deterministic.
pub struct MemoryBackend {
    notes: RwLock<HashMap<String, Note>>,
    last_created_at: RwLock<Option<DateTime<Utc>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            notes: RwLock::new(HashMap::new()),
            last_created_at: RwLock::new(None),
        }
    }

    async fn next_timestamp(&self) -> DateTime<Utc> {
        let mut last = self.last_created_at.write().await;
        let mut now = Utc::now();
        if let Some(prev) = *last {
            if now <= prev {
                now = prev + Duration::microseconds(1);
            }
        }
        *last = Some(now);
        now
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DocumentBackend for MemoryBackend {
    async fn insert(&self, doc: NoteDocument) -> Result<Note, StoreError> {
        let note = Note {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: doc.owner_id,
            transcribed_text: doc.transcribed_text,
            translated_text: doc.translated_text,
            created_at: self.next_timestamp().await,
        };

        let mut notes = self.notes.write().await;
        notes.insert(note.id.clone(), note.clone());

        info!("Inserted note {} for owner {}", note.id, note.owner_id);

        Ok(note)
    }

    async fn query_by_owner(&self, owner_id: &str) -> Result<Vec<Note>, StoreError> {
        let notes = self.notes.read().await;

        let mut owned: Vec<Note> = notes
            .values()
            .filter(|n| n.owner_id == owner_id)
            .cloned()
            .collect();

        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(owned)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut notes = self.notes.write().await;

        match notes.remove(id) {
            Some(_) => {
                info!("Deleted note {}", id);
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    fn name(&self) -> &str {
        "memory"
    }
}
