use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted note, immutable once created.
///
/// Field names on the wire follow the original document schema: `userId`,
/// `transcribedText`, `translatedText`, `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Store-assigned document id, opaque to callers
    pub id: String,

    /// Identity of the creator; all queries are scoped by it
    #[serde(rename = "userId")]
    pub owner_id: String,

    /// Recognized text (never empty)
    pub transcribed_text: String,

    /// Translation text present at save time (may be empty)
    pub translated_text: String,

    /// Store-assigned creation timestamp; list order is defined by it
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields of a note about to be created. The backend assigns
/// `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDocument {
    #[serde(rename = "userId")]
    pub owner_id: String,
    pub transcribed_text: String,
    pub translated_text: String,
}
