use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::state::SessionState;

/// Snapshot of the controller state for the UI layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatus {
    /// Current lifecycle state
    pub state: SessionState,

    /// Finalized transcript text accumulated so far
    pub finalized_text: String,

    /// Current provisional fragment
    pub partial_text: String,

    /// Message from the last recognition failure, if any
    pub last_error: Option<String>,

    /// When the current (or most recent) session started
    pub started_at: Option<DateTime<Utc>>,
}
