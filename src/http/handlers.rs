use super::state::AppState;
use crate::error::{SessionError, StoreError};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SaveNoteRequest {
    /// Translation text to store alongside the transcript (may be empty)
    #[serde(rename = "translatedText")]
    pub translated_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionActionResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn session_error_response(e: SessionError) -> axum::response::Response {
    let status = match e {
        SessionError::AlreadyListening => StatusCode::CONFLICT,
        SessionError::EngineNotReady => StatusCode::SERVICE_UNAVAILABLE,
        SessionError::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

fn store_error_response(e: StoreError) -> axum::response::Response {
    let status = match e {
        StoreError::Unauthenticated => StatusCode::UNAUTHORIZED,
        StoreError::EmptyTranscript => StatusCode::BAD_REQUEST,
        StoreError::NotFound => StatusCode::NOT_FOUND,
        StoreError::Unavailable(_) => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /session/start
/// Begin a listening session
pub async fn start_session(State(state): State<AppState>) -> impl IntoResponse {
    info!("Starting recognition session");

    match state.controller.start().await {
        Ok(()) => (
            StatusCode::OK,
            Json(SessionActionResponse {
                status: "listening".to_string(),
                message: "Recognition session started".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to start session: {}", e);
            session_error_response(e)
        }
    }
}

/// POST /session/stop
/// End the current listening session (no-op when idle)
pub async fn stop_session(State(state): State<AppState>) -> impl IntoResponse {
    info!("Stopping recognition session");

    match state.controller.stop().await {
        Ok(()) => {
            let status = state.controller.status().await;
            (StatusCode::OK, Json(status)).into_response()
        }
        Err(e) => {
            error!("Failed to stop session: {}", e);
            session_error_response(e)
        }
    }
}

/// GET /session/status
/// Current state, transcript, and last error
pub async fn get_session_status(State(state): State<AppState>) -> impl IntoResponse {
    let status = state.controller.status().await;
    (StatusCode::OK, Json(status)).into_response()
}

/// POST /notes
/// Save the finalized transcript as a note; clears the transcript on success
pub async fn save_note(
    State(state): State<AppState>,
    body: Result<Json<SaveNoteRequest>, JsonRejection>,
) -> impl IntoResponse {
    let translated = match body {
        Ok(Json(req)) => req.translated_text.unwrap_or_default(),
        // A request without a JSON body saves with no translation.
        Err(JsonRejection::MissingJsonContentType(_)) => String::new(),
        // A body that claims to be JSON but does not parse is the caller's
        // mistake, not an empty translation.
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    match state.controller.save_note(&state.store, &translated).await {
        Ok(note) => {
            info!("Saved note {}", note.id);
            (StatusCode::CREATED, Json(note)).into_response()
        }
        Err(e) => {
            error!("Failed to save note: {}", e);
            store_error_response(e)
        }
    }
}

/// GET /notes
/// The owner's notes, newest first
pub async fn list_notes(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.list().await {
        Ok(notes) => (StatusCode::OK, Json(notes)).into_response(),
        Err(e) => {
            error!("Failed to list notes: {}", e);
            store_error_response(e)
        }
    }
}

/// DELETE /notes/:note_id
/// Permanently remove a note
pub async fn delete_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> impl IntoResponse {
    match state.store.delete(&note_id).await {
        Ok(()) => {
            info!("Deleted note {}", note_id);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            error!("Failed to delete note {}: {}", note_id, e);
            store_error_response(e)
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
