// Tests for the HTTP surface, driving the router directly with oneshot
// requests.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use easyspeech::{
    create_router, AppState, MemoryBackend, NoteStore, RecognitionEvent, ScriptedEngine,
    SessionController, SessionState, StaticIdentity,
};

/// Build a router whose controller already holds a finalized transcript.
async fn app_with_transcript(text: &str) -> (Router, Arc<NoteStore>) {
    let engine = ScriptedEngine::new(vec![RecognitionEvent::Final(text.into())]);
    let controller = Arc::new(SessionController::with_engine(Box::new(engine)));
    let store = Arc::new(NoteStore::new(
        Arc::new(MemoryBackend::new()),
        Arc::new(StaticIdentity::signed_in("http-user")),
    ));
    let app = create_router(AppState::new(controller.clone(), store.clone()));

    controller.start().await.unwrap();
    let mut rx = controller.state_rx();
    tokio::time::timeout(
        Duration::from_secs(2),
        rx.wait_for(|s| *s == SessionState::Idle),
    )
    .await
    .expect("session did not settle")
    .unwrap();

    (app, store)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_save_note_rejects_malformed_json() {
    let (app, store) = app_with_transcript("keep this").await;

    let request = Request::builder()
        .method("POST")
        .uri("/notes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was persisted and the transcript survived the bad request.
    assert!(store.list().await.unwrap().is_empty());

    let status = Request::builder()
        .method("GET")
        .uri("/session/status")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(status).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["finalized_text"], "keep this");
}

#[tokio::test]
async fn test_save_note_without_body_stores_empty_translation() {
    let (app, store) = app_with_transcript("hello world").await;

    let request = Request::builder()
        .method("POST")
        .uri("/notes")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["transcribedText"], "hello world");
    assert_eq!(json["translatedText"], "");

    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_save_note_with_translation_body() {
    let (app, store) = app_with_transcript("bonjour").await;

    let request = Request::builder()
        .method("POST")
        .uri("/notes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"translatedText":"hello"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["translatedText"], "hello");

    let notes = store.list().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].translated_text, "hello");
}

#[tokio::test]
async fn test_save_note_with_empty_transcript_is_bad_request() {
    let controller = Arc::new(SessionController::new());
    let store = Arc::new(NoteStore::new(
        Arc::new(MemoryBackend::new()),
        Arc::new(StaticIdentity::signed_in("http-user")),
    ));
    let app = create_router(AppState::new(controller, store));

    let request = Request::builder()
        .method("POST")
        .uri("/notes")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
