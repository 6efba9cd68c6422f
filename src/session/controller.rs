use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use super::state::SessionState;
use super::status::SessionStatus;
use super::transcript::{TranscriptBuffer, TranscriptSnapshot};
use crate::engine::{RecognitionEvent, SpeechEngine};
use crate::error::{SessionError, StoreError};
use crate::store::{Note, NoteStore};

/// Single source of truth for "are we currently capturing speech".
///
/// Owns the speech engine for the lifetime of the process and is the only
/// component allowed to start or stop it. Engine callbacks arrive as events on
/// a channel; the controller applies them one at a time under a single lock,
/// so the transcript and state are never touched by two logical operations at
/// once. State changes are published on a `watch` channel.
pub struct SessionController {
    inner: Arc<Mutex<Inner>>,
    state_tx: watch::Sender<SessionState>,

    /// Handle for the event-applying task of the current session
    event_task: Mutex<Option<JoinHandle<()>>>,
}

struct Inner {
    /// Attached once the engine reports ready; `None` means `EngineNotReady`
    engine: Option<Box<dyn SpeechEngine>>,
    state: SessionState,
    /// Bumped per `start()`; event tasks from earlier sessions see a mismatch
    /// and drop their events
    epoch: u64,
    transcript: TranscriptBuffer,
    last_error: Option<String>,
    started_at: Option<DateTime<Utc>>,
}

struct EventOutcome {
    /// The event was terminal; the session settles on `Idle`
    finished: bool,
    /// The engine was still listening and must be told to stop (at most once)
    stop_engine: bool,
}

impl Inner {
    fn apply_event(&mut self, event: RecognitionEvent) -> EventOutcome {
        let was_listening = self.state == SessionState::Listening;

        match event {
            RecognitionEvent::Partial(text) => {
                self.transcript.set_partial(text);
                EventOutcome {
                    finished: false,
                    stop_engine: false,
                }
            }
            RecognitionEvent::Final(text) => {
                self.transcript.commit_final(&text);
                self.transcript.set_partial("");
                EventOutcome {
                    finished: true,
                    stop_engine: was_listening,
                }
            }
            RecognitionEvent::Error(message) => {
                warn!("Recognition failed: {}", message);
                self.transcript.set_partial("");
                self.last_error = Some(message);
                EventOutcome {
                    finished: true,
                    stop_engine: was_listening,
                }
            }
            RecognitionEvent::Timeout => {
                warn!("Recognition timed out");
                self.transcript.set_partial("");
                self.last_error = Some("listening timed out".to_string());
                EventOutcome {
                    finished: true,
                    stop_engine: was_listening,
                }
            }
        }
    }

    async fn shutdown_engine(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            if let Err(e) = engine.end().await {
                error!("Failed to stop speech engine: {}", e);
            }
        }
    }
}

impl SessionController {
    /// Create a controller with no engine attached; `start()` fails with
    /// `EngineNotReady` until `attach_engine` is called.
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(SessionState::Idle);
        Self {
            inner: Arc::new(Mutex::new(Inner {
                engine: None,
                state: SessionState::Idle,
                epoch: 0,
                transcript: TranscriptBuffer::new(),
                last_error: None,
                started_at: None,
            })),
            state_tx,
            event_task: Mutex::new(None),
        }
    }

    pub fn with_engine(engine: Box<dyn SpeechEngine>) -> Self {
        let controller = Self::new();
        {
            // No contention possible before the controller is shared.
            let mut inner = controller
                .inner
                .try_lock()
                .expect("fresh controller lock held elsewhere");
            inner.engine = Some(engine);
        }
        controller
    }

    /// Attach the engine once its model has been unpacked.
    pub async fn attach_engine(&self, engine: Box<dyn SpeechEngine>) {
        let mut inner = self.inner.lock().await;
        info!("Speech engine attached: {}", engine.name());
        inner.engine = Some(engine);
    }

    pub async fn engine_ready(&self) -> bool {
        self.inner.lock().await.engine.is_some()
    }

    /// Observe state transitions.
    pub fn state_rx(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Begin a listening session. One utterance per call: the session ends on
    /// the first final result, error, or timeout, or on `stop()`.
    pub async fn start(&self) -> Result<(), SessionError> {
        let (epoch, mut event_rx) = {
            let mut inner = self.inner.lock().await;

            match inner.state {
                SessionState::Listening | SessionState::Stopping => {
                    return Err(SessionError::AlreadyListening);
                }
                SessionState::Idle => {}
            }

            let engine = inner.engine.as_mut().ok_or(SessionError::EngineNotReady)?;
            let event_rx = engine.begin().await.map_err(SessionError::Engine)?;

            inner.epoch += 1;
            inner.state = SessionState::Listening;
            inner.started_at = Some(Utc::now());
            inner.last_error = None;
            self.state_tx.send_replace(SessionState::Listening);

            (inner.epoch, event_rx)
        };

        info!("Recognition session started");

        let inner_ref = Arc::clone(&self.inner);
        let state_tx = self.state_tx.clone();

        let task = tokio::spawn(async move {
            while let Some(event) = event_rx.recv().await {
                let mut inner = inner_ref.lock().await;

                // Stale task, or the session already settled: discard.
                if inner.epoch != epoch || inner.state == SessionState::Idle {
                    continue;
                }

                let outcome = inner.apply_event(event);
                if outcome.stop_engine {
                    inner.shutdown_engine().await;
                }
                if outcome.finished {
                    inner.state = SessionState::Idle;
                    state_tx.send_replace(SessionState::Idle);
                    info!("Recognition session ended");
                }
            }

            // Channel closed without a terminal event (engine ended by a
            // stop() request): settle on Idle with the partial dropped.
            let mut inner = inner_ref.lock().await;
            if inner.epoch == epoch && inner.state != SessionState::Idle {
                inner.transcript.set_partial("");
                inner.state = SessionState::Idle;
                state_tx.send_replace(SessionState::Idle);
                info!("Recognition session stopped");
            }
        });

        {
            let mut handle = self.event_task.lock().await;
            *handle = Some(task);
        }

        Ok(())
    }

    /// End the current session. No-op when already idle. Returns once the
    /// event task has drained in-flight events and the state is `Idle`, so a
    /// following `start()` cannot race the teardown.
    pub async fn stop(&self) -> Result<(), SessionError> {
        {
            let mut inner = self.inner.lock().await;
            match inner.state {
                SessionState::Idle => return Ok(()),
                SessionState::Stopping => {}
                SessionState::Listening => {
                    info!("Stopping recognition session");
                    inner.state = SessionState::Stopping;
                    self.state_tx.send_replace(SessionState::Stopping);
                    inner.shutdown_engine().await;
                }
            }
        }

        let task = {
            let mut handle = self.event_task.lock().await;
            handle.take()
        };
        match task {
            Some(task) => {
                if let Err(e) = task.await {
                    error!("Event task panicked: {}", e);
                }

                // The task normally settles Idle itself; cover the case where
                // it died before doing so.
                let mut inner = self.inner.lock().await;
                if inner.state != SessionState::Idle {
                    inner.transcript.set_partial("");
                    inner.state = SessionState::Idle;
                    self.state_tx.send_replace(SessionState::Idle);
                }
            }
            None => {
                // A concurrent stop() holds the task; wait for it to settle.
                let mut rx = self.state_tx.subscribe();
                let _ = rx.wait_for(|s| *s == SessionState::Idle).await;
            }
        }

        Ok(())
    }

    /// Snapshot of state, transcript, and last error for the UI layer.
    pub async fn status(&self) -> SessionStatus {
        let inner = self.inner.lock().await;
        let TranscriptSnapshot {
            finalized_text,
            partial_text,
        } = inner.transcript.snapshot();

        SessionStatus {
            state: inner.state,
            finalized_text,
            partial_text,
            last_error: inner.last_error.clone(),
            started_at: inner.started_at,
        }
    }

    /// Persist the finalized transcript as a note, with whatever translation
    /// text exists at save time. The buffer is cleared only after the store
    /// confirms the write; a failed save leaves it intact for retry.
    pub async fn save_note(
        &self,
        store: &NoteStore,
        translated_text: &str,
    ) -> Result<Note, StoreError> {
        let mut inner = self.inner.lock().await;
        let snapshot = inner.transcript.snapshot();

        let note = store
            .create(snapshot.finalized_text.trim(), translated_text.trim())
            .await?;

        inner.transcript.clear();
        info!("Note {} saved, transcript cleared", note.id);

        Ok(note)
    }

    /// Throw away the accumulated transcript and last error without saving.
    pub async fn discard(&self) {
        let mut inner = self.inner.lock().await;
        inner.transcript.clear();
        inner.last_error = None;
        info!("Transcript discarded");
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}
