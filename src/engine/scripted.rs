use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::info;

use super::backend::SpeechEngine;
use super::events::RecognitionEvent;

/// Engine that replays a fixed event script.
///
/// Used for tests and for running the service without a real recognizer. Each
/// `begin()` replays the same script from the start; the emitting task stops
/// early if `end()` is called or the receiver is dropped.
pub struct ScriptedEngine {
    script: Vec<RecognitionEvent>,
    cancel_tx: Option<tokio::sync::oneshot::Sender<()>>,
    listening: Arc<AtomicBool>,
}

impl ScriptedEngine {
    pub fn new(script: Vec<RecognitionEvent>) -> Self {
        Self {
            script,
            cancel_tx: None,
            listening: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[async_trait::async_trait]
impl SpeechEngine for ScriptedEngine {
    async fn begin(&mut self) -> Result<mpsc::Receiver<RecognitionEvent>> {
        let (event_tx, event_rx) = mpsc::channel(16);
        let (cancel_tx, mut cancel_rx) = tokio::sync::oneshot::channel();
        self.cancel_tx = Some(cancel_tx);
        self.listening.store(true, Ordering::SeqCst);

        let script = self.script.clone();
        let listening = Arc::clone(&self.listening);

        tokio::spawn(async move {
            for event in script {
                tokio::select! {
                    _ = &mut cancel_rx => break,
                    sent = event_tx.send(event) => {
                        if sent.is_err() {
                            break;
                        }
                    }
                }
            }
            // The script drained (or was cancelled) before the sender drops
            // and closes the event channel.
            listening.store(false, Ordering::SeqCst);
        });

        info!("Scripted engine started");

        Ok(event_rx)
    }

    async fn end(&mut self) -> Result<()> {
        if let Some(cancel) = self.cancel_tx.take() {
            let _ = cancel.send(());
            self.listening.store(false, Ordering::SeqCst);
            info!("Scripted engine stopped");
        }
        Ok(())
    }

    fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
