use anyhow::Result;
use tokio::sync::mpsc;

use super::events::RecognitionEvent;

/// Streaming speech recognition engine trait
///
/// Implementations wrap an actual recognizer (an unpacked on-device model, a
/// remote STT service, or a scripted source for testing). The controller only
/// depends on this contract: begin consuming audio, emit events on a channel,
/// stop on demand.
#[async_trait::async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Start consuming audio for one utterance.
    ///
    /// Returns a channel receiver that will receive recognition events in
    /// emission order. The channel closes when the engine stops.
    async fn begin(&mut self) -> Result<mpsc::Receiver<RecognitionEvent>>;

    /// Stop consuming audio. Idempotent.
    async fn end(&mut self) -> Result<()>;

    /// Check if the engine is currently consuming audio
    fn is_listening(&self) -> bool;

    /// Get engine name for logging
    fn name(&self) -> &str;
}

/// Speech engine factory
pub struct EngineFactory;

impl EngineFactory {
    /// Create a speech engine for the given source.
    pub fn create(source: EngineSource) -> Result<Box<dyn SpeechEngine>> {
        match source {
            EngineSource::Scripted(events) => {
                let engine = super::scripted::ScriptedEngine::new(events);
                Ok(Box::new(engine))
            }

            EngineSource::Model(path) => {
                anyhow::bail!(
                    "no speech model binding is compiled into this build (model at {:?})",
                    path
                )
            }
        }
    }
}

/// Speech engine source type
#[derive(Debug, Clone)]
pub enum EngineSource {
    /// Replay a fixed event sequence (for testing/demo)
    Scripted(Vec<RecognitionEvent>),
    /// Unpacked on-device model directory
    Model(std::path::PathBuf),
}
