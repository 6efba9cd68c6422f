//! Speech engine abstraction
//!
//! This module defines the contract the session controller depends on:
//! - `RecognitionEvent`: partial/final/error/timeout results
//! - `SpeechEngine`: begin/end audio consumption, events on a channel
//! - `EngineFactory`: construct an engine from a source
//! - `ModelStorage`: unpack a packaged recognition model to local disk
//! - `ScriptedEngine`: fixed-script engine for testing and demos

mod backend;
mod events;
mod model;
mod scripted;

pub use backend::{EngineFactory, EngineSource, SpeechEngine};
pub use events::RecognitionEvent;
pub use model::{ModelStorage, UnpackedModel};
pub use scripted::ScriptedEngine;
