//! Note persistence
//!
//! This module provides the per-user note collection:
//! - `Note` / `NoteDocument`: the persisted document and its caller-supplied
//!   part
//! - `DocumentBackend`: the external persistence capability
//! - `MemoryBackend`: in-process backend for the default service and tests
//! - `NoteStore`: the validated create / list / delete surface

mod backend;
mod documents;
mod memory;
mod store;

pub use backend::DocumentBackend;
pub use documents::{Note, NoteDocument};
pub use memory::MemoryBackend;
pub use store::NoteStore;
