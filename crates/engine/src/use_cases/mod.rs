//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate importers and ports to fulfill user stories.

pub mod import_actor;

// Re-export main types
pub use import_actor::{ImportActor, ImportActorError};
