//! Import use case errors.

use crate::infrastructure::importers::ImportError;
use crate::infrastructure::ports::CreationError;

/// Errors that can occur while importing and creating an actor.
#[derive(Debug, thiserror::Error)]
pub enum ImportActorError {
    #[error("Import failed: {0}")]
    Import(#[from] ImportError),
    #[error("Creation failed: {0}")]
    Creation(#[from] CreationError),
}

impl ImportActorError {
    /// Text shown to the user in the error toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::Import(err) => format!("Invalid JSON data: {}", err),
            Self::Creation(_) => "Failed to create actor".to_string(),
        }
    }
}
