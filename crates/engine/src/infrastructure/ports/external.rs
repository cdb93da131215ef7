//! External collaborator ports (actor creation, user notifications).

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use mosh_domain::{ActorDocument, ActorId};

use super::error::CreationError;

// =============================================================================
// Actor Creation
// =============================================================================

/// What the host hands back once an actor exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedActor {
    pub id: ActorId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Host-side persistence and ID assignment for actor documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActorCreationPort: Send + Sync {
    async fn create(&self, actor: &ActorDocument) -> Result<CreatedActor, CreationError>;
}

// =============================================================================
// Notifications
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// User-visible toast messages.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationPort: Send + Sync {
    fn notify(&self, level: NotificationLevel, message: &str);
}
