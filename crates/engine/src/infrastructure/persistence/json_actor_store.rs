//! File-backed actor creation.
//!
//! Each created actor lands in `<dir>/<id>.json` as a [`StoredActor`]
//! envelope. The directory is created on first write.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use mosh_domain::{ActorDocument, ActorId};

use crate::infrastructure::ports::{ActorCreationPort, ClockPort, CreatedActor, CreationError};

/// On-disk envelope for a created actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredActor {
    pub id: ActorId,
    pub created_at: DateTime<Utc>,
    pub actor: ActorDocument,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredActorRef<'a> {
    id: ActorId,
    created_at: DateTime<Utc>,
    actor: &'a ActorDocument,
}

pub struct JsonFileActorStore {
    dir: PathBuf,
    clock: Arc<dyn ClockPort>,
}

impl JsonFileActorStore {
    pub fn new(dir: impl Into<PathBuf>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            dir: dir.into(),
            clock,
        }
    }

    /// Where the document for `id` is written.
    pub fn path_for(&self, id: ActorId) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

#[async_trait]
impl ActorCreationPort for JsonFileActorStore {
    async fn create(&self, actor: &ActorDocument) -> Result<CreatedActor, CreationError> {
        if actor.name.trim().is_empty() {
            return Err(CreationError::rejected("actor name cannot be empty"));
        }

        let id = ActorId::new();
        let created_at = self.clock.now();
        let record = StoredActorRef {
            id,
            created_at,
            actor,
        };
        let bytes = serde_json::to_vec_pretty(&record).map_err(CreationError::serialization)?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| CreationError::storage("create_actor_dir", e))?;

        let path = self.path_for(id);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| CreationError::storage("write_actor", e))?;

        tracing::debug!(
            actor_id = %id,
            path = %path.display(),
            "Wrote actor document"
        );

        Ok(CreatedActor {
            id,
            name: actor.name.clone(),
            created_at,
        })
    }
}
