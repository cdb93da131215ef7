//! Application state and composition.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::infrastructure::{
    clock::SystemClock,
    notifications::TracingNotifier,
    persistence::JsonFileActorStore,
    ports::{ActorCreationPort, ClockPort, NotificationPort},
};
use crate::use_cases::ImportActor;

/// Main application state.
///
/// Holds the use cases wired to their ports.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub import_actor: Arc<ImportActor>,
}

impl App {
    /// Wire the use cases to the given ports.
    pub fn new(
        creator: Arc<dyn ActorCreationPort>,
        notifier: Arc<dyn NotificationPort>,
    ) -> Self {
        let import_actor = Arc::new(ImportActor::new(creator, notifier));

        Self {
            use_cases: UseCases { import_actor },
        }
    }

    /// Production wiring: file store, system clock, tracing notifications.
    pub fn from_config(config: &EngineConfig) -> Self {
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        let store = Arc::new(JsonFileActorStore::new(&config.actor_dir, clock));
        let notifier = Arc::new(TracingNotifier::new());

        tracing::debug!(actor_dir = %config.actor_dir.display(), "Engine composed");

        Self::new(store, notifier)
    }
}
