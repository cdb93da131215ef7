//! Actor import use case.
//!
//! Runs a pasted character export through the importer, applies the
//! new-actor token defaults and hands the result to the creation port.
//! Every outcome is reported to the user through the notification port.

mod error;

use std::sync::Arc;

pub use error::ImportActorError;

use crate::infrastructure::importers::{ImportError, MothershipImporter};
use crate::infrastructure::ports::{
    ActorCreationPort, CreatedActor, NotificationLevel, NotificationPort,
};
use mosh_domain::{ActorDocument, NewActorDefaults};

/// Imports one character export per call. Calls share no state.
pub struct ImportActor {
    importer: MothershipImporter<'static>,
    defaults: NewActorDefaults,
    creator: Arc<dyn ActorCreationPort>,
    notifier: Arc<dyn NotificationPort>,
}

impl ImportActor {
    pub fn new(creator: Arc<dyn ActorCreationPort>, notifier: Arc<dyn NotificationPort>) -> Self {
        Self {
            importer: MothershipImporter::new(),
            defaults: NewActorDefaults::default(),
            creator,
            notifier,
        }
    }

    pub fn with_defaults(mut self, defaults: NewActorDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Build the document that would be created, without side effects.
    pub fn prepare(&self, raw: &str) -> Result<ActorDocument, ImportError> {
        let mut actor = self.importer.import(raw)?;
        self.defaults.apply(&mut actor);
        Ok(actor)
    }

    /// Import and create an actor.
    ///
    /// # Returns
    /// * `Ok(CreatedActor)` - the host accepted the document
    /// * `Err(ImportActorError::Import)` - the export could not be converted; nothing was created
    /// * `Err(ImportActorError::Creation)` - the document was valid but the host rejected it
    pub async fn execute(&self, raw: &str) -> Result<CreatedActor, ImportActorError> {
        let actor = match self.prepare(raw) {
            Ok(actor) => actor,
            Err(e) => return Err(self.fail(ImportActorError::Import(e))),
        };

        let created = match self.creator.create(&actor).await {
            Ok(created) => created,
            Err(e) => return Err(self.fail(ImportActorError::Creation(e))),
        };

        tracing::info!(
            actor_id = %created.id,
            actor = %created.name,
            items = actor.items.len(),
            "Actor created from character export"
        );
        self.notifier
            .notify(NotificationLevel::Info, "Actor created successfully");

        Ok(created)
    }

    fn fail(&self, err: ImportActorError) -> ImportActorError {
        tracing::error!(error = %err, "Character import failed");
        self.notifier
            .notify(NotificationLevel::Error, &err.user_message());
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::eq;
    use mosh_domain::{ActorId, TokenDisplayMode, TokenDisposition};

    use crate::infrastructure::importers::ReferenceKind;
    use crate::infrastructure::ports::{CreationError, MockActorCreationPort, MockNotificationPort};

    const RIPLEY: &str = r#"{"name":"Ripley","health":10,"maxHealth":10,"wounds":2,"maxWounds":5,"characterClass":"marine","strength":35,"speed":35,"intellect":35,"combat":35,"sanity":35,"fear":35,"body":35,"stress":2,"minStress":0,"credits":100,"pronouns":"she/her","traumaResponse":"fight","highScore":"strength","trinket":"Lighter","equipment":[],"items":[],"armor":[],"weapons":[],"skills":["piloting"],"conditions":[]}"#;

    fn created(name: &str) -> CreatedActor {
        CreatedActor {
            id: ActorId::new(),
            name: name.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn creates_actor_with_defaults_applied() {
        let mut creator = MockActorCreationPort::new();
        creator
            .expect_create()
            .times(1)
            .withf(|actor| {
                let token = &actor.prototype_token;
                actor.name == "Ripley"
                    && actor.items.len() == 2
                    && token.name.as_deref() == Some("Ripley")
                    && token.disposition == Some(TokenDisposition::Neutral)
                    && token.display_name == Some(TokenDisplayMode::OwnerHover)
                    && token.bar2.as_ref().map(|b| b.attribute.as_str()) == Some("hits")
                    && token.actor_link
                    && token.sight.enabled
            })
            .returning(|actor| Ok(created(&actor.name)));

        let mut notifier = MockNotificationPort::new();
        notifier
            .expect_notify()
            .with(eq(NotificationLevel::Info), eq("Actor created successfully"))
            .times(1)
            .return_const(());

        let use_case = ImportActor::new(Arc::new(creator), Arc::new(notifier));
        let result = use_case.execute(RIPLEY).await.expect("import succeeds");
        assert_eq!(result.name, "Ripley");
    }

    #[tokio::test]
    async fn malformed_json_never_reaches_creation() {
        let mut creator = MockActorCreationPort::new();
        creator.expect_create().never();

        let mut notifier = MockNotificationPort::new();
        notifier
            .expect_notify()
            .withf(|level, message| {
                *level == NotificationLevel::Error && message.starts_with("Invalid JSON data")
            })
            .times(1)
            .return_const(());

        let use_case = ImportActor::new(Arc::new(creator), Arc::new(notifier));
        let err = use_case.execute("{not json").await.expect_err("parse failure");
        assert!(matches!(err, ImportActorError::Import(ImportError::Parse(_))));
    }

    #[tokio::test]
    async fn unknown_skill_never_reaches_creation() {
        let mut creator = MockActorCreationPort::new();
        creator.expect_create().never();

        let mut notifier = MockNotificationPort::new();
        notifier
            .expect_notify()
            .withf(|level, message| {
                *level == NotificationLevel::Error && message.contains("Unknown skill 'juggling'")
            })
            .times(1)
            .return_const(());

        let raw = RIPLEY.replace("\"piloting\"", "\"juggling\"");
        let use_case = ImportActor::new(Arc::new(creator), Arc::new(notifier));
        let err = use_case.execute(&raw).await.expect_err("unknown skill");

        assert!(matches!(
            err,
            ImportActorError::Import(ImportError::UnknownReference {
                kind: ReferenceKind::Skill,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn creation_failure_is_reported_separately() {
        let mut creator = MockActorCreationPort::new();
        creator
            .expect_create()
            .times(1)
            .returning(|_| Err(CreationError::rejected("schema mismatch")));

        let mut notifier = MockNotificationPort::new();
        notifier
            .expect_notify()
            .with(eq(NotificationLevel::Error), eq("Failed to create actor"))
            .times(1)
            .return_const(());

        let use_case = ImportActor::new(Arc::new(creator), Arc::new(notifier));
        let err = use_case.execute(RIPLEY).await.expect_err("creation failure");
        assert!(matches!(err, ImportActorError::Creation(CreationError::Rejected(_))));
    }

    #[test]
    fn prepare_has_no_side_effects() {
        let mut creator = MockActorCreationPort::new();
        creator.expect_create().never();
        let mut notifier = MockNotificationPort::new();
        notifier.expect_notify().never();

        let use_case = ImportActor::new(Arc::new(creator), Arc::new(notifier));
        let actor = use_case.prepare(RIPLEY).expect("valid export");
        assert_eq!(actor.prototype_token.name.as_deref(), Some("Ripley"));
    }

    #[test]
    fn custom_defaults_are_used() {
        let use_case = ImportActor::new(
            Arc::new(MockActorCreationPort::new()),
            Arc::new(MockNotificationPort::new()),
        )
        .with_defaults(NewActorDefaults {
            bar2_attribute: "other.stress".to_string(),
            ..NewActorDefaults::default()
        });

        let actor = use_case.prepare(RIPLEY).expect("valid export");
        assert_eq!(
            actor.prototype_token.bar2.map(|b| b.attribute),
            Some("other.stress".to_string())
        );
    }

    #[test]
    fn user_messages_distinguish_failures() {
        let import = ImportActorError::from(ImportError::invalid_document("missing field `name`"));
        assert_eq!(
            import.user_message(),
            "Invalid JSON data: Invalid character export: missing field `name`"
        );

        let creation = ImportActorError::from(CreationError::rejected("bad"));
        assert_eq!(creation.user_message(), "Failed to create actor");
    }
}
