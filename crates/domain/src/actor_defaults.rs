//! Token defaults applied to every actor before it is created.
//!
//! This is the single owner of bar bindings, name/bar visibility,
//! disposition, token name and actor linking. Importers leave those fields
//! unset and supply only texture, light and sight.

use crate::entities::{ActorDocument, ActorType};
use crate::value_objects::{TokenBar, TokenDisplayMode, TokenDisposition};

/// Baseline token presentation for new actors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActorDefaults {
    /// Attribute bound to bar 1
    pub bar1_attribute: String,
    /// Attribute bound to bar 2
    pub bar2_attribute: String,
    pub display_mode: TokenDisplayMode,
}

impl Default for NewActorDefaults {
    fn default() -> Self {
        Self {
            bar1_attribute: "health".to_string(),
            bar2_attribute: "hits".to_string(),
            display_mode: TokenDisplayMode::OwnerHover,
        }
    }
}

impl NewActorDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disposition a freshly created actor of this type starts with.
    pub fn disposition_for(actor_type: ActorType) -> TokenDisposition {
        match actor_type {
            ActorType::Creature => TokenDisposition::Hostile,
            ActorType::Character | ActorType::Ship => TokenDisposition::Neutral,
        }
    }

    /// Overwrite the policy-owned token fields. Applying twice is a no-op.
    pub fn apply(&self, actor: &mut ActorDocument) {
        let token = &mut actor.prototype_token;
        token.bar1 = Some(TokenBar::new(self.bar1_attribute.as_str()));
        token.bar2 = Some(TokenBar::new(self.bar2_attribute.as_str()));
        token.display_name = Some(self.display_mode);
        token.display_bars = Some(self.display_mode);
        token.disposition = Some(Self::disposition_for(actor.actor_type));
        token.name = Some(actor.name.clone());

        if actor.actor_type == ActorType::Character {
            token.sight.enabled = true;
            token.actor_link = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        ActorSettings, Attributes, CharacterSystem, Experience, HealthTrack, OtherResources,
        StressTrack, ValueField, Weight, WoundTrack, DEFAULT_ACTOR_IMAGE,
    };
    use crate::value_objects::{PrototypeToken, StatBlock};

    fn actor(actor_type: ActorType) -> ActorDocument {
        ActorDocument {
            name: "Xenomorph".into(),
            actor_type,
            img: DEFAULT_ACTOR_IMAGE.into(),
            system: CharacterSystem {
                health: HealthTrack {
                    value: 20,
                    max: 20,
                    min: 0,
                },
                hits: WoundTrack { value: 0, max: 3 },
                biography: String::new(),
                notes: String::new(),
                weight: Weight::default(),
                settings: ActorSettings::default(),
                class: ValueField::default(),
                rank: ValueField::default(),
                pronouns: ValueField::default(),
                credits: ValueField::new(0),
                stressdesc: ValueField::default(),
                xp: Experience::default(),
                attributes: Attributes::default(),
                stats: StatBlock::new(0, 0, 0, 0, 0, 0, 0),
                other: OtherResources {
                    stress: StressTrack::new(0, 0),
                    resolve: 0,
                },
            },
            prototype_token: PrototypeToken::with_image(DEFAULT_ACTOR_IMAGE),
            items: Vec::new(),
        }
    }

    #[test]
    fn character_gets_vision_and_link() {
        let mut doc = actor(ActorType::Character);
        NewActorDefaults::default().apply(&mut doc);

        let token = &doc.prototype_token;
        assert_eq!(token.bar1, Some(TokenBar::new("health")));
        assert_eq!(token.bar2, Some(TokenBar::new("hits")));
        assert_eq!(token.display_name, Some(TokenDisplayMode::OwnerHover));
        assert_eq!(token.display_bars, Some(TokenDisplayMode::OwnerHover));
        assert_eq!(token.disposition, Some(TokenDisposition::Neutral));
        assert_eq!(token.name.as_deref(), Some("Xenomorph"));
        assert!(token.sight.enabled);
        assert!(token.actor_link);
    }

    #[test]
    fn creature_is_hostile_and_unlinked() {
        let mut doc = actor(ActorType::Creature);
        NewActorDefaults::default().apply(&mut doc);

        assert_eq!(
            doc.prototype_token.disposition,
            Some(TokenDisposition::Hostile)
        );
        assert!(!doc.prototype_token.actor_link);
        assert!(!doc.prototype_token.sight.enabled);
    }

    #[test]
    fn ship_is_neutral() {
        assert_eq!(
            NewActorDefaults::disposition_for(ActorType::Ship),
            TokenDisposition::Neutral
        );
    }

    #[test]
    fn apply_is_idempotent() {
        let policy = NewActorDefaults::default();
        let mut once = actor(ActorType::Character);
        policy.apply(&mut once);
        let mut twice = once.clone();
        policy.apply(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn leaves_texture_light_and_sight_defaults_alone() {
        let mut doc = actor(ActorType::Ship);
        let before = doc.prototype_token.clone();
        NewActorDefaults::default().apply(&mut doc);

        assert_eq!(doc.prototype_token.texture, before.texture);
        assert_eq!(doc.prototype_token.light, before.light);
        assert_eq!(doc.prototype_token.sight, before.sight);
    }
}
