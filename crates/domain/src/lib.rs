extern crate self as mosh_domain;

pub mod actor_defaults;
pub mod entities;
pub mod error;
pub mod game_systems;
pub mod ids;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    ActorDocument, ActorItem, ActorSettings, ActorType, ArmorData, ArmorItem, Attributes,
    CharacterSystem, ConditionData, ConditionItem, Experience, GearData, GearItem, HealthTrack,
    OtherResources, SkillData, SkillItem, StressTrack, Treatment, ValueField, WeaponData,
    WeaponItem, WeaponRanges, Weight, WoundTrack, DEFAULT_ACTOR_IMAGE, DEFAULT_ITEM_IMAGE,
};

pub use error::DomainError;

pub use actor_defaults::NewActorDefaults;

// Re-export game system catalogs
pub use game_systems::{ConditionCatalog, SkillCatalog, SkillEntry, SkillRank};

pub use ids::ActorId;

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    capitalize_first, display_name, PrototypeToken, Save, Stat, StatBlock, TokenAnimation,
    TokenBar, TokenDarkness, TokenDisplayMode, TokenDisposition, TokenLight, TokenSight,
    TokenTexture,
};
