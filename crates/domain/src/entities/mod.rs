//! Domain entities

mod actor;
mod item;

pub use actor::{
    ActorDocument, ActorSettings, ActorType, Attributes, CharacterSystem, Experience,
    HealthTrack, OtherResources, StressTrack, ValueField, Weight, WoundTrack,
    DEFAULT_ACTOR_IMAGE,
};
pub use item::{
    ActorItem, ArmorData, ArmorItem, ConditionData, ConditionItem, GearData, GearItem, SkillData,
    SkillItem, Treatment, WeaponData, WeaponItem, WeaponRanges, DEFAULT_ITEM_IMAGE,
};
