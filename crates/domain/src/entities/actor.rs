//! Actor entity - the document handed to the host's creation API
//!
//! An actor is a value: once built it has no link back to whatever it was
//! imported from. Field names follow the host's data model (camelCase on the
//! wire, a few legacy lower-case keys like `stressdesc` kept verbatim).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::item::ActorItem;
use crate::error::DomainError;
use crate::value_objects::{PrototypeToken, StatBlock};

/// Portrait the host falls back to for actors without art.
pub const DEFAULT_ACTOR_IMAGE: &str = "icons/svg/mystery-man.svg";

/// Actor subtypes registered by the rules system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorType {
    Character,
    Creature,
    Ship,
}

impl fmt::Display for ActorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character => write!(f, "character"),
            Self::Creature => write!(f, "creature"),
            Self::Ship => write!(f, "ship"),
        }
    }
}

impl FromStr for ActorType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "character" => Ok(Self::Character),
            "creature" => Ok(Self::Creature),
            "ship" => Ok(Self::Ship),
            _ => Err(DomainError::parse(format!("Unknown actor type: {}", s))),
        }
    }
}

/// A complete actor record ready for creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub actor_type: ActorType,
    pub img: String,
    pub system: CharacterSystem,
    pub prototype_token: PrototypeToken,
    #[serde(default)]
    pub items: Vec<ActorItem>,
}

impl ActorDocument {
    /// Items of one host type, in document order.
    pub fn items_of_type<'a>(&'a self, item_type: &'a str) -> impl Iterator<Item = &'a ActorItem> {
        self.items
            .iter()
            .filter(move |item| item.item_type() == item_type)
    }

    pub fn find_item(&self, name: &str) -> Option<&ActorItem> {
        self.items.iter().find(|item| item.name() == name)
    }
}

/// `{ "value": ... }` wrapper the host uses for single sheet fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValueField<T> {
    pub value: T,
}

impl<T> ValueField<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

/// Character sheet data (`system` on the host document).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSystem {
    pub health: HealthTrack,
    pub hits: WoundTrack,
    pub biography: String,
    pub notes: String,
    pub weight: Weight,
    pub settings: ActorSettings,
    pub class: ValueField<String>,
    pub rank: ValueField<String>,
    pub pronouns: ValueField<String>,
    pub credits: ValueField<i64>,
    /// Trauma response text
    pub stressdesc: ValueField<String>,
    pub xp: Experience,
    pub attributes: Attributes,
    pub stats: StatBlock,
    pub other: OtherResources,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthTrack {
    pub value: i64,
    pub max: i64,
    pub min: i64,
}

/// Wounds, stored by the host under `hits`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WoundTrack {
    pub value: i64,
    pub max: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Weight {
    pub current: i64,
    pub capacity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorSettings {
    pub use_calm: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub value: i64,
    pub html: i64,
    pub selected_skill: String,
}

/// `attributes.level` holds the exported "high score" stat name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attributes {
    pub level: ValueField<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherResources {
    pub stress: StressTrack,
    pub resolve: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressTrack {
    pub value: i64,
    pub min: i64,
    pub label: String,
}

impl StressTrack {
    pub fn new(value: i64, min: i64) -> Self {
        Self {
            value,
            min,
            label: "Stress".to_string(),
        }
    }
}
