//! Mothership stats and saves as stored on an actor sheet.
//!
//! Stats (Strength, Speed, Intellect, Combat) carry a `mod` slot the sheet
//! writes into; saves (Sanity, Fear, Body) do not.

use serde::{Deserialize, Serialize};

/// A stat with its sheet label and an optional modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: i64,
    pub label: String,
    /// Always serialized; `null` until the sheet sets a modifier
    #[serde(rename = "mod", default)]
    pub modifier: Option<i64>,
}

impl Stat {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            value,
            label: label.into(),
            modifier: None,
        }
    }
}

/// A save with its sheet label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Save {
    pub value: i64,
    pub label: String,
}

impl Save {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// The seven sheet values of a Mothership character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub strength: Stat,
    pub speed: Stat,
    pub intellect: Stat,
    pub combat: Stat,
    pub sanity: Save,
    pub fear: Save,
    pub body: Save,
}

impl StatBlock {
    /// Build a block from raw values, in sheet order.
    pub fn new(
        strength: i64,
        speed: i64,
        intellect: i64,
        combat: i64,
        sanity: i64,
        fear: i64,
        body: i64,
    ) -> Self {
        Self {
            strength: Stat::new("Strength", strength),
            speed: Stat::new("Speed", speed),
            intellect: Stat::new("Intellect", intellect),
            combat: Stat::new("Combat", combat),
            sanity: Save::new("Sanity", sanity),
            fear: Save::new("Fear", fear),
            body: Save::new("Body", body),
        }
    }

    /// Look up a value by its lower-case sheet key.
    pub fn value_of(&self, key: &str) -> Option<i64> {
        match key {
            "strength" => Some(self.strength.value),
            "speed" => Some(self.speed.value),
            "intellect" => Some(self.intellect.value),
            "combat" => Some(self.combat.value),
            "sanity" => Some(self.sanity.value),
            "fear" => Some(self.fear.value),
            "body" => Some(self.body.value),
            _ => None,
        }
    }
}
