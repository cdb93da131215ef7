//! Type definitions for the Mothership character builder's JSON export.
//!
//! These types mirror the builder's export shape for characters, gear,
//! armor, weapons and conditions. They are used for deserialization and
//! then converted to domain types.
//!
//! The builder is not consistent about number encoding, so numeric fields
//! accept either JSON numbers or numeric strings.

use serde::Deserialize;

/// Root structure of a character export.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MothershipExport {
    pub name: String,
    pub character_class: String,

    #[serde(deserialize_with = "lenient::int")]
    pub health: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub max_health: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub wounds: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub max_wounds: i64,

    #[serde(deserialize_with = "lenient::int")]
    pub strength: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub speed: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub intellect: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub combat: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub sanity: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub fear: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub body: i64,

    #[serde(deserialize_with = "lenient::int")]
    pub stress: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub min_stress: i64,

    #[serde(default, deserialize_with = "lenient::int_or_zero")]
    pub credits: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub pronouns: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub trauma_response: String,
    /// Name of the stat the builder rolled highest
    #[serde(default, deserialize_with = "lenient::text")]
    pub high_score: String,

    #[serde(default)]
    pub trinket: Option<String>,
    #[serde(default)]
    pub patch: Option<String>,

    #[serde(default)]
    pub equipment: Vec<MothershipEquipment>,
    #[serde(default)]
    pub items: Vec<MothershipLoadoutItem>,
    #[serde(default)]
    pub armor: Vec<MothershipArmor>,
    #[serde(default)]
    pub weapons: Vec<MothershipWeapon>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<MothershipCondition>,
}

impl MothershipExport {
    /// Number of items the export expands into.
    pub fn item_count(&self) -> usize {
        usize::from(present(&self.trinket).is_some())
            + usize::from(present(&self.patch).is_some())
            + self.equipment.len()
            + self.items.len()
            + self.armor.len()
            + self.weapons.len()
            + self.skills.len()
            + self.conditions.len()
    }
}

/// An empty or whitespace-only string counts as not exported.
pub(super) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Gear from the equipment list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MothershipEquipment {
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::int_or_zero")]
    pub cost: i64,
    #[serde(default = "default_quantity", deserialize_with = "lenient::quantity")]
    pub quantity: i64,
}

/// Loadout items, which the builder names by `title`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MothershipLoadoutItem {
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::int_or_zero")]
    pub cost: i64,
    #[serde(default = "default_quantity", deserialize_with = "lenient::quantity")]
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MothershipArmor {
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub notes: String,
    #[serde(default, deserialize_with = "lenient::int_or_zero")]
    pub cost: i64,
    #[serde(default, deserialize_with = "lenient::int_or_zero")]
    pub armor_points: i64,
    #[serde(default)]
    pub equipped: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MothershipWeapon {
    pub weapon_type: String,
    /// Special rules text
    #[serde(default, deserialize_with = "lenient::text")]
    pub special: String,
    #[serde(default, deserialize_with = "lenient::int_or_zero")]
    pub cost: i64,
    /// Range band text, e.g. "Close" or "Long"
    #[serde(default, deserialize_with = "lenient::text")]
    pub weapon_range: String,
    #[serde(default)]
    pub equipped: bool,
    /// Critical injury text
    #[serde(default, deserialize_with = "lenient::text")]
    pub critical: String,
    #[serde(default, deserialize_with = "lenient::int_or_zero")]
    pub shots: i64,
    #[serde(default, deserialize_with = "lenient::int_or_zero")]
    pub magazines: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub damage_string: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MothershipCondition {
    pub condition_type: String,
}

fn default_quantity() -> i64 {
    1
}

mod lenient {
    use serde::de::{Deserializer, Error};
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawScalar {
        Int(i64),
        Float(f64),
        Bool(bool),
        Text(String),
    }

    fn to_int<E: Error>(raw: RawScalar) -> Result<i64, E> {
        match raw {
            RawScalar::Int(n) => Ok(n),
            RawScalar::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
            RawScalar::Float(f) => Err(E::custom(format!("expected an integer, found {}", f))),
            RawScalar::Bool(b) => Err(E::custom(format!("expected an integer, found {}", b))),
            RawScalar::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("expected an integer, found \"{}\"", s))),
        }
    }

    /// A required integer, given as a number or numeric string.
    pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        to_int(RawScalar::deserialize(deserializer)?)
    }

    /// An optional integer; `null` reads as zero.
    pub fn int_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Option::<RawScalar>::deserialize(deserializer)? {
            Some(raw) => to_int(raw),
            None => Ok(0),
        }
    }

    /// An item count; `null` reads as a single item.
    pub fn quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Option::<RawScalar>::deserialize(deserializer)? {
            Some(raw) => to_int(raw),
            None => Ok(super::default_quantity()),
        }
    }

    /// Free text; numbers and booleans are kept as written, `null` reads as empty.
    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Option::<RawScalar>::deserialize(deserializer)? {
            Some(RawScalar::Text(s)) => s,
            Some(RawScalar::Int(n)) => n.to_string(),
            Some(RawScalar::Float(f)) => f.to_string(),
            Some(RawScalar::Bool(b)) => b.to_string(),
            None => String::new(),
        })
    }
}
