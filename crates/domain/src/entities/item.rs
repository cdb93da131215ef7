//! Item entity - sub-records attached to an actor
//!
//! Every item carries a `type` tag the host uses to pick its sheet and data
//! model. Each variant owns the attribute record that type requires, so an
//! armor item cannot be built without a bonus or a weapon without ranges.

use serde::{Deserialize, Serialize};

use crate::game_systems::SkillRank;

/// Image the host shows for imported items.
pub const DEFAULT_ITEM_IMAGE: &str = "icons/svg/item-bag.svg";

/// An item on an actor, tagged by host item type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActorItem {
    Item(GearItem),
    Armor(ArmorItem),
    Weapon(WeaponItem),
    Skill(SkillItem),
    Condition(ConditionItem),
}

impl ActorItem {
    pub fn name(&self) -> &str {
        match self {
            Self::Item(item) => &item.name,
            Self::Armor(item) => &item.name,
            Self::Weapon(item) => &item.name,
            Self::Skill(item) => &item.name,
            Self::Condition(item) => &item.name,
        }
    }

    /// The host's `type` tag.
    pub fn item_type(&self) -> &'static str {
        match self {
            Self::Item(_) => "item",
            Self::Armor(_) => "armor",
            Self::Weapon(_) => "weapon",
            Self::Skill(_) => "skill",
            Self::Condition(_) => "condition",
        }
    }

    pub fn as_gear(&self) -> Option<&GearItem> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_armor(&self) -> Option<&ArmorItem> {
        match self {
            Self::Armor(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_weapon(&self) -> Option<&WeaponItem> {
        match self {
            Self::Weapon(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_skill(&self) -> Option<&SkillItem> {
        match self {
            Self::Skill(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_condition(&self) -> Option<&ConditionItem> {
        match self {
            Self::Condition(item) => Some(item),
            _ => None,
        }
    }
}

// ============================================================================
// Gear
// ============================================================================

/// Generic gear. Trinkets and patches have neither image nor data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<GearData>,
}

impl GearItem {
    /// A bare named item, as used for trinkets and patches.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            img: None,
            system: None,
        }
    }

    pub fn with_data(name: impl Into<String>, system: GearData) -> Self {
        Self {
            name: name.into(),
            img: Some(DEFAULT_ITEM_IMAGE.to_string()),
            system: Some(system),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearData {
    pub description: String,
    pub cost: i64,
    pub quantity: i64,
}

// ============================================================================
// Armor
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorItem {
    pub name: String,
    pub img: String,
    pub system: ArmorData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorData {
    pub description: String,
    pub cost: i64,
    /// Armor points
    pub bonus: i64,
    pub equipped: bool,
}

// ============================================================================
// Weapon
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponItem {
    pub name: String,
    pub img: String,
    pub system: WeaponData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponData {
    pub description: String,
    pub cost: i64,
    pub ranges: WeaponRanges,
    pub equipped: bool,
    pub crit_effect: String,
    pub crit_dmg: String,
    pub shots: i64,
    pub cur_shots: i64,
    /// Spare magazines
    pub ammo: i64,
    pub shots_per_fire: String,
    pub use_ammo: bool,
    pub ammo_type: String,
    /// Damage expression, e.g. `"2d10"`
    pub damage: String,
}

/// Range bands. Imported weapons only fill `value` with the exported range text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeaponRanges {
    pub short: i64,
    pub medium: i64,
    pub long: i64,
    pub value: String,
}

// ============================================================================
// Skill
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    pub img: String,
    pub system: SkillData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillData {
    pub description: String,
    pub bonus: i64,
    pub rank: SkillRank,
}

// ============================================================================
// Condition
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionItem {
    pub name: String,
    pub img: String,
    pub system: ConditionData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionData {
    /// Effect text from the condition catalog
    pub description: String,
    pub treatment: Treatment,
}

/// Progress toward curing a condition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Treatment {
    pub value: i64,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_are_tagged_by_type() {
        let trinket = ActorItem::Item(GearItem::named("Trinket: Lighter"));
        let json = serde_json::to_value(&trinket).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"type": "item", "name": "Trinket: Lighter"})
        );

        let skill = ActorItem::Skill(SkillItem {
            name: "Piloting".into(),
            img: DEFAULT_ITEM_IMAGE.into(),
            system: SkillData {
                description: String::new(),
                bonus: 15,
                rank: SkillRank::Expert,
            },
        });
        let json = serde_json::to_value(&skill).expect("serialize");
        assert_eq!(json["type"], "skill");
        assert_eq!(json["system"]["rank"], "Expert");
        assert_eq!(json["img"], DEFAULT_ITEM_IMAGE);
    }

    #[test]
    fn weapon_fields_use_host_names() {
        let weapon = ActorItem::Weapon(WeaponItem {
            name: "Pulse Rifle".into(),
            img: DEFAULT_ITEM_IMAGE.into(),
            system: WeaponData {
                description: String::new(),
                cost: 2400,
                ranges: WeaponRanges {
                    value: "Long".into(),
                    ..WeaponRanges::default()
                },
                equipped: true,
                crit_effect: String::new(),
                crit_dmg: "Gore".into(),
                shots: 5,
                cur_shots: 5,
                ammo: 3,
                shots_per_fire: "1".into(),
                use_ammo: false,
                ammo_type: String::new(),
                damage: "3d10".into(),
            },
        });
        let json = serde_json::to_value(&weapon).expect("serialize");
        let system = &json["system"];
        assert_eq!(system["curShots"], 5);
        assert_eq!(system["critDmg"], "Gore");
        assert_eq!(system["shotsPerFire"], "1");
        assert_eq!(system["ranges"]["value"], "Long");
        assert_eq!(system["ranges"]["short"], 0);
    }

    #[test]
    fn typed_accessors_match_variant() {
        let item = ActorItem::Condition(ConditionItem {
            name: "Anxious".into(),
            img: DEFAULT_ITEM_IMAGE.into(),
            system: ConditionData {
                description: "Gain 1 Stress.".into(),
                treatment: Treatment::default(),
            },
        });
        assert_eq!(item.name(), "Anxious");
        assert_eq!(item.item_type(), "condition");
        assert!(item.as_condition().is_some());
        assert!(item.as_skill().is_none());
        assert!(item.as_gear().is_none());
    }

    #[test]
    fn tagged_item_deserializes_back() {
        let json = serde_json::json!({
            "type": "armor",
            "name": "Vaccsuit",
            "img": DEFAULT_ITEM_IMAGE,
            "system": {"description": "", "cost": 10000, "bonus": 3, "equipped": false}
        });
        let item: ActorItem = serde_json::from_value(json).expect("deserialize");
        assert_eq!(item.as_armor().map(|a| a.system.bonus), Some(3));
    }
}
