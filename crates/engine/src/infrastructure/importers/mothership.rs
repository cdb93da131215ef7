//! Mothership character builder importer.
//!
//! Converts a pasted character export into an actor document with its
//! derived items. The transform is all-or-nothing: any parse, shape or
//! catalog failure returns an error and no document.

use std::fmt;

use thiserror::Error;

use super::mothership_types::{
    present, MothershipArmor, MothershipCondition, MothershipEquipment, MothershipExport,
    MothershipLoadoutItem, MothershipWeapon,
};
use mosh_domain::{
    capitalize_first, display_name, ActorDocument, ActorItem, ActorSettings, ActorType,
    ArmorData, ArmorItem, Attributes, CharacterSystem, ConditionCatalog, ConditionData,
    ConditionItem, Experience, GearData, GearItem, HealthTrack, OtherResources, PrototypeToken,
    SkillCatalog, SkillData, SkillItem, StatBlock, StressTrack, Treatment, ValueField,
    WeaponData, WeaponItem, WeaponRanges, Weight, WoundTrack, DEFAULT_ACTOR_IMAGE,
    DEFAULT_ITEM_IMAGE,
};

/// Condition name androids see in place of a heart attack.
const ANDROID_HEART_ATTACK_NAME: &str = "Short Circuit";

/// Which catalog a key failed to resolve in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Skill,
    Condition,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skill => write!(f, "skill"),
            Self::Condition => write!(f, "condition"),
        }
    }
}

/// Errors that can occur during import.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Input is not syntactically valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[source] serde_json::Error),
    /// Valid JSON that does not match the export shape.
    #[error("Invalid character export: {0}")]
    InvalidDocument(String),
    /// A skill or condition key has no catalog entry.
    #[error("Unknown {kind} '{key}'")]
    UnknownReference { kind: ReferenceKind, key: String },
}

impl ImportError {
    pub fn invalid_document(message: impl ToString) -> Self {
        Self::InvalidDocument(message.to_string())
    }

    pub fn unknown_reference(kind: ReferenceKind, key: impl Into<String>) -> Self {
        Self::UnknownReference {
            kind,
            key: key.into(),
        }
    }
}

/// Importer for Mothership character builder exports.
///
/// Holds borrowed catalogs so concurrent imports can share one set of tables.
#[derive(Debug, Clone, Copy)]
pub struct MothershipImporter<'c> {
    skills: &'c SkillCatalog,
    conditions: &'c ConditionCatalog,
}

impl MothershipImporter<'static> {
    /// An importer backed by the rulebook catalogs.
    pub fn new() -> Self {
        Self {
            skills: SkillCatalog::builtin(),
            conditions: ConditionCatalog::builtin(),
        }
    }
}

impl Default for MothershipImporter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> MothershipImporter<'c> {
    pub fn with_catalogs(skills: &'c SkillCatalog, conditions: &'c ConditionCatalog) -> Self {
        Self { skills, conditions }
    }

    /// Parse raw pasted text and convert it.
    pub fn import(&self, raw: &str) -> Result<ActorDocument, ImportError> {
        let value: serde_json::Value = serde_json::from_str(raw).map_err(ImportError::Parse)?;

        if !value.is_object() {
            return Err(ImportError::invalid_document(
                "expected a JSON object at the top level",
            ));
        }

        let export: MothershipExport =
            serde_json::from_value(value).map_err(ImportError::invalid_document)?;

        self.convert(export)
    }

    /// Convert an already-deserialized export into an actor document.
    pub fn convert(&self, export: MothershipExport) -> Result<ActorDocument, ImportError> {
        let is_android = export.character_class.eq_ignore_ascii_case("android");
        let mut items = Vec::with_capacity(export.item_count());

        if let Some(trinket) = present(&export.trinket) {
            items.push(ActorItem::Item(GearItem::named(format!("Trinket: {}", trinket))));
        }
        if let Some(patch) = present(&export.patch) {
            items.push(ActorItem::Item(GearItem::named(format!("Patch: {}", patch))));
        }

        items.extend(export.equipment.iter().map(convert_equipment));
        items.extend(export.items.iter().map(convert_loadout_item));
        items.extend(export.armor.iter().map(convert_armor));
        items.extend(export.weapons.iter().map(convert_weapon));

        for key in &export.skills {
            items.push(self.convert_skill(key)?);
        }
        for condition in &export.conditions {
            items.push(self.convert_condition(condition, is_android)?);
        }

        tracing::debug!(
            actor = %export.name,
            class = %export.character_class,
            items = items.len(),
            "Converted character export"
        );

        let system = CharacterSystem {
            health: HealthTrack {
                value: export.health,
                max: export.max_health,
                min: 0,
            },
            hits: WoundTrack {
                value: export.wounds,
                max: export.max_wounds,
            },
            biography: String::new(),
            notes: String::new(),
            weight: Weight::default(),
            settings: ActorSettings::default(),
            class: ValueField::new(capitalize_first(&export.character_class)),
            rank: ValueField::default(),
            pronouns: ValueField::new(export.pronouns),
            credits: ValueField::new(export.credits),
            stressdesc: ValueField::new(export.trauma_response),
            xp: Experience::default(),
            attributes: Attributes {
                level: ValueField::new(export.high_score),
            },
            stats: StatBlock::new(
                export.strength,
                export.speed,
                export.intellect,
                export.combat,
                export.sanity,
                export.fear,
                export.body,
            ),
            other: OtherResources {
                stress: StressTrack::new(export.stress, export.min_stress),
                resolve: 0,
            },
        };

        Ok(ActorDocument {
            name: export.name,
            actor_type: ActorType::Character,
            img: DEFAULT_ACTOR_IMAGE.to_string(),
            system,
            prototype_token: PrototypeToken::with_image(DEFAULT_ACTOR_IMAGE),
            items,
        })
    }

    fn convert_skill(&self, key: &str) -> Result<ActorItem, ImportError> {
        let entry = self
            .skills
            .get(key)
            .ok_or_else(|| ImportError::unknown_reference(ReferenceKind::Skill, key))?;

        Ok(ActorItem::Skill(SkillItem {
            name: display_name(key),
            img: DEFAULT_ITEM_IMAGE.to_string(),
            system: SkillData {
                description: String::new(),
                bonus: entry.bonus,
                rank: entry.rank,
            },
        }))
    }

    fn convert_condition(
        &self,
        condition: &MothershipCondition,
        is_android: bool,
    ) -> Result<ActorItem, ImportError> {
        let key = condition.condition_type.as_str();
        let description = self
            .conditions
            .get(key)
            .ok_or_else(|| ImportError::unknown_reference(ReferenceKind::Condition, key))?;

        let name = if is_android && key.eq_ignore_ascii_case("heartattack") {
            ANDROID_HEART_ATTACK_NAME.to_string()
        } else {
            display_name(key)
        };

        Ok(ActorItem::Condition(ConditionItem {
            name,
            img: DEFAULT_ITEM_IMAGE.to_string(),
            system: ConditionData {
                description: description.to_string(),
                treatment: Treatment::default(),
            },
        }))
    }
}

fn convert_equipment(raw: &MothershipEquipment) -> ActorItem {
    ActorItem::Item(GearItem::with_data(
        raw.name.as_str(),
        GearData {
            description: raw.description.clone(),
            cost: raw.cost,
            quantity: raw.quantity,
        },
    ))
}

fn convert_loadout_item(raw: &MothershipLoadoutItem) -> ActorItem {
    ActorItem::Item(GearItem::with_data(
        raw.title.as_str(),
        GearData {
            description: raw.description.clone(),
            cost: raw.cost,
            quantity: raw.quantity,
        },
    ))
}

fn convert_armor(raw: &MothershipArmor) -> ActorItem {
    ActorItem::Armor(ArmorItem {
        name: raw.name.clone(),
        img: DEFAULT_ITEM_IMAGE.to_string(),
        system: ArmorData {
            description: raw.notes.clone(),
            cost: raw.cost,
            bonus: raw.armor_points,
            equipped: raw.equipped,
        },
    })
}

fn convert_weapon(raw: &MothershipWeapon) -> ActorItem {
    ActorItem::Weapon(WeaponItem {
        name: raw.weapon_type.clone(),
        img: DEFAULT_ITEM_IMAGE.to_string(),
        system: WeaponData {
            description: raw.special.clone(),
            cost: raw.cost,
            ranges: WeaponRanges {
                value: raw.weapon_range.clone(),
                ..WeaponRanges::default()
            },
            equipped: raw.equipped,
            crit_effect: String::new(),
            crit_dmg: raw.critical.clone(),
            shots: raw.shots,
            cur_shots: raw.shots,
            ammo: raw.magazines,
            shots_per_fire: "1".to_string(),
            use_ammo: false,
            ammo_type: String::new(),
            damage: raw.damage_string.clone(),
        },
    })
}
