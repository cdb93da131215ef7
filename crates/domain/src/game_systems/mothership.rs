//! Mothership 1e reference tables.
//!
//! Mothership is a d100 roll-under sci-fi horror game. Skills come in three
//! tiers that add a flat bonus to a stat or save check, and Panic results
//! inflict named conditions on a character.
//!
//! Both tables are keyed by the lower-cased identifiers the companion
//! character builder exports.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

static SKILL_CATALOG: OnceLock<SkillCatalog> = OnceLock::new();
static CONDITION_CATALOG: OnceLock<ConditionCatalog> = OnceLock::new();

/// Training tier of a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillRank {
    Trained,
    Expert,
    Master,
}

impl SkillRank {
    /// Flat bonus a skill of this tier adds to a check.
    pub fn bonus(self) -> i64 {
        match self {
            Self::Trained => 10,
            Self::Expert => 15,
            Self::Master => 20,
        }
    }
}

impl fmt::Display for SkillRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trained => write!(f, "Trained"),
            Self::Expert => write!(f, "Expert"),
            Self::Master => write!(f, "Master"),
        }
    }
}

impl FromStr for SkillRank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trained" => Ok(Self::Trained),
            "expert" => Ok(Self::Expert),
            "master" => Ok(Self::Master),
            _ => Err(DomainError::parse(format!("Unknown skill rank: {}", s))),
        }
    }
}

/// Catalog data for one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub bonus: i64,
    pub rank: SkillRank,
}

const BUILTIN_SKILLS: &[(&str, SkillRank)] = &[
    // Trained
    ("archeology", SkillRank::Trained),
    ("art", SkillRank::Trained),
    ("athletics", SkillRank::Trained),
    ("botany", SkillRank::Trained),
    ("chemistry", SkillRank::Trained),
    ("computers", SkillRank::Trained),
    ("geology", SkillRank::Trained),
    ("industrialequipment", SkillRank::Trained),
    ("juryrigging", SkillRank::Trained),
    ("linguistics", SkillRank::Trained),
    ("mathematics", SkillRank::Trained),
    ("militarytraining", SkillRank::Trained),
    ("rimwise", SkillRank::Trained),
    ("theology", SkillRank::Trained),
    ("zerog", SkillRank::Trained),
    ("zoology", SkillRank::Trained),
    // Expert
    ("asteroidmining", SkillRank::Expert),
    ("ecology", SkillRank::Expert),
    ("explosives", SkillRank::Expert),
    ("fieldmedicine", SkillRank::Expert),
    ("firearms", SkillRank::Expert),
    ("hacking", SkillRank::Expert),
    ("handtohandcombat", SkillRank::Expert),
    ("mechanicalrepair", SkillRank::Expert),
    ("mysticism", SkillRank::Expert),
    ("pathology", SkillRank::Expert),
    ("pharmacology", SkillRank::Expert),
    ("physics", SkillRank::Expert),
    ("piloting", SkillRank::Expert),
    ("psychology", SkillRank::Expert),
    ("tactics", SkillRank::Expert),
    ("wildernesssurvival", SkillRank::Expert),
    // Master
    // Spelling matches the character builder's export key
    ("artificialintenligence", SkillRank::Master),
    ("command", SkillRank::Master),
    ("cybernetics", SkillRank::Master),
    ("engineering", SkillRank::Master),
    ("exobiology", SkillRank::Master),
    ("hyperspace", SkillRank::Master),
    ("planetology", SkillRank::Master),
    ("robotics", SkillRank::Master),
    ("sophontology", SkillRank::Master),
    ("surgery", SkillRank::Master),
    ("xenoesoterism", SkillRank::Master),
];

const BUILTIN_CONDITIONS: &[(&str, &str)] = &[
    ("adrenalinerush", "[+] on all rolls for the next 2d10 minutes. Reduce your Stress by 1d5."),
    ("anxious", "Gain 1 Stress."),
    ("jumpy", "Gain 1 Stress. All Close crewmembers gain 2 Stress."),
    ("overwhelmed", "All actions at [-] for 1d10 minutes. Permanently raise your Minimum Stress by 1."),
    ("coward", "Gain a new Condition: You must make a Fear Save to engage in violence or flee."),
    ("frightened", "Gain a new Condition: Phobia: When encountering your Phobia make a Fear Save [-] or gain 1d5 Stress."),
    ("nightmares", "Gain a new Condition: Sleep is difficult, gain [-] on all Rest Saves."),
    ("lossofconfidence", "Gain a new Condition: Choose one of your Skills and lose that Skill's bonus."),
    ("deflated", "Gain a new Condition: Whenever a Close crewmember fails a Save, gain 1 Stress."),
    ("doomed", "Gain a new Condition: You feel cursed and unlucky. All Critical Successes are instead Critical Failures."),
    ("paranoid", "For the next week, whenever someone joins your group (even if they only left for a short period of time), make a Fear Save or gain 1 Stress."),
    ("haunted", "Gain a new Condition: Something starts visiting you at night. In your dreams. Out of the corner of your eye. And soon it will start making demands."),
    ("deathwish", "For the next 24 hours, whenever you encounter a stranger or known enemy, you must make a Sanity Save or immediately attack them."),
    ("propheticvision", "You immediately experience an intense hallucination or vision of an impending terror or horrific event. Gain 1 Stress."),
    ("catatonic", "Become unresponsive and unmoving for 2d10 minutes. Reduce Stress by 1d10."),
    ("rage", "Immediately attack the closest crewmember until you inflict at least 2d10 DMG. If there is no crewmember Close, you attack your surrounding environment."),
    ("spiraling", "Gain a new Condition: You make Panic Checks with Disadvantage."),
    ("compoundingproblems", "Roll twice on this table. Permanently raise your Minimum Stress by 1."),
    ("heartattack", "Permanently lose 1 Wound. Gain [-] on all rolls for 1d10 hours. Permanently raise your Minimum Stress by 1."),
    ("collapse", "You no longer control this character. Hand your sheet to the Warden and roll up a new character to play."),
];

/// Fold a catalog key, rejecting empty keys and collisions.
fn insert_key<V>(
    entries: &mut HashMap<String, V>,
    kind: &str,
    key: &str,
    value: V,
) -> Result<(), DomainError> {
    let folded = key.trim().to_lowercase();
    if folded.is_empty() {
        return Err(DomainError::validation(format!(
            "{} catalog key cannot be empty",
            kind
        )));
    }
    if entries.insert(folded.clone(), value).is_some() {
        return Err(DomainError::validation(format!(
            "Duplicate {} catalog key: {}",
            kind, folded
        )));
    }
    Ok(())
}

// ============================================================================
// SkillCatalog
// ============================================================================

/// Skill key → bonus and rank. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCatalog {
    entries: HashMap<String, SkillEntry>,
}

impl SkillCatalog {
    /// The rulebook table, built on first use and shared process-wide.
    pub fn builtin() -> &'static SkillCatalog {
        SKILL_CATALOG.get_or_init(|| Self {
            entries: BUILTIN_SKILLS
                .iter()
                .map(|(key, rank)| {
                    (
                        (*key).to_string(),
                        SkillEntry {
                            bonus: rank.bonus(),
                            rank: *rank,
                        },
                    )
                })
                .collect(),
        })
    }

    /// Build a custom catalog. Keys are lower-cased; duplicates after folding are rejected.
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, SkillEntry)>,
    ) -> Result<Self, DomainError> {
        let mut map = HashMap::new();
        for (key, entry) in entries {
            insert_key(&mut map, "skill", key, entry)?;
        }
        Ok(Self { entries: map })
    }

    /// Case-insensitive lookup.
    pub fn get(&self, key: &str) -> Option<&SkillEntry> {
        self.entries.get(&key.to_lowercase())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// ConditionCatalog
// ============================================================================

/// Condition key → effect text. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionCatalog {
    entries: HashMap<String, String>,
}

impl ConditionCatalog {
    /// The Panic table conditions, built on first use and shared process-wide.
    pub fn builtin() -> &'static ConditionCatalog {
        CONDITION_CATALOG.get_or_init(|| Self {
            entries: BUILTIN_CONDITIONS
                .iter()
                .map(|(key, text)| ((*key).to_string(), (*text).to_string()))
                .collect(),
        })
    }

    /// Build a custom catalog. Keys are lower-cased; duplicates after folding are rejected.
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, DomainError> {
        let mut map = HashMap::new();
        for (key, description) in entries {
            insert_key(&mut map, "condition", key, description.to_string())?;
        }
        Ok(Self { entries: map })
    }

    /// Case-insensitive lookup of the effect text.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&key.to_lowercase()).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
