//! Game system reference data.
//!
//! Static tables the importer resolves exported keys against.
//!
//! # Supported Systems
//!
//! - Mothership 1st Edition (`mothership`)

mod mothership;

pub use mothership::{ConditionCatalog, SkillCatalog, SkillEntry, SkillRank};
