//! Content importers for various data sources.
//!
//! This module provides importers for loading characters from external
//! tools like the Mothership character builder, converting the data to our
//! domain types.

mod mothership;
mod mothership_types;

pub use mothership::{ImportError, MothershipImporter, ReferenceKind};
pub use mothership_types::{
    MothershipArmor, MothershipCondition, MothershipEquipment, MothershipExport,
    MothershipLoadoutItem, MothershipWeapon,
};
