//! Value objects - immutable sheet fragments
//!
//! Owned by actor documents and compared by value.

mod names;
mod stat_block;
mod token;

pub use names::{capitalize_first, display_name};
pub use stat_block::{Save, Stat, StatBlock};
pub use token::{
    PrototypeToken, TokenAnimation, TokenBar, TokenDarkness, TokenDisplayMode, TokenDisposition,
    TokenLight, TokenSight, TokenTexture,
};
