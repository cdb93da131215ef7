//! Infrastructure implementations.
//!
//! Contains the importer and port trait implementations for external dependencies.

pub mod clock;
pub mod importers;
pub mod notifications;
pub mod persistence;
pub mod ports;
