//! Mothership character importer engine.
//!
//! Converts character-generator exports into host actor documents and
//! hands them to a creation port.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration
//! - `infrastructure/` - Importer, ports and adapters
//! - `config` - Environment configuration
//! - `app` - Application composition

pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use config::EngineConfig;
