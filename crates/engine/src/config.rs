//! Environment configuration for the engine.

use std::path::{Path, PathBuf};

/// Directory used when `MOSH_ACTOR_DIR` is unset or blank.
pub const DEFAULT_ACTOR_DIR: &str = "actors";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Where the file store writes created actors
    pub actor_dir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            actor_dir: PathBuf::from(DEFAULT_ACTOR_DIR),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let actor_dir = lookup("MOSH_ACTOR_DIR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ACTOR_DIR));

        Self { actor_dir }
    }
}

/// Load `.env.local` then `.env` from the workspace root, if present.
///
/// Variables already set in the process environment win. Files that fail
/// to parse are returned so the caller can log them once tracing is up.
pub fn load_dotenv_from_repo_root() -> Vec<(PathBuf, dotenvy::Error)> {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    load_dotenv_from(&repo_root)
}

pub fn load_dotenv_from(dir: &Path) -> Vec<(PathBuf, dotenvy::Error)> {
    let mut failures = Vec::new();

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = dir.join(filename);
        if path.exists() {
            if let Err(e) = dotenvy::from_path(&path) {
                failures.push((path, e));
            }
        }
    }

    failures
}
