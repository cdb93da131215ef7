//! Mothership importer - command-line entry point.
//!
//! Usage: `mosh-engine [PATH]`. Reads the export from stdin when PATH is
//! absent or `-`.

use anyhow::Context;
use tokio::io::AsyncReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mosh_engine::config::{load_dotenv_from_repo_root, EngineConfig};
use mosh_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_failures = load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mosh_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    for (path, err) in dotenv_failures {
        tracing::warn!(path = %path.display(), error = %err, "Ignoring unreadable env file");
    }

    let config = EngineConfig::from_env();
    tracing::info!(actor_dir = %config.actor_dir.display(), "Starting Mothership importer");

    let raw = read_input(std::env::args().nth(1)).await?;

    let app = App::from_config(&config);
    let created = app.use_cases.import_actor.execute(&raw).await?;

    println!("{}", created.id);
    Ok(())
}

async fn read_input(path: Option<String>) -> anyhow::Result<String> {
    match path.as_deref() {
        None | Some("-") => {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("failed to read export from stdin")?;
            Ok(raw)
        }
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read export from {}", path)),
    }
}
