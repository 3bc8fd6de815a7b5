//! geocache - inspect and seed the persistent coordinate store
//!
//! Output is JSON on stdout; logs go to stderr.

#![allow(missing_docs)]

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use geocache::config::{BlobBackendKind, Config, StorageConfig};
use geocache::core::types::StoredLocation;
use geocache::utils::logging::init_logging;
use geocache::{
    CacheManager, CoordinateDictionary, GeocacheError, SaveStatus, open_persistent_cache,
};
use serde_json::json;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "geocache", version, about = "Coordinate cache maintenance tool")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "GEOCACHE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up stored coordinates
    Get {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Merge a `{"key": {"lat": .., "lon": ..}}` JSON file into the store
    Import { file: PathBuf },
    /// Print every stored coordinate
    List,
    /// Print storage permission and build information
    Status,
}

impl Command {
    /// Whether the command reads or writes stored coordinates
    fn touches_data(&self) -> bool {
        !matches!(self, Command::Status)
    }
}

/// A memory blob store lives only as long as this process
fn ensure_durable(storage: &StorageConfig) -> Result<(), GeocacheError> {
    match storage.backend {
        BlobBackendKind::Local => Ok(()),
        BlobBackendKind::Memory => Err(GeocacheError::config(
            "storage backend 'memory' does not outlive the process; \
             set storage.backend to 'local' or GEOCACHE_STORAGE_BACKEND=local",
        )),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            match e.downcast_ref::<GeocacheError>() {
                Some(err) if err.is_invalid_input() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_ref()).await?;
    if cli.command.touches_data() {
        ensure_durable(&config.storage)?;
    }
    init_logging(&config.logging)?;

    let cache = open_persistent_cache(&config.storage).await?;

    let output = match cli.command {
        Command::Get { keys } => {
            let found = cache.load_coordinates(&keys).await?;
            let missing: Vec<&String> = keys.iter().filter(|k| !found.contains_key(*k)).collect();
            json!({ "found": found, "missing": missing })
        }
        Command::Import { file } => {
            let text = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("reading {}", file.display()))?;
            let coordinates = parse_import(&text)
                .with_context(|| format!("parsing {}", file.display()))?;

            match cache.save_coordinates(&coordinates).await? {
                SaveStatus::Stored(count) => json!({ "imported": count }),
                SaveStatus::Discarded(reason) => {
                    bail!("import discarded: {:?}", reason)
                }
            }
        }
        Command::List => {
            let all = cache.load_coordinates(&[]).await?;
            json!({ "count": all.len(), "coordinates": all })
        }
        Command::Status => json!({
            "storage_key": cache.storage_key(),
            "backend": config.storage.backend.to_string(),
            "permission": cache.permission(),
            "build": geocache::build_info(),
        }),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn parse_import(text: &str) -> anyhow::Result<CoordinateDictionary> {
    let stored: HashMap<String, StoredLocation> = serde_json::from_str(text)?;
    Ok(stored
        .into_iter()
        .map(|(key, location)| (key, location.into()))
        .collect())
}
