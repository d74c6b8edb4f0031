//! Inspection CLI for a folio content directory.
//!
//! Loads the static bundle the same way the site does and prints aggregator
//! output as JSON, so content changes can be checked without a browser.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{
    detail_excerpt, init_from_config, open_detail_store, CategoryFilter, ContentConfig,
    DetailResolver, DetailState, DetailStore, FileDetailStore, PortfolioService,
    SqliteDetailStore,
};
use log::info;
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Inspect folio portfolio content")]
struct Cli {
    /// Directory holding timeline.json, gallery.json, writings.json, projects.json.
    #[arg(long, short = 'c', default_value = "content")]
    content_dir: PathBuf,

    /// Detail directory; defaults to `<content-dir>/details`.
    #[arg(long)]
    detail_dir: Option<PathBuf>,

    /// SQLite detail database used instead of the detail directory.
    #[arg(long)]
    detail_db: Option<PathBuf>,

    /// Number of writings shown by `writings` without `--all`.
    #[arg(long, default_value_t = folio_core::RECENT_WRITINGS_DEFAULT)]
    recent: usize,

    #[arg(long, default_value = folio_core::default_log_level())]
    log_level: String,

    /// Absolute directory for rolling log files; logging is off without it.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Collection sizes and category counts.
    Summary,
    /// Timeline entries newest first.
    Timeline {
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
    },
    /// Gallery items newest first.
    Gallery {
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
    },
    /// Most recent writings.
    Writings {
        #[arg(long)]
        all: bool,
    },
    /// Projects, optionally filtered by technology.
    Projects {
        #[arg(long, default_value = "")]
        tech: String,
    },
    /// Distinct technology tags with project counts.
    Technologies,
    /// Resolve the detail record of one timeline entry.
    Detail { id: String },
    /// Copy detail files of every `hasDetail` entry into a SQLite database.
    ImportDetails {
        #[arg(long)]
        db: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    init_from_config(&config).context("failed to initialize logging")?;

    let service = PortfolioService::load(&config)
        .with_context(|| format!("failed to load {}", config.content_dir().display()))?;

    let output = match cli.command {
        Command::Summary => serde_json::to_value(service.summary())?,
        Command::Timeline { category } => serde_json::to_value(service.timeline().view(category))?,
        Command::Gallery { category } => serde_json::to_value(service.gallery().view(category))?,
        Command::Writings { all } => {
            let writings = service.writings();
            let items = if all {
                writings.sorted()
            } else {
                writings.recent_default()
            };
            serde_json::to_value(items)?
        }
        Command::Projects { tech } => serde_json::to_value(service.projects().filter(&tech))?,
        Command::Technologies => serde_json::to_value(service.projects().technology_counts())?,
        Command::Detail { id } => {
            let Some(key) = service.timeline().detail_key(&id) else {
                bail!("timeline entry `{id}` is unknown or has no detail page");
            };
            let store = open_detail_store(&config)?;
            let mut resolver = DetailResolver::new();
            match resolver.resolve_now(store.as_ref(), Some(key)) {
                DetailState::Found { record, .. } => json!({
                    "record": record,
                    "excerpt": detail_excerpt(record).text,
                }),
                _ => json!({ "id": key, "record": null }),
            }
        }
        Command::ImportDetails { db } => {
            let source = FileDetailStore::new(config.detail_dir());
            let target = SqliteDetailStore::open(&db)?;
            let mut imported = 0usize;
            let mut missing = Vec::new();
            for entry in service.timeline().sorted().iter().filter(|e| e.has_detail) {
                match source.load(&entry.id)? {
                    Some(record) => {
                        target.put(&record)?;
                        imported += 1;
                    }
                    None => missing.push(entry.id.clone()),
                }
            }
            info!(
                "event=detail_import module=cli status=ok imported={} missing={}",
                imported,
                missing.len()
            );
            json!({ "imported": imported, "missing": missing })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn build_config(cli: &Cli) -> Result<ContentConfig> {
    let mut config = ContentConfig::new(cli.content_dir.clone())?
        .with_recent_writings(cli.recent)?
        .with_logging(&cli.log_level, cli.log_dir.clone())?;
    if let Some(dir) = &cli.detail_dir {
        config = config.with_detail_dir(dir.clone());
    }
    if let Some(db) = &cli.detail_db {
        config = config.with_detail_db(db.clone());
    }
    Ok(config)
}
