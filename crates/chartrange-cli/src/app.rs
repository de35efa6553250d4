//! Shared setup: config, catalog, persisted state and the table session.

use anyhow::{Context, Result};
use chartrange_core::{
    Config, FieldStore, JsonFieldStore, MemoryFieldStore, MemorySink, Session, SongTable,
    SortState, TabulatedModel, load_catalog,
};
use tracing::{info, warn};

use crate::cli::Args;

pub type CliSession = Session<TabulatedModel, Box<dyn FieldStore>, MemorySink>;

/// Load the config file and apply command-line overrides.
///
/// A missing or unreadable config file falls back to defaults.
pub fn load_config(args: &Args) -> Config {
    let mut config = if args.config.exists() {
        match Config::load(&args.config) {
            Ok(c) => {
                info!("Loaded config from {:?}", args.config);
                c
            }
            Err(e) => {
                warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if let Some(catalog) = &args.catalog {
        config.catalog = catalog.clone();
    }
    if let Some(state) = &args.state {
        config.state_file = Some(state.clone());
    }
    if args.no_persist {
        config.state_file = None;
    }
    if let Some(bp) = args.bp {
        config.options.bp = Some(bp);
    }
    config
}

fn open_store(config: &Config) -> Result<Box<dyn FieldStore>> {
    match &config.state_file {
        Some(path) => {
            let store = JsonFieldStore::open(path)
                .with_context(|| format!("Failed to open state file {:?}", path))?;
            Ok(Box::new(store))
        }
        None => Ok(Box::new(MemoryFieldStore::new())),
    }
}

/// Build a session over the configured catalog, before any rows are built
pub fn build_session(config: &Config, sort: Option<SortState>) -> Result<CliSession> {
    let songs = load_catalog(&config.catalog)
        .with_context(|| format!("Failed to load catalog {:?}", config.catalog))?;
    info!("Loaded {} songs", songs.len());

    let mut table = SongTable::new(TabulatedModel, open_store(config)?, songs);
    if let Some(sort) = sort {
        table.set_sort_state(sort);
    }

    Ok(Session::init(table, MemorySink::new(), config.header.enabled)?)
}
