use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scoring::ScoringOptions;

/// Application configuration, loaded from `chartrange.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Song catalog (JSON)
    pub catalog: PathBuf,
    /// Where filter control values are persisted; `None` keeps them in memory
    pub state_file: Option<PathBuf>,
    /// Initial scoring options
    pub options: ScoringOptions,
    pub header: HeaderConfig,
}

/// Column header row settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Whether the table has a clickable header row
    pub enabled: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("songs.json"),
            state_file: Some(PathBuf::from("filters.json")),
            options: ScoringOptions::default(),
            header: HeaderConfig::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
