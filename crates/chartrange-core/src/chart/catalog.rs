use std::fs;
use std::path::Path;

use tracing::debug;

use crate::chart::Song;
use crate::error::Result;

/// Load the song catalog from a JSON file (an array of songs)
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Song>> {
    let content = fs::read_to_string(path.as_ref())?;
    let songs = parse_catalog(&content)?;
    debug!("Loaded {} songs from {:?}", songs.len(), path.as_ref());
    Ok(songs)
}

pub fn parse_catalog(content: &str) -> Result<Vec<Song>> {
    Ok(serde_json::from_str(content)?)
}
