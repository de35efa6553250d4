use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

use crate::chart::{Chart, Difficulty};
use crate::error::{Error, Result};

/// Which title field the table shows (value of the `display` selector)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum DisplayMode {
    #[default]
    #[strum(serialize = "original")]
    Original = 0,
    #[strum(serialize = "english")]
    English = 1,
    #[strum(serialize = "romanized")]
    Romanized = 2,
}

impl DisplayMode {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Parse the selector's integer value
    pub fn parse(value: &str) -> Result<Self> {
        value
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_u8)
            .ok_or_else(|| Error::InvalidDisplayMode(value.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Song metadata with one optional chart per difficulty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub song_id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_romaji: Option<String>,
    /// `None` marks a difficulty slot the song has no chart for
    #[serde(default)]
    pub charts: BTreeMap<Difficulty, Option<Chart>>,
}

impl Song {
    /// Title to show for the given display mode.
    ///
    /// Returns `None` when the song has no usable title in that mode; such
    /// rows are left out of the table.
    pub fn locale_title(&self, display: DisplayMode) -> Option<&str> {
        let title = match display {
            DisplayMode::Original => Some(self.title.as_str()),
            DisplayMode::English => self.title_en.as_deref(),
            DisplayMode::Romanized => self.title_romaji.as_deref(),
        };
        title.map(str::trim).filter(|t| !t.is_empty())
    }

    /// Charts present on this song, in difficulty order
    pub fn charts(&self) -> impl Iterator<Item = (Difficulty, &Chart)> {
        self.charts
            .iter()
            .filter_map(|(difficulty, chart)| chart.as_ref().map(|c| (*difficulty, c)))
    }

    pub fn chart(&self, difficulty: Difficulty) -> Option<&Chart> {
        self.charts.get(&difficulty).and_then(Option::as_ref)
    }
}
