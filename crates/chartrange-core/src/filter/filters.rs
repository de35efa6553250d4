use std::collections::BTreeSet;

use crate::chart::{Difficulty, DisplayMode};
use crate::table::ChartRow;

/// Current filter selection, read from the filter panel on every render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub difficulties: BTreeSet<Difficulty>,
    pub display: DisplayMode,
}

impl Default for Filters {
    fn default() -> Self {
        Self::all()
    }
}

impl Filters {
    /// Every difficulty shown, original titles
    pub fn all() -> Self {
        Self {
            difficulties: Difficulty::ALL.into_iter().collect(),
            display: DisplayMode::default(),
        }
    }

    pub fn only(difficulties: impl IntoIterator<Item = Difficulty>) -> Self {
        Self {
            difficulties: difficulties.into_iter().collect(),
            display: DisplayMode::default(),
        }
    }
}

/// Whether a row is shown under the given filters.
///
/// Only difficulty membership matters; the display mode never hides rows here.
pub fn passes(filters: &Filters, row: &ChartRow) -> bool {
    filters.difficulties.contains(&row.difficulty)
}
