use std::cmp::Ordering;

use strum::{EnumString, FromRepr, IntoStaticStr};

use crate::chart::Difficulty;
use crate::config::controls;
use crate::error::{Error, Result};

/// Sortable table columns, in header order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum SortColumn {
    Title = 0,
    Difficulty = 1,
    Level = 2,
    Min = 3,
    Avg = 4,
    Max = 5,
}

impl SortColumn {
    pub const ALL: [SortColumn; 6] = [
        Self::Title,
        Self::Difficulty,
        Self::Level,
        Self::Min,
        Self::Avg,
        Self::Max,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a column by name ("avg") or header index ("4")
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        let by_index = value.parse::<usize>().ok().and_then(Self::from_index);
        by_index
            .or_else(|| value.to_lowercase().parse().ok())
            .ok_or_else(|| Error::InvalidSortColumn(value.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn is_textual(&self) -> bool {
        matches!(self, Self::Title | Self::Difficulty)
    }

    /// Direction a column starts with when it becomes the sort column
    pub fn default_direction(&self) -> SortDirection {
        if self.index() <= 1 {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Sort indicator glyph shown in the active header
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Ascending => controls::ARROW_UP,
            Self::Descending => controls::ARROW_DOWN,
        }
    }

    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Current sort column and direction; lives only as long as the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: SortColumn::Avg,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Apply a header click: the active column flips, any other column
    /// becomes active with its default direction.
    pub fn click(&mut self, column: SortColumn) {
        if column == self.column {
            self.direction = self.direction.toggle();
        } else {
            self.column = column;
            self.direction = column.default_direction();
        }
    }
}

/// Filtered row projected to its displayed fields
#[derive(Debug, Clone, PartialEq)]
pub struct SortableRow {
    pub title: String,
    pub difficulty: Difficulty,
    pub level: u32,
    pub min: f64,
    pub avg: f64,
    pub max: f64,
    pub song_id: u32,
}

impl SortableRow {
    fn compare(&self, other: &SortableRow, column: SortColumn) -> Ordering {
        match column {
            SortColumn::Title => locale_compare(&self.title, &other.title),
            SortColumn::Difficulty => {
                locale_compare(self.difficulty.name(), other.difficulty.name())
            }
            SortColumn::Level => self.level.cmp(&other.level),
            SortColumn::Min => self.min.total_cmp(&other.min),
            SortColumn::Avg => self.avg.total_cmp(&other.avg),
            SortColumn::Max => self.max.total_cmp(&other.max),
        }
    }
}

/// Case-insensitive ordering by Unicode code point; case-only differences put
/// lowercase first.
///
/// This is not full locale collation: accents are not folded and hiragana and
/// katakana compare as distinct characters.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

/// Sort rows in place. The sort is stable, so ties keep their input order.
pub fn sort_rows(rows: &mut [SortableRow], state: SortState) {
    rows.sort_by(|a, b| state.direction.apply(a.compare(b, state.column)));
}
