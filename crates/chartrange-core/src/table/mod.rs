//! The chart range table.
//!
//! - `ChartRow`, `build_rows` - one row per chart with min/avg/max bounds
//! - `SortColumn`, `SortDirection`, `SortState`, `sort_rows` - column sorting
//! - `format_score`, `order_link` - cell formatting
//! - `SongTable` - owns the table state and redraws it through a render sink

mod format;
mod rows;
mod song_table;
mod sort;

pub use format::*;
pub use rows::*;
pub use song_table::*;
pub use sort::*;
