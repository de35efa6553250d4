//! Song catalog types.
//!
//! - `Difficulty` - the five chart difficulties (easy, normal, hard, expert, special)
//! - `Song`, `DisplayMode` - song metadata and localized title selection
//! - `Chart`, `ChartScoring` - per-difficulty chart data
//! - catalog loading from JSON

mod catalog;
mod difficulty;
mod song;
mod types;

pub use catalog::*;
pub use difficulty::*;
pub use song::*;
pub use types::*;
