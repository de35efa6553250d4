pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod render;
pub mod scoring;
pub mod session;
pub mod table;

pub use chart::{Chart, ChartScoring, Difficulty, DisplayMode, Song, load_catalog};
pub use config::Config;
pub use error::{Error, Result};
pub use filter::{FieldStore, FieldValue, FilterPanel, Filters, JsonFieldStore, MemoryFieldStore};
pub use render::{MemorySink, RenderSink, RenderedRow};
pub use scoring::{ScoreModel, ScoringOptions, TabulatedModel};
pub use session::{Event, EventQueue, Session};
pub use table::{ChartRow, SongTable, SortColumn, SortDirection, SortState};
