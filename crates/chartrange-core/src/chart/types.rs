use serde::{Deserialize, Serialize};

/// Tabulated score multipliers for one chart.
///
/// Consumed by [`crate::scoring::TabulatedModel`]; other score models are free
/// to ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartScoring {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

/// A single difficulty's playable version of a song
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub level: u32,
    #[serde(default)]
    pub scoring: ChartScoring,
}

impl Chart {
    pub fn with_level(level: u32) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }
}
