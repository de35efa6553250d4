//! Deterministic score model for tests.

use std::cell::Cell;
use std::collections::HashMap;

use serde_json::Value as JsonValue;

use crate::chart::Chart;
use crate::scoring::{ScoreModel, ScoringOptions};

/// Bounds returned for a chart level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockBounds {
    pub min: f64,
    pub avg_mult: f64,
    pub max: f64,
}

/// Score model keyed by chart level.
///
/// Levels without an explicit entry get `min = 1000 * level`,
/// `avg_mult = 60 * level` and `max = 10000 * level`. Every `min_max_mult`
/// call is counted so tests can tell when rows were rebuilt.
#[derive(Debug, Default)]
pub struct MockScoreModel {
    bounds: HashMap<u32, MockBounds>,
    calls: Cell<usize>,
}

impl MockScoreModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, level: u32, min: f64, avg_mult: f64, max: f64) -> Self {
        self.bounds.insert(level, MockBounds { min, avg_mult, max });
        self
    }

    /// Number of charts evaluated so far
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn bounds_for(&self, chart: &Chart) -> MockBounds {
        self.bounds.get(&chart.level).copied().unwrap_or_else(|| {
            let level = chart.level as f64;
            MockBounds {
                min: 1000.0 * level,
                avg_mult: 60.0 * level,
                max: 10000.0 * level,
            }
        })
    }
}

impl ScoreModel for MockScoreModel {
    fn min_max_mult(
        &self,
        chart: &Chart,
        _skills: &JsonValue,
        _options: &ScoringOptions,
    ) -> (f64, f64) {
        self.calls.set(self.calls.get() + 1);
        let bounds = self.bounds_for(chart);
        (bounds.min, bounds.max)
    }

    fn avg_mult(&self, chart: &Chart, _skills: &JsonValue, _options: &ScoringOptions) -> f64 {
        self.bounds_for(chart).avg_mult
    }
}
