use std::sync::Arc;

use tracing::debug;

use crate::chart::{Chart, Difficulty, Song};
use crate::scoring::{ScoreModel, ScoringOptions};

/// One (song, chart) pair with its score bounds
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub song: Arc<Song>,
    pub chart: Chart,
    pub difficulty: Difficulty,
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

/// Expand the catalog into one row per chart.
///
/// The average is `avg_mult * bp` kept within `[min, max]`; `bp` falls back to
/// 100 when the options leave it unset. The `max` cap is applied last, so the
/// average never exceeds `max` even when the model reports `min > max`.
pub fn build_rows<M>(model: &M, options: &ScoringOptions, songs: &[Arc<Song>]) -> Vec<ChartRow>
where
    M: ScoreModel + ?Sized,
{
    let bp = options.effective_break_point();
    let mut rows = Vec::new();

    for song in songs {
        for (difficulty, chart) in song.charts() {
            let (min, max) = model.min_max_mult(chart, &options.skills, options);
            let avg = (model.avg_mult(chart, &options.skills, options) * bp)
                .max(min)
                .min(max);
            rows.push(ChartRow {
                song: Arc::clone(song),
                chart: chart.clone(),
                difficulty,
                min,
                avg,
                max,
            });
        }
    }

    debug!("Built {} chart rows from {} songs", rows.len(), songs.len());
    rows
}
