use serde_json::Value as JsonValue;

use crate::chart::Chart;
use crate::scoring::ScoringOptions;

/// Computes achievable score bounds for a chart under a skill configuration
pub trait ScoreModel {
    /// Minimum and maximum score, already scaled for `options`
    fn min_max_mult(&self, chart: &Chart, skills: &JsonValue, options: &ScoringOptions)
    -> (f64, f64);

    /// Average score per unit of break point
    fn avg_mult(&self, chart: &Chart, skills: &JsonValue, options: &ScoringOptions) -> f64;
}

impl<M: ScoreModel + ?Sized> ScoreModel for &M {
    fn min_max_mult(
        &self,
        chart: &Chart,
        skills: &JsonValue,
        options: &ScoringOptions,
    ) -> (f64, f64) {
        (**self).min_max_mult(chart, skills, options)
    }

    fn avg_mult(&self, chart: &Chart, skills: &JsonValue, options: &ScoringOptions) -> f64 {
        (**self).avg_mult(chart, skills, options)
    }
}

impl<M: ScoreModel + ?Sized> ScoreModel for Box<M> {
    fn min_max_mult(
        &self,
        chart: &Chart,
        skills: &JsonValue,
        options: &ScoringOptions,
    ) -> (f64, f64) {
        (**self).min_max_mult(chart, skills, options)
    }

    fn avg_mult(&self, chart: &Chart, skills: &JsonValue, options: &ScoringOptions) -> f64 {
        (**self).avg_mult(chart, skills, options)
    }
}

/// Score model backed by multipliers stored in the catalog.
///
/// Skills are ignored; min and max scale with the break point.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabulatedModel;

impl ScoreModel for TabulatedModel {
    fn min_max_mult(
        &self,
        chart: &Chart,
        _skills: &JsonValue,
        options: &ScoringOptions,
    ) -> (f64, f64) {
        let bp = options.effective_break_point();
        (chart.scoring.min * bp, chart.scoring.max * bp)
    }

    fn avg_mult(&self, chart: &Chart, _skills: &JsonValue, _options: &ScoringOptions) -> f64 {
        chart.scoring.avg
    }
}
