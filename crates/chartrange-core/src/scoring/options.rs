use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Break point used when the options leave `bp` unset (percentage mode)
pub const DEFAULT_BREAK_POINT: f64 = 100.0;

/// Scoring configuration handed to the score model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringOptions {
    /// Target pass count. When set, scores are shown as absolute numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bp: Option<f64>,
    /// Skill configuration, passed through to the score model untouched
    #[serde(default)]
    pub skills: JsonValue,
}

impl ScoringOptions {
    pub fn with_bp(bp: f64) -> Self {
        Self {
            bp: Some(bp),
            ..Default::default()
        }
    }

    /// The configured break point, treating zero and NaN as unset
    pub fn break_point(&self) -> Option<f64> {
        self.bp.filter(|bp| *bp != 0.0 && !bp.is_nan())
    }

    /// Break point to scale averages with
    pub fn effective_break_point(&self) -> f64 {
        self.break_point().unwrap_or(DEFAULT_BREAK_POINT)
    }

    /// True when scores are percentages rather than absolute numbers
    pub fn is_percentage(&self) -> bool {
        self.break_point().is_none()
    }
}
