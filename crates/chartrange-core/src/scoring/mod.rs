//! Score model seam.
//!
//! - `ScoringOptions` - break point and skill configuration
//! - `ScoreModel` - computes a chart's min/max scores and average multiplier
//! - `TabulatedModel` - reads multipliers stored in the catalog
//! - `MockScoreModel` - deterministic model for tests

mod mock;
mod model;
mod options;

pub use mock::*;
pub use model::*;
pub use options::*;
