pub mod dimension_scorer;
pub mod scorecard;

pub use dimension_scorer::{DimensionScorer, DimensionScores};
pub use scorecard::build_scorecard;
