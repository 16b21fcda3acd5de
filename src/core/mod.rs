pub mod errors;
pub mod metrics;
pub mod types;

pub use errors::{Error, Result, ResultExt};
pub use types::{
    Dimension, IssueFlowRecord, PICommitmentRecord, PIWindowConfig, RawFlag, Scope, Scorecard,
    Stage, StageStatistics, StuckItem,
};
