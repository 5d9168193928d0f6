//! Compatibility ranking and individual report assembly.

pub mod ranker;
pub mod report;
pub mod signals;

pub use ranker::{rank, rank_results, MatchResult};
pub use report::{assemble_report, IndividualReport, TierSummary};
pub use signals::{conflict_fit, connection_fit, dimension_alignment};
