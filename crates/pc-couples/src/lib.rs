//! Couples report synthesis over two independently scored partners.

pub mod alignment;
pub mod choreography;
pub mod clashes;
pub mod daily_life;
pub mod overview;
pub mod projection;
pub mod repair;
pub mod report;

pub use alignment::{Alignment, ExchangeGaps, Parallel, ParallelKind, Partner};
pub use choreography::{Choreography, ConflictDynamic};
pub use clashes::{Clash, Clashes, Severity};
pub use daily_life::{Outlook, Scenario, ScenarioOutlook};
pub use overview::{Archetype, Overview};
pub use projection::Projection;
pub use repair::{HorsemanRisk, RepairCompatibility, RiskLevel};
pub use report::{build_couples_report, synthesize, CouplesReport, PartnerSummary};

#[cfg(test)]
mod tests;
