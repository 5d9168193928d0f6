//! Assessment scoring.
//!
//! Stages:
//! 1. Normalizer: raw answer → signed contribution toward a pole
//! 2. Dimension scorer: contributions → 0–100 pole scores
//! 3. Module scorers: persona dimensions (M1/M2), connection (M3), conflict (M4)
//! 4. Derived metrics: attentiveness, insight layers
//! 5. Pipeline: all of the above plus classification into [`UserResults`]
//!
//! [`UserResults`]: pc_core::UserResults

pub mod attentiveness;
pub mod bank;
pub mod conflict;
pub mod connection;
#[cfg(any(test, feature = "demo"))]
pub mod demo;
pub mod dimension;
pub mod insights;
pub mod normalizer;
pub mod pipeline;

pub use attentiveness::{score_attentiveness, AttentivenessInputs};
pub use bank::{BankSection, QuestionBank};
pub use conflict::score_conflict;
pub use connection::{score_connection, self_perception_gap};
pub use dimension::{score_dimension, score_subscale};
pub use insights::{default_layers, InsightLayer, ModifierLayer, TensionStackLayer};
pub use normalizer::{item_range, normalize, SignedContribution};
pub use pipeline::{ScoringPipeline, Submission};
