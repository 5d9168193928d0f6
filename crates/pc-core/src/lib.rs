//! Shared types, configuration, error taxonomy and collaborator interfaces
//! for the persona scoring & compatibility engine.

pub mod config;
pub mod error;
pub mod narrative;
pub mod profile;
pub mod store;
pub mod types;

pub use config::{EngineConfig, ENGINE_CONFIG};
pub use error::{EngineError, Result};
pub use narrative::{narrate, MockNarrator, NarrativeGenerator};
pub use profile::{ModuleScores, UserResults};
pub use store::{MemoryResultsStore, ResultsStore};
pub use types::*;

#[cfg(test)]
mod tests;
