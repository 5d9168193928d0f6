//! Narrative collaborator: turns a computed report into prose.
//!
//! The engine only hands over a serialized payload. Reports stay complete
//! without prose, so a missing or failing generator is never an error.

use serde::Serialize;

pub trait NarrativeGenerator: Send + Sync {
    fn narrate(&self, payload: &serde_json::Value) -> anyhow::Result<String>;
}

/// Canned-text generator for running without a language model.
#[derive(Debug, Clone, Default)]
pub struct MockNarrator;

impl NarrativeGenerator for MockNarrator {
    fn narrate(&self, payload: &serde_json::Value) -> anyhow::Result<String> {
        let sections = payload.as_object().map(|o| o.len()).unwrap_or(0);
        Ok(format!(
            "Your full narrative will appear here once generation is enabled. \
             This report has {sections} computed sections ready to read."
        ))
    }
}

/// Serialize `report` and ask the generator for prose. `None` when there is
/// no generator or it fails.
pub fn narrate<T: Serialize>(report: &T, generator: Option<&dyn NarrativeGenerator>) -> Option<String> {
    let generator = generator?;
    let payload = match serde_json::to_value(report) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serialize report for narration");
            return None;
        }
    };
    match generator.narrate(&payload) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!(error = %e, "Narrative generation failed");
            None
        }
    }
}
