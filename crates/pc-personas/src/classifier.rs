//! Persona classification: four assigned poles → 4-letter code.

use crate::catalog::PersonaCatalog;
use pc_core::config::ScoringConfig;
use pc_core::types::{Gender, PersonaCode, PersonaDimensions, PersonaMetadata};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Classification<'a> {
    pub code: PersonaCode,
    pub metadata: Option<&'a PersonaMetadata>,
    /// The derived code had no metadata; `code` is the configured fallback.
    pub fallback: bool,
}

/// Concatenate the slot letters of the self-presentation dimensions and
/// attach the persona's metadata. An unknown code degrades to the fallback.
pub fn classify<'a>(
    dims: &PersonaDimensions,
    gender: Gender,
    catalog: &'a PersonaCatalog,
    config: &ScoringConfig,
) -> Classification<'a> {
    let code = PersonaCode::from_directions(dims.directions());
    if let Some(metadata) = catalog.metadata(gender, &code) {
        return Classification { code, metadata: Some(metadata), fallback: false };
    }

    let fallback = PersonaCode::parse(&config.fallback_code).unwrap_or_default();
    tracing::warn!(
        gender = %gender,
        code = %code,
        fallback = %fallback,
        "No persona metadata for classified code, using fallback"
    );
    let metadata = catalog.metadata(gender, &fallback);
    Classification { code: fallback, metadata, fallback: true }
}
