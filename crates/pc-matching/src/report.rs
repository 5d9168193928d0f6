//! Individual report: persona reveal, ranked matches and derived metrics.

use crate::ranker::{rank_results, MatchResult};
use pc_core::config::EngineConfig;
use pc_core::narrative::{narrate, NarrativeGenerator};
use pc_core::profile::UserResults;
use pc_core::types::{Attentiveness, Gender, Insight, PersonaCode, PersonaMetadata, Tier};
use pc_personas::PersonaCatalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Best tier reached among the matches, with its personas in rank order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierSummary {
    pub tier: Tier,
    pub codes: Vec<PersonaCode>,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualReport {
    pub results_id: Uuid,
    pub gender: Gender,
    pub persona_code: PersonaCode,
    pub persona: Option<PersonaMetadata>,
    pub persona_fallback: bool,
    pub attentiveness: Option<Attentiveness>,
    pub insights: BTreeMap<String, Vec<Insight>>,
    /// May be empty when lookup data is missing.
    pub matches: Vec<MatchResult>,
    pub top_tier: Option<TierSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

fn top_tier(matches: &[MatchResult]) -> Option<TierSummary> {
    let best = matches.iter().map(|m| m.tier).min()?;
    let (codes, names) = matches
        .iter()
        .filter(|m| m.tier == best)
        .map(|m| (m.code.clone(), m.name.clone()))
        .unzip();
    Some(TierSummary { tier: best, codes, names })
}

pub fn assemble_report(
    results: &UserResults,
    catalog: &PersonaCatalog,
    config: &EngineConfig,
) -> IndividualReport {
    let matches = rank_results(results, catalog, &config.matching);
    IndividualReport {
        results_id: results.id,
        gender: results.gender(),
        persona_code: results.persona_code.clone(),
        persona: catalog.metadata(results.gender(), &results.persona_code).cloned(),
        persona_fallback: results.persona_fallback,
        attentiveness: results.attentiveness.clone(),
        insights: results.insights.clone(),
        top_tier: top_tier(&matches),
        matches,
        narrative: None,
    }
}

impl IndividualReport {
    /// Attach prose from the generator, if any. Leaves `narrative` as `None`
    /// when the generator is absent or fails.
    pub fn narrate_with(mut self, generator: Option<&dyn NarrativeGenerator>) -> Self {
        self.narrative = narrate(&self, generator);
        self
    }
}
