//! Couples report: the seven sections for two scored partners.

use crate::alignment::{alignment, Alignment};
use crate::choreography::{choreography, Choreography};
use crate::clashes::{clashes, Clashes};
use crate::daily_life::{daily_life, DailyLifeInputs, ScenarioOutlook};
use crate::overview::{overview, Overview};
use crate::projection::{projection, Projection, ProjectionInputs};
use crate::repair::{repair, RepairCompatibility};
use pc_core::config::CouplesConfig;
use pc_core::error::Result;
use pc_core::narrative::{narrate, NarrativeGenerator};
use pc_core::profile::UserResults;
use pc_core::store::ResultsStore;
use pc_core::types::{Gender, PersonaCode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerSummary {
    pub label: String,
    pub gender: Gender,
    pub persona_code: PersonaCode,
}

impl PartnerSummary {
    fn of(results: &UserResults, fallback: &str) -> Self {
        Self {
            label: results.label(fallback).to_string(),
            gender: results.gender(),
            persona_code: results.persona_code.clone(),
        }
    }
}

/// Pure function of the two partners' results. Carries no ids or
/// timestamps, so identical inputs serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouplesReport {
    pub partner_a: PartnerSummary,
    pub partner_b: PartnerSummary,
    pub overview: Overview,
    pub alignment: Alignment,
    pub clashes: Clashes,
    pub choreography: Choreography,
    pub repair: RepairCompatibility,
    pub daily_life: Vec<ScenarioOutlook>,
    pub projection: Projection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

pub fn synthesize(a: &UserResults, b: &UserResults, config: &CouplesConfig) -> CouplesReport {
    let overview = overview(a, b, config);
    let alignment = alignment(a, b, config);
    let clashes = clashes(a, b, alignment.exchange.as_ref(), config);
    let choreography = choreography(a, b);
    let repair = repair(a, b, config);
    let daily_life = daily_life(
        a,
        b,
        DailyLifeInputs {
            exchange: alignment.exchange.as_ref(),
            clashes: &clashes,
            choreography: &choreography,
            repair: &repair,
        },
        config,
    );
    let projection = projection(
        a,
        b,
        ProjectionInputs {
            overview: &overview,
            exchange: alignment.exchange.as_ref(),
            clashes: &clashes,
            choreography: &choreography,
            repair: &repair,
        },
        config,
    );

    tracing::debug!(
        a = %a.persona_code,
        b = %b.persona_code,
        overall = overview.overall_score,
        archetype = overview.archetype.label(),
        clashes = clashes.clashes.len(),
        "Synthesized couples report"
    );

    CouplesReport {
        partner_a: PartnerSummary::of(a, "Partner A"),
        partner_b: PartnerSummary::of(b, "Partner B"),
        overview,
        alignment,
        clashes,
        choreography,
        repair,
        daily_life,
        projection,
        narrative: None,
    }
}

/// Resolve both partners from the store and synthesize their report.
/// Fails with `ProfileNotFound` if either id is absent.
pub fn build_couples_report(
    store: &dyn ResultsStore,
    id_a: &Uuid,
    id_b: &Uuid,
    config: &CouplesConfig,
    narrator: Option<&dyn NarrativeGenerator>,
) -> Result<CouplesReport> {
    let a = store.require(id_a)?;
    let b = store.require(id_b)?;
    let mut report = synthesize(&a, &b, config);
    report.narrative = narrate(&report, narrator);
    Ok(report)
}
