//! Compatibility ranker: all 16 opposite-gender personas, best first.

use crate::signals::{conflict_fit, connection_fit, dimension_alignment};
use pc_core::config::MatchingConfig;
use pc_core::profile::UserResults;
use pc_core::types::{
    ConflictProfile, ConnectionScore, Gender, PersonaCode, PersonaDimensions, Tier,
};
use pc_personas::PersonaCatalog;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 1-based position after sorting.
    pub rank: usize,
    pub code: PersonaCode,
    pub name: String,
    pub tier: Tier,
    pub tier_score: f64,
    pub dimension_score: f64,
    pub m3_score: f64,
    pub m4_score: f64,
    pub compatibility_score: u8,
}

/// Rank every persona in the source code's tier row. Equal scores keep
/// tier-row order. A missing or incomplete row, or any candidate without
/// metadata or a typical profile, yields an empty list.
pub fn rank(
    code: &PersonaCode,
    gender: Gender,
    m2: &PersonaDimensions,
    m3: Option<&ConnectionScore>,
    m4: Option<&ConflictProfile>,
    catalog: &PersonaCatalog,
    config: &MatchingConfig,
) -> Vec<MatchResult> {
    let Some(row) = catalog.tier_row(gender, code) else {
        tracing::warn!(gender = %gender, code = %code, "No tier row, returning no matches");
        return Vec::new();
    };
    if !row.is_complete_partition() {
        tracing::warn!(gender = %gender, code = %code, "Tier row is not a complete partition");
        return Vec::new();
    }

    let candidate_gender = gender.opposite();
    let weights = &config.weights;
    let mut matches = Vec::with_capacity(row.len());
    for (tier, candidate) in row.iter() {
        let (Some(meta), Some(typical)) =
            (catalog.metadata(candidate_gender, candidate), catalog.typical(candidate_gender, candidate))
        else {
            tracing::warn!(
                gender = %candidate_gender,
                candidate = %candidate,
                "Candidate persona data missing, returning no matches"
            );
            return Vec::new();
        };

        let tier_score = config.tier_scores.score(tier);
        let dimension_score = dimension_alignment(code, m2, meta);
        let m3_score = connection_fit(m3, Some(&typical.connection()));
        let m4_score = conflict_fit(m4, Some(&typical.conflict()));
        let blended = tier_score * weights.tier
            + dimension_score * weights.dimension
            + m3_score * weights.connection
            + m4_score * weights.conflict;

        matches.push(MatchResult {
            rank: 0,
            code: candidate.clone(),
            name: meta.name.clone(),
            tier,
            tier_score,
            dimension_score,
            m3_score,
            m4_score,
            compatibility_score: blended.round().clamp(0.0, 100.0) as u8,
        });
    }

    // sort_by is stable
    matches.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));
    for (i, m) in matches.iter_mut().enumerate() {
        m.rank = i + 1;
    }
    matches
}

/// [`rank`] over a scored subject.
pub fn rank_results(
    results: &UserResults,
    catalog: &PersonaCatalog,
    config: &MatchingConfig,
) -> Vec<MatchResult> {
    rank(
        &results.persona_code,
        results.gender(),
        results.m2(),
        results.m3(),
        results.m4(),
        catalog,
        config,
    )
}
