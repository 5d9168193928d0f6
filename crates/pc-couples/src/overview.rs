//! Overview: headline alignment, connection and conflict compatibility.

use pc_core::config::CouplesConfig;
use pc_core::profile::UserResults;
use pc_core::types::{DimensionScore, PersonaSlot};
use pc_matching::{conflict_fit, connection_fit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    NaturalPartners,
    ComplementaryPair,
    GrowthPartners,
    ChallengePair,
}

impl Archetype {
    pub fn label(self) -> &'static str {
        match self {
            Archetype::NaturalPartners => "Natural Partners",
            Archetype::ComplementaryPair => "Complementary Pair",
            Archetype::GrowthPartners => "Growth Partners",
            Archetype::ChallengePair => "Challenge Pair",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    /// Self-presentation dimensions where both partners hold the same pole.
    pub shared_dimensions: Vec<PersonaSlot>,
    pub alignment_percent: f64,
    pub m3_compat: f64,
    pub m4_compat: f64,
    pub overall_score: u8,
    pub archetype: Archetype,
}

/// Both sides of a dimension pair were actually answered.
pub(crate) fn both_scored(x: &DimensionScore, y: &DimensionScore) -> bool {
    x.sample_size > 0 && y.sample_size > 0
}

pub fn shared_dimensions(a: &UserResults, b: &UserResults) -> Vec<PersonaSlot> {
    PersonaSlot::ALL
        .into_iter()
        .filter(|&slot| {
            let (x, y) = (a.m2().get(slot), b.m2().get(slot));
            both_scored(x, y) && x.direction == y.direction
        })
        .collect()
}

/// Symmetric exchange reciprocity; neutral when either side lacks Module 3.
pub fn m3_compat(a: &UserResults, b: &UserResults, config: &CouplesConfig) -> f64 {
    match (a.m3(), b.m3()) {
        (Some(x), Some(y)) => connection_fit(Some(x), Some(y)),
        _ => config.neutral_score,
    }
}

/// Conflict fit averaged over both directions; neutral when either side
/// lacks Module 4.
pub fn m4_compat(a: &UserResults, b: &UserResults, config: &CouplesConfig) -> f64 {
    match (a.m4(), b.m4()) {
        (Some(x), Some(y)) => {
            ((conflict_fit(Some(x), Some(y)) + conflict_fit(Some(y), Some(x))) / 2.0).round()
        }
        _ => config.neutral_score,
    }
}

pub fn archetype(mean: f64, config: &CouplesConfig) -> Archetype {
    if mean >= config.natural_partners {
        Archetype::NaturalPartners
    } else if mean >= config.complementary_pair {
        Archetype::ComplementaryPair
    } else if mean >= config.growth_partners {
        Archetype::GrowthPartners
    } else {
        Archetype::ChallengePair
    }
}

pub fn overview(a: &UserResults, b: &UserResults, config: &CouplesConfig) -> Overview {
    let shared = shared_dimensions(a, b);
    let alignment = shared.len() as f64 / PersonaSlot::ALL.len() as f64 * 100.0;
    let m3 = m3_compat(a, b, config);
    let m4 = m4_compat(a, b, config);
    let overall = alignment * config.alignment_weight
        + m3 * config.connection_weight
        + m4 * config.conflict_weight;
    Overview {
        shared_dimensions: shared,
        alignment_percent: alignment,
        m3_compat: m3,
        m4_compat: m4,
        overall_score: overall.round().clamp(0.0, 100.0) as u8,
        archetype: archetype((alignment + m3 + m4) / 3.0, config),
    }
}
