//! Repair compatibility: combined horseman risk and the emotional capacity gap.

use pc_core::config::CouplesConfig;
use pc_core::profile::UserResults;
use pc_core::types::Horseman;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorsemanRisk {
    pub horseman: Horseman,
    pub a: f64,
    pub b: f64,
    /// Mean of both raw scores.
    pub combined: f64,
    pub level: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairCompatibility {
    /// Empty unless both partners have horseman scores.
    pub horsemen: Vec<HorsemanRisk>,
    pub overall_risk: RiskLevel,
    pub capacity_gap: Option<f64>,
}

pub fn risk_level(combined: f64, config: &CouplesConfig) -> RiskLevel {
    if combined <= config.horseman_low_max {
        RiskLevel::Low
    } else if combined <= config.horseman_moderate_max {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

pub fn repair(a: &UserResults, b: &UserResults, config: &CouplesConfig) -> RepairCompatibility {
    let capacity = |r: &UserResults| r.m4().and_then(|p| p.capacity.as_ref()).map(|c| c.score);
    let capacity_gap = match (capacity(a), capacity(b)) {
        (Some(x), Some(y)) => Some((x - y).abs()),
        _ => None,
    };
    let gottman = (
        a.m4().and_then(|p| p.gottman.as_ref()),
        b.m4().and_then(|p| p.gottman.as_ref()),
    );
    let (Some(ga), Some(gb)) = gottman else {
        return RepairCompatibility {
            horsemen: Vec::new(),
            overall_risk: RiskLevel::Unknown,
            capacity_gap,
        };
    };

    let horsemen: Vec<HorsemanRisk> = Horseman::ALL
        .into_iter()
        .map(|horseman| {
            let (x, y) = (ga.get(horseman), gb.get(horseman));
            let combined = (x + y) / 2.0;
            HorsemanRisk { horseman, a: x, b: y, combined, level: risk_level(combined, config) }
        })
        .collect();
    let high = horsemen.iter().filter(|h| h.level == RiskLevel::High).count();
    let overall_risk = match high {
        0 => RiskLevel::Low,
        1 => RiskLevel::Moderate,
        _ => RiskLevel::High,
    };
    RepairCompatibility { horsemen, overall_risk, capacity_gap }
}
