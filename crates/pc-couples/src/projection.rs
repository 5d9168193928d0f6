//! Ceiling and floor: best and worst case around the overall score.

use crate::alignment::ExchangeGaps;
use crate::choreography::Choreography;
use crate::clashes::{Clashes, Severity};
use crate::overview::Overview;
use crate::repair::{RepairCompatibility, RiskLevel};
use pc_core::config::CouplesConfig;
use pc_core::profile::UserResults;
use pc_core::types::{CapacityLevel, Horseman};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub ceiling: u8,
    pub floor: u8,
    /// ceiling − overall
    pub growth_potential: u8,
    /// overall − floor
    pub risk_exposure: u8,
    pub ceiling_factors: Vec<String>,
    pub floor_factors: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectionInputs<'a> {
    pub overview: &'a Overview,
    pub exchange: Option<&'a ExchangeGaps>,
    pub clashes: &'a Clashes,
    pub choreography: &'a Choreography,
    pub repair: &'a RepairCompatibility,
}

fn ceiling_factors(a: &UserResults, b: &UserResults, inputs: ProjectionInputs<'_>) -> Vec<String> {
    let mut factors = Vec::new();
    if inputs.overview.alignment_percent >= 50.0 {
        factors.push("strong_alignment".to_string());
    }
    if inputs.exchange.is_some_and(|g| g.reciprocal) {
        factors.push("reciprocal_exchange".to_string());
    }
    if inputs.choreography.repair_speed_match == Some(true) {
        factors.push("repair_speed_match".to_string());
    }
    let high = |r: &UserResults| {
        r.m4()
            .and_then(|p| p.capacity.as_ref())
            .is_some_and(|c| c.level == CapacityLevel::High)
    };
    if high(a) && high(b) {
        factors.push("high_capacity".to_string());
    }
    if inputs.repair.overall_risk == RiskLevel::Low {
        factors.push("low_repair_risk".to_string());
    }
    factors
}

fn floor_factors(
    a: &UserResults,
    b: &UserResults,
    inputs: ProjectionInputs<'_>,
    config: &CouplesConfig,
) -> Vec<String> {
    let mut factors = Vec::new();
    for (partner, results) in [("partner_a", a), ("partner_b", b)] {
        let Some(gottman) = results.m4().and_then(|p| p.gottman.as_ref()) else {
            continue;
        };
        for horseman in Horseman::ALL {
            if gottman.get(horseman) > config.horseman_moderate_max {
                factors.push(format!("{partner}_{}", horseman.pole()));
            }
        }
    }
    if inputs.choreography.driver_collision == Some(true) {
        factors.push("driver_collision".to_string());
    }
    if inputs.clashes.connection_tension == Some(true) {
        factors.push("connection_tension".to_string());
    }
    for clash in inputs.clashes.clashes.iter().filter(|c| c.severity == Severity::High) {
        factors.push(format!("{}_clash", clash.dimension.name()));
    }
    factors
}

pub fn projection(
    a: &UserResults,
    b: &UserResults,
    inputs: ProjectionInputs<'_>,
    config: &CouplesConfig,
) -> Projection {
    let ceiling_factors = ceiling_factors(a, b, inputs);
    let floor_factors = floor_factors(a, b, inputs, config);
    let overall = f64::from(inputs.overview.overall_score);

    let ceiling = (overall + config.ceiling_base + config.ceiling_step * ceiling_factors.len() as f64)
        .clamp(overall, 100.0);
    let floor = (overall - config.floor_base - config.floor_step * floor_factors.len() as f64)
        .clamp(0.0, overall);

    Projection {
        ceiling: ceiling.round() as u8,
        floor: floor.round() as u8,
        growth_potential: (ceiling - overall).round() as u8,
        risk_exposure: (overall - floor).round() as u8,
        ceiling_factors,
        floor_factors,
    }
}
