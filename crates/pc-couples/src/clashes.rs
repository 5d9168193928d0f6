//! Clashes: self-presentation dimensions where the partners sit on opposite
//! poles.

use crate::alignment::ExchangeGaps;
use crate::overview::both_scored;
use pc_core::config::CouplesConfig;
use pc_core::profile::UserResults;
use pc_core::types::PersonaSlot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Moderate,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clash {
    pub dimension: PersonaSlot,
    pub a_pole: String,
    pub b_pole: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clashes {
    pub clashes: Vec<Clash>,
    /// `None` unless both partners completed Module 3.
    pub connection_tension: Option<bool>,
}

impl Clashes {
    pub fn high_count(&self) -> usize {
        self.clashes.iter().filter(|c| c.severity == Severity::High).count()
    }
}

pub fn clashes(
    a: &UserResults,
    b: &UserResults,
    exchange: Option<&ExchangeGaps>,
    config: &CouplesConfig,
) -> Clashes {
    let clashes = PersonaSlot::ALL
        .into_iter()
        .filter_map(|slot| {
            let (x, y) = (a.m2().get(slot), b.m2().get(slot));
            if !both_scored(x, y) || x.direction == y.direction {
                return None;
            }
            let high = x.strength > config.clash_high_strength && y.strength > config.clash_high_strength;
            Some(Clash {
                dimension: slot,
                a_pole: x.assigned_pole.clone(),
                b_pole: y.assigned_pole.clone(),
                severity: if high { Severity::High } else { Severity::Moderate },
            })
        })
        .collect();

    Clashes {
        clashes,
        connection_tension: exchange.map(|gaps| gaps.max_gap() > config.connection_tension_threshold),
    }
}
