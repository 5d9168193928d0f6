//! Daily life: four fixed scenarios, each with an outlook and a templated
//! narrative picked by simple rules over the scores.

use crate::alignment::ExchangeGaps;
use crate::choreography::{Choreography, ConflictDynamic};
use crate::clashes::{Clashes, Severity};
use crate::overview::both_scored;
use crate::repair::{RepairCompatibility, RiskLevel};
use pc_core::config::CouplesConfig;
use pc_core::profile::UserResults;
use pc_core::types::PersonaSlot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    DailyConnection,
    DecisionMaking,
    SocialLife,
    UnderStress,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::DailyConnection,
        Scenario::DecisionMaking,
        Scenario::SocialLife,
        Scenario::UnderStress,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Scenario::DailyConnection => "Daily Connection",
            Scenario::DecisionMaking => "Decision Making",
            Scenario::SocialLife => "Social Life",
            Scenario::UnderStress => "Under Stress",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outlook {
    Harmonious,
    Workable,
    Friction,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutlook {
    pub scenario: Scenario,
    pub title: String,
    pub outlook: Outlook,
    pub narrative: String,
}

/// Section inputs already computed by the other sections.
#[derive(Debug, Clone, Copy)]
pub struct DailyLifeInputs<'a> {
    pub exchange: Option<&'a ExchangeGaps>,
    pub clashes: &'a Clashes,
    pub choreography: &'a Choreography,
    pub repair: &'a RepairCompatibility,
}

fn daily_connection(exchange: Option<&ExchangeGaps>, names: (&str, &str), config: &CouplesConfig) -> (Outlook, String) {
    let (a, b) = names;
    match exchange {
        None => (
            Outlook::Unknown,
            "Connection style results are needed from both partners to picture everyday closeness.".into(),
        ),
        Some(gaps) if gaps.reciprocal => (
            Outlook::Harmonious,
            format!("{a} and {b} tend to give each other about as much closeness as each wants, so ordinary days feel easy."),
        ),
        Some(gaps) if gaps.max_gap() <= config.connection_tension_threshold => (
            Outlook::Workable,
            format!("{a} and {b} are close on how much connection they want and give, with small gaps worth naming out loud."),
        ),
        Some(gaps) if gaps.a_shortfall.max(gaps.b_shortfall) > 0.0 => {
            let short = if gaps.a_shortfall >= gaps.b_shortfall { a } else { b };
            (
                Outlook::Friction,
                format!("{short} is likely to want more day-to-day attention than the other partner naturally offers."),
            )
        }
        // nobody is short changed, so the gap is surplus
        Some(gaps) => {
            let crowded = if gaps.a_shortfall <= gaps.b_shortfall { a } else { b };
            (
                Outlook::Friction,
                format!("{crowded} is likely to get more day-to-day attention than they want, which can feel crowding."),
            )
        }
    }
}

fn dimension_scenario(
    slot: PersonaSlot,
    a: &UserResults,
    b: &UserResults,
    clashes: &Clashes,
    names: (&str, &str),
) -> (Outlook, String) {
    let (x, y) = (a.m2().get(slot), b.m2().get(slot));
    let (na, nb) = names;
    let topic = match slot {
        PersonaSlot::Values => "shared decisions",
        PersonaSlot::Social => "plans with other people",
        PersonaSlot::Physical => "how you each show up",
        PersonaSlot::Lifestyle => "how you spend your time",
    };
    if !both_scored(x, y) {
        return (Outlook::Unknown, format!("There is not enough data yet to describe {topic}."));
    }
    if x.direction == y.direction {
        return (
            Outlook::Harmonious,
            format!("{na} and {nb} both lean {} when it comes to {topic}.", x.assigned_pole),
        );
    }
    let severity = clashes.clashes.iter().find(|c| c.dimension == slot).map(|c| c.severity);
    let text = format!(
        "{na} leans {} while {nb} leans {} when it comes to {topic}",
        x.assigned_pole, y.assigned_pole
    );
    match severity {
        Some(Severity::High) => (Outlook::Friction, format!("{text}, and both feel strongly about it.")),
        _ => (Outlook::Workable, format!("{text}, though neither holds the position tightly.")),
    }
}

fn under_stress(choreography: &Choreography, repair: &RepairCompatibility, names: (&str, &str)) -> (Outlook, String) {
    let (a, b) = names;
    if choreography.dynamic == ConflictDynamic::Unknown {
        return (
            Outlook::Unknown,
            "Conflict results are needed from both partners to picture how stress plays out.".into(),
        );
    }
    let speed_match = choreography.repair_speed_match == Some(true);
    let pursue_withdraw = choreography.dynamic == ConflictDynamic::PursueWithdraw;
    let dynamic = choreography.dynamic.label();
    if repair.overall_risk == RiskLevel::High || (pursue_withdraw && !speed_match) {
        (
            Outlook::Friction,
            format!("Under pressure {a} and {b} fall into a {dynamic} pattern that can escalate before either partner is ready to repair."),
        )
    } else if speed_match && !pursue_withdraw {
        (
            Outlook::Harmonious,
            format!("When stress hits, {a} and {b} move through it at a similar pace and come back together without much strain."),
        )
    } else {
        (
            Outlook::Workable,
            format!("Stressful stretches show a {dynamic} pattern; agreeing ahead of time on when to pause and when to talk will help {a} and {b}."),
        )
    }
}

pub fn daily_life(
    a: &UserResults,
    b: &UserResults,
    inputs: DailyLifeInputs<'_>,
    config: &CouplesConfig,
) -> Vec<ScenarioOutlook> {
    let names = (a.label("Partner A"), b.label("Partner B"));
    Scenario::ALL
        .into_iter()
        .map(|scenario| {
            let (outlook, narrative) = match scenario {
                Scenario::DailyConnection => daily_connection(inputs.exchange, names, config),
                Scenario::DecisionMaking => dimension_scenario(PersonaSlot::Values, a, b, inputs.clashes, names),
                Scenario::SocialLife => dimension_scenario(PersonaSlot::Social, a, b, inputs.clashes, names),
                Scenario::UnderStress => under_stress(inputs.choreography, inputs.repair, names),
            };
            ScenarioOutlook { scenario, title: scenario.title().to_string(), outlook, narrative }
        })
        .collect()
}
