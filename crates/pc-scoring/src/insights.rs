//! Insight layers: independent post-scoring passes over [`ModuleScores`].
//!
//! A layer that errors is logged and left out of the results; it never
//! affects scoring or the other layers.

use pc_core::config::InsightConfig;
use pc_core::error::Result;
use pc_core::profile::ModuleScores;
use pc_core::types::{
    CapacityLevel, ConflictApproach, DimensionSpec, Direction, Horseman, Insight, PersonaSlot, RepairSpeed,
};
use std::collections::BTreeMap;
use std::sync::Arc;

pub trait InsightLayer: Send + Sync {
    fn name(&self) -> &str;
    fn derive(&self, scores: &ModuleScores, config: &InsightConfig) -> Result<Vec<Insight>>;
}

fn insight(key: &str, summary: String, dimension: Option<&str>) -> Insight {
    Insight { key: key.to_string(), summary, dimension: dimension.map(str::to_string) }
}

/// Compounding patterns: places where two results pull against each other.
#[derive(Debug, Default, Clone, Copy)]
pub struct TensionStackLayer;

impl InsightLayer for TensionStackLayer {
    fn name(&self) -> &str {
        "tension_stack"
    }

    fn derive(&self, scores: &ModuleScores, config: &InsightConfig) -> Result<Vec<Insight>> {
        let mut out = Vec::new();

        for slot in PersonaSlot::ALL {
            let wants = scores.m1.get(slot);
            let shows = scores.m2.get(slot);
            if wants.direction != shows.direction
                && wants.strength >= config.tension_strength
                && shows.strength >= config.tension_strength
            {
                let own = DimensionSpec::persona(slot, scores.gender);
                let shown = match shows.direction {
                    Direction::A => own.pole_a,
                    Direction::B => own.pole_b,
                };
                out.push(insight(
                    "opposite_attraction",
                    format!(
                        "You present as {shown} on {} but are drawn to {} in a partner.",
                        slot.name(),
                        wants.assigned_pole
                    ),
                    Some(slot.name()),
                ));
            }
        }

        if let Some(m4) = &scores.m4 {
            let low_capacity = m4.capacity.as_ref().is_some_and(|c| c.level == CapacityLevel::Low);
            if m4.approach == ConflictApproach::Pursue && low_capacity {
                out.push(insight(
                    "pursue_low_capacity",
                    "You push to resolve conflict but run out of emotional room quickly.".into(),
                    None,
                ));
            }
            if let (Some(g), Some(RepairSpeed::Gradual)) = (&m4.gottman, m4.repair_speed) {
                for horseman in Horseman::ALL {
                    let value = g.get(horseman);
                    if value > config.horseman_high {
                        out.push(insight(
                            "slow_repair_high_conflict",
                            format!(
                                "Frequent {} ({value:.0}/20) combined with slow repair lets damage linger.",
                                horseman.pole()
                            ),
                            Some(horseman.pole()),
                        ));
                    }
                }
            }
        }

        if let Some(m3) = &scores.m3 {
            if m3.gap() > config.connection_gap {
                out.push(insight(
                    "connection_deficit",
                    format!(
                        "You want noticeably more closeness ({:.0}) than you offer ({:.0}).",
                        m3.want_score, m3.offer_score
                    ),
                    None,
                ));
            }
        }

        Ok(out)
    }
}

/// Strength modifiers on the self-presentation dimensions.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModifierLayer;

impl InsightLayer for ModifierLayer {
    fn name(&self) -> &str {
        "modifiers"
    }

    fn derive(&self, scores: &ModuleScores, config: &InsightConfig) -> Result<Vec<Insight>> {
        let mut out = Vec::new();
        for slot in PersonaSlot::ALL {
            let dim = scores.m2.get(slot);
            if dim.sample_size == 0 {
                continue;
            }
            if dim.strength >= config.polarized_strength {
                out.push(insight(
                    "polarized",
                    format!("Strongly {} on {}.", dim.assigned_pole, slot.name()),
                    Some(slot.name()),
                ));
            } else if dim.strength <= config.flexible_strength {
                out.push(insight(
                    "flexible",
                    format!("Flexible on {}: no strong lean either way.", slot.name()),
                    Some(slot.name()),
                ));
            }
        }
        Ok(out)
    }
}

pub fn default_layers() -> Vec<Arc<dyn InsightLayer>> {
    vec![Arc::new(TensionStackLayer), Arc::new(ModifierLayer)]
}

pub fn run_layers(
    layers: &[Arc<dyn InsightLayer>],
    scores: &ModuleScores,
    config: &InsightConfig,
) -> BTreeMap<String, Vec<Insight>> {
    let mut out = BTreeMap::new();
    for layer in layers {
        match layer.derive(scores, config) {
            Ok(insights) => {
                out.insert(layer.name().to_string(), insights);
            }
            Err(e) => {
                tracing::warn!(layer = layer.name(), error = %e, "insight layer failed");
            }
        }
    }
    out
}
