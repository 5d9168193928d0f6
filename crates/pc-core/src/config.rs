use crate::error::{EngineError, Result};
use crate::types::Tier;
use serde::{Deserialize, Serialize};

/// Engine-wide constants. Every field has a default, so a JSON override only
/// needs the keys it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    pub matching: MatchingConfig,
    pub attentiveness: AttentivenessConfig,
    pub insights: InsightConfig,
    pub couples: CouplesConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Code used when a classified code has no metadata entry.
    pub fallback_code: String,
    /// Approach strength below which a subject counts as balanced.
    pub balanced_approach_strength: f64,
    pub capacity_high: f64,
    pub capacity_medium: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub tier_scores: TierScores,
    pub weights: MatchWeights,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierScores {
    pub ideal: f64,
    pub kismet: f64,
    pub effort: f64,
    pub long_shot: f64,
    pub at_risk: f64,
    pub incompatible: f64,
}

impl TierScores {
    pub fn score(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Ideal => self.ideal,
            Tier::Kismet => self.kismet,
            Tier::Effort => self.effort,
            Tier::LongShot => self.long_shot,
            Tier::AtRisk => self.at_risk,
            Tier::Incompatible => self.incompatible,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchWeights {
    pub tier: f64,
    pub dimension: f64,
    pub connection: f64,
    pub conflict: f64,
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.tier + self.dimension + self.connection + self.conflict
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttentivenessConfig {
    pub strongly_other_focused: f64,
    pub balanced: f64,
    pub moderately_self_focused: f64,
    /// Multiplier on (offer − want).
    pub exchange_weight: f64,
    pub exchange_cap: f64,
    /// Maximum deduction from criticism + contempt + defensiveness.
    pub gottman_penalty: f64,
    pub self_perception_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    pub tension_strength: f64,
    pub connection_gap: f64,
    pub horseman_high: f64,
    pub polarized_strength: f64,
    pub flexible_strength: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouplesConfig {
    pub alignment_weight: f64,
    pub connection_weight: f64,
    pub conflict_weight: f64,
    pub reciprocity_threshold: f64,
    pub connection_tension_threshold: f64,
    pub clash_high_strength: f64,
    pub horseman_low_max: f64,
    pub horseman_moderate_max: f64,
    pub ceiling_base: f64,
    pub ceiling_step: f64,
    pub floor_base: f64,
    pub floor_step: f64,
    pub natural_partners: f64,
    pub complementary_pair: f64,
    pub growth_partners: f64,
    /// Value used for a compatibility component whose inputs are missing.
    pub neutral_score: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            fallback_code: "BDFH".into(),
            balanced_approach_strength: 10.0,
            capacity_high: 67.0,
            capacity_medium: 34.0,
        }
    }
}

impl Default for TierScores {
    fn default() -> Self {
        Self {
            ideal: 80.0,
            kismet: 65.0,
            effort: 45.0,
            long_shot: 25.0,
            at_risk: 10.0,
            incompatible: 2.0,
        }
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self { tier: 0.50, dimension: 0.20, connection: 0.15, conflict: 0.15 }
    }
}

impl Default for AttentivenessConfig {
    fn default() -> Self {
        Self {
            strongly_other_focused: 70.0,
            balanced: 50.0,
            moderately_self_focused: 30.0,
            exchange_weight: 0.25,
            exchange_cap: 15.0,
            gottman_penalty: 20.0,
            self_perception_weight: 0.1,
        }
    }
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            tension_strength: 40.0,
            connection_gap: 25.0,
            horseman_high: 14.0,
            polarized_strength: 70.0,
            flexible_strength: 10.0,
        }
    }
}

impl Default for CouplesConfig {
    fn default() -> Self {
        Self {
            alignment_weight: 0.35,
            connection_weight: 0.30,
            conflict_weight: 0.35,
            reciprocity_threshold: 15.0,
            connection_tension_threshold: 20.0,
            clash_high_strength: 60.0,
            horseman_low_max: 10.0,
            horseman_moderate_max: 14.0,
            ceiling_base: 20.0,
            ceiling_step: 3.0,
            floor_base: 15.0,
            floor_step: 5.0,
            natural_partners: 75.0,
            complementary_pair: 60.0,
            growth_partners: 45.0,
            neutral_score: 50.0,
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON override and validate it.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let match_sum = self.matching.weights.sum();
        if (match_sum - 1.0).abs() > 1e-6 {
            return Err(EngineError::Config(format!("match weights sum to {match_sum}, expected 1.0")));
        }
        let c = &self.couples;
        let couples_sum = c.alignment_weight + c.connection_weight + c.conflict_weight;
        if (couples_sum - 1.0).abs() > 1e-6 {
            return Err(EngineError::Config(format!(
                "couples weights sum to {couples_sum}, expected 1.0"
            )));
        }
        if c.horseman_low_max > c.horseman_moderate_max {
            return Err(EngineError::Config("horseman_low_max exceeds horseman_moderate_max".into()));
        }
        let a = &self.attentiveness;
        if !(a.strongly_other_focused > a.balanced && a.balanced > a.moderately_self_focused) {
            return Err(EngineError::Config("attentiveness thresholds must be descending".into()));
        }
        if crate::types::PersonaCode::parse(&self.scoring.fallback_code).is_err() {
            return Err(EngineError::Config(format!(
                "fallback code {} is not a persona code",
                self.scoring.fallback_code
            )));
        }
        Ok(())
    }
}

/// The default config instance.
pub static ENGINE_CONFIG: std::sync::LazyLock<EngineConfig> =
    std::sync::LazyLock::new(EngineConfig::default);
