//! Attentiveness: a derived 0–100 other-focus score.
//!
//! Computed twice during scoring: a partial pass right after Module 3 and a
//! complete pass once Module 4 horseman frequencies exist.

use crate::connection::score_attention_focus;
use pc_core::config::AttentivenessConfig;
use pc_core::error::{EngineError, Result};
use pc_core::types::{
    Attentiveness, AttentivenessLevel, ConnectionScore, GottmanScores, Question, ResponseSet,
};

/// Everything one attentiveness pass reads.
#[derive(Debug, Clone, Copy)]
pub struct AttentivenessInputs<'a> {
    /// Module 3 questions for the subject's gender.
    pub questions: &'a [Question],
    pub responses: &'a ResponseSet,
    pub connection: Option<&'a ConnectionScore>,
    pub gottman: Option<&'a GottmanScores>,
    pub self_perception_gap: Option<f64>,
}

pub fn attentiveness_level(score: f64, config: &AttentivenessConfig) -> AttentivenessLevel {
    if score >= config.strongly_other_focused {
        AttentivenessLevel::StronglyOtherFocused
    } else if score >= config.balanced {
        AttentivenessLevel::Balanced
    } else if score >= config.moderately_self_focused {
        AttentivenessLevel::ModeratelySelfFocused
    } else {
        AttentivenessLevel::SelfAbsorbed
    }
}

pub fn score_attentiveness(
    inputs: AttentivenessInputs<'_>,
    config: &AttentivenessConfig,
) -> Result<Attentiveness> {
    let connection = inputs.connection.ok_or_else(|| {
        EngineError::OptionalMetric("attentiveness needs a connection score".into())
    })?;
    let focus = score_attention_focus(inputs.questions, inputs.responses);
    if focus.sample_size == 0 {
        return Err(EngineError::OptionalMetric("no attentiveness items answered".into()));
    }

    let mut score = focus.pole_a_score;
    score += ((connection.offer_score - connection.want_score) * config.exchange_weight)
        .clamp(-config.exchange_cap, config.exchange_cap);
    if let Some(g) = inputs.gottman {
        // horsemen read 0–20 each; stonewalling reflects withdrawal, not self-focus
        score -= (g.criticism + g.contempt + g.defensiveness) / 60.0 * config.gottman_penalty;
    }
    if let Some(gap) = inputs.self_perception_gap {
        score -= gap * config.self_perception_weight;
    }

    if !score.is_finite() {
        return Err(EngineError::OptionalMetric(format!("non-finite attentiveness {score}")));
    }
    let score = score.clamp(0.0, 100.0);
    Ok(Attentiveness {
        score,
        level: attentiveness_level(score, config),
        complete: inputs.gottman.is_some(),
    })
}
