//! Module 3: want/offer connection style and attentiveness items.

use crate::dimension::{oriented_mean, score_dimension, score_subscale};
use pc_core::types::{
    ConnectionScore, DimensionScore, DimensionSpec, Question, QuestionType, ResponseSet,
};

pub const WANT_POLE: &str = "want";
pub const OFFER_POLE: &str = "offer";
pub const ATTEND_OTHER_POLE: &str = "attend_other";
pub const ATTEND_SELF_POLE: &str = "attend_self";

const NEUTRAL: f64 = 50.0;

pub fn attentiveness_spec() -> DimensionSpec {
    DimensionSpec::new("attentiveness", ATTEND_OTHER_POLE, ATTEND_SELF_POLE)
}

/// Want/offer subscales. `None` when neither subscale had a scored item; a
/// single missing subscale sits at the midpoint.
pub fn score_connection(questions: &[Question], responses: &ResponseSet) -> Option<ConnectionScore> {
    let want = score_subscale(WANT_POLE, questions, responses);
    let offer = score_subscale(OFFER_POLE, questions, responses);
    if want.is_none() && offer.is_none() {
        return None;
    }
    Some(ConnectionScore::new(want.unwrap_or(NEUTRAL), offer.unwrap_or(NEUTRAL)))
}

/// Other- vs self-focus over the attentiveness items of Module 3.
pub fn score_attention_focus(questions: &[Question], responses: &ResponseSet) -> DimensionScore {
    score_dimension(&attentiveness_spec(), questions, responses)
}

/// Distance (0–100) between how subjects describe their attentiveness and
/// how their reported behaviour reads. `None` unless both item kinds scored.
pub fn self_perception_gap(questions: &[Question], responses: &ResponseSet) -> Option<f64> {
    let mean_for = |kind: QuestionType| {
        oriented_mean(ATTEND_OTHER_POLE, ATTEND_SELF_POLE, questions, responses, |q| {
            q.question_type == kind
        })
    };
    let direct = mean_for(QuestionType::Direct)?;
    let behavioral = mean_for(QuestionType::Behavioral)?;
    // oriented means span -2..=2, so their distance spans 0..=4
    Some(((direct - behavioral).abs() / 4.0 * 100.0).clamp(0.0, 100.0))
}
