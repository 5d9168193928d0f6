//! Dimension scorer: aggregates normalized answers into 0–100 pole scores.
//!
//! Each pole is rescaled against the theoretical min/max of the items that
//! were actually scored, so unanswered or invalid items never drag a pole
//! toward zero. A pole with no scored items sits at the midpoint.

use crate::normalizer::{item_range, normalize};
use pc_core::types::{Answer, DimensionScore, DimensionSpec, Direction, Question, ResponseSet};

const MIDPOINT: f64 = 50.0;

#[derive(Debug, Default, Clone, Copy)]
struct PoleTally {
    sum: f64,
    min: f64,
    max: f64,
    count: usize,
}

impl PoleTally {
    fn add(&mut self, value: f64, (lo, hi): (f64, f64)) {
        self.sum += value;
        self.min += lo;
        self.max += hi;
        self.count += 1;
    }

    fn rescaled(&self) -> Option<f64> {
        if self.count == 0 || self.max <= self.min {
            return None;
        }
        Some(((self.sum - self.min) / (self.max - self.min) * 100.0).clamp(0.0, 100.0))
    }
}

/// Valid (question, contribution-to-pole) pairs for the questions that touch `pole`.
fn scored_items<'q>(
    pole: &'q str,
    questions: &'q [Question],
    responses: &'q ResponseSet,
) -> impl Iterator<Item = (&'q Question, f64)> + 'q {
    questions.iter().filter(move |q| q.touches_pole(pole)).filter_map(move |q| {
        let answer: &Answer = responses.get(&q.id)?;
        match normalize(q, answer) {
            Ok(c) => Some((q, if c.pole == pole { c.magnitude } else { 0.0 })),
            Err(e) => {
                tracing::debug!(question = %q.id, error = %e, "skipping response");
                None
            }
        }
    })
}

/// Score one unipolar subscale. `None` when no item touching `pole` was scored.
pub fn score_subscale(pole: &str, questions: &[Question], responses: &ResponseSet) -> Option<f64> {
    let mut tally = PoleTally::default();
    for (q, value) in scored_items(pole, questions, responses) {
        tally.add(value, item_range(q));
    }
    tally.rescaled()
}

/// Score a bipolar dimension. Ties resolve to pole A with zero strength.
pub fn score_dimension(
    spec: &DimensionSpec,
    questions: &[Question],
    responses: &ResponseSet,
) -> DimensionScore {
    let mut a = PoleTally::default();
    let mut b = PoleTally::default();
    let mut sample_size = 0;

    for q in questions {
        let touches_a = q.touches_pole(&spec.pole_a);
        let touches_b = q.touches_pole(&spec.pole_b);
        if !touches_a && !touches_b {
            continue;
        }
        let Some(answer) = responses.get(&q.id) else { continue };
        let contribution = match normalize(q, answer) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!(question = %q.id, error = %e, "skipping response");
                continue;
            }
        };
        let range = item_range(q);
        if touches_a {
            a.add(if contribution.pole == spec.pole_a { contribution.magnitude } else { 0.0 }, range);
        }
        if touches_b {
            b.add(if contribution.pole == spec.pole_b { contribution.magnitude } else { 0.0 }, range);
        }
        sample_size += 1;
    }

    if sample_size == 0 {
        return DimensionScore::neutral(spec);
    }

    let pole_a_score = a.rescaled().unwrap_or(MIDPOINT);
    let pole_b_score = b.rescaled().unwrap_or(MIDPOINT);
    let direction = if pole_b_score > pole_a_score { Direction::B } else { Direction::A };
    let assigned_pole = match direction {
        Direction::A => spec.pole_a.clone(),
        Direction::B => spec.pole_b.clone(),
    };

    DimensionScore {
        dimension: spec.name.clone(),
        pole_a_score,
        pole_b_score,
        assigned_pole,
        strength: (pole_a_score - pole_b_score).abs().min(100.0),
        direction,
        sample_size,
    }
}

/// Mean contribution of scored Likert items per question type, oriented so
/// that `toward` is positive and `away` negative. `None` for an empty group.
pub(crate) fn oriented_mean(
    toward: &str,
    away: &str,
    questions: &[Question],
    responses: &ResponseSet,
    keep: impl Fn(&Question) -> bool,
) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for q in questions.iter().filter(|q| q.is_likert() && keep(q)) {
        let sign = if q.pole == toward {
            1.0
        } else if q.pole == away {
            -1.0
        } else {
            continue;
        };
        let Some(answer) = responses.get(&q.id) else { continue };
        if let Ok(c) = normalize(q, answer) {
            sum += sign * c.magnitude;
            count += 1;
        }
    }
    (count > 0).then(|| sum / count as f64)
}
