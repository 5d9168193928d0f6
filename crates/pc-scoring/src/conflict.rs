//! Module 4: conflict approach, repair, capacity, drivers and horsemen.

use crate::dimension::{score_dimension, score_subscale};
use crate::normalizer::normalize;
use pc_core::config::ScoringConfig;
use pc_core::types::{
    CapacityLevel, ConflictApproach, ConflictProfile, DimensionSpec, Direction, Driver,
    EmotionalCapacity, GottmanScores, Horseman, Question, RepairMode, RepairSpeed, ResponseSet,
};

pub const CAPACITY_POLE: &str = "capacity";
/// Horseman subscales (0–100) are reported on a 0–20 scale.
const HORSEMAN_DIVISOR: f64 = 5.0;

pub fn approach_spec() -> DimensionSpec {
    DimensionSpec::new("approach", "pursue", "withdraw")
}

pub fn repair_speed_spec() -> DimensionSpec {
    DimensionSpec::new("repair_speed", "quick", "gradual")
}

pub fn repair_mode_spec() -> DimensionSpec {
    DimensionSpec::new("repair_mode", "verbal", "practical")
}

pub fn capacity_level(score: f64, config: &ScoringConfig) -> CapacityLevel {
    if score >= config.capacity_high {
        CapacityLevel::High
    } else if score >= config.capacity_medium {
        CapacityLevel::Medium
    } else {
        CapacityLevel::Low
    }
}

/// Highest-scoring driver subscale; ties keep declaration order.
pub fn primary_driver(questions: &[Question], responses: &ResponseSet) -> Option<Driver> {
    let mut best: Option<(Driver, f64)> = None;
    for driver in Driver::ALL {
        let Some(score) = score_subscale(driver.pole(), questions, responses) else { continue };
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((driver, score));
        }
    }
    best.map(|(driver, _)| driver)
}

/// Horseman frequencies on 0–20. Unscored horsemen read 0; `None` when no
/// horseman item was scored at all.
pub fn gottman_scores(questions: &[Question], responses: &ResponseSet) -> Option<GottmanScores> {
    let mut scores = GottmanScores::default();
    let mut any = false;
    for horseman in Horseman::ALL {
        if let Some(score) = score_subscale(horseman.pole(), questions, responses) {
            scores.set(horseman, score / HORSEMAN_DIVISOR);
            any = true;
        }
    }
    any.then_some(scores)
}

/// `None` when no Module 4 item carries a valid answer.
pub fn score_conflict(
    questions: &[Question],
    responses: &ResponseSet,
    config: &ScoringConfig,
) -> Option<ConflictProfile> {
    let answered = questions
        .iter()
        .any(|q| responses.get(&q.id).is_some_and(|a| normalize(q, a).is_ok()));
    if !answered {
        return None;
    }

    let approach_dim = score_dimension(&approach_spec(), questions, responses);
    let approach = if approach_dim.strength < config.balanced_approach_strength {
        ConflictApproach::Balanced
    } else {
        match approach_dim.direction {
            Direction::A => ConflictApproach::Pursue,
            Direction::B => ConflictApproach::Withdraw,
        }
    };

    let speed_dim = score_dimension(&repair_speed_spec(), questions, responses);
    let repair_speed = (speed_dim.sample_size > 0).then(|| match speed_dim.direction {
        Direction::A => RepairSpeed::Quick,
        Direction::B => RepairSpeed::Gradual,
    });
    let mode_dim = score_dimension(&repair_mode_spec(), questions, responses);
    let repair_mode = (mode_dim.sample_size > 0).then(|| match mode_dim.direction {
        Direction::A => RepairMode::Verbal,
        Direction::B => RepairMode::Practical,
    });

    let capacity = score_subscale(CAPACITY_POLE, questions, responses)
        .map(|score| EmotionalCapacity { score, level: capacity_level(score, config) });

    Some(ConflictProfile {
        approach,
        approach_strength: approach_dim.strength,
        repair_speed,
        repair_mode,
        capacity,
        primary_driver: primary_driver(questions, responses),
        gottman: gottman_scores(questions, responses),
    })
}
