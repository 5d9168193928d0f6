//! Secondary compatibility signals shared by the ranker and couples reports.

use pc_core::types::{
    CapacityLevel, ConflictProfile, ConnectionScore, Gender, PersonaCode, PersonaDimensions,
    PersonaMetadata, PersonaSlot,
};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

const NEUTRAL: f64 = 50.0;
const SHARED_BASE: f64 = 15.0;
const SHARED_STRENGTH_BONUS: f64 = 10.0;
const DIFFERING_MAX: f64 = 10.0;
const KEYWORD_BONUS: f64 = 5.0;

fn word_pattern(key: &str) -> Option<Regex> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(key))).ok()
}

/// Word matchers for every built-in pole key, compiled once.
static POLE_KEY_PATTERNS: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for gender in [Gender::Male, Gender::Female] {
        for slot in PersonaSlot::ALL {
            let (a, b) = slot.pole_keys(gender);
            for key in [a, b] {
                if let Some(re) = word_pattern(key) {
                    map.insert(key, re);
                }
            }
        }
    }
    map
});

fn mentions(key: &str, lines: &[String]) -> bool {
    let matches = |re: &Regex| lines.iter().any(|line| re.is_match(line));
    match POLE_KEY_PATTERNS.get(key) {
        Some(re) => matches(re),
        None => word_pattern(key).is_some_and(|re| matches(&re)),
    }
}

/// Coarse 0–100 fit between the user's self-presentation and a candidate
/// persona. Shared letters score higher the more strongly the user holds
/// them; each of the user's poles named in the candidate's
/// `most_attractive` list adds a flat bonus.
pub fn dimension_alignment(
    user_code: &PersonaCode,
    user_m2: &PersonaDimensions,
    candidate: &PersonaMetadata,
) -> f64 {
    let mut score = 0.0;
    for slot in PersonaSlot::ALL {
        let dim = user_m2.get(slot);
        let strength = dim.strength.clamp(0.0, 100.0) / 100.0;
        score += if user_code.direction(slot) == candidate.code.direction(slot) {
            SHARED_BASE + SHARED_STRENGTH_BONUS * strength
        } else {
            DIFFERING_MAX * (1.0 - strength)
        };
        if dim.sample_size > 0 && mentions(&dim.assigned_pole, &candidate.most_attractive) {
            score += KEYWORD_BONUS;
        }
    }
    score.clamp(0.0, 100.0)
}

fn both_equal<T: PartialEq>(a: Option<T>, b: Option<T>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

fn capacity_of(profile: &ConflictProfile) -> Option<CapacityLevel> {
    profile.capacity.as_ref().map(|c| c.level)
}

/// Exchange reciprocity: how well each side's offer meets the other's want.
/// Symmetric in its arguments; 50 when either side is missing.
pub fn connection_fit(a: Option<&ConnectionScore>, b: Option<&ConnectionScore>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else { return NEUTRAL };
    let mismatch = ((a.want_score - b.offer_score).abs() + (a.offer_score - b.want_score).abs()) / 2.0;
    (100.0 - mismatch).max(0.0)
}

/// Conflict-style fit of `a` with `b`. Complementary approaches are rewarded,
/// a shared primary driver is penalized, and `b` holding high capacity adds a
/// bonus, so the result is not symmetric. 50 when either side is missing.
/// Rules whose inputs were not answered on either side are skipped.
pub fn conflict_fit(a: Option<&ConflictProfile>, b: Option<&ConflictProfile>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else { return NEUTRAL };
    let mut score = NEUTRAL;
    if a.approach != b.approach {
        score += 10.0;
    }
    if both_equal(a.repair_speed, b.repair_speed) {
        score += 10.0;
    }
    if both_equal(a.repair_mode, b.repair_mode) {
        score += 5.0;
    }
    let (a_level, b_level) = (capacity_of(a), capacity_of(b));
    if both_equal(a_level, b_level) {
        score += 10.0;
    }
    if b_level == Some(CapacityLevel::High) {
        score += 5.0;
    }
    if a.primary_driver.is_some() && a.primary_driver == b.primary_driver {
        score -= 10.0;
    }
    score.clamp(0.0, 100.0)
}
