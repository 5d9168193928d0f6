//! Response normalizer: one raw answer → a signed contribution toward a pole.

use pc_core::error::{EngineError, Result};
use pc_core::types::{Answer, Question};

const LIKERT_MIN: i64 = 1;
const LIKERT_MAX: i64 = 5;
const LIKERT_MIDPOINT: i64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct SignedContribution {
    pub pole: String,
    pub magnitude: f64,
}

/// Likert answers map to −2…+2 around the midpoint (negated when reverse
/// coded). A forced choice gives +1 to the chosen option's pole.
pub fn normalize(question: &Question, answer: &Answer) -> Result<SignedContribution> {
    if question.is_likert() {
        let value = match answer {
            Answer::Scale(v) => *v,
            Answer::Choice(c) => {
                return Err(EngineError::invalid_response(
                    &question.id,
                    format!("expected a {LIKERT_MIN}-{LIKERT_MAX} rating, got {c:?}"),
                ))
            }
        };
        if !(LIKERT_MIN..=LIKERT_MAX).contains(&value) {
            return Err(EngineError::invalid_response(
                &question.id,
                format!("rating {value} outside {LIKERT_MIN}-{LIKERT_MAX}"),
            ));
        }
        let centered = (value - LIKERT_MIDPOINT) as f64;
        let magnitude = if question.reverse_coded { -centered } else { centered };
        return Ok(SignedContribution { pole: question.pole.clone(), magnitude });
    }

    let choice = match answer {
        Answer::Choice(c) => c.as_str(),
        Answer::Scale(v) => {
            return Err(EngineError::invalid_response(
                &question.id,
                format!("expected \"A\" or \"B\", got {v}"),
            ))
        }
    };
    let option = match choice {
        "A" => question.option_a.as_ref(),
        "B" => question.option_b.as_ref(),
        other => {
            return Err(EngineError::invalid_response(
                &question.id,
                format!("expected \"A\" or \"B\", got {other:?}"),
            ))
        }
    };
    let option = option.ok_or_else(|| {
        EngineError::invalid_response(&question.id, format!("question has no option {choice}"))
    })?;
    Ok(SignedContribution { pole: option.pole.clone(), magnitude: 1.0 })
}

/// Theoretical (min, max) one scored item can add to a pole it touches.
pub fn item_range(question: &Question) -> (f64, f64) {
    if question.is_likert() {
        let spread = (LIKERT_MAX - LIKERT_MIDPOINT) as f64;
        (-spread, spread)
    } else {
        (0.0, 1.0)
    }
}
