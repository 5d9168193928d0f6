use crate::*;
use crate::config::EngineConfig;
use crate::narrative::{narrate, MockNarrator, NarrativeGenerator};
use crate::store::{MemoryResultsStore, ResultsStore};

fn neutral_dims(gender: Gender) -> PersonaDimensions {
    PersonaDimensions::from_slots(
        PersonaSlot::ALL.map(|slot| DimensionScore::neutral(&DimensionSpec::persona(slot, gender))),
    )
}

fn sample_results() -> UserResults {
    let scores = ModuleScores {
        gender: Gender::Male,
        m1: neutral_dims(Gender::Female),
        m2: neutral_dims(Gender::Male),
        m3: None,
        m4: None,
    };
    UserResults::new(PersonaCode::default(), scores)
}

// ========== Persona codes ==========

#[test]
fn test_code_parse_valid() {
    let code = PersonaCode::parse("aceg").unwrap();
    assert_eq!(code.as_str(), "ACEG");
    assert_eq!(code.letter(PersonaSlot::Lifestyle), 'E');
    assert_eq!(code.direction(PersonaSlot::Values), Direction::A);
}

#[test]
fn test_code_parse_rejects_wrong_slot_letter() {
    assert!(PersonaCode::parse("CAEG").is_err());
    assert!(PersonaCode::parse("ACE").is_err());
    assert!(PersonaCode::parse("ACEGH").is_err());
}

#[test]
fn test_code_default_is_fallback() {
    assert_eq!(PersonaCode::default().as_str(), "BDFH");
}

#[test]
fn test_code_from_directions() {
    let code = PersonaCode::from_directions([Direction::B, Direction::A, Direction::B, Direction::A]);
    assert_eq!(code.as_str(), "BCFG");
}

#[test]
fn test_all_codes_canonical_order() {
    let all = PersonaCode::all();
    assert_eq!(all.len(), 16);
    assert_eq!(all[0].as_str(), "ACEG");
    assert_eq!(all[1].as_str(), "ACEH");
    assert_eq!(all[2].as_str(), "ACFG");
    assert_eq!(all[15].as_str(), "BDFH");
    let mut sorted = all.clone();
    sorted.dedup();
    assert_eq!(sorted.len(), 16);
}

#[test]
fn test_code_serde_roundtrip_validates() {
    let json = serde_json::to_string(&PersonaCode::parse("ADFH").unwrap()).unwrap();
    assert_eq!(json, "\"ADFH\"");
    assert!(serde_json::from_str::<PersonaCode>("\"XXXX\"").is_err());
}

// ========== Types ==========

#[test]
fn test_answer_untagged() {
    let set: ResponseSet = serde_json::from_str(r#"{"q1": 4, "q2": "B"}"#).unwrap();
    assert_eq!(set["q1"], Answer::Scale(4));
    assert_eq!(set["q2"], Answer::Choice("B".into()));
}

#[test]
fn test_question_touches_pole() {
    let likert = Question::direct("q1", "I train most days", "fitness");
    assert!(likert.touches_pole("fitness"));
    assert!(!likert.touches_pole("maturity"));

    let fc = Question::forced_choice("q2", "Weekend?", ("Climb", "adventure"), ("Garden", "stability"));
    assert!(fc.touches_pole("adventure"));
    assert!(fc.touches_pole("stability"));
    assert!(!fc.touches_pole("fitness"));
}

#[test]
fn test_question_deserialize_from_bank_json() {
    let q: Question = serde_json::from_str(
        r#"{"id":"m2_p1","text":"I rarely skip a workout","type":"behavioral","pole":"fitness","reverse_coded":true}"#,
    )
    .unwrap();
    assert_eq!(q.question_type, QuestionType::Behavioral);
    assert!(q.reverse_coded);
    assert!(q.option_a.is_none());
}

#[test]
fn test_persona_spec_uses_described_gender() {
    let spec = DimensionSpec::persona(PersonaSlot::Physical, Gender::Female);
    assert_eq!(spec.pole_a, "glamour");
    assert_eq!(spec.pole_b, "natural");
    assert_eq!(spec.name, "physical");
}

#[test]
fn test_connection_style_quadrants() {
    assert_eq!(ConnectionScore::new(70.0, 70.0).style, ConnectionStyle::Intimate);
    assert_eq!(ConnectionScore::new(70.0, 30.0).style, ConnectionStyle::Seeking);
    assert_eq!(ConnectionScore::new(30.0, 70.0).style, ConnectionStyle::Giving);
    assert_eq!(ConnectionScore::new(30.0, 30.0).style, ConnectionStyle::Independent);
    assert!((ConnectionScore::new(70.0, 30.0).gap() - 40.0).abs() < 1e-9);
}

#[test]
fn test_tier_serializes_camel_case() {
    assert_eq!(serde_json::to_string(&Tier::LongShot).unwrap(), "\"longShot\"");
    assert_eq!(serde_json::to_string(&Tier::AtRisk).unwrap(), "\"atRisk\"");
}

#[test]
fn test_gottman_get_set() {
    let mut g = GottmanScores::default();
    g.set(Horseman::Contempt, 12.0);
    assert_eq!(g.get(Horseman::Contempt), 12.0);
    assert_eq!(g.get(Horseman::Criticism), 0.0);
}

// ========== Config ==========

#[test]
fn test_default_config_valid() {
    assert!(EngineConfig::default().validate().is_ok());
    assert_eq!(ENGINE_CONFIG.matching.tier_scores.score(Tier::Kismet), 65.0);
}

#[test]
fn test_partial_json_override() {
    let cfg = EngineConfig::from_json(r#"{"couples": {"reciprocity_threshold": 10}}"#).unwrap();
    assert_eq!(cfg.couples.reciprocity_threshold, 10.0);
    assert_eq!(cfg.couples.connection_tension_threshold, 20.0);
    assert_eq!(cfg.matching.weights.tier, 0.5);
}

#[test]
fn test_bad_weights_rejected() {
    let err = EngineConfig::from_json(r#"{"matching": {"weights": {"tier": 0.9}}}"#).unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
}

#[test]
fn test_bad_fallback_code_rejected() {
    let err = EngineConfig::from_json(r#"{"scoring": {"fallback_code": "ZZZZ"}}"#).unwrap_err();
    assert!(err.to_string().contains("ZZZZ"));
}

// ========== Store ==========

#[test]
fn test_store_put_get() {
    let store = MemoryResultsStore::new();
    let results = sample_results();
    let id = results.id;
    store.put(results.clone()).unwrap();
    assert_eq!(store.count().unwrap(), 1);
    assert_eq!(store.get(&id).unwrap(), Some(results));
}

#[test]
fn test_store_require_missing() {
    let store = MemoryResultsStore::new();
    let err = store.require(&uuid::Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, EngineError::ProfileNotFound { .. }));
}

#[test]
fn test_retake_gets_new_id() {
    let a = sample_results();
    let b = UserResults::new(a.persona_code.clone(), a.scores.clone());
    assert_ne!(a.id, b.id);
    assert_eq!(a.scores, b.scores);
}

// ========== Narrative ==========

struct FailingNarrator;

impl NarrativeGenerator for FailingNarrator {
    fn narrate(&self, _payload: &serde_json::Value) -> anyhow::Result<String> {
        anyhow::bail!("model unavailable")
    }
}

#[test]
fn test_narrate_absent_generator() {
    assert_eq!(narrate(&sample_results(), None), None);
}

#[test]
fn test_narrate_mock() {
    let text = narrate(&sample_results(), Some(&MockNarrator)).unwrap();
    assert!(text.contains("sections"));
}

#[test]
fn test_narrate_failure_is_absent() {
    assert_eq!(narrate(&sample_results(), Some(&FailingNarrator)), None);
}
