use crate::overview::{archetype, m3_compat, m4_compat};
use crate::repair::risk_level;
use crate::*;
use pc_core::config::CouplesConfig;
use pc_core::error::EngineError;
use pc_core::narrative::MockNarrator;
use pc_core::profile::{ModuleScores, UserResults};
use pc_core::store::{MemoryResultsStore, ResultsStore};
use pc_core::types::*;
use std::sync::Arc;
use uuid::Uuid;

fn code(raw: &str) -> PersonaCode {
    PersonaCode::parse(raw).unwrap()
}

/// Dimensions pointing at `raw`, with pole keys describing `described`.
fn dims(raw: &str, described: Gender, strength: f64) -> PersonaDimensions {
    let target = code(raw);
    PersonaDimensions::from_slots(PersonaSlot::ALL.map(|slot| {
        let spec = DimensionSpec::persona(slot, described);
        let direction = target.direction(slot);
        let (high, low) = (50.0 + strength / 2.0, 50.0 - strength / 2.0);
        let (a, b, pole) = match direction {
            Direction::A => (high, low, spec.pole_a.clone()),
            Direction::B => (low, high, spec.pole_b.clone()),
        };
        DimensionScore {
            dimension: spec.name.clone(),
            pole_a_score: a,
            pole_b_score: b,
            assigned_pole: pole,
            strength,
            direction,
            sample_size: 4,
        }
    }))
}

fn unscored(described: Gender) -> PersonaDimensions {
    PersonaDimensions::from_slots(
        PersonaSlot::ALL.map(|slot| DimensionScore::neutral(&DimensionSpec::persona(slot, described))),
    )
}

fn conflict(approach: ConflictApproach, speed: RepairSpeed, driver: Option<Driver>) -> ConflictProfile {
    ConflictProfile {
        approach,
        approach_strength: 50.0,
        repair_speed: Some(speed),
        repair_mode: Some(RepairMode::Practical),
        capacity: Some(EmotionalCapacity { score: 50.0, level: CapacityLevel::Medium }),
        primary_driver: driver,
        gottman: None,
    }
}

fn gottman(criticism: f64, contempt: f64, defensiveness: f64, stonewalling: f64) -> GottmanScores {
    GottmanScores { criticism, contempt, defensiveness, stonewalling }
}

struct Subject {
    gender: Gender,
    m1: PersonaDimensions,
    m2: PersonaDimensions,
    m3: Option<ConnectionScore>,
    m4: Option<ConflictProfile>,
}

impl Subject {
    fn new(gender: Gender, m2_code: &str, m1_code: &str) -> Self {
        Self {
            gender,
            m1: dims(m1_code, gender.opposite(), 80.0),
            m2: dims(m2_code, gender, 80.0),
            m3: None,
            m4: None,
        }
    }

    fn connection(mut self, want: f64, offer: f64) -> Self {
        self.m3 = Some(ConnectionScore::new(want, offer));
        self
    }

    fn conflict(mut self, profile: ConflictProfile) -> Self {
        self.m4 = Some(profile);
        self
    }

    fn build(self) -> UserResults {
        let persona = PersonaCode::from_directions(self.m2.directions());
        UserResults::new(
            persona,
            ModuleScores { gender: self.gender, m1: self.m1, m2: self.m2, m3: self.m3, m4: self.m4 },
        )
    }
}

/// Same self-presentation, tied reciprocal exchange, same conflict style.
fn matched_pair(driver_b: Driver) -> (UserResults, UserResults) {
    let a = Subject::new(Gender::Male, "ACEG", "ACEG")
        .connection(60.0, 60.0)
        .conflict(conflict(ConflictApproach::Pursue, RepairSpeed::Quick, Some(Driver::Control)))
        .build();
    let b = Subject::new(Gender::Female, "ACEG", "ACEG")
        .connection(60.0, 60.0)
        .conflict(conflict(ConflictApproach::Pursue, RepairSpeed::Quick, Some(driver_b)))
        .build();
    (a, b)
}

fn config() -> CouplesConfig {
    CouplesConfig::default()
}

// ========== Overview ==========

#[test]
fn test_overview_matched_pair() {
    let (a, b) = matched_pair(Driver::Control);
    let overview = overview::overview(&a, &b, &config());
    assert_eq!(overview.shared_dimensions, PersonaSlot::ALL.to_vec());
    assert_eq!(overview.alignment_percent, 100.0);
    assert_eq!(overview.m3_compat, 100.0);
    // 50 + 10 speed + 5 mode + 10 capacity - 10 shared driver
    assert_eq!(overview.m4_compat, 65.0);
    // .35*100 + .30*100 + .35*65 = 87.75
    assert_eq!(overview.overall_score, 88);
    assert_eq!(overview.archetype, Archetype::NaturalPartners);
}

#[test]
fn test_driver_collision_lowers_conflict_compat() {
    let (a, b) = matched_pair(Driver::Control);
    let (c, d) = matched_pair(Driver::Disrespect);
    assert_eq!(m4_compat(&a, &b, &config()), 65.0);
    assert_eq!(m4_compat(&c, &d, &config()), 75.0);
}

#[test]
fn test_tied_want_offer_is_perfect_connection() {
    let a = Subject::new(Gender::Male, "ACEG", "ACEG").connection(60.0, 60.0).build();
    let b = Subject::new(Gender::Female, "BDFH", "ACEG").connection(60.0, 60.0).build();
    assert_eq!(m3_compat(&a, &b, &config()), 100.0);
}

#[test]
fn test_missing_modules_use_neutral_components() {
    let a = Subject::new(Gender::Male, "ACEG", "ACEG").build();
    let b = Subject::new(Gender::Female, "ACEG", "ACEG").connection(80.0, 20.0).build();
    let overview = overview::overview(&a, &b, &config());
    assert_eq!(overview.m3_compat, 50.0);
    assert_eq!(overview.m4_compat, 50.0);
    // .35*100 + .30*50 + .35*50
    assert_eq!(overview.overall_score, 68);
    assert_eq!(overview.archetype, Archetype::ComplementaryPair);
}

#[test]
fn test_overview_is_symmetric() {
    let a = Subject::new(Gender::Male, "ACFG", "BCEG")
        .connection(80.0, 40.0)
        .conflict(conflict(ConflictApproach::Withdraw, RepairSpeed::Gradual, Some(Driver::Inadequacy)))
        .build();
    let b = Subject::new(Gender::Female, "ADEG", "ACEH")
        .connection(35.0, 70.0)
        .conflict(conflict(ConflictApproach::Pursue, RepairSpeed::Quick, Some(Driver::Abandonment)))
        .build();
    let ab = overview::overview(&a, &b, &config());
    let ba = overview::overview(&b, &a, &config());
    assert_eq!(ab.overall_score, ba.overall_score);
    assert_eq!(ab.m3_compat, ba.m3_compat);
    assert_eq!(ab.m4_compat, ba.m4_compat);
}

#[test]
fn test_archetype_thresholds() {
    let c = config();
    assert_eq!(archetype(75.0, &c), Archetype::NaturalPartners);
    assert_eq!(archetype(74.9, &c), Archetype::ComplementaryPair);
    assert_eq!(archetype(60.0, &c), Archetype::ComplementaryPair);
    assert_eq!(archetype(45.0, &c), Archetype::GrowthPartners);
    assert_eq!(archetype(44.9, &c), Archetype::ChallengePair);
    assert_eq!(Archetype::GrowthPartners.label(), "Growth Partners");
}

// ========== Alignment ==========

#[test]
fn test_want_offer_parallels_both_directions() {
    let a = Subject::new(Gender::Male, "BDFH", "ACEG").build();
    let b = Subject::new(Gender::Female, "ACEG", "BDFH").build();
    let alignment = alignment::alignment(&a, &b, &config());

    assert!(alignment.parallels.iter().all(|p| p.kind != ParallelKind::SharedDesire));
    let wanting = |who: alignment::Partner| {
        alignment
            .parallels
            .iter()
            .filter(|p| p.kind == ParallelKind::WantOfferMatch { wanting: who })
            .count()
    };
    assert_eq!(wanting(alignment::Partner::A), 4);
    assert_eq!(wanting(alignment::Partner::B), 4);
    assert!(alignment.exchange.is_none());
}

#[test]
fn test_shared_desire_strength_is_weaker_side() {
    let mut a = Subject::new(Gender::Male, "ACEG", "ACEG");
    a.m1 = dims("ACEG", Gender::Female, 30.0);
    let b = Subject::new(Gender::Female, "ACEG", "ADEG").build();
    let alignment = alignment::alignment(&a.build(), &b, &config());

    let shared: Vec<_> =
        alignment.parallels.iter().filter(|p| p.kind == ParallelKind::SharedDesire).collect();
    // b wants D on social, a wants C
    assert_eq!(shared.len(), 3);
    assert!(shared.iter().all(|p| p.strength == 30.0));
    assert!(shared.iter().all(|p| p.dimension != PersonaSlot::Social));
}

#[test]
fn test_exchange_gaps() {
    let a = Subject::new(Gender::Male, "ACEG", "ACEG").connection(80.0, 40.0).build();
    let b = Subject::new(Gender::Female, "ACEG", "ACEG").connection(70.0, 30.0).build();
    let gaps = alignment::exchange_gaps(&a, &b, &config()).unwrap();
    assert_eq!(gaps.a_want_b_offer, 50.0);
    assert_eq!(gaps.b_want_a_offer, 30.0);
    assert!(!gaps.reciprocal);

    let c = Subject::new(Gender::Male, "ACEG", "ACEG").connection(55.0, 50.0).build();
    let d = Subject::new(Gender::Female, "ACEG", "ACEG").connection(60.0, 45.0).build();
    let gaps = alignment::exchange_gaps(&c, &d, &config()).unwrap();
    assert!(gaps.reciprocal);
}

// ========== Clashes ==========

#[test]
fn test_clash_severity() {
    let mut a = Subject::new(Gender::Male, "ACEG", "ACEG");
    let mut b = Subject::new(Gender::Female, "BDFH", "ACEG");
    a.m2 = PersonaDimensions::from_slots([
        dims("ACEG", Gender::Male, 61.0).physical,
        dims("ACEG", Gender::Male, 60.0).social,
        dims("ACEG", Gender::Male, 90.0).lifestyle,
        dims("ACEG", Gender::Male, 80.0).values,
    ]);
    b.m2 = PersonaDimensions::from_slots([
        dims("BDFH", Gender::Female, 61.0).physical,
        dims("BDFH", Gender::Female, 90.0).social,
        dims("BDFH", Gender::Female, 20.0).lifestyle,
        dims("BDFH", Gender::Female, 80.0).values,
    ]);
    let clashes = clashes::clashes(&a.build(), &b.build(), None, &config());

    let severities: Vec<_> = clashes.clashes.iter().map(|c| (c.dimension, c.severity)).collect();
    assert_eq!(
        severities,
        vec![
            (PersonaSlot::Physical, Severity::High),
            (PersonaSlot::Social, Severity::Moderate),
            (PersonaSlot::Lifestyle, Severity::Moderate),
            (PersonaSlot::Values, Severity::High),
        ]
    );
    assert_eq!(clashes.high_count(), 2);
    assert_eq!(clashes.clashes[3].a_pole, "tradition");
    assert_eq!(clashes.clashes[3].b_pole, "independence");
    assert_eq!(clashes.connection_tension, None);
}

#[test]
fn test_connection_tension_from_either_gap() {
    let a = Subject::new(Gender::Male, "ACEG", "ACEG").connection(80.0, 55.0).build();
    let b = Subject::new(Gender::Female, "ACEG", "ACEG").connection(60.0, 70.0).build();
    let report = synthesize(&a, &b, &config());
    // |80 - 70| = 10, |60 - 55| = 5
    assert_eq!(report.clashes.connection_tension, Some(false));

    let c = Subject::new(Gender::Female, "ACEG", "ACEG").connection(60.0, 50.0).build();
    let report = synthesize(&a, &c, &config());
    // |80 - 50| = 30
    assert_eq!(report.clashes.connection_tension, Some(true));
}

#[test]
fn test_unscored_dimensions_never_clash() {
    let mut a = Subject::new(Gender::Male, "ACEG", "ACEG");
    a.m2 = unscored(Gender::Male);
    let b = Subject::new(Gender::Female, "BDFH", "ACEG").build();
    let report = synthesize(&a.build(), &b, &config());
    assert!(report.clashes.clashes.is_empty());
    assert_eq!(report.overview.alignment_percent, 0.0);
}

// ========== Choreography ==========

#[test]
fn test_conflict_dynamic_classification() {
    use ConflictApproach::*;
    assert_eq!(ConflictDynamic::of(Pursue, Withdraw), ConflictDynamic::PursueWithdraw);
    assert_eq!(ConflictDynamic::of(Withdraw, Pursue), ConflictDynamic::PursueWithdraw);
    assert_eq!(ConflictDynamic::of(Pursue, Pursue), ConflictDynamic::DualPursuit);
    assert_eq!(ConflictDynamic::of(Withdraw, Withdraw), ConflictDynamic::DualWithdrawal);
    assert_eq!(ConflictDynamic::of(Balanced, Withdraw), ConflictDynamic::Mixed);
    assert_eq!(ConflictDynamic::of(Balanced, Balanced), ConflictDynamic::Mixed);
}

#[test]
fn test_choreography_flags() {
    let (a, b) = matched_pair(Driver::Control);
    let ch = choreography::choreography(&a, &b);
    assert_eq!(ch.dynamic, ConflictDynamic::DualPursuit);
    assert_eq!(ch.driver_collision, Some(true));
    assert_eq!(ch.shared_driver, Some(Driver::Control));
    assert_eq!(ch.repair_speed_match, Some(true));
    assert_eq!(ch.repair_mode_match, Some(true));

    let c = Subject::new(Gender::Female, "ACEG", "ACEG")
        .conflict(conflict(ConflictApproach::Withdraw, RepairSpeed::Gradual, None))
        .build();
    let ch = choreography::choreography(&a, &c);
    assert_eq!(ch.dynamic, ConflictDynamic::PursueWithdraw);
    assert_eq!(ch.driver_collision, None);
    assert_eq!(ch.repair_speed_match, Some(false));
}

// ========== Repair ==========

#[test]
fn test_horseman_risk_buckets() {
    let c = config();
    assert_eq!(risk_level(10.0, &c), RiskLevel::Low);
    assert_eq!(risk_level(10.5, &c), RiskLevel::Moderate);
    assert_eq!(risk_level(14.0, &c), RiskLevel::Moderate);
    assert_eq!(risk_level(14.5, &c), RiskLevel::High);
}

#[test]
fn test_overall_repair_risk() {
    let with = |g: GottmanScores, capacity: f64| {
        let mut profile = conflict(ConflictApproach::Pursue, RepairSpeed::Quick, None);
        profile.gottman = Some(g);
        profile.capacity = Some(EmotionalCapacity { score: capacity, level: CapacityLevel::Medium });
        Subject::new(Gender::Male, "ACEG", "ACEG").conflict(profile).build()
    };

    let two_high = repair::repair(
        &with(gottman(15.0, 15.0, 15.0, 0.0), 80.0),
        &with(gottman(15.0, 15.0, 5.0, 0.0), 50.0),
        &config(),
    );
    let levels: Vec<_> = two_high.horsemen.iter().map(|h| h.level).collect();
    assert_eq!(levels, vec![RiskLevel::High, RiskLevel::High, RiskLevel::Low, RiskLevel::Low]);
    assert_eq!(two_high.overall_risk, RiskLevel::High);
    assert_eq!(two_high.capacity_gap, Some(30.0));

    let one_high = repair::repair(
        &with(gottman(20.0, 0.0, 0.0, 0.0), 50.0),
        &with(gottman(10.0, 0.0, 0.0, 0.0), 50.0),
        &config(),
    );
    assert_eq!(one_high.horsemen[0].combined, 15.0);
    assert_eq!(one_high.overall_risk, RiskLevel::Moderate);

    let calm = repair::repair(
        &with(gottman(5.0, 0.0, 0.0, 14.0), 50.0),
        &with(gottman(5.0, 0.0, 0.0, 14.0), 50.0),
        &config(),
    );
    assert_eq!(calm.overall_risk, RiskLevel::Low);
}

#[test]
fn test_missing_module_four_degrades_to_unknown() {
    let a = Subject::new(Gender::Male, "ACEG", "ACEG").connection(60.0, 60.0).build();
    let b = Subject::new(Gender::Female, "ACEG", "ACEG")
        .connection(60.0, 60.0)
        .conflict(conflict(ConflictApproach::Pursue, RepairSpeed::Quick, Some(Driver::Control)))
        .build();
    let report = synthesize(&a, &b, &config());

    assert_eq!(report.choreography.dynamic, ConflictDynamic::Unknown);
    assert_eq!(report.choreography.driver_collision, None);
    assert_eq!(report.choreography.repair_speed_match, None);
    assert_eq!(report.repair.overall_risk, RiskLevel::Unknown);
    assert!(report.repair.horsemen.is_empty());
    assert_eq!(report.repair.capacity_gap, None);
    assert_eq!(report.overview.m4_compat, 50.0);

    let stress = report.daily_life.iter().find(|s| s.scenario == Scenario::UnderStress).unwrap();
    assert_eq!(stress.outlook, Outlook::Unknown);
    assert!(!report.projection.ceiling_factors.contains(&"repair_speed_match".to_string()));
}

#[test]
fn test_profile_without_horsemen_keeps_capacity_gap() {
    let (a, b) = matched_pair(Driver::Control);
    let report = synthesize(&a, &b, &config());
    assert_eq!(report.repair.overall_risk, RiskLevel::Unknown);
    assert_eq!(report.repair.capacity_gap, Some(0.0));
}

#[test]
fn test_unanswered_repair_items_skip_repair_flags() {
    let blank = || {
        let mut profile = conflict(ConflictApproach::Pursue, RepairSpeed::Quick, Some(Driver::Control));
        profile.repair_speed = None;
        profile.repair_mode = None;
        profile.capacity = None;
        profile
    };
    let a = Subject::new(Gender::Male, "ACEG", "ACEG").connection(60.0, 60.0).conflict(blank()).build();
    let b = Subject::new(Gender::Female, "ACEG", "ACEG").connection(60.0, 60.0).conflict(blank()).build();
    let report = synthesize(&a, &b, &config());

    assert_eq!(report.choreography.dynamic, ConflictDynamic::DualPursuit);
    assert_eq!(report.choreography.repair_speed_match, None);
    assert_eq!(report.choreography.repair_mode_match, None);
    assert_eq!(report.repair.capacity_gap, None);
    let factors = &report.projection.ceiling_factors;
    assert!(!factors.contains(&"repair_speed_match".to_string()));
    assert!(!factors.contains(&"high_capacity".to_string()));

    // one answered side is still not a match
    let c = Subject::new(Gender::Female, "ACEG", "ACEG")
        .conflict(conflict(ConflictApproach::Pursue, RepairSpeed::Quick, None))
        .build();
    assert_eq!(choreography::choreography(&a, &c).repair_speed_match, None);
}

// ========== Daily life ==========

#[test]
fn test_daily_life_scenarios() {
    let mut a = Subject::new(Gender::Male, "ACEG", "ACEG")
        .connection(60.0, 60.0)
        .conflict(conflict(ConflictApproach::Pursue, RepairSpeed::Quick, Some(Driver::Control)))
        .build();
    a.demographics.display_name = Some("Sam".into());
    let b = Subject::new(Gender::Female, "ADEG", "ACEG")
        .connection(60.0, 60.0)
        .conflict(conflict(ConflictApproach::Withdraw, RepairSpeed::Gradual, Some(Driver::Control)))
        .build();
    let report = synthesize(&a, &b, &config());

    let scenarios: Vec<_> = report.daily_life.iter().map(|s| (s.scenario, s.outlook)).collect();
    assert_eq!(
        scenarios,
        vec![
            (Scenario::DailyConnection, Outlook::Harmonious),
            (Scenario::DecisionMaking, Outlook::Harmonious),
            (Scenario::SocialLife, Outlook::Friction),
            (Scenario::UnderStress, Outlook::Friction),
        ]
    );
    let social = &report.daily_life[2];
    assert!(social.narrative.contains("Sam"));
    assert!(social.narrative.contains("Partner B"));
    assert!(social.narrative.contains("charisma"));
    assert!(social.narrative.contains("serenity"));
    assert_eq!(report.partner_a.label, "Sam");
}

fn daily_connection_of(a: (f64, f64), b: (f64, f64)) -> ScenarioOutlook {
    let mut a = Subject::new(Gender::Male, "ACEG", "ACEG").connection(a.0, a.1).build();
    a.demographics.display_name = Some("Sam".into());
    let mut b = Subject::new(Gender::Female, "ACEG", "ACEG").connection(b.0, b.1).build();
    b.demographics.display_name = Some("Riley".into());
    let report = synthesize(&a, &b, &config());
    report.daily_life.into_iter().find(|s| s.scenario == Scenario::DailyConnection).unwrap()
}

#[test]
fn test_daily_connection_names_the_underserved_partner() {
    // Sam wants 90 but Riley offers 60
    let sam_short = daily_connection_of((90.0, 60.0), (60.0, 60.0));
    assert_eq!(sam_short.outlook, Outlook::Friction);
    assert!(sam_short.narrative.starts_with("Sam is likely to want more"));

    // Riley wants 90 but Sam offers 30
    let riley_short = daily_connection_of((50.0, 30.0), (90.0, 50.0));
    assert_eq!(riley_short.outlook, Outlook::Friction);
    assert!(riley_short.narrative.starts_with("Riley is likely to want more"));
}

#[test]
fn test_daily_connection_surplus_is_not_a_shortfall() {
    // Sam wants 20 and receives 90; Riley wants 50 and receives exactly 50
    let outlook = daily_connection_of((20.0, 50.0), (50.0, 90.0));
    assert_eq!(outlook.outlook, Outlook::Friction);
    assert!(!outlook.narrative.contains("want more"));
    assert!(outlook.narrative.starts_with("Sam is likely to get more"));
}

#[test]
fn test_daily_connection_workable_band() {
    // gaps of 18 and 10: past reciprocity, within the tension threshold
    let outlook = daily_connection_of((60.0, 60.0), (50.0, 78.0));
    assert_eq!(outlook.outlook, Outlook::Workable);
    assert!(outlook.narrative.contains("Sam and Riley"));
}

#[test]
fn test_daily_life_unknown_without_data() {
    let mut a = Subject::new(Gender::Male, "ACEG", "ACEG");
    a.m2 = unscored(Gender::Male);
    let b = Subject::new(Gender::Female, "ACEG", "ACEG").build();
    let report = synthesize(&a.build(), &b, &config());
    assert_eq!(report.daily_life.len(), 4);
    assert!(report.daily_life.iter().all(|s| s.outlook == Outlook::Unknown));
}

// ========== Projection ==========

#[test]
fn test_projection_matched_pair() {
    let (a, b) = matched_pair(Driver::Control);
    let projection = synthesize(&a, &b, &config()).projection;
    assert_eq!(
        projection.ceiling_factors,
        vec!["strong_alignment", "reciprocal_exchange", "repair_speed_match"]
    );
    assert_eq!(projection.floor_factors, vec!["driver_collision"]);
    // min(100, 88 + 20 + 9), 88 - 15 - 5
    assert_eq!(projection.ceiling, 100);
    assert_eq!(projection.floor, 68);
    assert_eq!(projection.growth_potential, 12);
    assert_eq!(projection.risk_exposure, 20);
}

#[test]
fn test_projection_floor_clamps_at_zero() {
    let a = Subject::new(Gender::Male, "ACEG", "ACEG").build();
    let b = Subject::new(Gender::Female, "BDFH", "ACEG").build();
    let report = synthesize(&a, &b, &config());
    let overall = report.overview.overall_score;

    assert_eq!(report.overview.archetype, Archetype::ChallengePair);
    assert_eq!(
        report.projection.floor_factors,
        vec!["physical_clash", "social_clash", "lifestyle_clash", "values_clash"]
    );
    assert!(report.projection.ceiling_factors.is_empty());
    assert_eq!(report.projection.ceiling, overall + 20);
    assert_eq!(report.projection.floor, 0);
    assert_eq!(report.projection.risk_exposure, overall);
}

#[test]
fn test_projection_counts_each_high_horseman() {
    let mut profile = conflict(ConflictApproach::Balanced, RepairSpeed::Quick, None);
    profile.gottman = Some(gottman(18.0, 16.0, 0.0, 0.0));
    let a = Subject::new(Gender::Male, "ACEG", "ACEG").conflict(profile.clone()).build();
    profile.gottman = Some(gottman(0.0, 0.0, 0.0, 15.0));
    let b = Subject::new(Gender::Female, "ACEG", "ACEG").conflict(profile).build();
    let projection = synthesize(&a, &b, &config()).projection;
    assert_eq!(
        projection.floor_factors,
        vec!["partner_a_criticism", "partner_a_contempt", "partner_b_stonewalling"]
    );
}

// ========== Report ==========

#[test]
fn test_synthesis_is_byte_identical() {
    let (a, b) = matched_pair(Driver::Disrespect);
    let first = serde_json::to_string(&synthesize(&a, &b, &config())).unwrap();
    let second = serde_json::to_string(&synthesize(&a.clone(), &b.clone(), &config())).unwrap();
    assert_eq!(first, second);
    assert!(!first.contains(&a.id.to_string()));
    assert!(!first.contains("created_at"));
}

#[test]
fn test_build_couples_report_from_store() {
    let store = MemoryResultsStore::new();
    let (a, b) = matched_pair(Driver::Disrespect);
    let (id_a, id_b) = (a.id, b.id);
    store.put(a).unwrap();

    let missing = build_couples_report(&store, &id_a, &id_b, &config(), None);
    assert!(matches!(missing, Err(EngineError::ProfileNotFound { ref id }) if *id == id_b.to_string()));

    store.put(b).unwrap();
    let report = build_couples_report(&store, &id_a, &id_b, &config(), None).unwrap();
    assert!(report.narrative.is_none());
    assert_eq!(report.overview.overall_score, 91);

    let narrated = build_couples_report(&store, &id_a, &id_b, &config(), Some(&MockNarrator)).unwrap();
    assert!(narrated.narrative.is_some());
    assert_eq!(narrated.overview, report.overview);
}

#[test]
fn test_unknown_id_is_not_found() {
    let store = MemoryResultsStore::new();
    let err = build_couples_report(&store, &Uuid::new_v4(), &Uuid::new_v4(), &config(), None).unwrap_err();
    assert!(matches!(err, EngineError::ProfileNotFound { .. }));
}

#[tokio::test]
async fn test_concurrent_synthesis_is_deterministic() {
    let (a, b) = matched_pair(Driver::Abandonment);
    let pair = Arc::new((a, b));
    let expected = serde_json::to_string(&synthesize(&pair.0, &pair.1, &config())).unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let pair = Arc::clone(&pair);
        handles.push(tokio::spawn(async move {
            serde_json::to_string(&synthesize(&pair.0, &pair.1, &CouplesConfig::default())).unwrap()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), expected);
    }
}
