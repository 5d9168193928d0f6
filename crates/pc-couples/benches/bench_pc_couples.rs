use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pc_core::config::CouplesConfig;
use pc_core::profile::{ModuleScores, UserResults};
use pc_core::types::{
    CapacityLevel, ConflictApproach, ConflictProfile, ConnectionScore, DimensionScore, DimensionSpec,
    Direction, Driver, EmotionalCapacity, Gender, GottmanScores, PersonaCode, PersonaDimensions,
    PersonaSlot, RepairMode, RepairSpeed,
};
use pc_couples::synthesize;
use rand::seq::SliceRandom;
use rand::Rng;

fn random_dims(rng: &mut impl Rng, code: &PersonaCode, gender: Gender) -> PersonaDimensions {
    PersonaDimensions::from_slots(PersonaSlot::ALL.map(|slot| {
        let spec = DimensionSpec::persona(slot, gender);
        let direction = code.direction(slot);
        DimensionScore {
            dimension: spec.name.clone(),
            pole_a_score: 50.0,
            pole_b_score: 50.0,
            assigned_pole: match direction {
                Direction::A => spec.pole_a,
                Direction::B => spec.pole_b,
            },
            strength: rng.gen_range(0.0..100.0),
            direction,
            sample_size: 4,
        }
    }))
}

fn random_results(rng: &mut impl Rng, gender: Gender) -> UserResults {
    let codes = PersonaCode::all();
    let m2_code = codes.choose(rng).cloned().unwrap_or_default();
    let m1_code = codes.choose(rng).cloned().unwrap_or_default();
    let approach = *[ConflictApproach::Pursue, ConflictApproach::Withdraw, ConflictApproach::Balanced]
        .choose(rng)
        .unwrap_or(&ConflictApproach::Balanced);
    let m4 = ConflictProfile {
        approach,
        approach_strength: rng.gen_range(0.0..100.0),
        repair_speed: Some(if rng.gen_bool(0.5) { RepairSpeed::Quick } else { RepairSpeed::Gradual }),
        repair_mode: Some(if rng.gen_bool(0.5) { RepairMode::Verbal } else { RepairMode::Practical }),
        capacity: Some(EmotionalCapacity {
            score: rng.gen_range(0.0..100.0),
            level: CapacityLevel::Medium,
        }),
        primary_driver: Driver::ALL.choose(rng).copied(),
        gottman: Some(GottmanScores {
            criticism: rng.gen_range(0.0..20.0),
            contempt: rng.gen_range(0.0..20.0),
            defensiveness: rng.gen_range(0.0..20.0),
            stonewalling: rng.gen_range(0.0..20.0),
        }),
    };
    let scores = ModuleScores {
        gender,
        m1: random_dims(rng, &m1_code, gender.opposite()),
        m2: random_dims(rng, &m2_code, gender),
        m3: Some(ConnectionScore::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0))),
        m4: Some(m4),
    };
    UserResults::new(m2_code, scores)
}

fn bench_synthesize(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let config = CouplesConfig::default();
    let pairs: Vec<(UserResults, UserResults)> = (0..64)
        .map(|_| (random_results(&mut rng, Gender::Male), random_results(&mut rng, Gender::Female)))
        .collect();

    c.bench_function("synthesize_64_couples", |b| {
        b.iter(|| {
            for (a, partner) in &pairs {
                black_box(synthesize(a, partner, &config));
            }
        })
    });
}

criterion_group!(benches, bench_synthesize);
criterion_main!(benches);
