use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pc_core::types::{Answer, Gender, Module, ResponseSet};
use pc_core::EngineConfig;
use pc_personas::PersonaCatalog;
use pc_scoring::demo::demo_bank;
use pc_scoring::{ScoringPipeline, Submission};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

fn random_submission(rng: &mut StdRng, pipeline: &ScoringPipeline) -> Submission {
    let mut responses = ResponseSet::new();
    for module in Module::ALL {
        for q in pipeline.bank().questions(module, Gender::Male) {
            let answer = if q.is_likert() {
                Answer::Scale(rng.gen_range(1..=5))
            } else {
                Answer::Choice(if rng.gen_bool(0.5) { "A" } else { "B" }.into())
            };
            responses.insert(q.id.clone(), answer);
        }
    }
    Submission::new(Gender::Male, responses)
}

fn bench_scoring(c: &mut Criterion) {
    let pipeline = ScoringPipeline::new(
        Arc::new(demo_bank()),
        Arc::new(PersonaCatalog::builtin()),
        Arc::new(EngineConfig::default()),
    )
    .expect("default pipeline");
    let mut rng = StdRng::seed_from_u64(7);
    let submissions: Vec<Submission> = (0..64).map(|_| random_submission(&mut rng, &pipeline)).collect();

    c.bench_function("score_modules_64", |b| {
        b.iter(|| {
            for s in &submissions {
                black_box(pipeline.score_modules(s.gender, &s.responses));
            }
        })
    });

    c.bench_function("score_full_64", |b| {
        b.iter(|| {
            for s in &submissions {
                black_box(pipeline.score(s));
            }
        })
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
