use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pc_core::{EngineConfig, PersonaCode, ResponseSet};
use rand::Rng;

fn bench_codes(c: &mut Criterion) {
    let raw: Vec<String> = PersonaCode::all().iter().map(|c| c.to_string()).collect();
    c.bench_function("persona_code_parse_1000", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(PersonaCode::parse(&raw[i % raw.len()]).ok());
            }
        })
    });
}

fn bench_config(c: &mut Criterion) {
    let json = serde_json::to_string(&EngineConfig::default()).unwrap();
    c.bench_function("config_from_json", |b| {
        b.iter(|| black_box(EngineConfig::from_json(black_box(&json)).ok()))
    });
}

fn bench_response_set(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let entries: Vec<String> = (0..400).map(|i| format!("\"q{i}\": {}", rng.gen_range(1..=5))).collect();
    let json = format!("{{{}}}", entries.join(","));
    c.bench_function("response_set_parse_400", |b| {
        b.iter(|| black_box(serde_json::from_str::<ResponseSet>(black_box(&json)).ok()))
    });
}

criterion_group!(benches, bench_codes, bench_config, bench_response_set);
criterion_main!(benches);
