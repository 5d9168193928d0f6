//! A compact built-in question bank plus answer builders for it.
//!
//! Four items per persona dimension and a handful per Module 3/4 subscale,
//! identical ids for both genders. Used for trials, demos and benchmarks.

use crate::bank::QuestionBank;
use crate::conflict::{approach_spec, repair_mode_spec, repair_speed_spec, CAPACITY_POLE};
use crate::connection::{ATTEND_OTHER_POLE, ATTEND_SELF_POLE, OFFER_POLE, WANT_POLE};
use pc_core::types::{
    Answer, CapacityLevel, ConflictApproach, Direction, Driver, Gender, Horseman, Module,
    PersonaCode, PersonaSlot, Question, RepairMode, RepairSpeed, ResponseSet,
};

fn persona_prefix(module: Module) -> &'static str {
    match module {
        Module::Preferences => "m1",
        _ => "m2",
    }
}

fn persona_id(module: Module, slot: PersonaSlot, n: u8) -> String {
    format!("{}_{}_{n}", persona_prefix(module), slot.name())
}

fn persona_items(module: Module, described: Gender) -> Vec<Question> {
    let lead = match module {
        Module::Preferences => "My ideal partner shows",
        _ => "People who know me would point to my",
    };
    PersonaSlot::ALL
        .iter()
        .flat_map(|&slot| {
            let (a, b) = slot.pole_keys(described);
            [
                Question::direct(persona_id(module, slot, 1), format!("{lead} {a}."), a),
                Question::behavioral(persona_id(module, slot, 2), format!("{lead} {b}, often."), b),
                Question::direct(persona_id(module, slot, 3), format!("{lead} little {b}."), b)
                    .reversed(),
                Question::forced_choice(
                    persona_id(module, slot, 4),
                    format!("Which fits better: {a} or {b}?"),
                    (a, a),
                    (b, b),
                ),
            ]
        })
        .collect()
}

fn connection_items() -> Vec<Question> {
    vec![
        Question::direct("m3_want_1", "I need a lot of closeness.", WANT_POLE),
        Question::behavioral("m3_want_2", "I reach for my partner when I'm low.", WANT_POLE),
        Question::direct("m3_offer_1", "I give attention freely.", OFFER_POLE),
        Question::behavioral("m3_offer_2", "I check in on my partner's day.", OFFER_POLE),
        Question::direct("m3_attend_1", "I notice what my partner needs.", ATTEND_OTHER_POLE),
        Question::behavioral("m3_attend_2", "I remember small details they share.", ATTEND_OTHER_POLE),
        Question::direct("m3_attend_3", "My own needs come first.", ATTEND_SELF_POLE),
        Question::behavioral("m3_attend_4", "I steer talk back to myself.", ATTEND_SELF_POLE),
    ]
}

fn conflict_items() -> Vec<Question> {
    let approach = approach_spec();
    let speed = repair_speed_spec();
    let mode = repair_mode_spec();
    let mut items = vec![
        Question::forced_choice(
            "m4_approach_1",
            "When we argue I usually…",
            ("press to talk it out now", approach.pole_a.as_str()),
            ("need space first", approach.pole_b.as_str()),
        ),
        Question::direct("m4_approach_2", "I chase resolution.", approach.pole_a.as_str()),
        Question::forced_choice(
            "m4_speed_1",
            "After a fight I'm ready to reconnect…",
            ("within the hour", speed.pole_a.as_str()),
            ("after a day or so", speed.pole_b.as_str()),
        ),
        Question::forced_choice(
            "m4_mode_1",
            "Making up means…",
            ("talking it through", mode.pole_a.as_str()),
            ("doing something kind", mode.pole_b.as_str()),
        ),
        Question::direct("m4_capacity_1", "I stay steady under strain.", CAPACITY_POLE),
        Question::behavioral("m4_capacity_2", "I can hear hard things calmly.", CAPACITY_POLE),
    ];
    for driver in Driver::ALL {
        items.push(Question::direct(
            format!("m4_driver_{}", driver.pole()),
            format!("Conflict hits hardest when I sense {}.", driver.pole()),
            driver.pole(),
        ));
    }
    for horseman in Horseman::ALL {
        items.push(Question::behavioral(
            format!("m4_horseman_{}", horseman.pole()),
            format!("In arguments I slip into {}.", horseman.pole()),
            horseman.pole(),
        ));
    }
    items
}

pub fn demo_bank() -> QuestionBank {
    let mut bank = QuestionBank::new();
    for gender in [Gender::Male, Gender::Female] {
        bank.extend(Module::Preferences, gender, persona_items(Module::Preferences, gender.opposite()));
        bank.extend(Module::SelfPresentation, gender, persona_items(Module::SelfPresentation, gender));
        bank.extend(Module::Connection, gender, connection_items());
        bank.extend(Module::Conflict, gender, conflict_items());
    }
    bank
}

/// Answers that push every persona dimension of `module` fully toward `code`.
pub fn persona_answers(module: Module, code: &PersonaCode) -> ResponseSet {
    let mut out = ResponseSet::new();
    for slot in PersonaSlot::ALL {
        let (likert_a, likert_b, choice) = match code.direction(slot) {
            Direction::A => (5, 1, "A"),
            Direction::B => (1, 5, "B"),
        };
        out.insert(persona_id(module, slot, 1), Answer::Scale(likert_a));
        out.insert(persona_id(module, slot, 2), Answer::Scale(likert_b));
        out.insert(persona_id(module, slot, 3), Answer::Scale(likert_a));
        out.insert(persona_id(module, slot, 4), Answer::Choice(choice.into()));
    }
    out
}

/// Module 3 answers, each a 1–5 rating. Subscales land at `(rating − 1)·25`.
pub fn connection_answers(want: i64, offer: i64, attention: i64) -> ResponseSet {
    let mut out = ResponseSet::new();
    for (id, value) in [
        ("m3_want_1", want),
        ("m3_want_2", want),
        ("m3_offer_1", offer),
        ("m3_offer_2", offer),
        ("m3_attend_1", attention),
        ("m3_attend_2", attention),
        ("m3_attend_3", 6 - attention),
        ("m3_attend_4", 6 - attention),
    ] {
        out.insert(id.to_string(), Answer::Scale(value));
    }
    out
}

/// Target shape for Module 4 answers.
#[derive(Debug, Clone)]
pub struct ConflictAnswers {
    pub approach: ConflictApproach,
    pub repair_speed: RepairSpeed,
    pub repair_mode: RepairMode,
    pub capacity: CapacityLevel,
    pub driver: Driver,
    /// 1–5 rating applied to every horseman item; frequencies land at `(rating − 1)·5`.
    pub horsemen: i64,
}

impl Default for ConflictAnswers {
    fn default() -> Self {
        Self {
            approach: ConflictApproach::Balanced,
            repair_speed: RepairSpeed::Quick,
            repair_mode: RepairMode::Verbal,
            capacity: CapacityLevel::Medium,
            driver: Driver::Abandonment,
            horsemen: 1,
        }
    }
}

impl ConflictAnswers {
    pub fn responses(&self) -> ResponseSet {
        let mut out = ResponseSet::new();
        let mut put = |id: &str, answer: Answer| {
            out.insert(id.to_string(), answer);
        };
        match self.approach {
            ConflictApproach::Pursue => {
                put("m4_approach_1", Answer::Choice("A".into()));
                put("m4_approach_2", Answer::Scale(5));
            }
            ConflictApproach::Withdraw => {
                put("m4_approach_1", Answer::Choice("B".into()));
                put("m4_approach_2", Answer::Scale(1));
            }
            // a lone midpoint rating leaves both poles at 50
            ConflictApproach::Balanced => put("m4_approach_2", Answer::Scale(3)),
        }
        let speed = match self.repair_speed {
            RepairSpeed::Quick => "A",
            RepairSpeed::Gradual => "B",
        };
        put("m4_speed_1", Answer::Choice(speed.into()));
        let mode = match self.repair_mode {
            RepairMode::Verbal => "A",
            RepairMode::Practical => "B",
        };
        put("m4_mode_1", Answer::Choice(mode.into()));
        let capacity = match self.capacity {
            CapacityLevel::High => 5,
            CapacityLevel::Medium => 3,
            CapacityLevel::Low => 1,
        };
        put("m4_capacity_1", Answer::Scale(capacity));
        put("m4_capacity_2", Answer::Scale(capacity));
        for driver in Driver::ALL {
            let rating = if driver == self.driver { 5 } else { 2 };
            put(&format!("m4_driver_{}", driver.pole()), Answer::Scale(rating));
        }
        for horseman in Horseman::ALL {
            put(&format!("m4_horseman_{}", horseman.pole()), Answer::Scale(self.horsemen));
        }
        out
    }
}
