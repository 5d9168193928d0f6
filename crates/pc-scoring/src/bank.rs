//! Question bank provider: ordered questions per (module, gender).

use pc_core::error::{EngineError, Result};
use pc_core::types::{Gender, Module, Question, QuestionType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// One (module, gender) section of a bank file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankSection {
    pub module: Module,
    pub gender: Gender,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    sections: BTreeMap<(Module, Gender), Vec<Question>>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON array of [`BankSection`]s.
    pub fn from_json(raw: &str) -> Result<Self> {
        let sections: Vec<BankSection> = serde_json::from_str(raw)?;
        let mut bank = Self::new();
        for section in sections {
            bank.extend(section.module, section.gender, section.questions);
        }
        bank.validate()?;
        Ok(bank)
    }

    pub fn extend(&mut self, module: Module, gender: Gender, questions: Vec<Question>) {
        self.sections.entry((module, gender)).or_default().extend(questions);
    }

    pub fn with(mut self, module: Module, gender: Gender, questions: Vec<Question>) -> Self {
        self.extend(module, gender, questions);
        self
    }

    pub fn questions(&self, module: Module, gender: Gender) -> &[Question] {
        self.sections.get(&(module, gender)).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids unique within a gender, Likert items carry a pole, forced-choice
    /// items carry both options.
    pub fn validate(&self) -> Result<()> {
        for gender in [Gender::Male, Gender::Female] {
            let mut seen = HashSet::new();
            for module in Module::ALL {
                for q in self.questions(module, gender) {
                    if !seen.insert(q.id.as_str()) {
                        return Err(EngineError::Config(format!("duplicate question id {}", q.id)));
                    }
                    let well_formed = match q.question_type {
                        QuestionType::ForcedChoice => q.option_a.is_some() && q.option_b.is_some(),
                        QuestionType::Direct | QuestionType::Behavioral => !q.pole.is_empty(),
                    };
                    if !well_formed {
                        return Err(EngineError::Config(format!("malformed question {}", q.id)));
                    }
                }
            }
        }
        Ok(())
    }
}
