//! Scoring pipeline: responses → module scores → persona → derived metrics.

use crate::attentiveness::{score_attentiveness, AttentivenessInputs};
use crate::bank::QuestionBank;
use crate::conflict::score_conflict;
use crate::connection::{score_connection, self_perception_gap};
use crate::dimension::score_dimension;
use crate::insights::{default_layers, run_layers, InsightLayer};
use pc_core::config::EngineConfig;
use pc_core::error::Result;
use pc_core::profile::{ModuleScores, UserResults};
use pc_core::types::{
    Attentiveness, DimensionSpec, Demographics, Gender, Module, PersonaDimensions, PersonaSlot,
    ResponseSet,
};
use pc_personas::{classify, PersonaCatalog};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One subject's completed assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub gender: Gender,
    #[serde(default)]
    pub responses: ResponseSet,
    #[serde(default)]
    pub demographics: Demographics,
}

impl Submission {
    pub fn new(gender: Gender, responses: ResponseSet) -> Self {
        Self { gender, responses, demographics: Demographics::default() }
    }
}

/// Shares its read-only providers by `Arc`; cheap to clone across tasks.
#[derive(Clone)]
pub struct ScoringPipeline {
    bank: Arc<QuestionBank>,
    catalog: Arc<PersonaCatalog>,
    config: Arc<EngineConfig>,
    layers: Vec<Arc<dyn InsightLayer>>,
}

impl ScoringPipeline {
    /// Validates the config and bank up front so scoring itself cannot fail.
    pub fn new(
        bank: Arc<QuestionBank>,
        catalog: Arc<PersonaCatalog>,
        config: Arc<EngineConfig>,
    ) -> Result<Self> {
        config.validate()?;
        bank.validate()?;
        Ok(Self { bank, catalog, config, layers: default_layers() })
    }

    pub fn with_layers(mut self, layers: Vec<Arc<dyn InsightLayer>>) -> Self {
        self.layers = layers;
        self
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn catalog(&self) -> &PersonaCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn persona_dimensions(
        &self,
        module: Module,
        gender: Gender,
        described: Gender,
        responses: &ResponseSet,
    ) -> PersonaDimensions {
        let questions = self.bank.questions(module, gender);
        PersonaDimensions::from_slots(PersonaSlot::ALL.map(|slot| {
            score_dimension(&DimensionSpec::persona(slot, described), questions, responses)
        }))
    }

    /// Pure module scoring. M1 is read in the opposite gender's pole keys
    /// (it describes a partner), M2 in the subject's own.
    pub fn score_modules(&self, gender: Gender, responses: &ResponseSet) -> ModuleScores {
        ModuleScores {
            gender,
            m1: self.persona_dimensions(Module::Preferences, gender, gender.opposite(), responses),
            m2: self.persona_dimensions(Module::SelfPresentation, gender, gender, responses),
            m3: score_connection(self.bank.questions(Module::Connection, gender), responses),
            m4: score_conflict(
                self.bank.questions(Module::Conflict, gender),
                responses,
                &self.config.scoring,
            ),
        }
    }

    /// Partial pass after M3, complete pass once horsemen exist. The complete
    /// score wins; the partial one survives a failed complete pass.
    fn attentiveness(&self, scores: &ModuleScores, responses: &ResponseSet) -> Option<Attentiveness> {
        let questions = self.bank.questions(Module::Connection, scores.gender);
        let inputs = AttentivenessInputs {
            questions,
            responses,
            connection: scores.m3.as_ref(),
            gottman: None,
            self_perception_gap: self_perception_gap(questions, responses),
        };
        let partial = score_attentiveness(inputs, &self.config.attentiveness);

        let gottman = scores.m4.as_ref().and_then(|m4| m4.gottman.as_ref());
        if let Some(gottman) = gottman {
            let complete = score_attentiveness(
                AttentivenessInputs { gottman: Some(gottman), ..inputs },
                &self.config.attentiveness,
            );
            match complete {
                Ok(a) => return Some(a),
                Err(e) => tracing::warn!(error = %e, "Complete attentiveness failed, keeping partial"),
            }
        }

        partial
            .map_err(|e| tracing::warn!(error = %e, "Attentiveness unavailable"))
            .ok()
    }

    /// Score a submission into a freshly identified [`UserResults`].
    pub fn score(&self, submission: &Submission) -> UserResults {
        let gender = submission.gender;
        let responses = &submission.responses;

        let scores = self.score_modules(gender, responses);
        let classification = classify(&scores.m2, gender, &self.catalog, &self.config.scoring);
        let attentiveness = self.attentiveness(&scores, responses);
        let insights = run_layers(&self.layers, &scores, &self.config.insights);

        let mut results = UserResults::new(classification.code, scores);
        results.persona_fallback = classification.fallback;
        results.attentiveness = attentiveness;
        results.insights = insights;
        results.demographics = submission.demographics.clone();
        tracing::debug!(
            id = %results.id,
            code = %results.persona_code,
            fallback = results.persona_fallback,
            "Scored submission"
        );
        results
    }
}
