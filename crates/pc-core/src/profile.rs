use crate::types::{
    Attentiveness, ConflictProfile, ConnectionScore, Demographics, Gender, Insight, PersonaCode,
    PersonaDimensions,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Pure scoring output for one subject: deterministic in its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleScores {
    pub gender: Gender,
    /// Preferences, expressed in the opposite gender's pole keys.
    pub m1: PersonaDimensions,
    /// Self-presentation, expressed in the subject's own pole keys.
    pub m2: PersonaDimensions,
    pub m3: Option<ConnectionScore>,
    pub m4: Option<ConflictProfile>,
}

/// Fully scored subject. A retake produces a new value with a new id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResults {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub persona_code: PersonaCode,
    /// True when the classified code had no metadata and the fallback was used.
    pub persona_fallback: bool,
    pub scores: ModuleScores,
    pub attentiveness: Option<Attentiveness>,
    /// Insight layer name → insights. Layers that failed are absent.
    pub insights: BTreeMap<String, Vec<Insight>>,
    pub demographics: Demographics,
}

impl UserResults {
    pub fn new(persona_code: PersonaCode, scores: ModuleScores) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            persona_code,
            persona_fallback: false,
            scores,
            attentiveness: None,
            insights: BTreeMap::new(),
            demographics: Demographics::default(),
        }
    }

    pub fn gender(&self) -> Gender {
        self.scores.gender
    }

    pub fn m1(&self) -> &PersonaDimensions {
        &self.scores.m1
    }

    pub fn m2(&self) -> &PersonaDimensions {
        &self.scores.m2
    }

    pub fn m3(&self) -> Option<&ConnectionScore> {
        self.scores.m3.as_ref()
    }

    pub fn m4(&self) -> Option<&ConflictProfile> {
        self.scores.m4.as_ref()
    }

    /// Name used in templated text, falling back to the given label.
    pub fn label<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.demographics.display_name.as_deref().unwrap_or(fallback)
    }
}
