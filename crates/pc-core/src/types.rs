use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Subject gender. Persona codes are only meaningful alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn opposite(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Assessment module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    /// M1: what the subject wants in a partner.
    Preferences,
    /// M2: how the subject presents; drives the persona code.
    SelfPresentation,
    /// M3: want/offer connection style and attentiveness items.
    Connection,
    /// M4: conflict approach, repair, capacity, drivers, horsemen.
    Conflict,
}

impl Module {
    pub const ALL: [Module; 4] =
        [Module::Preferences, Module::SelfPresentation, Module::Connection, Module::Conflict];

    pub fn number(self) -> u8 {
        match self {
            Module::Preferences => 1,
            Module::SelfPresentation => 2,
            Module::Connection => 3,
            Module::Conflict => 4,
        }
    }
}

// ========== Questions & responses ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Direct,
    Behavioral,
    ForcedChoice,
}

/// One side of a forced-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub text: String,
    pub pole: String,
}

/// Static question metadata supplied by the question bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Pole a Likert item scores toward. Empty for forced choice.
    #[serde(default)]
    pub pole: String,
    #[serde(default)]
    pub reverse_coded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_a: Option<ChoiceOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_b: Option<ChoiceOption>,
}

impl Question {
    pub fn direct(id: impl Into<String>, text: impl Into<String>, pole: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            question_type: QuestionType::Direct,
            pole: pole.into(),
            reverse_coded: false,
            option_a: None,
            option_b: None,
        }
    }

    pub fn behavioral(id: impl Into<String>, text: impl Into<String>, pole: impl Into<String>) -> Self {
        Self { question_type: QuestionType::Behavioral, ..Self::direct(id, text, pole) }
    }

    pub fn forced_choice(
        id: impl Into<String>,
        text: impl Into<String>,
        option_a: (&str, &str),
        option_b: (&str, &str),
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            question_type: QuestionType::ForcedChoice,
            pole: String::new(),
            reverse_coded: false,
            option_a: Some(ChoiceOption { text: option_a.0.into(), pole: option_a.1.into() }),
            option_b: Some(ChoiceOption { text: option_b.0.into(), pole: option_b.1.into() }),
        }
    }

    pub fn reversed(mut self) -> Self {
        self.reverse_coded = true;
        self
    }

    pub fn is_likert(&self) -> bool {
        matches!(self.question_type, QuestionType::Direct | QuestionType::Behavioral)
    }

    /// True if answering this question can move the given pole.
    pub fn touches_pole(&self, pole: &str) -> bool {
        if self.is_likert() {
            return self.pole == pole;
        }
        self.option_a.iter().chain(self.option_b.iter()).any(|o| o.pole == pole)
    }
}

/// A raw answer: 1–5 for Likert items, "A"/"B" for forced choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Scale(i64),
    Choice(String),
}

/// Question id → answer. Ordered so iteration is deterministic.
pub type ResponseSet = BTreeMap<String, Answer>;

// ========== Dimensions ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    A,
    B,
}

/// The two pole keys forming one bipolar dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionSpec {
    pub name: String,
    pub pole_a: String,
    pub pole_b: String,
}

impl DimensionSpec {
    pub fn new(name: impl Into<String>, pole_a: impl Into<String>, pole_b: impl Into<String>) -> Self {
        Self { name: name.into(), pole_a: pole_a.into(), pole_b: pole_b.into() }
    }

    /// Persona dimension whose poles describe someone of `described` gender.
    pub fn persona(slot: PersonaSlot, described: Gender) -> Self {
        let (a, b) = slot.pole_keys(described);
        Self::new(slot.name(), a, b)
    }
}

/// Bipolar score for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: String,
    pub pole_a_score: f64,
    pub pole_b_score: f64,
    pub assigned_pole: String,
    /// |pole_a_score - pole_b_score|, within 0..=100.
    pub strength: f64,
    pub direction: Direction,
    /// Items that actually contributed.
    pub sample_size: usize,
}

impl DimensionScore {
    /// The "no preference" outcome: both poles at the midpoint, pole A assigned.
    pub fn neutral(spec: &DimensionSpec) -> Self {
        Self {
            dimension: spec.name.clone(),
            pole_a_score: 50.0,
            pole_b_score: 50.0,
            assigned_pole: spec.pole_a.clone(),
            strength: 0.0,
            direction: Direction::A,
            sample_size: 0,
        }
    }
}

/// The four persona dimensions, in code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaSlot {
    Physical,
    Social,
    Lifestyle,
    Values,
}

impl PersonaSlot {
    pub const ALL: [PersonaSlot; 4] =
        [PersonaSlot::Physical, PersonaSlot::Social, PersonaSlot::Lifestyle, PersonaSlot::Values];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            PersonaSlot::Physical => "physical",
            PersonaSlot::Social => "social",
            PersonaSlot::Lifestyle => "lifestyle",
            PersonaSlot::Values => "values",
        }
    }

    /// Code letters for pole A and pole B of this slot.
    pub fn letters(self) -> (char, char) {
        match self {
            PersonaSlot::Physical => ('A', 'B'),
            PersonaSlot::Social => ('C', 'D'),
            PersonaSlot::Lifestyle => ('E', 'F'),
            PersonaSlot::Values => ('G', 'H'),
        }
    }

    pub fn letter(self, direction: Direction) -> char {
        let (a, b) = self.letters();
        match direction {
            Direction::A => a,
            Direction::B => b,
        }
    }

    /// Pole keys describing someone of the given gender.
    pub fn pole_keys(self, gender: Gender) -> (&'static str, &'static str) {
        match (gender, self) {
            (Gender::Male, PersonaSlot::Physical) => ("fitness", "maturity"),
            (Gender::Male, PersonaSlot::Social) => ("charisma", "reserve"),
            (Gender::Male, PersonaSlot::Lifestyle) => ("adventure", "stability"),
            (Gender::Male, PersonaSlot::Values) => ("tradition", "partnership"),
            (Gender::Female, PersonaSlot::Physical) => ("glamour", "natural"),
            (Gender::Female, PersonaSlot::Social) => ("vivacity", "serenity"),
            (Gender::Female, PersonaSlot::Lifestyle) => ("ambition", "homemaking"),
            (Gender::Female, PersonaSlot::Values) => ("tradition", "independence"),
        }
    }
}

/// Scores for the four persona dimensions of one module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaDimensions {
    pub physical: DimensionScore,
    pub social: DimensionScore,
    pub lifestyle: DimensionScore,
    pub values: DimensionScore,
}

impl PersonaDimensions {
    pub fn from_slots(scores: [DimensionScore; 4]) -> Self {
        let [physical, social, lifestyle, values] = scores;
        Self { physical, social, lifestyle, values }
    }

    pub fn get(&self, slot: PersonaSlot) -> &DimensionScore {
        match slot {
            PersonaSlot::Physical => &self.physical,
            PersonaSlot::Social => &self.social,
            PersonaSlot::Lifestyle => &self.lifestyle,
            PersonaSlot::Values => &self.values,
        }
    }

    pub fn directions(&self) -> [Direction; 4] {
        PersonaSlot::ALL.map(|slot| self.get(slot).direction)
    }
}

// ========== Persona codes ==========

/// Validated 4-letter persona code, one letter per [`PersonaSlot`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonaCode(String);

impl PersonaCode {
    pub const FALLBACK: &'static str = "BDFH";

    pub fn parse(raw: &str) -> Result<Self> {
        let upper = raw.trim().to_ascii_uppercase();
        let chars: Vec<char> = upper.chars().collect();
        if chars.len() != 4 {
            return Err(EngineError::InvalidCode(raw.to_string()));
        }
        for (slot, c) in PersonaSlot::ALL.iter().zip(&chars) {
            let (a, b) = slot.letters();
            if *c != a && *c != b {
                return Err(EngineError::InvalidCode(raw.to_string()));
            }
        }
        Ok(Self(upper))
    }

    pub fn from_directions(directions: [Direction; 4]) -> Self {
        Self(PersonaSlot::ALL.iter().zip(directions).map(|(slot, d)| slot.letter(d)).collect())
    }

    pub fn letter(&self, slot: PersonaSlot) -> char {
        self.0.as_bytes()[slot.index()] as char
    }

    pub fn direction(&self, slot: PersonaSlot) -> Direction {
        if self.letter(slot) == slot.letters().0 {
            Direction::A
        } else {
            Direction::B
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// All 16 codes in canonical order (ACEG … BDFH).
    pub fn all() -> Vec<PersonaCode> {
        let mut codes = Vec::with_capacity(16);
        for bits in 0..16u8 {
            let dirs = [3, 2, 1, 0].map(|shift| {
                if (bits >> shift) & 1 == 0 { Direction::A } else { Direction::B }
            });
            codes.push(Self::from_directions(dirs));
        }
        codes
    }
}

impl Default for PersonaCode {
    fn default() -> Self {
        Self(Self::FALLBACK.to_string())
    }
}

impl TryFrom<String> for PersonaCode {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<PersonaCode> for String {
    fn from(code: PersonaCode) -> Self {
        code.0
    }
}

impl fmt::Display for PersonaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static descriptive record for one persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaMetadata {
    pub code: PersonaCode,
    pub name: String,
    pub traits: String,
    pub dating_behavior: Vec<String>,
    pub in_relationships: Vec<String>,
    pub most_attractive: Vec<String>,
    pub least_attractive: Vec<String>,
    pub struggles: Vec<String>,
}

/// Compatibility tier, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Ideal,
    Kismet,
    Effort,
    LongShot,
    AtRisk,
    Incompatible,
}

impl Tier {
    pub const ALL: [Tier; 6] =
        [Tier::Ideal, Tier::Kismet, Tier::Effort, Tier::LongShot, Tier::AtRisk, Tier::Incompatible];
}

// ========== Module 3: connection ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStyle {
    /// High want, high offer.
    Intimate,
    /// Wants more than it offers.
    Seeking,
    /// Offers more than it wants.
    Giving,
    Independent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionScore {
    pub want_score: f64,
    pub offer_score: f64,
    pub style: ConnectionStyle,
}

impl ConnectionScore {
    pub fn new(want_score: f64, offer_score: f64) -> Self {
        let style = match (want_score >= 50.0, offer_score >= 50.0) {
            (true, true) => ConnectionStyle::Intimate,
            (true, false) => ConnectionStyle::Seeking,
            (false, true) => ConnectionStyle::Giving,
            (false, false) => ConnectionStyle::Independent,
        };
        Self { want_score, offer_score, style }
    }

    /// want − offer; positive means the subject asks for more than they give.
    pub fn gap(&self) -> f64 {
        self.want_score - self.offer_score
    }
}

// ========== Module 4: conflict ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictApproach {
    Pursue,
    Withdraw,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepairSpeed {
    Quick,
    Gradual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepairMode {
    Verbal,
    Practical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalCapacity {
    pub score: f64,
    pub level: CapacityLevel,
}

/// Primary emotional driver behind a subject's conflict behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    Abandonment,
    Inadequacy,
    Control,
    Disrespect,
}

impl Driver {
    pub const ALL: [Driver; 4] =
        [Driver::Abandonment, Driver::Inadequacy, Driver::Control, Driver::Disrespect];

    pub fn pole(self) -> &'static str {
        match self {
            Driver::Abandonment => "abandonment",
            Driver::Inadequacy => "inadequacy",
            Driver::Control => "control",
            Driver::Disrespect => "disrespect",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horseman {
    Criticism,
    Contempt,
    Defensiveness,
    Stonewalling,
}

impl Horseman {
    pub const ALL: [Horseman; 4] =
        [Horseman::Criticism, Horseman::Contempt, Horseman::Defensiveness, Horseman::Stonewalling];

    pub fn pole(self) -> &'static str {
        match self {
            Horseman::Criticism => "criticism",
            Horseman::Contempt => "contempt",
            Horseman::Defensiveness => "defensiveness",
            Horseman::Stonewalling => "stonewalling",
        }
    }
}

/// Raw Gottman horseman scores, each 0–20.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GottmanScores {
    pub criticism: f64,
    pub contempt: f64,
    pub defensiveness: f64,
    pub stonewalling: f64,
}

impl GottmanScores {
    pub fn get(&self, horseman: Horseman) -> f64 {
        match horseman {
            Horseman::Criticism => self.criticism,
            Horseman::Contempt => self.contempt,
            Horseman::Defensiveness => self.defensiveness,
            Horseman::Stonewalling => self.stonewalling,
        }
    }

    pub fn set(&mut self, horseman: Horseman, value: f64) {
        let slot = match horseman {
            Horseman::Criticism => &mut self.criticism,
            Horseman::Contempt => &mut self.contempt,
            Horseman::Defensiveness => &mut self.defensiveness,
            Horseman::Stonewalling => &mut self.stonewalling,
        };
        *slot = value;
    }
}

/// Canonical Module 4 result. Repair and capacity are `None` when none of
/// their items was answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictProfile {
    pub approach: ConflictApproach,
    pub approach_strength: f64,
    pub repair_speed: Option<RepairSpeed>,
    pub repair_mode: Option<RepairMode>,
    pub capacity: Option<EmotionalCapacity>,
    pub primary_driver: Option<Driver>,
    pub gottman: Option<GottmanScores>,
}

// ========== Derived metrics ==========

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttentivenessLevel {
    StronglyOtherFocused,
    Balanced,
    ModeratelySelfFocused,
    SelfAbsorbed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attentiveness {
    pub score: f64,
    pub level: AttentivenessLevel,
    /// False when computed without Module 4 horseman data.
    pub complete: bool,
}

/// A derived insight produced by an optional layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub key: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
