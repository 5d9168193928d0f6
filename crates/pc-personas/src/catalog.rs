//! Read-only persona lookup tables, built once and passed by reference.

use pc_core::types::{
    CapacityLevel, ConflictApproach, ConflictProfile, ConnectionScore, Driver, EmotionalCapacity,
    Gender, PersonaCode, PersonaMetadata, RepairMode, RepairSpeed, Tier,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Tier buckets for one source code. Iterates best tier first, codes in
/// declaration order within a tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierRow {
    pub source: PersonaCode,
    pub buckets: BTreeMap<Tier, Vec<PersonaCode>>,
}

impl TierRow {
    pub fn tier_of(&self, target: &PersonaCode) -> Option<Tier> {
        self.buckets
            .iter()
            .find(|(_, codes)| codes.contains(target))
            .map(|(tier, _)| *tier)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tier, &PersonaCode)> {
        self.buckets.iter().flat_map(|(tier, codes)| codes.iter().map(move |c| (*tier, c)))
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every one of the 16 codes appears in exactly one tier.
    pub fn is_complete_partition(&self) -> bool {
        let mut seen = HashSet::new();
        for (_, code) in self.iter() {
            if !seen.insert(code.clone()) {
                return false;
            }
        }
        seen.len() == 16
    }
}

/// Typical behaviour of a persona, used for the ranker's secondary signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypicalProfile {
    pub code: PersonaCode,
    pub want: f64,
    pub offer: f64,
    pub approach: ConflictApproach,
    pub repair_speed: RepairSpeed,
    pub repair_mode: RepairMode,
    pub capacity: CapacityLevel,
    pub driver: Driver,
}

impl TypicalProfile {
    pub fn connection(&self) -> ConnectionScore {
        ConnectionScore::new(self.want, self.offer)
    }

    /// The profile in the canonical Module 4 shape. Horsemen are unknown.
    pub fn conflict(&self) -> ConflictProfile {
        let score = match self.capacity {
            CapacityLevel::High => 80.0,
            CapacityLevel::Medium => 50.0,
            CapacityLevel::Low => 20.0,
        };
        ConflictProfile {
            approach: self.approach,
            approach_strength: 50.0,
            repair_speed: Some(self.repair_speed),
            repair_mode: Some(self.repair_mode),
            capacity: Some(EmotionalCapacity { score, level: self.capacity }),
            primary_driver: Some(self.driver),
            gottman: None,
        }
    }
}

type Key = (Gender, PersonaCode);

/// Persona metadata, tier rows and typical profiles keyed by (gender, code).
/// Absent entries are a normal, handleable case.
#[derive(Debug, Clone, Default)]
pub struct PersonaCatalog {
    metadata: HashMap<Key, PersonaMetadata>,
    tiers: HashMap<Key, TierRow>,
    typical: HashMap<Key, TypicalProfile>,
}

impl PersonaCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in 16 × 2 tables.
    pub fn builtin() -> Self {
        crate::data::builtin_catalog()
    }

    pub fn metadata(&self, gender: Gender, code: &PersonaCode) -> Option<&PersonaMetadata> {
        self.metadata.get(&(gender, code.clone()))
    }

    pub fn tier_row(&self, gender: Gender, code: &PersonaCode) -> Option<&TierRow> {
        self.tiers.get(&(gender, code.clone()))
    }

    pub fn typical(&self, gender: Gender, code: &PersonaCode) -> Option<&TypicalProfile> {
        self.typical.get(&(gender, code.clone()))
    }

    pub fn insert_metadata(&mut self, gender: Gender, metadata: PersonaMetadata) {
        self.metadata.insert((gender, metadata.code.clone()), metadata);
    }

    pub fn insert_tier_row(&mut self, gender: Gender, row: TierRow) {
        self.tiers.insert((gender, row.source.clone()), row);
    }

    pub fn insert_typical(&mut self, gender: Gender, profile: TypicalProfile) {
        self.typical.insert((gender, profile.code.clone()), profile);
    }

    pub fn remove_metadata(&mut self, gender: Gender, code: &PersonaCode) -> Option<PersonaMetadata> {
        self.metadata.remove(&(gender, code.clone()))
    }

    pub fn remove_tier_row(&mut self, gender: Gender, code: &PersonaCode) -> Option<TierRow> {
        self.tiers.remove(&(gender, code.clone()))
    }

    pub fn remove_typical(&mut self, gender: Gender, code: &PersonaCode) -> Option<TypicalProfile> {
        self.typical.remove(&(gender, code.clone()))
    }

    pub fn metadata_count(&self) -> usize {
        self.metadata.len()
    }

    pub fn tier_row_count(&self) -> usize {
        self.tiers.len()
    }
}
