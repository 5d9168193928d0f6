//! Persona tables and classification.
//!
//! Tables:
//! 1. Metadata: name, traits and behaviour lists per (gender, code)
//! 2. Tiers: each source code's opposite-gender codes bucketed ideal … incompatible
//! 3. Typical profiles: the want/offer and conflict profile a persona usually shows

pub mod catalog;
pub mod classifier;
mod data;

pub use catalog::{PersonaCatalog, TierRow, TypicalProfile};
pub use classifier::{classify, Classification};
