//! Alignment: parallels between what each partner wants and what the other
//! shows, plus the connection exchange between them.

use crate::overview::both_scored;
use pc_core::config::CouplesConfig;
use pc_core::profile::UserResults;
use pc_core::types::PersonaSlot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partner {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ParallelKind {
    /// Both partners want the same pole in a partner.
    SharedDesire,
    /// `wanting` wants the pole the other partner presents.
    WantOfferMatch { wanting: Partner },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parallel {
    pub dimension: PersonaSlot,
    #[serde(flatten)]
    pub kind: ParallelKind,
    /// Weaker of the two contributing strengths.
    pub strength: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeGaps {
    /// |A.want − B.offer|
    pub a_want_b_offer: f64,
    /// |B.want − A.offer|
    pub b_want_a_offer: f64,
    /// A.want − B.offer; positive when A asks for more than B gives.
    pub a_shortfall: f64,
    /// B.want − A.offer
    pub b_shortfall: f64,
    pub reciprocal: bool,
}

impl ExchangeGaps {
    pub fn max_gap(&self) -> f64 {
        self.a_want_b_offer.max(self.b_want_a_offer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alignment {
    pub parallels: Vec<Parallel>,
    /// `None` unless both partners completed Module 3.
    pub exchange: Option<ExchangeGaps>,
}

pub fn exchange_gaps(a: &UserResults, b: &UserResults, config: &CouplesConfig) -> Option<ExchangeGaps> {
    let (x, y) = (a.m3()?, b.m3()?);
    let a_shortfall = x.want_score - y.offer_score;
    let b_shortfall = y.want_score - x.offer_score;
    let (a_want_b_offer, b_want_a_offer) = (a_shortfall.abs(), b_shortfall.abs());
    Some(ExchangeGaps {
        a_want_b_offer,
        b_want_a_offer,
        a_shortfall,
        b_shortfall,
        reciprocal: a_want_b_offer < config.reciprocity_threshold
            && b_want_a_offer < config.reciprocity_threshold,
    })
}

pub fn alignment(a: &UserResults, b: &UserResults, config: &CouplesConfig) -> Alignment {
    let mut parallels = Vec::new();
    for slot in PersonaSlot::ALL {
        let (a_wants, b_wants) = (a.m1().get(slot), b.m1().get(slot));
        let (a_shows, b_shows) = (a.m2().get(slot), b.m2().get(slot));

        if both_scored(a_wants, b_wants) && a_wants.direction == b_wants.direction {
            parallels.push(Parallel {
                dimension: slot,
                kind: ParallelKind::SharedDesire,
                strength: a_wants.strength.min(b_wants.strength),
            });
        }
        for (wanting, wants, shows) in [(Partner::A, a_wants, b_shows), (Partner::B, b_wants, a_shows)] {
            if both_scored(wants, shows) && wants.direction == shows.direction {
                parallels.push(Parallel {
                    dimension: slot,
                    kind: ParallelKind::WantOfferMatch { wanting },
                    strength: wants.strength.min(shows.strength),
                });
            }
        }
    }
    Alignment { parallels, exchange: exchange_gaps(a, b, config) }
}
