//! Conflict choreography: how the two conflict approaches interlock.

use pc_core::profile::UserResults;
use pc_core::types::{ConflictApproach, Driver};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictDynamic {
    PursueWithdraw,
    DualPursuit,
    DualWithdrawal,
    /// At least one partner is balanced.
    Mixed,
    Unknown,
}

impl ConflictDynamic {
    pub fn of(a: ConflictApproach, b: ConflictApproach) -> Self {
        use ConflictApproach::*;
        match (a, b) {
            (Pursue, Withdraw) | (Withdraw, Pursue) => ConflictDynamic::PursueWithdraw,
            (Pursue, Pursue) => ConflictDynamic::DualPursuit,
            (Withdraw, Withdraw) => ConflictDynamic::DualWithdrawal,
            _ => ConflictDynamic::Mixed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConflictDynamic::PursueWithdraw => "Pursue-Withdraw",
            ConflictDynamic::DualPursuit => "Dual Pursuit",
            ConflictDynamic::DualWithdrawal => "Dual Withdrawal",
            ConflictDynamic::Mixed => "Mixed",
            ConflictDynamic::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choreography {
    pub dynamic: ConflictDynamic,
    /// Both partners share a primary driver. `None` when either driver is unknown.
    pub driver_collision: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_driver: Option<Driver>,
    pub repair_speed_match: Option<bool>,
    pub repair_mode_match: Option<bool>,
}

impl Choreography {
    fn unknown() -> Self {
        Self {
            dynamic: ConflictDynamic::Unknown,
            driver_collision: None,
            shared_driver: None,
            repair_speed_match: None,
            repair_mode_match: None,
        }
    }
}

pub fn choreography(a: &UserResults, b: &UserResults) -> Choreography {
    let (Some(x), Some(y)) = (a.m4(), b.m4()) else {
        return Choreography::unknown();
    };
    let (driver_collision, shared_driver) = match (x.primary_driver, y.primary_driver) {
        (Some(p), Some(q)) if p == q => (Some(true), Some(p)),
        (Some(_), Some(_)) => (Some(false), None),
        _ => (None, None),
    };
    Choreography {
        dynamic: ConflictDynamic::of(x.approach, y.approach),
        driver_collision,
        shared_driver,
        repair_speed_match: matched(x.repair_speed, y.repair_speed),
        repair_mode_match: matched(x.repair_mode, y.repair_mode),
    }
}

/// `None` unless both sides answered.
fn matched<T: PartialEq>(a: Option<T>, b: Option<T>) -> Option<bool> {
    Some(a? == b?)
}
