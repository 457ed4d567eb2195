//! Expected yield of a vault: on-chain staking rewards projected over a year, plus
//! the base yield reported by the analytics feed.
pub mod feed;
pub mod reward_apy;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use self::{
    feed::{extract_external_yield, VaultApr},
    reward_apy::{projected_reward_apy, weekly_rewards},
};
use crate::utils::consts::NEW_VAULT_APR_TYPE;

/// Yield reported for a vault, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum YieldFigure {
    Numeric(f64),
    /// The vault is too recent for the feed to report a yield
    InsufficientHistory,
}

impl YieldFigure {
    /// Contribution to a combined yield: a vault without history contributes 0
    pub fn as_percent(&self) -> f64 {
        match self {
            YieldFigure::Numeric(value) => *value,
            YieldFigure::InsufficientHistory => 0.0,
        }
    }

    pub fn is_insufficient_history(&self) -> bool {
        matches!(self, YieldFigure::InsufficientHistory)
    }
}

impl Default for YieldFigure {
    fn default() -> Self {
        YieldFigure::Numeric(0.0)
    }
}

impl fmt::Display for YieldFigure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YieldFigure::Numeric(value) => write!(f, "{value:.2}%"),
            YieldFigure::InsufficientHistory => f.write_str(NEW_VAULT_APR_TYPE),
        }
    }
}

/// Sum of two yields expressed in percent. No clamping: negative or very large
/// values are genuine vault states and pass through.
pub fn combined_apy(projected_reward_apy: f64, external_apy: f64) -> f64 {
    projected_reward_apy + external_apy
}

/// [`combined_apy`] with the feed figure, a vault without history counting as 0
pub fn combined_yield(projected_reward_apy: f64, external: YieldFigure) -> f64 {
    combined_apy(projected_reward_apy, external.as_percent())
}
