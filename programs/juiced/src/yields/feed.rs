//! Yield figures reported by the vault analytics API.
//!
//! Figures are ratios (`0.05` is 5%). Only the fields read by
//! [`extract_external_yield`] are modelled, anything else in the payload is ignored.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::YieldFigure;
use crate::{
    debug,
    utils::consts::{NEW_VAULT_APR_TYPE, PERCENT},
};

/// Vault entry of the analytics API
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct FeedVault {
    pub address: String,
    pub apr: Option<VaultApr>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct VaultApr {
    /// Kind of computation behind the figures, contains `new` for vaults without history
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub apr_type: String,
    #[cfg_attr(feature = "serde", serde(rename = "netAPR"))]
    pub net_apr: Option<f64>,
    pub points: AprPoints,
    #[cfg_attr(feature = "serde", serde(rename = "forwardAPR"))]
    pub forward_apr: ForwardApr,
}

/// Trailing realized figures
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct AprPoints {
    pub week_ago: Option<f64>,
    pub month_ago: Option<f64>,
    pub inception: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct ForwardApr {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub apr_type: String,
    #[cfg_attr(feature = "serde", serde(rename = "netAPR"))]
    pub net_apr: Option<f64>,
    pub composite: ForwardComposite,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ForwardComposite {
    /// Current spot figure computed from the vault oracle
    #[cfg_attr(feature = "serde", serde(rename = "v3OracleCurrentAPR"))]
    pub v3_oracle_current_apr: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "v3OracleStratRatioAPR"))]
    pub v3_oracle_strat_ratio_apr: Option<f64>,
}

impl VaultApr {
    /// Candidate figures in order of preference: current spot, then a month ago,
    /// then a week ago
    fn candidates(&self) -> [Option<f64>; 3] {
        [
            self.forward_apr.composite.v3_oracle_current_apr,
            self.points.month_ago,
            self.points.week_ago,
        ]
    }

    pub fn is_new(&self) -> bool {
        self.apr_type.contains(NEW_VAULT_APR_TYPE)
    }
}

/// Base yield of a vault in percent.
///
/// The first positive figure among current spot, month-ago and week-ago wins.
/// Without any, a vault flagged as new reports [`YieldFigure::InsufficientHistory`]
/// and every other vault reports 0. No feed data at all also reports 0.
pub fn extract_external_yield(apr: Option<&VaultApr>) -> YieldFigure {
    let Some(apr) = apr else {
        return YieldFigure::default();
    };

    let figure = apr
        .candidates()
        .into_iter()
        .flatten()
        .find(|value| value.is_finite() && *value > 0.0);

    match figure {
        Some(value) => YieldFigure::Numeric(value * PERCENT),
        None if apr.is_new() => {
            debug!("No yield history for vault (type {}), reporting it as new", apr.apr_type);
            YieldFigure::InsufficientHistory
        }
        None => YieldFigure::default(),
    }
}
