//! Figures displayed for a vault, recomputed from every new snapshot.
use juiced_types::{Amount, VaultDescriptor};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    states::{Snapshot, VaultPrices, VaultSnapshot},
    utils::math::finite_product,
    yields::{combined_yield, projected_reward_apy, YieldFigure},
    JuicedError, JuicedResult,
};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AggregatedVaultMetrics {
    pub vault_address: &'static str,
    /// Underlying tokens the user holds through the vault, its staking contract and
    /// its auto-compounder
    pub total_deposit: Amount,
    /// `total_deposit` in USD
    pub total_deposit_usd: f64,
    /// Staking rewards projected over a year, in percent
    pub projected_reward_apy: f64,
    /// Projected rewards plus the feed yield, in percent
    pub apy: f64,
    /// USD value of the vault shares held by the auto-compounder and the staking contract
    pub tvl: f64,
    /// USD value of the rewards streamed in a week at the current rate, kept after a
    /// reward period ends
    pub reward_value: f64,
    /// USD value of the rewards the user can claim
    pub reward_claimable: f64,
    pub external_yield: YieldFigure,
    pub is_fetched: bool,
}

impl AggregatedVaultMetrics {
    /// Computes the metrics of `vault` from a loaded snapshot.
    ///
    /// Prices that are not known yet count as 0, so USD figures and the projected
    /// reward yield read 0 until the pricing API answered.
    pub fn compute(
        vault: &VaultDescriptor,
        snapshot: &VaultSnapshot,
        prices: Option<&VaultPrices>,
        external_yield: YieldFigure,
    ) -> Self {
        let prices = prices.copied().unwrap_or_default();
        let underlying_price = f64::from(prices.underlying_token);
        let vault_token_price = f64::from(prices.vault_token);
        let reward_price = f64::from(prices.reward_token);

        let total_deposit = Amount {
            raw: snapshot.available_to_stake().raw
                + snapshot.staked_value().raw
                + snapshot.auto_compounded_value().raw,
            decimals: vault.decimals,
        };

        let projected_reward_apy = projected_reward_apy(
            snapshot.weekly_staking_rewards.normalized(),
            reward_price,
            snapshot.total_vault_supply.normalized(),
            vault_token_price,
        );

        let locked_shares =
            snapshot.auto_compounding_supply.normalized() + snapshot.total_staking_supply.normalized();

        Self {
            vault_address: vault.vault_address,
            total_deposit_usd: finite_product(&[total_deposit.normalized(), underlying_price]),
            total_deposit,
            projected_reward_apy,
            apy: combined_yield(projected_reward_apy, external_yield),
            tvl: finite_product(&[locked_shares, vault_token_price]),
            reward_value: finite_product(&[
                snapshot.scheduled_weekly_rewards.normalized(),
                reward_price,
            ]),
            reward_claimable: finite_product(&[snapshot.reward_earned.normalized(), reward_price]),
            external_yield,
            is_fetched: true,
        }
    }

    /// [`AggregatedVaultMetrics::compute`] for a snapshot that may still be loading
    pub fn compute_for(
        vault: &VaultDescriptor,
        snapshot: &Snapshot,
        prices: Option<&VaultPrices>,
        external_yield: YieldFigure,
    ) -> JuicedResult<Self> {
        let snapshot = snapshot.loaded().ok_or(JuicedError::MissingSnapshot)?;
        Ok(Self::compute(vault, snapshot, prices, external_yield))
    }
}
