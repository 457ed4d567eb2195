//! On-chain state of one vault at one poll.
//!
//! A [`VaultSnapshot`] is rebuilt from scratch from the raw reads of every poll and
//! never patched in place.
use juiced_types::{Amount, VaultDescriptor, VaultVersion, REWARD_DECIMALS};
use num_bigint::BigUint;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{debug, shares, yields::weekly_rewards};

/// `rewardData` of the staking contract
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RewardData {
    /// Length of a reward period in seconds
    pub rewards_duration: u64,
    /// Unix timestamp at which the current reward period ends
    pub period_finish: u64,
    /// Reward tokens distributed per second, 18 decimals
    pub reward_rate: BigUint,
}

impl RewardData {
    pub fn is_finished(&self, now_unix: u64) -> bool {
        self.period_finish < now_unix
    }
}

/// Raw integers returned by one multicall over the vault, its staking contract and
/// its auto-compounder. Values the call did not return are left at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct OnChainReads {
    pub total_vault_supply: BigUint,
    pub vault_balance_of: BigUint,
    pub token_balance_of: BigUint,
    pub total_staking_supply: BigUint,
    pub staking_balance_of: BigUint,
    pub reward_earned: BigUint,
    pub reward_data: Option<RewardData>,
    pub auto_compounding_supply: BigUint,
    pub auto_compounding_balance: BigUint,
    pub vault_price_per_share: BigUint,
    pub auto_compounding_price_per_share: BigUint,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VaultSnapshot {
    pub total_vault_supply: Amount,
    /// Vault shares held by the user
    pub vault_balance_of: Amount,
    /// Underlying tokens held by the user
    pub token_balance_of: Amount,
    pub total_staking_supply: Amount,
    pub staking_balance_of: Amount,
    pub reward_earned: Amount,
    /// Rewards projected for the coming week, zero once a version 1 period is over
    pub weekly_staking_rewards: Amount,
    /// Rewards streamed over a full period at the current rate, whether or not the
    /// period is over
    pub scheduled_weekly_rewards: Amount,
    pub auto_compounding_supply: Amount,
    pub auto_compounding_balance: Amount,
    pub vault_price_per_share: Amount,
    pub auto_compounding_price_per_share: Amount,
}

impl VaultSnapshot {
    /// Builds the snapshot of `vault` from one poll.
    ///
    /// Without a connected wallet the user balances read as zero whatever the reads
    /// contain. Version 1 vaults report no weekly rewards once the reward period
    /// is over.
    pub fn from_reads(
        vault: &VaultDescriptor,
        reads: &OnChainReads,
        wallet_connected: bool,
        now_unix: u64,
    ) -> Self {
        let decimals = vault.decimals;
        let amount = |raw: &BigUint| Amount::new(raw.clone(), decimals);
        let user_amount = |raw: &BigUint, decimals: u8| {
            if wallet_connected {
                Amount::new(raw.clone(), decimals)
            } else {
                Amount::zero(decimals)
            }
        };
        if !wallet_connected {
            debug!("No wallet connected, zeroing user balances of {}", vault.name);
        }

        let scheduled_weekly_rewards = reads
            .reward_data
            .as_ref()
            .map(|data| weekly_rewards(&data.reward_rate, data.rewards_duration))
            .unwrap_or_else(|| Amount::zero(REWARD_DECIMALS));
        let weekly_staking_rewards = match &reads.reward_data {
            Some(data) if vault.version == VaultVersion::V1 && data.is_finished(now_unix) => {
                debug!(
                    "Reward period of {} finished at {}, no rewards projected",
                    vault.name, data.period_finish
                );
                Amount::zero(REWARD_DECIMALS)
            }
            _ => scheduled_weekly_rewards.clone(),
        };

        Self {
            total_vault_supply: amount(&reads.total_vault_supply),
            vault_balance_of: user_amount(&reads.vault_balance_of, decimals),
            token_balance_of: user_amount(&reads.token_balance_of, decimals),
            total_staking_supply: amount(&reads.total_staking_supply),
            staking_balance_of: user_amount(&reads.staking_balance_of, decimals),
            reward_earned: user_amount(&reads.reward_earned, REWARD_DECIMALS),
            weekly_staking_rewards,
            scheduled_weekly_rewards,
            auto_compounding_supply: amount(&reads.auto_compounding_supply),
            auto_compounding_balance: user_amount(&reads.auto_compounding_balance, decimals),
            vault_price_per_share: amount(&reads.vault_price_per_share),
            auto_compounding_price_per_share: amount(&reads.auto_compounding_price_per_share),
        }
    }

    pub fn has_vault_tokens(&self) -> bool {
        !self.vault_balance_of.is_zero()
    }

    /// Underlying value of the vault shares held in the wallet, shown as the amount
    /// available to stake
    pub fn available_to_stake(&self) -> Amount {
        shares::asset_value_of_shares(&self.vault_balance_of, &self.vault_price_per_share.raw)
    }

    /// Underlying value of the vault shares staked for rewards
    pub fn staked_value(&self) -> Amount {
        shares::asset_value_of_shares(&self.staking_balance_of, &self.vault_price_per_share.raw)
    }

    /// Underlying value of the auto-compounder shares held, through both prices per share
    pub fn auto_compounded_value(&self) -> Amount {
        shares::double_wrapped_asset_value_of_shares(
            &self.auto_compounding_balance,
            &self.auto_compounding_price_per_share.raw,
            &self.vault_price_per_share.raw,
        )
    }
}

/// State of a vault as seen by the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Snapshot {
    /// No poll answered yet
    #[default]
    NotYetLoaded,
    Loaded(Box<VaultSnapshot>),
}

impl Snapshot {
    pub fn loaded(&self) -> Option<&VaultSnapshot> {
        match self {
            Snapshot::Loaded(snapshot) => Some(snapshot),
            Snapshot::NotYetLoaded => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Snapshot::Loaded(_))
    }
}

impl From<VaultSnapshot> for Snapshot {
    fn from(snapshot: VaultSnapshot) -> Self {
        Snapshot::Loaded(Box::new(snapshot))
    }
}
