use juiced_types::{Amount, REWARD_DECIMALS};
use num_bigint::BigUint;

use crate::{
    utils::{
        consts::{PERCENT, WEEKS_PER_YEAR},
        math::ratio_or_zero,
    },
    warn,
};

/// Yield of the staking rewards, projected over a year.
///
/// `(weekly_reward * reward_price) / (total_supply * vault_price) * 52 * 100`
///
/// A zero denominator or a non-finite result gives 0: freshly deployed vaults
/// have no supply and their tokens are often not priced yet.
pub fn projected_reward_apy(
    weekly_reward: f64,
    reward_token_price: f64,
    vault_total_supply: f64,
    vault_token_price: f64,
) -> f64 {
    let weekly_value = weekly_reward * reward_token_price;
    let vault_value = vault_total_supply * vault_token_price;
    let weekly_yield = ratio_or_zero(weekly_value, vault_value);
    let apy = weekly_yield * WEEKS_PER_YEAR * PERCENT;
    if apy.is_finite() {
        apy
    } else {
        warn!("Projected reward APY is not finite (weekly value {weekly_value}, vault value {vault_value}), using 0");
        0.0
    }
}

/// Rewards streamed over one reward period: `rewardRate * rewardsDuration`.
///
/// The staking contract accounts its reward rate with 18 decimals, whatever the
/// decimals of the reward token.
pub fn weekly_rewards(reward_rate_raw: &BigUint, rewards_duration_secs: u64) -> Amount {
    Amount {
        raw: reward_rate_raw * BigUint::from(rewards_duration_secs),
        decimals: REWARD_DECIMALS,
    }
}
