//! Staking contract actions: vault shares are staked to accrue the reward token.
use juiced_types::VaultDescriptor;

use super::{resolve_amount, ActionPlan, AmountInput, ContractCall};
use crate::{shares::shares_to_asset_or_zero, states::VaultSnapshot, JuicedResult};

/// Stakes vault shares. A typed amount is in underlying tokens and is converted
/// through the vault price per share.
pub fn stake(
    vault: &VaultDescriptor,
    snapshot: &VaultSnapshot,
    input: &AmountInput,
) -> JuicedResult<ActionPlan> {
    let amount = resolve_amount(input, &snapshot.vault_balance_of, |typed| {
        shares_to_asset_or_zero(
            Some(&typed.raw),
            vault.decimals,
            Some(&snapshot.vault_price_per_share.raw),
        )
    })?;
    Ok(
        ActionPlan::new(vault, vault.staking_address, ContractCall::Stake { amount })
            .spending(vault.vault_address),
    )
}

/// Withdraws staked vault shares without claiming the rewards
pub fn unstake(
    vault: &VaultDescriptor,
    snapshot: &VaultSnapshot,
    input: &AmountInput,
) -> JuicedResult<ActionPlan> {
    let amount = resolve_amount(input, &snapshot.staking_balance_of, |typed| {
        shares_to_asset_or_zero(
            Some(&typed.raw),
            vault.decimals,
            Some(&snapshot.vault_price_per_share.raw),
        )
    })?;
    Ok(ActionPlan::new(
        vault,
        vault.staking_address,
        ContractCall::Withdraw { amount },
    ))
}

pub fn claim_rewards(vault: &VaultDescriptor) -> ActionPlan {
    ActionPlan::new(vault, vault.staking_address, ContractCall::GetReward)
}

/// Withdraws every staked share and claims the rewards in one call
pub fn exit_staking(vault: &VaultDescriptor) -> ActionPlan {
    ActionPlan::new(vault, vault.staking_address, ContractCall::Exit)
}
