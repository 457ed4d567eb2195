//! Auto-compounder actions. The auto-compounder is a vault of vault shares: it
//! takes vault shares in and mints its own shares.
use juiced_types::VaultDescriptor;

use super::{resolve_amount, ActionPlan, AmountInput, ContractCall, REDEEM_MAX_LOSS_BPS};
use crate::{
    shares::{double_wrapped_shares_to_asset_or_zero, shares_to_asset_or_zero},
    states::VaultSnapshot,
    JuicedResult,
};

/// Deposits vault shares into the auto-compounder. A typed amount is in underlying
/// tokens and is converted through the vault price per share.
pub fn deposit_into_auto_compounder(
    vault: &VaultDescriptor,
    snapshot: &VaultSnapshot,
    input: &AmountInput,
) -> JuicedResult<ActionPlan> {
    let assets = resolve_amount(input, &snapshot.vault_balance_of, |typed| {
        shares_to_asset_or_zero(
            Some(&typed.raw),
            vault.decimals,
            Some(&snapshot.vault_price_per_share.raw),
        )
    })?;
    Ok(ActionPlan::new(
        vault,
        vault.auto_compounding_address,
        ContractCall::Deposit { assets },
    )
    .spending(vault.vault_address))
}

/// Redeems auto-compounder shares for vault shares. A typed amount is in
/// underlying tokens and goes through the auto-compounder price per share, then
/// the vault one.
pub fn redeem_from_auto_compounder(
    vault: &VaultDescriptor,
    snapshot: &VaultSnapshot,
    input: &AmountInput,
) -> JuicedResult<ActionPlan> {
    let shares = resolve_amount(input, &snapshot.auto_compounding_balance, |typed| {
        double_wrapped_shares_to_asset_or_zero(
            Some(&typed.raw),
            vault.decimals,
            Some(&snapshot.auto_compounding_price_per_share.raw),
            Some(&snapshot.vault_price_per_share.raw),
        )
    })?;
    Ok(ActionPlan::new(
        vault,
        vault.auto_compounding_address,
        ContractCall::Redeem {
            shares,
            max_loss_bps: REDEEM_MAX_LOSS_BPS,
        },
    ))
}
