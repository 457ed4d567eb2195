use juiced_types::{Amount, VaultDescriptor};

use super::{non_zero, ActionPlan, ContractCall, REDEEM_MAX_LOSS_BPS};
use crate::JuicedResult;

/// Deposits `assets` underlying tokens into the vault
pub fn deposit_into_vault(vault: &VaultDescriptor, assets: &Amount) -> JuicedResult<ActionPlan> {
    let assets = non_zero(assets)?;
    Ok(ActionPlan::new(vault, vault.vault_address, ContractCall::Deposit { assets })
        .spending(vault.token_address))
}

/// Redeems vault shares for underlying tokens. The amount is typed in shares.
pub fn redeem_from_vault(vault: &VaultDescriptor, shares: &Amount) -> JuicedResult<ActionPlan> {
    let shares = non_zero(shares)?;
    Ok(ActionPlan::new(
        vault,
        vault.vault_address,
        ContractCall::Redeem {
            shares,
            max_loss_bps: REDEEM_MAX_LOSS_BPS,
        },
    ))
}
