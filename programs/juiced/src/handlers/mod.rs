//! Contract calls submitted by the dashboard actions.
//!
//! Each handler turns what the user entered into the exact call to submit. Amounts
//! typed in underlying tokens are converted to the shares the target contract
//! accounts in. When the user picked the max, the full share balance is sent
//! instead so no dust is left behind by rounding.
pub mod handler_auto_compounding;
pub mod handler_staking;
pub mod handler_vault;

use juiced_types::{Amount, VaultDescriptor};
use num_bigint::BigUint;
use num_traits::One;
#[cfg(feature = "serde")]
use serde::Serialize;
use strum::IntoStaticStr;

pub use self::{
    handler_auto_compounding::{deposit_into_auto_compounder, redeem_from_auto_compounder},
    handler_staking::{claim_rewards, exit_staking, stake, unstake},
    handler_vault::{deposit_into_vault, redeem_from_vault},
};
use crate::{JuicedError, JuicedResult};

/// Loss accepted when redeeming from a vault, in basis points (0.01%)
pub const REDEEM_MAX_LOSS_BPS: u16 = 1;

/// `type(uint256).max`, the allowance granted by an approval
pub fn max_allowance() -> BigUint {
    (BigUint::one() << 256_u32) - BigUint::one()
}

/// Amount field of an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountInput {
    /// The whole balance, selected with the max button
    Max,
    /// Amount typed by the user
    Typed(Amount),
}

/// Function called on the target contract, with its amount argument
#[derive(IntoStaticStr, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[strum(serialize_all = "camelCase")]
pub enum ContractCall {
    Approve { spender: &'static str, amount: BigUint },
    Deposit { assets: BigUint },
    Redeem { shares: BigUint, max_loss_bps: u16 },
    Stake { amount: BigUint },
    Withdraw { amount: BigUint },
    Exit,
    GetReward,
}

impl ContractCall {
    /// Solidity name of the called function
    pub fn function_name(&self) -> &'static str {
        self.into()
    }
}

/// One transaction to submit
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ActionPlan {
    pub chain_id: u64,
    pub contract_address: &'static str,
    pub call: ContractCall,
    /// Token pulled from the wallet by the call, which must be approved first
    pub spent_token: Option<&'static str>,
}

impl ActionPlan {
    fn new(vault: &VaultDescriptor, contract_address: &'static str, call: ContractCall) -> Self {
        Self {
            chain_id: vault.chain_id,
            contract_address,
            call,
            spent_token: None,
        }
    }

    fn spending(mut self, token: &'static str) -> Self {
        self.spent_token = Some(token);
        self
    }

    /// Amount moved by the call, `None` for calls without an amount
    pub fn amount(&self) -> Option<&BigUint> {
        match &self.call {
            ContractCall::Approve { amount, .. }
            | ContractCall::Deposit { assets: amount }
            | ContractCall::Redeem { shares: amount, .. }
            | ContractCall::Stake { amount }
            | ContractCall::Withdraw { amount } => Some(amount),
            ContractCall::Exit | ContractCall::GetReward => None,
        }
    }

    /// Approval to submit before this call when `allowance` does not cover its amount.
    ///
    /// Approvals are unlimited so the next actions do not need one again.
    pub fn required_approval(&self, allowance: &BigUint) -> Option<ActionPlan> {
        let token = self.spent_token?;
        let amount = self.amount()?;
        if allowance >= amount {
            return None;
        }
        Some(ActionPlan {
            chain_id: self.chain_id,
            contract_address: token,
            call: ContractCall::Approve {
                spender: self.contract_address,
                amount: max_allowance(),
            },
            spent_token: None,
        })
    }
}

/// Resolves an amount input: the whole `balance` for [`AmountInput::Max`], the
/// converted typed amount otherwise.
///
/// The contracts revert on zero amounts, so a zero result is rejected here.
pub(crate) fn resolve_amount(
    input: &AmountInput,
    balance: &Amount,
    convert: impl FnOnce(&Amount) -> Amount,
) -> JuicedResult<BigUint> {
    match input {
        AmountInput::Max => non_zero(balance),
        AmountInput::Typed(typed) => non_zero(&convert(typed)),
    }
}

pub(crate) fn non_zero(amount: &Amount) -> JuicedResult<BigUint> {
    if amount.is_zero() {
        return Err(JuicedError::ZeroAmount);
    }
    Ok(amount.raw.clone())
}
