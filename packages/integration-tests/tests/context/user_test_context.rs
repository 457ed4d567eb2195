#![allow(dead_code)]

use juiced::{
    handlers::{self, ActionPlan, AmountInput},
    input::{can_submit, normalize_bounded_input},
    states::VaultSnapshot,
    Amount, JuicedResult, VaultDescriptor,
};

/// A user filling the amount fields of a vault page
pub struct UserTestContext {
    pub vault: VaultDescriptor,
    pub snapshot: VaultSnapshot,
}

impl UserTestContext {
    pub fn new(vault: VaultDescriptor, snapshot: VaultSnapshot) -> UserTestContext {
        UserTestContext { vault, snapshot }
    }

    /// Types `text` in a field bounded by `available`, as the input handler does
    pub fn type_amount(&self, text: &str, available: &Amount) -> Option<Amount> {
        normalize_bounded_input(text, self.vault.decimals, Some(available))
    }

    /// Types `text` in the stake field and submits it if the button is enabled
    pub fn stake(&self, text: &str) -> Option<JuicedResult<ActionPlan>> {
        let available = self.snapshot.available_to_stake();
        let amount = self.type_amount(text, &available);
        if !can_submit(amount.as_ref(), &available) {
            return None;
        }
        let input = match amount {
            Some(amount) if amount == available => AmountInput::Max,
            Some(amount) => AmountInput::Typed(amount),
            None => return None,
        };
        Some(handlers::stake(&self.vault, &self.snapshot, &input))
    }

    pub fn stake_max(&self) -> JuicedResult<ActionPlan> {
        handlers::stake(&self.vault, &self.snapshot, &AmountInput::Max)
    }

    pub fn redeem_auto_compounded(&self, input: AmountInput) -> JuicedResult<ActionPlan> {
        handlers::redeem_from_auto_compounder(&self.vault, &self.snapshot, &input)
    }
}
