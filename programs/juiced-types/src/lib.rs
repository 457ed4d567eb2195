pub mod amount;
pub mod network;
pub mod price;

// Reexports to deal with eventual conflicts
pub use num_bigint;
pub use num_enum;
use num_enum::{IntoPrimitive, TryFromPrimitive};
pub use rust_decimal;
#[cfg(feature = "serde")]
use serde::Serialize;

pub use crate::{
    amount::Amount,
    price::{Price, PRICE_FEED_DECIMALS},
};

/// Decimals of the reward accounting of the staking contracts (`earned`, `rewardRate`)
pub const REWARD_DECIMALS: u8 = 18;

/// Generation of the vault dashboard a vault is displayed with.
///
/// Version 1 vaults expose `unlockedShares` and stop projecting rewards once the
/// staking reward period is over.
#[derive(IntoPrimitive, TryFromPrimitive, Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[repr(u8)]
pub enum VaultVersion {
    V1 = 1,
    V2 = 2,
}

/// Static configuration of one vault and its wrappers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VaultDescriptor {
    pub name: &'static str,
    pub token_symbol: &'static str,
    pub reward_symbol: &'static str,
    pub decimals: u8,
    pub chain_id: u64,
    /// Yearn V3 vault
    pub vault_address: &'static str,
    /// Underlying asset of the vault
    pub token_address: &'static str,
    /// Staking contract accruing `reward_address` for staked vault shares
    pub staking_address: &'static str,
    pub reward_address: &'static str,
    /// Vault of vault shares, reinvesting its own yield
    pub auto_compounding_address: &'static str,
    pub version: VaultVersion,
}

impl VaultDescriptor {
    pub fn zero_amount(&self) -> Amount {
        Amount::zero(self.decimals)
    }

    pub fn safe_chain_id(&self) -> u64 {
        network::to_safe_chain_id(self.chain_id)
    }
}
