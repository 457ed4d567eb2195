pub mod prices;
pub mod snapshot;
pub mod vault_list;

pub use self::{
    prices::{PriceFeed, VaultPrices},
    snapshot::{OnChainReads, RewardData, Snapshot, VaultSnapshot},
    vault_list::{find_vault, vault_version, VAULT_LIST},
};
