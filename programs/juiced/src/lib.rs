pub mod errors;
pub mod handlers;
pub mod input;
pub mod metrics;
pub mod ranking;
pub mod shares;
pub mod states;
pub mod utils;
pub mod yields;

// Reexports to deal with eventual conflicts
pub use juiced_types;
pub use juiced_types::{
    network, num_bigint, Amount, Price, VaultDescriptor, VaultVersion, REWARD_DECIMALS,
};
pub use num_enum;

pub use crate::{
    errors::*,
    metrics::AggregatedVaultMetrics,
    states::{Snapshot, VaultPrices, VaultSnapshot, VAULT_LIST},
    yields::YieldFigure,
};
