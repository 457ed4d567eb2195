#[cfg(all(feature = "mainnet", feature = "localnet"))]
compile_error!("'mainnet' and 'localnet' features are mutually exclusive");

pub const MAINNET_CHAIN_ID: u64 = 1;

/// Chain id reported by a local fork of mainnet
pub const LOCAL_FORK_CHAIN_ID: u64 = 1337;

cfg_if::cfg_if! {
    if #[cfg(feature = "mainnet")] {
        pub const DEFAULT_CHAIN_ID: u64 = MAINNET_CHAIN_ID;
    } else if #[cfg(feature = "localnet")] {
        pub const DEFAULT_CHAIN_ID: u64 = LOCAL_FORK_CHAIN_ID;
    } else {
        compile_error!("At least one of 'mainnet' or 'localnet' feature need to be set");
    }
}

/// Chain id to use when querying off-chain services.
///
/// A local fork mirrors mainnet state, so the pricing and analytics APIs are
/// queried with the mainnet id.
pub const fn to_safe_chain_id(chain_id: u64) -> u64 {
    if chain_id == LOCAL_FORK_CHAIN_ID {
        MAINNET_CHAIN_ID
    } else {
        chain_id
    }
}

static_assertions::const_assert_eq!(to_safe_chain_id(LOCAL_FORK_CHAIN_ID), MAINNET_CHAIN_ID);
static_assertions::const_assert_eq!(to_safe_chain_id(DEFAULT_CHAIN_ID), MAINNET_CHAIN_ID);
