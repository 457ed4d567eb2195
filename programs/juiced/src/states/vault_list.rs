use juiced_types::{network::DEFAULT_CHAIN_ID, VaultDescriptor, VaultVersion};

use crate::{JuicedError, JuicedResult};

/// Vaults displayed by the dashboard, in display order
pub const VAULT_LIST: &[VaultDescriptor] = &[VaultDescriptor {
    name: "yvAjnaDAI",
    token_symbol: "DAI",
    reward_symbol: "AJNA",
    decimals: 18,
    chain_id: DEFAULT_CHAIN_ID,
    // yvDAI
    vault_address: "0xe24BA27551aBE96Ca401D39761cA2319Ea14e3CB",
    // DAI
    token_address: "0x6B175474E89094C44Da98b954EedeAC495271d0F",
    // stakedDAI
    staking_address: "0x54C6b2b293297e65b1d163C3E8dbc45338bfE443",
    // AJNA
    reward_address: "0x9a96ec9B57Fb64FbC60B423d1f4da7691Bd35079",
    // yvyvDAI
    auto_compounding_address: "0x082a5743aAdf3d0Daf750EeF24652b36a68B1e9C",
    version: VaultVersion::V1,
}];

/// Registry entry for a vault address, compared case-insensitively
pub fn find_vault(vault_address: &str) -> Option<&'static VaultDescriptor> {
    VAULT_LIST
        .iter()
        .find(|vault| vault.vault_address.eq_ignore_ascii_case(vault_address))
}

pub fn vault_version(raw: u8) -> JuicedResult<VaultVersion> {
    VaultVersion::try_from(raw).map_err(|_| JuicedError::UnknownVaultVersion)
}
