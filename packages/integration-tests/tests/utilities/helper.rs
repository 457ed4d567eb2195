#![allow(dead_code)]
use juiced::{
    states::{OnChainReads, PriceFeed, RewardData},
    yields::feed::FeedVault,
};
use num_bigint::BigUint;

pub const WAD: u64 = 1_000_000_000_000_000_000;
pub const WEEK: u64 = 604_800;
/// 2023-11-14
pub const NOW: u64 = 1_700_000_000;

pub const DAI: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
pub const YV_DAI: &str = "0xe24BA27551aBE96Ca401D39761cA2319Ea14e3CB";
pub const AJNA: &str = "0x9a96ec9B57Fb64FbC60B423d1f4da7691Bd35079";

/// Pricing API answer, addresses lowercased and prices as strings as the API sends them
pub const PRICES_JSON: &str = r#"{
    "1": {
        "0x6b175474e89094c44da98b954eedeac495271d0f": "1000000",
        "0xe24ba27551abe96ca401d39761ca2319ea14e3cb": "1100000",
        "0x9a96ec9b57fb64fbc60b423d1f4da7691bd35079": "500000"
    },
    "10": {
        "0x0b2c639c533813f4aa9d7837caf62653d097ff85": 999000
    }
}"#;

/// Analytics API entry of the DAI vault
pub const YV_DAI_FEED_JSON: &str = r#"{
    "address": "0xe24BA27551aBE96Ca401D39761cA2319Ea14e3CB",
    "symbol": "yvDAI-1",
    "apr": {
        "type": "v3:onchainOracle",
        "netAPR": 0.051,
        "fees": {"performance": 0.1, "management": 0},
        "points": {"weekAgo": 0.061, "monthAgo": 0.055, "inception": 0.049},
        "forwardAPR": {
            "type": "v3:onchainOracle",
            "netAPR": 0.0475,
            "composite": {"v3OracleCurrentAPR": 0.0475, "v3OracleStratRatioAPR": 0.046}
        }
    }
}"#;

/// Analytics API entry of a vault deployed days ago
pub const NEW_VAULT_FEED_JSON: &str = r#"{
    "address": "0x082a5743aAdf3d0Daf750EeF24652b36a68B1e9C",
    "apr": {
        "type": "v3:new_averaged",
        "points": {"weekAgo": 0, "monthAgo": 0, "inception": 0},
        "forwardAPR": {"type": "", "composite": {"v3OracleCurrentAPR": 0}}
    }
}"#;

pub fn wad(tokens: u64) -> BigUint {
    BigUint::from(tokens) * BigUint::from(WAD)
}

/// `tokens * 10^18 / 100`, for prices per share such as 1.05
pub fn wad_cents(cents: u64) -> BigUint {
    BigUint::from(cents) * BigUint::from(WAD / 100)
}

pub fn price_feed() -> PriceFeed {
    serde_json::from_str(PRICES_JSON).unwrap()
}

pub fn feed_vault(json: &str) -> FeedVault {
    serde_json::from_str(json).unwrap()
}

/// One poll of the DAI vault for a user holding 100 yvDAI, 200 staked yvDAI and
/// 50 auto-compounder shares
pub fn dai_reads() -> OnChainReads {
    OnChainReads {
        total_vault_supply: wad(1_000_000),
        vault_balance_of: wad(100),
        token_balance_of: wad(1_000),
        total_staking_supply: wad(300_000),
        staking_balance_of: wad(200),
        reward_earned: wad(12),
        reward_data: Some(RewardData {
            rewards_duration: WEEK,
            period_finish: NOW + WEEK / 2,
            // 0.1 AJNA per second
            reward_rate: BigUint::from(WAD / 10),
        }),
        auto_compounding_supply: wad(200_000),
        auto_compounding_balance: wad(50),
        vault_price_per_share: wad_cents(110),
        auto_compounding_price_per_share: wad_cents(120),
    }
}
