use std::collections::HashMap;

use juiced_types::{Price, VaultDescriptor};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Price of a token on the pricing API: USD with 6 decimals.
///
/// The API sends prices as decimal strings, numbers are accepted as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawFeedPrice", into = "u64")
)]
pub struct FeedPrice(pub u64);

impl From<FeedPrice> for u64 {
    fn from(price: FeedPrice) -> Self {
        price.0
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFeedPrice {
    Number(u64),
    Text(String),
}

#[cfg(feature = "serde")]
impl TryFrom<RawFeedPrice> for FeedPrice {
    type Error = std::num::ParseIntError;

    fn try_from(raw: RawFeedPrice) -> Result<Self, Self::Error> {
        match raw {
            RawFeedPrice::Number(value) => Ok(FeedPrice(value)),
            RawFeedPrice::Text(text) => text.trim().parse().map(FeedPrice),
        }
    }
}

/// Prices of every token known to the pricing API, by chain id then token address
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct PriceFeed(pub HashMap<u64, HashMap<String, FeedPrice>>);

impl PriceFeed {
    pub fn insert(&mut self, chain_id: u64, address: &str, price: u64) {
        self.0
            .entry(chain_id)
            .or_default()
            .insert(address.to_string(), FeedPrice(price));
    }

    /// Price of a token, zero when the API does not know it. Addresses are compared
    /// case-insensitively.
    pub fn price_of(&self, chain_id: u64, address: &str) -> Price {
        let Some(chain_prices) = self.0.get(&chain_id) else {
            return Price::from_feed(0);
        };
        let value = chain_prices.get(address).copied().or_else(|| {
            chain_prices
                .iter()
                .find(|(token, _)| token.eq_ignore_ascii_case(address))
                .map(|(_, price)| *price)
        });
        Price::from_feed(value.unwrap_or_default().0)
    }
}

/// Prices needed to value one vault
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VaultPrices {
    pub underlying_token: Price,
    pub vault_token: Price,
    pub reward_token: Price,
}

impl VaultPrices {
    /// Prices of the vault tokens, `None` until the pricing API answered.
    ///
    /// Prices are looked up with the safe chain id of the vault so local forks use
    /// mainnet prices.
    pub fn from_feed(feed: Option<&PriceFeed>, vault: &VaultDescriptor) -> Option<Self> {
        let feed = feed?;
        let chain_id = vault.safe_chain_id();
        Some(Self {
            underlying_token: feed.price_of(chain_id, vault.token_address),
            vault_token: feed.price_of(chain_id, vault.vault_address),
            reward_token: feed.price_of(chain_id, vault.reward_address),
        })
    }
}
