#![allow(dead_code)]

use juiced::{
    metrics::AggregatedVaultMetrics,
    states::{OnChainReads, PriceFeed, Snapshot, VaultPrices, VaultSnapshot},
    yields::{extract_external_yield, feed::FeedVault, YieldFigure},
    JuicedResult, VaultDescriptor, VAULT_LIST,
};

use super::UserTestContext;
use crate::utilities::helper::{dai_reads, feed_vault, price_feed, NOW, YV_DAI_FEED_JSON};

/// Dashboard state of one vault: the last poll, the off-chain feeds and the clock
pub struct VaultTestContext {
    pub vault: VaultDescriptor,
    pub reads: Option<OnChainReads>,
    pub prices: Option<PriceFeed>,
    pub yield_feed: Option<FeedVault>,
    pub wallet_connected: bool,
    pub now: u64,
}

impl VaultTestContext {
    /// The DAI vault with a connected wallet and every data source answered
    pub fn new() -> VaultTestContext {
        VaultTestContext {
            vault: VAULT_LIST[0],
            reads: Some(dai_reads()),
            prices: Some(price_feed()),
            yield_feed: Some(feed_vault(YV_DAI_FEED_JSON)),
            wallet_connected: true,
            now: NOW,
        }
    }

    /// Nothing polled yet
    pub fn loading() -> VaultTestContext {
        VaultTestContext {
            reads: None,
            prices: None,
            yield_feed: None,
            ..VaultTestContext::new()
        }
    }

    pub fn after(&mut self, seconds: u64) -> u64 {
        self.now += seconds;
        self.now
    }

    pub fn disconnect(&mut self) {
        self.wallet_connected = false;
    }

    pub fn snapshot(&self) -> Snapshot {
        match &self.reads {
            Some(reads) => {
                VaultSnapshot::from_reads(&self.vault, reads, self.wallet_connected, self.now).into()
            }
            None => Snapshot::NotYetLoaded,
        }
    }

    pub fn prices(&self) -> Option<VaultPrices> {
        VaultPrices::from_feed(self.prices.as_ref(), &self.vault)
    }

    pub fn external_yield(&self) -> YieldFigure {
        extract_external_yield(self.yield_feed.as_ref().and_then(|feed| feed.apr.as_ref()))
    }

    pub fn metrics(&self) -> JuicedResult<AggregatedVaultMetrics> {
        AggregatedVaultMetrics::compute_for(
            &self.vault,
            &self.snapshot(),
            self.prices().as_ref(),
            self.external_yield(),
        )
    }

    pub fn user(&self) -> UserTestContext {
        let snapshot = self
            .snapshot()
            .loaded()
            .cloned()
            .unwrap_or_default();
        UserTestContext::new(self.vault, snapshot)
    }
}
