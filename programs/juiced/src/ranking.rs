//! Order in which the vault list is displayed.
use std::{cmp::Ordering, collections::HashMap};

use juiced_types::VaultDescriptor;
use strum::{Display, EnumIter, EnumString};
pub use strum::IntoEnumIterator;

use crate::{metrics::AggregatedVaultMetrics, JuicedResult};

/// Column the vault list is sorted by, always in descending order
#[derive(EnumString, EnumIter, Display, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortFilter {
    /// User deposit in whole tokens, ties broken by APY
    #[default]
    Deposited,
    #[strum(to_string = "apr", serialize = "apy")]
    Apy,
    Tvl,
    /// Weekly reward value
    Incentive,
    Claimable,
}

impl SortFilter {
    fn compare(&self, a: &AggregatedVaultMetrics, b: &AggregatedVaultMetrics) -> Ordering {
        match self {
            SortFilter::Deposited => b
                .total_deposit
                .normalized()
                .total_cmp(&a.total_deposit.normalized())
                .then_with(|| b.apy.total_cmp(&a.apy)),
            SortFilter::Apy => b.apy.total_cmp(&a.apy),
            SortFilter::Tvl => b.tvl.total_cmp(&a.tvl),
            SortFilter::Incentive => b.reward_value.total_cmp(&a.reward_value),
            SortFilter::Claimable => b.reward_claimable.total_cmp(&a.reward_claimable),
        }
    }
}

/// Search and sort state of the vault list, as carried by the page query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaultQuery {
    pub search: Option<String>,
    pub filter: Option<SortFilter>,
}

impl VaultQuery {
    /// Builds a query from the raw `search` and `filter` query parameters.
    pub fn parse(search: Option<&str>, filter: Option<&str>) -> JuicedResult<Self> {
        let filter = filter.map(str::parse::<SortFilter>).transpose()?;
        Ok(Self {
            search: search.filter(|s| !s.is_empty()).map(str::to_string),
            filter,
        })
    }

    /// Selecting the active filter again clears it.
    pub fn toggle_filter(&mut self, filter: SortFilter) {
        self.filter = if self.filter == Some(filter) {
            None
        } else {
            Some(filter)
        };
    }
}

fn matches_search(vault: &VaultDescriptor, term: &str) -> bool {
    [vault.name, vault.reward_symbol, vault.vault_address]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

/// Vaults of the registry in display order.
///
/// Until every vault has fetched metrics the registry order is kept. A search term
/// only filters, keeping the registry order. Otherwise vaults are sorted by the
/// selected filter.
pub fn rank_vaults<'a>(
    vaults: &'a [VaultDescriptor],
    metrics: &HashMap<&str, AggregatedVaultMetrics>,
    query: &VaultQuery,
) -> Vec<&'a VaultDescriptor> {
    let mut ranked: Vec<&VaultDescriptor> = vaults.iter().collect();
    let all_loaded = vaults
        .iter()
        .all(|vault| metrics.get(vault.vault_address).is_some_and(|m| m.is_fetched));
    if !all_loaded {
        return ranked;
    }

    if let Some(search) = &query.search {
        let term = search.to_lowercase();
        ranked.retain(|vault| matches_search(vault, &term));
        return ranked;
    }

    let filter = query.filter.unwrap_or_default();
    ranked.sort_by(|a, b| {
        match (metrics.get(a.vault_address), metrics.get(b.vault_address)) {
            (Some(a), Some(b)) => filter.compare(a, b),
            _ => Ordering::Equal,
        }
    });
    ranked
}

#[cfg(test)]
mod tests {
    use juiced_types::{Amount, VaultVersion};

    use super::*;
    use crate::yields::YieldFigure;

    const VAULTS: [VaultDescriptor; 3] = [
        descriptor("yvAjnaDAI", "AJNA", "0xAAA"),
        descriptor("yvAjnaWETH", "AJNA", "0xBBB"),
        descriptor("yvUSDC", "OP", "0xCCC"),
    ];

    const fn descriptor(name: &'static str, reward_symbol: &'static str, vault_address: &'static str) -> VaultDescriptor {
        VaultDescriptor {
            name,
            token_symbol: "TKN",
            reward_symbol,
            decimals: 18,
            chain_id: 1,
            vault_address,
            token_address: "0x1",
            staking_address: "0x2",
            reward_address: "0x3",
            auto_compounding_address: "0x4",
            version: VaultVersion::V2,
        }
    }

    fn metrics(vault_address: &'static str, deposit: u64, apy: f64, tvl: f64) -> AggregatedVaultMetrics {
        AggregatedVaultMetrics {
            vault_address,
            total_deposit: Amount::new(deposit, 18),
            total_deposit_usd: 0.0,
            projected_reward_apy: apy,
            apy,
            tvl,
            reward_value: tvl / 100.0,
            reward_claimable: 0.0,
            external_yield: YieldFigure::default(),
            is_fetched: true,
        }
    }

    fn all_metrics() -> HashMap<&'static str, AggregatedVaultMetrics> {
        [
            metrics("0xAAA", 0, 5.0, 10.0),
            metrics("0xBBB", 0, 9.0, 30.0),
            metrics("0xCCC", 7, 1.0, 20.0),
        ]
        .into_iter()
        .map(|m| (m.vault_address, m))
        .collect()
    }

    fn names(ranked: &[&VaultDescriptor]) -> Vec<&'static str> {
        ranked.iter().map(|v| v.name).collect()
    }

    #[test]
    fn registry_order_until_loaded() {
        let mut metrics = all_metrics();
        metrics.remove("0xAAA");
        let ranked = rank_vaults(&VAULTS, &metrics, &VaultQuery::default());
        assert_eq!(names(&ranked), ["yvAjnaDAI", "yvAjnaWETH", "yvUSDC"]);
    }

    #[test]
    fn default_is_deposit_then_apy() {
        let ranked = rank_vaults(&VAULTS, &all_metrics(), &VaultQuery::default());
        assert_eq!(names(&ranked), ["yvUSDC", "yvAjnaWETH", "yvAjnaDAI"]);
    }

    #[test]
    fn deposits_compare_across_decimals() {
        let deposited = |vault_address, raw: u64, decimals| AggregatedVaultMetrics {
            total_deposit: Amount::new(raw, decimals),
            ..metrics(vault_address, 0, 1.0, 0.0)
        };
        // 1 DAI against 1_000_000 USDC
        let metrics: HashMap<_, _> = [
            deposited("0xAAA", 1_000_000_000_000_000_000, 18),
            deposited("0xBBB", 0, 18),
            deposited("0xCCC", 1_000_000_000_000, 6),
        ]
        .into_iter()
        .map(|m| (m.vault_address, m))
        .collect();
        let ranked = rank_vaults(&VAULTS, &metrics, &VaultQuery::default());
        assert_eq!(names(&ranked), ["yvUSDC", "yvAjnaDAI", "yvAjnaWETH"]);
    }

    #[test]
    fn sorts_by_filter() {
        let query = VaultQuery::parse(None, Some("tvl")).unwrap();
        let ranked = rank_vaults(&VAULTS, &all_metrics(), &query);
        assert_eq!(names(&ranked), ["yvAjnaWETH", "yvUSDC", "yvAjnaDAI"]);

        let query = VaultQuery::parse(None, Some("apr")).unwrap();
        let ranked = rank_vaults(&VAULTS, &all_metrics(), &query);
        assert_eq!(names(&ranked), ["yvAjnaWETH", "yvAjnaDAI", "yvUSDC"]);
    }

    #[test]
    fn search_filters_without_sorting() {
        let query = VaultQuery::parse(Some("AJNA"), Some("tvl")).unwrap();
        let ranked = rank_vaults(&VAULTS, &all_metrics(), &query);
        assert_eq!(names(&ranked), ["yvAjnaDAI", "yvAjnaWETH"]);

        let query = VaultQuery::parse(Some("0xccc"), None).unwrap();
        assert_eq!(names(&rank_vaults(&VAULTS, &all_metrics(), &query)), ["yvUSDC"]);
    }

    #[test]
    fn filter_names() {
        assert_eq!("apy".parse::<SortFilter>().unwrap(), SortFilter::Apy);
        assert_eq!("APR".parse::<SortFilter>().unwrap(), SortFilter::Apy);
        assert_eq!(SortFilter::Apy.to_string(), "apr");
        assert_eq!(SortFilter::Incentive.to_string(), "incentive");
        assert_eq!(SortFilter::iter().count(), 5);
        assert_eq!(
            VaultQuery::parse(None, Some("volume")),
            Err(crate::JuicedError::UnknownSortFilter)
        );
    }

    #[test]
    fn toggling_the_active_filter_clears_it() {
        let mut query = VaultQuery::default();
        query.toggle_filter(SortFilter::Tvl);
        assert_eq!(query.filter, Some(SortFilter::Tvl));
        query.toggle_filter(SortFilter::Tvl);
        assert_eq!(query.filter, None);
    }
}
