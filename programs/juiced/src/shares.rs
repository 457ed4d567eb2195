//! Conversions through a vault's price per share.
//!
//! A Yearn V3 vault quotes `pricePerShare` as the amount of underlying asset one
//! whole share is worth, scaled by the vault decimals. The staking and
//! auto-compounding wrappers share the decimals of the vault they wrap, so a
//! single `decimals` value describes every hop.
//!
//! All conversions use integer floor division. Rounding never goes up so a
//! displayed or submitted amount is never more than what can be redeemed.
use juiced_types::Amount;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::{utils::math::ten_pow, warn};

/// Divides `share_raw` through a price per share: `share_raw * 10^decimals / pps`.
///
/// This is the conversion applied to an amount typed in underlying units before it
/// is handed to a wrapper that accounts in vault shares.
///
/// # Panics
///
/// When `price_per_share_raw` is zero and `share_raw` is not. A zero price per
/// share only happens on an uninitialized vault, callers must check for it
/// (see [`shares_to_asset_or_zero`]).
pub fn shares_to_asset(share_raw: &BigUint, decimals: u8, price_per_share_raw: &BigUint) -> Amount {
    if share_raw.is_zero() {
        return Amount::zero(decimals);
    }
    assert!(
        !price_per_share_raw.is_zero(),
        "Converting shares with a zero price per share"
    );
    Amount {
        raw: share_raw * ten_pow(decimals) / price_per_share_raw,
        decimals,
    }
}

/// Two successive [`shares_to_asset`] hops: first through the outer wrapper price
/// per share, then through the inner vault one.
///
/// Each hop rounds down on its own, which is what redeeming through both
/// contracts does on-chain.
pub fn double_wrapped_shares_to_asset(
    share_raw: &BigUint,
    decimals: u8,
    outer_pps_raw: &BigUint,
    inner_pps_raw: &BigUint,
) -> Amount {
    let outer = shares_to_asset(share_raw, decimals, outer_pps_raw);
    shares_to_asset(&outer.raw, decimals, inner_pps_raw)
}

/// [`shares_to_asset`] for data that may not be loaded yet.
///
/// A missing amount or a missing or zero price per share yields a zero amount.
pub fn shares_to_asset_or_zero(
    share_raw: Option<&BigUint>,
    decimals: u8,
    price_per_share_raw: Option<&BigUint>,
) -> Amount {
    match (share_raw, price_per_share_raw) {
        (Some(shares), Some(pps)) if !pps.is_zero() => shares_to_asset(shares, decimals, pps),
        (Some(shares), _) if !shares.is_zero() => {
            warn!("No price per share available to convert {shares} shares, using 0");
            Amount::zero(decimals)
        }
        _ => Amount::zero(decimals),
    }
}

/// [`double_wrapped_shares_to_asset`] for data that may not be loaded yet.
pub fn double_wrapped_shares_to_asset_or_zero(
    share_raw: Option<&BigUint>,
    decimals: u8,
    outer_pps_raw: Option<&BigUint>,
    inner_pps_raw: Option<&BigUint>,
) -> Amount {
    let outer = shares_to_asset_or_zero(share_raw, decimals, outer_pps_raw);
    shares_to_asset_or_zero(Some(&outer.raw), decimals, inner_pps_raw)
}

/// Underlying value of a share balance: `shares * pps / 10^decimals`, rounded down.
///
/// A zero price per share values the shares at zero.
pub fn asset_value_of_shares(shares: &Amount, price_per_share_raw: &BigUint) -> Amount {
    Amount {
        raw: &shares.raw * price_per_share_raw / ten_pow(shares.decimals),
        decimals: shares.decimals,
    }
}

/// Underlying value of a balance of wrapper shares, valued through the wrapper
/// price per share and then through the vault price per share.
pub fn double_wrapped_asset_value_of_shares(
    shares: &Amount,
    outer_pps_raw: &BigUint,
    inner_pps_raw: &BigUint,
) -> Amount {
    let vault_shares = asset_value_of_shares(shares, outer_pps_raw);
    asset_value_of_shares(&vault_shares, inner_pps_raw)
}
