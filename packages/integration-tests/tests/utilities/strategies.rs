#![allow(dead_code)]
use num_bigint::BigUint;
use proptest::prelude::*;

/// Raw amounts spread over the whole `u128` range and beyond
pub fn raw_amount() -> impl Strategy<Value = BigUint> {
    prop_oneof![
        Just(BigUint::from(0_u8)),
        any::<u64>().prop_map(BigUint::from),
        any::<u128>().prop_map(BigUint::from),
        (any::<u128>(), any::<u128>()).prop_map(|(hi, lo)| (BigUint::from(hi) << 128_u32) + lo),
    ]
}

/// Non-zero price per share between 0.000001 and a few million, for `decimals`
pub fn price_per_share(decimals: u8) -> impl Strategy<Value = BigUint> {
    let unit = BigUint::from(10_u32).pow(u32::from(decimals));
    (1_u64..5_000_000_000_000).prop_map(move |micro| {
        let raw = BigUint::from(micro) * &unit / BigUint::from(1_000_000_u32);
        if raw == BigUint::from(0_u8) {
            BigUint::from(1_u8)
        } else {
            raw
        }
    })
}

pub fn decimals() -> impl Strategy<Value = u8> {
    prop_oneof![Just(0_u8), Just(6_u8), Just(8_u8), Just(18_u8), 0_u8..=30]
}

/// Decimal strings as typed in an amount field
pub fn typed_amount() -> impl Strategy<Value = String> {
    "[0-9]{1,12}(\\.[0-9]{0,20})?"
}
