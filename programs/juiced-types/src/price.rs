#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of decimals of the prices returned by the pricing API
pub const PRICE_FEED_DECIMALS: u64 = 6;

#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Price {
    // integer + exponent representation
    // decimal price would be
    // as integer: 1001234, exponent: 6
    // as float:   1.001234

    // value is the scaled integer
    // for example, 1001234 for DAI
    pub value: u64,

    // exponent represents the number of decimals
    // for example, 6 for every price of the pricing API
    pub exp: u64,
}

impl Price {
    /// Price as delivered by the pricing API (USD with 6 decimals)
    pub const fn from_feed(value: u64) -> Self {
        Self {
            value,
            exp: PRICE_FEED_DECIMALS,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    pub fn normalized(&self) -> f64 {
        f64::from(*self)
    }

    /// Value rescaled to `decimals` decimals, rounding down. `None` on overflow.
    pub fn to_scaled_value(&self, decimals: u8) -> Option<u128> {
        let exp = u32::try_from(self.exp).ok()?;
        let decimals = u32::from(decimals);
        let value: u128 = self.value.into();
        if exp > decimals {
            Some(value / 10_u128.checked_pow(exp - decimals)?)
        } else {
            value.checked_mul(10_u128.checked_pow(decimals - exp)?)
        }
    }

    fn to_scaled_value_u64(&self, exp: u64) -> Option<u128> {
        self.to_scaled_value(u8::try_from(exp).ok()?)
    }
}

impl From<Price> for f64 {
    fn from(val: Price) -> Self {
        val.value as f64 / 10_f64.powi(val.exp as i32)
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        let exp = self.exp.max(other.exp);
        match (self.to_scaled_value_u64(exp), other.to_scaled_value_u64(exp)) {
            (Some(a), Some(b)) => a == b,
            // out of range exponents are only compared as written
            _ => self.value == other.value && self.exp == other.exp,
        }
    }
}

impl Eq for Price {}
