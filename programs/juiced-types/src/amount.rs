use std::fmt;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use rust_decimal::{Decimal, RoundingStrategy};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A token amount as read on-chain.
///
/// `raw` is the integer amount in the token's smallest unit and `decimals`
/// the number of decimals of the token, so the amount in tokens is
/// `raw / 10^decimals`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Amount {
    pub raw: BigUint,
    pub decimals: u8,
}

impl Amount {
    pub fn new(raw: impl Into<BigUint>, decimals: u8) -> Self {
        Self {
            raw: raw.into(),
            decimals,
        }
    }

    pub fn zero(decimals: u8) -> Self {
        Self {
            raw: BigUint::zero(),
            decimals,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Raw value of one whole token: `10^decimals`
    pub fn unit(decimals: u8) -> BigUint {
        BigUint::from(10_u32).pow(u32::from(decimals))
    }

    /// Amount in whole tokens, for display and price arithmetic.
    ///
    /// Precision is lost beyond what an `f64` can hold.
    pub fn normalized(&self) -> f64 {
        let raw = self.raw.to_f64().unwrap_or_default();
        raw / 10_f64.powi(i32::from(self.decimals))
    }

    /// Exact decimal representation, `None` when the amount does not fit in a [`Decimal`]
    /// (more than 28 decimals or a mantissa above 96 bits).
    pub fn to_decimal(&self) -> Option<Decimal> {
        let mantissa = self.raw.to_i128()?;
        Decimal::try_from_i128_with_scale(mantissa, u32::from(self.decimals)).ok()
    }

    /// Amount in whole tokens truncated to at most `max_fraction_digits` digits.
    pub fn format(&self, max_fraction_digits: u32) -> String {
        match self.to_decimal() {
            Some(value) => value
                .round_dp_with_strategy(max_fraction_digits, RoundingStrategy::ToZero)
                .normalize()
                .to_string(),
            None => {
                let full = self.to_string();
                match full.split_once('.') {
                    Some((int_part, frac_part)) => {
                        let keep = frac_part
                            .get(..max_fraction_digits as usize)
                            .unwrap_or(frac_part)
                            .trim_end_matches('0');
                        if keep.is_empty() {
                            int_part.to_string()
                        } else {
                            format!("{int_part}.{keep}")
                        }
                    }
                    None => full,
                }
            }
        }
    }
}

impl fmt::Display for Amount {
    /// Exact amount in whole tokens, without trailing zeros
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = Self::unit(self.decimals);
        let int_part = &self.raw / &unit;
        let frac_part = &self.raw % &unit;
        if frac_part.is_zero() {
            return write!(f, "{int_part}");
        }
        let frac = format!(
            "{:0>width$}",
            frac_part.to_str_radix(10),
            width = usize::from(self.decimals)
        );
        write!(f, "{int_part}.{}", frac.trim_end_matches('0'))
    }
}
