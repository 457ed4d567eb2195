//! Amounts typed by the user in an amount field.
//!
//! Keystroke input never fails: malformed text reads as a zero amount.
use juiced_types::Amount;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::debug;

/// Parses a decimal string into an amount with `decimals` decimals.
///
/// Fraction digits beyond `decimals` are dropped. Text that is not a plain
/// decimal number (signs, exponents, letters, several dots) gives a zero amount.
pub fn parse_units(text: &str, decimals: u8) -> Amount {
    let text = text.trim();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text, ""));

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(int_part) || !is_digits(frac_part) {
        debug!("Malformed amount input {text:?}, reading it as 0");
        return Amount::zero(decimals);
    }

    let decimals_len = usize::from(decimals);
    let frac_part = frac_part.get(..decimals_len).unwrap_or(frac_part);
    let digits = format!("{int_part}{frac_part:0<decimals_len$}");

    let raw = BigUint::parse_bytes(digits.as_bytes(), 10).unwrap_or_else(BigUint::zero);
    Amount { raw, decimals }
}

/// Amount to use for a value typed against an available balance.
///
/// An empty field is `None` (nothing entered), which is different from a zero
/// amount. An amount above `max_available` is replaced by `max_available` itself.
/// Without a known balance the parsed amount is returned as is.
pub fn normalize_bounded_input(
    text: &str,
    decimals: u8,
    max_available: Option<&Amount>,
) -> Option<Amount> {
    if text.is_empty() {
        return None;
    }
    let amount = parse_units(text, decimals);
    match max_available {
        Some(max) if amount.raw > max.raw => {
            debug!("Input {text} is above the available {max}, clamping");
            Some(max.clone())
        }
        _ => Some(amount),
    }
}

/// Whether an entered amount can be submitted: something non-zero was entered and
/// it does not exceed what is available.
pub fn can_submit(amount: Option<&Amount>, available: &Amount) -> bool {
    match amount {
        Some(amount) => !amount.is_zero() && amount.raw <= available.raw,
        None => false,
    }
}
