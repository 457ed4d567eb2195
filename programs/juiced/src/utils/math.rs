use num_bigint::BigUint;

/// `10^exponent` as an arbitrary precision integer
pub fn ten_pow(exponent: u8) -> BigUint {
    BigUint::from(10_u32).pow(u32::from(exponent))
}

/// `numerator / denominator`, or 0 when the denominator is 0 or the result is not finite
pub fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let ratio = numerator / denominator;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}

/// Product of display values, with anything non-finite collapsed to 0
pub fn finite_product(factors: &[f64]) -> f64 {
    let product: f64 = factors.iter().product();
    if product.is_finite() {
        product
    } else {
        0.0
    }
}
