//! Decimal conversion, rounding and formatting helpers.

use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode, Zero};

use super::error::CalcError;

/// Smallest decimal exponent printed in plain notation.
const PLAIN_MIN_EXPONENT: i64 = -7;

/// Largest decimal exponent printed in plain notation (exclusive).
const PLAIN_MAX_EXPONENT: i64 = 21;

/// Convert an `f64` into the shortest decimal that round-trips to it.
pub fn from_f64(value: f64) -> Result<BigDecimal, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::NonFinite);
    }
    // `{:e}` yields the shortest round-trip digits, e.g. `1e50` or `5.000000000000001e-1`
    BigDecimal::from_str(&format!("{:e}", value))
        .map_err(|e| CalcError::invalid_number(format!("{}: {}", value, e)))
}

/// Number of decimal digits in the magnitude of `value`.
pub fn digit_count(value: &BigInt) -> i64 {
    value.magnitude().to_string().len() as i64
}

/// Round `value` to `precision` significant digits, half away from zero.
pub fn round_significant(value: &BigDecimal, precision: u32) -> BigDecimal {
    if value.is_zero() {
        return BigDecimal::zero();
    }
    let (digits, scale) = value.as_bigint_and_exponent();
    let exponent = digit_count(&digits) - 1 - scale;
    let target_scale = i64::from(precision) - 1 - exponent;
    if target_scale >= scale {
        return value.clone();
    }
    value.with_scale_round(target_scale, RoundingMode::HalfUp)
}

/// Round `value` to exactly `places` fractional digits, half away from zero.
pub fn round_places(value: &BigDecimal, places: i64) -> BigDecimal {
    value.with_scale_round(places, RoundingMode::HalfUp)
}

/// Render a decimal the way the calculator reports results.
///
/// Trailing zeros are dropped. Exponents in `-7 < e < 21` print in plain
/// notation, anything else as `d.ddde+N` / `d.ddde-N`.
pub fn to_text(value: &BigDecimal) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let (int, scale) = value.normalized().as_bigint_and_exponent();
    let int = int.to_string();
    let (sign, digits) = match int.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int.as_str()),
    };
    let exponent = digits.len() as i64 - 1 - scale;

    if exponent <= PLAIN_MIN_EXPONENT || exponent >= PLAIN_MAX_EXPONENT {
        let (lead, tail) = digits.split_at(1);
        let mantissa = if tail.is_empty() {
            lead.to_string()
        } else {
            format!("{}.{}", lead, tail)
        };
        let exp_sign = if exponent >= 0 { "+" } else { "-" };
        return format!("{}{}e{}{}", sign, mantissa, exp_sign, exponent.abs());
    }

    let body = if exponent < 0 {
        format!("0.{}{}", "0".repeat((-exponent - 1) as usize), digits)
    } else {
        let int_len = (exponent + 1) as usize;
        if digits.len() > int_len {
            let (whole, frac) = digits.split_at(int_len);
            format!("{}.{}", whole, frac)
        } else {
            format!("{}{}", digits, "0".repeat(int_len - digits.len()))
        }
    };
    format!("{}{}", sign, body)
}
