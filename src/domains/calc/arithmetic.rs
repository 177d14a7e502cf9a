//! Basic arithmetic over decimal operands.
//!
//! Every intermediate result is rounded to the context precision. No other
//! rounding is applied.

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, One, Zero};

use super::Evaluation;
use super::context::MathContext;
use super::decimal::{digit_count, round_significant};
use super::error::CalcError;

/// Text returned instead of a quotient when a divisor is zero.
pub const DIVISION_BY_ZERO: &str = "Cannot divide by zero";

/// Sum of all operands, starting from zero.
pub fn sum(ctx: &MathContext, operands: &[BigDecimal]) -> BigDecimal {
    operands.iter().fold(BigDecimal::zero(), |acc, x| {
        round_significant(&(acc + x), ctx.precision())
    })
}

/// First operand minus each subsequent operand.
pub fn difference(ctx: &MathContext, operands: &[BigDecimal]) -> Result<BigDecimal, CalcError> {
    let (first, rest) = match operands {
        [first, rest @ ..] if !rest.is_empty() => (first, rest),
        _ => {
            return Err(CalcError::invalid_argument(
                "Subtraction requires at least two numbers",
            ));
        }
    };
    Ok(rest.iter().fold(first.clone(), |acc, x| {
        round_significant(&(acc - x), ctx.precision())
    }))
}

/// Product of all operands, starting from one.
pub fn product(ctx: &MathContext, operands: &[BigDecimal]) -> BigDecimal {
    operands.iter().fold(BigDecimal::one(), |acc, x| {
        round_significant(&(acc * x), ctx.precision())
    })
}

/// First operand divided by each subsequent operand.
///
/// A zero anywhere among the divisors yields [`Evaluation::Undefined`].
pub fn quotient(ctx: &MathContext, operands: &[BigDecimal]) -> Result<Evaluation, CalcError> {
    let (first, rest) = match operands {
        [first, rest @ ..] if !rest.is_empty() => (first, rest),
        _ => {
            return Err(CalcError::invalid_argument(
                "Division requires at least two numbers",
            ));
        }
    };
    if rest.iter().any(Zero::is_zero) {
        return Ok(Evaluation::Undefined(DIVISION_BY_ZERO));
    }
    let value = rest
        .iter()
        .fold(first.clone(), |acc, divisor| divide(&acc, divisor, ctx.precision()));
    Ok(Evaluation::Value(value))
}

/// Divide `lhs` by a non-zero `rhs`, rounded to `precision` significant digits.
fn divide(lhs: &BigDecimal, rhs: &BigDecimal, precision: u32) -> BigDecimal {
    let (num, num_scale) = lhs.as_bigint_and_exponent();
    let (den, den_scale) = rhs.as_bigint_and_exponent();

    // Two guard digits beyond the precision; the truncated quotient never
    // flips a half-up decision because the true value is at least as large.
    let shift = i64::from(precision) + 2 + digit_count(&den);
    let scaled = num * BigInt::from(10u8).pow(shift as u32);
    let raw = BigDecimal::new(scaled / den, num_scale - den_scale + shift);

    round_significant(&raw, precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::calc::decimal::to_text;
    use std::str::FromStr;

    fn nums(values: &[&str]) -> Vec<BigDecimal> {
        values
            .iter()
            .map(|v| BigDecimal::from_str(v).unwrap())
            .collect()
    }

    fn ctx(precision: u32) -> MathContext {
        MathContext::new(precision).unwrap()
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        assert_eq!(to_text(&sum(&ctx(20), &[])), "0");
    }

    #[test]
    fn test_sum_left_to_right() {
        let result = sum(&ctx(20), &nums(&["0.1", "0.2", "0.3"]));
        assert_eq!(to_text(&result), "0.6");
    }

    #[test]
    fn test_sum_keeps_large_magnitudes() {
        let result = sum(&ctx(20), &nums(&["1e50", "1e50"]));
        assert_eq!(to_text(&result), "2e+50");
    }

    #[test]
    fn test_sum_rounds_to_precision() {
        let result = sum(&ctx(3), &nums(&["1.234", "1"]));
        assert_eq!(to_text(&result), "2.23");
    }

    #[test]
    fn test_difference() {
        let result = difference(&ctx(20), &nums(&["10", "3", "2.5"])).unwrap();
        assert_eq!(to_text(&result), "4.5");
    }

    #[test]
    fn test_difference_requires_two_operands() {
        for operands in [nums(&[]), nums(&["5"])] {
            let err = difference(&ctx(20), &operands).unwrap_err();
            assert_eq!(err.to_string(), "Subtraction requires at least two numbers");
        }
    }

    #[test]
    fn test_product() {
        assert_eq!(to_text(&product(&ctx(20), &[])), "1");
        let result = product(&ctx(20), &nums(&["1.5", "-2", "4"]));
        assert_eq!(to_text(&result), "-12");
    }

    #[test]
    fn test_quotient_default_precision() {
        let result = quotient(&ctx(20), &nums(&["1", "3"])).unwrap();
        assert_eq!(result.to_text(), "0.33333333333333333333");
    }

    #[test]
    fn test_quotient_custom_precision() {
        let result = quotient(&ctx(5), &nums(&["1", "3"])).unwrap();
        assert_eq!(result.to_text(), "0.33333");

        let result = quotient(&ctx(5), &nums(&["2", "3"])).unwrap();
        assert_eq!(result.to_text(), "0.66667");
    }

    #[test]
    fn test_quotient_sequential() {
        let result = quotient(&ctx(20), &nums(&["100", "5", "-4"])).unwrap();
        assert_eq!(result.to_text(), "-5");

        let result = quotient(&ctx(20), &nums(&["0.75", "0.25"])).unwrap();
        assert_eq!(result.to_text(), "3");
    }

    #[test]
    fn test_quotient_zero_divisor_is_sentinel() {
        let result = quotient(&ctx(20), &nums(&["10", "2", "0", "5"])).unwrap();
        assert_eq!(result, Evaluation::Undefined(DIVISION_BY_ZERO));
        assert_eq!(result.to_text(), "Cannot divide by zero");
    }

    #[test]
    fn test_quotient_zero_dividend_is_fine() {
        let result = quotient(&ctx(20), &nums(&["0", "7"])).unwrap();
        assert_eq!(result.to_text(), "0");
    }

    #[test]
    fn test_quotient_requires_two_operands() {
        let err = quotient(&ctx(20), &nums(&["10"])).unwrap_err();
        assert_eq!(err.to_string(), "Division requires at least two numbers");
    }
}
