//! Trigonometric and hyperbolic functions.
//!
//! Functions are evaluated in binary floating point at a working precision
//! derived from the context (plus guard digits), so results keep their digits
//! and range far beyond `f64`. The value is then carried into a decimal:
//! first rounded to the context precision, then (for every function except
//! `asinh`) to [`DISPLAY_PLACES`] fractional digits.

use std::str::FromStr;

use astro_float::{BigFloat, Consts, Radix, RoundingMode as FloatRounding};
use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Evaluation;
use super::context::MathContext;
use super::decimal::{round_places, round_significant};
use super::error::CalcError;

/// Fractional digits kept in rounded transcendental results.
pub const DISPLAY_PLACES: i64 = 15;

/// The tangent is reported as undefined when |cos| < 10^-TANGENT_EPSILON_PLACES.
pub const TANGENT_EPSILON_PLACES: i64 = 15;

/// Text returned instead of a tangent at a singularity.
pub const TANGENT_UNDEFINED: &str = "Undefined (angle is π/2 + nπ)";

/// Extra decimal digits carried beyond the requested precision.
const GUARD_DIGITS: u64 = 10;

/// Working digits never drop below this, so the tangent check and the
/// fifteen-place rounding stay exact at low precision settings.
const MIN_WORKING_DIGITS: u64 = 32;

const ROUNDING: FloatRounding = FloatRounding::ToEven;

const UNIT_INTERVAL: &str = "input value must be between -1 and 1";
const AT_LEAST_ONE: &str = "input value must be greater than or equal to 1";
const OPEN_UNIT_INTERVAL: &str = "input value must be strictly between -1 and 1";

/// Unit of the angles passed to `sin`, `cos` and `tan`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    /// Angles are in radians.
    #[default]
    Radians,
    /// Angles are in degrees.
    Degrees,
}

impl AngleMode {
    /// Convert an angle in this unit to radians (`angle × π / 180` for degrees).
    fn to_radians(self, angle: BigFloat, working: &mut Working) -> BigFloat {
        match self {
            Self::Radians => angle,
            Self::Degrees => {
                let p = working.bits;
                let pi = working.consts.pi(p, ROUNDING);
                angle
                    .mul(&pi, p, ROUNDING)
                    .div(&BigFloat::from_f64(180.0, p), p, ROUNDING)
            }
        }
    }
}

/// A supported transcendental function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
}

impl Function {
    /// Lowercase function name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Asinh => "asinh",
            Self::Acosh => "acosh",
            Self::Atanh => "atanh",
        }
    }

    /// Whether the input is an angle subject to [`AngleMode`].
    pub fn takes_angle(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }

    /// Whether results are rounded to [`DISPLAY_PLACES`].
    pub fn is_display_rounded(self) -> bool {
        !matches!(self, Self::Asinh)
    }

    /// Reject inputs outside the function's domain.
    pub fn check_domain(self, value: f64) -> Result<(), CalcError> {
        let valid = match self {
            Self::Asin | Self::Acos => (-1.0..=1.0).contains(&value),
            Self::Acosh => value >= 1.0,
            Self::Atanh => value.abs() < 1.0,
            _ => true,
        };
        if valid {
            return Ok(());
        }
        let message = match self {
            Self::Acosh => AT_LEAST_ONE,
            Self::Atanh => OPEN_UNIT_INTERVAL,
            _ => UNIT_INTERVAL,
        };
        Err(CalcError::domain(message))
    }

    /// Evaluate at working precision; `None` marks a singularity.
    fn apply(self, x: &BigFloat, working: &mut Working) -> Result<Option<BigFloat>, CalcError> {
        let p = working.bits;
        let cc = &mut working.consts;
        let value = match self {
            Self::Sin => x.sin(p, ROUNDING, cc),
            Self::Cos => x.cos(p, ROUNDING, cc),
            Self::Tan => {
                let cos = x.cos(p, ROUNDING, cc);
                if to_decimal(&cos, cc)?.abs() < tangent_epsilon() {
                    return Ok(None);
                }
                x.sin(p, ROUNDING, cc).div(&cos, p, ROUNDING)
            }
            Self::Asin => x.asin(p, ROUNDING, cc),
            Self::Acos => x.acos(p, ROUNDING, cc),
            Self::Atan => x.atan(p, ROUNDING, cc),
            Self::Sinh => x.sinh(p, ROUNDING, cc),
            Self::Cosh => x.cosh(p, ROUNDING, cc),
            Self::Tanh => x.tanh(p, ROUNDING, cc),
            Self::Asinh => x.asinh(p, ROUNDING, cc),
            Self::Acosh => x.acosh(p, ROUNDING, cc),
            Self::Atanh => x.atanh(p, ROUNDING, cc),
        };
        Ok(Some(value))
    }
}

/// Binary working precision and the constant cache shared by one batch.
struct Working {
    bits: usize,
    consts: Consts,
}

impl Working {
    fn new(ctx: &MathContext) -> Result<Self, CalcError> {
        let digits = u64::from(ctx.precision()).max(MIN_WORKING_DIGITS) + GUARD_DIGITS;
        // log2(10) < 3.33, plus one word of slack
        let bits = (digits * 333 / 100 + 64) as usize;
        let consts = Consts::new()
            .map_err(|e| CalcError::evaluation(format!("cannot initialize constants: {:?}", e)))?;
        Ok(Self { bits, consts })
    }

    /// Load an input from its shortest decimal form.
    fn load(&mut self, value: f64) -> Result<BigFloat, CalcError> {
        if !value.is_finite() {
            return Err(CalcError::NonFinite);
        }
        let text = format!("{:e}", value);
        let x = BigFloat::parse(&text, Radix::Dec, self.bits, ROUNDING, &mut self.consts);
        if x.is_nan() {
            return Err(CalcError::invalid_number(text));
        }
        Ok(x)
    }
}

fn tangent_epsilon() -> BigDecimal {
    BigDecimal::new(BigInt::from(1u8), TANGENT_EPSILON_PLACES)
}

/// Convert a working value into a decimal carrying all of its digits.
fn to_decimal(x: &BigFloat, cc: &mut Consts) -> Result<BigDecimal, CalcError> {
    if x.is_nan() || x.is_inf() {
        return Err(CalcError::NonFinite);
    }
    let text = x
        .format(Radix::Dec, ROUNDING, cc)
        .map_err(|e| CalcError::evaluation(format!("cannot format result: {:?}", e)))?;
    BigDecimal::from_str(&text).map_err(|e| CalcError::invalid_number(format!("{}: {}", text, e)))
}

/// Evaluate `function` at a single point.
///
/// `mode` only applies to functions that take an angle.
pub fn evaluate(
    ctx: &MathContext,
    function: Function,
    value: f64,
    mode: AngleMode,
) -> Result<Evaluation, CalcError> {
    function.check_domain(value)?;
    let mut working = Working::new(ctx)?;
    evaluate_with(ctx, &mut working, function, value, mode)
}

fn evaluate_with(
    ctx: &MathContext,
    working: &mut Working,
    function: Function,
    value: f64,
    mode: AngleMode,
) -> Result<Evaluation, CalcError> {
    let mut x = working.load(value)?;
    if function.takes_angle() {
        x = mode.to_radians(x, working);
    }

    let Some(raw) = function.apply(&x, working)? else {
        return Ok(Evaluation::Undefined(TANGENT_UNDEFINED));
    };

    let result = round_significant(&to_decimal(&raw, &mut working.consts)?, ctx.precision());
    if function.is_display_rounded() {
        Ok(Evaluation::Value(round_places(&result, DISPLAY_PLACES)))
    } else {
        Ok(Evaluation::Value(result))
    }
}

/// Evaluate `function` over every value.
///
/// All values are domain-checked before any is evaluated, so one invalid
/// input fails the whole batch.
pub fn evaluate_all(
    ctx: &MathContext,
    function: Function,
    values: &[f64],
    mode: AngleMode,
) -> Result<Vec<Evaluation>, CalcError> {
    values
        .iter()
        .try_for_each(|&value| function.check_domain(value))?;
    let mut working = Working::new(ctx)?;
    values
        .iter()
        .map(|&value| evaluate_with(ctx, &mut working, function, value, mode))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn eval(function: Function, value: f64, mode: AngleMode) -> String {
        evaluate(&MathContext::default(), function, value, mode)
            .unwrap()
            .to_text()
    }

    #[test]
    fn test_degrees_conversion() {
        assert_eq!(eval(Function::Sin, 90.0, AngleMode::Degrees), "1");
        assert_eq!(eval(Function::Cos, 60.0, AngleMode::Degrees), "0.5");
        assert_eq!(eval(Function::Sin, 30.0, AngleMode::Degrees), "0.5");
        assert_eq!(eval(Function::Cos, 180.0, AngleMode::Degrees), "-1");
    }

    #[test]
    fn test_radians_is_default() {
        assert_eq!(AngleMode::default(), AngleMode::Radians);
        assert_eq!(eval(Function::Sin, 0.0, AngleMode::Radians), "0");
        assert_eq!(eval(Function::Cos, 0.0, AngleMode::Radians), "1");
    }

    #[test]
    fn test_tangent() {
        assert_eq!(eval(Function::Tan, FRAC_PI_4, AngleMode::Radians), "1");
        assert_eq!(eval(Function::Tan, 45.0, AngleMode::Degrees), "1");
        assert_eq!(eval(Function::Tan, 0.0, AngleMode::Radians), "0");
    }

    #[test]
    fn test_tangent_singularity_is_sentinel() {
        for (angle, mode) in [
            (FRAC_PI_2, AngleMode::Radians),
            (-FRAC_PI_2, AngleMode::Radians),
            (90.0, AngleMode::Degrees),
            (270.0, AngleMode::Degrees),
        ] {
            let result = evaluate(&MathContext::default(), Function::Tan, angle, mode).unwrap();
            assert_eq!(result, Evaluation::Undefined(TANGENT_UNDEFINED));
        }
    }

    #[test]
    fn test_results_rounded_to_fifteen_places() {
        assert_eq!(eval(Function::Asin, 1.0, AngleMode::Radians), "1.570796326794897");
        assert_eq!(eval(Function::Atan, 1.0, AngleMode::Radians), "0.785398163397448");
        assert_eq!(eval(Function::Tanh, 1.0, AngleMode::Radians), "0.761594155955765");
        assert_eq!(eval(Function::Atanh, 0.5, AngleMode::Radians), "0.549306144334055");
    }

    #[test]
    fn test_precision_applies_before_display_rounding() {
        let ctx = MathContext::new(5).unwrap();
        let result = evaluate(&ctx, Function::Atan, 1.0, AngleMode::Radians).unwrap();
        assert_eq!(result.to_text(), "0.7854");
    }

    #[test]
    fn test_asinh_is_not_display_rounded() {
        assert_eq!(
            eval(Function::Asinh, 1.0, AngleMode::Radians),
            "0.88137358701954302523"
        );

        let ctx = MathContext::new(3).unwrap();
        let result = evaluate(&ctx, Function::Asinh, 1.0, AngleMode::Radians).unwrap();
        assert_eq!(result.to_text(), "0.881");
    }

    #[test]
    fn test_large_results_keep_their_digits() {
        assert_eq!(eval(Function::Cosh, 5.0, AngleMode::Radians), "74.209948524787844");
        assert_eq!(
            eval(Function::Sinh, 10.0, AngleMode::Radians),
            "11013.232874703393377"
        );
    }

    #[test]
    fn test_high_precision_is_limited_to_display_places() {
        let ctx = MathContext::new(40).unwrap();
        let result = evaluate(&ctx, Function::Sin, 1.0, AngleMode::Radians).unwrap();
        assert_eq!(result.to_text(), "0.841470984807897");

        let result = evaluate(&ctx, Function::Asinh, 1.0, AngleMode::Radians).unwrap();
        assert_eq!(
            result.to_text(),
            "0.8813735870195430252326093249797923090282"
        );
    }

    #[test]
    fn test_hyperbolic_identities() {
        assert_eq!(eval(Function::Sinh, 0.0, AngleMode::Radians), "0");
        assert_eq!(eval(Function::Cosh, 0.0, AngleMode::Radians), "1");
        assert_eq!(eval(Function::Acosh, 1.0, AngleMode::Radians), "0");
        assert_eq!(eval(Function::Acos, 1.0, AngleMode::Radians), "0");
    }

    #[test]
    fn test_domain_errors() {
        let ctx = MathContext::default();
        let err = evaluate(&ctx, Function::Asin, 2.0, AngleMode::Radians).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Domain error: input value must be between -1 and 1"
        );
        let err = evaluate(&ctx, Function::Acos, -1.5, AngleMode::Radians).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Domain error: input value must be between -1 and 1"
        );
        let err = evaluate(&ctx, Function::Acosh, 0.5, AngleMode::Radians).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Domain error: input value must be greater than or equal to 1"
        );
        for boundary in [1.0, -1.0] {
            let err = evaluate(&ctx, Function::Atanh, boundary, AngleMode::Radians).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Domain error: input value must be strictly between -1 and 1"
            );
        }
    }

    #[test]
    fn test_results_beyond_float_range() {
        let text = eval(Function::Sinh, 1000.0, AngleMode::Radians);
        assert!(text.starts_with("9.85"), "{}", text);
        assert!(text.ends_with("e+433"), "{}", text);

        let text = eval(Function::Cosh, -1000.0, AngleMode::Radians);
        assert!(text.ends_with("e+433"), "{}", text);
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        let err = evaluate(
            &MathContext::default(),
            Function::Sinh,
            f64::INFINITY,
            AngleMode::Radians,
        )
        .unwrap_err();
        assert_eq!(err, CalcError::NonFinite);
    }

    #[test]
    fn test_evaluate_all_checks_every_value_first() {
        let ctx = MathContext::default();
        let err =
            evaluate_all(&ctx, Function::Asin, &[0.5, 1.0, 3.0], AngleMode::Radians).unwrap_err();
        assert!(matches!(err, CalcError::Domain(_)));

        let results = evaluate_all(&ctx, Function::Sin, &[0.0, 90.0], AngleMode::Degrees).unwrap();
        let texts: Vec<_> = results.iter().map(Evaluation::to_text).collect();
        assert_eq!(texts, vec!["0", "1"]);
    }

    #[test]
    fn test_mode_deserializes_lowercase() {
        let mode: AngleMode = serde_json::from_str("\"degrees\"").unwrap();
        assert_eq!(mode, AngleMode::Degrees);
        assert!(serde_json::from_str::<AngleMode>("\"gradians\"").is_err());
    }
}
