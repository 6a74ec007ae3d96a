use crate::value::FieldValue;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// Fractional digits kept for prices and percentages.
const SCALE: u32 = 2;

/// Largest exponent magnitude accepted in `1.5e3` form.
const MAX_EXPONENT: u32 = 28;

///
/// FixedPoint
///
/// A price or percentage rounded to two decimal places.
///
/// Addition is only offered as [`FixedPoint::checked_add`]; a total past
/// the range of [`Decimal`] comes back as `None`.
///

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedPoint(Decimal);

impl FixedPoint {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[must_use]
    pub fn from_hundredths(hundredths: i64) -> Self {
        Self(Decimal::new(hundredths, SCALE))
    }

    #[must_use]
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// `self + rhs`, or `None` when the sum overflows.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Nearest `f64`, for chart axes and JSON output.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

/// Error returned when a string is not a plain decimal number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFixedPointError(String);

impl fmt::Display for ParseFixedPointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a decimal number: {:?}", self.0)
    }
}

impl std::error::Error for ParseFixedPointError {}

impl FromStr for FixedPoint {
    type Err = ParseFixedPointError;

    /// Accepts `[-]digits[.digits]`, optionally followed by an exponent as
    /// serde_json writes large floats (`7e28`), within the range of
    /// [`Decimal`]. Digits past the second decimal place are rounded half
    /// away from zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseFixedPointError(s.to_string());
        let trimmed = s.trim();
        let (mantissa, exponent) = match trimmed.split_once(['e', 'E']) {
            Some((m, e)) => (m, Some(e)),
            None => (trimmed, None),
        };

        let unsigned = mantissa.strip_prefix('-').unwrap_or(mantissa);
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
        if int_part.is_empty() || !all_digits(int_part) || !all_digits(frac_part) {
            return Err(err());
        }

        let mut value = Decimal::from_str(mantissa).map_err(|_| err())?;
        if let Some(exp) = exponent {
            let exp: i32 = exp.strip_prefix('+').unwrap_or(exp).parse().map_err(|_| err())?;
            if exp.unsigned_abs() > MAX_EXPONENT {
                return Err(err());
            }
            for _ in 0..exp.unsigned_abs() {
                value = if exp > 0 {
                    value.checked_mul(Decimal::TEN)
                } else {
                    value.checked_div(Decimal::TEN)
                }
                .ok_or_else(err)?;
            }
        }

        let rounded = value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
        Ok(Self(if rounded.is_zero() { Decimal::ZERO } else { rounded }))
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<FixedPoint> for FieldValue {
    fn from(value: FixedPoint) -> Self {
        match serde_json::Number::from_f64(value.to_f64()) {
            Some(n) => FieldValue::Number(n),
            None => FieldValue::Text(value.to_string()),
        }
    }
}
