//! Amount conversion between major units (rupees) and gateway minor units (paise)
//!
//! Rounding into minor units is done with `Decimal`; `f64` only appears at the
//! storage edge.

use super::PaymentError;
use rust_decimal::prelude::*;

/// Minor units per major unit
const MINOR_PER_MAJOR: Decimal = Decimal::ONE_HUNDRED;

/// Convert a major-unit amount to gateway minor units
///
/// Rounds half away from zero: `12.345 -> 1235`, `12.344 -> 1234`.
/// Amounts that round to zero or below are rejected.
pub fn to_minor_units(amount: Decimal) -> Result<i64, PaymentError> {
    if amount <= Decimal::ZERO {
        return Err(PaymentError::InvalidAmount(format!(
            "amount must be positive, got {amount}"
        )));
    }

    let minor = amount
        .checked_mul(MINOR_PER_MAJOR)
        .ok_or_else(|| PaymentError::InvalidAmount(format!("amount {amount} is too large")))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let minor = minor
        .to_i64()
        .ok_or_else(|| PaymentError::InvalidAmount(format!("amount {amount} is too large")))?;

    if minor <= 0 {
        return Err(PaymentError::InvalidAmount(format!(
            "amount {amount} is below the smallest currency unit"
        )));
    }
    Ok(minor)
}

/// Convert gateway minor units back to a major-unit amount
///
/// A single correctly rounded division yields the nearest `f64` to the exact
/// quotient.
pub fn from_minor_units(minor: i64) -> f64 {
    minor as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(to_minor_units(dec("12.345")).unwrap(), 1235);
        assert_eq!(to_minor_units(dec("12.344")).unwrap(), 1234);
        assert_eq!(to_minor_units(dec("0.005")).unwrap(), 1);
        assert_eq!(to_minor_units(dec("499")).unwrap(), 49900);
        assert_eq!(to_minor_units(dec("1.005")).unwrap(), 101);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(to_minor_units(Decimal::ZERO).is_err());
        assert!(to_minor_units(dec("-5")).is_err());
        assert!(to_minor_units(dec("0.004")).is_err());
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(to_minor_units(Decimal::MAX).is_err());
    }

    #[test]
    fn test_from_minor_units() {
        assert_eq!(from_minor_units(1235), 12.35);
        assert_eq!(from_minor_units(50000), 500.0);
        assert_eq!(from_minor_units(1), 0.01);
    }
}
