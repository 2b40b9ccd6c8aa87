use crate::errors::DomainError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

const SCALE: u32 = 2;

/// Largest balance, in cents, that every storage adapter can hold.
pub const MAX_CENTS: i64 = i64::MAX;

/// Non-negative monetary balance held at two decimal places.
///
/// Amounts are rounded half away from zero, so `150.505` becomes `150.51`.
/// Arithmetic returns new instances and goes back through [`Credit::create`],
/// which means an over-subtraction fails instead of clamping. Balances are
/// capped at [`MAX_CENTS`] so the value always fits a signed 64-bit cent count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Credit(Decimal);

impl Credit {
    pub fn create(amount: Decimal) -> Result<Self, DomainError> {
        if amount < Decimal::ZERO {
            return Err(DomainError::validation("Credit cannot be negative"));
        }

        let rounded = amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
        if rounded > Self::max_value() {
            return Err(Self::too_large());
        }

        Ok(Self(rounded.normalize()))
    }

    pub fn max_value() -> Decimal {
        Decimal::new(MAX_CENTS, SCALE)
    }

    fn too_large() -> DomainError {
        DomainError::validation("Credit exceeds the maximum balance")
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Rebuild from whole cents, as stored by the persistence adapters.
    pub fn from_cents(cents: i64) -> Result<Self, DomainError> {
        Self::create(Decimal::new(cents, SCALE))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Exact, since the value never carries more than two decimals and is
    /// bounded by [`MAX_CENTS`].
    pub fn cents(&self) -> i64 {
        let mut scaled = self.0;
        scaled.rescale(SCALE);
        i64::try_from(scaled.mantissa()).unwrap_or(MAX_CENTS)
    }

    pub fn add(&self, amount: Decimal) -> Result<Self, DomainError> {
        let sum = self.0.checked_add(amount).ok_or_else(Self::too_large)?;
        Self::create(sum)
    }

    pub fn subtract(&self, amount: Decimal) -> Result<Self, DomainError> {
        let difference = self.0.checked_sub(amount).ok_or_else(Self::too_large)?;
        Self::create(difference)
    }

    pub fn equals(&self, other: &Credit) -> bool {
        self == other
    }

    pub fn is_greater_than(&self, other: &Credit) -> bool {
        self > other
    }

    pub fn is_less_than(&self, other: &Credit) -> bool {
        self < other
    }
}

impl Default for Credit {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Credit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::already_two_places(dec!(100.25), dec!(100.25))]
    #[case::integer(dec!(100), dec!(100))]
    #[case::midpoint_rounds_up(dec!(150.505), dec!(150.51))]
    #[case::small_midpoint(dec!(0.125), dec!(0.13))]
    #[case::below_midpoint(dec!(0.124), dec!(0.12))]
    #[case::above_midpoint(dec!(0.126), dec!(0.13))]
    #[case::even_midpoint(dec!(2.345), dec!(2.35))]
    #[case::tiny_rounds_to_zero(dec!(0.004), dec!(0))]
    #[case::zero(dec!(0), dec!(0))]
    fn test_create_rounds_half_away_from_zero(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(Credit::create(input).unwrap().value(), expected);
    }

    #[rstest]
    #[case(dec!(-0.01))]
    #[case(dec!(-0.001))]
    #[case(dec!(-100))]
    fn test_negative_amount_is_rejected(#[case] input: Decimal) {
        assert_eq!(
            Credit::create(input),
            Err(DomainError::ValidationError("Credit cannot be negative".to_string()))
        );
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let credit = Credit::create(-Decimal::ZERO).unwrap();
        assert!(credit.equals(&Credit::zero()));
    }

    #[test]
    fn test_add_returns_new_rounded_instance() {
        let credit = Credit::create(dec!(10.10)).unwrap();
        let added = credit.add(dec!(0.005)).unwrap();

        assert_eq!(added.value(), dec!(10.11));
        assert_eq!(credit.value(), dec!(10.10));
    }

    #[test]
    fn test_subtract_below_zero_fails() {
        let credit = Credit::create(dec!(50)).unwrap();

        assert_eq!(credit.subtract(dec!(20)).unwrap().value(), dec!(30));
        assert_eq!(credit.subtract(dec!(50)).unwrap().value(), dec!(0));
        assert!(credit.subtract(dec!(50.01)).is_err());
    }

    #[test]
    fn test_comparisons() {
        let small = Credit::create(dec!(50)).unwrap();
        let large = Credit::create(dec!(100)).unwrap();

        assert!(large.is_greater_than(&small));
        assert!(small.is_less_than(&large));
        assert!(!small.is_greater_than(&small));
        assert!(small.equals(&Credit::create(dec!(50.00)).unwrap()));
    }

    #[test]
    fn test_cents_conversion() {
        let credit = Credit::create(dec!(150.51)).unwrap();
        assert_eq!(credit.cents(), 15051);
        assert_eq!(Credit::from_cents(15051).unwrap(), credit);
        assert!(Credit::from_cents(-1).is_err());
    }

    #[rstest]
    #[case::max_value(Credit::max_value(), true)]
    #[case::rounds_down_to_max(Credit::max_value() + dec!(0.004), true)]
    #[case::one_cent_over(Credit::max_value() + dec!(0.01), false)]
    #[case::huge(Decimal::from_i128_with_scale(10_i128.pow(27), 0), false)]
    #[case::decimal_max(Decimal::MAX, false)]
    fn test_create_upper_bound(#[case] input: Decimal, #[case] accepted: bool) {
        let result = Credit::create(input);

        if accepted {
            assert_eq!(result.unwrap().cents(), MAX_CENTS);
        } else {
            assert_eq!(
                result,
                Err(DomainError::ValidationError(
                    "Credit exceeds the maximum balance".to_string()
                ))
            );
        }
    }

    #[rstest]
    #[case::past_max(dec!(0.01))]
    #[case::decimal_overflow(Decimal::MAX)]
    fn test_add_beyond_maximum_fails_without_panicking(#[case] amount: Decimal) {
        let credit = Credit::create(Credit::max_value()).unwrap();

        assert!(matches!(credit.add(amount), Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn test_subtract_overflow_is_an_error() {
        let credit = Credit::create(dec!(1)).unwrap();
        assert!(credit.subtract(Decimal::MIN).is_err());
    }

    #[test]
    fn test_cents_at_maximum() {
        let credit = Credit::from_cents(MAX_CENTS).unwrap();
        assert_eq!(credit.value(), Credit::max_value());
        assert_eq!(credit.cents(), MAX_CENTS);
    }

    #[test]
    fn test_display_uses_two_decimals() {
        assert_eq!(Credit::create(dec!(7.5)).unwrap().to_string(), "7.50");
    }
}
