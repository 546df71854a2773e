//! Guarded percentage arithmetic.

use rust_decimal::Decimal;

/// Returns `numerator / denominator * 100` rounded to one decimal place.
///
/// A zero denominator yields zero rather than an error or an undefined value.
#[must_use]
pub fn percent_of(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    (numerator / denominator * Decimal::ONE_HUNDRED).round_dp(1)
}

/// Like [`percent_of`], but returns `None` when the quotient overflows.
#[must_use]
pub fn checked_percent_of(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        return Some(Decimal::ZERO);
    }
    numerator
        .checked_div(denominator)?
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|pct| pct.round_dp(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(dec!(600), dec!(1000)), dec!(60.0));
        assert_eq!(percent_of(dec!(1), dec!(3)), dec!(33.3));
        assert_eq!(percent_of(dec!(-250), dec!(1000)), dec!(-25.0));
    }

    #[test]
    fn test_zero_denominator_is_zero() {
        assert_eq!(percent_of(dec!(500), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(percent_of(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_checked_percent_of() {
        assert_eq!(checked_percent_of(dec!(1), dec!(3)), Some(dec!(33.3)));
        assert_eq!(checked_percent_of(dec!(5), Decimal::ZERO), Some(Decimal::ZERO));
        assert_eq!(checked_percent_of(Decimal::MAX, dec!(0.5)), None);
        assert_eq!(checked_percent_of(Decimal::MAX, Decimal::ONE), None);
    }
}
