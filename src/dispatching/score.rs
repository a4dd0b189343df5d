//! Exact rule scores.

use std::cmp::Ordering;
use std::ops::Neg;

/// Score returned by a selection rule.
///
/// An exact rational `numerator / denominator` with a positive
/// denominator. Integer scores use denominator 1; ratio rules (HRRN) keep
/// their fraction unreduced. Comparison cross-multiplies in `i128`, so
/// integer times of any `i64` magnitude order correctly.
///
/// Lower scores = dispatched first.
#[derive(Debug, Clone, Copy)]
pub struct RuleScore {
    numerator: i128,
    denominator: i128,
}

impl RuleScore {
    /// Integer score.
    pub fn new(value: i64) -> Self {
        Self {
            numerator: value as i128,
            denominator: 1,
        }
    }

    /// Fractional score `numerator / denominator`.
    ///
    /// `denominator` must be non-zero; its sign is folded into the
    /// numerator.
    pub fn ratio(numerator: i128, denominator: i128) -> Self {
        debug_assert!(denominator != 0, "zero denominator");
        if denominator < 0 {
            Self {
                numerator: -numerator,
                denominator: -denominator,
            }
        } else {
            Self {
                numerator,
                denominator,
            }
        }
    }
}

impl From<i64> for RuleScore {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl Neg for RuleScore {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Ord for RuleScore {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.numerator * other.denominator).cmp(&(other.numerator * self.denominator))
    }
}

impl PartialOrd for RuleScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RuleScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RuleScore {}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_POW_53: i64 = 1 << 53;

    #[test]
    fn test_integer_order_beyond_f64_precision() {
        let a = RuleScore::new(TWO_POW_53);
        let b = RuleScore::new(TWO_POW_53 + 1);
        assert!(a < b);
        assert_ne!(a, b);
        assert!(RuleScore::new(i64::MAX) > RuleScore::new(i64::MAX - 1));
        assert!(RuleScore::new(i64::MIN) < RuleScore::new(0));
    }

    #[test]
    fn test_ratio_equality_unreduced() {
        assert_eq!(RuleScore::ratio(6, 2), RuleScore::new(3));
        assert_eq!(RuleScore::ratio(3, 2), RuleScore::ratio(9, 6));
        assert_eq!(RuleScore::ratio(3, -2), RuleScore::ratio(-3, 2));
    }

    #[test]
    fn test_large_ratios_distinguished() {
        // Both sit within 2^-52 of 1
        let big = TWO_POW_53 as i128;
        let a = RuleScore::ratio(big + 1, big);
        let b = RuleScore::ratio(big + 2, big + 1);
        assert!(b < a);
    }

    #[test]
    fn test_neg_reverses_order() {
        let low = RuleScore::ratio(3, 2);
        let high = RuleScore::ratio(2, 1);
        assert!(-high < -low);
        assert_eq!(-RuleScore::new(2), RuleScore::ratio(-4, 2));
    }
}
