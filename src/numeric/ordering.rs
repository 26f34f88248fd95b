// ============================================================================
// Comparison
// Sign-magnitude total order over numbers of the same base
// ============================================================================

use super::errors::NumericResult;
use super::number::{Number, Sign};
use std::cmp::Ordering;

impl Number {
    /// Compare magnitudes, ignoring sign.
    ///
    /// Walks both digit maps from the most-significant end. A stored digit is
    /// never zero, so the first position present in only one map decides.
    pub(crate) fn cmp_magnitude(&self, other: &Number) -> Ordering {
        let mut lhs = self.iter();
        let mut rhs = other.iter();
        loop {
            match (lhs.next(), rhs.next()) {
                (None, None) => return Ordering::Equal,
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (Some((lp, ld)), Some((rp, rd))) => {
                    let ord = lp.cmp(&rp).then(ld.cmp(&rd));
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
            }
        }
    }

    /// Total order for equal bases. Zero compares equal to negative zero.
    ///
    /// # Errors
    /// Returns `IncompatibleOperands` if the bases differ.
    ///
    /// # Example
    /// ```
    /// use radix_number::numeric::Number;
    /// use std::cmp::Ordering;
    ///
    /// let a = Number::from_str_radix("-a.3e", 16)?;
    /// let b = Number::from_str_radix("-d.45", 16)?;
    /// assert_eq!(a.compare(&b)?, Ordering::Greater);
    /// # Ok::<(), radix_number::numeric::NumericError>(())
    /// ```
    pub fn compare(&self, other: &Number) -> NumericResult<Ordering> {
        self.ensure_same_base(other)?;
        Ok(self.cmp_same_base(other))
    }

    fn cmp_same_base(&self, other: &Number) -> Ordering {
        if self.is_zero() && other.is_zero() {
            return Ordering::Equal;
        }
        match (self.sign(), other.sign()) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.cmp_magnitude(other),
            // Larger magnitude is the smaller negative
            (Sign::Negative, Sign::Negative) => other.cmp_magnitude(self),
        }
    }
}

/// Numbers in different bases are never equal.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.base() == other.base() && self.cmp_same_base(other) == Ordering::Equal
    }
}

impl Eq for Number {}

/// `None` when the bases differ; use [`Number::compare`] for the error.
impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    fn num(s: &str, base: u32) -> Number {
        Number::from_str_radix(s, base).unwrap()
    }

    #[test]
    fn test_lt() {
        let n1 = num("-12.34", 10);
        let n2 = num("23.45", 10);
        let n3 = num("100.003", 10);

        assert!(n1 < n2);
        assert!(!(n2 < n1));
        assert!(n1 < n3);
        assert!(!(n3 < n1));
        assert!(n2 < n3);
        assert!(!(n3 < n2));

        assert!(!(n1 < n1));
        assert!(!(n2 < n2));
        assert!(n1 <= n1);
        assert!(n3 >= n3);
        assert!(n3 > n1 && n3 >= n2 && n1 != n3);
    }

    #[test]
    fn test_gt() {
        let n1 = num("-a.3e", 16);
        let n2 = num("-d.45", 16);
        let n3 = num("100.003", 16);
        let n4 = num("-a.3e0001", 16);

        assert!(n1 > n2);
        assert!(!(n2 > n1));
        assert!(n3 > n1);
        assert!(!(n1 > n3));
        assert!(n3 > n2);
        assert!(!(n2 > n3));

        assert!(n1 > n4);
        assert!(!(n4 > n1));

        assert!(!(n1 > n1));
        assert!(!(n3 > n3));
    }

    #[test]
    fn test_eq() {
        let n1 = num("111.01", 2);
        let n2 = num("111.10", 2);
        let n3 = num("101.01", 2);

        assert!(n1 == n1);
        assert!(n2 != n1);
        assert!(n3 == n3);
        assert!(n1 != n3);
        assert!(n2 == n2);
        assert!(n2 != n3);
    }

    #[test]
    fn test_leq_geq() {
        let n1 = num("111.01", 2);
        let n2 = num("111.10", 2);

        assert!(n1 <= n2);
        assert!(n1 <= n1);
        assert!(!(n2 <= n1));

        assert!(!(n1 >= n2));
        assert!(n1 >= n1);
        assert!(n2 >= n1);
    }

    #[test]
    fn test_zeros() {
        let zero = num("0.", 10);
        let neg_zero = num("-0.", 10);

        assert!(!(zero > neg_zero));
        assert!(!(zero < neg_zero));
        assert!(zero == neg_zero);
        assert_eq!(zero.compare(&neg_zero).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_negative_zero_against_nonzero() {
        let neg_zero = num("-0.", 10);
        assert!(neg_zero < num("0.1", 10));
        assert!(neg_zero > num("-0.1", 10));
    }

    #[test]
    fn test_same_value_different_sign() {
        assert!(num("-1.5", 10) < num("1.5", 10));
        assert!(num("-1.5", 10) != num("1.5", 10));
    }

    #[test]
    fn test_different_bases() {
        let a = num("1.", 10);
        let b = num("1.", 16);

        assert!(a != b);
        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a < b) && !(a > b));
        assert_eq!(
            a.compare(&b).unwrap_err(),
            NumericError::IncompatibleOperands { left: 10, right: 16 }
        );
    }

    #[test]
    fn test_magnitude_ordering() {
        assert_eq!(num("-99.", 10).cmp_magnitude(&num("1.", 10)), Ordering::Greater);
        assert_eq!(num("0.001", 10).cmp_magnitude(&num("0.01", 10)), Ordering::Less);
        assert_eq!(num("-7.7", 10).cmp_magnitude(&num("7.7", 10)), Ordering::Equal);
    }
}
