// ============================================================================
// Signed Addition
// Carry propagation for equal signs, borrow propagation for opposite signs
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::number::{Number, Position};
use smallvec::SmallVec;
use std::cmp::Ordering;
use tracing::{debug, error};

impl Number {
    // ========================================================================
    // Public arithmetic
    // ========================================================================

    /// Checked addition, returning a fresh number.
    ///
    /// # Errors
    /// Returns `IncompatibleOperands` if the bases differ, `PositionOverflow`
    /// if a carry leaves the top position.
    ///
    /// # Example
    /// ```
    /// use radix_number::numeric::Number;
    ///
    /// let a: Number = "1.34".parse()?;
    /// let b: Number = "-98.01".parse()?;
    /// assert_eq!(a.checked_add(&b)?.to_string(), "-96.67");
    /// # Ok::<(), radix_number::numeric::NumericError>(())
    /// ```
    pub fn checked_add(&self, rhs: &Number) -> NumericResult<Number> {
        self.ensure_same_base(rhs)?;

        if self.sign() == rhs.sign() {
            let mut result = self.clone();
            for (position, digit) in rhs.iter() {
                result.add_at(position, u32::from(digit))?;
            }
            return Ok(result);
        }

        // Anchor on the larger magnitude, its sign wins
        let (larger, smaller) = match self.cmp_magnitude(rhs) {
            Ordering::Less => (rhs, self),
            Ordering::Equal | Ordering::Greater => (self, rhs),
        };
        debug!(
            anchor = %larger,
            subtrahend = %smaller,
            "opposite-sign addition"
        );

        let mut result = larger.clone();
        for (position, digit) in smaller.iter() {
            result.subtract_at(position, u32::from(digit))?;
        }
        Ok(result)
    }

    /// Add an integer, read in this number's base.
    pub fn checked_add_int(&self, rhs: i64) -> NumericResult<Number> {
        self.checked_add(&Number::from_int(rhs, self.base())?)
    }

    /// In-place addition. On error `self` is unchanged.
    pub fn add_assign_checked(&mut self, rhs: &Number) -> NumericResult<()> {
        *self = self.checked_add(rhs)?;
        Ok(())
    }

    /// Subtraction as negate-and-add.
    pub fn checked_sub(&self, rhs: &Number) -> NumericResult<Number> {
        self.checked_add(&rhs.negated())
    }

    /// Multiplication is not provided.
    ///
    /// # Errors
    /// Always returns `UnsupportedOperation`.
    pub fn checked_mul(&self, _rhs: &Number) -> NumericResult<Number> {
        Err(NumericError::UnsupportedOperation("multiplication"))
    }

    /// Division is not provided.
    ///
    /// # Errors
    /// Always returns `UnsupportedOperation`.
    pub fn checked_div(&self, _rhs: &Number) -> NumericResult<Number> {
        Err(NumericError::UnsupportedOperation("division"))
    }

    #[inline]
    pub(crate) fn ensure_same_base(&self, other: &Number) -> NumericResult<()> {
        if self.base() != other.base() {
            return Err(NumericError::IncompatibleOperands {
                left: self.base(),
                right: other.base(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Digit-level propagation
    // ========================================================================

    /// Add `value` (below the base) to the magnitude at `position`, carrying
    /// into higher positions until nothing is left.
    ///
    /// # Errors
    /// Returns `PositionOverflow` when a carry would pass `Position::MAX`.
    /// The number is left untouched.
    pub(crate) fn add_at(&mut self, mut position: Position, mut value: u32) -> NumericResult<()> {
        let base = self.base();
        let mut staged: SmallVec<[(Position, u8); 8]> = SmallVec::new();

        loop {
            let total = u32::from(self.digit(position)) + value;
            staged.push((position, (total % base) as u8));
            value = total / base;
            if value == 0 {
                break;
            }
            position = position.checked_add(1).ok_or_else(|| {
                error!(position, base, "carry past highest position");
                NumericError::PositionOverflow { position }
            })?;
        }

        for (position, digit) in staged {
            self.store(position, digit);
        }
        Ok(())
    }

    /// Subtract `value` from the magnitude at `position`, borrowing from
    /// higher positions.
    ///
    /// Writes are staged and applied only when the borrow chain terminates,
    /// so an underflow leaves the number untouched.
    ///
    /// # Errors
    /// Returns `BorrowUnderflow` when a borrow is needed at or beyond the
    /// most-significant position, i.e. the magnitude would go negative.
    pub(crate) fn subtract_at(
        &mut self,
        mut position: Position,
        mut value: u32,
    ) -> NumericResult<()> {
        let base = self.base();
        let top = self.most_significant_position();
        let mut staged: SmallVec<[(Position, u8); 8]> = SmallVec::new();

        while value > 0 {
            let current = u32::from(self.digit(position));
            if value <= current {
                staged.push((position, (current - value) as u8));
                break;
            }
            if position >= top {
                error!(position, base, "borrow past most-significant digit");
                return Err(NumericError::BorrowUnderflow { position });
            }
            let deficit = value - current;
            let borrows = deficit.div_ceil(base);
            staged.push((position, (borrows * base - deficit) as u8));
            // position < top, so this cannot pass Position::MAX
            position = position
                .checked_add(1)
                .ok_or(NumericError::PositionOverflow { position })?;
            value = borrows;
        }

        for (position, digit) in staged {
            self.store(position, digit);
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn check_add(base: u32, a: &str, b: &str, expected: &str) {
        let x = Number::from_str_radix(a, base).unwrap();
        let y = Number::from_str_radix(b, base).unwrap();
        assert_eq!(x.checked_add(&y).unwrap().to_string(), expected, "{} + {}", a, b);
        assert_eq!(y.checked_add(&x).unwrap().to_string(), expected, "{} + {}", b, a);
    }

    #[test]
    fn test_add_decimal() {
        check_add(10, "1.34", "98.01", "99.35");
    }

    #[test]
    fn test_add_one_negative() {
        check_add(10, "1.34", "-98.01", "-96.67");
    }

    #[test]
    fn test_add_both_negative() {
        check_add(10, "-1.23", "-32.11", "-33.34");
    }

    #[test]
    fn test_add_binary() {
        check_add(2, "1.0101", "0.01", "1.1001");
        check_add(2, "1.0101", "-0.1", "0.1101");
        check_add(2, "0.0101", "-0.1", "-0.0011");
    }

    #[test]
    fn test_carry_chain() {
        check_add(10, "999.99", "0.01", "1000.");
        check_add(16, "ff.f", "0.1", "100.");
        check_add(2, "1111.", "1.", "10000.");
    }

    #[test]
    fn test_borrow_chain() {
        check_add(10, "1000.", "-0.01", "999.99");
        check_add(2, "10000.", "-1.", "1111.");
    }

    #[test]
    fn test_add_to_zero() {
        let a = Number::from_str_radix("12.5", 10).unwrap();
        let sum = a.checked_add(&a.negated()).unwrap();
        assert!(sum.is_zero());
        assert_eq!(sum.to_string(), "0.");
        assert_eq!(sum, Number::new(10).unwrap());
    }

    #[test]
    fn test_add_int() {
        let a = Number::from_str_radix("1f.2b", 16).unwrap();
        assert_eq!(a.checked_add_int(10).unwrap().to_string(), "29.2b");
        assert_eq!(a.checked_add_int(-32).unwrap().to_string(), "-0.d5");
    }

    #[test]
    fn test_add_mixed_bases() {
        let a = Number::from_str_radix("1.5", 10).unwrap();
        let b = Number::from_str_radix("1.5", 16).unwrap();
        assert_eq!(
            a.checked_add(&b).unwrap_err(),
            NumericError::IncompatibleOperands { left: 10, right: 16 }
        );
    }

    #[test]
    fn test_add_returns_fresh_value() {
        let a = Number::from_str_radix("1.34", 10).unwrap();
        let b = Number::from_str_radix("98.01", 10).unwrap();
        let mut c = a.checked_add(&b).unwrap();
        c.set_digit(5, 1).unwrap();
        assert_eq!(a.to_string(), "1.34");
        assert_eq!(b.to_string(), "98.01");
        assert_eq!(c.to_string(), "100099.35");
    }

    #[test]
    fn test_add_assign_checked() {
        let mut a = Number::from_str_radix("0.5", 10).unwrap();
        a.add_assign_checked(&Number::from_str_radix("0.5", 10).unwrap())
            .unwrap();
        assert_eq!(a.to_string(), "1.");

        let other = Number::from_str_radix("1.", 8).unwrap();
        assert!(a.add_assign_checked(&other).is_err());
        assert_eq!(a.to_string(), "1.");
    }

    #[test]
    fn test_checked_sub() {
        let a = Number::from_str_radix("23.45", 10).unwrap();
        let b = Number::from_str_radix("100.003", 10).unwrap();
        assert_eq!(a.checked_sub(&b).unwrap().to_string(), "-76.553");
        assert_eq!(b.checked_sub(&a).unwrap().to_string(), "76.553");
    }

    #[test]
    fn test_unsupported_operations() {
        let a = Number::from_int(6, 10).unwrap();
        assert_eq!(
            a.checked_mul(&a).unwrap_err(),
            NumericError::UnsupportedOperation("multiplication")
        );
        assert_eq!(
            a.checked_div(&a).unwrap_err(),
            NumericError::UnsupportedOperation("division")
        );
    }

    #[test]
    fn test_subtract_at_steps() {
        // -98.01 minus the digits of 1.34, one position at a time
        let mut n = Number::from_str_radix("-98.01", 10).unwrap();
        let steps = [((0, 1), "-97.01"), ((-1, 3), "-96.71"), ((-2, 4), "-96.67")];
        for ((position, value), expected) in steps {
            n.subtract_at(position, value).unwrap();
            assert_eq!(n.to_string(), expected);
        }
    }

    #[test]
    fn test_subtract_at_underflow_leaves_number() {
        let mut n = Number::from_str_radix("0.05", 10).unwrap();
        assert_eq!(
            n.subtract_at(-1, 1),
            Err(NumericError::BorrowUnderflow { position: -1 })
        );
        assert_eq!(n.to_string(), "0.05");

        let mut zero = Number::new(10).unwrap();
        assert!(zero.subtract_at(0, 1).is_err());
        assert!(zero.is_zero());
    }

    #[test]
    fn test_add_at_carry() {
        let mut n = Number::from_str_radix("99.9", 10).unwrap();
        n.add_at(-1, 1).unwrap();
        assert_eq!(n.to_string(), "100.");
    }

    #[test]
    fn test_carry_past_top_position() {
        let mut nines = Number::from_str_radix("9.9", 10).unwrap();
        nines.shift(Position::MAX).unwrap();
        assert_eq!(
            nines.checked_add(&nines),
            Err(NumericError::PositionOverflow { position: Position::MAX })
        );

        // Staged carry: nothing written on failure
        let before = nines.clone();
        assert!(nines.add_at(Position::MAX - 1, 1).is_err());
        assert_eq!(nines.digit(Position::MAX), 9);
        assert_eq!(nines.digit(Position::MAX - 1), 9);
        assert_eq!(nines.digit_count(), before.digit_count());

        // A carry that stops below the top still succeeds
        let mut low = Number::from_int(1, 10).unwrap();
        low.shift(Position::MAX - 1).unwrap();
        low.add_at(Position::MAX - 1, 9).unwrap();
        assert_eq!(low.digit(Position::MAX), 1);
        assert_eq!(low.digit(Position::MAX - 1), 0);
    }
}
