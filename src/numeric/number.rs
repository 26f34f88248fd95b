// ============================================================================
// Radix Number
// Signed, sparse, arbitrary-precision number in a base from 2 to 34
// ============================================================================

use super::digits::{validate_base, IntoDigit};
use super::errors::{NumericError, NumericResult};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::iter::{FusedIterator, Rev};
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Signed digit index. 0 is the least-significant integer digit, negative
/// positions are fractional digits (-1 is the first digit after the point).
pub type Position = i64;

// ============================================================================
// Sign
// ============================================================================

/// Sign of a [`Number`], stored apart from its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// +1 or -1
    #[inline]
    pub const fn value(self) -> i8 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }

    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// `true` is positive.
impl From<bool> for Sign {
    fn from(positive: bool) -> Self {
        if positive {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

impl TryFrom<i8> for Sign {
    type Error = NumericError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Sign::Positive),
            -1 => Ok(Sign::Negative),
            _ => Err(NumericError::InvalidInput),
        }
    }
}

// ============================================================================
// Number
// ============================================================================

/// Exact signed number with unbounded integer and fractional precision.
///
/// Stores only the nonzero digits, keyed by [`Position`]. The base is fixed
/// at construction; every digit stays in `[1, base-1]`.
///
/// # Example
/// ```
/// use radix_number::numeric::Number;
///
/// let a = Number::from_str_radix("1f.2b", 16)?;
/// let b = a.checked_add_int(10)?;
/// assert_eq!(b.to_string(), "29.2b");
/// # Ok::<(), radix_number::numeric::NumericError>(())
/// ```
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "NumberRepr", into = "NumberRepr")
)]
pub struct Number {
    base: u32,
    sign: Sign,
    digits: BTreeMap<Position, u8>,
}

impl Number {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a positive zero in `base`.
    ///
    /// # Errors
    /// Returns `BaseTooSmall` or `UnsupportedBase` if the base is outside `[2, 34]`.
    pub fn new(base: u32) -> NumericResult<Self> {
        Self::with_sign(base, Sign::Positive)
    }

    /// Create a zero carrying `sign`.
    pub fn with_sign(base: u32, sign: Sign) -> NumericResult<Self> {
        let base = validate_base(base)?;
        Ok(Self {
            base,
            sign,
            digits: BTreeMap::new(),
        })
    }

    /// Create an integer value in `base`.
    ///
    /// # Example
    /// ```
    /// use radix_number::numeric::Number;
    ///
    /// assert_eq!(Number::from_int(123, 16)?.to_string(), "7b.");
    /// # Ok::<(), radix_number::numeric::NumericError>(())
    /// ```
    pub fn from_int(value: i64, base: u32) -> NumericResult<Self> {
        let sign = if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::from_magnitude(value.unsigned_abs(), sign, base)
    }

    /// Create an integer from an unsigned magnitude and a sign.
    pub(crate) fn from_magnitude(mut magnitude: u64, sign: Sign, base: u32) -> NumericResult<Self> {
        let mut number = Self::with_sign(base, sign)?;
        let radix = u64::from(number.base);
        let mut position: Position = 0;
        while magnitude > 0 {
            number.store(position, (magnitude % radix) as u8);
            magnitude /= radix;
            position += 1;
        }
        Ok(number)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// +1 or -1, also for zero.
    #[inline]
    pub fn signum(&self) -> i8 {
        self.sign.value()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub fn set_sign(&mut self, sign: impl Into<Sign>) {
        self.sign = sign.into();
    }

    /// Set the sign from `1` or `-1`.
    ///
    /// # Errors
    /// Returns `InvalidInput` for any other value; the sign is unchanged.
    pub fn set_sign_value(&mut self, value: i8) -> NumericResult<()> {
        self.sign = Sign::try_from(value)?;
        Ok(())
    }

    /// Check if the magnitude is zero (either sign).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Number of stored (nonzero) digits.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Highest stored position, 0 when no digit is stored.
    #[inline]
    pub fn most_significant_position(&self) -> Position {
        self.digits.keys().next_back().copied().unwrap_or(0)
    }

    /// Lowest stored position, 0 when no digit is stored.
    #[inline]
    pub fn least_significant_position(&self) -> Position {
        self.digits.keys().next().copied().unwrap_or(0)
    }

    /// Digit at `position`, 0 where nothing is stored.
    #[inline]
    pub fn digit(&self, position: Position) -> u8 {
        self.digits.get(&position).copied().unwrap_or(0)
    }

    /// Assign the digit at `position`. Zero removes the entry.
    ///
    /// # Errors
    /// Returns `DigitOutOfRange` for negative values, values at or above the
    /// base, or symbols outside `0-9a-z`. The number is left unchanged.
    ///
    /// # Example
    /// ```
    /// use radix_number::numeric::Number;
    ///
    /// let mut n = Number::new(16)?;
    /// n.set_digit(5, 'a')?;
    /// n.set_digit(2, 15u8)?;
    /// n.set_digit(-3, 'd')?;
    /// assert_eq!(n.to_string(), "a00f00.00d");
    /// # Ok::<(), radix_number::numeric::NumericError>(())
    /// ```
    pub fn set_digit(&mut self, position: Position, value: impl IntoDigit) -> NumericResult<()> {
        let digit = value.into_digit(self.base)?;
        self.store(position, digit);
        Ok(())
    }

    /// Write an already validated digit, keeping the map sparse.
    #[inline]
    pub(crate) fn store(&mut self, position: Position, digit: u8) {
        debug_assert!(u32::from(digit) < self.base);
        if digit == 0 {
            self.digits.remove(&position);
        } else {
            self.digits.insert(position, digit);
        }
    }

    // ========================================================================
    // In-place transforms
    // ========================================================================

    /// Move every digit by `positions`, multiplying by `base^positions`.
    ///
    /// Negative values divide; no digit is ever lost.
    ///
    /// # Errors
    /// Returns `PositionOverflow` if a digit would leave the `Position`
    /// range. The number is left unchanged.
    pub fn shift(&mut self, positions: Position) -> NumericResult<()> {
        if positions == 0 || self.digits.is_empty() {
            return Ok(());
        }
        // Only the extreme digit on the moving side can overflow
        let edge = if positions > 0 {
            self.most_significant_position()
        } else {
            self.least_significant_position()
        };
        if edge.checked_add(positions).is_none() {
            return Err(NumericError::PositionOverflow { position: edge });
        }
        self.digits = std::mem::take(&mut self.digits)
            .into_iter()
            .map(|(position, digit)| (position + positions, digit))
            .collect();
        Ok(())
    }

    /// Copy with the opposite sign.
    pub fn negated(&self) -> Self {
        let mut result = self.clone();
        result.sign = result.sign.flipped();
        result
    }

    /// Iterate `(position, digit)` over stored digits, most significant first.
    ///
    /// # Example
    /// ```
    /// use radix_number::numeric::Number;
    ///
    /// let n = Number::from_str_radix("010.30", 10)?;
    /// assert_eq!(n.iter().collect::<Vec<_>>(), vec![(1, 1), (-1, 3)]);
    /// # Ok::<(), radix_number::numeric::NumericError>(())
    /// ```
    pub fn iter(&self) -> Digits<'_> {
        Digits {
            inner: self.digits.iter().rev(),
        }
    }
}

impl Neg for Number {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self::Output {
        self.sign = self.sign.flipped();
        self
    }
}

impl Neg for &Number {
    type Output = Number;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

// ============================================================================
// Iteration
// ============================================================================

/// Iterator over the stored digits of a [`Number`], descending by position.
#[derive(Debug, Clone)]
pub struct Digits<'a> {
    inner: Rev<btree_map::Iter<'a, Position, u8>>,
}

impl Iterator for Digits<'_> {
    type Item = (Position, u8);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&position, &digit)| (position, digit))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Digits<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(&position, &digit)| (position, digit))
    }
}

impl ExactSizeIterator for Digits<'_> {}

impl FusedIterator for Digits<'_> {}

impl<'a> IntoIterator for &'a Number {
    type Item = (Position, u8);
    type IntoIter = Digits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Debug
// ============================================================================

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number::from_str_radix(\"{}\", {})", self, self.base)
    }
}

// ============================================================================
// Serde representation
// ============================================================================

/// Wire form: the base plus the canonical string.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct NumberRepr {
    base: u32,
    value: String,
}

#[cfg(feature = "serde")]
impl From<Number> for NumberRepr {
    fn from(number: Number) -> Self {
        Self {
            base: number.base,
            value: number.to_string(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<NumberRepr> for Number {
    type Error = NumericError;

    fn try_from(repr: NumberRepr) -> Result<Self, Self::Error> {
        Number::from_str_radix(&repr.value, repr.base)
    }
}

// ============================================================================
// Tests
// ============================================================================
