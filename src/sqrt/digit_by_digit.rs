// ============================================================================
// Digit-by-Digit Square Root
// Greedy radix digit extraction, exact and native-float variants
// ============================================================================
//
// For digit index i (position -i, index 0 is the single integer digit) pick
// the largest d in [0, base-1] with (root + d * base^-i)^2 <= k, then append
// d to root. No digit ever needs revisiting.

use crate::numeric::digits::validate_base;
use crate::numeric::{symbol_of, Number, NumericError, NumericResult, Position, Sign, MAX_BASE};
use smallvec::SmallVec;
use std::cmp::Ordering;
use tracing::{debug, trace};

type RootDigits = SmallVec<[u8; 32]>;

/// First `num_digits` base-`base` digits of `sqrt(k)`, computed exactly.
///
/// The leading digit is the integer part and saturates at `base - 1`, so
/// only radicands below `base^2` yield a true root.
///
/// # Errors
/// - `BaseTooSmall` / `UnsupportedBase` for a base outside `[2, 34]`
/// - `InvalidInput` when `num_digits` is zero
///
/// # Example
/// ```
/// use radix_number::sqrt::sqrt_digits;
///
/// assert_eq!(sqrt_digits(11, 2, 10)?, "1.4142135623");
/// assert_eq!(sqrt_digits(6, 2, 2)?, "1.01101");
/// # Ok::<(), radix_number::numeric::NumericError>(())
/// ```
pub fn sqrt_digits(num_digits: usize, k: u64, base: u32) -> NumericResult<String> {
    let radicand = Number::from_magnitude(k, Sign::Positive, base)?;
    sqrt_digits_of(&radicand, num_digits)
}

/// Exact extraction for any non-negative radicand, in the radicand's base.
///
/// The running square is kept alongside the root, so each candidate costs
/// two additions:
/// `(r + (d+1)e)^2 = (r + d*e)^2 + 2r*e + (2d+1)e^2` with `e = base^-i`.
///
/// # Errors
/// Returns `InvalidInput` for a zero digit count or a negative radicand, and
/// `PositionOverflow` if the digit count exceeds the `Position` range.
pub fn sqrt_digits_of(radicand: &Number, num_digits: usize) -> NumericResult<String> {
    if num_digits == 0 || (radicand.is_negative() && !radicand.is_zero()) {
        return Err(NumericError::InvalidInput);
    }

    let base = radicand.base();
    let mut root = Number::new(base)?;
    let mut square = Number::new(base)?;
    let mut digits = RootDigits::with_capacity(num_digits);

    for index in 0..num_digits {
        let position = -Position::try_from(index).map_err(|_| NumericError::InvalidInput)?;
        let odd_position = position
            .checked_mul(2)
            .ok_or(NumericError::PositionOverflow { position })?;

        let mut cross = root.checked_add(&root)?;
        cross.shift(position)?;

        let mut digit = 0u32;
        while digit + 1 < base {
            let mut odd = Number::from_int(i64::from(2 * digit + 1), base)?;
            odd.shift(odd_position)?;
            let candidate = square.checked_add(&cross)?.checked_add(&odd)?;
            if candidate.compare(radicand)? == Ordering::Greater {
                break;
            }
            square = candidate;
            digit += 1;
        }

        root.set_digit(position, digit)?;
        digits.push(digit as u8);
        trace!(index, digit, "extracted root digit");
    }

    debug!(radicand = %radicand, num_digits, root = %root, "exact square root");
    render(&digits)
}

/// Same extraction with `f64` arithmetic.
///
/// Accuracy is bounded by `f64`: around 16 significant decimal digits, after
/// which the digits drift from the true root.
///
/// # Errors
/// - `BaseTooSmall` / `UnsupportedBase` for a base outside `[2, 34]`
/// - `InvalidInput` for a zero digit count or a negative or non-finite `k`
pub fn sqrt_digits_native(num_digits: usize, k: f64, base: u32) -> NumericResult<String> {
    let base = validate_base(base)?;
    if num_digits == 0 || !k.is_finite() || k < 0.0 {
        return Err(NumericError::InvalidInput);
    }

    let radix = f64::from(base);
    let mut cumsum = 0.0_f64;
    let mut digits = RootDigits::with_capacity(num_digits);

    for index in 0..num_digits {
        let exponent = i32::try_from(index).map_err(|_| NumericError::InvalidInput)?;
        let step = radix.powi(-exponent);

        let mut digit = 0u32;
        while digit + 1 < base && (cumsum + f64::from(digit + 1) * step).powi(2) <= k {
            digit += 1;
        }
        cumsum += f64::from(digit) * step;
        digits.push(digit as u8);
    }

    debug!(k, num_digits, base, "native square root");
    render(&digits)
}

/// Leading digit, radix point, remaining digits. Trailing zeros are kept.
fn render(digits: &[u8]) -> NumericResult<String> {
    debug_assert!(digits.iter().all(|&d| u32::from(d) < MAX_BASE));
    let mut out = String::with_capacity(digits.len() + 1);
    for (index, &digit) in digits.iter().enumerate() {
        out.push(symbol_of(digit)?);
        if index == 0 {
            out.push('.');
        }
    }
    Ok(out)
}
