// ============================================================================
// Digit Codec
// Mapping between digit values and their alphanumeric symbols
// ============================================================================

use super::errors::{NumericError, NumericResult};

/// Smallest supported radix.
pub const MIN_BASE: u32 = 2;

/// Largest supported radix.
pub const MAX_BASE: u32 = 34;

/// Symbols for the digit values `0..36`. Only the first [`MAX_BASE`] are
/// reachable through a valid base, the tail keeps `value_of` total over `a-z`.
const SYMBOLS: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
    'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Check that `base` lies in `[MIN_BASE, MAX_BASE]`.
///
/// # Errors
/// - `BaseTooSmall` for bases below 2
/// - `UnsupportedBase` for bases above 34
#[inline]
pub fn validate_base(base: u32) -> NumericResult<u32> {
    if base < MIN_BASE {
        Err(NumericError::BaseTooSmall { base })
    } else if base > MAX_BASE {
        Err(NumericError::UnsupportedBase { base })
    } else {
        Ok(base)
    }
}

/// Symbol for a digit value in `0..MAX_BASE`.
///
/// # Errors
/// Returns `DigitOutOfRange` for values at or above [`MAX_BASE`].
#[inline]
pub fn symbol_of(value: u8) -> NumericResult<char> {
    if u32::from(value) >= MAX_BASE {
        return Err(NumericError::DigitOutOfRange {
            digit: i128::from(value),
            base: MAX_BASE,
        });
    }
    Ok(SYMBOLS[value as usize])
}

/// Digit value of a symbol, case-insensitive.
///
/// # Errors
/// Returns `DigitOutOfRange` for anything outside `0-9a-z`.
#[inline]
pub fn value_of(symbol: char) -> NumericResult<u8> {
    // to_digit(36) accepts both cases
    symbol
        .to_digit(36)
        .map(|v| v as u8)
        .ok_or(NumericError::DigitOutOfRange {
            digit: i128::from(u32::from(symbol)),
            base: MAX_BASE,
        })
}

/// Values that can be stored as a single digit of a number in `base`.
///
/// Implemented for unsigned and signed integers (negative values are
/// rejected) and for symbol characters.
pub trait IntoDigit {
    /// Convert into a digit value in `[0, base-1]`.
    fn into_digit(self, base: u32) -> NumericResult<u8>;
}

fn checked_digit(value: i128, base: u32) -> NumericResult<u8> {
    if value < 0 || value >= i128::from(base) {
        Err(NumericError::DigitOutOfRange { digit: value, base })
    } else {
        Ok(value as u8)
    }
}

macro_rules! impl_into_digit {
    ($($t: ty),*) => {
    $(
    impl IntoDigit for $t {
        #[inline]
        fn into_digit(self, base: u32) -> NumericResult<u8> {
            // Widening: every listed type fits in i128
            checked_digit(self as i128, base)
        }
    }
    )*
    };
}
impl_into_digit!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

impl IntoDigit for char {
    fn into_digit(self, base: u32) -> NumericResult<u8> {
        let value = value_of(self)?;
        checked_digit(i128::from(value), base)
    }
}
