// ============================================================================
// String Parsing and Formatting
// Canonical `-?I.F` text form of a radix number
// ============================================================================
//
// Grammar (input is lower-cased first):
//
//   number   := "-"? integer "." fraction?
//   integer  := digit+
//   fraction := digit*
//   digit    := [0-9a-z]      ; value must be < base

use super::digits::{symbol_of, validate_base, value_of};
use super::errors::{NumericError, NumericResult};
use super::number::{Number, Position, Sign};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

impl Number {
    /// Parse `text` as a number in `base`.
    ///
    /// Checks run in order: base range, grammar, then digit range, so a
    /// well-formed string with an oversized digit reports `DigitOutOfRange`.
    ///
    /// # Errors
    /// - `BaseTooSmall` / `UnsupportedBase` for a base outside `[2, 34]`
    /// - `InvalidFormat` if the text does not match the grammar
    /// - `DigitOutOfRange` if a digit is not below the base
    ///
    /// # Example
    /// ```
    /// use radix_number::numeric::{Number, NumericError};
    ///
    /// let n = Number::from_str_radix("A.2BF", 16)?;
    /// assert_eq!(n.to_string(), "a.2bf");
    ///
    /// assert_eq!(
    ///     Number::from_str_radix("1.2.3", 10).unwrap_err(),
    ///     NumericError::InvalidFormat
    /// );
    /// # Ok::<(), NumericError>(())
    /// ```
    pub fn from_str_radix(text: &str, base: u32) -> NumericResult<Self> {
        let base = validate_base(base)?;
        let lowered = text.to_ascii_lowercase();

        let (sign, int_str, frac_str) = split_grammar(&lowered).inspect_err(|_| {
            debug!(input = text, "rejected malformed number");
        })?;

        // Every symbol is in 0-9a-z here
        let max_digit = int_str
            .chars()
            .chain(frac_str.chars())
            .map(value_of)
            .collect::<NumericResult<Vec<u8>>>()?
            .into_iter()
            .max()
            .unwrap_or(0);
        if u32::from(max_digit) >= base {
            debug!(input = text, base, max_digit, "digit exceeds base");
            return Err(NumericError::DigitOutOfRange {
                digit: i128::from(max_digit),
                base,
            });
        }

        let mut number = Number::with_sign(base, sign)?;

        // Integer part right-to-left: positions 0, 1, 2, ...
        for (position, symbol) in (0..).zip(int_str.chars().rev()) {
            number.store(position, value_of(symbol)?);
        }

        // Fraction left-to-right: positions -1, -2, ...
        for (offset, symbol) in (1..).zip(frac_str.chars()) {
            let position: Position = -offset;
            number.store(position, value_of(symbol)?);
        }

        Ok(number)
    }
}

/// Split lower-cased text into sign, integer digits and fraction digits.
fn split_grammar(text: &str) -> NumericResult<(Sign, &str, &str)> {
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => (Sign::Negative, rest),
        None => (Sign::Positive, text),
    };

    let (int_str, frac_str) = body.split_once('.').ok_or(NumericError::InvalidFormat)?;

    let is_symbol = |c: char| c.is_ascii_digit() || c.is_ascii_lowercase();
    if int_str.is_empty() || !int_str.chars().all(is_symbol) || !frac_str.chars().all(is_symbol)
    {
        return Err(NumericError::InvalidFormat);
    }

    Ok((sign, int_str, frac_str))
}

/// Parses base 10.
impl FromStr for Number {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Number::from_str_radix(s, 10)
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl fmt::Display for Number {
    /// Canonical form: no leading integer zeros beyond a single `0`, no
    /// trailing fraction zeros, always a radix point. Zero is `0.` for
    /// either sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0.");
        }

        let most = self.most_significant_position();
        let least = self.least_significant_position();
        let mut out = String::with_capacity(capacity_hint(most, least));

        if self.is_negative() {
            out.push('-');
        }

        if most < 0 {
            out.push('0');
        } else {
            for position in (0..=most).rev() {
                out.push(symbol_of(self.digit(position)).map_err(|_| fmt::Error)?);
            }
        }

        out.push('.');

        if least < 0 {
            for position in (least..0).rev() {
                out.push(symbol_of(self.digit(position)).map_err(|_| fmt::Error)?);
            }
        }

        f.write_str(&out)
    }
}

/// Preallocation for `Display`: sign, digits and radix point, capped at 4 KiB.
fn capacity_hint(most: Position, least: Position) -> usize {
    const LIMIT: i128 = 4096;
    let width = i128::from(most.max(0)) - i128::from(least.min(0)) + 3;
    width.clamp(0, LIMIT) as usize
}

// ============================================================================
// Tests
// ============================================================================
