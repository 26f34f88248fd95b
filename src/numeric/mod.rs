// ============================================================================
// Numeric Module
// Exact arbitrary-precision numbers in a configurable radix
// ============================================================================
//
// This module provides:
// - Number: signed, sparse digit-map number in base 2..=34
// - Digit codec: value <-> symbol mapping over `0-9a-z`
// - NumericError: Error types for construction and arithmetic
//
// Design principles:
// - No floating-point operations
// - All fallible operations return Result (no panics)
// - Sign-magnitude representation, zero digits never stored
// - Carry and borrow propagation as loops, not recursion

mod addition;
pub mod digits;
mod errors;
mod number;
mod ordering;
mod parse;

pub use digits::{symbol_of, value_of, IntoDigit, MAX_BASE, MIN_BASE};
pub use errors::{NumericError, NumericResult};
pub use number::{Digits, Number, Position, Sign};
