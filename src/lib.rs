// ============================================================================
// Radix Number Library
// Exact arbitrary-precision numbers in bases 2 through 34
// ============================================================================

//! # Radix Number
//!
//! Exact, arbitrary-precision signed numbers in a configurable radix.
//!
//! ## Features
//!
//! - **Sparse sign-magnitude storage**: only nonzero digits are kept, keyed
//!   by position, so integer and fractional precision are unbounded
//! - **Any base from 2 to 34** with the digit alphabet `0-9a-z`
//! - **Signed addition** by carry and borrow propagation, no rounding
//! - **Total ordering** in which `0.` and `-0.` are equal
//! - **Digit-by-digit square roots**, exact or on `f64`
//!
//! ## Example
//!
//! ```rust
//! use radix_number::prelude::*;
//!
//! let a = Number::from_str_radix("1.34", 10)?;
//! let b = Number::from_str_radix("-98.01", 10)?;
//! let sum = a.checked_add(&b)?;
//! assert_eq!(sum.to_string(), "-96.67");
//! assert!(sum < a);
//!
//! let mut hex = Number::from_str_radix("3fa.9de", 16)?;
//! hex.shift(-2)?;
//! assert_eq!(hex.to_string(), "3.fa9de");
//!
//! assert_eq!(sqrt_digits(11, 2, 10)?, "1.4142135623");
//! # Ok::<(), NumericError>(())
//! ```

pub mod numeric;
pub mod sqrt;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        IntoDigit, Number, NumericError, NumericResult, Position, Sign, MAX_BASE, MIN_BASE,
    };
    pub use crate::sqrt::{sqrt_digits, sqrt_digits_native, sqrt_digits_of, SqrtConfig, SqrtMethod};
}
