// ============================================================================
// Square Root Module
// Digit-by-digit square root approximation in any supported base
// ============================================================================
//
// This module provides:
// - sqrt_digits / sqrt_digits_of: exact extraction on radix numbers
// - sqrt_digits_native: the same greedy search on f64
// - SqrtConfig: base, digit count and backend selection

mod config;
mod digit_by_digit;

pub use config::{SqrtConfig, SqrtMethod};
pub use digit_by_digit::{sqrt_digits, sqrt_digits_native, sqrt_digits_of};
