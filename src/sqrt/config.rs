// ============================================================================
// Square Root Configuration
// Base, precision and arithmetic backend for root extraction
// ============================================================================

use super::digit_by_digit::{sqrt_digits, sqrt_digits_native};
use crate::numeric::digits::validate_base;
use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Arithmetic Backend
// ============================================================================

/// Arithmetic used for the squared-candidate comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SqrtMethod {
    /// Exact radix numbers, no precision ceiling
    #[default]
    Exact,

    /// `f64` arithmetic, correct for roughly 16 significant decimal digits
    /// - Use case: quick approximations with few digits
    Native,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a digit-by-digit square root
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SqrtConfig {
    /// Number of digits to produce, the integer digit included
    pub num_digits: usize,

    /// Radix of the output, 2..=34
    pub base: u32,

    /// Arithmetic backend
    pub method: SqrtMethod,
}

impl SqrtConfig {
    /// Create a new configuration: base 10, exact arithmetic
    pub fn new(num_digits: usize) -> Self {
        Self {
            num_digits,
            base: 10,
            method: SqrtMethod::Exact,
        }
    }

    /// Builder method: Set output base
    pub fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    /// Builder method: Set arithmetic backend
    pub fn with_method(mut self, method: SqrtMethod) -> Self {
        self.method = method;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        validate_base(self.base)?;
        if self.num_digits == 0 {
            return Err(NumericError::InvalidInput);
        }
        Ok(())
    }

    /// Extract the first `num_digits` digits of `sqrt(k)`.
    ///
    /// # Example
    /// ```
    /// use radix_number::sqrt::SqrtConfig;
    ///
    /// let config = SqrtConfig::binary(6);
    /// assert_eq!(config.compute(2)?, "1.01101");
    /// # Ok::<(), radix_number::numeric::NumericError>(())
    /// ```
    pub fn compute(&self, k: u64) -> NumericResult<String> {
        self.validate()?;
        match self.method {
            SqrtMethod::Exact => sqrt_digits(self.num_digits, k, self.base),
            SqrtMethod::Native => sqrt_digits_native(self.num_digits, k as f64, self.base),
        }
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl SqrtConfig {
    /// Decimal digits, exact
    pub fn decimal(num_digits: usize) -> Self {
        Self::new(num_digits)
    }

    /// Binary digits, exact
    pub fn binary(num_digits: usize) -> Self {
        Self::new(num_digits).with_base(2)
    }

    /// Hexadecimal digits, exact
    pub fn hexadecimal(num_digits: usize) -> Self {
        Self::new(num_digits).with_base(16)
    }
}
