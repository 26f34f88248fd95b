// ============================================================================
// Numeric Errors
// Error types for radix number construction and arithmetic
// ============================================================================

use std::fmt;

use super::number::Position;

/// Errors that can occur while building or combining radix numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Base below 2, no positional system exists
    BaseTooSmall { base: u32 },
    /// Base above 34, no digit symbols are assigned
    UnsupportedBase { base: u32 },
    /// Input string does not match `-?[0-9a-z]+\.[0-9a-z]*`
    InvalidFormat,
    /// Digit value is negative or not below the base
    DigitOutOfRange { digit: i128, base: u32 },
    /// Operands use different bases
    IncompatibleOperands { left: u32, right: u32 },
    /// Operation is declared but not provided
    UnsupportedOperation(&'static str),
    /// A borrow ran past the most-significant digit
    BorrowUnderflow { position: Position },
    /// A digit position left the `i64` range (shift or carry)
    PositionOverflow { position: Position },
    /// Argument outside the accepted domain (digit count, radicand)
    InvalidInput,
}

impl NumericError {
    /// True for both base validation kinds.
    pub fn is_invalid_base(&self) -> bool {
        matches!(
            self,
            NumericError::BaseTooSmall { .. } | NumericError::UnsupportedBase { .. }
        )
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::BaseTooSmall { base } => {
                write!(f, "invalid base {}: must be 2 or greater", base)
            },
            NumericError::UnsupportedBase { base } => write!(
                f,
                "unsupported base {}: only bases up to 34 have digit symbols",
                base
            ),
            NumericError::InvalidFormat => {
                write!(f, "invalid format: expected digits, a radix point and optional fraction")
            },
            NumericError::DigitOutOfRange { digit, base } => {
                write!(f, "digit {} out of range for base {}", digit, base)
            },
            NumericError::IncompatibleOperands { left, right } => {
                write!(f, "incompatible operands: base {} and base {}", left, right)
            },
            NumericError::UnsupportedOperation(op) => write!(f, "unsupported operation: {}", op),
            NumericError::BorrowUnderflow { position } => write!(
                f,
                "borrow underflow at position {}: magnitude ordering violated",
                position
            ),
            NumericError::PositionOverflow { position } => {
                write!(f, "position overflow: digit at position {} cannot move", position)
            },
            NumericError::InvalidInput => write!(f, "invalid input: argument out of domain"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
