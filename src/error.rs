//! Error type for fallible polynomial operations.

use thiserror::Error;

/// Errors raised by polynomial division.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The divisor is the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,

    /// A long-division step produced a non-integer quotient coefficient.
    ///
    /// `dividend` is the leading coefficient of the running remainder at
    /// `power`, `divisor` the leading coefficient of the divisor.
    #[error("not divisible: {dividend}x^{power} is not a multiple of {divisor}")]
    NotDivisible {
        dividend: i64,
        divisor: i64,
        power: u32,
    },

    /// Dividing leading coefficients overflowed `i64` (`i64::MIN / -1`).
    #[error("coefficient overflow dividing {dividend}x^{power} by {divisor}")]
    CoefficientOverflow {
        dividend: i64,
        divisor: i64,
        power: u32,
    },

    /// A term product has a power beyond `u32::MAX`.
    #[error("power overflow: x^{lhs} * x^{rhs}")]
    PowerOverflow { lhs: u32, rhs: u32 },
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, PolyError>;
