//! Error types for polydiv_math crate.

use thiserror::Error;

/// Errors raised while building a [`crate::Rational`] from raw parts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    /// Denominator of zero
    #[error("denominator must not be zero")]
    ZeroDenominator,

    /// Reduced value does not fit the machine integer range
    #[error("rational {numerator}/{denominator} is out of range")]
    Overflow { numerator: i128, denominator: i128 },
}

/// Coefficient arithmetic left the `i64` range, or a degree left `u32`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("coefficient arithmetic overflowed")]
pub struct OverflowError;

/// Errors raised while building a [`crate::Polynomial`] from raw terms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    /// Degrees must strictly decrease from one term to the next
    #[error("term of degree {degree} follows degree {previous}; degrees must strictly decrease")]
    TermOrder { previous: u32, degree: u32 },
}
