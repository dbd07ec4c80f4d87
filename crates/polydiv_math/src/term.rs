//! Monomials `coefficient · x^degree`.

use std::fmt;

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::rational::Rational;

/// A single monomial. The degree is a machine `u32`, so it can never go
/// negative; operations that would produce a negative degree return `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    pub coefficient: Rational,
    pub degree: u32,
}

impl Term {
    pub const fn new(coefficient: Rational, degree: u32) -> Self {
        Term {
            coefficient,
            degree,
        }
    }

    /// Constant term `n · x^0`.
    pub const fn constant(n: i64) -> Self {
        Term::new(Rational::from_integer(n), 0)
    }

    /// Zero-coefficient placeholder at `degree`.
    pub const fn zero_at(degree: u32) -> Self {
        Term::new(Rational::from_integer(0), degree)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Quotient of two monomials: coefficients divide exactly, degrees subtract.
    ///
    /// Returns `None` when `divisor` has a zero coefficient or a higher degree
    /// than `self` (the result would not be a polynomial term).
    pub fn divide(&self, divisor: &Term) -> Option<Term> {
        let degree = self.degree.checked_sub(divisor.degree)?;
        let coefficient = self.coefficient.checked_div(&divisor.coefficient)?;
        Some(Term::new(coefficient, degree))
    }

    /// Product of two monomials: coefficients multiply, degrees add.
    /// `None` when either leaves its integer range.
    pub fn checked_scale(&self, factor: &Term) -> Option<Term> {
        Some(Term::new(
            self.coefficient.checked_mul(&factor.coefficient)?,
            self.degree.checked_add(factor.degree)?,
        ))
    }

    pub fn checked_negate(&self) -> Option<Term> {
        Some(Term::new(self.coefficient.checked_neg()?, self.degree))
    }

    /// Panicking form of [`Term::checked_scale`].
    pub fn scale(&self, factor: &Term) -> Term {
        self.checked_scale(factor)
            .unwrap_or_else(|| panic!("term product overflowed: {self} by {factor}"))
    }

    pub fn negate(&self) -> Term {
        Term::new(-self.coefficient, self.degree)
    }
}

/// Plain-text rendering without a leading `+`: `-x^2`, `3/2x`, `7`.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficient.is_negative() {
            f.write_str("-")?;
        }
        write_unsigned(f, self)
    }
}

/// Write `|coefficient|` and the variable part. The coefficient is dropped
/// when it is exactly one and the term is not a constant.
pub(crate) fn write_unsigned(f: &mut fmt::Formatter<'_>, term: &Term) -> fmt::Result {
    // unsigned, so an i64::MIN numerator still has a magnitude
    let numerator = term.coefficient.numerator().unsigned_abs();
    let denominator = term.coefficient.denominator();
    match (denominator, term.degree) {
        (1, 0) => write!(f, "{numerator}")?,
        (1, _) if numerator == 1 => {}
        (1, _) => write!(f, "{numerator}")?,
        (_, 0) => write!(f, "{numerator}/{denominator}")?,
        _ => write!(f, "({numerator}/{denominator})")?,
    }
    match term.degree {
        0 => Ok(()),
        1 => f.write_str("x"),
        d => write!(f, "x^{d}"),
    }
}
