//! Univariate polynomials over [`Rational`] coefficients.
//!
//! Arithmetic comes in two forms. The `try_*` methods return
//! [`OverflowError`] when a coefficient or degree leaves its integer range
//! and leave the receiver untouched; the plain methods panic instead, the
//! same way the [`Rational`] operators do.

use std::fmt;

use num_traits::Zero;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{OverflowError, PolynomialError};
use crate::options::PolyOptions;
use crate::rational::Rational;
use crate::term::{write_unsigned, Term};

/// Univariate polynomial stored as terms in strictly decreasing degree order.
///
/// At most one term exists per degree. Terms whose coefficient cancels to
/// zero are kept in place, so a degree slot stays visible once it has been
/// written. Queries such as [`Polynomial::degree`] and
/// [`Polynomial::leading_term`] only look at the non-zero terms.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PolynomialParts")]
pub struct Polynomial {
    terms: Vec<Term>,
}

/// Unvalidated wire form of a [`Polynomial`], checked for term order on the way in.
#[derive(Debug, Deserialize)]
pub struct PolynomialParts {
    terms: Vec<Term>,
}

impl TryFrom<PolynomialParts> for Polynomial {
    type Error = PolynomialError;

    fn try_from(parts: PolynomialParts) -> Result<Self, Self::Error> {
        if let Some(pair) = parts
            .terms
            .windows(2)
            .find(|pair| pair[0].degree <= pair[1].degree)
        {
            return Err(PolynomialError::TermOrder {
                previous: pair[0].degree,
                degree: pair[1].degree,
            });
        }
        Ok(Polynomial { terms: parts.terms })
    }
}

#[derive(Clone, Copy)]
enum Sign {
    Plus,
    Minus,
}

#[cold]
fn overflow(op: &str) -> ! {
    panic!("polynomial {op} overflowed")
}

impl Polynomial {
    /// Polynomial with no terms at all.
    pub fn new() -> Self {
        Polynomial { terms: Vec::new() }
    }

    /// The zero polynomial as a single `0·x^0` term.
    pub fn zero() -> Self {
        Polynomial {
            terms: vec![Term::zero_at(0)],
        }
    }

    /// Build from terms in any order, inserting them one at a time.
    pub fn try_from_terms<I>(terms: I, options: &PolyOptions) -> Result<Self, OverflowError>
    where
        I: IntoIterator<Item = Term>,
    {
        let mut poly = Polynomial::new();
        for term in terms {
            poly.try_add_term(term, options)?;
        }
        Ok(poly)
    }

    pub fn from_terms<I>(terms: I, options: &PolyOptions) -> Self
    where
        I: IntoIterator<Item = Term>,
    {
        Self::try_from_terms(terms, options).unwrap_or_else(|_| overflow("construction"))
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// `true` when no term has a non-zero coefficient.
    pub fn is_zero(&self) -> bool {
        self.terms.iter().all(Term::is_zero)
    }

    pub fn non_zero_terms(&self) -> impl Iterator<Item = &Term> + '_ {
        self.terms.iter().filter(|t| !t.is_zero())
    }

    /// Non-zero term of highest degree.
    pub fn leading_term(&self) -> Option<&Term> {
        self.non_zero_terms().next()
    }

    /// Non-zero term of lowest degree.
    pub fn trailing_term(&self) -> Option<&Term> {
        self.non_zero_terms().last()
    }

    /// Degree of the leading non-zero term, or 0 if every term is zero.
    pub fn degree(&self) -> u32 {
        self.leading_term().map_or(0, |t| t.degree)
    }

    /// Exact lookup by degree, zero-coefficient terms included.
    pub fn term_at(&self, degree: u32) -> Option<&Term> {
        self.terms.iter().find(|t| t.degree == degree)
    }

    /// Insert `term`, merging into an existing term of the same degree.
    ///
    /// A merge adds the coefficients (the result may be zero and is kept).
    /// Otherwise the term is spliced in front of the first term of strictly
    /// smaller degree, and with `fill_gaps` the missing degrees are filled.
    /// Only a merge can overflow.
    pub fn try_add_term(
        &mut self,
        term: Term,
        options: &PolyOptions,
    ) -> Result<(), OverflowError> {
        self.merge_term(term, options, Sign::Plus)
    }

    /// Insert `term` or `-term`. With [`Sign::Minus`] a merge subtracts the
    /// coefficients directly and a splice inserts the negated term.
    fn merge_term(
        &mut self,
        term: Term,
        options: &PolyOptions,
        sign: Sign,
    ) -> Result<(), OverflowError> {
        if let Some(existing) = self.terms.iter_mut().find(|t| t.degree == term.degree) {
            let merged = match sign {
                Sign::Plus => existing.coefficient.checked_add(&term.coefficient),
                Sign::Minus => existing.coefficient.checked_sub(&term.coefficient),
            };
            existing.coefficient = merged.ok_or(OverflowError)?;
            return Ok(());
        }

        let term = match sign {
            Sign::Plus => term,
            Sign::Minus => term.checked_negate().ok_or(OverflowError)?,
        };
        let at = self
            .terms
            .iter()
            .position(|t| t.degree < term.degree)
            .unwrap_or(self.terms.len());
        self.terms.insert(at, term);

        if options.fill_gaps {
            self.fill_gaps();
        }
        Ok(())
    }

    pub fn add_term(&mut self, term: Term, options: &PolyOptions) {
        self.try_add_term(term, options)
            .unwrap_or_else(|_| overflow("term insertion"))
    }

    fn fill_gaps(&mut self) {
        let needs_fill = self
            .terms
            .windows(2)
            .any(|pair| pair[0].degree - pair[1].degree > 1);
        if !needs_fill {
            return;
        }

        let mut filled = Vec::with_capacity(self.terms.len());
        let mut iter = self.terms.iter().copied().peekable();
        while let Some(term) = iter.next() {
            filled.push(term);
            if let Some(next) = iter.peek() {
                for degree in (next.degree + 1..term.degree).rev() {
                    filled.push(Term::zero_at(degree));
                }
            }
        }
        trace!(
            before = self.terms.len(),
            after = filled.len(),
            "filled missing degrees"
        );
        self.terms = filled;
    }

    /// Sum of `self` and `other` as a new polynomial, folding in the terms
    /// of `other` one at a time.
    pub fn try_add_polynomial(
        &self,
        other: &Polynomial,
        options: &PolyOptions,
    ) -> Result<Self, OverflowError> {
        let mut sum = self.clone();
        for term in &other.terms {
            sum.try_add_term(*term, options)?;
        }
        Ok(sum)
    }

    pub fn add_polynomial(&self, other: &Polynomial, options: &PolyOptions) -> Self {
        self.try_add_polynomial(other, options)
            .unwrap_or_else(|_| overflow("addition"))
    }

    /// `self - other`, folding in the terms of `other` with their sign flipped.
    pub fn try_subtract_polynomial(
        &self,
        other: &Polynomial,
        options: &PolyOptions,
    ) -> Result<Self, OverflowError> {
        let mut difference = self.clone();
        for term in &other.terms {
            difference.merge_term(*term, options, Sign::Minus)?;
        }
        Ok(difference)
    }

    pub fn subtract_polynomial(&self, other: &Polynomial, options: &PolyOptions) -> Self {
        self.try_subtract_polynomial(other, options)
            .unwrap_or_else(|_| overflow("subtraction"))
    }

    /// Multiply every term by `factor`. All degrees shift by the same amount,
    /// so the ordering invariant holds without re-sorting.
    pub fn try_scale_by_term(&self, factor: &Term) -> Result<Self, OverflowError> {
        let terms = self
            .terms
            .iter()
            .map(|term| term.checked_scale(factor))
            .collect::<Option<Vec<_>>>()
            .ok_or(OverflowError)?;
        Ok(Polynomial { terms })
    }

    pub fn scale_by_term(&self, factor: &Term) -> Self {
        self.try_scale_by_term(factor)
            .unwrap_or_else(|_| overflow("scaling"))
    }

    pub fn try_negate(&self) -> Result<Self, OverflowError> {
        let terms = self
            .terms
            .iter()
            .map(Term::checked_negate)
            .collect::<Option<Vec<_>>>()
            .ok_or(OverflowError)?;
        Ok(Polynomial { terms })
    }

    pub fn negate(&self) -> Self {
        self.try_negate().unwrap_or_else(|_| overflow("negation"))
    }

    /// Full polynomial product: the sum of `self` scaled by each term of `other`.
    pub fn try_multiply_polynomial(
        &self,
        other: &Polynomial,
        options: &PolyOptions,
    ) -> Result<Self, OverflowError> {
        let mut product = Polynomial::new();
        for term in &other.terms {
            product = product.try_add_polynomial(&self.try_scale_by_term(term)?, options)?;
        }
        if product.is_empty() {
            return Ok(Polynomial::zero());
        }
        Ok(product)
    }

    pub fn multiply_polynomial(&self, other: &Polynomial, options: &PolyOptions) -> Self {
        self.try_multiply_polynomial(other, options)
            .unwrap_or_else(|_| overflow("multiplication"))
    }

    /// Value at `x`, or `None` on overflow.
    pub fn evaluate(&self, x: Rational) -> Option<Rational> {
        self.terms.iter().try_fold(Rational::zero(), |acc, term| {
            let power = x.checked_pow(term.degree)?;
            acc.checked_add(&term.coefficient.checked_mul(&power)?)
        })
    }

    /// Same non-zero terms, ignoring zero placeholders.
    pub fn equivalent(&self, other: &Polynomial) -> bool {
        self.non_zero_terms().eq(other.non_zero_terms())
    }
}

/// `4x^2 + 2x - 1`. Zero terms before the first non-zero term are skipped,
/// later ones are written out; an all-zero polynomial prints as `0`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut started = false;
        for term in &self.terms {
            if !started && term.is_zero() {
                continue;
            }
            let negative = term.coefficient.is_negative();
            match (started, negative) {
                (false, false) => {}
                (false, true) => f.write_str("-")?,
                (true, false) => f.write_str(" + ")?,
                (true, true) => f.write_str(" - ")?,
            }
            write_unsigned(f, term)?;
            started = true;
        }
        if !started {
            f.write_str("0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(n: i64, degree: u32) -> Term {
        Term::new(Rational::from_integer(n), degree)
    }

    fn degrees(p: &Polynomial) -> Vec<u32> {
        p.terms().iter().map(|t| t.degree).collect()
    }

    #[test]
    fn test_insert_keeps_decreasing_order() {
        let sparse = PolyOptions::sparse();
        let mut p = Polynomial::new();
        p.add_term(t(1, 2), &sparse);
        p.add_term(t(1, 5), &sparse);
        p.add_term(t(1, 0), &sparse);
        p.add_term(t(1, 3), &sparse);
        assert_eq!(degrees(&p), vec![5, 3, 2, 0]);
    }

    #[test]
    fn test_insert_merges_same_degree() {
        let sparse = PolyOptions::sparse();
        let mut p = Polynomial::from_terms([t(3, 2), t(1, 1)], &sparse);
        p.add_term(t(-3, 2), &sparse);
        // cancelled term stays in its slot
        assert_eq!(degrees(&p), vec![2, 1]);
        assert!(p.terms()[0].is_zero());
        assert_eq!(p.degree(), 1);
    }

    #[test]
    fn test_fill_gaps_between_neighbours() {
        let dense = PolyOptions::dense();
        let p = Polynomial::from_terms([t(1, 6), t(1, 5), t(8, 1)], &dense);
        assert_eq!(degrees(&p), vec![6, 5, 4, 3, 2, 1]);
        assert!(p.term_at(4).unwrap().is_zero());
        assert!(p.term_at(0).is_none());
    }

    #[test]
    fn test_fill_gaps_after_prepend() {
        let dense = PolyOptions::dense();
        let mut p = Polynomial::from_terms([t(1, 0)], &dense);
        p.add_term(t(2, 3), &dense);
        assert_eq!(degrees(&p), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_leading_and_trailing_skip_zero_terms() {
        let dense = PolyOptions::dense();
        // 0x^4 + 3x^3 + 0x^2 + 5x + 0
        let mut p = Polynomial::from_terms([t(1, 4), t(3, 3), t(5, 1), t(1, 0)], &dense);
        p.add_term(t(-1, 4), &dense);
        p.add_term(t(-1, 0), &dense);

        assert_eq!(p.leading_term(), Some(&t(3, 3)));
        assert_eq!(p.trailing_term(), Some(&t(5, 1)));
        assert_eq!(p.degree(), 3);
    }

    #[test]
    fn test_trailing_term_with_more_zero_terms_than_non_zero() {
        // the non-zero list is shorter than the full term list
        let dense = PolyOptions::dense();
        let p = Polynomial::from_terms([t(2, 5), t(7, 1)], &dense);
        assert_eq!(p.len(), 5);
        assert_eq!(p.trailing_term(), Some(&t(7, 1)));
    }

    #[test]
    fn test_degree_of_zero_polynomial() {
        assert_eq!(Polynomial::zero().degree(), 0);
        assert_eq!(Polynomial::new().degree(), 0);
        assert!(Polynomial::zero().leading_term().is_none());
        assert!(Polynomial::zero().is_zero());
    }

    #[test]
    fn test_add_polynomial_leaves_operands_untouched() {
        let opts = PolyOptions::default();
        let p = Polynomial::from_terms([t(1, 2), t(1, 0)], &opts);
        let q = Polynomial::from_terms([t(-1, 2), t(4, 1)], &opts);
        let sum = p.add_polynomial(&q, &opts);

        assert_eq!(sum.to_string(), "4x + 1");
        assert!(sum.terms()[0].is_zero());
        assert_eq!(p.to_string(), "x^2 + 0x + 1");
        assert_eq!(q.to_string(), "-x^2 + 4x");
    }

    #[test]
    fn test_scale_by_term() {
        let opts = PolyOptions::default();
        let p = Polynomial::from_terms([t(2, 2), t(-1, 1), t(2, 0)], &opts);
        let scaled = p.scale_by_term(&t(4, 2));
        assert_eq!(degrees(&scaled), vec![4, 3, 2]);
        assert_eq!(scaled.to_string(), "8x^4 - 4x^3 + 8x^2");
        assert_eq!(p.negate().to_string(), "-2x^2 + x - 2");
    }

    #[test]
    fn test_multiply_polynomial() {
        let opts = PolyOptions::default();
        // (x + 1)(x - 1) = x^2 - 1
        let a = Polynomial::from_terms([t(1, 1), t(1, 0)], &opts);
        let b = Polynomial::from_terms([t(1, 1), t(-1, 0)], &opts);
        let product = a.multiply_polynomial(&b, &opts);
        assert_eq!(product.to_string(), "x^2 + 0x - 1");
        assert!(product.equivalent(&Polynomial::from_terms(
            [t(1, 2), t(-1, 0)],
            &PolyOptions::sparse()
        )));
    }

    #[test]
    fn test_evaluate() {
        let opts = PolyOptions::default();
        let p = Polynomial::from_terms([t(2, 2), t(-3, 1), t(1, 0)], &opts);
        assert_eq!(p.evaluate(Rational::from_integer(2)), Some(Rational::from_integer(3)));
        assert_eq!(
            p.evaluate(Rational::new(1, 2).unwrap()),
            Some(Rational::zero())
        );
    }

    #[test]
    fn test_try_add_term_overflow_leaves_receiver_untouched() {
        let opts = PolyOptions::default();
        let mut p = Polynomial::from_terms([t(i64::MAX, 1), t(1, 0)], &opts);
        let before = p.clone();
        assert_eq!(p.try_add_term(t(1, 1), &opts), Err(OverflowError));
        assert_eq!(p, before);
    }

    #[test]
    fn test_try_arithmetic_reports_overflow() {
        let opts = PolyOptions::default();
        let big = Polynomial::from_terms([t(i64::MAX, 1), t(i64::MAX, 0)], &opts);
        let factor = Polynomial::from_terms([t(1, 1), t(-i64::MAX, 0)], &opts);

        assert_eq!(big.try_scale_by_term(&t(2, 0)), Err(OverflowError));
        assert_eq!(big.try_multiply_polynomial(&factor, &opts), Err(OverflowError));
        assert_eq!(big.try_add_polynomial(&big, &opts), Err(OverflowError));

        let most_negative = Polynomial::from_terms([t(i64::MIN, 0)], &opts);
        assert_eq!(most_negative.try_negate(), Err(OverflowError));
        assert_eq!(
            Polynomial::zero().try_subtract_polynomial(&most_negative, &opts),
            Err(OverflowError)
        );
        // subtraction does not go through negation
        let difference = most_negative
            .try_subtract_polynomial(&most_negative, &opts)
            .unwrap();
        assert!(difference.is_zero());
    }

    #[test]
    fn test_display_of_merged_minimum_coefficient() {
        // -9223372036854775807x - x merges to exactly i64::MIN
        let opts = PolyOptions::default();
        let p = Polynomial::from_terms([t(-i64::MAX, 1), t(-1, 1), t(3, 0)], &opts);
        assert_eq!(p.terms()[0].coefficient.numerator(), i64::MIN);
        assert_eq!(p.to_string(), "-9223372036854775808x + 3");
    }

    #[test]
    fn test_deserialize_checks_term_order() {
        let term = |n: i64, degree: u32| {
            format!(r#"{{"coefficient":{{"numerator":{n},"denominator":1}},"degree":{degree}}}"#)
        };
        let unordered = format!(r#"{{"terms":[{},{},{}]}}"#, term(1, 0), term(1, 2), term(5, 2));
        let err = serde_json::from_str::<Polynomial>(&unordered).unwrap_err();
        assert!(err.to_string().contains("degrees must strictly decrease"));

        let duplicate = format!(r#"{{"terms":[{},{}]}}"#, term(1, 2), term(5, 2));
        assert!(serde_json::from_str::<Polynomial>(&duplicate).is_err());

        // zero placeholders survive a round trip
        let dense = Polynomial::from_terms([t(1, 2), t(1, 0)], &PolyOptions::dense());
        let json = serde_json::to_string(&dense).unwrap();
        assert_eq!(serde_json::from_str::<Polynomial>(&json).unwrap(), dense);
    }

    #[test]
    fn test_display() {
        let opts = PolyOptions::default();
        let p = Polynomial::from_terms([t(4, 2), t(2, 1), t(-1, 0)], &opts);
        assert_eq!(p.to_string(), "4x^2 + 2x - 1");
        assert_eq!(Polynomial::zero().to_string(), "0");
        let lead_zero = p.add_polynomial(&Polynomial::from_terms([t(-4, 2)], &opts), &opts);
        assert_eq!(lead_zero.to_string(), "2x - 1");
    }
}
