use polydiv_math::{OverflowError, PolyOptions, Polynomial, Term};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineError;
use crate::step::StepKind;

/// Complete record of one long division.
///
/// `steps` alternates `[product₀, remainder₀, product₁, remainder₁, …]`;
/// see [`StepKind`]. The record owns copies of both operands, so it stays
/// valid independently of the inputs it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionTrace {
    pub divisor: Polynomial,
    pub dividend: Polynomial,
    pub quotient: Polynomial,
    pub remainder: Polynomial,
    pub steps: Vec<Polynomial>,
}

/// One elimination round, borrowed from a [`DivisionTrace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionIteration<'a> {
    pub index: usize,
    pub quotient_term: &'a Term,
    pub product: &'a Polynomial,
    pub remainder: &'a Polynomial,
}

impl DivisionTrace {
    /// Number of elimination rounds that ran.
    pub fn iteration_count(&self) -> usize {
        self.steps.len() / 2
    }

    /// Rounds in order, pairing each product/remainder with the quotient
    /// term that produced it.
    pub fn iterations(&self) -> impl Iterator<Item = DivisionIteration<'_>> + '_ {
        // each round adds one non-zero quotient term of strictly lower degree,
        // so the quotient's non-zero terms line up with the rounds
        self.quotient
            .non_zero_terms()
            .zip(self.steps.chunks_exact(2))
            .enumerate()
            .map(|(index, (quotient_term, pair))| DivisionIteration {
                index,
                quotient_term,
                product: &pair[0],
                remainder: &pair[1],
            })
    }

    /// Steps tagged with their role.
    pub fn tagged_steps(&self) -> impl Iterator<Item = (StepKind, &Polynomial)> + '_ {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| (StepKind::of_index(i), step))
    }

    /// Check `divisor · quotient + remainder ≡ dividend`. A check that
    /// overflows while recomputing the product counts as a failure.
    pub fn verify(&self) -> bool {
        let opts = PolyOptions::sparse();
        self.divisor
            .try_multiply_polynomial(&self.quotient, &opts)
            .and_then(|product| product.try_add_polynomial(&self.remainder, &opts))
            .is_ok_and(|lhs| lhs.equivalent(&self.dividend))
    }
}

/// Divide `dividend` by `divisor`, recording every intermediate step.
///
/// Each round divides the remainder's leading term by the divisor's leading
/// term, adds that to the quotient, and subtracts `divisor × term` from the
/// remainder. Rounds continue while the remainder still has a non-zero term
/// and its degree is at least the divisor's.
///
/// Degenerate inputs are not errors: a zero divisor, a zero dividend, or a
/// dividend of lower degree than the divisor run no rounds, giving the zero
/// quotient and the dividend itself as remainder. The only failure is
/// [`EngineError::Overflow`], when a coefficient leaves the `i64` range.
pub fn long_division(
    dividend: &Polynomial,
    divisor: &Polynomial,
    options: &PolyOptions,
) -> Result<DivisionTrace, EngineError> {
    let mut quotient = Polynomial::new();
    let mut remainder = dividend.clone();
    let mut steps = Vec::new();

    let divisor_degree = divisor.degree();
    match divisor.leading_term().copied() {
        Some(divisor_lead) => {
            while remainder.degree() >= divisor_degree {
                let Some(lead) = remainder.leading_term().copied() else {
                    break;
                };
                let round = steps.len() / 2;

                let (quotient_term, product, next) =
                    eliminate(&lead, &divisor_lead, divisor, &remainder, &mut quotient, options)
                        .map_err(|_| {
                            debug!(round, remainder = %remainder, "coefficient overflow");
                            EngineError::Overflow { round }
                        })?;

                debug!(
                    round,
                    quotient_term = %quotient_term,
                    remainder = %next,
                    remainder_degree = next.degree(),
                    "eliminated leading term"
                );

                steps.push(product);
                steps.push(next.clone());
                remainder = next;
            }
        }
        None => debug!(divisor = %divisor, "divisor has no non-zero term, nothing to divide"),
    }

    if quotient.is_empty() {
        quotient = Polynomial::zero();
    }

    Ok(DivisionTrace {
        divisor: divisor.clone(),
        dividend: dividend.clone(),
        quotient,
        remainder,
        steps,
    })
}

/// One round: the quotient term (also added to `quotient`), the product
/// that is subtracted, and the remainder left afterwards.
fn eliminate(
    lead: &Term,
    divisor_lead: &Term,
    divisor: &Polynomial,
    remainder: &Polynomial,
    quotient: &mut Polynomial,
    options: &PolyOptions,
) -> Result<(Term, Polynomial, Polynomial), OverflowError> {
    // the loop guard rules out a negative degree and the divisor lead is
    // non-zero, so `None` here can only be coefficient overflow
    let quotient_term = lead.divide(divisor_lead).ok_or(OverflowError)?;
    let product = divisor.try_scale_by_term(&quotient_term)?;
    let next = remainder.try_subtract_polynomial(&product, options)?;
    quotient.try_add_term(quotient_term, options)?;
    Ok((quotient_term, product, next))
}

/// Parse both operands and divide.
pub fn divide_str(
    dividend: &str,
    divisor: &str,
    options: &PolyOptions,
) -> Result<DivisionTrace, EngineError> {
    let dividend = polydiv_parser::parse(dividend, options).map_err(EngineError::Dividend)?;
    let divisor = polydiv_parser::parse(divisor, options).map_err(EngineError::Divisor)?;
    long_division(&dividend, &divisor, options)
}
