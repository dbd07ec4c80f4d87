//! Polynomial long division over exact rationals.
//!
//! [`long_division`] repeatedly eliminates the leading term of the running
//! remainder and records every subtracted product and resulting remainder in
//! a [`DivisionTrace`], so the whole computation can be replayed for display.

pub mod division;
pub mod error;
pub mod step;

pub use division::{divide_str, long_division, DivisionIteration, DivisionTrace};
pub use error::EngineError;
pub use step::StepKind;

pub use polydiv_math::{PolyOptions, Polynomial, Rational, Term};
