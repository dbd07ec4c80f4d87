//! Exact rational numbers over machine integers.
//!
//! Every value is kept in lowest terms with a strictly positive denominator,
//! and zero is always stored as `0/1`. Intermediate products are computed in
//! `i128` and reduced before being narrowed back, so a result only overflows
//! when its *reduced* form leaves the `i64` range.
//!
//! By-value arithmetic goes through the std operator traits (`a + b`), the
//! in-place forms through the `*Assign` traits (`a += b`). The operators panic
//! on overflow or on division by zero, like the primitive integer operators;
//! the `checked_*` methods return `None` instead.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_integer::Integer;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::RationalError;

/// A fraction `numerator / denominator` in lowest terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RationalParts")]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

/// Unvalidated wire form of a [`Rational`], reduced on the way in.
#[derive(Debug, Deserialize)]
pub struct RationalParts {
    numerator: i64,
    denominator: i64,
}

impl TryFrom<RationalParts> for Rational {
    type Error = RationalError;

    fn try_from(parts: RationalParts) -> Result<Self, Self::Error> {
        Rational::new(parts.numerator, parts.denominator)
    }
}

impl Rational {
    /// Build `numerator / denominator`, reducing by the gcd.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        if denominator == 0 {
            return Err(RationalError::ZeroDenominator);
        }
        Self::reduce(numerator as i128, denominator as i128).ok_or(RationalError::Overflow {
            numerator: numerator as i128,
            denominator: denominator as i128,
        })
    }

    /// Integer value `n / 1`.
    pub const fn from_integer(n: i64) -> Self {
        Rational {
            numerator: n,
            denominator: 1,
        }
    }

    #[inline]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    #[inline]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Reduce an `i128` pair to lowest terms with a positive denominator.
    /// Returns `None` for a zero denominator or when the result leaves `i64`.
    fn reduce(numerator: i128, denominator: i128) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        if numerator == 0 {
            return Some(Self::zero());
        }
        let g = numerator.gcd(&denominator);
        let (mut n, mut d) = (numerator / g, denominator / g);
        if d < 0 {
            n = -n;
            d = -d;
        }
        Some(Rational {
            numerator: i64::try_from(n).ok()?,
            denominator: i64::try_from(d).ok()?,
        })
    }

    /// Cross-multiplied sum, reduced.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        let (a, b) = (self.numerator as i128, self.denominator as i128);
        let (c, d) = (other.numerator as i128, other.denominator as i128);
        Self::reduce(a * d + c * b, b * d)
    }

    /// Cross-multiplied difference, reduced. Computed directly rather than
    /// through negation, so `i64::MIN` operands work.
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        let (a, b) = (self.numerator as i128, self.denominator as i128);
        let (c, d) = (other.numerator as i128, other.denominator as i128);
        Self::reduce(a * d - c * b, b * d)
    }

    /// Numerator-by-numerator, denominator-by-denominator product, reduced.
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        Self::reduce(
            self.numerator as i128 * other.numerator as i128,
            self.denominator as i128 * other.denominator as i128,
        )
    }

    /// Division as multiplication by [`Rational::reciprocal`].
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        self.checked_mul(&other.reciprocal()?)
    }

    pub fn checked_neg(&self) -> Option<Self> {
        Some(Rational {
            numerator: self.numerator.checked_neg()?,
            denominator: self.denominator,
        })
    }

    /// Swap numerator and denominator, keeping the sign on the numerator.
    /// Zero has no reciprocal.
    pub fn reciprocal(&self) -> Option<Self> {
        match self.numerator.cmp(&0) {
            Ordering::Equal => None,
            Ordering::Greater => Some(Rational {
                numerator: self.denominator,
                denominator: self.numerator,
            }),
            Ordering::Less => Some(Rational {
                numerator: self.denominator.checked_neg()?,
                denominator: self.numerator.checked_neg()?,
            }),
        }
    }

    /// `self^exp` by repeated multiplication.
    pub fn checked_pow(&self, exp: u32) -> Option<Self> {
        let mut acc = Self::one();
        for _ in 0..exp {
            acc = acc.checked_mul(self)?;
        }
        Some(acc)
    }
}

#[cold]
fn overflow(op: &str, lhs: &Rational, rhs: &Rational) -> ! {
    panic!("rational {op} overflowed or divided by zero: {lhs} and {rhs}")
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(1)
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        self.checked_add(&rhs)
            .unwrap_or_else(|| overflow("addition", &self, &rhs))
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        self.checked_sub(&rhs)
            .unwrap_or_else(|| overflow("subtraction", &self, &rhs))
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        self.checked_mul(&rhs)
            .unwrap_or_else(|| overflow("multiplication", &self, &rhs))
    }
}

impl Div for Rational {
    type Output = Rational;

    fn div(self, rhs: Rational) -> Rational {
        self.checked_div(&rhs)
            .unwrap_or_else(|| overflow("division", &self, &rhs))
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        self.checked_neg()
            .unwrap_or_else(|| overflow("negation", &self, &Self::zero()))
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Rational) {
        *self = *self + rhs;
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Rational) {
        *self = *self - rhs;
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Rational) {
        *self = *self * rhs;
    }
}

impl DivAssign for Rational {
    fn div_assign(&mut self, rhs: Rational) {
        *self = *self / rhs;
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive, so cross-multiplying keeps the order
        let lhs = self.numerator as i128 * other.denominator as i128;
        let rhs = other.numerator as i128 * self.denominator as i128;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
