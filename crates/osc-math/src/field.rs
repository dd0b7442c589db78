//! The arithmetic contract required by the generic interpolators.
//!
//! Any type with additive and multiplicative identities, the four field
//! operations and negation qualifies: `f64`, `f32`,
//! `num_rational::BigRational`, `num_complex::Complex<f64>`, …  Nothing here
//! assumes an ordering or floating-point semantics, and small integers are
//! built from repeated additions of `one()` rather than casts.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// A field element usable by [`FieldHermiteInterpolator`].
///
/// Blanket-implemented; there is nothing to implement by hand.
///
/// [`FieldHermiteInterpolator`]: crate::interpolations::FieldHermiteInterpolator
pub trait FieldElement:
    Clone
    + PartialEq
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The integer `n` as a field element (`one()` added `n` times).
    fn from_count(n: usize) -> Self {
        let mut acc = Self::zero();
        for _ in 0..n {
            acc = acc + Self::one();
        }
        acc
    }
}

impl<T> FieldElement for T where
    T: Clone
        + PartialEq
        + Debug
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
{
}

/// The integers `0, 1, …, n-1` as field elements.
pub fn integers<T: FieldElement>(n: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(n);
    let mut counter = T::zero();
    for _ in 0..n {
        out.push(counter.clone());
        counter = counter + T::one();
    }
    out
}

/// The factorials `0!, 1!, …, (n-1)!` as field elements.
pub fn factorials<T: FieldElement>(n: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(n);
    let mut counter = T::zero();
    let mut fact = T::one();
    for i in 0..n {
        if i > 0 {
            counter = counter + T::one();
            fact = fact * counter.clone();
        }
        out.push(fact.clone());
    }
    out
}

/// `n!` as a field element.
pub fn factorial<T: FieldElement>(n: usize) -> T {
    factorials::<T>(n + 1).pop().unwrap_or_else(T::one)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::BigRational;

    #[test]
    fn from_count_builds_small_integers() {
        assert_eq!(f64::from_count(0), 0.0);
        assert_eq!(f64::from_count(7), 7.0);
        assert_eq!(
            BigRational::from_count(12),
            BigRational::from_integer(12.into())
        );
    }

    #[test]
    fn integer_table() {
        assert_eq!(integers::<f64>(4), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(integers::<BigRational>(3)[2], BigRational::from_count(2));
    }

    #[test]
    fn factorial_table() {
        let f: Vec<f64> = factorials(6);
        assert_eq!(f, vec![1.0, 1.0, 2.0, 6.0, 24.0, 120.0]);
        assert!(factorials::<f64>(0).is_empty());
    }

    #[test]
    fn factorial_exact() {
        let f: BigRational = factorial(10);
        assert_eq!(f, BigRational::from_integer(3_628_800.into()));
        assert_eq!(factorial::<f64>(0), 1.0);
    }
}
