//! Incremental confluent divided-difference table.
//!
//! Only two diagonals of the triangular table are kept:
//!
//! - the *top* diagonal `f[z_0], f[z_0, z_1], …, f[z_0 … z_{N-1}]`, i.e. the
//!   Newton-form coefficients, which never change once written;
//! - the *bottom* diagonal `f[z_m … z_{N-1}]` for `m = 0 … N-1`, the latest
//!   row of the recurrence, rewritten every time a node is appended.
//!
//! A sample point with derivatives up to order `k` at `x` contributes `k + 1`
//! nodes all equal to `x`.  For a run of equal nodes the divided difference
//! is `f^(j)(x) / j!`, so those bottom-diagonal entries are seeded directly
//! instead of being divided by a zero abscissa gap.

use std::mem;

use osc_core::{errors::Result, Error};

use crate::field::{factorials, FieldElement};

/// The two rolling diagonals of a divided-difference table over vectors of
/// field elements.
///
/// This type performs no validation of its own beyond dimensions; the
/// interpolator façade checks abscissa uniqueness before calling
/// [`extend`](Self::extend).
#[derive(Debug, Clone)]
pub(crate) struct DividedDifferenceTable<T> {
    /// One entry per node, repeated for confluent nodes.
    abscissas: Vec<T>,
    top: Vec<Vec<T>>,
    bottom: Vec<Vec<T>>,
}

impl<T> Default for DividedDifferenceTable<T> {
    fn default() -> Self {
        Self {
            abscissas: Vec::new(),
            top: Vec::new(),
            bottom: Vec::new(),
        }
    }
}

impl<T: FieldElement> DividedDifferenceTable<T> {
    /// An empty table with room for `nodes` nodes.
    pub(crate) fn with_capacity(nodes: usize) -> Self {
        Self {
            abscissas: Vec::with_capacity(nodes),
            top: Vec::with_capacity(nodes),
            bottom: Vec::with_capacity(nodes),
        }
    }

    /// Number of nodes, confluent ones included.
    pub(crate) fn len(&self) -> usize {
        self.top.len()
    }

    /// `true` before the first node is appended.
    pub(crate) fn is_empty(&self) -> bool {
        self.top.is_empty()
    }

    /// Node abscissas in insertion order, with repeats for confluent nodes.
    pub(crate) fn abscissas(&self) -> &[T] {
        &self.abscissas
    }

    /// Newton-form coefficient vectors, one per node.
    pub(crate) fn coefficients(&self) -> &[Vec<T>] {
        &self.top
    }

    /// Divide the order-`i` vector by `i!`, giving the divided difference
    /// over `i + 1` coincident nodes.
    pub(crate) fn seeds(derivatives: &[Vec<T>]) -> Vec<Vec<T>> {
        let facts = factorials::<T>(derivatives.len());
        derivatives
            .iter()
            .zip(facts)
            .enumerate()
            .map(|(order, (values, fact))| {
                if order < 2 {
                    values.clone()
                } else {
                    values.iter().map(|v| v.clone() / fact.clone()).collect()
                }
            })
            .collect()
    }

    /// Append the nodes of one sample point at `x`.
    ///
    /// `derivatives[i]` holds the `i`-th derivative of every component.  All
    /// vectors must have the same length; the caller guarantees `x` differs
    /// from every abscissa already in the table.
    pub(crate) fn extend(&mut self, x: &T, derivatives: &[Vec<T>]) -> Result<()> {
        if let Some(first) = derivatives.first() {
            let dim = first.len();
            if let Some(bad) = derivatives.iter().find(|d| d.len() != dim) {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    got: bad.len(),
                });
            }
        }

        let seeds = Self::seeds(derivatives);
        let start = self.abscissas.len();
        for order in 0..seeds.len() {
            // Nodes start ..= start + order all sit on x.
            self.bottom.truncate(start);
            self.bottom.extend(seeds[..=order].iter().rev().cloned());

            for m in (0..start).rev() {
                let dx = x.clone() - self.abscissas[m].clone();
                let (head, tail) = self.bottom.split_at_mut(m + 1);
                let lower = &mut head[m];
                for (low, up) in lower.iter_mut().zip(&tail[0]) {
                    let earlier = mem::replace(low, T::zero());
                    *low = (up.clone() - earlier) / dx.clone();
                }
            }

            self.top.push(self.bottom[0].clone());
            self.abscissas.push(x.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::BigRational;

    fn q(n: i64) -> BigRational {
        BigRational::from_integer(n.into())
    }

    fn qs(ns: &[i64]) -> Vec<BigRational> {
        ns.iter().map(|&n| q(n)).collect()
    }

    #[test]
    fn classic_divided_differences() {
        // f(x) = x² at 0, 1, 3: f[0]=0, f[0,1]=1, f[0,1,3]=1
        let mut t = DividedDifferenceTable::default();
        t.extend(&q(0), &[qs(&[0])]).unwrap();
        t.extend(&q(1), &[qs(&[1])]).unwrap();
        t.extend(&q(3), &[qs(&[9])]).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.coefficients(), &[qs(&[0]), qs(&[1]), qs(&[1])]);
        assert_eq!(t.abscissas(), &qs(&[0, 1, 3])[..]);
    }

    #[test]
    fn confluent_nodes_use_scaled_derivatives() {
        // Taylor data of 1 + x + x² at 0: coefficients are 1, 1, 2/2!
        let mut t = DividedDifferenceTable::default();
        t.extend(&q(0), &[qs(&[1]), qs(&[1]), qs(&[2])]).unwrap();
        assert_eq!(t.coefficients(), &[qs(&[1]), qs(&[1]), qs(&[1])]);
        assert_eq!(t.abscissas(), &qs(&[0, 0, 0])[..]);
    }

    #[test]
    fn top_diagonal_is_never_rewritten() {
        let mut t = DividedDifferenceTable::default();
        t.extend(&q(-1), &[qs(&[2]), qs(&[-8])]).unwrap();
        let before = t.coefficients().to_vec();
        t.extend(&q(2), &[qs(&[5]), qs(&[1]), qs(&[4])]).unwrap();
        assert_eq!(&t.coefficients()[..2], &before[..]);
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn mixed_confluent_and_distinct_nodes() {
        // f(x) = x³: f(0)=0, f'(0)=0, f(1)=1, f'(1)=3.
        // Nodes 0,0,1,1: f[0]=0, f[0,0]=0, f[0,0,1]=1, f[0,0,1,1]=1
        let mut t = DividedDifferenceTable::default();
        t.extend(&q(0), &[qs(&[0]), qs(&[0])]).unwrap();
        t.extend(&q(1), &[qs(&[1]), qs(&[3])]).unwrap();
        assert_eq!(
            t.coefficients(),
            &[qs(&[0]), qs(&[0]), qs(&[1]), qs(&[1])]
        );
    }

    #[test]
    fn vector_valued_components_are_independent() {
        let mut t = DividedDifferenceTable::default();
        t.extend(&2.0, &[vec![4.0, -1.0]]).unwrap();
        t.extend(&4.0, &[vec![16.0, 3.0]]).unwrap();
        assert_eq!(t.coefficients()[1], vec![6.0, 2.0]);
    }

    #[test]
    fn ragged_derivatives_are_rejected_untouched() {
        let mut t = DividedDifferenceTable::default();
        let err = t.extend(&0.0, &[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                got: 1
            }
        );
        assert!(t.is_empty());
    }
}
