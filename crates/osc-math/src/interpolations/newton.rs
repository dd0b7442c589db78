//! Newton-form evaluation over a divided-difference table.
//!
//! With node abscissas `x_0 … x_{N-1}` (repeats allowed) and coefficient
//! vectors `c_0 … c_{N-1}`:
//!
//! ```text
//! P(x) = c_0 + (x − x_0)·(c_1 + (x − x_1)·(c_2 + … + (x − x_{N-2})·c_{N-1}))
//! ```
//!
//! All functions work component-wise and only read the table.

use crate::field::{integers, FieldElement};

/// Evaluate the Newton form at `x` by nested multiplication, from the
/// highest-order term down to `c_0`.
///
/// Returns an empty vector for an empty table.
pub fn evaluate<T: FieldElement>(abscissas: &[T], coefficients: &[Vec<T>], x: &T) -> Vec<T> {
    let Some((last, rest)) = coefficients.split_last() else {
        return Vec::new();
    };
    let mut acc = last.clone();
    for (c, xk) in rest.iter().zip(&abscissas[..rest.len()]).rev() {
        let dx = x.clone() - xk.clone();
        for (a, ck) in acc.iter_mut().zip(c) {
            *a = ck.clone() + dx.clone() * a.clone();
        }
    }
    acc
}

/// Evaluate the Newton form and its derivatives up to `order` at `x`.
///
/// Entry `j` of the result is the `j`-th derivative (not divided by `j!`).
/// The basis products `π_i(x) = ∏_{l<i} (x − x_l)` and their derivatives are
/// carried along with the product rule
/// `(π·(x − a))^(j) = π^(j)·(x − a) + j·π^(j−1)`.
pub fn evaluate_derivatives<T: FieldElement>(
    abscissas: &[T],
    coefficients: &[Vec<T>],
    x: &T,
    order: usize,
) -> Vec<Vec<T>> {
    let dim = coefficients.first().map_or(0, Vec::len);
    let js = integers::<T>(order + 1);
    let mut out = vec![vec![T::zero(); dim]; order + 1];

    // basis[j] = π_i^(j)(x) for the current i
    let mut basis = vec![T::zero(); order + 1];
    basis[0] = T::one();

    for (c, xk) in coefficients.iter().zip(abscissas) {
        let dx = x.clone() - xk.clone();
        for j in (0..=order).rev() {
            for (o, ck) in out[j].iter_mut().zip(c) {
                *o = o.clone() + ck.clone() * basis[j].clone();
            }
            basis[j] = basis[j].clone() * dx.clone();
            if j > 0 {
                basis[j] = basis[j].clone() + js[j].clone() * basis[j - 1].clone();
            }
        }
    }
    out
}

/// Expand the Newton form into monomial coefficients.
///
/// Returns one vector per component, holding the coefficients of
/// `1, x, x², …` in that order.
pub fn monomial_coefficients<T: FieldElement>(
    abscissas: &[T],
    coefficients: &[Vec<T>],
) -> Vec<Vec<T>> {
    let Some((last, rest)) = coefficients.split_last() else {
        return Vec::new();
    };
    (0..last.len())
        .map(|k| {
            let mut poly = vec![last[k].clone()];
            for (c, xk) in rest.iter().zip(&abscissas[..rest.len()]).rev() {
                // poly ← poly·(x − xk) + c[k]
                let mut next = vec![T::zero(); poly.len() + 1];
                for (i, p) in poly.iter().enumerate() {
                    next[i + 1] = next[i + 1].clone() + p.clone();
                    next[i] = next[i].clone() - xk.clone() * p.clone();
                }
                next[0] = next[0].clone() + c[k].clone();
                poly = next;
            }
            poly
        })
        .collect()
}
