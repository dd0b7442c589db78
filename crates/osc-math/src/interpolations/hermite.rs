//! Osculating (Hermite) polynomial interpolation over any field.
//!
//! [`FieldHermiteInterpolator`] builds, one sample point at a time, the
//! minimal-degree polynomial matching prescribed values *and* derivatives at
//! distinct abscissas.  Each sample may carry its own number of derivatives
//! and every sample carries the same number of components, so several
//! functions of one variable are interpolated at once.
//!
//! [`HermiteInterpolation`] is the scalar `f64` convenience wrapper plugging
//! into [`Interpolation1D`].

use osc_core::{ensure, errors::Result, Error, Real};

use super::divided_differences::DividedDifferenceTable;
use super::{newton, Interpolation1D};
use crate::field::FieldElement;

/// Incremental Hermite interpolator over vectors of field elements.
///
/// # Example
/// ```
/// use osc_math::interpolations::FieldHermiteInterpolator;
///
/// // f(0) = 1, f'(0) = 1, f''(0) = 2  →  f(x) = 1 + x + x²
/// let mut h = FieldHermiteInterpolator::new();
/// h.add_sample_point(0.0, &[vec![1.0], vec![1.0], vec![2.0]]).unwrap();
/// assert_eq!(h.value(&2.0).unwrap(), vec![7.0]);
/// ```
#[derive(Debug, Clone)]
pub struct FieldHermiteInterpolator<T> {
    table: DividedDifferenceTable<T>,
    /// Distinct sample abscissas in insertion order.
    samples: Vec<T>,
    dimension: Option<usize>,
}

impl<T> Default for FieldHermiteInterpolator<T> {
    fn default() -> Self {
        Self {
            table: DividedDifferenceTable::default(),
            samples: Vec::new(),
            dimension: None,
        }
    }
}

impl<T: FieldElement> FieldHermiteInterpolator<T> {
    /// Create an empty interpolator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty interpolator with room for `nodes` table nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            table: DividedDifferenceTable::with_capacity(nodes),
            samples: Vec::new(),
            dimension: None,
        }
    }

    /// Add a sample point.
    ///
    /// `derivatives[0]` holds the values at `x`, `derivatives[1]` the first
    /// derivatives, `derivatives[2]` the second derivatives, and so on.
    ///
    /// # Errors
    /// - [`Error::DuplicateAbscissa`] if `x` was already sampled;
    /// - [`Error::InvalidArgument`] if `derivatives` is empty or its vectors
    ///   have no components;
    /// - [`Error::DimensionMismatch`] if the vectors differ in length from
    ///   each other or from the dimension fixed by the first sample point.
    ///
    /// On error the interpolator is left untouched.
    pub fn add_sample_point(&mut self, x: T, derivatives: &[Vec<T>]) -> Result<()> {
        let dim = self.check_sample(&x, derivatives)?;
        self.table.extend(&x, derivatives)?;
        self.samples.push(x);
        self.dimension = Some(dim);
        Ok(())
    }

    fn check_sample(&self, x: &T, derivatives: &[Vec<T>]) -> Result<usize> {
        if self.samples.iter().any(|s| s == x) {
            return Err(Error::DuplicateAbscissa(format!("{x:?}")));
        }
        let Some(values) = derivatives.first() else {
            return Err(Error::InvalidArgument(
                "a sample point needs at least a value vector".into(),
            ));
        };
        let dim = values.len();
        if dim == 0 {
            return Err(Error::InvalidArgument(
                "sample vectors must have at least one component".into(),
            ));
        }
        let expected = self.dimension.unwrap_or(dim);
        if let Some(bad) = derivatives.iter().find(|d| d.len() != expected) {
            return Err(Error::DimensionMismatch {
                expected,
                got: bad.len(),
            });
        }
        Ok(dim)
    }

    /// Interpolated (or extrapolated) value vector at `x`.
    ///
    /// # Errors
    /// [`Error::NoData`] if no sample point has been added.
    pub fn value(&self, x: &T) -> Result<Vec<T>> {
        self.ensure_data()?;
        Ok(newton::evaluate(
            self.table.abscissas(),
            self.table.coefficients(),
            x,
        ))
    }

    /// Value and derivatives up to `order` at `x`.
    ///
    /// Entry `j` of the result holds the `j`-th derivative of every
    /// component; entry `0` equals [`value`](Self::value).
    ///
    /// # Errors
    /// [`Error::NoData`] if no sample point has been added.
    pub fn derivatives(&self, x: &T, order: usize) -> Result<Vec<Vec<T>>> {
        self.ensure_data()?;
        Ok(newton::evaluate_derivatives(
            self.table.abscissas(),
            self.table.coefficients(),
            x,
            order,
        ))
    }

    /// Monomial coefficients of the interpolating polynomial, one vector
    /// per component, lowest power first.
    ///
    /// # Errors
    /// [`Error::NoData`] if no sample point has been added.
    pub fn coefficients(&self) -> Result<Vec<Vec<T>>> {
        self.ensure_data()?;
        Ok(newton::monomial_coefficients(
            self.table.abscissas(),
            self.table.coefficients(),
        ))
    }

    /// Number of components, fixed by the first sample point.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Number of table nodes (one per supplied value or derivative vector).
    pub fn node_count(&self) -> usize {
        self.table.len()
    }

    /// Number of sample points added.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// `true` until the first sample point is added.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Distinct sample abscissas in insertion order.
    pub fn abscissas(&self) -> &[T] {
        &self.samples
    }

    fn ensure_data(&self) -> Result<()> {
        if self.table.is_empty() {
            return Err(Error::NoData);
        }
        Ok(())
    }
}

// ── Scalar convenience ────────────────────────────────────────────────────────

/// Scalar Hermite interpolation through `(x_i, y_i)` and, optionally,
/// first derivatives `y'_i`.
///
/// The abscissas need not be sorted.  Outside `[x_min, x_max]` the
/// polynomial is extrapolated.
#[derive(Debug, Clone)]
pub struct HermiteInterpolation {
    inner: FieldHermiteInterpolator<Real>,
    x_min: Real,
    x_max: Real,
}

impl HermiteInterpolation {
    /// Polynomial interpolation through `(xs[i], ys[i])`.
    ///
    /// # Errors
    /// [`Error::NoData`] for empty input, [`Error::Precondition`] for
    /// slices of different lengths, [`Error::DuplicateAbscissa`] for
    /// repeated abscissas.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        Self::build(xs, &[ys])
    }

    /// Hermite interpolation through `(xs[i], ys[i])` with slopes `dys[i]`.
    pub fn with_derivatives(xs: &[Real], ys: &[Real], dys: &[Real]) -> Result<Self> {
        Self::build(xs, &[ys, dys])
    }

    fn build(xs: &[Real], columns: &[&[Real]]) -> Result<Self> {
        if xs.is_empty() {
            return Err(Error::NoData);
        }
        for col in columns {
            ensure!(
                col.len() == xs.len(),
                "{} abscissas but {} ordinates",
                xs.len(),
                col.len()
            );
        }
        let mut inner = FieldHermiteInterpolator::with_capacity(xs.len() * columns.len());
        for (i, &x) in xs.iter().enumerate() {
            let derivatives: Vec<Vec<Real>> = columns.iter().map(|c| vec![c[i]]).collect();
            inner.add_sample_point(x, &derivatives)?;
        }
        let x_min = xs.iter().copied().fold(Real::INFINITY, Real::min);
        let x_max = xs.iter().copied().fold(Real::NEG_INFINITY, Real::max);
        Ok(Self {
            inner,
            x_min,
            x_max,
        })
    }

    // `build` always adds at least one sample with exactly one component,
    // so the table below is never empty and every row has one entry.
    fn table(&self) -> &DividedDifferenceTable<Real> {
        &self.inner.table
    }

    /// First derivative of the interpolant at `x`.
    pub fn derivative(&self, x: Real) -> Real {
        let t = self.table();
        newton::evaluate_derivatives(t.abscissas(), t.coefficients(), &x, 1)[1][0]
    }

    /// Monomial coefficients, lowest power first.
    pub fn coefficients(&self) -> Vec<Real> {
        let t = self.table();
        newton::monomial_coefficients(t.abscissas(), t.coefficients()).swap_remove(0)
    }

    /// The underlying one-component interpolator.
    pub fn interpolator(&self) -> &FieldHermiteInterpolator<Real> {
        &self.inner
    }
}

impl Interpolation1D for HermiteInterpolation {
    fn x_min(&self) -> Real {
        self.x_min
    }

    fn x_max(&self) -> Real {
        self.x_max
    }

    fn operator(&self, x: Real) -> Real {
        let t = self.table();
        newton::evaluate(t.abscissas(), t.coefficients(), &x)[0]
    }
}
