//! Polynomial interpolation: the confluent divided-difference table, the
//! Newton-form evaluator, and the Hermite interpolators built on them.
//!
//! The table is an implementation detail of the interpolators; only
//! the interpolators and the Newton-form helpers are public.
//!
//! ```compile_fail
//! use osc_math::interpolations::divided_differences::DividedDifferenceTable;
//! ```

use osc_core::Real;

mod divided_differences;
pub mod hermite;
pub mod newton;

pub use hermite::{FieldHermiteInterpolator, HermiteInterpolation};

/// A scalar 1D interpolation `f: R → R` defined by a set of known points.
pub trait Interpolation1D: std::fmt::Debug {
    /// Evaluate the interpolation at `x`.
    fn operator(&self, x: Real) -> Real;

    /// Smallest sampled abscissa.
    fn x_min(&self) -> Real;

    /// Largest sampled abscissa.
    fn x_max(&self) -> Real;

    /// Return `true` if `x` lies within the sampled range.
    fn is_in_range(&self, x: Real) -> bool {
        x >= self.x_min() && x <= self.x_max()
    }
}
