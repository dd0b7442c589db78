//! # osc-math
//!
//! Osculating (Hermite) polynomial interpolation over any field-like numeric
//! type.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The field-element contract and small-integer helpers.
pub mod field;

/// Divided differences, Newton form and Hermite interpolators.
pub mod interpolations;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use field::FieldElement;
pub use interpolations::{FieldHermiteInterpolator, HermiteInterpolation, Interpolation1D};
