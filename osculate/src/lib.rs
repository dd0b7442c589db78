//! # osculate
//!
//! Osculating (Hermite) polynomial interpolation over any field: values and
//! any number of derivatives at distinct abscissas, added incrementally and
//! evaluated in Newton form.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! osculate = "0.1"
//! ```
//!
//! ```rust
//! use osculate::math::FieldHermiteInterpolator;
//!
//! let mut h = FieldHermiteInterpolator::new();
//! h.add_sample_point(0.0, &[vec![0.0], vec![1.0]]).unwrap(); // f(0)=0, f'(0)=1
//! h.add_sample_point(1.0, &[vec![1.0]]).unwrap();            // f(1)=1
//! assert_eq!(h.value(&0.5).unwrap(), vec![0.5]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core type aliases and error definitions.
pub use osc_core as core;

/// Field contract and interpolators.
pub use osc_math as math;
