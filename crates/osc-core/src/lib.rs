//! # osc-core
//!
//! Core types and error definitions for osculate.
//!
//! This crate provides the building blocks shared by the rest of the
//! workspace: the `Real` alias and the error enum with its `ensure!` macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used by the scalar convenience APIs.
pub type Real = f64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
