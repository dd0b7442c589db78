//! Error types for osculate.
//!
//! Every failure in the workspace is a permanent input-validity problem, so a
//! single `thiserror`-derived enum covers them all.  The `ensure!` macro
//! defined here raises the generic precondition variant.

use thiserror::Error;

/// The top-level error type used throughout osculate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A query was made before any sample point was added.
    #[error("no data: at least one sample point is required")]
    NoData,

    /// A sample point reuses an abscissa that is already present.
    #[error("duplicated abscissa {0}")]
    DuplicateAbscissa(String),

    /// Value/derivative vectors disagree in length.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// The length every vector must have.
        expected: usize,
        /// The offending length.
        got: usize,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout osculate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use osc_core::{ensure, errors::Error};
/// fn positive(x: f64) -> osc_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
