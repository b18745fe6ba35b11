//! Error kinds shared by every fallible operation in the core.

use thiserror::Error;

/// Errors raised by matrix algebra, illuminant lookup, chromatic adaptation,
/// RGB working space, color model and color difference operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A value handed to a constructor or parser is out of its declared
    /// domain: an RGB component above 1.0, an unparsable hex string, an
    /// unknown illuminant/observer pair, an unknown color space name.
    #[error("value out of domain: {0}")]
    InputDomain(String),

    /// An invariant the caller is responsible for maintaining was violated,
    /// e.g. registering a color space or adaptation method under a name
    /// that already exists.
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// A 3x3 matrix could not be inverted because its determinant is below
    /// the singularity threshold.
    #[error("matrix is singular (|det| < {threshold:e}): {context}")]
    Singular {
        /// The threshold the determinant was compared against.
        threshold: f64,
        /// Human-readable description of which matrix failed to invert.
        context: String,
    },

    /// An output conversion produced a non-finite or otherwise unrepresentable
    /// value from inputs that already passed validation.
    #[error("non-finite result producing {0}")]
    Representation(String),
}

/// Specialized `Result` type for `chroma-core` operations.
pub type Result<T> = ::std::result::Result<T, Error>;
