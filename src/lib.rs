//! Figaro: coordinate transforms for astronomical density reweighting
//!
//! This crate converts batches of 3-vectors between Cartesian, spherical and
//! celestial (right ascension, declination, distance) coordinates, and
//! evaluates the Jacobian determinant `D² cos(dec)` that relates probability
//! densities expressed in the Cartesian and celestial frames.
//!
//! All functions are pure. Numerical failures (zero vectors, zero distance)
//! propagate as IEEE 754 `NaN`/`inf` unless strict validation is requested
//! through [`CoordinateTransform`].
//!
//! ```rust
//! use figaro::{cartesian_to_celestial, celestial_to_cartesian};
//!
//! let celestial = cartesian_to_celestial([1.0, 2.0, 3.0]).unwrap();
//! let back = celestial_to_cartesian(&celestial).unwrap();
//! assert!((back.row(0)[2] - 3.0).abs() < 1e-12);
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod transforms;

// Re-export commonly used types
pub use coordinates::{Cartesian3, Celestial, IntoBatch, Spherical, VectorBatch};
pub use transforms::{
    cartesian_to_celestial, cartesian_to_spherical, celestial_to_cartesian, inv_jacobian,
    jacobian, jacobian_in_celestial, spherical_to_cartesian, CoordinateTransform,
    TransformOptions, Validation,
};

/// Why strict validation rejected an input row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainReason {
    /// Cartesian row has zero length, so its direction is undefined
    #[error("zero-length vector")]
    ZeroVector,
    /// Celestial row has zero distance, so the inverse Jacobian is infinite
    #[error("zero distance")]
    ZeroDistance,
    /// Row contains a NaN or infinite component
    #[error("non-finite component")]
    NonFinite,
}

/// Main error type for the figaro library
#[derive(Debug, Error)]
pub enum FigaroError {
    #[error("Shape error: expected {expected}, found {found:?}")]
    ShapeError {
        /// Human readable description of the accepted shape
        expected: &'static str,
        /// Shape of the rejected input
        found: Vec<usize>,
    },

    #[error("Domain error in row {row}: {reason}")]
    DomainError {
        /// Index of the offending row within the batch
        row: usize,
        /// What was wrong with it
        reason: DomainReason,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for figaro operations
pub type Result<T> = std::result::Result<T, FigaroError>;
