//! Batch coordinate transforms
//!
//! The free functions in this module use the default
//! [`Validation::Passthrough`] behavior, matching plain IEEE 754 arithmetic:
//! a zero vector converts to `[0, NaN, NaN]` and a zero distance gives an
//! infinite inverse Jacobian. Use a [`CoordinateTransform`] built with
//! [`TransformOptions::strict`] to reject such rows instead.
//!
//! # Column layouts
//!
//! | function                  | input rows        | output rows       |
//! |---------------------------|-------------------|-------------------|
//! | `cartesian_to_spherical`  | `[x, y, z]`       | `[r, theta, phi]` |
//! | `spherical_to_cartesian`  | `[phi, theta, r]` | `[x, y, z]`       |
//! | `cartesian_to_celestial`  | `[x, y, z]`       | `[ra, dec, D]`    |
//! | `celestial_to_cartesian`  | `[ra, dec, D]`    | `[x, y, z]`       |
//!
//! `spherical_to_cartesian` reads the azimuth from column 0 and the radius
//! from column 2, which is the celestial layout rather than the layout
//! `cartesian_to_spherical` produces.

use log::{debug, warn};

use crate::coordinates::{Cartesian3, IntoBatch, Spherical, VectorBatch};
use crate::{DomainReason, FigaroError, Result};

mod determinant;
mod options;

pub use determinant::{inv_jacobian, jacobian, jacobian_in_celestial};
pub use options::{TransformOptions, Validation};

/// Applies coordinate transforms with a fixed set of options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoordinateTransform {
    options: TransformOptions,
}

impl CoordinateTransform {
    pub fn new(options: TransformOptions) -> Self {
        CoordinateTransform { options }
    }

    /// Transform that rejects degenerate rows with [`FigaroError::DomainError`]
    pub fn strict() -> Self {
        Self::new(TransformOptions::strict())
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Converts Cartesian `[x, y, z]` rows to spherical `[r, theta, phi]`
    ///
    /// In strict mode a zero-length row is rejected.
    pub fn cartesian_to_spherical(&self, vectors: impl IntoBatch) -> Result<VectorBatch> {
        let batch = vectors.into_batch()?;
        debug!("cartesian_to_spherical: {} rows", batch.len());
        self.validate("cartesian_to_spherical", &batch, reject_zero_vector)?;

        Ok(batch.map_rows(|row| Cartesian3::from(row).to_spherical().to_array()))
    }

    /// Converts `[phi, theta, r]` rows to Cartesian `[x, y, z]`
    pub fn spherical_to_cartesian(&self, vectors: impl IntoBatch) -> Result<VectorBatch> {
        let batch = vectors.into_batch()?;
        debug!("spherical_to_cartesian: {} rows", batch.len());
        self.validate("spherical_to_cartesian", &batch, accept_row)?;

        Ok(batch.map_rows(|[phi, theta, r]| {
            Spherical::new(r, theta, phi).to_cartesian().to_array()
        }))
    }

    /// Converts celestial `[ra, dec, D]` rows to Cartesian `[x, y, z]`
    pub fn celestial_to_cartesian(&self, celestial: impl IntoBatch) -> Result<VectorBatch> {
        self.spherical_to_cartesian(celestial)
    }

    /// Converts Cartesian `[x, y, z]` rows to celestial `[ra, dec, D]`
    pub fn cartesian_to_celestial(&self, cartesian: impl IntoBatch) -> Result<VectorBatch> {
        let spherical = self.cartesian_to_spherical(cartesian)?;
        Ok(spherical.map_rows(|[r, theta, phi]| [phi, theta, r]))
    }

    /// Checks every row when strict validation is enabled
    ///
    /// Non-finite components are always rejected; `reject` adds the
    /// operation-specific checks.
    fn validate<F>(&self, operation: &str, batch: &VectorBatch, reject: F) -> Result<()>
    where
        F: Fn([f64; 3]) -> Option<DomainReason>,
    {
        if self.options.validation == Validation::Passthrough {
            return Ok(());
        }

        for (row, values) in batch.rows().enumerate() {
            let reason = if values.iter().all(|v| v.is_finite()) {
                reject(values)
            } else {
                Some(DomainReason::NonFinite)
            };

            if let Some(reason) = reason {
                warn!("{}: rejecting row {} ({})", operation, row, reason);
                return Err(FigaroError::DomainError { row, reason });
            }
        }
        Ok(())
    }
}

fn accept_row(_: [f64; 3]) -> Option<DomainReason> {
    None
}

fn reject_zero_vector(row: [f64; 3]) -> Option<DomainReason> {
    (Cartesian3::from(row).magnitude() == 0.0).then_some(DomainReason::ZeroVector)
}

fn reject_zero_distance(row: [f64; 3]) -> Option<DomainReason> {
    (row[2] == 0.0).then_some(DomainReason::ZeroDistance)
}

/// Converts Cartesian `[x, y, z]` rows to spherical `[r, theta, phi]`
///
/// `theta = asin(z / r)` is a latitude and `phi = atan2(x, y)` is wrapped
/// into [0, 2π).
///
/// ```rust
/// use figaro::cartesian_to_spherical;
/// use std::f64::consts::PI;
///
/// let s = cartesian_to_spherical([[0.0, 0.0, 1.0]]).unwrap();
/// let [r, theta, phi] = s.row(0);
/// assert_eq!(r, 1.0);
/// assert!((theta - PI / 2.0).abs() < 1e-15);
/// assert_eq!(phi, 0.0);
/// ```
pub fn cartesian_to_spherical(vectors: impl IntoBatch) -> Result<VectorBatch> {
    CoordinateTransform::default().cartesian_to_spherical(vectors)
}

/// Converts `[phi, theta, r]` rows to Cartesian `[x, y, z]`
///
/// Computes `x = r sin(phi) cos(theta)`, `y = r cos(phi) cos(theta)` and
/// `z = r sin(theta)` with `phi`, `theta`, `r` taken from columns 0, 1, 2.
pub fn spherical_to_cartesian(vectors: impl IntoBatch) -> Result<VectorBatch> {
    CoordinateTransform::default().spherical_to_cartesian(vectors)
}

/// Converts celestial `[ra, dec, D]` rows to Cartesian `[x, y, z]`
///
/// A single 3-vector is treated as a one-row batch.
pub fn celestial_to_cartesian(celestial: impl IntoBatch) -> Result<VectorBatch> {
    CoordinateTransform::default().celestial_to_cartesian(celestial)
}

/// Converts Cartesian `[x, y, z]` rows to celestial `[ra, dec, D]`
///
/// ```rust
/// use figaro::{cartesian_to_celestial, celestial_to_cartesian};
/// use std::f64::consts::PI;
///
/// let c = cartesian_to_celestial([1.0, 0.0, 0.0]).unwrap();
/// let [ra, dec, distance] = c.row(0);
/// assert!((ra - PI / 2.0).abs() < 1e-15);
/// assert_eq!((dec, distance), (0.0, 1.0));
///
/// let v = celestial_to_cartesian(&c).unwrap();
/// assert!((v[(0, 0)] - 1.0).abs() < 1e-15);
/// assert!(v[(0, 1)].abs() < 1e-15);
/// ```
pub fn cartesian_to_celestial(cartesian: impl IntoBatch) -> Result<VectorBatch> {
    CoordinateTransform::default().cartesian_to_celestial(cartesian)
}
