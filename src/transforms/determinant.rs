//! Jacobian determinants between Cartesian and celestial coordinates
//!
//! `|∂(x, y, z) / ∂(ra, dec, D)| = D² cos(dec)`. Multiplying a Cartesian
//! density by this factor gives the celestial density; dividing by it goes
//! the other way.

use log::debug;
use ndarray::Array1;

use super::{accept_row, reject_zero_distance, CoordinateTransform};
use crate::coordinates::{Celestial, IntoBatch};
use crate::Result;

impl CoordinateTransform {
    /// Jacobian determinant for each Cartesian `[x, y, z]` row
    pub fn jacobian(&self, cartesian: impl IntoBatch) -> Result<Array1<f64>> {
        let celestial = self.cartesian_to_celestial(cartesian)?;
        self.jacobian_in_celestial(celestial)
    }

    /// Reciprocal Jacobian determinant for each celestial `[ra, dec, D]` row
    ///
    /// In strict mode a zero-distance row is rejected instead of producing
    /// `+inf`.
    pub fn inv_jacobian(&self, celestial: impl IntoBatch) -> Result<Array1<f64>> {
        let batch = celestial.into_batch()?;
        self.validate("inv_jacobian", &batch, reject_zero_distance)?;

        let det = self.jacobian_in_celestial(batch)?;
        Ok(det.mapv(|d| 1.0 / d))
    }

    /// `D² cos(dec)` for each celestial `[ra, dec, D]` row
    pub fn jacobian_in_celestial(&self, celestial: impl IntoBatch) -> Result<Array1<f64>> {
        let batch = celestial.into_batch()?;
        debug!("jacobian_in_celestial: {} rows", batch.len());
        self.validate("jacobian_in_celestial", &batch, accept_row)?;

        Ok(batch.map_rows_to_scalar(|row| Celestial::from(row).jacobian_determinant()))
    }
}

/// Jacobian determinant of the Cartesian to celestial transform
///
/// Each Cartesian row is converted to `[ra, dec, D]` and evaluated with
/// [`jacobian_in_celestial`].
///
/// ```rust
/// use figaro::jacobian;
///
/// // D = 2 on the equator
/// let det = jacobian([0.0, 2.0, 0.0]).unwrap();
/// assert!((det[0] - 4.0).abs() < 1e-12);
/// ```
pub fn jacobian(cartesian: impl IntoBatch) -> Result<Array1<f64>> {
    CoordinateTransform::default().jacobian(cartesian)
}

/// Element-wise `1 / (D² cos(dec))` for celestial `[ra, dec, D]` rows
///
/// A zero distance yields `+inf` for that row.
pub fn inv_jacobian(celestial: impl IntoBatch) -> Result<Array1<f64>> {
    CoordinateTransform::default().inv_jacobian(celestial)
}

/// Element-wise `D² cos(dec)` for celestial `[ra, dec, D]` rows
///
/// ```rust
/// use figaro::jacobian_in_celestial;
/// use std::f64::consts::PI;
///
/// let det = jacobian_in_celestial([[0.0, 0.0, 2.0], [0.0, PI / 3.0, 2.0]]).unwrap();
/// assert_eq!(det[0], 4.0);
/// assert!((det[1] - 2.0).abs() < 1e-12);
/// ```
pub fn jacobian_in_celestial(celestial: impl IntoBatch) -> Result<Array1<f64>> {
    CoordinateTransform::default().jacobian_in_celestial(celestial)
}
