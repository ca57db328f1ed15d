//! # Cartesian Coordinate Module
//!
//! This module provides the 3D Cartesian row type that every batch
//! conversion in the crate is defined in terms of.
//!
//! ## Coordinate System Convention
//!
//! Directions are decomposed into a latitude measured from the x-y plane and
//! an azimuth measured **from the +Y axis toward the +X axis**:
//! - **Y-axis**: azimuth 0, latitude 0
//! - **X-axis**: azimuth π/2, latitude 0
//! - **Z-axis**: latitude +π/2
//!
//! The azimuth is `atan2(x, y)`, which is what the celestial conversions
//! report as right ascension.
//!
//! ## Degenerate Input
//!
//! The zero vector has no direction. Conversions do not special-case it:
//! normalizing divides by zero and the resulting `NaN` values propagate to
//! the angular components, while the radius stays `0.0`.
//!
//! ## Examples
//!
//! ```rust
//! use figaro::coordinates::cartesian::Cartesian3;
//! use std::f64::consts::PI;
//!
//! let north_pole = Cartesian3::new(0.0, 0.0, 2.0).to_spherical();
//! assert_eq!(north_pole.r, 2.0);
//! assert!((north_pole.theta - PI / 2.0).abs() < 1e-15);
//! assert_eq!(north_pole.phi, 0.0);
//! ```

use nalgebra::Vector3;

use super::celestial::Celestial;
use super::spherical::Spherical;
use crate::constants::TAU;

/// Three-dimensional Cartesian coordinate
///
/// Represents a point in a right-handed frame. Values are stored exactly as
/// given; no normalization happens on construction.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cartesian3 {
    /// X-component (azimuth π/2)
    pub x: f64,
    /// Y-component (azimuth 0)
    pub y: f64,
    /// Z-component (latitude +π/2)
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian coordinate
    ///
    /// # Examples
    ///
    /// ```rust
    /// use figaro::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(1.0, 0.0, 0.0);
    /// assert_eq!(coord.x, 1.0);
    /// assert_eq!(coord.y, 0.0);
    /// assert_eq!(coord.z, 0.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Converts to spherical coordinates `(r, theta, phi)`
    ///
    /// # Mathematical Conversion
    ///
    /// - `r = |v|`
    /// - `theta = asin(z / r)`, in [-π/2, π/2]
    /// - `phi = atan2(x / r, y / r)`, shifted by 2π when negative so that it
    ///   lies in [0, 2π)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use figaro::coordinates::cartesian::Cartesian3;
    /// use std::f64::consts::PI;
    ///
    /// let s = Cartesian3::new(-1.0, 0.0, 0.0).to_spherical();
    /// assert!((s.phi - 3.0 * PI / 2.0).abs() < 1e-15);
    /// assert_eq!(s.theta, 0.0);
    /// assert_eq!(s.r, 1.0);
    /// ```
    pub fn to_spherical(&self) -> Spherical {
        let r = self.magnitude();
        let unit = *self / r;

        let theta = unit.z.asin();
        let mut phi = unit.x.atan2(unit.y);
        if phi < 0.0 {
            phi += TAU;
        }
        // a tiny negative angle rounds up to TAU
        if phi >= TAU {
            phi = 0.0;
        }

        Spherical { r, theta, phi }
    }

    /// Converts to celestial coordinates `(ra, dec, distance)`
    ///
    /// Identical to [`Cartesian3::to_spherical`] with the axes renamed.
    pub fn to_celestial(&self) -> Celestial {
        Celestial::from(self.to_spherical())
    }

    /// Calculates the magnitude (length) of the coordinate vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use figaro::coordinates::cartesian::Cartesian3;
    ///
    /// assert_eq!(Cartesian3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a unit vector in the same direction, or `None` for the zero vector
    pub fn normalize(&self) -> Option<Cartesian3> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(*self / mag)
        }
    }

    /// Components as a `[x, y, z]` array, the row layout used by batches
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    ///
    /// ```rust
    /// use figaro::coordinates::cartesian::Cartesian3;
    /// use nalgebra::Vector3;
    ///
    /// let vec: Vector3<f64> = Cartesian3::new(1.0, 2.0, 3.0).to_vector3();
    /// assert_eq!(vec, Vector3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl From<[f64; 3]> for Cartesian3 {
    fn from(v: [f64; 3]) -> Self {
        Cartesian3::new(v[0], v[1], v[2])
    }
}

impl From<Vector3<f64>> for Cartesian3 {
    fn from(vec: Vector3<f64>) -> Self {
        Cartesian3::from_vector3(vec)
    }
}

impl std::ops::Mul<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn mul(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Div<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn div(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;
    use std::f64::consts::PI;

    #[test]
    fn test_magnitude_calculation() {
        let coord = Cartesian3::new(3.0, 4.0, 0.0);
        assert_eq!(coord.magnitude(), 5.0);

        let zero_vector = Cartesian3::new(0.0, 0.0, 0.0);
        assert_eq!(zero_vector.magnitude(), 0.0);
    }

    #[test]
    fn test_normalize() {
        let normalized = Cartesian3::new(3.0, 4.0, 0.0).normalize().unwrap();
        assert_abs_diff_eq!(normalized.magnitude(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(normalized.x, 0.6, epsilon = 1e-15);
        assert_abs_diff_eq!(normalized.y, 0.8, epsilon = 1e-15);

        assert!(Cartesian3::new(0.0, 0.0, 0.0).normalize().is_none());
    }

    #[rstest]
    #[case::plus_y([0.0, 1.0, 0.0], 0.0, 0.0)]
    #[case::plus_x([1.0, 0.0, 0.0], 0.0, PI / 2.0)]
    #[case::minus_y([0.0, -1.0, 0.0], 0.0, PI)]
    #[case::minus_x([-1.0, 0.0, 0.0], 0.0, 3.0 * PI / 2.0)]
    #[case::north_pole([0.0, 0.0, 1.0], PI / 2.0, 0.0)]
    #[case::south_pole([0.0, 0.0, -1.0], -PI / 2.0, 0.0)]
    #[case::diagonal([1.0, 1.0, 0.0], 0.0, PI / 4.0)]
    fn test_axis_directions(#[case] v: [f64; 3], #[case] theta: f64, #[case] phi: f64) {
        let coord = Cartesian3::from(v);
        let s = coord.to_spherical();
        assert_eq!(s.r, coord.magnitude());
        assert_abs_diff_eq!(s.theta, theta, epsilon = 1e-15);
        assert_abs_diff_eq!(s.phi, phi, epsilon = 1e-15);
    }

    #[test]
    fn test_azimuth_wraps_into_range() {
        let s = Cartesian3::new(-0.5, 0.5, 0.2).to_spherical();
        assert!(s.phi >= 0.0 && s.phi < TAU);
        assert_abs_diff_eq!(s.phi, 7.0 * PI / 4.0, epsilon = 1e-15);
    }

    #[rstest]
    #[case::just_west_of_plus_y([-1e-17, 1.0, 0.0])]
    #[case::just_west_of_plus_y_tilted([-1e-20, 3.0, -2.0])]
    fn test_azimuth_never_reaches_tau(#[case] v: [f64; 3]) {
        let s = Cartesian3::from(v).to_spherical();
        assert_eq!(s.phi, 0.0);
        assert!(s.phi < TAU);
    }

    #[test]
    fn test_radius_preserved() {
        let s = Cartesian3::new(0.0, 0.0, 7.5).to_spherical();
        assert_eq!(s.r, 7.5);
        assert_abs_diff_eq!(s.theta, PI / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_vector_propagates_nan() {
        let s = Cartesian3::new(0.0, 0.0, 0.0).to_spherical();
        assert_eq!(s.r, 0.0);
        assert!(s.theta.is_nan());
        assert!(s.phi.is_nan());
    }

    #[test]
    fn test_celestial_renames_axes() {
        let v = Cartesian3::new(1.0, 2.0, 3.0);
        let s = v.to_spherical();
        let c = v.to_celestial();
        assert_eq!(c.ra, s.phi);
        assert_eq!(c.dec, s.theta);
        assert_eq!(c.distance, s.r);
    }

    #[test]
    fn test_vector3_conversions() {
        let coord = Cartesian3::new(1.0, 2.0, 3.0);
        let coord_back = Cartesian3::from_vector3(coord.to_vector3());
        assert_eq!(coord, coord_back);
        assert_eq!(coord.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_scalar_operations() {
        let a = Cartesian3::new(1.0, 2.0, 3.0);
        assert_eq!(a * 2.0, Cartesian3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Cartesian3::new(0.5, 1.0, 1.5));
    }
}
