//! Celestial coordinates `(ra, dec, distance)`
//!
//! Celestial coordinates are spherical coordinates with the axes renamed:
//! right ascension is the azimuth, declination the polar angle and distance
//! the radius. Batches store them as `[ra, dec, D]` rows.
//!
//! The volume element of the transform is
//!
//! ```text
//! dx dy dz = D² cos(dec) dra ddec dD
//! ```
//!
//! so a density in Cartesian space is multiplied by `D² cos(dec)` to obtain
//! the density in celestial coordinates, and divided by it to go back.

use super::cartesian::Cartesian3;
use super::spherical::Spherical;
use crate::constants::{DEG2RAD, RAD2DEG};

/// Celestial coordinate: right ascension, declination, distance
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Celestial {
    /// Right ascension in radians
    pub ra: f64,
    /// Declination in radians
    pub dec: f64,
    /// Distance from the origin
    pub distance: f64,
}

impl Celestial {
    pub fn new(ra: f64, dec: f64, distance: f64) -> Self {
        Celestial { ra, dec, distance }
    }

    /// Create a new celestial coordinate with angles in degrees
    pub fn from_degrees(ra_deg: f64, dec_deg: f64, distance: f64) -> Self {
        Self::new(ra_deg * DEG2RAD, dec_deg * DEG2RAD, distance)
    }

    /// Get right ascension in degrees
    pub fn ra_degrees(&self) -> f64 {
        self.ra * RAD2DEG
    }

    /// Get declination in degrees
    pub fn dec_degrees(&self) -> f64 {
        self.dec * RAD2DEG
    }

    pub fn to_cartesian(&self) -> Cartesian3 {
        Spherical::from(*self).to_cartesian()
    }

    /// Determinant of the celestial to Cartesian transform, `D² cos(dec)`
    ///
    /// ```rust
    /// use figaro::Celestial;
    /// use std::f64::consts::PI;
    ///
    /// assert_eq!(Celestial::new(0.0, 0.0, 2.0).jacobian_determinant(), 4.0);
    /// let det = Celestial::new(0.0, PI / 3.0, 2.0).jacobian_determinant();
    /// assert!((det - 2.0).abs() < 1e-12);
    /// ```
    pub fn jacobian_determinant(&self) -> f64 {
        self.distance * self.distance * self.dec.cos()
    }

    /// Reciprocal of [`Celestial::jacobian_determinant`]
    ///
    /// Zero distance yields `+inf`.
    pub fn inverse_jacobian_determinant(&self) -> f64 {
        1.0 / self.jacobian_determinant()
    }

    /// Components in `[ra, dec, D]` order
    pub fn to_array(&self) -> [f64; 3] {
        [self.ra, self.dec, self.distance]
    }
}

/// Reads a `[ra, dec, D]` row
impl From<[f64; 3]> for Celestial {
    fn from(v: [f64; 3]) -> Self {
        Celestial::new(v[0], v[1], v[2])
    }
}

impl From<Spherical> for Celestial {
    fn from(s: Spherical) -> Self {
        Celestial {
            ra: s.phi,
            dec: s.theta,
            distance: s.r,
        }
    }
}

impl From<Celestial> for Spherical {
    fn from(c: Celestial) -> Self {
        Spherical {
            r: c.distance,
            theta: c.dec,
            phi: c.ra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rstest::rstest;
    use std::f64::consts::PI;

    #[rstest]
    #[case([0.0, 0.0, 2.0], 4.0)]
    #[case([0.0, PI / 3.0, 2.0], 2.0)]
    #[case([1.3, -PI / 3.0, 3.0], 4.5)]
    #[case([5.0, 0.0, 0.5], 0.25)]
    fn test_jacobian_determinant(#[case] row: [f64; 3], #[case] expected: f64) {
        let c = Celestial::from(row);
        assert_relative_eq!(c.jacobian_determinant(), expected, max_relative = 1e-12);
        assert_relative_eq!(
            c.inverse_jacobian_determinant(),
            1.0 / expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_jacobian_ignores_right_ascension() {
        let a = Celestial::new(0.1, 0.4, 3.0).jacobian_determinant();
        let b = Celestial::new(4.1, 0.4, 3.0).jacobian_determinant();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_distance_inverse_is_infinite() {
        let inv = Celestial::new(1.0, 0.3, 0.0).inverse_jacobian_determinant();
        assert!(inv.is_infinite() && inv > 0.0);
    }

    #[test]
    fn test_degree_accessors() {
        let c = Celestial::from_degrees(90.0, -45.0, 1.0);
        assert_abs_diff_eq!(c.ra, PI / 2.0, epsilon = 1e-15);
        assert_abs_diff_eq!(c.dec, -PI / 4.0, epsilon = 1e-15);
        assert_abs_diff_eq!(c.ra_degrees(), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.dec_degrees(), -45.0, epsilon = 1e-12);
    }

    #[test]
    fn test_spherical_axis_mapping() {
        let s = Spherical::new(2.0, 0.3, 1.1);
        let c = Celestial::from(s);
        assert_eq!(c.to_array(), [1.1, 0.3, 2.0]);
        assert_eq!(Spherical::from(c), s);
    }

    #[test]
    fn test_cartesian_round_trip() {
        let v = Cartesian3::new(1.0, 0.0, 0.0);
        let c = v.to_celestial();
        assert_abs_diff_eq!(c.ra, PI / 2.0, epsilon = 1e-15);
        assert_eq!(c.dec, 0.0);
        assert_eq!(c.distance, 1.0);

        let back = c.to_cartesian();
        assert_abs_diff_eq!(back.x, 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(back.y, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(back.z, 0.0, epsilon = 1e-15);
    }
}
