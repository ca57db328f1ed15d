//! Spherical coordinates `(r, theta, phi)`
//!
//! `theta` is a latitude-style polar angle measured from the x-y plane
//! (not a colatitude) and `phi` is the azimuth measured from +Y toward +X.

use super::cartesian::Cartesian3;

/// Spherical coordinate: radius, latitude-style polar angle, azimuth
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spherical {
    /// Radial distance from the origin
    pub r: f64,
    /// Polar angle in radians, [-π/2, π/2] for converted values
    pub theta: f64,
    /// Azimuth in radians, [0, 2π) for converted values
    pub phi: f64,
}

impl Spherical {
    pub fn new(r: f64, theta: f64, phi: f64) -> Self {
        Spherical { r, theta, phi }
    }

    /// Converts back to Cartesian coordinates
    ///
    /// # Mathematical Conversion
    ///
    /// - `x = r * sin(phi) * cos(theta)`
    /// - `y = r * cos(phi) * cos(theta)`
    /// - `z = r * sin(theta)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use figaro::coordinates::spherical::Spherical;
    /// use std::f64::consts::PI;
    ///
    /// let v = Spherical::new(2.0, 0.0, PI / 2.0).to_cartesian();
    /// assert!((v.x - 2.0).abs() < 1e-15);
    /// assert!(v.y.abs() < 1e-15);
    /// assert_eq!(v.z, 0.0);
    /// ```
    pub fn to_cartesian(&self) -> Cartesian3 {
        let cos_theta = self.theta.cos();
        Cartesian3 {
            x: self.r * self.phi.sin() * cos_theta,
            y: self.r * self.phi.cos() * cos_theta,
            z: self.r * self.theta.sin(),
        }
    }

    /// Components in `[r, theta, phi]` order
    pub fn to_array(&self) -> [f64; 3] {
        [self.r, self.theta, self.phi]
    }
}

/// Reads a `[r, theta, phi]` row
impl From<[f64; 3]> for Spherical {
    fn from(v: [f64; 3]) -> Self {
        Spherical::new(v[0], v[1], v[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_round_trip_spherical_conversion() {
        let test_cases = vec![
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [-3.0, 0.5, 0.0],
            [0.2, -0.7, 4.0],
            [1e-3, 2e-3, -5e-3],
            [1e6, -2e6, 3e5],
        ];

        for v in test_cases {
            let original = Cartesian3::from(v);
            let round_trip = original.to_spherical().to_cartesian();
            let scale = original.magnitude();

            assert_abs_diff_eq!(original.x, round_trip.x, epsilon = 1e-12 * scale);
            assert_abs_diff_eq!(original.y, round_trip.y, epsilon = 1e-12 * scale);
            assert_abs_diff_eq!(original.z, round_trip.z, epsilon = 1e-12 * scale);
        }
    }

    #[test]
    fn test_poles() {
        let north = Spherical::new(3.0, PI / 2.0, 1.234).to_cartesian();
        assert_abs_diff_eq!(north.x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(north.y, 0.0, epsilon = 1e-15);
        assert_eq!(north.z, 3.0);
    }

    #[test]
    fn test_array_layout() {
        let s = Spherical::from([1.0, 0.25, 0.5]);
        assert_eq!(s.r, 1.0);
        assert_eq!(s.theta, 0.25);
        assert_eq!(s.phi, 0.5);
        assert_eq!(s.to_array(), [1.0, 0.25, 0.5]);
    }
}
