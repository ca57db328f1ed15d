//! Coordinate row types and vector batches

pub mod batch;
pub mod cartesian;
pub mod celestial;
pub mod spherical;

pub use batch::{IntoBatch, VectorBatch};
pub use cartesian::Cartesian3;
pub use celestial::Celestial;
pub use spherical::Spherical;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_frames_agree_on_direction() {
        let v = Cartesian3::new(-2.0, 1.5, 0.75);
        let via_spherical = v.to_spherical().to_cartesian();
        let via_celestial = v.to_celestial().to_cartesian();

        assert_eq!(via_spherical, via_celestial);
        assert_abs_diff_eq!(via_spherical.x, v.x, epsilon = 1e-14);
        assert_abs_diff_eq!(via_spherical.y, v.y, epsilon = 1e-14);
        assert_abs_diff_eq!(via_spherical.z, v.z, epsilon = 1e-14);
    }
}
