//! Diamond (double-wedge) airfoil geometry in chord-normalized coordinates.

use sf_core::ensure_between;
use sf_core::units::{Angle, deg, to_radians};
use sf_gasdyn::FlowResult;

/// Symmetric diamond airfoil with unit chord and the ridge at mid chord.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiamondAirfoil {
    wedge_angle_deg: f64,
}

impl DiamondAirfoil {
    /// Fails with `InvalidInput` unless `0 < wedge_angle_deg < 90`.
    pub fn new(wedge_angle_deg: f64) -> FlowResult<Self> {
        let wedge_angle_deg = ensure_between(
            wedge_angle_deg,
            0.0,
            90.0,
            "wedge angle must be between 0 and 90 degrees",
        )?;
        Ok(Self { wedge_angle_deg })
    }

    pub fn wedge_angle(&self) -> Angle {
        deg(self.wedge_angle_deg)
    }

    pub fn wedge_angle_deg(&self) -> f64 {
        self.wedge_angle_deg
    }

    /// Maximum thickness over chord, `tan(w)`.
    pub fn thickness_ratio(&self) -> f64 {
        to_radians(self.wedge_angle()).tan()
    }

    /// Length of one face over chord.
    pub fn face_length(&self) -> f64 {
        0.5 / to_radians(self.wedge_angle()).cos()
    }

    /// Vertices (leading edge, upper ridge, trailing edge, lower ridge),
    /// rotated nose-up by `angle_of_attack_deg` about the leading edge.
    pub fn outline(&self, angle_of_attack_deg: f64) -> [[f64; 2]; 4] {
        let half_thickness = 0.5 * self.thickness_ratio();
        let body = [
            [0.0, 0.0],
            [0.5, half_thickness],
            [1.0, 0.0],
            [0.5, -half_thickness],
        ];

        let phi = -to_radians(deg(angle_of_attack_deg));
        let (sin, cos) = phi.sin_cos();
        body.map(|[x, y]| [x * cos - y * sin, x * sin + y * cos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_wedge_angles() {
        assert!(DiamondAirfoil::new(0.0).is_err());
        assert!(DiamondAirfoil::new(-5.0).is_err());
        assert!(DiamondAirfoil::new(90.0).is_err());
        assert!(DiamondAirfoil::new(f64::NAN).is_err());
    }

    #[test]
    fn thickness_and_face_length() {
        let airfoil = DiamondAirfoil::new(10.0).unwrap();
        assert_eq!(airfoil.wedge_angle_deg(), 10.0);
        assert!((airfoil.thickness_ratio() - 0.176_326_98).abs() < 1e-6);
        let face = airfoil.face_length();
        let half_t = 0.5 * airfoil.thickness_ratio();
        assert!((face * face - (0.25 + half_t * half_t)).abs() < 1e-12);
    }

    #[test]
    fn outline_at_zero_incidence() {
        let outline = DiamondAirfoil::new(10.0).unwrap().outline(0.0);
        assert_eq!(outline[0], [0.0, 0.0]);
        assert!((outline[2][0] - 1.0).abs() < 1e-12);
        assert!((outline[1][1] + outline[3][1]).abs() < 1e-12);
    }

    #[test]
    fn positive_incidence_drops_trailing_edge() {
        let outline = DiamondAirfoil::new(5.0).unwrap().outline(10.0);
        let [x, y] = outline[2];
        assert!((x - 10.0_f64.to_radians().cos()).abs() < 1e-12);
        assert!((y + 10.0_f64.to_radians().sin()).abs() < 1e-12);
    }
}
