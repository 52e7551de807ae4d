//! Dimensional reconstruction of a flow field and pressure forces.

use crate::freestream::Freestream;
use crate::{ReportError, ReportResult};
use serde::Serialize;
use sf_airfoil::{FlowField, Surface, SurfaceChain, TrailingEdgeRule};
use sf_core::units::{deg, to_atm, to_kelvin, to_radians};
use sf_core::{Tolerances, nearly_equal};
use tracing::debug;

/// Position of a region along one surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    /// Behind the leading-edge shock.
    FrontFace,
    /// Behind the mid-chord expansion fan.
    RearFace,
    /// Behind the trailing-edge shock.
    Wake,
}

impl RegionKind {
    pub const ALL: [RegionKind; 3] = [RegionKind::FrontFace, RegionKind::RearFace, RegionKind::Wake];

    fn index(self) -> usize {
        match self {
            RegionKind::FrontFace => 0,
            RegionKind::RearFace => 1,
            RegionKind::Wake => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RegionKind::FrontFace => "front face",
            RegionKind::RearFace => "rear face",
            RegionKind::Wake => "wake",
        }
    }
}

/// One region with its stage ratios and absolute state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionReport {
    pub surface: Surface,
    pub kind: RegionKind,
    pub mach: f64,
    /// Ratios across the stage that produced this region.
    pub density_ratio: f64,
    pub pressure_ratio: f64,
    pub temperature_ratio: f64,
    /// Static pressure over freestream static pressure.
    pub freestream_pressure_ratio: f64,
    pub pressure_atm: f64,
    pub temperature_k: f64,
}

/// Dimensional results for one airfoil analysis.
///
/// Always holds six regions (upper then lower, front face, rear face, wake).
/// A symmetric field reports the lower surface as a copy of the upper one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirfoilReport {
    freestream_mach: f64,
    freestream_pressure_atm: f64,
    freestream_temperature_k: f64,
    gamma: f64,
    wedge_angle_deg: f64,
    thickness_ratio: f64,
    angle_of_attack_deg: f64,
    trailing_edge_rule: TrailingEdgeRule,
    symmetric: bool,
    outline: [[f64; 2]; 4],
    regions: Vec<RegionReport>,
    lift_coefficient: f64,
    drag_coefficient: f64,
}

impl AirfoilReport {
    /// Scale every chain by the freestream, multiplying ratios along that
    /// chain only.
    ///
    /// Fails with `InvalidInput` if the freestream Mach differs from the one
    /// the field was solved for.
    pub fn build(field: &FlowField, freestream: &Freestream) -> ReportResult<Self> {
        if !nearly_equal(
            field.freestream_mach(),
            freestream.mach(),
            Tolerances::default(),
        ) {
            return Err(ReportError::InvalidInput {
                what: "freestream mach differs from the analyzed flow field",
            });
        }

        let p_inf = to_atm(freestream.pressure());
        let t_inf = to_kelvin(freestream.temperature());

        let mut regions = Vec::with_capacity(6);
        for surface in Surface::BOTH {
            regions.extend(reconstruct(field.surface_chain(surface), surface, p_inf, t_inf));
        }

        let airfoil = field.airfoil();
        let mut report = Self {
            freestream_mach: field.freestream_mach(),
            freestream_pressure_atm: p_inf,
            freestream_temperature_k: t_inf,
            gamma: field.gas().gamma(),
            wedge_angle_deg: airfoil.wedge_angle_deg(),
            thickness_ratio: airfoil.thickness_ratio(),
            angle_of_attack_deg: field.angle_of_attack_deg(),
            trailing_edge_rule: field.trailing_edge_rule(),
            symmetric: field.is_symmetric(),
            outline: airfoil.outline(field.angle_of_attack_deg()),
            regions,
            lift_coefficient: 0.0,
            drag_coefficient: 0.0,
        };

        let (lift, drag) = report.pressure_force_coefficients();
        report.lift_coefficient = lift;
        report.drag_coefficient = drag;

        debug!(
            p_inf_atm = p_inf,
            t_inf_k = t_inf,
            cl = lift,
            cd = drag,
            "airfoil report built"
        );

        Ok(report)
    }

    pub fn freestream_mach(&self) -> f64 {
        self.freestream_mach
    }

    pub fn freestream_pressure_atm(&self) -> f64 {
        self.freestream_pressure_atm
    }

    pub fn freestream_temperature_k(&self) -> f64 {
        self.freestream_temperature_k
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn wedge_angle_deg(&self) -> f64 {
        self.wedge_angle_deg
    }

    pub fn thickness_ratio(&self) -> f64 {
        self.thickness_ratio
    }

    pub fn angle_of_attack_deg(&self) -> f64 {
        self.angle_of_attack_deg
    }

    pub fn trailing_edge_rule(&self) -> TrailingEdgeRule {
        self.trailing_edge_rule
    }

    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    /// Airfoil vertices at the analyzed incidence.
    pub fn outline(&self) -> [[f64; 2]; 4] {
        self.outline
    }

    pub fn regions(&self) -> &[RegionReport] {
        &self.regions
    }

    pub fn region(&self, surface: Surface, kind: RegionKind) -> &RegionReport {
        let offset = match surface {
            Surface::Upper => 0,
            Surface::Lower => 3,
        };
        &self.regions[offset + kind.index()]
    }

    /// Distinct physical faces: upper front and rear, then the lower ones
    /// unless the field is symmetric.
    pub fn faces(&self) -> Vec<&RegionReport> {
        let surfaces: &[Surface] = if self.symmetric {
            &[Surface::Upper]
        } else {
            &Surface::BOTH
        };
        surfaces
            .iter()
            .flat_map(|&surface| {
                [
                    self.region(surface, RegionKind::FrontFace),
                    self.region(surface, RegionKind::RearFace),
                ]
            })
            .collect()
    }

    /// Lift per unit span over `0.5 gamma p_inf M_inf^2 c`.
    pub fn lift_coefficient(&self) -> f64 {
        self.lift_coefficient
    }

    /// Pressure (wave) drag per unit span over `0.5 gamma p_inf M_inf^2 c`.
    pub fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    // Integrates the face pressures in body axes and rotates into wind axes.
    // Pressures are in units of p_inf; a uniform p_inf contributes nothing.
    fn pressure_force_coefficients(&self) -> (f64, f64) {
        let p = |surface, kind| self.region(surface, kind).freestream_pressure_ratio;
        let upper_front = p(Surface::Upper, RegionKind::FrontFace);
        let upper_rear = p(Surface::Upper, RegionKind::RearFace);
        let lower_front = p(Surface::Lower, RegionKind::FrontFace);
        let lower_rear = p(Surface::Lower, RegionKind::RearFace);

        let half_thickness = 0.5 * self.thickness_ratio;
        let axial = half_thickness * (upper_front - upper_rear + lower_front - lower_rear);
        let normal = 0.5 * (lower_front + lower_rear - upper_front - upper_rear);

        let (sin, cos) = to_radians(deg(self.angle_of_attack_deg)).sin_cos();
        let drag = axial * cos + normal * sin;
        let lift = normal * cos - axial * sin;

        let dynamic = 0.5 * self.gamma * self.freestream_mach * self.freestream_mach;
        (lift / dynamic, drag / dynamic)
    }
}

fn reconstruct(
    chain: &SurfaceChain,
    surface: Surface,
    p_inf: f64,
    t_inf: f64,
) -> Vec<RegionReport> {
    let mut cumulative_p = 1.0;
    let mut cumulative_t = 1.0;
    RegionKind::ALL
        .into_iter()
        .zip(chain.regions())
        .map(|(kind, state)| {
            cumulative_p *= state.pressure_ratio();
            cumulative_t *= state.temperature_ratio();
            RegionReport {
                surface,
                kind,
                mach: state.mach(),
                density_ratio: state.density_ratio(),
                pressure_ratio: state.pressure_ratio(),
                temperature_ratio: state.temperature_ratio(),
                freestream_pressure_ratio: cumulative_p,
                pressure_atm: p_inf * cumulative_p,
                temperature_k: t_inf * cumulative_t,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_airfoil::AirfoilFlowFieldSolver;
    use sf_core::units::{atm, k};

    fn report(mach: f64, wedge: f64, aoa: f64) -> AirfoilReport {
        let stream = Freestream::new(mach, atm(1.0), k(288.0)).unwrap();
        stream
            .analyze(&AirfoilFlowFieldSolver::default(), wedge, aoa)
            .unwrap()
    }

    #[test]
    fn symmetric_report_copies_upper_surface() {
        let r = report(2.0, 10.0, 0.0);
        assert!(r.is_symmetric());
        assert_eq!(r.regions().len(), 6);
        for kind in RegionKind::ALL {
            let upper = r.region(Surface::Upper, kind);
            let lower = r.region(Surface::Lower, kind);
            assert_eq!(lower.surface, Surface::Lower);
            assert_eq!(upper.mach, lower.mach);
            assert_eq!(upper.pressure_atm, lower.pressure_atm);
        }
        assert_eq!(r.faces().len(), 2);
    }

    #[test]
    fn pressures_are_cumulative_along_a_chain() {
        let r = report(2.0, 10.0, 2.0);
        for surface in Surface::BOTH {
            let front = r.region(surface, RegionKind::FrontFace);
            let rear = r.region(surface, RegionKind::RearFace);
            let wake = r.region(surface, RegionKind::Wake);
            assert!((front.pressure_atm - front.pressure_ratio).abs() < 1e-12);
            let expected_rear = front.pressure_atm * rear.pressure_ratio;
            assert!((rear.pressure_atm - expected_rear).abs() < 1e-12);
            let expected_wake = rear.pressure_atm * wake.pressure_ratio;
            assert!((wake.pressure_atm - expected_wake).abs() < 1e-12);
            let expected_t = 288.0 * front.temperature_ratio * rear.temperature_ratio;
            assert!((rear.temperature_k - expected_t).abs() < 1e-9);
        }
        assert_eq!(r.faces().len(), 4);
    }

    #[test]
    fn zero_incidence_has_no_lift() {
        let r = report(2.0, 10.0, 0.0);
        assert!(r.lift_coefficient().abs() < 1e-12);
        // linearized theory: 4 tan^2(w) / sqrt(M^2 - 1) = 0.0718
        assert!((r.drag_coefficient() - 0.0728).abs() < 1e-3);
    }

    #[test]
    fn positive_incidence_produces_lift() {
        let r = report(2.0, 10.0, 2.0);
        // linearized theory: 4 alpha / sqrt(M^2 - 1) = 0.0806
        assert!((r.lift_coefficient() - 0.0855).abs() < 1e-3);
        assert!((r.drag_coefficient() - 0.0760).abs() < 1e-3);

        let mirrored = report(2.0, 10.0, -2.0);
        assert!((mirrored.lift_coefficient() + r.lift_coefficient()).abs() < 1e-12);
        assert!((mirrored.drag_coefficient() - r.drag_coefficient()).abs() < 1e-12);
    }

    #[test]
    fn mismatched_freestream_is_rejected() {
        let field = AirfoilFlowFieldSolver::default()
            .analyze(2.0, 10.0, 0.0)
            .unwrap();
        let stream = Freestream::sea_level(3.0).unwrap();
        let err = AirfoilReport::build(&field, &stream).unwrap_err();
        assert!(matches!(err, ReportError::InvalidInput { .. }));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use sf_airfoil::AirfoilFlowFieldSolver;

    proptest! {
        #[test]
        fn lift_follows_incidence_and_drag_is_positive(
            mach in 2.0..4.0f64,
            wedge in 3.0..8.0f64,
            aoa in 0.5..3.0f64,
            sign in prop::sample::select(vec![-1.0, 1.0]),
        ) {
            let report = Freestream::sea_level(mach)
                .unwrap()
                .analyze(&AirfoilFlowFieldSolver::default(), wedge, sign * aoa)
                .unwrap();
            prop_assert!(report.lift_coefficient() * sign > 0.0);
            prop_assert!(report.drag_coefficient() > 0.0);
        }
    }
}
