//! Region chaining around the airfoil.

use crate::geometry::DiamondAirfoil;
use crate::surface::{Surface, TrailingEdgeRule};
use sf_core::{ensure_above, ensure_finite};
use sf_gasdyn::{
    FlowResult, GasModel, GasState, ObliqueShockSolver, PrandtlMeyerExpansion, RootSearchConfig,
};
use tracing::{debug, info};

/// The three regions computed along one surface, in streamwise order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceChain {
    pub surface: Surface,
    /// Deflection of the leading-edge shock, degrees.
    pub leading_edge_deflection_deg: f64,
    /// Turning through the mid-chord fan, degrees.
    pub expansion_angle_deg: f64,
    /// Deflection of the trailing-edge shock, degrees.
    pub trailing_edge_deflection_deg: f64,
    /// Behind the leading-edge shock (front face).
    pub leading_edge: GasState,
    /// Behind the mid-chord fan (rear face).
    pub mid_chord: GasState,
    /// Behind the trailing-edge shock (wake).
    pub trailing_edge: GasState,
}

impl SurfaceChain {
    pub fn regions(&self) -> [GasState; 3] {
        [self.leading_edge, self.mid_chord, self.trailing_edge]
    }

    /// States on the front and rear faces.
    pub fn faces(&self) -> [GasState; 2] {
        [self.leading_edge, self.mid_chord]
    }
}

/// Result of one airfoil analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowField {
    gas: GasModel,
    freestream_mach: f64,
    airfoil: DiamondAirfoil,
    angle_of_attack_deg: f64,
    trailing_edge_rule: TrailingEdgeRule,
    chains: Vec<SurfaceChain>,
}

impl FlowField {
    pub fn gas(&self) -> GasModel {
        self.gas
    }

    pub fn freestream_mach(&self) -> f64 {
        self.freestream_mach
    }

    pub fn airfoil(&self) -> DiamondAirfoil {
        self.airfoil
    }

    pub fn angle_of_attack_deg(&self) -> f64 {
        self.angle_of_attack_deg
    }

    pub fn trailing_edge_rule(&self) -> TrailingEdgeRule {
        self.trailing_edge_rule
    }

    /// One chain when symmetric (upper), otherwise upper then lower.
    pub fn chains(&self) -> &[SurfaceChain] {
        &self.chains
    }

    /// True when a single chain describes both surfaces.
    pub fn is_symmetric(&self) -> bool {
        self.chains.len() == 1
    }

    /// Chain for a surface; both surfaces share the single chain when symmetric.
    pub fn surface_chain(&self, surface: Surface) -> &SurfaceChain {
        self.chains
            .iter()
            .find(|chain| chain.surface == surface)
            .unwrap_or(&self.chains[0])
    }

    /// All regions, chain order then stage order (3 or 6 entries).
    pub fn regions(&self) -> Vec<GasState> {
        self.chains.iter().flat_map(|chain| chain.regions()).collect()
    }

    pub fn len(&self) -> usize {
        3 * self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

/// Drives shocks and expansion fans around a diamond airfoil.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirfoilFlowFieldSolver {
    gas: GasModel,
    shock: ObliqueShockSolver,
    expansion: PrandtlMeyerExpansion,
    trailing_edge_rule: TrailingEdgeRule,
}

impl AirfoilFlowFieldSolver {
    pub fn new(gas: GasModel) -> Self {
        Self {
            gas,
            shock: ObliqueShockSolver::new(gas),
            expansion: PrandtlMeyerExpansion::new(gas),
            trailing_edge_rule: TrailingEdgeRule::default(),
        }
    }

    pub fn with_trailing_edge_rule(mut self, rule: TrailingEdgeRule) -> Self {
        self.trailing_edge_rule = rule;
        self
    }

    /// Replace the search limits of every stage.
    pub fn with_search_config(mut self, config: RootSearchConfig) -> FlowResult<Self> {
        self.shock = self.shock.with_config(config)?;
        self.expansion = self.expansion.with_config(config)?;
        Ok(self)
    }

    pub fn gas(&self) -> GasModel {
        self.gas
    }

    pub fn trailing_edge_rule(&self) -> TrailingEdgeRule {
        self.trailing_edge_rule
    }

    /// Analyze the airfoil in a uniform supersonic stream.
    ///
    /// Fails with `InvalidInput` for `m_inf <= 1` or `wedge_angle_deg <= 0`.
    /// The first stage failure aborts the analysis; no partial field is
    /// returned.
    pub fn analyze(
        &self,
        m_inf: f64,
        wedge_angle_deg: f64,
        angle_of_attack_deg: f64,
    ) -> FlowResult<FlowField> {
        let m_inf = ensure_above(m_inf, 1.0, "freestream mach must be supersonic")?;
        let airfoil = DiamondAirfoil::new(wedge_angle_deg)?;
        let aoa = ensure_finite(angle_of_attack_deg, "angle of attack must be finite")?;

        info!(
            m_inf,
            wedge_angle_deg,
            angle_of_attack_deg = aoa,
            rule = ?self.trailing_edge_rule,
            "analyzing diamond airfoil"
        );

        #[allow(clippy::float_cmp)]
        let chains = if aoa == 0.0 {
            vec![self.run_chain(Surface::Upper, m_inf, &airfoil, aoa)?]
        } else {
            let (upper, lower) = rayon::join(
                || self.run_chain(Surface::Upper, m_inf, &airfoil, aoa),
                || self.run_chain(Surface::Lower, m_inf, &airfoil, aoa),
            );
            vec![upper?, lower?]
        };

        info!(regions = 3 * chains.len(), "airfoil analysis complete");

        Ok(FlowField {
            gas: self.gas,
            freestream_mach: m_inf,
            airfoil,
            angle_of_attack_deg: aoa,
            trailing_edge_rule: self.trailing_edge_rule,
            chains,
        })
    }

    fn run_chain(
        &self,
        surface: Surface,
        m_inf: f64,
        airfoil: &DiamondAirfoil,
        aoa: f64,
    ) -> FlowResult<SurfaceChain> {
        let wedge = airfoil.wedge_angle_deg();
        let theta = surface.leading_edge_deflection_deg(wedge, aoa);
        let expansion_angle = 2.0 * wedge;
        let trailing = self
            .trailing_edge_rule
            .shock_deflection_deg(surface, wedge, theta);

        let leading_edge = self.shock.solve(m_inf, theta)?;
        let mid_chord = self.expansion.solve(leading_edge.mach(), expansion_angle)?;
        let trailing_edge = self.shock.solve(mid_chord.mach(), trailing)?;

        debug!(
            surface = surface.label(),
            theta,
            trailing,
            m_front = leading_edge.mach(),
            m_rear = mid_chord.mach(),
            m_wake = trailing_edge.mach(),
            "surface chain"
        );

        Ok(SurfaceChain {
            surface,
            leading_edge_deflection_deg: theta,
            expansion_angle_deg: expansion_angle,
            trailing_edge_deflection_deg: trailing,
            leading_edge,
            mid_chord,
            trailing_edge,
        })
    }
}

impl Default for AirfoilFlowFieldSolver {
    fn default() -> Self {
        Self::new(GasModel::air())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_gasdyn::FlowError;

    #[test]
    fn symmetric_field_has_one_chain() {
        let field = AirfoilFlowFieldSolver::default()
            .analyze(2.0, 10.0, 0.0)
            .unwrap();
        assert!(field.is_symmetric());
        assert_eq!(field.len(), 3);
        assert_eq!(field.regions().len(), 3);
        assert_eq!(
            field.surface_chain(Surface::Lower),
            field.surface_chain(Surface::Upper)
        );
        assert_eq!(field.chains()[0].trailing_edge_deflection_deg, 10.0);
    }

    #[test]
    fn incidence_gives_two_independent_chains() {
        let solver = AirfoilFlowFieldSolver::default();
        let field = solver.analyze(2.0, 10.0, 2.0).unwrap();
        assert_eq!(field.len(), 6);

        let upper = field.surface_chain(Surface::Upper);
        let lower = field.surface_chain(Surface::Lower);
        assert_eq!(upper.leading_edge_deflection_deg, 8.0);
        assert_eq!(lower.leading_edge_deflection_deg, 12.0);

        let shock = ObliqueShockSolver::new(GasModel::air());
        assert_eq!(upper.leading_edge, shock.solve(2.0, 8.0).unwrap());
        assert_eq!(lower.leading_edge, shock.solve(2.0, 12.0).unwrap());
        // lower face is compressed harder
        assert!(lower.leading_edge.pressure_ratio() > upper.leading_edge.pressure_ratio());
    }

    #[test]
    fn parallel_chains_match_sequential_chains() {
        let solver = AirfoilFlowFieldSolver::default();
        let airfoil = DiamondAirfoil::new(6.0).unwrap();
        let field = solver.analyze(3.0, 6.0, -1.5).unwrap();

        let sequential: Vec<GasState> = Surface::BOTH
            .iter()
            .flat_map(|&surface| {
                solver
                    .run_chain(surface, 3.0, &airfoil, -1.5)
                    .unwrap()
                    .regions()
            })
            .collect();
        assert_eq!(field.regions(), sequential);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let solver = AirfoilFlowFieldSolver::default();
        assert!(matches!(
            solver.analyze(1.0, 10.0, 0.0),
            Err(FlowError::InvalidInput { .. })
        ));
        assert!(matches!(
            solver.analyze(2.0, 0.0, 0.0),
            Err(FlowError::InvalidInput { .. })
        ));
        assert!(matches!(
            solver.analyze(2.0, -3.0, 0.0),
            Err(FlowError::InvalidInput { .. })
        ));
        assert!(matches!(
            solver.analyze(2.0, 10.0, f64::NAN),
            Err(FlowError::InvalidInput { .. })
        ));
    }

    #[test]
    fn stage_failure_aborts_the_analysis() {
        // 20 deg front face at M 1.5 is beyond detachment (12.1 deg)
        let err = AirfoilFlowFieldSolver::default()
            .analyze(1.5, 20.0, 0.0)
            .unwrap_err();
        assert!(matches!(err, FlowError::NoShockSolution { .. }));
    }

    #[test]
    fn unsupported_gamma_propagates() {
        let solver = AirfoilFlowFieldSolver::new(GasModel::new(1.3).unwrap());
        assert_eq!(
            solver.analyze(2.0, 5.0, 0.0).unwrap_err(),
            FlowError::UnsupportedGamma { gamma: 1.3 }
        );
    }

    #[test]
    fn starved_search_fails_the_analysis() {
        let solver = AirfoilFlowFieldSolver::default()
            .with_search_config(RootSearchConfig {
                max_iters: 3,
                ..RootSearchConfig::default()
            })
            .unwrap();
        assert!(matches!(
            solver.analyze(2.0, 10.0, 0.0),
            Err(FlowError::NoShockSolution { .. })
        ));
        assert!(matches!(
            solver.analyze(2.0, 10.0, 2.0),
            Err(FlowError::NoShockSolution { .. })
        ));
    }

    #[test]
    fn legacy_rule_detaches_at_moderate_mach() {
        let solver =
            AirfoilFlowFieldSolver::default().with_trailing_edge_rule(TrailingEdgeRule::Legacy);
        let err = solver.analyze(2.0, 10.0, 0.0).unwrap_err();
        match err {
            FlowError::NoShockSolution { deflection_deg, .. } => {
                assert_eq!(deflection_deg, 30.0)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn legacy_rule_at_high_mach() {
        let field = AirfoilFlowFieldSolver::default()
            .with_trailing_edge_rule(TrailingEdgeRule::Legacy)
            .analyze(3.0, 5.0, 0.0)
            .unwrap();
        let chain = field.chains()[0];
        assert_eq!(chain.trailing_edge_deflection_deg, 15.0);
        assert!(chain.trailing_edge.mach() < chain.mid_chord.mach());
    }
}
