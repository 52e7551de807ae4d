//! Airfoil surfaces and the trailing-edge turning rule.

/// One side of the airfoil.
///
/// Each surface carries its orientation sign: positive angle of attack
/// reduces the upper-surface deflection and increases the lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Surface {
    Upper,
    Lower,
}

impl Surface {
    /// Both surfaces, in chain order.
    pub const BOTH: [Surface; 2] = [Surface::Upper, Surface::Lower];

    /// Orientation sign: +1 for the upper surface, -1 for the lower.
    pub fn sign(self) -> f64 {
        match self {
            Surface::Upper => 1.0,
            Surface::Lower => -1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Surface::Upper => "upper",
            Surface::Lower => "lower",
        }
    }

    /// Flow deflection at the leading edge, degrees.
    pub fn leading_edge_deflection_deg(self, wedge_angle_deg: f64, angle_of_attack_deg: f64) -> f64 {
        wedge_angle_deg - self.sign() * angle_of_attack_deg
    }
}

/// How the deflection of the trailing-edge shock is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TrailingEdgeRule {
    /// Turn the flow leaving the rear face back to the freestream direction.
    ///
    /// The signed turn is `sign * (2w - theta)` (`theta - 2w` on the lower
    /// surface); the shock is solved for its magnitude `2w - theta`.
    #[default]
    Geometric,
    /// `theta + 2w` on the upper surface and `theta - 2w` on the lower,
    /// passed to the shock unchanged.
    ///
    /// Kept for comparison with older results. The upper-surface turn
    /// usually exceeds the detachment limit and the lower-surface turn is
    /// negative whenever `aoa < w`, so most inputs end in `NoShockSolution`.
    Legacy,
}

impl TrailingEdgeRule {
    /// Deflection handed to the trailing-edge oblique shock, degrees.
    pub fn shock_deflection_deg(
        self,
        surface: Surface,
        wedge_angle_deg: f64,
        leading_edge_deflection_deg: f64,
    ) -> f64 {
        match self {
            TrailingEdgeRule::Geometric => 2.0 * wedge_angle_deg - leading_edge_deflection_deg,
            TrailingEdgeRule::Legacy => {
                leading_edge_deflection_deg + surface.sign() * 2.0 * wedge_angle_deg
            }
        }
    }
}
