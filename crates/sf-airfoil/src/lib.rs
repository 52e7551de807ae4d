//! sf-airfoil: shock-expansion flow field around a diamond airfoil.
//!
//! Each surface of the airfoil is a chain of three stages:
//! 1. leading-edge oblique shock (compression by the front-face deflection)
//! 2. mid-chord Prandtl-Meyer fan (expansion by twice the wedge angle)
//! 3. trailing-edge oblique shock (turning the flow back)
//!
//! At zero angle of attack both surfaces are identical and a single chain is
//! computed; otherwise upper and lower chains run independently.

pub mod geometry;
pub mod solver;
pub mod surface;

pub use geometry::DiamondAirfoil;
pub use solver::{AirfoilFlowFieldSolver, FlowField, SurfaceChain};
pub use surface::{Surface, TrailingEdgeRule};
