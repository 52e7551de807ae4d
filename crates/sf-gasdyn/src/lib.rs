//! sf-gasdyn: compressible-flow stage solvers for shockflow.
//!
//! Provides:
//! - `GasModel`, the single gas configuration shared by every stage
//! - `GasState`, the immutable result of one stage (Mach + property ratios)
//! - `ObliqueShockSolver`, weak-solution oblique shocks
//! - `PrandtlMeyerExpansion`, isentropic expansion fans (Hall inverse)
//!
//! # Example
//!
//! ```
//! use sf_gasdyn::{GasModel, ObliqueShockSolver, PrandtlMeyerExpansion};
//!
//! let gas = GasModel::air();
//! let shocked = ObliqueShockSolver::new(gas).solve(2.0, 20.0).unwrap();
//! assert!((shocked.mach() - 1.21).abs() < 0.01);
//!
//! let expanded = PrandtlMeyerExpansion::new(gas).solve(1.5, 15.0).unwrap();
//! assert!((expanded.mach() - 2.0).abs() < 0.05);
//! ```

pub mod error;
pub mod gas;
pub mod oblique_shock;
pub mod prandtl_meyer;
pub mod search;
pub mod state;

// Re-exports for ergonomics
pub use error::{FlowError, FlowResult};
pub use gas::GasModel;
pub use oblique_shock::ObliqueShockSolver;
pub use prandtl_meyer::PrandtlMeyerExpansion;
pub use search::RootSearchConfig;
pub use state::GasState;
