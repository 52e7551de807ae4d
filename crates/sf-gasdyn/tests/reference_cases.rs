//! Reference cases for single shock and expansion stages.
//!
//! Freestream at 1 atm and 288 K; downstream pressure and temperature are the
//! freestream values scaled by the stage ratios.

use sf_core::units::{atm, k, to_atm, to_kelvin};
use sf_gasdyn::{FlowError, GasModel, ObliqueShockSolver, PrandtlMeyerExpansion};

#[test]
fn compression_mach_two_twenty_degrees() {
    let state = ObliqueShockSolver::new(GasModel::air())
        .solve(2.0, 20.0)
        .unwrap();

    let p2 = atm(1.0) * state.pressure_ratio();
    let t2 = k(288.0) * state.temperature_ratio();

    assert!((state.mach() - 1.21).abs() < 0.01, "M2 = {}", state.mach());
    assert!((to_atm(p2) - 2.82).abs() < 0.05, "p2 = {} atm", to_atm(p2));
    assert!((to_kelvin(t2) - 399.7).abs() < 2.0, "T2 = {} K", to_kelvin(t2));
    assert!(state.identity_residual() < 1e-6);
}

#[test]
fn expansion_mach_one_point_five_fifteen_degrees() {
    let state = PrandtlMeyerExpansion::new(GasModel::air())
        .solve(1.5, 15.0)
        .unwrap();

    let p2 = atm(1.0) * state.pressure_ratio();
    let t2 = k(288.0) * state.temperature_ratio();

    assert!((state.mach() - 2.0).abs() < 0.03, "M2 = {}", state.mach());
    assert!((to_atm(p2) - 0.469).abs() < 0.02, "p2 = {} atm", to_atm(p2));
    assert!((to_kelvin(t2) - 232.0).abs() < 2.5, "T2 = {} K", to_kelvin(t2));
    assert!(state.identity_residual() < 1e-6);
}

#[test]
fn shock_beyond_detachment_fails() {
    let err = ObliqueShockSolver::new(GasModel::air())
        .solve(1.5, 60.0)
        .unwrap_err();
    assert!(matches!(err, FlowError::NoShockSolution { .. }));
}

#[test]
fn shared_gas_model_drives_both_stages() {
    let gas = GasModel::new(1.4).unwrap();
    let shock = ObliqueShockSolver::new(gas);
    let fan = PrandtlMeyerExpansion::new(gas);
    assert_eq!(shock.gas(), fan.gas());

    let compressed = shock.solve(2.5, 8.0).unwrap();
    let expanded = fan.solve(compressed.mach(), 8.0).unwrap();
    assert!(compressed.mach() < 2.5);
    assert!(expanded.mach() > compressed.mach());
}
