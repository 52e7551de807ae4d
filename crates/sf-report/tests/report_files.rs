use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use sf_airfoil::TrailingEdgeRule;
use sf_gasdyn::FlowError;
use sf_report::{
    AnalysisCase, ReportError, load_case, pressure_distribution, save_case,
    write_distribution_csv, write_json, write_regions_csv,
};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

#[test]
fn case_file_roundtrip_and_outputs() {
    let dir = unique_temp_dir("sf_report_case");
    fs::create_dir_all(&dir).expect("failed to create temp dir");

    let mut case = AnalysisCase::new(2.0, 10.0, 2.0);
    case.pressure_atm = 0.8;
    let case_path = dir.join("case.yaml");
    save_case(&case_path, &case).unwrap();
    let loaded = load_case(&case_path).unwrap();
    assert_eq!(loaded, case);

    let report = loaded.run().unwrap();
    assert!(!report.is_symmetric());

    let csv_path = dir.join("regions.csv");
    write_regions_csv(&csv_path, &report).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 5);
    assert!(csv.starts_with("Mach,density_ratio,pressure_ratio,temperature_ratio"));

    let dist_path = dir.join("distribution.csv");
    write_distribution_csv(&dist_path, &pressure_distribution(&report)).unwrap();
    assert_eq!(fs::read_to_string(&dist_path).unwrap().lines().count(), 161);

    let json_path = dir.join("summary.json");
    write_json(&json_path, &report).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value["freestream_mach"], 2.0);
    assert!((value["freestream_pressure_atm"].as_f64().unwrap() - 0.8).abs() < 1e-12);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn malformed_case_is_rejected() {
    let dir = unique_temp_dir("sf_report_bad_case");
    fs::create_dir_all(&dir).expect("failed to create temp dir");

    let missing_field = dir.join("missing.yaml");
    fs::write(&missing_field, "mach: 2.0\n").unwrap();
    assert!(matches!(load_case(&missing_field), Err(ReportError::Yaml(_))));

    let bad_range = dir.join("range.yaml");
    fs::write(&bad_range, "mach: 2.0\nwedge_angle_deg: 95.0\n").unwrap();
    assert!(matches!(
        load_case(&bad_range),
        Err(ReportError::InvalidCase { .. })
    ));

    assert!(matches!(
        load_case(&dir.join("absent.yaml")),
        Err(ReportError::Io(_))
    ));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn stage_failures_surface_as_flow_errors() {
    let mut legacy = AnalysisCase::new(4.0, 10.0, 2.0);
    legacy.trailing_edge_rule = TrailingEdgeRule::Legacy;
    assert!(matches!(
        legacy.run(),
        Err(ReportError::Flow(FlowError::NoShockSolution { .. }))
    ));

    let mut helium = AnalysisCase::new(2.0, 5.0, 0.0);
    helium.gamma = 5.0 / 3.0;
    assert!(matches!(
        helium.run(),
        Err(ReportError::Flow(FlowError::UnsupportedGamma { .. }))
    ));
}
