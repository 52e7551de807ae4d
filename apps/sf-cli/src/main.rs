use clap::{Args, Parser, Subcommand};
use sf_airfoil::{Surface, TrailingEdgeRule};
use sf_core::units::{atm, constants, k};
use sf_gasdyn::{GasModel, GasState, ObliqueShockSolver, PrandtlMeyerExpansion};
use sf_report::{
    AirfoilReport, AnalysisCase, RegionKind, ReportResult, StageReport,
    default_regions_file_name, load_case, pressure_distribution, write_distribution_csv,
    write_json, write_regions_csv,
};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "sf-cli")]
#[command(about = "ShockFlow CLI - Shock-expansion analysis of a diamond airfoil", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a diamond airfoil in a supersonic stream
    Analyze {
        /// Freestream Mach number
        mach: f64,
        /// Half-angle of the diamond, degrees
        wedge_angle: f64,
        /// Angle of attack, degrees
        #[arg(short = 'a', long, default_value_t = 0.0, allow_negative_numbers = true)]
        angle_of_attack: f64,
        /// Freestream static pressure, atm
        #[arg(short = 'p', long, default_value_t = 1.0)]
        initial_pressure: f64,
        /// Freestream static temperature, K
        #[arg(long, default_value_t = constants::T_SEA_LEVEL_K)]
        temperature: f64,
        /// Ratio of specific heats
        #[arg(long, default_value_t = constants::GAMMA_AIR)]
        gamma: f64,
        /// Use the legacy trailing-edge turning rule
        #[arg(long)]
        legacy_trailing_edge: bool,
        #[command(flatten)]
        outputs: OutputArgs,
    },
    /// Run an analysis case file
    Case {
        /// Path to the case YAML file
        case_path: PathBuf,
        #[command(flatten)]
        outputs: OutputArgs,
    },
    /// Solve a single oblique shock
    Shock {
        /// Upstream Mach number
        mach: f64,
        /// Flow deflection, degrees
        theta: f64,
        #[command(flatten)]
        upstream: UpstreamArgs,
    },
    /// Solve a single Prandtl-Meyer expansion
    Expand {
        /// Upstream Mach number
        mach: f64,
        /// Turning angle, degrees
        theta: f64,
        #[command(flatten)]
        upstream: UpstreamArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Region table CSV (defaults to diamond_airfoil_at_{aoa}_AoA.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Pressure distribution CSV
    #[arg(long)]
    distribution: Option<PathBuf>,
    /// JSON summary
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Args)]
struct UpstreamArgs {
    /// Upstream static pressure, atm
    #[arg(long, default_value_t = 1.0)]
    pressure: f64,
    /// Upstream static temperature, K
    #[arg(long, default_value_t = constants::T_SEA_LEVEL_K)]
    temperature: f64,
    /// Ratio of specific heats
    #[arg(long, default_value_t = constants::GAMMA_AIR)]
    gamma: f64,
}

impl UpstreamArgs {
    fn stage(&self, mach: f64, theta: f64, state: &GasState) -> ReportResult<StageReport> {
        StageReport::from_upstream(mach, atm(self.pressure), k(self.temperature), theta, state)
    }
}

fn main() -> ReportResult<()> {
    // RUST_LOG sets the level
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            mach,
            wedge_angle,
            angle_of_attack,
            initial_pressure,
            temperature,
            gamma,
            legacy_trailing_edge,
            outputs,
        } => {
            let case = AnalysisCase {
                mach,
                wedge_angle_deg: wedge_angle,
                angle_of_attack_deg: angle_of_attack,
                pressure_atm: initial_pressure,
                temperature_k: temperature,
                gamma,
                trailing_edge_rule: if legacy_trailing_edge {
                    TrailingEdgeRule::Legacy
                } else {
                    TrailingEdgeRule::Geometric
                },
            };
            cmd_run_case(&case, &outputs)
        }
        Commands::Case { case_path, outputs } => cmd_case(&case_path, &outputs),
        Commands::Shock {
            mach,
            theta,
            upstream,
        } => cmd_shock(mach, theta, &upstream),
        Commands::Expand {
            mach,
            theta,
            upstream,
        } => cmd_expand(mach, theta, &upstream),
    }
}

fn cmd_case(case_path: &Path, outputs: &OutputArgs) -> ReportResult<()> {
    println!("Loading case: {}", case_path.display());
    let case = load_case(case_path)?;
    cmd_run_case(&case, outputs)
}

fn cmd_run_case(case: &AnalysisCase, outputs: &OutputArgs) -> ReportResult<()> {
    println!(
        "Diamond airfoil: M = {:.3}, w = {:.3} deg, AoA = {:.3} deg",
        case.mach, case.wedge_angle_deg, case.angle_of_attack_deg
    );
    debug!(?case, "running case");
    let report = case.run()?;
    print_report(&report);

    let csv_path = outputs
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_regions_file_name(case.angle_of_attack_deg)));
    write_regions_csv(&csv_path, &report)?;
    println!("✓ Region table written to {}", csv_path.display());

    if let Some(path) = &outputs.distribution {
        write_distribution_csv(path, &pressure_distribution(&report))?;
        println!("✓ Pressure distribution written to {}", path.display());
    }
    if let Some(path) = &outputs.json {
        write_json(path, &report)?;
        println!("✓ Summary written to {}", path.display());
    }
    Ok(())
}

fn print_report(report: &AirfoilReport) {
    println!(
        "{:<8} {:<10} {:>8} {:>10} {:>10} {:>10} {:>12} {:>10}",
        "surface", "region", "Mach", "rho ratio", "p ratio", "T ratio", "p [atm]", "T [K]"
    );
    let surfaces: &[Surface] = if report.is_symmetric() {
        &[Surface::Upper]
    } else {
        &Surface::BOTH
    };
    for &surface in surfaces {
        for kind in RegionKind::ALL {
            let region = report.region(surface, kind);
            println!(
                "{:<8} {:<10} {:>8.4} {:>10.4} {:>10.4} {:>10.4} {:>12.4} {:>10.2}",
                surface.label(),
                kind.label(),
                region.mach,
                region.density_ratio,
                region.pressure_ratio,
                region.temperature_ratio,
                region.pressure_atm,
                region.temperature_k
            );
        }
    }
    if report.is_symmetric() {
        println!("(lower surface identical to upper)");
    }
    println!(
        "  Cl = {:.5}, Cd = {:.5}",
        report.lift_coefficient(),
        report.drag_coefficient()
    );
}

fn cmd_shock(mach: f64, theta: f64, upstream: &UpstreamArgs) -> ReportResult<()> {
    let solver = ObliqueShockSolver::new(GasModel::new(upstream.gamma)?);
    let state = solver.solve(mach, theta)?;
    let beta = solver.wave_angle(mach, theta)?;
    let max_deflection = solver.detachment_angle_deg(mach)?;

    println!("Oblique shock: M1 = {:.4}, theta = {:.3} deg", mach, theta);
    println!(
        "  beta = {:.3} deg (detachment at {:.3} deg)",
        beta.to_degrees(),
        max_deflection
    );
    print_stage(&upstream.stage(mach, theta, &state)?);
    Ok(())
}

fn cmd_expand(mach: f64, theta: f64, upstream: &UpstreamArgs) -> ReportResult<()> {
    let fan = PrandtlMeyerExpansion::new(GasModel::new(upstream.gamma)?);
    let state = fan.solve(mach, theta)?;
    let nu1 = fan.prandtl_meyer_angle(mach)?;

    println!("Expansion fan: M1 = {:.4}, theta = {:.3} deg", mach, theta);
    println!(
        "  nu1 = {:.3} deg, nu2 = {:.3} deg",
        nu1.to_degrees(),
        nu1.to_degrees() + theta
    );
    print_stage(&upstream.stage(mach, theta, &state)?);
    Ok(())
}

fn print_stage(stage: &StageReport) {
    println!("  M2 = {:.4}", stage.mach);
    println!(
        "  rho2/rho1 = {:.4}, p2/p1 = {:.4}, T2/T1 = {:.4}",
        stage.density_ratio, stage.pressure_ratio, stage.temperature_ratio
    );
    println!(
        "  p2 = {:.4} atm, T2 = {:.2} K",
        stage.pressure_atm, stage.temperature_k
    );
}
