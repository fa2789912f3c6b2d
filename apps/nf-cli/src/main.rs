use clap::{Parser, Subcommand};
use nf_project::{BuiltCase, ProjectResult, build_case, demo_case, load_case};
use nf_solver::{NodalSolution, OperatingPoint, SampledCurves};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "nf-cli")]
#[command(about = "NodalFlow CLI - ESP well operating point from VLP/IPR", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a well case file and build its models
    Validate {
        /// Path to the case file (YAML, or JSON by extension)
        case_path: PathBuf,
    },
    /// Solve for the operating point
    Solve {
        /// Path to the case file; the built-in demo well when omitted
        case_path: Option<PathBuf>,
        /// Override the acceptance tolerance (bar)
        #[arg(long)]
        tolerance: Option<f64>,
        /// Override the number of flow samples
        #[arg(long)]
        samples: Option<usize>,
        /// Evaluate samples in parallel
        #[arg(long)]
        parallel: bool,
        /// Refine the grid point by bisection
        #[arg(long)]
        refine: bool,
    },
    /// Export sampled VLP/IPR curves as CSV
    Curves {
        /// Path to the case file; the built-in demo well when omitted
        case_path: Option<PathBuf>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the built-in demo case as YAML
    Demo,
}

fn main() -> ProjectResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Solve {
            case_path,
            tolerance,
            samples,
            parallel,
            refine,
        } => cmd_solve(case_path.as_deref(), tolerance, samples, parallel, refine),
        Commands::Curves { case_path, output } => {
            cmd_curves(case_path.as_deref(), output.as_deref())
        }
        Commands::Demo => cmd_demo(),
    }
}

fn load_built(case_path: Option<&Path>) -> ProjectResult<(String, BuiltCase)> {
    let case = match case_path {
        Some(path) => load_case(path)?,
        None => demo_case(),
    };
    let built = build_case(&case)?;
    Ok((case.name, built))
}

fn cmd_validate(case_path: &Path) -> ProjectResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = load_case(case_path)?;
    let built = build_case(&case)?;
    println!("✓ Case is valid");
    println!(
        "  {} waypoints, {} segments, {:.1} m along hole",
        built.trajectory.waypoints().len(),
        built.trajectory.segments().len(),
        built.trajectory.total_measured_length()
    );
    println!(
        "  Wellhead {:.1} bar, fluid {:.0} kg/m3",
        built.vlp.wellhead_pressure_bar(),
        built.vlp.fluid().density.value
    );
    println!(
        "  Reservoir {:.1} bar, PI {:.2} m3/hr/bar, AOF {:.1} m3/hr",
        built.reservoir.pressure_bar,
        built.reservoir.productivity_index,
        built.reservoir.absolute_open_flow()
    );
    match built.vlp.esp() {
        Some(esp) => println!("  ESP intake at {:.1} m", esp.intake_depth.value),
        None => println!("  No ESP installed"),
    }
    Ok(())
}

fn cmd_solve(
    case_path: Option<&Path>,
    tolerance: Option<f64>,
    samples: Option<usize>,
    parallel: bool,
    refine: bool,
) -> ProjectResult<()> {
    let (name, mut built) = load_built(case_path)?;
    if let Some(tol) = tolerance {
        built.options.tolerance_bar = tol;
    }
    if let Some(n) = samples {
        built.options.sample_count = n;
    }
    built.options.parallel |= parallel;
    built.options.refine |= refine;

    println!("Solving operating point for: {}", name);
    println!(
        "  flow {:.1}..{:.1} m3/hr, {} samples, tolerance {:.2} bar",
        built.options.flow_min,
        built.options.flow_max,
        built.options.sample_count,
        built.options.tolerance_bar
    );

    let start = Instant::now();
    let solution = built.solve()?;
    tracing::debug!(elapsed_s = start.elapsed().as_secs_f64(), "solve finished");

    print_report(&solution);
    Ok(())
}

fn print_report(solution: &NodalSolution) {
    match solution.operating_point {
        OperatingPoint::Found {
            flow,
            pressure,
            pump_head,
        } => {
            println!("Solution found:");
            println!("Flowrate: {:.2} m3/hr", flow);
            println!("Bottomhole pressure: {:.2} bar", pressure);
            println!("Pump head: {:.1} m", pump_head);
        }
        OperatingPoint::NotFound => {
            println!("No solution found with current settings.");
            if let Some(i) = solution.best_index {
                println!(
                    "  closest sample: {:.2} m3/hr, gap {:.3} bar",
                    solution.curves.flow[i], solution.min_gap
                );
            }
        }
    }

    if let Some(r) = &solution.refined {
        println!(
            "Refined: {:.4} m3/hr at {:.3} bar (residual {:.2e} bar, {} iterations)",
            r.flow, r.pressure, r.residual, r.iterations
        );
    }
}

fn cmd_curves(case_path: Option<&Path>, output: Option<&Path>) -> ProjectResult<()> {
    let (_name, built) = load_built(case_path)?;
    let solution = built.solve()?;
    let csv = curves_csv(&solution.curves);

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} samples to {}",
            solution.curves.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn curves_csv(curves: &SampledCurves) -> String {
    let mut csv = String::from("flow_m3h,vlp_bar,ipr_bar\n");
    for i in 0..curves.len() {
        csv.push_str(&format!(
            "{},{},{}\n",
            curves.flow[i], curves.vlp[i], curves.ipr[i]
        ));
    }
    csv
}

fn cmd_demo() -> ProjectResult<()> {
    print!("{}", serde_yaml::to_string(&demo_case())?);
    Ok(())
}
