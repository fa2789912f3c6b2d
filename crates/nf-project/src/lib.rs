//! nf-project: well case file format, validation and model construction.

pub mod build;
pub mod schema;
pub mod validate;

pub use build::{BuiltCase, build_case, solve_case};
pub use schema::*;
pub use validate::{ValidationError, validate_case};

/// Newest case file version this crate reads.
pub const LATEST_VERSION: u32 = 1;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Model error: {0}")]
    Model(#[from] nf_well::WellError),

    #[error("Solver error: {0}")]
    Solver(#[from] nf_solver::SolverError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<WellCase> {
    let content = std::fs::read_to_string(path)?;
    let case: WellCase = serde_yaml::from_str(&content)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn save_yaml(path: &std::path::Path, case: &WellCase) -> ProjectResult<()> {
    validate_case(case)?;
    let content = serde_yaml::to_string(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<WellCase> {
    let content = std::fs::read_to_string(path)?;
    let case: WellCase = serde_json::from_str(&content)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn save_json(path: &std::path::Path, case: &WellCase) -> ProjectResult<()> {
    validate_case(case)?;
    let content = serde_json::to_string_pretty(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, anything else as YAML.
pub fn load_case(path: &std::path::Path) -> ProjectResult<WellCase> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}

/// Reference ESP well: water through 13⅜", 9⅝" and 7" strings to 2500 m,
/// 230 bar reservoir with PI 5 m³/h/bar, pump intake at 500 m.
pub fn demo_case() -> WellCase {
    WellCase {
        version: LATEST_VERSION,
        name: "ESP demo well".to_string(),
        fluid: FluidDef::default(),
        reservoir: ReservoirDef {
            pressure_bar: 230.0,
            productivity_index: 5.0,
        },
        wellhead_pressure_bar: 10.0,
        esp: Some(EspDef {
            intake_depth_m: 500.0,
            curve: PumpCurveDef {
                flow_m3h: vec![0.0, 100.0, 200.0, 300.0, 400.0],
                head_m: vec![600.0, 550.0, 450.0, 300.0, 100.0],
            },
        }),
        trajectory: vec![
            WaypointDef {
                md_m: 0.0,
                tvd_m: 0.0,
                id_m: 0.3397,
            },
            WaypointDef {
                md_m: 500.0,
                tvd_m: 500.0,
                id_m: 0.2445,
            },
            WaypointDef {
                md_m: 1500.0,
                tvd_m: 1500.0,
                id_m: 0.1778,
            },
            WaypointDef {
                md_m: 2500.0,
                tvd_m: 2500.0,
                id_m: 0.1778,
            },
        ],
        solver: SolverDef::default(),
    }
}
