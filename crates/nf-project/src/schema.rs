//! Well case file schema.

use nf_solver::SolveOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellCase {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub fluid: FluidDef,
    pub reservoir: ReservoirDef,
    pub wellhead_pressure_bar: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub esp: Option<EspDef>,
    pub trajectory: Vec<WaypointDef>,
    #[serde(default)]
    pub solver: SolverDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FluidDef {
    pub density_kg_m3: f64,
    pub viscosity_pa_s: f64,
    #[serde(default = "default_gravity")]
    pub gravity_m_s2: f64,
    #[serde(default = "default_roughness")]
    pub roughness_m: f64,
}

impl Default for FluidDef {
    fn default() -> Self {
        Self {
            density_kg_m3: 1000.0,
            viscosity_pa_s: 1e-3,
            gravity_m_s2: default_gravity(),
            roughness_m: default_roughness(),
        }
    }
}

fn default_gravity() -> f64 {
    nf_core::units::constants::G_FIELD_MPS2
}

fn default_roughness() -> f64 {
    1e-5
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReservoirDef {
    pub pressure_bar: f64,
    /// m³/h per bar
    pub productivity_index: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EspDef {
    pub intake_depth_m: f64,
    pub curve: PumpCurveDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PumpCurveDef {
    pub flow_m3h: Vec<f64>,
    pub head_m: Vec<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WaypointDef {
    pub md_m: f64,
    pub tvd_m: f64,
    pub id_m: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SolverDef {
    pub flow_min_m3h: f64,
    pub flow_max_m3h: f64,
    pub sample_count: usize,
    pub tolerance_bar: f64,
    pub parallel: bool,
    pub refine: bool,
}

impl Default for SolverDef {
    fn default() -> Self {
        SolveOptions::default().into()
    }
}

impl From<SolveOptions> for SolverDef {
    fn from(o: SolveOptions) -> Self {
        Self {
            flow_min_m3h: o.flow_min,
            flow_max_m3h: o.flow_max,
            sample_count: o.sample_count,
            tolerance_bar: o.tolerance_bar,
            parallel: o.parallel,
            refine: o.refine,
        }
    }
}

impl From<SolverDef> for SolveOptions {
    fn from(d: SolverDef) -> Self {
        Self {
            flow_min: d.flow_min_m3h,
            flow_max: d.flow_max_m3h,
            sample_count: d.sample_count,
            tolerance_bar: d.tolerance_bar,
            parallel: d.parallel,
            refine: d.refine,
        }
    }
}
