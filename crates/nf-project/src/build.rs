//! Turn a case file into validated models and run it.

use crate::schema::{EspDef, FluidDef, WellCase};
use crate::{ProjectResult, validate_case};
use nf_core::units::{kg_per_m3, m, mps2, pa_s};
use nf_solver::{NodalSolution, SolveOptions, solve};
use nf_well::{
    Esp, FluidProperties, PumpCurve, Reservoir, Trajectory, VlpModel, Waypoint, WellResult,
};

/// Models built from one case, ready to solve.
#[derive(Debug, Clone)]
pub struct BuiltCase {
    pub trajectory: Trajectory,
    pub vlp: VlpModel,
    pub reservoir: Reservoir,
    pub options: SolveOptions,
}

impl BuiltCase {
    pub fn solve(&self) -> ProjectResult<NodalSolution> {
        Ok(solve(&self.vlp, &self.reservoir, &self.options)?)
    }
}

pub fn build_case(case: &WellCase) -> ProjectResult<BuiltCase> {
    validate_case(case)?;

    let trajectory = Trajectory::new(
        case.trajectory
            .iter()
            .map(|w| Waypoint::new(w.md_m, w.tvd_m, w.id_m))
            .collect(),
    )?;
    let fluid = build_fluid(&case.fluid)?;
    let esp = case.esp.as_ref().map(build_esp).transpose()?;
    let vlp = VlpModel::new(&trajectory, fluid, esp, case.wellhead_pressure_bar)?;
    let reservoir = Reservoir::new(
        case.reservoir.pressure_bar,
        case.reservoir.productivity_index,
    )?;

    let options: SolveOptions = case.solver.into();
    options.validate()?;

    tracing::debug!(case = %case.name, "case built");

    Ok(BuiltCase {
        trajectory,
        vlp,
        reservoir,
        options,
    })
}

/// Build and solve in one step.
pub fn solve_case(case: &WellCase) -> ProjectResult<NodalSolution> {
    build_case(case)?.solve()
}

fn build_fluid(def: &FluidDef) -> WellResult<FluidProperties> {
    FluidProperties::new(
        kg_per_m3(def.density_kg_m3),
        pa_s(def.viscosity_pa_s),
        mps2(def.gravity_m_s2),
        m(def.roughness_m),
    )
}

fn build_esp(def: &EspDef) -> WellResult<Esp> {
    let curve = PumpCurve::new(def.curve.flow_m3h.clone(), def.curve.head_m.clone())?;
    Esp::new(curve, def.intake_depth_m)
}
