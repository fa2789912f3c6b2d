//! Case file validation.
//!
//! Checks the file-level structure and scalar settings. The trajectory and
//! pump table are checked when the models are built, so their errors keep
//! the `InvalidTrajectory` / `InvalidPumpCurve` kinds.

use crate::schema::WellCase;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing data: {what}")]
    Missing { what: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_case(case: &WellCase) -> Result<(), ValidationError> {
    if case.version == 0 || case.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    if case.name.trim().is_empty() {
        return Err(ValidationError::Missing {
            what: "case name".to_string(),
        });
    }

    finite("wellhead_pressure_bar", case.wellhead_pressure_bar)?;
    finite("reservoir.pressure_bar", case.reservoir.pressure_bar)?;
    finite("reservoir.productivity_index", case.reservoir.productivity_index)?;
    finite("fluid.density_kg_m3", case.fluid.density_kg_m3)?;
    finite("fluid.viscosity_pa_s", case.fluid.viscosity_pa_s)?;
    finite("fluid.gravity_m_s2", case.fluid.gravity_m_s2)?;
    finite("fluid.roughness_m", case.fluid.roughness_m)?;

    if let Some(esp) = &case.esp {
        finite("esp.intake_depth_m", esp.intake_depth_m)?;
    }

    if case.solver.sample_count == 0 {
        return Err(ValidationError::InvalidValue {
            field: "solver.sample_count".to_string(),
            value: "0".to_string(),
            reason: "need at least 1 sample".to_string(),
        });
    }

    Ok(())
}

fn finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be finite".to_string(),
        })
    }
}
