//! Single-phase fluid and pipe-wall properties.

use crate::error::{WellResult, param};
use nf_core::numeric::{ensure_non_negative, ensure_positive};
use nf_core::units::{Accel, Density, DynVisc, Length, constants, kg_per_m3, m, pa_s};

/// Constants shared by every segment of one well evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    /// Fluid density
    pub density: Density,
    /// Dynamic viscosity (Newtonian)
    pub viscosity: DynVisc,
    /// Gravitational acceleration
    pub gravity: Accel,
    /// Absolute pipe roughness
    pub roughness: Length,
}

impl FluidProperties {
    /// Create validated fluid properties.
    ///
    /// # Errors
    /// `InvalidParameter` if density, viscosity or gravity is not positive,
    /// or roughness is negative.
    pub fn new(
        density: Density,
        viscosity: DynVisc,
        gravity: Accel,
        roughness: Length,
    ) -> WellResult<Self> {
        param(ensure_positive(density.value, "fluid density"))?;
        param(ensure_positive(viscosity.value, "fluid viscosity"))?;
        param(ensure_positive(gravity.value, "gravity"))?;
        param(ensure_non_negative(roughness.value, "pipe roughness"))?;

        Ok(Self {
            density,
            viscosity,
            gravity,
            roughness,
        })
    }

    /// Water in smooth steel: 1000 kg/m³, 1 mPa·s, g = 9.81, ε = 10 µm.
    pub fn water() -> Self {
        Self {
            density: kg_per_m3(1000.0),
            viscosity: pa_s(1e-3),
            gravity: constants::g_field(),
            roughness: m(1e-5),
        }
    }

    /// Pressure of a static fluid column of the given height (Pa).
    pub fn column_pressure(&self, height_m: f64) -> f64 {
        self.density.value * self.gravity.value * height_m
    }
}

impl Default for FluidProperties {
    fn default() -> Self {
        Self::water()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WellError;
    use nf_core::units::mps2;

    #[test]
    fn water_is_valid() {
        let w = FluidProperties::water();
        let checked = FluidProperties::new(w.density, w.viscosity, w.gravity, w.roughness);
        assert_eq!(checked, Ok(w));
    }

    #[test]
    fn rejects_non_positive_density() {
        let err = FluidProperties::new(kg_per_m3(0.0), pa_s(1e-3), mps2(9.81), m(1e-5))
            .unwrap_err();
        assert!(matches!(err, WellError::InvalidParameter { .. }));
    }

    #[test]
    fn zero_roughness_is_allowed() {
        assert!(FluidProperties::new(kg_per_m3(850.0), pa_s(5e-3), mps2(9.81), m(0.0)).is_ok());
    }

    #[test]
    fn column_pressure_of_ten_metres_of_water() {
        let w = FluidProperties::water();
        assert!((w.column_pressure(10.0) - 98_100.0).abs() < 1e-9);
    }
}
