// nf-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, DynamicViscosity as UomDynamicViscosity,
    Length as UomLength, MassDensity as UomMassDensity,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Density = UomMassDensity;

/// Seconds per hour, for m³/h <-> m³/s.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Pascals per bar.
pub const PA_PER_BAR: f64 = 1e5;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn mps2(v: f64) -> Accel {
    use uom::si::acceleration::meter_per_second_squared;
    Accel::new::<meter_per_second_squared>(v)
}

/// Volumetric rate in m³/h to m³/s.
#[inline]
pub fn m3ph_to_m3ps(v: f64) -> f64 {
    v / SECONDS_PER_HOUR
}

/// Pressure in Pa to bar.
#[inline]
pub fn pa_to_bar(v: f64) -> f64 {
    v / PA_PER_BAR
}

pub mod constants {
    use super::*;

    /// Gravity used by the reference field case.
    pub const G_FIELD_MPS2: f64 = 9.81;

    #[inline]
    pub fn g_field() -> Accel {
        mps2(G_FIELD_MPS2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::length::foot;

    #[test]
    fn constructors_store_si_values() {
        assert_eq!(m(2500.0).value, 2500.0);
        assert_eq!(kg_per_m3(1000.0).value, 1000.0);
        assert_eq!(pa_s(1e-3).value, 1e-3);
        assert_eq!(constants::g_field().value, 9.81);
        assert!((m(0.3048).get::<foot>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn field_unit_conversions() {
        assert_eq!(m3ph_to_m3ps(3600.0), 1.0);
        assert_eq!(pa_to_bar(2.0e5), 2.0);
    }
}
