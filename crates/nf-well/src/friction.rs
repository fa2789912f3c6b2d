//! Darcy friction factor for turbulent pipe flow.

/// Reynolds number `ρ·|u|·D/μ`.
#[inline]
pub fn reynolds(density: f64, velocity: f64, diameter: f64, viscosity: f64) -> f64 {
    density * velocity.abs() * diameter / viscosity
}

/// Darcy friction factor from the explicit Swamee-Jain approximation of
/// Colebrook-White:
///
/// ```text
/// f = 0.25 / [log10(ε/(3.7·D) + 5.74/Re^0.9)]^2
/// ```
///
/// There is no laminar branch. A stagnant segment (`re <= 0`) returns exactly
/// `0.0`; any positive `re`, however small, goes through the correlation.
pub fn friction_factor(re: f64, diameter: f64, roughness: f64) -> f64 {
    if re <= 0.0 {
        return 0.0;
    }
    let a = roughness / (3.7 * diameter);
    let b = 5.74 / re.powf(0.9);
    0.25 / (a + b).log10().powi(2)
}
