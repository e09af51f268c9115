//! Physical constants used by the forward models.

/// Gravitational constant `G` in SI units (m³ kg⁻¹ s⁻²), CODATA 2018.
pub const GRAVITATIONAL_CONST: f64 = 6.6743e-11;

/// Conversion factor from m/s² to milligal.
pub const SI_TO_MGAL: f64 = 1e5;
