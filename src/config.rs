//! Configuration for the forward model.
//!
//! All the tunable constants of the adaptive discretization and quadrature
//! engine are explicit configuration passed into the computation, keeping
//! the core reentrant and testable with varied parameters.

use serde::{Deserialize, Serialize};

/// Tunable parameters of the discretization and quadrature engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwardConfig {
    /// Capacity of the per-point adaptive discretization stack.
    pub stack_size: usize,
    /// Capacity of the per-point small-tesseroid output buffer.
    pub max_discretizations: usize,
    /// Gauss-Legendre quadrature degree per axis: longitude, latitude, radius.
    ///
    /// Degrees 1 through 5 are supported: 0 is treated as 1 and anything
    /// above 5 falls back to the degree-5 rule (see
    /// [`crate::quadrature::legendre_rule`]).
    pub glq_degrees: [usize; 3],
    /// Distance-size ratio used for the gravitational potential.
    pub distance_size_ratio_potential: f64,
    /// Distance-size ratio used for the downward acceleration.
    ///
    /// The acceleration kernel falls off faster than the potential one, so
    /// it demands a finer discretization.
    pub distance_size_ratio_g_z: f64,
    /// Deviation threshold of the density-based discretization.
    pub delta_ratio: f64,
}

impl Default for ForwardConfig {
    fn default() -> Self {
        Self {
            stack_size: 100,
            max_discretizations: 100_000,
            glq_degrees: [2, 2, 2],
            distance_size_ratio_potential: 1.0,
            distance_size_ratio_g_z: 2.5,
            delta_ratio: 0.1,
        }
    }
}

/// Per-call options of the forward model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwardOptions {
    /// Run the loop over observation points on the Rayon thread pool.
    pub parallel: bool,
    /// Split tesseroids along the radial axis as well as longitude and
    /// latitude during adaptive discretization.
    pub radial_adaptive_discretization: bool,
    /// Skip the sanity checks on tesseroids and observation points.
    ///
    /// Intended only for trusted repeated calls; violations of the geometry
    /// contract then produce undefined numeric results instead of errors.
    pub disable_checks: bool,
    /// Engine configuration.
    pub config: ForwardConfig,
}

impl Default for ForwardOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            radial_adaptive_discretization: false,
            disable_checks: false,
            config: ForwardConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ForwardConfig::default();
        assert_eq!(config.stack_size, 100);
        assert_eq!(config.max_discretizations, 100_000);
        assert_eq!(config.glq_degrees, [2, 2, 2]);
        assert_eq!(config.distance_size_ratio_potential, 1.0);
        assert_eq!(config.distance_size_ratio_g_z, 2.5);
        assert_eq!(config.delta_ratio, 0.1);
    }

    #[test]
    fn test_default_options() {
        let options = ForwardOptions::default();
        assert!(options.parallel);
        assert!(!options.radial_adaptive_discretization);
        assert!(!options.disable_checks);
    }
}
