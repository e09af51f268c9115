//! Forward modelling for point masses.
//!
//! Direct kernel summation of point-mass contributions, without any
//! discretization. Shares the field selector and kernel capability of the
//! tesseroid driver; also the natural surface for validating the kernels
//! against their closed-form values.

use ndarray::{Array1, ArrayView1};

use crate::constants::GRAVITATIONAL_CONST;
use crate::error::{GravityError, Result};
use crate::kernels::{GzKernel, PointMassKernel, PotentialKernel};
use crate::types::{GravityField, Observer};

/// Compute the gravitational field of point masses on observation points.
///
/// `point_masses` holds `(longitude°, latitude°, radius m)` triplets in
/// geocentric spherical coordinates and `masses` their masses in kg.
/// `field` is `"potential"` (J/kg) or `"g_z"` (mGal, downward positive).
pub fn point_mass_gravity(
    longitude: ArrayView1<f64>,
    latitude: ArrayView1<f64>,
    radius: ArrayView1<f64>,
    point_masses: &[(f64, f64, f64)],
    masses: &[f64],
    field: &str,
) -> Result<Array1<f64>> {
    let field: GravityField = field.parse()?;
    if longitude.len() != latitude.len() || longitude.len() != radius.len() {
        return Err(GravityError::CoordinateLengthMismatch {
            longitude: longitude.len(),
            latitude: latitude.len(),
            radius: radius.len(),
        });
    }
    if masses.len() != point_masses.len() {
        return Err(GravityError::MassLengthMismatch {
            masses: masses.len(),
            points: point_masses.len(),
        });
    }
    // Precompute the trigonometry of every point mass once
    let sources: Vec<(f64, f64, f64, f64)> = point_masses
        .iter()
        .map(|&(lon, lat, r)| {
            let lat = lat.to_radians();
            (lon.to_radians(), lat.cos(), lat.sin(), r)
        })
        .collect();

    let mut result = match field {
        GravityField::Potential => sum_sources(longitude, latitude, radius, &sources, masses, &PotentialKernel),
        GravityField::GZ => sum_sources(longitude, latitude, radius, &sources, masses, &GzKernel),
    };
    result *= GRAVITATIONAL_CONST * field.unit_conversion();
    Ok(result)
}

fn sum_sources<K: PointMassKernel>(
    longitude: ArrayView1<f64>,
    latitude: ArrayView1<f64>,
    radius: ArrayView1<f64>,
    sources: &[(f64, f64, f64, f64)],
    masses: &[f64],
    kernel: &K,
) -> Array1<f64> {
    Array1::from_iter((0..longitude.len()).map(|point| {
        let observer = Observer::new(longitude[point], latitude[point], radius[point]);
        sources
            .iter()
            .zip(masses)
            .map(|(&(lon_p, cosphi_p, sinphi_p, radius_p), &mass)| {
                mass * kernel.evaluate(&observer, lon_p, cosphi_p, sinphi_p, radius_p)
            })
            .sum()
    }))
}
