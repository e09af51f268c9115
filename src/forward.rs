//! Top-level tesseroid forward model.
//!
//! Orchestrates validation, the optional variable-density
//! pre-discretization, the dispatch over observation points (parallel over
//! points with Rayon) and the final unit conversion.

use ndarray::{Array1, ArrayView1};
use rayon::prelude::*;

use crate::config::ForwardOptions;
use crate::constants::GRAVITATIONAL_CONST;
use crate::density::density_based_discretization;
use crate::discretize::{adaptive_discretization, DiscretizationBuffers};
use crate::error::{GravityError, Result};
use crate::evaluate::glq_evaluate;
use crate::kernels::{GzKernel, PointMassKernel, PotentialKernel};
use crate::quadrature::GlqTable;
use crate::types::{DensityModel, GravityField, Observer, Tesseroid};
use crate::validate::{check_points_outside, check_tesseroids};

/// Compute the gravitational field of tesseroids on observation points.
///
/// `longitude`, `latitude` and `radius` are equal-length arrays of
/// geocentric spherical coordinates in degrees, degrees and meters; callers
/// with gridded coordinates flatten them and reshape the result. The
/// density is either one constant per tesseroid or a function of radius; a
/// function triggers the density-based radial pre-discretization of every
/// tesseroid. `field` selects the computed quantity:
///
/// - `"potential"`: gravitational potential in J/kg
/// - `"g_z"`: downward acceleration in mGal, positive when the acceleration
///   vector points toward the interior of the spheroid
///
/// # Errors
///
/// All errors are fatal and void the whole call: an unrecognized field
/// name, mismatched array lengths, invalid tesseroid geometry, an
/// observation point strictly inside a tesseroid, or an adaptive
/// discretization overflow (see [`GravityError`]).
///
/// # Example
///
/// ```rust
/// use ndarray::array;
/// use tessgrav::{tesseroid_gravity, DensityModel, ForwardOptions, Tesseroid};
///
/// let mean_radius = 6_371_000.0;
/// let tesseroid = Tesseroid::new(-1.0, 1.0, -1.0, 1.0, mean_radius - 1000.0, mean_radius);
/// let density = array![2670.0];
/// let result = tesseroid_gravity(
///     array![0.0].view(),
///     array![0.0].view(),
///     array![mean_radius].view(),
///     &[tesseroid],
///     DensityModel::Uniform(density.view()),
///     "g_z",
///     &ForwardOptions::default(),
/// )
/// .unwrap();
/// assert!((result[0] - 112.545).abs() < 0.05);
/// ```
pub fn tesseroid_gravity(
    longitude: ArrayView1<f64>,
    latitude: ArrayView1<f64>,
    radius: ArrayView1<f64>,
    tesseroids: &[Tesseroid],
    density: DensityModel<'_>,
    field: &str,
    options: &ForwardOptions,
) -> Result<Array1<f64>> {
    let field: GravityField = field.parse()?;
    if longitude.len() != latitude.len() || longitude.len() != radius.len() {
        return Err(GravityError::CoordinateLengthMismatch {
            longitude: longitude.len(),
            latitude: latitude.len(),
            radius: radius.len(),
        });
    }
    // Sanity checks for tesseroids and computation points
    let tesseroids: Vec<Tesseroid> = if options.disable_checks {
        tesseroids.to_vec()
    } else {
        let checked = check_tesseroids(tesseroids)?;
        check_points_outside(longitude, latitude, radius, &checked)?;
        checked
    };

    let ratio = field.distance_size_ratio(&options.config);
    let table = GlqTable::new(options.config.glq_degrees);

    // Resolve the density variant once; both paths funnel into the same
    // generic computation with a per-tesseroid density closure
    let mut result = match density {
        DensityModel::Uniform(values) => {
            if !options.disable_checks && values.len() != tesseroids.len() {
                return Err(GravityError::DensityLengthMismatch {
                    densities: values.len(),
                    tesseroids: tesseroids.len(),
                });
            }
            let density_of = |index: usize, _radius: f64| values[index];
            match field {
                GravityField::Potential => compute(
                    longitude, latitude, radius, &tesseroids, &density_of, ratio, &table,
                    &PotentialKernel, options,
                ),
                GravityField::GZ => compute(
                    longitude, latitude, radius, &tesseroids, &density_of, ratio, &table,
                    &GzKernel, options,
                ),
            }
        }
        DensityModel::Radial(density_func) => {
            let tesseroids =
                density_based_discretization(&tesseroids, density_func, options.config.delta_ratio);
            let density_of = |_index: usize, radius: f64| density_func(radius);
            match field {
                GravityField::Potential => compute(
                    longitude, latitude, radius, &tesseroids, &density_of, ratio, &table,
                    &PotentialKernel, options,
                ),
                GravityField::GZ => compute(
                    longitude, latitude, radius, &tesseroids, &density_of, ratio, &table,
                    &GzKernel, options,
                ),
            }
        }
    }?;

    result *= GRAVITATIONAL_CONST * field.unit_conversion();
    Ok(result)
}

/// Field values (pre-G, pre-unit-conversion) on every observation point.
///
/// The loop over points is embarrassingly parallel: each point gets fresh
/// discretization buffers and a private accumulator, and only reads the
/// shared tesseroid array, density closure and quadrature table.
fn compute<K, D>(
    longitude: ArrayView1<f64>,
    latitude: ArrayView1<f64>,
    radius: ArrayView1<f64>,
    tesseroids: &[Tesseroid],
    density_of: &D,
    distance_size_ratio: f64,
    table: &GlqTable,
    kernel: &K,
    options: &ForwardOptions,
) -> Result<Array1<f64>>
where
    K: PointMassKernel,
    D: Fn(usize, f64) -> f64 + Sync,
{
    let field_at_point = |point: usize| -> Result<f64> {
        let observer = Observer::new(longitude[point], latitude[point], radius[point]);
        let mut buffers = DiscretizationBuffers::new(&options.config);
        let mut total = 0.0;
        for (index, tesseroid) in tesseroids.iter().enumerate() {
            adaptive_discretization(
                &observer,
                *tesseroid,
                distance_size_ratio,
                options.radial_adaptive_discretization,
                &mut buffers,
            )?;
            for leaf in buffers.leaves() {
                total += glq_evaluate(
                    &observer,
                    leaf,
                    &|radius_p| density_of(index, radius_p),
                    table,
                    kernel,
                );
            }
        }
        Ok(total)
    };

    let values: Result<Vec<f64>> = if options.parallel {
        (0..longitude.len())
            .into_par_iter()
            .map(field_at_point)
            .collect()
    } else {
        (0..longitude.len()).map(field_at_point).collect()
    };
    Ok(Array1::from_vec(values?))
}
