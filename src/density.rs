//! Density-based discretization for depth-varying density profiles.
//!
//! Pre-splits tesseroids along the radial axis wherever the density
//! function deviates too much from the straight line joining its values at
//! the radial boundaries. The pass runs once per tesseroid before the loop
//! over observation points, front-loading discretization where the density
//! is most nonlinear independently of any observation point.

use std::collections::VecDeque;

use crate::minimize::minimize_scalar_bounded;
use crate::types::Tesseroid;

/// Apply density-based discretization to a collection of tesseroids.
///
/// Each output tesseroid shares the horizontal bounds of its parent; only
/// the radial bounds are refined. `delta_ratio` is the deviation threshold:
/// lower values produce more (or equally many) radial slices.
pub fn density_based_discretization<F>(
    tesseroids: &[Tesseroid],
    density: &F,
    delta_ratio: f64,
) -> Vec<Tesseroid>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let mut discretized = Vec::with_capacity(tesseroids.len());
    for tesseroid in tesseroids {
        discretize_single(tesseroid, density, delta_ratio, &mut discretized);
    }
    discretized
}

/// Split a single tesseroid on the radii of maximum density deviation.
fn discretize_single<F>(
    tesseroid: &Tesseroid,
    density: &F,
    delta_ratio: f64,
    output: &mut Vec<Tesseroid>,
) where
    F: Fn(f64) -> f64 + ?Sized,
{
    let (density_min, density_max) = density_minmax(density, tesseroid.bottom, tesseroid.top);
    // A flat density profile needs no radial refinement
    if is_close(density_min, density_max) {
        output.push(*tesseroid);
        return;
    }
    let normalized = |radius: f64| (density(radius) - density_min) / (density_max - density_min);
    let size_original = tesseroid.top - tesseroid.bottom;

    let mut pending: VecDeque<(f64, f64)> = VecDeque::new();
    pending.push_back((tesseroid.bottom, tesseroid.top));
    while let Some((bottom, top)) = pending.pop_front() {
        let (radius_split, max_diff) = maximum_absolute_diff(&normalized, bottom, top);
        let size_ratio = (top - bottom) / size_original;
        if max_diff * size_ratio > delta_ratio {
            pending.push_back((radius_split, top));
            pending.push_back((bottom, radius_split));
        } else {
            output.push(Tesseroid {
                bottom,
                top,
                ..*tesseroid
            });
        }
    }
}

/// Global minimum and maximum of the density over `[bottom, top]`.
fn density_minmax<F>(density: &F, bottom: f64, top: f64) -> (f64, f64)
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let (_, minimum) = minimize_scalar_bounded(|radius| density(radius), bottom, top);
    let (_, negated_max) = minimize_scalar_bounded(|radius| -density(radius), bottom, top);
    (minimum, -negated_max)
}

/// Radius of maximum absolute difference between the normalized density and
/// the straight line joining its boundary values, and that difference.
fn maximum_absolute_diff<F>(normalized_density: &F, bottom: f64, top: f64) -> (f64, f64)
where
    F: Fn(f64) -> f64,
{
    let norm_bottom = normalized_density(bottom);
    let norm_top = normalized_density(top);
    let slope = (norm_top - norm_bottom) / (top - bottom);
    let straight_line = move |radius: f64| slope * (radius - bottom) + norm_bottom;
    let (radius_split, negated_diff) = minimize_scalar_bounded(
        |radius| -(normalized_density(radius) - straight_line(radius)).abs(),
        bottom,
        top,
    );
    (radius_split, -negated_diff)
}

/// Floating closeness with numpy's default tolerances.
fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-8 + 1e-5 * b.abs()
}
