//! Gauss-Legendre quadrature evaluation of one small tesseroid.
//!
//! Converts a tesseroid into a 3-D grid of equivalent point masses located
//! on the scaled quadrature nodes and sums their kernel contributions on a
//! single observation point. The number of point masses equals the product
//! of the per-axis quadrature degrees (8 for the default degrees 2, 2, 2).

use crate::kernels::PointMassKernel;
use crate::quadrature::GlqTable;
use crate::types::{Observer, Tesseroid};

/// Effect of `tesseroid` on `observer` through Gauss-Legendre quadrature.
///
/// `density` maps the point-mass radius to kg/m³ (a constant-density
/// tesseroid simply ignores the radius). The returned sum is
/// pre-multiplication by the gravitational constant, which is applied once
/// at the top level together with the unit conversion.
///
/// The loop nest runs latitude, then radius, then longitude, so the
/// latitude trigonometry and the `kappa = r_p² cos(phi_p)` factor are
/// evaluated as few times as possible; the loop order does not change the
/// set of point masses generated or their individual contributions.
pub fn glq_evaluate<K, D>(
    observer: &Observer,
    tesseroid: &Tesseroid,
    density: &D,
    table: &GlqTable,
    kernel: &K,
) -> f64
where
    K: PointMassKernel,
    D: Fn(f64) -> f64 + ?Sized,
{
    let (west, east) = (tesseroid.west, tesseroid.east);
    let (south, north) = (tesseroid.south, tesseroid.north);
    let (bottom, top) = (tesseroid.bottom, tesseroid.top);
    let a_factor =
        1.0 / 8.0 * (east - west).to_radians() * (north - south).to_radians() * (top - bottom);

    let mut result = 0.0;
    for lat in &table.lat {
        let latitude_p = (0.5 * (north - south) * lat.node + 0.5 * (north + south)).to_radians();
        let cosphi_p = latitude_p.cos();
        let sinphi_p = latitude_p.sin();
        for rad in &table.rad {
            let radius_p = 0.5 * (top - bottom) * rad.node + 0.5 * (top + bottom);
            let kappa = radius_p * radius_p * cosphi_p;
            let rho = density(radius_p);
            for lon in &table.lon {
                let longitude_p =
                    (0.5 * (east - west) * lon.node + 0.5 * (east + west)).to_radians();
                let mass = a_factor * kappa * lon.weight * lat.weight * rad.weight * rho;
                result +=
                    mass * kernel.evaluate(observer, longitude_p, cosphi_p, sinphi_p, radius_p);
            }
        }
    }
    result
}
