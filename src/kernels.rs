//! Point-mass kernel functions in spherical coordinates.
//!
//! Closed-form kernels for the gravitational effect of a point mass on an
//! observation point, expressed from precomputed trigonometric values. The
//! kernels are pre-multiplication by the gravitational constant; `G` (and
//! the SI-to-mGal factor for the acceleration) is applied once at the top
//! level.

use crate::geometry::distance_spherical_core;
use crate::types::Observer;

/// Capability interface of the point-mass kernels.
///
/// There are exactly two implementations, selected by the field
/// configuration, which keeps the quadrature evaluator kernel-agnostic.
/// The trait is used through generics in the hot loops so the calls
/// monomorphize away.
pub trait PointMassKernel: Sync {
    /// Kernel value for a point mass at `(longitude_p rad, cosphi_p,
    /// sinphi_p, radius_p m)` observed from `observer`.
    fn evaluate(
        &self,
        observer: &Observer,
        longitude_p: f64,
        cosphi_p: f64,
        sinphi_p: f64,
        radius_p: f64,
    ) -> f64;
}

/// Gravitational potential kernel: `1 / d`.
#[derive(Debug, Clone, Copy)]
pub struct PotentialKernel;

impl PointMassKernel for PotentialKernel {
    #[inline]
    fn evaluate(
        &self,
        observer: &Observer,
        longitude_p: f64,
        cosphi_p: f64,
        sinphi_p: f64,
        radius_p: f64,
    ) -> f64 {
        let (distance, _, _) = distance_spherical_core(
            observer.longitude,
            observer.cosphi,
            observer.sinphi,
            observer.radius,
            longitude_p,
            cosphi_p,
            sinphi_p,
            radius_p,
        );
        1.0 / distance
    }
}

/// Downward acceleration kernel: `(r - r_p cospsi) / d³`.
///
/// Positive when the acceleration vector points toward the interior of the
/// spheroid, i.e. the opposite of the radial component.
#[derive(Debug, Clone, Copy)]
pub struct GzKernel;

impl PointMassKernel for GzKernel {
    #[inline]
    fn evaluate(
        &self,
        observer: &Observer,
        longitude_p: f64,
        cosphi_p: f64,
        sinphi_p: f64,
        radius_p: f64,
    ) -> f64 {
        let (distance, _, delta_z) = distance_spherical_core(
            observer.longitude,
            observer.cosphi,
            observer.sinphi,
            observer.radius,
            longitude_p,
            cosphi_p,
            sinphi_p,
            radius_p,
        );
        delta_z / distance.powi(3)
    }
}
