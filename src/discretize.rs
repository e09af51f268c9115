//! Adaptive discretization of tesseroids.
//!
//! Recursively splits a tesseroid until every part is small enough relative
//! to its distance from the observation point, so that the point-mass
//! approximation of the Gauss-Legendre quadrature stays accurate. The
//! recursion is expressed as an explicit bounded stack plus a bounded leaf
//! buffer: worst-case memory is fixed and the whole state is private to one
//! observation point, which keeps the outer point loop trivially parallel.

use crate::config::ForwardConfig;
use crate::error::{GravityError, Result};
use crate::geometry::{dimensions, distance_to_center};
use crate::types::{Observer, Tesseroid};

/// Pre-allocated working memory for one observation point.
///
/// Holds the LIFO stack of pending tesseroids and the buffer of final small
/// tesseroids. Reset on every [`adaptive_discretization`] call; allocate
/// one per observation point (or thread) and reuse it across tesseroids.
#[derive(Debug)]
pub struct DiscretizationBuffers {
    stack: Vec<Tesseroid>,
    leaves: Vec<Tesseroid>,
    stack_capacity: usize,
    leaf_capacity: usize,
}

impl DiscretizationBuffers {
    /// Allocate buffers with the configured capacities.
    pub fn new(config: &ForwardConfig) -> Self {
        Self {
            stack: Vec::with_capacity(config.stack_size),
            leaves: Vec::with_capacity(config.max_discretizations.min(1024)),
            stack_capacity: config.stack_size,
            leaf_capacity: config.max_discretizations,
        }
    }

    /// Small tesseroids produced by the last discretization call.
    pub fn leaves(&self) -> &[Tesseroid] {
        &self.leaves
    }
}

/// Adaptively discretize `tesseroid` for the given observation point.
///
/// Splits along longitude and latitude (and radius when
/// `radial_discretization` is set) whenever `distance / size` falls below
/// `distance_size_ratio`. Greater ratios force more discretizations. The
/// resulting small tesseroids are collected in `buffers` and the count is
/// returned.
///
/// # Errors
///
/// [`GravityError::StackOverflow`] or
/// [`GravityError::TooManyDiscretizations`] when a capacity would be
/// exceeded; both are fatal and indicate the ratio/capacity configuration
/// is unworkable for this geometry.
pub fn adaptive_discretization(
    observer: &Observer,
    tesseroid: Tesseroid,
    distance_size_ratio: f64,
    radial_discretization: bool,
    buffers: &mut DiscretizationBuffers,
) -> Result<usize> {
    buffers.stack.clear();
    buffers.leaves.clear();
    buffers.stack.push(tesseroid);
    while let Some(tesseroid) = buffers.stack.pop() {
        let (l_lon, l_lat, l_rad) = dimensions(&tesseroid);
        let distance = distance_to_center(observer, &tesseroid);
        // A zero-size axis yields an infinite ratio and is never split
        let n_lon = if distance / l_lon < distance_size_ratio {
            2
        } else {
            1
        };
        let n_lat = if distance / l_lat < distance_size_ratio {
            2
        } else {
            1
        };
        let n_rad = if radial_discretization && distance / l_rad < distance_size_ratio {
            2
        } else {
            1
        };
        if n_lon * n_lat * n_rad > 1 {
            if buffers.stack.len() + n_lon * n_lat * n_rad > buffers.stack_capacity {
                return Err(GravityError::StackOverflow {
                    capacity: buffers.stack_capacity,
                });
            }
            split_tesseroid(&tesseroid, n_lon, n_lat, n_rad, &mut buffers.stack);
        } else {
            if buffers.leaves.len() + 1 > buffers.leaf_capacity {
                return Err(GravityError::TooManyDiscretizations {
                    capacity: buffers.leaf_capacity,
                });
            }
            buffers.leaves.push(tesseroid);
        }
    }
    Ok(buffers.leaves.len())
}

/// Partition a tesseroid into `n_lon * n_lat * n_rad` equal children and
/// push them onto the stack.
fn split_tesseroid(
    tesseroid: &Tesseroid,
    n_lon: usize,
    n_lat: usize,
    n_rad: usize,
    stack: &mut Vec<Tesseroid>,
) {
    let d_lon = (tesseroid.east - tesseroid.west) / n_lon as f64;
    let d_lat = (tesseroid.north - tesseroid.south) / n_lat as f64;
    let d_rad = (tesseroid.top - tesseroid.bottom) / n_rad as f64;
    for i in 0..n_lon {
        for j in 0..n_lat {
            for k in 0..n_rad {
                stack.push(Tesseroid {
                    west: tesseroid.west + d_lon * i as f64,
                    east: tesseroid.west + d_lon * (i + 1) as f64,
                    south: tesseroid.south + d_lat * j as f64,
                    north: tesseroid.south + d_lat * (j + 1) as f64,
                    bottom: tesseroid.bottom + d_rad * k as f64,
                    top: tesseroid.bottom + d_rad * (k + 1) as f64,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEAN_RADIUS: f64 = 6_371_000.0;

    fn tesseroid() -> Tesseroid {
        Tesseroid::new(-1.0, 1.0, -1.0, 1.0, MEAN_RADIUS - 10_000.0, MEAN_RADIUS)
    }

    fn buffers() -> DiscretizationBuffers {
        DiscretizationBuffers::new(&ForwardConfig::default())
    }

    #[test]
    fn test_distant_point_single_leaf() {
        // A point several tesseroid-sizes away requires no splitting
        let observer = Observer::new(0.0, 0.0, 10.0 * MEAN_RADIUS);
        let mut buffers = buffers();
        let n = adaptive_discretization(&observer, tesseroid(), 2.5, false, &mut buffers).unwrap();
        assert_eq!(n, 1);
        assert_eq!(buffers.leaves()[0], tesseroid());
    }

    #[test]
    fn test_near_point_splits() {
        let observer = Observer::new(0.0, 0.0, MEAN_RADIUS + 1.0);
        let mut buffers = buffers();
        let n = adaptive_discretization(&observer, tesseroid(), 2.5, false, &mut buffers).unwrap();
        assert!(n > 1);
    }

    #[test]
    fn test_leaves_partition_volume() {
        // Angular-radial extent is conserved by the subdivision
        let observer = Observer::new(0.0, 0.0, MEAN_RADIUS + 1.0);
        let mut buffers = buffers();
        adaptive_discretization(&observer, tesseroid(), 2.5, false, &mut buffers).unwrap();
        let extent: f64 = buffers
            .leaves()
            .iter()
            .map(|t| (t.east - t.west) * (t.north - t.south) * (t.top - t.bottom))
            .sum();
        let original = 2.0 * 2.0 * 10_000.0;
        assert!((extent - original).abs() / original < 1e-9);
    }

    #[test]
    fn test_radial_flag_enables_radial_splits() {
        let thick = Tesseroid::new(-1.0, 1.0, -1.0, 1.0, MEAN_RADIUS - 500_000.0, MEAN_RADIUS);
        // High enough that the horizontal spans need no splitting while the
        // 500 km thickness still trips the radial criterion
        let observer = Observer::new(0.0, 0.0, MEAN_RADIUS + 500_000.0);
        let mut buffers = buffers();
        let horizontal =
            adaptive_discretization(&observer, thick, 2.5, false, &mut buffers).unwrap();
        // Without the flag, no leaf has been split radially
        assert!(buffers
            .leaves()
            .iter()
            .all(|t| t.thickness() == thick.thickness()));
        let mut buffers = DiscretizationBuffers::new(&ForwardConfig::default());
        let three_dim = adaptive_discretization(&observer, thick, 2.5, true, &mut buffers).unwrap();
        assert!(three_dim > horizontal);
        assert!(buffers
            .leaves()
            .iter()
            .any(|t| t.thickness() < thick.thickness()));
    }

    #[test]
    fn test_higher_ratio_refines_more() {
        let observer = Observer::new(0.0, 0.0, MEAN_RADIUS + 1000.0);
        let mut previous = 0;
        for ratio in [0.5, 1.0, 2.5, 5.0] {
            let mut buffers = buffers();
            let n =
                adaptive_discretization(&observer, tesseroid(), ratio, false, &mut buffers)
                    .unwrap();
            assert!(n >= previous, "ratio {} produced {} leaves", ratio, n);
            previous = n;
        }
        assert!(previous > 1);
    }

    #[test]
    fn test_stack_overflow_is_fatal() {
        let config = ForwardConfig {
            stack_size: 4,
            ..ForwardConfig::default()
        };
        let observer = Observer::new(0.0, 0.0, MEAN_RADIUS + 1.0);
        let mut buffers = DiscretizationBuffers::new(&config);
        let result = adaptive_discretization(&observer, tesseroid(), 1000.0, false, &mut buffers);
        assert!(matches!(result, Err(GravityError::StackOverflow { capacity: 4 })));
    }

    #[test]
    fn test_output_buffer_overflow_is_fatal() {
        let config = ForwardConfig {
            max_discretizations: 2,
            ..ForwardConfig::default()
        };
        let observer = Observer::new(0.0, 0.0, MEAN_RADIUS + 1.0);
        let mut buffers = DiscretizationBuffers::new(&config);
        let result = adaptive_discretization(&observer, tesseroid(), 2.5, false, &mut buffers);
        assert!(matches!(
            result,
            Err(GravityError::TooManyDiscretizations { capacity: 2 })
        ));
    }

    #[test]
    fn test_full_globe_tesseroid_never_splits_longitude() {
        // A 360-degree tesseroid has zero longitudinal arc at its center
        // latitude; the engine must not try to split it along longitude
        let shell = Tesseroid::new(-180.0, 180.0, -90.0, 90.0, MEAN_RADIUS - 1000.0, MEAN_RADIUS);
        let observer = Observer::new(0.0, 0.0, MEAN_RADIUS + 1000.0);
        let mut buffers = buffers();
        let n = adaptive_discretization(&observer, shell, 1.0, false, &mut buffers).unwrap();
        assert!(n >= 1);
        for leaf in buffers.leaves() {
            assert_eq!(leaf.west, -180.0);
            assert_eq!(leaf.east, 180.0);
        }
    }
}
