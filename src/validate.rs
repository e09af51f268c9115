//! Sanity checks on tesseroids and observation points.
//!
//! These implement the geometric validity contract of the forward model.
//! The checks are optional (see
//! [`crate::config::ForwardOptions::disable_checks`]); skipping them on
//! invalid input produces undefined numeric results instead of errors.

use ndarray::ArrayView1;

use crate::error::{GravityError, Result};
use crate::geometry::longitude_continuity;
use crate::types::Tesseroid;

/// Check that tesseroid boundaries are well defined.
///
/// A valid tesseroid has latitudinal boundaries within [-90, 90] with
/// `south <= north`, radial boundaries positive or zero with
/// `bottom <= top`, and longitudinal boundaries within [-180, 360] spanning
/// at most one turn around the globe. Tesseroids crossing the 180 degree
/// meridian (`west > east`, e.g. `(350, 10, ...)`) are remapped by
/// [`longitude_continuity`]; any valid tesseroid has `east >= west` after
/// the remap.
///
/// Returns the (possibly remapped) tesseroids.
pub fn check_tesseroids(tesseroids: &[Tesseroid]) -> Result<Vec<Tesseroid>> {
    for (index, tess) in tesseroids.iter().enumerate() {
        let out_of_latitude = |v: f64| !(-90.0..=90.0).contains(&v);
        if out_of_latitude(tess.south) || out_of_latitude(tess.north) {
            return Err(GravityError::LatitudeOutOfRange {
                index,
                south: tess.south,
                north: tess.north,
            });
        }
        if tess.south > tess.north {
            return Err(GravityError::SouthAboveNorth {
                index,
                south: tess.south,
                north: tess.north,
            });
        }
        if tess.bottom < 0.0 || tess.top < 0.0 {
            return Err(GravityError::NegativeRadius {
                index,
                bottom: tess.bottom,
                top: tess.top,
            });
        }
        if tess.bottom > tess.top {
            return Err(GravityError::BottomAboveTop {
                index,
                bottom: tess.bottom,
                top: tess.top,
            });
        }
        let out_of_longitude = |v: f64| !(-180.0..=360.0).contains(&v);
        if out_of_longitude(tess.west) || out_of_longitude(tess.east) {
            return Err(GravityError::LongitudeOutOfRange {
                index,
                west: tess.west,
                east: tess.east,
            });
        }
    }
    let tesseroids = longitude_continuity(tesseroids);
    for (index, tess) in tesseroids.iter().enumerate() {
        if tess.west > tess.east {
            return Err(GravityError::WestPastEast {
                index,
                west: tess.west,
                east: tess.east,
            });
        }
        if tess.east - tess.west > 360.0 {
            return Err(GravityError::LongitudeSpanTooWide {
                index,
                west: tess.west,
                east: tess.east,
            });
        }
    }
    Ok(tesseroids)
}

/// Check that no observation point lies strictly inside any tesseroid.
///
/// The longitudinal test compares the tesseroid boundaries against the
/// point longitude moved to both [0, 360) and [-180, 180), so the check is
/// insensitive to the longitude convention of the caller. Run after
/// [`check_tesseroids`], on tesseroids with longitude continuity applied.
pub fn check_points_outside(
    longitude: ArrayView1<f64>,
    latitude: ArrayView1<f64>,
    radius: ArrayView1<f64>,
    tesseroids: &[Tesseroid],
) -> Result<()> {
    for point in 0..longitude.len() {
        let longitude_360 = longitude[point].rem_euclid(360.0);
        let longitude_180 = (longitude[point] + 180.0).rem_euclid(360.0) - 180.0;
        for (index, tess) in tesseroids.iter().enumerate() {
            let inside_longitude = (tess.west < longitude_360 && longitude_360 < tess.east)
                || (tess.west < longitude_180 && longitude_180 < tess.east);
            let inside_latitude = tess.south < latitude[point] && latitude[point] < tess.north;
            let inside_radius = tess.bottom < radius[point] && radius[point] < tess.top;
            if inside_longitude && inside_latitude && inside_radius {
                return Err(GravityError::PointInsideTesseroid {
                    point,
                    tesseroid: index,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn valid() -> Tesseroid {
        Tesseroid::new(-10.0, 10.0, -10.0, 10.0, 100.0, 200.0)
    }

    #[test]
    fn test_valid_tesseroid_passes() {
        let result = check_tesseroids(&[valid()]).unwrap();
        assert_eq!(result, vec![valid()]);
    }

    #[test]
    fn test_rejects_latitude_out_of_range() {
        let tess = Tesseroid { south: 91.0, north: 91.0, ..valid() };
        assert!(matches!(
            check_tesseroids(&[tess]),
            Err(GravityError::LatitudeOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_south_above_north() {
        let tess = Tesseroid { south: 20.0, north: -20.0, ..valid() };
        assert!(matches!(
            check_tesseroids(&[tess]),
            Err(GravityError::SouthAboveNorth { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_radius() {
        let tess = Tesseroid { bottom: -1.0, ..valid() };
        assert!(matches!(
            check_tesseroids(&[tess]),
            Err(GravityError::NegativeRadius { .. })
        ));
    }

    #[test]
    fn test_rejects_bottom_above_top() {
        let tess = Tesseroid { bottom: 10.0, top: 5.0, ..valid() };
        assert!(matches!(
            check_tesseroids(&[tess]),
            Err(GravityError::BottomAboveTop { .. })
        ));
    }

    #[test]
    fn test_rejects_longitude_out_of_range() {
        let tess = Tesseroid { west: 0.0, east: 400.0, ..valid() };
        assert!(matches!(
            check_tesseroids(&[tess]),
            Err(GravityError::LongitudeOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn test_meridian_crossing_passes_after_continuity() {
        let tess = Tesseroid { west: 350.0, east: 10.0, ..valid() };
        let result = check_tesseroids(&[tess]).unwrap();
        assert!(result[0].east > result[0].west);
        assert_eq!(result[0].west, -10.0);
        assert_eq!(result[0].east, 10.0);
    }

    #[test]
    fn test_reports_second_tesseroid() {
        let bad = Tesseroid { south: -95.0, ..valid() };
        let err = check_tesseroids(&[valid(), bad]).unwrap_err();
        assert!(matches!(err, GravityError::LatitudeOutOfRange { index: 1, .. }));
    }

    #[test]
    fn test_point_outside_passes() {
        let result = check_points_outside(
            array![0.0].view(),
            array![0.0].view(),
            array![300.0].view(),
            &[valid()],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_point_on_boundary_passes() {
        // Boundary contact is not strictly inside
        let result = check_points_outside(
            array![0.0].view(),
            array![0.0].view(),
            array![200.0].view(),
            &[valid()],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_point_inside_detected() {
        let result = check_points_outside(
            array![0.0].view(),
            array![0.0].view(),
            array![150.0].view(),
            &[valid()],
        );
        assert!(matches!(
            result,
            Err(GravityError::PointInsideTesseroid { point: 0, tesseroid: 0 })
        ));
    }

    #[test]
    fn test_point_inside_across_meridian_wrap() {
        // Tesseroid given as (350, 10) is remapped to (-10, 10); a point at
        // longitude 355 is inside it once wrapped to -5
        let tess = Tesseroid { west: 350.0, east: 10.0, ..valid() };
        let checked = check_tesseroids(&[tess]).unwrap();
        let result = check_points_outside(
            array![355.0].view(),
            array![0.0].view(),
            array![150.0].view(),
            &checked,
        );
        assert!(matches!(result, Err(GravityError::PointInsideTesseroid { .. })));
    }
}
