//! Geometric utilities on the geocentric spherical coordinate system.

use crate::types::{Observer, Tesseroid};

/// Spherical law-of-cosines distance combined with the radial difference,
/// from precomputed trigonometric values.
///
/// Returns `(distance, cospsi, delta_z)` where `cospsi` is the cosine of
/// the angle between both points seen from the origin and `delta_z` is the
/// downward projection `radius - radius_q * cospsi`.
#[inline]
pub fn distance_spherical_core(
    longitude: f64,
    cosphi: f64,
    sinphi: f64,
    radius: f64,
    longitude_q: f64,
    cosphi_q: f64,
    sinphi_q: f64,
    radius_q: f64,
) -> (f64, f64, f64) {
    let coslambda = (longitude_q - longitude).cos();
    let cospsi = sinphi_q * sinphi + cosphi_q * cosphi * coslambda;
    let distance_sq = (radius - radius_q).powi(2) + 2.0 * radius * radius_q * (1.0 - cospsi);
    let delta_z = radius - radius_q * cospsi;
    (distance_sq.sqrt(), cospsi, delta_z)
}

/// Distance between two points `(longitude°, latitude°, radius m)` given in
/// geocentric spherical coordinates.
pub fn distance_spherical(point_p: (f64, f64, f64), point_q: (f64, f64, f64)) -> f64 {
    let (longitude, latitude, radius) = point_p;
    let (longitude_q, latitude_q, radius_q) = point_q;
    let latitude = latitude.to_radians();
    let latitude_q = latitude_q.to_radians();
    let (distance, _, _) = distance_spherical_core(
        longitude.to_radians(),
        latitude.cos(),
        latitude.sin(),
        radius,
        longitude_q.to_radians(),
        latitude_q.cos(),
        latitude_q.sin(),
        radius_q,
    );
    distance
}

/// Distance between an observation point and the center of a tesseroid.
pub fn distance_to_center(observer: &Observer, tesseroid: &Tesseroid) -> f64 {
    let (longitude_c, latitude_c, radius_c) = tesseroid.center();
    let latitude_c = latitude_c.to_radians();
    let (distance, _, _) = distance_spherical_core(
        observer.longitude,
        observer.cosphi,
        observer.sinphi,
        observer.radius,
        longitude_c.to_radians(),
        latitude_c.cos(),
        latitude_c.sin(),
        radius_c,
    );
    distance
}

/// Approximate physical extent of a tesseroid along each axis, in meters.
///
/// Returns `(l_lon, l_lat, l_rad)`: great-circle arc lengths at the top
/// radius for the angular axes and the radial thickness for the third.
/// These are the sizes the distance-size ratio criterion is tested against.
pub fn dimensions(tesseroid: &Tesseroid) -> (f64, f64, f64) {
    let west = tesseroid.west.to_radians();
    let east = tesseroid.east.to_radians();
    let south = tesseroid.south.to_radians();
    let north = tesseroid.north.to_radians();
    let latitude_center = 0.5 * (north + south);
    // Clamp guards rounding past +/-1 before acos
    let l_lat = tesseroid.top
        * (north.sin() * south.sin() + north.cos() * south.cos())
            .clamp(-1.0, 1.0)
            .acos();
    let l_lon = tesseroid.top
        * (latitude_center.sin().powi(2) + latitude_center.cos().powi(2) * (east - west).cos())
            .clamp(-1.0, 1.0)
            .acos();
    let l_rad = tesseroid.top - tesseroid.bottom;
    (l_lon, l_lat, l_rad)
}

/// Remap a longitude to the [-180, 180) degrees interval.
#[inline]
fn wrap_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}

/// Move the longitudinal boundaries of tesseroids crossing the 180 degree
/// meridian (`west > east`) to the [-180, 180) interval.
///
/// Non-destructive: returns a new collection; tesseroids that do not need
/// the remap pass through unchanged. Applying the function twice yields the
/// same result as applying it once.
pub fn longitude_continuity(tesseroids: &[Tesseroid]) -> Vec<Tesseroid> {
    tesseroids
        .iter()
        .map(|tesseroid| {
            if tesseroid.west > tesseroid.east {
                let mut remapped = *tesseroid;
                remapped.west = wrap_longitude(tesseroid.west);
                remapped.east = wrap_longitude(tesseroid.east);
                remapped
            } else {
                *tesseroid
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEAN_RADIUS: f64 = 6_371_000.0;

    #[test]
    fn test_distance_along_radial_direction() {
        // Same longitude and latitude: distance is the radial difference
        for height in [1.0, 1e3, 1e6] {
            let distance = distance_spherical(
                (30.0, -45.0, MEAN_RADIUS + height),
                (30.0, -45.0, MEAN_RADIUS),
            );
            assert!((distance - height).abs() / height < 1e-9);
        }
    }

    #[test]
    fn test_distance_matches_cartesian() {
        // Compare against an explicit spherical-to-Cartesian conversion
        let to_cartesian = |(lon, lat, r): (f64, f64, f64)| {
            let (lon, lat) = (lon.to_radians(), lat.to_radians());
            [
                r * lat.cos() * lon.cos(),
                r * lat.cos() * lon.sin(),
                r * lat.sin(),
            ]
        };
        let p = (12.0, 34.0, 6_371_000.0);
        let q = (-56.0, -7.0, 6_350_000.0);
        let (pc, qc) = (to_cartesian(p), to_cartesian(q));
        let expected = ((pc[0] - qc[0]).powi(2) + (pc[1] - qc[1]).powi(2) + (pc[2] - qc[2]).powi(2))
            .sqrt();
        let distance = distance_spherical(p, q);
        assert!((distance - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_dimensions_equatorial_tesseroid() {
        let tess = Tesseroid::new(-0.5, 0.5, -0.5, 0.5, MEAN_RADIUS - 1000.0, MEAN_RADIUS);
        let (l_lon, l_lat, l_rad) = dimensions(&tess);
        // One degree of arc at the top radius
        let arc = MEAN_RADIUS * 1.0_f64.to_radians();
        assert!((l_lat - arc).abs() / arc < 1e-6);
        assert!((l_lon - arc).abs() / arc < 1e-6);
        assert_eq!(l_rad, 1000.0);
    }

    #[test]
    fn test_dimensions_shrink_toward_pole() {
        let equator = Tesseroid::new(0.0, 1.0, -0.5, 0.5, 0.0, 1000.0);
        let polar = Tesseroid::new(0.0, 1.0, 79.5, 80.5, 0.0, 1000.0);
        let (l_lon_eq, _, _) = dimensions(&equator);
        let (l_lon_polar, _, _) = dimensions(&polar);
        assert!(l_lon_polar < l_lon_eq);
    }

    #[test]
    fn test_distance_to_center() {
        let tess = Tesseroid::new(-1.0, 1.0, -1.0, 1.0, 1000.0, 3000.0);
        let observer = Observer::new(0.0, 0.0, 5000.0);
        let distance = distance_to_center(&observer, &tess);
        assert!((distance - 3000.0).abs() < 1e-9);
    }

    #[test]
    fn test_longitude_continuity_remaps_meridian_crossing() {
        let tesseroids = [Tesseroid::new(350.0, 10.0, -10.0, 10.0, 1.0, 2.0)];
        let fixed = longitude_continuity(&tesseroids);
        assert_eq!(fixed[0].west, -10.0);
        assert_eq!(fixed[0].east, 10.0);
        assert!(fixed[0].east > fixed[0].west);
    }

    #[test]
    fn test_longitude_continuity_passes_through() {
        let tesseroids = [Tesseroid::new(-70.0, -60.0, -10.0, 10.0, 1.0, 2.0)];
        let fixed = longitude_continuity(&tesseroids);
        assert_eq!(fixed[0], tesseroids[0]);
    }

    #[test]
    fn test_longitude_continuity_idempotent() {
        let tesseroids = [
            Tesseroid::new(350.0, 10.0, -10.0, 10.0, 1.0, 2.0),
            Tesseroid::new(200.0, 150.0, -10.0, 10.0, 1.0, 2.0),
            Tesseroid::new(0.0, 30.0, -10.0, 10.0, 1.0, 2.0),
        ];
        let once = longitude_continuity(&tesseroids);
        let twice = longitude_continuity(&once);
        assert_eq!(once, twice);
    }
}
