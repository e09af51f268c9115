//! Core type definitions for the tesseroid forward model.

use std::str::FromStr;

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::config::ForwardConfig;
use crate::constants::SI_TO_MGAL;
use crate::error::GravityError;

/// A tesseroid: a spherical prism bounded by longitude, latitude and radius
/// intervals in a geocentric spherical coordinate system.
///
/// Longitudinal and latitudinal boundaries are in degrees, radial boundaries
/// in meters. Valid tesseroids satisfy `south <= north` within [-90, 90],
/// `0 <= bottom <= top`, and `east - west` in (0, 360] after longitude
/// continuity is applied (see [`crate::geometry::longitude_continuity`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tesseroid {
    /// West boundary in degrees
    pub west: f64,
    /// East boundary in degrees
    pub east: f64,
    /// South boundary in degrees
    pub south: f64,
    /// North boundary in degrees
    pub north: f64,
    /// Bottom radius in meters
    pub bottom: f64,
    /// Top radius in meters
    pub top: f64,
}

impl Tesseroid {
    /// Create a tesseroid from its six boundaries.
    pub fn new(west: f64, east: f64, south: f64, north: f64, bottom: f64, top: f64) -> Self {
        Self {
            west,
            east,
            south,
            north,
            bottom,
            top,
        }
    }

    /// Create a tesseroid from a `(w, e, s, n, bottom, top)` array.
    pub fn from_bounds(bounds: [f64; 6]) -> Self {
        Self::new(
            bounds[0], bounds[1], bounds[2], bounds[3], bounds[4], bounds[5],
        )
    }

    /// Angular and radial midpoint `(longitude, latitude, radius)` in
    /// degrees, degrees, meters.
    pub fn center(&self) -> (f64, f64, f64) {
        (
            0.5 * (self.west + self.east),
            0.5 * (self.south + self.north),
            0.5 * (self.bottom + self.top),
        )
    }

    /// Radial thickness in meters.
    pub fn thickness(&self) -> f64 {
        self.top - self.bottom
    }
}

/// One observation point with its trigonometric values precomputed.
///
/// Built once per point and reused across every tesseroid and point mass
/// evaluated against it.
#[derive(Debug, Clone, Copy)]
pub struct Observer {
    /// Longitude in radians
    pub longitude: f64,
    /// Cosine of the latitude
    pub cosphi: f64,
    /// Sine of the latitude
    pub sinphi: f64,
    /// Radius in meters
    pub radius: f64,
}

impl Observer {
    /// Create an observer from geocentric spherical coordinates in degrees,
    /// degrees and meters.
    pub fn new(longitude_deg: f64, latitude_deg: f64, radius: f64) -> Self {
        let latitude = latitude_deg.to_radians();
        Self {
            longitude: longitude_deg.to_radians(),
            cosphi: latitude.cos(),
            sinphi: latitude.sin(),
            radius,
        }
    }
}

/// Gravitational field selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GravityField {
    /// Gravitational potential in J/kg.
    Potential,
    /// Downward acceleration in mGal, positive when the acceleration vector
    /// points toward the interior of the spheroid.
    GZ,
}

impl GravityField {
    /// Distance-size ratio configured for this field.
    pub fn distance_size_ratio(&self, config: &ForwardConfig) -> f64 {
        match self {
            GravityField::Potential => config.distance_size_ratio_potential,
            GravityField::GZ => config.distance_size_ratio_g_z,
        }
    }

    /// Conversion factor applied to the final SI result.
    pub fn unit_conversion(&self) -> f64 {
        match self {
            GravityField::Potential => 1.0,
            GravityField::GZ => SI_TO_MGAL,
        }
    }
}

impl FromStr for GravityField {
    type Err = GravityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "potential" => Ok(GravityField::Potential),
            "g_z" => Ok(GravityField::GZ),
            other => Err(GravityError::UnknownField {
                field: other.to_string(),
            }),
        }
    }
}

/// Density of the tesseroid model, resolved once at the top level.
pub enum DensityModel<'a> {
    /// One constant density per tesseroid, in kg/m³.
    Uniform(ArrayView1<'a, f64>),
    /// Depth-varying density as a function of radius (meters) returning
    /// kg/m³; triggers the density-based pre-discretization pass.
    Radial(&'a (dyn Fn(f64) -> f64 + Sync)),
}

impl std::fmt::Debug for DensityModel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DensityModel::Uniform(values) => f.debug_tuple("Uniform").field(values).finish(),
            DensityModel::Radial(_) => f.debug_tuple("Radial").field(&"<fn(radius)>").finish(),
        }
    }
}
