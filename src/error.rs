//! Error types for tesseroid forward modelling.
//!
//! This module provides structured error handling for the gravity forward
//! models, following the Microsoft Rust Guidelines pattern of using
//! `thiserror` for library error types with helper methods for error
//! categorization.

use thiserror::Error;

/// Errors that can occur while computing a gravity forward model.
#[derive(Debug, Error)]
pub enum GravityError {
    /// The requested gravitational field is not supported.
    #[error("gravitational field '{field}' not recognized (available: 'potential', 'g_z')")]
    UnknownField {
        /// The unrecognized field name
        field: String,
    },

    /// Coordinate arrays have different lengths.
    #[error(
        "coordinate length mismatch: longitude has {longitude}, latitude has {latitude}, \
         radius has {radius} elements"
    )]
    CoordinateLengthMismatch {
        /// Number of longitude values
        longitude: usize,
        /// Number of latitude values
        latitude: usize,
        /// Number of radius values
        radius: usize,
    },

    /// The density array length does not match the number of tesseroids.
    #[error("number of density values ({densities}) mismatch the number of tesseroids ({tesseroids})")]
    DensityLengthMismatch {
        /// Number of density values
        densities: usize,
        /// Number of tesseroids
        tesseroids: usize,
    },

    /// The mass array length does not match the number of point masses.
    #[error("number of mass values ({masses}) mismatch the number of point masses ({points})")]
    MassLengthMismatch {
        /// Number of mass values
        masses: usize,
        /// Number of point masses
        points: usize,
    },

    /// A latitudinal boundary lies outside the [-90, 90] degrees interval.
    #[error(
        "tesseroid {index}: latitudinal boundaries (south={south}, north={north}) must be \
         inside the [-90, 90] degrees interval"
    )]
    LatitudeOutOfRange {
        /// Index of the offending tesseroid
        index: usize,
        /// South boundary in degrees
        south: f64,
        /// North boundary in degrees
        north: f64,
    },

    /// The south boundary is greater than the north boundary.
    #[error("tesseroid {index}: the south boundary ({south}) can't be greater than the north one ({north})")]
    SouthAboveNorth {
        /// Index of the offending tesseroid
        index: usize,
        /// South boundary in degrees
        south: f64,
        /// North boundary in degrees
        north: f64,
    },

    /// A radial boundary is negative.
    #[error("tesseroid {index}: the bottom and top radii (bottom={bottom}, top={top}) should be positive or zero")]
    NegativeRadius {
        /// Index of the offending tesseroid
        index: usize,
        /// Bottom radius in meters
        bottom: f64,
        /// Top radius in meters
        top: f64,
    },

    /// The bottom radius is greater than the top radius.
    #[error("tesseroid {index}: the bottom radius ({bottom}) can't be greater than the top one ({top})")]
    BottomAboveTop {
        /// Index of the offending tesseroid
        index: usize,
        /// Bottom radius in meters
        bottom: f64,
        /// Top radius in meters
        top: f64,
    },

    /// A longitudinal boundary lies outside the [-180, 360] degrees interval.
    #[error(
        "tesseroid {index}: longitudinal boundaries (west={west}, east={east}) must be \
         inside the [-180, 360] degrees interval"
    )]
    LongitudeOutOfRange {
        /// Index of the offending tesseroid
        index: usize,
        /// West boundary in degrees
        west: f64,
        /// East boundary in degrees
        east: f64,
    },

    /// The west boundary is greater than the east one, even after applying
    /// longitude continuity.
    #[error("tesseroid {index}: the west boundary ({west}) can't be greater than the east one ({east})")]
    WestPastEast {
        /// Index of the offending tesseroid
        index: usize,
        /// West boundary in degrees
        west: f64,
        /// East boundary in degrees
        east: f64,
    },

    /// The longitudinal interval is wider than one turn around the globe.
    #[error(
        "tesseroid {index}: the difference between east ({east}) and west ({west}) boundaries \
         cannot be greater than one turn around the globe"
    )]
    LongitudeSpanTooWide {
        /// Index of the offending tesseroid
        index: usize,
        /// West boundary in degrees
        west: f64,
        /// East boundary in degrees
        east: f64,
    },

    /// An observation point lies strictly inside a tesseroid.
    #[error(
        "computation point {point} found inside tesseroid {tesseroid}; computation points \
         must be outside of tesseroids"
    )]
    PointInsideTesseroid {
        /// Index of the offending observation point
        point: usize,
        /// Index of the tesseroid containing it
        tesseroid: usize,
    },

    /// The adaptive discretization stack overflowed.
    #[error(
        "discretization stack overflow (capacity {capacity}); increase the stack size or \
         loosen the distance-size ratio"
    )]
    StackOverflow {
        /// Configured stack capacity
        capacity: usize,
    },

    /// The adaptive discretization produced too many small tesseroids.
    #[error(
        "exceeded maximum discretizations (capacity {capacity}); increase the maximum number \
         of discretizations or loosen the distance-size ratio"
    )]
    TooManyDiscretizations {
        /// Configured output-buffer capacity
        capacity: usize,
    },
}

/// A specialized `Result` type for gravity forward modelling.
pub type Result<T> = std::result::Result<T, GravityError>;

impl GravityError {
    /// Returns `true` if this is a configuration error detected before any
    /// computation starts.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GravityError::UnknownField { .. }
                | GravityError::CoordinateLengthMismatch { .. }
                | GravityError::DensityLengthMismatch { .. }
                | GravityError::MassLengthMismatch { .. }
        )
    }

    /// Returns `true` if this is a geometric validity error reported by the
    /// optional validation pass.
    pub fn is_geometry_error(&self) -> bool {
        matches!(
            self,
            GravityError::LatitudeOutOfRange { .. }
                | GravityError::SouthAboveNorth { .. }
                | GravityError::NegativeRadius { .. }
                | GravityError::BottomAboveTop { .. }
                | GravityError::LongitudeOutOfRange { .. }
                | GravityError::WestPastEast { .. }
                | GravityError::LongitudeSpanTooWide { .. }
                | GravityError::PointInsideTesseroid { .. }
        )
    }

    /// Returns `true` if this is a resource exhaustion error raised deep in
    /// the per-point computation.
    pub fn is_overflow_error(&self) -> bool {
        matches!(
            self,
            GravityError::StackOverflow { .. } | GravityError::TooManyDiscretizations { .. }
        )
    }
}
