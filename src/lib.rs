//! # tessgrav: Tesseroid Gravity Forward Modelling
//!
//! Computes the gravitational field (potential or downward acceleration)
//! generated by tesseroids, spherical-prism volume elements bounded by
//! longitude, latitude and radius intervals, on observation points defined
//! in a geocentric spherical coordinate system.
//!
//! ## Features
//!
//! - Adaptive discretization with bounded working memory (explicit stack,
//!   no recursion)
//! - Gauss-Legendre quadrature conversion of small tesseroids into
//!   equivalent point masses
//! - Density-based radial pre-discretization for depth-varying density
//!   profiles
//! - Parallel execution over observation points with Rayon
//!
//! ## Example
//!
//! ```rust
//! use ndarray::array;
//! use tessgrav::{tesseroid_gravity, DensityModel, ForwardOptions, Tesseroid};
//!
//! // 1 km thick tesseroid with its top on the mean Earth radius
//! let mean_radius = 6_371_000.0;
//! let tesseroid = Tesseroid::new(-1.0, 1.0, -1.0, 1.0, mean_radius - 1000.0, mean_radius);
//! let density = array![2670.0];
//!
//! // Observation point on the top surface of the tesseroid
//! let (longitude, latitude, radius) = (array![0.0], array![0.0], array![mean_radius]);
//!
//! let g_z = tesseroid_gravity(
//!     longitude.view(),
//!     latitude.view(),
//!     radius.view(),
//!     &[tesseroid],
//!     DensityModel::Uniform(density.view()),
//!     "g_z",
//!     &ForwardOptions::default(),
//! )
//! .expect("valid model");
//! assert!((g_z[0] - 112.545).abs() < 0.05);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::too_many_arguments)] // Scientific code often has many parameters

pub mod config;
pub mod constants;
pub mod density;
pub mod discretize;
pub mod error;
pub mod evaluate;
pub mod forward;
pub mod geometry;
pub mod kernels;
pub mod minimize;
pub mod point_mass;
pub mod quadrature;
pub mod types;
pub mod validate;

pub use config::{ForwardConfig, ForwardOptions};
pub use constants::GRAVITATIONAL_CONST;
pub use error::{GravityError, Result};
pub use forward::tesseroid_gravity;
pub use point_mass::point_mass_gravity;
pub use types::{DensityModel, GravityField, Observer, Tesseroid};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
