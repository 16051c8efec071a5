pub mod circularity;
pub mod curve;
pub mod feasibility;
pub mod target_angle;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod prelude {
    pub use crate::circularity::*;
    pub use crate::curve::*;
    pub use crate::feasibility::*;
    pub use crate::target_angle::*;
    pub use crate::{EllipsoidErrors, EllipsoidParams};
}

#[derive(Error, Debug, PartialEq)]
pub enum EllipsoidErrors {
    #[error("semi-axis lengths must be positive")]
    NonPositiveSemiAxis,
}

/// A triaxial ellipsoid `x²/a² + y²/b² + z²/c² = 1` together with the
/// rotation angle of a section plane containing the x-axis.
/// `theta` is the right hand rotation angle about +x where the x-y plane is 0,
/// in radians; degree conversion happens only at this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipsoidParams {
    a: f64,
    b: f64,
    c: f64,
    theta: f64,
}

impl EllipsoidParams {
    /// Creates a new `EllipsoidParams` instance with semi-axes `a`, `b`, `c`
    /// and plane angle `theta` in radians.
    ///
    /// # Errors
    ///
    /// Returns `EllipsoidErrors::NonPositiveSemiAxis` if any semi-axis is
    /// not strictly positive.
    pub fn new(a: f64, b: f64, c: f64, theta: f64) -> Result<Self, EllipsoidErrors> {
        if a <= 0.0 || b <= 0.0 || c <= 0.0 {
            return Err(EllipsoidErrors::NonPositiveSemiAxis);
        }
        Ok(Self { a, b, c, theta })
    }

    /// Creates a new `EllipsoidParams` instance with the plane angle given
    /// in degrees.
    pub fn from_degrees(a: f64, b: f64, c: f64, theta: f64) -> Result<Self, EllipsoidErrors> {
        Self::new(a, b, c, theta.to_radians())
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    /// Plane angle in radians.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Plane angle in degrees.
    pub fn theta_degrees(&self) -> f64 {
        self.theta.to_degrees()
    }

    /// Returns a fresh snapshot with the plane angle replaced, in radians.
    /// Infallible since the angle cannot violate the semi-axis invariant.
    pub fn with_theta(self, theta: f64) -> Self {
        Self { theta, ..self }
    }

    /// Returns a fresh snapshot with the plane angle replaced, in degrees.
    pub fn with_theta_degrees(self, theta: f64) -> Self {
        self.with_theta(theta.to_radians())
    }
}
