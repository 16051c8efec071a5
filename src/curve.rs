use crate::EllipsoidParams;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Sampling resolution used when the caller does not pick one.
pub const DEFAULT_SEGMENTS: usize = 128;

/// The ellipse traced by intersecting the ellipsoid with the section plane,
/// sampled as a closed polyline: `points` holds `segments + 1` points with
/// the first repeated exactly at the end, adjacent indices adjacent on the
/// curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntersectionCurve {
    pub points: Vec<Vector3<f64>>,
    /// Section-ellipse semi-axis along the x-axis. Always `a`.
    pub semi_axis_x: f64,
    /// Section-ellipse semi-axis transverse to the x-axis, in the plane.
    pub semi_axis_transverse: f64,
}

/// In-plane semi-axis of the section ellipse transverse to the x-axis,
/// `1/√(cos²θ/b² + sin²θ/c²)`. Well defined for all real `theta` since the
/// radicand is strictly positive whenever `b, c > 0`.
pub fn transverse_semi_axis(params: &EllipsoidParams) -> f64 {
    let (b, c, theta) = (params.b(), params.c(), params.theta());
    let inv_sq = theta.cos().powi(2) / (b * b) + theta.sin().powi(2) / (c * c);
    1.0 / inv_sq.sqrt()
}

/// Samples the intersection ellipse at `segments` equal parameter steps.
///
/// The plane through the x-axis at angle `theta` carries local coordinates
/// `(u, v)` with `x = u`, `y = v cos θ`, `z = v sin θ`; substituting into
/// the ellipsoid equation gives `u²/a² + v²(cos²θ/b² + sin²θ/c²) = 1`, an
/// ellipse with semi-axes `a` and [`transverse_semi_axis`]. Each sample is
/// mapped back to the global frame. `segments` is clamped to at least 1.
pub fn generate_curve(params: &EllipsoidParams, segments: usize) -> IntersectionCurve {
    let segments = segments.max(1);
    let a_int = params.a();
    let b_int = transverse_semi_axis(params);
    let (sin_t, cos_t) = params.theta().sin_cos();

    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..segments {
        let phi = 2.0 * PI * (i as f64) / (segments as f64);
        let u = a_int * phi.cos();
        let v = b_int * phi.sin();
        points.push(Vector3::new(u, v * cos_t, v * sin_t));
    }
    // repeat the first sample so the loop closes exactly
    points.push(points[0]);

    IntersectionCurve {
        points,
        semi_axis_x: a_int,
        semi_axis_transverse: b_int,
    }
}
