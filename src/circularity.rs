use crate::curve::transverse_semi_axis;
use crate::EllipsoidParams;

/// Tolerance matched to interactive slider steps on the plane angle.
pub const DEFAULT_EPSILON: f64 = 0.05;

/// Whether the section at the current angle is a circle to within `epsilon`,
/// comparing the two semi-axes of the section ellipse. Exact equality is
/// unreachable under floating point when `theta` varies continuously, so
/// the tolerance is an explicit parameter.
pub fn is_circular(params: &EllipsoidParams, epsilon: f64) -> bool {
    (params.a() - transverse_semi_axis(params)).abs() < epsilon
}
