use crate::EllipsoidParams;

/// Whether any plane through the x-axis cuts the ellipsoid in a circle.
/// This holds if and only if `a` lies between `b` and `c` inclusive, the
/// condition for the quadratic form restricted to the rotating plane to be
/// made isotropic.
pub fn has_circular_section(params: &EllipsoidParams) -> bool {
    let (a, b, c) = (params.a(), params.b(), params.c());
    (a >= b && a <= c) || (a <= b && a >= c)
}
