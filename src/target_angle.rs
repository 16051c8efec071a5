use crate::EllipsoidParams;
use serde::{Deserialize, Serialize};

/// Outcome of solving for the plane angle that makes the section circular.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TargetAngle {
    /// The non-negative principal solution in radians. By symmetry `-θ`
    /// and `π ± θ` solve the same equation; consumers own that solution set.
    Principal(f64),
    /// `b == c`: the ellipsoid is a surface of revolution about the x-axis,
    /// so no single angle discriminates.
    SurfaceOfRevolution,
    /// `sin²θ` falls outside `[0, 1]`; no real plane angle works.
    NoRealSolution,
}

impl TargetAngle {
    /// The solved angle in radians, if one exists.
    pub fn angle(&self) -> Option<f64> {
        match self {
            TargetAngle::Principal(theta) => Some(*theta),
            TargetAngle::SurfaceOfRevolution | TargetAngle::NoRealSolution => None,
        }
    }

    /// The solved angle in degrees, if one exists.
    pub fn angle_degrees(&self) -> Option<f64> {
        self.angle().map(f64::to_degrees)
    }
}

/// Solves `1/a² = cos²θ/b² + sin²θ/c²` for the circular-section angle.
///
/// Writing `S = sin²θ` gives `S = (1/a² − 1/b²) / (1/c² − 1/b²)`. The
/// `b == c` case zeroes that denominator and is handled before the division.
pub fn solve_target_angle(params: &EllipsoidParams) -> TargetAngle {
    let (a, b, c) = (params.a(), params.b(), params.c());
    if b == c {
        return TargetAngle::SurfaceOfRevolution;
    }

    let sin_sq = (1.0 / (a * a) - 1.0 / (b * b)) / (1.0 / (c * c) - 1.0 / (b * b));
    if !(0.0..=1.0).contains(&sin_sq) {
        return TargetAngle::NoRealSolution;
    }

    TargetAngle::Principal(sin_sq.sqrt().asin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-12;

    fn params(a: f64, b: f64, c: f64) -> EllipsoidParams {
        EllipsoidParams::new(a, b, c, 0.0).unwrap()
    }

    #[test]
    fn test_target_angle_closed_form() {
        // a=4, b=6, c=3: sin²θ = (1/16 − 1/36) / (1/9 − 1/36) = 5/12
        let target = solve_target_angle(&params(4.0, 6.0, 3.0));
        let theta = target.angle().unwrap();
        assert_abs_diff_eq!(theta, (5.0_f64 / 12.0).sqrt().asin(), epsilon = TOL);
        assert_abs_diff_eq!(theta.sin().powi(2), 5.0 / 12.0, epsilon = TOL);
        assert!(theta >= 0.0, "principal value must be non-negative");
    }

    #[test]
    fn test_no_real_solution_when_infeasible() {
        // a=5 not between b=2 and c=3
        assert_eq!(
            solve_target_angle(&params(5.0, 2.0, 3.0)),
            TargetAngle::NoRealSolution
        );
        assert_eq!(solve_target_angle(&params(5.0, 2.0, 3.0)).angle(), None);
    }

    #[test]
    fn test_surface_of_revolution_for_any_a() {
        for a in [0.5, 4.0, 5.0, 9.0] {
            assert_eq!(
                solve_target_angle(&params(a, 5.0, 5.0)),
                TargetAngle::SurfaceOfRevolution
            );
        }
    }

    #[test]
    fn test_target_angle_degrees_accessor() {
        let target = solve_target_angle(&params(4.0, 6.0, 3.0));
        let expected = (5.0_f64 / 12.0).sqrt().asin().to_degrees();
        assert_abs_diff_eq!(target.angle_degrees().unwrap(), expected, epsilon = TOL);
        assert_eq!(TargetAngle::SurfaceOfRevolution.angle_degrees(), None);
    }
}
