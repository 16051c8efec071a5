use ellipsoid_sections::prelude::*;

fn main() {
    let params = EllipsoidParams::new(4.0, 6.0, 3.0, 0.0).unwrap();
    dbg!(has_circular_section(&params));

    let target = solve_target_angle(&params);
    dbg!(target);
    dbg!(target.angle_degrees());

    if let Some(theta) = target.angle() {
        let at_target = params.with_theta(theta);
        dbg!(is_circular(&at_target, DEFAULT_EPSILON));
        let curve = generate_curve(&at_target, DEFAULT_SEGMENTS);
        dbg!(curve.points.len());
        dbg!(curve.semi_axis_x);
        dbg!(curve.semi_axis_transverse);
    }
}
