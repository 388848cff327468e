use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn geometry_is_derived_from_display_size() {
    let g = ChartGeometry::from_display(DisplaySize::new(400.0, 300.0).unwrap());
    assert_eq!(g.center, Point::new(200.0, 150.0));
    assert_eq!(g.radius, 110.0);
}

#[test]
fn surfaces_smaller_than_the_label_margin_get_zero_radius() {
    let g = ChartGeometry::from_display(DisplaySize::new(60.0, 200.0).unwrap());
    assert_eq!(g.center, Point::new(30.0, 100.0));
    assert_eq!(g.radius, 0.0);

    // Every vertex collapses onto the center instead of mirroring through it.
    let v = g.vertex(1, 3, 1.0, 1.0);
    assert!(approx(v.x, g.center.x) && approx(v.y, g.center.y));
    assert!(g.ring_radii(5).iter().all(|r| *r == 0.0));
}

#[test]
fn axis_zero_points_up_and_axes_run_clockwise() {
    assert!(approx(axis_angle(0, 6), -FRAC_PI_2));
    assert!(approx(axis_angle(1, 4), 0.0));
    assert!(approx(axis_angle(3, 6), FRAC_PI_2));

    let g = ChartGeometry::new(Point::new(0.0, 0.0), 100.0);
    let up = g.rim(0, 4);
    assert!(approx(up.x, 0.0) && approx(up.y, -100.0));
    let right = g.rim(1, 4);
    assert!(approx(right.x, 100.0) && approx(right.y, 0.0));
}

#[test]
fn two_skill_scenario_at_half_progress() {
    let g = ChartGeometry::new(Point::new(0.0, 0.0), 100.0);

    let a = g.vertex(0, 2, 0.9, 0.5);
    assert!(approx(a.distance(g.center), 45.0));
    assert!(approx(a.x, 0.0) && approx(a.y, -45.0));

    let b = g.vertex(1, 2, 0.5, 0.5);
    assert!(approx(b.distance(g.center), 25.0));
    assert!(approx(b.x, 0.0) && approx(b.y, 25.0));
}

#[test]
fn full_progress_vertex_sits_at_scaled_radius() {
    let g = ChartGeometry::new(Point::new(50.0, 70.0), 120.0);
    for (i, value) in [0u8, 33, 75, 100].into_iter().enumerate() {
        let fraction = f64::from(value) / 100.0;
        let v = g.vertex(i, 4, fraction, 1.0);
        assert!(approx(v.distance(g.center), fraction * 120.0));
    }
}

#[test]
fn labels_sit_beyond_the_rim() {
    let g = ChartGeometry::new(Point::new(200.0, 200.0), 160.0);
    let anchor = g.label_anchor(0, 3);
    assert!(approx(anchor.distance(g.center), 185.0));
}

#[test]
fn zero_axes_do_not_divide_by_zero() {
    assert!(axis_angle(0, 0).is_finite());
}

#[test]
fn ring_radii_are_evenly_spaced() {
    let g = ChartGeometry::new(Point::new(0.0, 0.0), 100.0);
    let radii = g.ring_radii(5);
    assert_eq!(radii.len(), 5);
    for (i, r) in radii.iter().enumerate() {
        assert!(approx(*r, 20.0 * (i as f64 + 1.0)));
    }
}
