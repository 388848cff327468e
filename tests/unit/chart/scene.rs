use super::*;

fn geometry() -> ChartGeometry {
    ChartGeometry::new(Point::new(150.0, 150.0), 100.0)
}

#[test]
fn grid_has_five_rings_and_one_spoke_per_skill() {
    let skills = crate::chart::model::default_skills();
    let scene = ChartScene::build(&skills, &geometry(), 0.0, &ChartStyle::default());
    assert_eq!(scene.count_rings(), 5);
    assert_eq!(scene.count_spokes(), 6);
    assert_eq!(scene.labels().count(), 6);
}

#[test]
fn polygon_scales_uniformly_with_progress() {
    let skills = vec![SkillEntry::new("A", 90), SkillEntry::new("B", 50)];
    let g = geometry();
    let scene = ChartScene::build(&skills, &g, 0.5, &ChartStyle::default());

    let poly = scene.polygon();
    assert_eq!(poly.len(), 2);
    assert!((poly[0].distance(g.center) - 45.0).abs() < 1e-9);
    assert!((poly[1].distance(g.center) - 25.0).abs() < 1e-9);
    assert!(poly[0].y < g.center.y);
    assert!(poly[1].y > g.center.y);
}

#[test]
fn labels_stay_at_full_radius_from_the_first_frame() {
    let skills = vec![SkillEntry::new("A", 90), SkillEntry::new("B", 50)];
    let g = geometry();
    let scene = ChartScene::build(&skills, &g, 0.02, &ChartStyle::default());

    let labels: Vec<_> = scene.labels().collect();
    assert_eq!(labels[0].0, "A");
    assert!((labels[0].1.x - 150.0).abs() < 1e-9);
    assert!((labels[0].1.y - (150.0 - 125.0 + 4.0)).abs() < 1e-9);
    assert_eq!(labels[1].0, "B");
    assert!((labels[1].1.y - (150.0 + 125.0 + 4.0)).abs() < 1e-9);
}

#[test]
fn empty_skill_list_draws_only_rings() {
    let scene = ChartScene::build(&[], &geometry(), 1.0, &ChartStyle::default());
    assert_eq!(scene.count_rings(), 5);
    assert_eq!(scene.count_spokes(), 0);
    assert!(scene.polygon().is_empty());
    assert_eq!(scene.ops.len(), 5);
}

#[test]
fn painter_order_is_grid_then_polygon_then_labels() {
    let skills = vec![
        SkillEntry::new("A", 10),
        SkillEntry::new("B", 20),
        SkillEntry::new("C", 30),
    ];
    let scene = ChartScene::build(&skills, &geometry(), 1.0, &ChartStyle::default());

    let pos = |pred: fn(&DrawOp) -> bool| scene.ops.iter().position(pred).unwrap();
    let last_spoke = scene
        .ops
        .iter()
        .rposition(|op| matches!(op, DrawOp::StrokeLine { .. }))
        .unwrap();
    let fill = pos(|op| matches!(op, DrawOp::FillPolygon { .. }));
    let stroke = pos(|op| matches!(op, DrawOp::StrokePolygon { .. }));
    let first_marker = pos(|op| matches!(op, DrawOp::FillCircle { .. }));
    let first_label = pos(|op| matches!(op, DrawOp::Label { .. }));

    assert!(last_spoke < fill);
    assert!(fill < stroke);
    assert!(stroke < first_marker);
    assert!(first_marker < first_label);
}

#[test]
fn fill_gradient_fades_toward_the_rim() {
    let skills = vec![SkillEntry::new("A", 80), SkillEntry::new("B", 80)];
    let scene = ChartScene::build(&skills, &geometry(), 1.0, &ChartStyle::default());
    let fill = scene
        .ops
        .iter()
        .find_map(|op| match op {
            DrawOp::FillPolygon { fill, .. } => Some(*fill),
            _ => None,
        })
        .unwrap();
    assert!(fill.inner.a > fill.outer.a);
    assert_eq!(fill.radius, 100.0);
}
