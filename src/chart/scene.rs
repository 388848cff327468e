use crate::chart::geometry::ChartGeometry;
use crate::chart::model::{ChartStyle, SkillEntry};
use crate::foundation::core::{Point, Rgba8};

/// Radial gradient from the chart center to its outer ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialFill {
    pub center: Point,
    pub radius: f64,
    pub inner: Rgba8,
    pub outer: Rgba8,
}

/// One drawing primitive, in display units.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    StrokeCircle {
        center: Point,
        radius: f64,
        color: Rgba8,
        width: f64,
    },
    StrokeLine {
        from: Point,
        to: Point,
        color: Rgba8,
        width: f64,
    },
    FillPolygon {
        points: Vec<Point>,
        fill: RadialFill,
    },
    StrokePolygon {
        points: Vec<Point>,
        color: Rgba8,
        width: f64,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Rgba8,
    },
    Label {
        text: String,
        /// Horizontal center and baseline of the text.
        anchor: Point,
        color: Rgba8,
        size_px: f32,
    },
}

/// Everything one draw pass paints, in painter's order: grid, skill polygon, labels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartScene {
    pub ops: Vec<DrawOp>,
}

impl ChartScene {
    pub fn build(
        skills: &[SkillEntry],
        geometry: &ChartGeometry,
        progress: f64,
        style: &ChartStyle,
    ) -> Self {
        let n = skills.len();
        let mut ops = Vec::with_capacity(style.grid_levels as usize + n * 3 + 2);

        for radius in geometry.ring_radii(style.grid_levels) {
            ops.push(DrawOp::StrokeCircle {
                center: geometry.center,
                radius,
                color: style.grid_color,
                width: style.grid_line_width,
            });
        }
        for i in 0..n {
            ops.push(DrawOp::StrokeLine {
                from: geometry.center,
                to: geometry.rim(i, n),
                color: style.grid_color,
                width: style.grid_line_width,
            });
        }

        let points: Vec<Point> = skills
            .iter()
            .enumerate()
            .map(|(i, s)| geometry.vertex(i, n, s.fraction(), progress))
            .collect();
        if !points.is_empty() {
            ops.push(DrawOp::FillPolygon {
                points: points.clone(),
                fill: RadialFill {
                    center: geometry.center,
                    radius: geometry.radius,
                    inner: style.accent.with_alpha(style.fill_alpha_center),
                    outer: style.accent.with_alpha(style.fill_alpha_rim),
                },
            });
            ops.push(DrawOp::StrokePolygon {
                points: points.clone(),
                color: style.accent,
                width: style.outline_width,
            });
            for &center in &points {
                ops.push(DrawOp::FillCircle {
                    center,
                    radius: style.marker_radius,
                    color: style.accent,
                });
            }
        }

        for (i, s) in skills.iter().enumerate() {
            let anchor = geometry.label_anchor(i, n);
            ops.push(DrawOp::Label {
                text: s.label.clone(),
                anchor: Point::new(
                    anchor.x,
                    anchor.y + crate::chart::geometry::LABEL_BASELINE_DROP,
                ),
                color: style.label_color,
                size_px: style.label_size_px,
            });
        }

        Self { ops }
    }

    /// Skill polygon vertices, in index order. Empty when there are no skills.
    pub fn polygon(&self) -> &[Point] {
        self.ops
            .iter()
            .find_map(|op| match op {
                DrawOp::FillPolygon { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn count_rings(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokeCircle { .. }))
            .count()
    }

    pub fn count_spokes(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokeLine { .. }))
            .count()
    }

    pub fn labels(&self) -> impl Iterator<Item = (&str, Point)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Label { text, anchor, .. } => Some((text.as_str(), *anchor)),
            _ => None,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/scene.rs"]
mod tests;
