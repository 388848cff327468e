use std::f64::consts::{FRAC_PI_2, TAU};

use crate::foundation::core::{DisplaySize, Point, Vec2};

/// Space kept between the outer grid ring and the surface edge for labels.
pub const LABEL_MARGIN: f64 = 40.0;
/// Distance of label anchors beyond the outer ring.
pub const LABEL_OFFSET: f64 = 25.0;
/// Labels are drawn with their baseline this far below the anchor.
pub const LABEL_BASELINE_DROP: f64 = 4.0;

/// Center and outer radius of the chart, in display units.
///
/// Computed once from the displayed surface size; never recomputed. Surfaces
/// too small to fit the label margin get a zero radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    pub center: Point,
    pub radius: f64,
}

impl ChartGeometry {
    pub fn from_display(size: DisplaySize) -> Self {
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        Self {
            center,
            radius: (center.x.min(center.y) - LABEL_MARGIN).max(0.0),
        }
    }

    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Point at `distance` from the center along axis `index` of `count`.
    pub fn point_on_axis(&self, index: usize, count: usize, distance: f64) -> Point {
        let (sin, cos) = axis_angle(index, count).sin_cos();
        self.center + Vec2::new(cos, sin) * distance
    }

    /// Polygon vertex for a skill fraction in `[0, 1]` at animation `progress`.
    pub fn vertex(&self, index: usize, count: usize, fraction: f64, progress: f64) -> Point {
        self.point_on_axis(index, count, vertex_distance(fraction, self.radius, progress))
    }

    pub fn rim(&self, index: usize, count: usize) -> Point {
        self.point_on_axis(index, count, self.radius)
    }

    pub fn label_anchor(&self, index: usize, count: usize) -> Point {
        self.point_on_axis(index, count, self.radius + LABEL_OFFSET)
    }

    /// Radii of the evenly spaced reference rings, innermost first.
    pub fn ring_radii(&self, levels: u32) -> Vec<f64> {
        (1..=levels)
            .map(|i| self.radius / f64::from(levels) * f64::from(i))
            .collect()
    }
}

/// Angle of axis `index` in radians. Axis 0 points up; the rest proceed clockwise
/// in screen coordinates (y down).
pub fn axis_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return -FRAC_PI_2;
    }
    let step = TAU / count as f64;
    step * index as f64 - FRAC_PI_2
}

pub fn vertex_distance(fraction: f64, radius: f64, progress: f64) -> f64 {
    fraction * radius * progress
}

#[cfg(test)]
#[path = "../../tests/unit/chart/geometry.rs"]
mod tests;
