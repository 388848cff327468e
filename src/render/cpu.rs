use vello_cpu::kurbo::Shape as _;

use crate::chart::scene::{ChartScene, DrawOp};
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::RadarResult;
use crate::render::gradient::GradientCache;
use crate::render::surface::Surface;
use crate::render::text::{LabelBrush, LabelFont};

const CIRCLE_TOLERANCE: f64 = 0.1;

/// Rasterizes [`ChartScene`]s onto a [`Surface`] with `vello_cpu`.
///
/// Scene coordinates are display units; the painter scales them by the
/// surface's device pixel scale.
#[derive(Default)]
pub struct CpuPainter {
    gradients: GradientCache,
    labels: Option<LabelFont>,
}

impl std::fmt::Debug for CpuPainter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuPainter")
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

impl CpuPainter {
    pub fn new(labels: Option<LabelFont>) -> Self {
        Self {
            gradients: GradientCache::default(),
            labels,
        }
    }

    /// Clear the whole backing buffer and draw `scene` onto it.
    #[tracing::instrument(skip_all, fields(ops = scene.ops.len()))]
    pub fn paint(&mut self, scene: &ChartScene, surface: &mut Surface) -> RadarResult<()> {
        surface.clear();

        let (w, h) = surface.backing_size();
        let scale = surface.pixel_scale();
        let base = vello_cpu::kurbo::Affine::scale(scale);
        let mut ctx = vello_cpu::RenderContext::new(w, h);

        for op in &scene.ops {
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_transform(base);
            self.draw_op(&mut ctx, op, scale, (w, h))?;
        }

        ctx.flush();
        ctx.render_to_pixmap(surface.pixmap_mut());
        Ok(())
    }

    fn draw_op(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        op: &DrawOp,
        scale: f64,
        (w, h): (u16, u16),
    ) -> RadarResult<()> {
        match op {
            DrawOp::StrokeCircle {
                center,
                radius,
                color,
                width,
            } => {
                let path = vello_cpu::kurbo::Circle::new(point_to_cpu(*center), radius.max(0.0))
                    .to_path(CIRCLE_TOLERANCE);
                ctx.set_paint(color_to_cpu(*color));
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
                ctx.stroke_path(&path);
            }
            DrawOp::StrokeLine {
                from,
                to,
                color,
                width,
            } => {
                let mut path = vello_cpu::kurbo::BezPath::new();
                path.move_to(point_to_cpu(*from));
                path.line_to(point_to_cpu(*to));
                ctx.set_paint(color_to_cpu(*color));
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
                ctx.stroke_path(&path);
            }
            DrawOp::FillPolygon { points, fill } => {
                let img = self.gradients.radial(fill, scale, w, h)?;
                ctx.set_paint_transform(vello_cpu::kurbo::Affine::scale(1.0 / scale));
                ctx.set_paint(img);
                ctx.fill_path(&polygon_path(points));
            }
            DrawOp::StrokePolygon {
                points,
                color,
                width,
            } => {
                ctx.set_paint(color_to_cpu(*color));
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
                ctx.stroke_path(&polygon_path(points));
            }
            DrawOp::FillCircle {
                center,
                radius,
                color,
            } => {
                let path = vello_cpu::kurbo::Circle::new(point_to_cpu(*center), radius.max(0.0))
                    .to_path(CIRCLE_TOLERANCE);
                ctx.set_paint(color_to_cpu(*color));
                ctx.fill_path(&path);
            }
            DrawOp::Label {
                text,
                anchor,
                color,
                size_px,
            } => {
                let Some(font) = self.labels.as_mut() else {
                    tracing::trace!(label = %text, "no label font configured; skipping label");
                    return Ok(());
                };
                let shaped = font.layout(text, *size_px, LabelBrush::from(*color))?;
                // Shift the layout so its first baseline lands on the anchor.
                let origin = vello_cpu::kurbo::Vec2::new(
                    anchor.x - f64::from(shaped.width) / 2.0,
                    anchor.y - f64::from(shaped.baseline),
                );
                ctx.set_transform(
                    vello_cpu::kurbo::Affine::scale(scale)
                        * vello_cpu::kurbo::Affine::translate(origin),
                );

                for line in shaped.layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };

                        let brush = run.style().brush;
                        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                            brush.r, brush.g, brush.b, brush.a,
                        ));

                        // Line-relative positions; y is already on the baseline.
                        let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x,
                            y: g.y,
                        });
                        ctx.glyph_run(font.font_data())
                            .font_size(run.run().font_size())
                            .fill_glyphs(glyphs);
                    }
                }
            }
        }
        Ok(())
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn polygon_path(points: &[Point]) -> vello_cpu::kurbo::BezPath {
    let mut path = vello_cpu::kurbo::BezPath::new();
    let mut iter = points.iter();
    if let Some(&first) = iter.next() {
        path.move_to(point_to_cpu(first));
        for &p in iter {
            path.line_to(point_to_cpu(p));
        }
        path.close_path();
    }
    path
}
