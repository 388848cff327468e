use std::collections::HashMap;
use std::sync::Arc;

use crate::chart::scene::RadialFill;
use crate::foundation::core::Rgba8;
use crate::foundation::error::RadarResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct RadialKey {
    inner: Rgba8,
    outer: Rgba8,
    center_bits: (u64, u64),
    radius_bits: u64,
    w: u16,
    h: u16,
}

/// Rasterized radial gradients, cached per fill and target size.
///
/// Images are produced in device pixels; callers draw them with a paint
/// transform that undoes the device pixel scale.
#[derive(Default)]
pub(crate) struct GradientCache {
    radial: HashMap<RadialKey, vello_cpu::Image>,
}

impl GradientCache {
    pub(crate) fn radial(
        &mut self,
        fill: &RadialFill,
        pixel_scale: f64,
        w: u16,
        h: u16,
    ) -> RadarResult<vello_cpu::Image> {
        let cx = fill.center.x * pixel_scale;
        let cy = fill.center.y * pixel_scale;
        let radius = fill.radius * pixel_scale;
        let key = RadialKey {
            inner: fill.inner,
            outer: fill.outer,
            center_bits: (cx.to_bits(), cy.to_bits()),
            radius_bits: radius.to_bits(),
            w,
            h,
        };
        if let Some(img) = self.radial.get(&key).cloned() {
            return Ok(img);
        }

        let (wu, hu) = (usize::from(w), usize::from(h));
        let mut pixels = Vec::with_capacity(wu * hu);
        let mut may_have_opacities = false;
        for y in 0..hu {
            for x in 0..wu {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                let t = if radius > 0.0 {
                    ((dx * dx + dy * dy).sqrt() / radius).min(1.0)
                } else {
                    1.0
                };
                let c = lerp_rgba8(fill.inner, fill.outer, t);
                may_have_opacities |= c.a != 255;
                pixels.push(premul(c));
            }
        }

        let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);
        let img = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        self.radial.insert(key, img.clone());
        Ok(img)
    }
}

fn lerp_rgba8(a: Rgba8, b: Rgba8, t: f64) -> Rgba8 {
    let lerp = |x: u8, y: u8| -> u8 {
        let xf = f64::from(x);
        let yf = f64::from(y);
        (xf + (yf - xf) * t).round().clamp(0.0, 255.0) as u8
    };
    Rgba8 {
        r: lerp(a.r, b.r),
        g: lerp(a.g, b.g),
        b: lerp(a.b, b.b),
        a: lerp(a.a, b.a),
    }
}

fn premul(c: Rgba8) -> vello_cpu::peniko::color::PremulRgba8 {
    let a = u16::from(c.a);
    let p = |v: u8| -> u8 { ((u16::from(v) * a + 127) / 255) as u8 };
    vello_cpu::peniko::color::PremulRgba8 {
        r: p(c.r),
        g: p(c.g),
        b: p(c.b),
        a: c.a,
    }
}
