use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{RadarError, RadarResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct LabelBrush {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgba8> for LabelBrush {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct LabelKey {
    text: String,
    size_bits: u32,
    brush: [u8; 4],
}

/// A shaped single-line label.
pub(crate) struct LabelLayout {
    pub(crate) layout: parley::Layout<LabelBrush>,
    pub(crate) width: f32,
    /// Distance from the layout top to the first baseline.
    pub(crate) baseline: f32,
}

/// Shapes chart labels with one font loaded from bytes.
pub struct LabelFont {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<LabelBrush>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
    cache: HashMap<LabelKey, Arc<LabelLayout>>,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFont")
            .field("family_name", &self.family_name)
            .field("cached_layouts", &self.cache.len())
            .finish()
    }
}

impl LabelFont {
    pub fn from_path(path: &Path) -> RadarResult<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| RadarError::validation(format!("read font '{}': {e}", path.display())))?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> RadarResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            RadarError::validation("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| RadarError::validation("registered font family has no name"))?
            .to_string();
        tracing::debug!(family = %family_name, "loaded label font");

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0),
            cache: HashMap::new(),
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub(crate) fn font_data(&self) -> &vello_cpu::peniko::FontData {
        &self.font
    }

    pub(crate) fn layout(
        &mut self,
        text: &str,
        size_px: f32,
        brush: LabelBrush,
    ) -> RadarResult<Arc<LabelLayout>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(RadarError::validation(
                "label size_px must be finite and > 0",
            ));
        }
        let key = LabelKey {
            text: text.to_string(),
            size_bits: size_px.to_bits(),
            brush: [brush.r, brush.g, brush.b, brush.a],
        };
        if let Some(l) = self.cache.get(&key) {
            return Ok(l.clone());
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<LabelBrush> = builder.build(text);
        layout.break_all_lines(None);

        let baseline = layout
            .lines()
            .next()
            .map(|line| line.metrics().baseline)
            .unwrap_or(0.0);
        let shaped = Arc::new(LabelLayout {
            width: layout.width(),
            baseline,
            layout,
        });
        self.cache.insert(key, shaped.clone());
        Ok(shaped)
    }
}
