use std::path::Path;

use crate::foundation::core::DisplaySize;
use crate::foundation::error::{RadarError, RadarResult};

/// A 2-D raster drawing surface with a premultiplied RGBA8 backing buffer.
///
/// The surface has a displayed size (layout units) and a device pixel scale.
/// The backing buffer starts at the displayed size and is resized to
/// `displayed × scale` by [`Surface::match_pixel_scale`].
pub struct Surface {
    display: DisplaySize,
    pixel_scale: f64,
    scaled_dims: (u16, u16),
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("display", &self.display)
            .field("pixel_scale", &self.pixel_scale)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl Surface {
    pub fn new(display: DisplaySize, pixel_scale: f64) -> RadarResult<Self> {
        let scaled_dims = display.backing_dims(pixel_scale)?;
        let (width, height) = display.backing_dims(1.0)?;
        Ok(Self {
            display,
            pixel_scale,
            scaled_dims,
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    pub fn display_size(&self) -> DisplaySize {
        self.display
    }

    pub fn pixel_scale(&self) -> f64 {
        self.pixel_scale
    }

    /// Backing buffer size in device pixels.
    pub fn backing_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Resize the backing buffer to `displayed × pixel_scale`. Contents are discarded.
    pub fn match_pixel_scale(&mut self) {
        let (w, h) = self.scaled_dims;
        if (w, h) != (self.width, self.height) {
            self.width = w;
            self.height = h;
            self.pixmap = vello_cpu::Pixmap::new(w, h);
        }
    }

    pub fn clear(&mut self) {
        self.pixmap.data_as_u8_slice_mut().fill(0);
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut vello_cpu::Pixmap {
        &mut self.pixmap
    }

    /// Raw premultiplied RGBA8 bytes, row-major.
    pub fn premul_bytes(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Straight-alpha RGBA8 bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = self.premul_bytes().to_vec();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Straight-alpha RGBA8 of one backing pixel.
    pub fn pixel(&self, x: u16, y: u16) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (usize::from(y) * usize::from(self.width) + usize::from(x)) * 4;
        let px = &self.premul_bytes()[i..i + 4];
        let a = u16::from(px[3]);
        if a == 0 {
            return Some([0, 0, 0, 0]);
        }
        let unpremul = |c: u8| ((u16::from(c) * 255 + a / 2) / a).min(255) as u8;
        Some([unpremul(px[0]), unpremul(px[1]), unpremul(px[2]), px[3]])
    }

    pub fn is_blank(&self) -> bool {
        self.premul_bytes().iter().all(|&b| b == 0)
    }

    pub fn save_png(&self, path: &Path) -> RadarResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        image::save_buffer_with_format(
            path,
            &self.to_rgba8(),
            u32::from(self.width),
            u32::from(self.height),
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| RadarError::render(format!("write png '{}': {e}", path.display())))
    }
}
