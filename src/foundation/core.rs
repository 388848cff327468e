use crate::foundation::error::{RadarError, RadarResult};

pub use kurbo::{Point, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> RadarResult<Self> {
        if den == 0 {
            return Err(RadarError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(RadarError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }
}

/// Size of a surface as laid out on the page, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

impl DisplaySize {
    pub fn new(width: f64, height: f64) -> RadarResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(RadarError::validation(
                "display size must be finite and > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Backing-buffer dimensions for a device pixel scale (truncated, at least 1px).
    pub fn backing_dims(self, pixel_scale: f64) -> RadarResult<(u16, u16)> {
        if !pixel_scale.is_finite() || pixel_scale <= 0.0 {
            return Err(RadarError::validation(
                "pixel scale must be finite and > 0",
            ));
        }
        let dim = |v: f64| -> RadarResult<u16> {
            let px = (v * pixel_scale).floor().max(1.0);
            if px > f64::from(u16::MAX) {
                return Err(RadarError::validation(format!(
                    "backing dimension {px} exceeds u16"
                )));
            }
            Ok(px as u16)
        };
        Ok((dim(self.width)?, dim(self.height)?))
    }
}

/// Straight (non-premultiplied) RGBA8 color, serialized as `#rrggbb` or `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn parse_hex(s: &str) -> RadarResult<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| RadarError::validation(format!("color '{s}' must start with '#'")))?;
        if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
            return Err(RadarError::validation(format!(
                "color '{s}' must be #rrggbb or #rrggbbaa"
            )));
        }
        let channel = |i: usize| -> RadarResult<u8> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| RadarError::validation(format!("color '{s}' has invalid hex digits")))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }

    /// Same color with alpha replaced by `alpha` in `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = RadarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(value: Rgba8) -> Self {
        value.to_hex()
    }
}
