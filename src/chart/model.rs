use std::path::{Path, PathBuf};

use crate::foundation::core::{DisplaySize, Rgba8};
use crate::foundation::error::{RadarError, RadarResult};

/// One labeled axis of the chart, scored on a shared 0–100 scale.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SkillEntry {
    pub label: String,
    pub value: u8,
}

impl SkillEntry {
    pub fn new(label: impl Into<String>, value: u8) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Score as a fraction of the full scale.
    pub fn fraction(&self) -> f64 {
        f64::from(self.value.min(100)) / 100.0
    }
}

/// The skill list shown on the portfolio page.
pub fn default_skills() -> Vec<SkillEntry> {
    vec![
        SkillEntry::new("Circuit Design", 90),
        SkillEntry::new("MATLAB/Simulink", 85),
        SkillEntry::new("C Programming", 80),
        SkillEntry::new("Quality Control", 88),
        SkillEntry::new("MEP Systems", 85),
        SkillEntry::new("Embedded Systems", 75),
    ]
}

pub fn validate_skills(skills: &[SkillEntry]) -> RadarResult<()> {
    for (i, s) in skills.iter().enumerate() {
        if s.value > 100 {
            return Err(RadarError::validation(format!(
                "skill {i} ('{}') value {} is outside 0..=100",
                s.label, s.value
            )));
        }
    }
    Ok(())
}

/// Colors and stroke metrics for one chart.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub grid_color: Rgba8,
    pub grid_levels: u32,
    pub grid_line_width: f64,
    pub accent: Rgba8,
    /// Polygon fill alpha at the center and at the rim of the gradient.
    pub fill_alpha_center: f64,
    pub fill_alpha_rim: f64,
    pub outline_width: f64,
    pub marker_radius: f64,
    pub label_color: Rgba8,
    pub label_size_px: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            grid_color: Rgba8::rgb(0xe5, 0xe7, 0xeb),
            grid_levels: 5,
            grid_line_width: 1.0,
            accent: Rgba8::rgb(0x63, 0x66, 0xf1),
            fill_alpha_center: 0.3,
            fill_alpha_rim: 0.1,
            outline_width: 2.0,
            marker_radius: 4.0,
            label_color: Rgba8::rgb(0x37, 0x41, 0x51),
            label_size_px: 12.0,
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> RadarResult<()> {
        if self.grid_levels == 0 {
            return Err(RadarError::validation("style.grid_levels must be > 0"));
        }
        for (name, v) in [
            ("grid_line_width", self.grid_line_width),
            ("outline_width", self.outline_width),
            ("marker_radius", self.marker_radius),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(RadarError::validation(format!(
                    "style.{name} must be finite and >= 0"
                )));
            }
        }
        for (name, v) in [
            ("fill_alpha_center", self.fill_alpha_center),
            ("fill_alpha_rim", self.fill_alpha_rim),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(RadarError::validation(format!(
                    "style.{name} must be in [0, 1]"
                )));
            }
        }
        if !self.label_size_px.is_finite() || self.label_size_px <= 0.0 {
            return Err(RadarError::validation(
                "style.label_size_px must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Everything needed to set up a chart outside of a host page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub skills: Vec<SkillEntry>,
    pub width: f64,
    pub height: f64,
    pub pixel_scale: f64,
    pub style: ChartStyle,
    /// Font file for labels. Labels are skipped when unset.
    pub font: Option<PathBuf>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            skills: default_skills(),
            width: 400.0,
            height: 400.0,
            pixel_scale: 1.0,
            style: ChartStyle::default(),
            font: None,
        }
    }
}

impl ChartConfig {
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> RadarResult<Self> {
        let s = std::fs::read_to_string(path)?;
        let cfg = Self::from_json_str(&s)?;
        tracing::debug!(skills = cfg.skills.len(), "loaded chart config");
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> RadarResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| RadarError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> RadarResult<()> {
        validate_skills(&self.skills)?;
        self.style.validate()?;
        self.display_size()?.backing_dims(self.pixel_scale)?;
        Ok(())
    }

    pub fn display_size(&self) -> RadarResult<DisplaySize> {
        DisplaySize::new(self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/model.rs"]
mod tests;
