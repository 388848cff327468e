//! Skillradar renders an animated skills radar ("spider") chart.
//!
//! A [`RadarChartRenderer`] owns an optional [`Surface`], a fixed list of
//! [`SkillEntry`] scores and a one-shot animation. The host reports how much
//! of the surface is on screen; the first report of at least 50% arms the
//! animation, which then grows the skill polygon from the center to its full
//! extent in 50 equal steps.
//!
//! # Pipeline overview
//!
//! 1. **Build**: `skills + RenderState -> ChartScene` (pure list of draw ops)
//! 2. **Paint**: `ChartScene -> Surface` (CPU rasterization with `vello_cpu`)
//! 3. **Output** (optional): `Surface -> PNG`
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same state always produces the same pixels.
#![forbid(unsafe_code)]

mod chart;
mod foundation;
mod render;

pub use chart::geometry::{
    ChartGeometry, LABEL_BASELINE_DROP, LABEL_MARGIN, LABEL_OFFSET, axis_angle, vertex_distance,
};
pub use chart::model::{ChartConfig, ChartStyle, SkillEntry, default_skills, validate_skills};
pub use chart::progress::{ANIMATION_FRAMES, AnimationProgress, PROGRESS_STEP};
pub use chart::renderer::{AnimationState, RadarChartRenderer, RenderState, TickOutcome};
pub use chart::scene::{ChartScene, DrawOp, RadialFill};
pub use chart::scheduler::{FixedRateScheduler, FrameScheduler, ImmediateScheduler};
pub use chart::visibility::{VISIBILITY_THRESHOLD, VisibilityWatch};
pub use foundation::core::{DisplaySize, Fps, FrameIndex, Point, Rgba8, Vec2};
pub use foundation::error::{RadarError, RadarResult};
pub use render::cpu::CpuPainter;
pub use render::surface::Surface;
pub use render::text::{LabelBrush, LabelFont};
