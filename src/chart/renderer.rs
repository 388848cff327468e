use crate::chart::geometry::ChartGeometry;
use crate::chart::model::{ChartStyle, SkillEntry};
use crate::chart::progress::AnimationProgress;
use crate::chart::scene::ChartScene;
use crate::chart::scheduler::FrameScheduler;
use crate::chart::visibility::VisibilityWatch;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::RadarResult;
use crate::render::cpu::CpuPainter;
use crate::render::surface::Surface;
use crate::render::text::LabelFont;

/// Where a chart is in its one-shot lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    /// Waiting for the surface to become visible.
    Idle,
    Running,
    /// Progress reached 1.0; no more frames are drawn.
    Finished,
}

/// Result of one animation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not armed yet; nothing was drawn.
    Idle,
    /// A frame was drawn and another one is due.
    Continue,
    /// The final frame was drawn, or the chart has nothing left to draw.
    Finished,
}

/// Mutable per-chart render state: geometry and animation progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    pub geometry: ChartGeometry,
    pub progress: AnimationProgress,
}

impl RenderState {
    pub fn animation_progress(&self) -> f64 {
        self.progress.value()
    }
}

struct ActiveChart {
    surface: Surface,
    skills: Vec<SkillEntry>,
    style: ChartStyle,
    state: RenderState,
    watch: VisibilityWatch,
    lifecycle: AnimationState,
    painter: CpuPainter,
}

/// Animated radar chart of a fixed skill list.
///
/// Without a surface the renderer is inert: it accepts every call and does nothing.
pub struct RadarChartRenderer {
    inner: Option<ActiveChart>,
}

impl std::fmt::Debug for RadarChartRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            None => f.write_str("RadarChartRenderer(inert)"),
            Some(c) => f
                .debug_struct("RadarChartRenderer")
                .field("surface", &c.surface)
                .field("skills", &c.skills.len())
                .field("state", &c.state)
                .field("lifecycle", &c.lifecycle)
                .finish(),
        }
    }
}

impl RadarChartRenderer {
    /// Set up a chart on `surface`, resizing its backing buffer to the device
    /// pixel scale. Geometry is fixed from here on.
    pub fn new(surface: Option<Surface>, skills: Vec<SkillEntry>, style: ChartStyle) -> Self {
        Self::with_label_font(surface, skills, style, None)
    }

    pub fn with_label_font(
        surface: Option<Surface>,
        skills: Vec<SkillEntry>,
        style: ChartStyle,
        font: Option<LabelFont>,
    ) -> Self {
        let Some(mut surface) = surface else {
            tracing::debug!("no drawing surface; radar chart is inert");
            return Self { inner: None };
        };

        surface.match_pixel_scale();
        let geometry = ChartGeometry::from_display(surface.display_size());
        tracing::debug!(
            skills = skills.len(),
            radius = geometry.radius,
            backing = ?surface.backing_size(),
            "radar chart ready"
        );
        if font.is_none() && !skills.is_empty() {
            tracing::warn!("no label font; skill labels will not be drawn");
        }

        Self {
            inner: Some(ActiveChart {
                surface,
                skills,
                style,
                state: RenderState {
                    geometry,
                    progress: AnimationProgress::new(),
                },
                watch: VisibilityWatch::default(),
                lifecycle: AnimationState::Idle,
                painter: CpuPainter::new(font),
            }),
        }
    }

    pub fn is_inert(&self) -> bool {
        self.inner.is_none()
    }

    pub fn state(&self) -> Option<&RenderState> {
        self.inner.as_ref().map(|c| &c.state)
    }

    pub fn animation_state(&self) -> AnimationState {
        self.inner
            .as_ref()
            .map_or(AnimationState::Finished, |c| c.lifecycle)
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.inner.as_ref().map(|c| &c.surface)
    }

    pub fn skills(&self) -> &[SkillEntry] {
        self.inner
            .as_ref()
            .map(|c| c.skills.as_slice())
            .unwrap_or(&[])
    }

    /// Report the visible fraction of the surface. Returns `true` when this
    /// report started the animation; that happens at most once.
    pub fn on_visibility(&mut self, visible_ratio: f64) -> bool {
        let Some(chart) = self.inner.as_mut() else {
            return false;
        };
        if !chart.watch.observe(visible_ratio) {
            return false;
        }
        chart.lifecycle = AnimationState::Running;
        tracing::debug!(visible_ratio, "radar chart visible; animation armed");
        true
    }

    /// Advance one animation step and redraw.
    pub fn tick(&mut self) -> RadarResult<TickOutcome> {
        let Some(chart) = self.inner.as_mut() else {
            return Ok(TickOutcome::Finished);
        };
        match chart.lifecycle {
            AnimationState::Idle => return Ok(TickOutcome::Idle),
            AnimationState::Finished => return Ok(TickOutcome::Finished),
            AnimationState::Running => {}
        }

        let progress = chart.state.progress.advance();
        chart.draw()?;
        tracing::trace!(
            step = chart.state.progress.steps(),
            progress,
            "radar frame"
        );

        if chart.state.progress.is_complete() {
            chart.lifecycle = AnimationState::Finished;
            tracing::debug!(
                frames = chart.state.progress.steps(),
                "radar animation finished"
            );
            return Ok(TickOutcome::Finished);
        }
        Ok(TickOutcome::Continue)
    }

    /// Redraw the current state without advancing.
    pub fn draw(&mut self) -> RadarResult<()> {
        match self.inner.as_mut() {
            Some(chart) => chart.draw(),
            None => Ok(()),
        }
    }

    /// The draw pass for the current state, without rasterizing it.
    pub fn scene(&self) -> Option<ChartScene> {
        self.inner.as_ref().map(ActiveChart::scene)
    }

    /// Drive an armed animation to its end.
    ///
    /// Each drawn frame is handed to `on_frame`; the scheduler is waited on
    /// between frames. Returns the number of frames drawn (0 when not armed).
    pub fn run_to_completion<S, F>(
        &mut self,
        scheduler: &mut S,
        mut on_frame: F,
    ) -> RadarResult<u64>
    where
        S: FrameScheduler + ?Sized,
        F: FnMut(FrameIndex, &Surface) -> RadarResult<()>,
    {
        let mut frames = 0u64;
        while self.animation_state() == AnimationState::Running {
            let outcome = self.tick()?;
            if let Some(surface) = self.surface() {
                on_frame(FrameIndex(frames), surface)?;
            }
            frames += 1;
            if outcome != TickOutcome::Continue {
                break;
            }
            scheduler.wait_for_frame();
        }
        Ok(frames)
    }
}

impl ActiveChart {
    fn scene(&self) -> ChartScene {
        ChartScene::build(
            &self.skills,
            &self.state.geometry,
            self.state.progress.value(),
            &self.style,
        )
    }

    fn draw(&mut self) -> RadarResult<()> {
        let scene = self.scene();
        self.painter.paint(&scene, &mut self.surface)
    }
}
