use std::time::{Duration, Instant};

use crate::foundation::core::Fps;

/// Gates the animation loop between frames.
///
/// `wait_for_frame` returns when the next frame may be drawn. Implementations
/// decide the cadence; the animation itself is a fixed number of steps.
pub trait FrameScheduler {
    fn wait_for_frame(&mut self);
}

/// Draws frames back to back.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateScheduler;

impl FrameScheduler for ImmediateScheduler {
    fn wait_for_frame(&mut self) {}
}

/// Paces frames to a fixed rate by sleeping the calling thread.
#[derive(Clone, Debug)]
pub struct FixedRateScheduler {
    period: Duration,
    next: Option<Instant>,
}

impl FixedRateScheduler {
    pub fn new(fps: Fps) -> Self {
        Self {
            period: Duration::from_secs_f64(fps.frame_duration_secs()),
            next: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl FrameScheduler for FixedRateScheduler {
    fn wait_for_frame(&mut self) {
        let now = Instant::now();
        let due = self.next.unwrap_or(now + self.period);
        if due > now {
            std::thread::sleep(due - now);
        }
        // Late frames reset the cadence instead of bursting to catch up.
        self.next = Some(due.max(now) + self.period);
    }
}
