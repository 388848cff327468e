/// Progress added per animation frame.
pub const PROGRESS_STEP: f64 = 0.02;

/// Number of frames needed to go from 0.0 to 1.0.
pub const ANIMATION_FRAMES: u32 = 50;

/// One-shot animation progress in `[0, 1]`.
///
/// Progress is derived from the number of completed steps rather than
/// accumulated, so the final frame lands on exactly 1.0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationProgress {
    steps: u32,
}

impl AnimationProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(self) -> f64 {
        (f64::from(self.steps) * PROGRESS_STEP).min(1.0)
    }

    pub fn steps(self) -> u32 {
        self.steps
    }

    pub fn is_complete(self) -> bool {
        self.value() >= 1.0
    }

    /// Advance by one step. A no-op once complete.
    pub fn advance(&mut self) -> f64 {
        if !self.is_complete() {
            self.steps += 1;
        }
        self.value()
    }
}
