/// Fraction of the surface that must be on screen before the chart animates.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Single-shot visibility trigger.
///
/// The host reports the visible fraction of the surface whenever it changes.
/// The first report at or above the threshold fires the watch and disarms it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityWatch {
    threshold: f64,
    armed: bool,
}

impl Default for VisibilityWatch {
    fn default() -> Self {
        Self::new(VISIBILITY_THRESHOLD)
    }
}

impl VisibilityWatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            armed: true,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Returns `true` exactly once, on the first qualifying ratio.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if !self.armed || visible_ratio.is_nan() || visible_ratio < self.threshold {
            return false;
        }
        self.armed = false;
        true
    }
}
