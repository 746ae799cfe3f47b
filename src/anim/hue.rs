// hue.rs - Wrapping hue accumulator

/// Hue in `[0, 1)`. Reaching 1 snaps back to exactly 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HueCycle {
    hue: f32,
}

impl HueCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f32 {
        self.hue
    }

    /// Advance by a non-negative step and return the new hue
    pub fn advance(&mut self, step: f32) -> f32 {
        self.hue += step.max(0.0);
        if self.hue >= 1.0 {
            self.hue = 0.0;
        }
        self.hue
    }
}
