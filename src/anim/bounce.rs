// bounce.rs - Multiplicative scale ping-pong for placed gems

const GROW: f32 = 1.05;
const SHRINK: f32 = 0.95;
const FLOOR: f32 = 0.5;

/// Grows until reaching the target, then shrinks to half of it, repeat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounce {
    growing: bool,
}

impl Default for ScaleBounce {
    fn default() -> Self {
        Self { growing: true }
    }
}

impl ScaleBounce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&mut self, scale: f32, target: f32) -> f32 {
        if self.growing {
            let s = scale * GROW;
            if s >= target { self.growing = false; }
            s
        } else {
            let s = scale * SHRINK;
            if s <= target * FLOOR { self.growing = true; }
            s
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oscillates_between_half_and_target() {
        let mut b = ScaleBounce::new();
        let mut s = 0.6;
        for _ in 0..500 {
            s = b.step(s, 1.0);
            assert!(s > 0.45 && s < 1.06, "scale {s}");
        }
    }

    #[test]
    fn turns_around_at_target() {
        let mut b = ScaleBounce::new();
        let s = b.step(1.0, 1.0);
        assert!(s > 1.0);
        assert!(b.step(s, 1.0) < s);
    }
}
