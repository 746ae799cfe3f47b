// anim/ - Per-frame animation primitives
//
// Everything here is a pure function of (timestamp, flags, own state).
// Angles and phases accumulate without normalization; only their sine or
// matrix image is ever consumed.

mod bounce;
mod burst;
mod hue;

pub use bounce::ScaleBounce;
pub use burst::{Burst, BurstState, BURST_DURATION};
pub use hue::HueCycle;

/// Base rotation step in radians per frame
pub const SPIN_STEP: f32 = 0.01;

/// Global speed toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    #[default]
    Normal,
    Fast,
}

impl Speed {
    pub fn factor(self) -> f32 {
        match self {
            Speed::Normal => 1.0,
            Speed::Fast => 2.0,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Speed::Normal => Speed::Fast,
            Speed::Fast => Speed::Normal,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Speed::Normal => "Normal",
            Speed::Fast => "Fast",
        }
    }
}

/// Rotation direction toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Signed rotation delta for one frame
#[inline]
pub fn spin(step: f32, speed: f32, dir: Direction) -> f32 {
    step * speed * dir.sign()
}

/// `base + amp * sin(t * freq * speed)`, `t` in milliseconds
///
/// Driven by absolute time: a paused clock resumes with a jump.
#[inline]
pub fn pulse(base: f32, amp: f32, t: f64, freq: f64, speed: f32) -> f32 {
    base + amp * (t * freq * speed as f64).sin() as f32
}

// Random number generator (xorshift32)
#[inline(always)]
pub fn rand(rng: &mut u32) -> f32 {
    *rng ^= *rng << 13;
    *rng ^= *rng >> 17;
    *rng ^= *rng << 5;
    (*rng >> 8) as f32 * (1.0 / 16777216.0)
}
