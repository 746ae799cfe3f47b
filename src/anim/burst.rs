// burst.rs - One-shot particle effect
//
// Idle -> Active (countdown) -> Idle. Triggering while active restarts.

/// Countdown budget in timer units
pub const BURST_DURATION: f32 = 5.0;

const BURST_STEP: f32 = 0.1;
const ACTIVE_SPEED: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BurstState {
    #[default]
    Idle,
    Active { timer: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Burst {
    pub state: BurstState,
    pub opacity: f32,
    /// Particle cloud z drift
    pub offset_z: f32,
}

impl Burst {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&mut self) {
        self.state = BurstState::Active { timer: 0.0 };
        self.opacity = 1.0;
        self.offset_z = 0.0;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, BurstState::Active { .. })
    }

    /// Multiplier applied to every other animation while active
    pub fn speed_factor(&self) -> f32 {
        if self.is_active() { ACTIVE_SPEED } else { 1.0 }
    }

    pub fn tick(&mut self, speed: f32) {
        let BurstState::Active { timer } = self.state else { return };

        let step = BURST_STEP * speed * ACTIVE_SPEED;
        let timer = timer + step;
        self.offset_z += step;
        self.opacity = (1.0 - timer / BURST_DURATION).max(0.0);

        if timer >= BURST_DURATION {
            self.state = BurstState::Idle;
            self.opacity = 0.0;
            self.offset_z = 0.0;
        } else {
            self.state = BurstState::Active { timer };
        }
    }
}
